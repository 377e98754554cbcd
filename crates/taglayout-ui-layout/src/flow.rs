//! Flow layout: children are laid out left-to-right and wrap onto a new row
//! when the current one runs out of width.

use crate::core::{Element, FlowLine, MeasurePolicy, MeasureResult, Placement};
use crate::measure_spec::{LayoutParams, MeasureSpec};
use smallvec::SmallVec;
use taglayout_ui_graphics::{EdgeInsets, Point, Size};

/// MeasurePolicy that wraps children onto successive rows.
///
/// The pass is a single forward walk over the children in order:
///
/// 1. Each child is measured against the width left on the current row
///    (minus its horizontal margins) and the container's full height spec
///    (minus its vertical margins). Rows never constrain each other's height.
/// 2. If the row already holds something and the child's outer width would
///    reach the available width, the row is committed and the child is
///    measured again against an empty row.
/// 3. The child's content box starts at its left/top margin inside the row.
///
/// A child wider than the container still gets placed, alone on its row, and
/// the reported width grows past the available width to contain it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct FlowMeasurePolicy;

/// Accumulators for one measurement pass.
#[derive(Default)]
struct FlowState {
    line_width_used: f32,
    height_used: f32,
    line_max_width: f32,
    line_max_height: f32,
    line_start: usize,
}

impl FlowState {
    fn commit_line(&mut self, end: usize, lines: &mut SmallVec<[FlowLine; 4]>) {
        lines.push(FlowLine {
            range: self.line_start..end,
            top: self.height_used,
            height: self.line_max_height,
            width: self.line_width_used,
        });
        self.height_used += self.line_max_height;
        self.line_max_height = 0.0;
        self.line_width_used = 0.0;
        self.line_start = end;
    }
}

impl FlowMeasurePolicy {
    pub fn new() -> Self {
        Self
    }

    fn measure_child(
        child: &dyn Element,
        params: &LayoutParams,
        margin: EdgeInsets,
        width: MeasureSpec,
        height: MeasureSpec,
        line_width_used: f32,
    ) -> Size {
        let child_width = width.child_spec(margin.horizontal_sum() + line_width_used, params.width);
        let child_height = height.child_spec(margin.vertical_sum(), params.height);
        let size = child.measure(child_width, child_height);
        Size::new(size.width.max(0.0), size.height.max(0.0))
    }

    /// Placement pass: hands every child its rectangle from `result`,
    /// offset by `origin`.
    pub fn place(&self, result: &MeasureResult, children: &mut [Box<dyn Element>], origin: Point) {
        if result.placements.len() != children.len() {
            log::warn!(
                "{}: placing {} children with {} placements; children changed since measure",
                self.debug_name(),
                children.len(),
                result.placements.len()
            );
        }
        for (child, placement) in children.iter_mut().zip(&result.placements) {
            child.place(placement.rect().translate(origin.x, origin.y));
        }
    }
}

impl MeasurePolicy for FlowMeasurePolicy {
    fn measure(
        &self,
        children: &[Box<dyn Element>],
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> MeasureResult {
        if children.is_empty() {
            return MeasureResult::default();
        }

        let available_width = width.max_size().max(0.0);
        let mut state = FlowState::default();
        let mut placements = Vec::with_capacity(children.len());
        let mut lines: SmallVec<[FlowLine; 4]> = SmallVec::new();

        for (index, child) in children.iter().enumerate() {
            let params = child.layout_params();
            let margin = params.margin.non_negative();
            let mut size = Self::measure_child(
                child.as_ref(),
                &params,
                margin,
                width,
                height,
                state.line_width_used,
            );

            let outer_width = size.width + margin.horizontal_sum();
            if state.line_width_used > 0.0
                && state.line_width_used + outer_width >= available_width
            {
                log::trace!(
                    "wrapping child {index} ({outer_width} wide) after {} of {available_width}",
                    state.line_width_used
                );
                state.commit_line(index, &mut lines);
                // The child gets another chance against the empty row.
                size = Self::measure_child(child.as_ref(), &params, margin, width, height, 0.0);
            }

            let outer_width = size.width + margin.horizontal_sum();
            if state.line_width_used == 0.0 && outer_width > available_width {
                log::debug!(
                    "child {index} is {outer_width} wide, wider than the available {available_width}"
                );
            }

            placements.push(Placement::new(
                state.line_width_used + margin.left,
                state.height_used + margin.top,
                size,
            ));

            state.line_max_height = state
                .line_max_height
                .max(size.height + margin.vertical_sum());
            state.line_width_used += outer_width;
            state.line_max_width = state.line_max_width.max(state.line_width_used);
        }
        state.commit_line(children.len(), &mut lines);

        // commit_line already folded the last row's height into height_used.
        let size = Size::new(state.line_max_width, state.height_used);
        log::debug!(
            "{}: {} children in {} rows, {}x{} (available width {available_width})",
            self.debug_name(),
            children.len(),
            lines.len(),
            size.width,
            size.height
        );

        MeasureResult::new(size, placements, lines)
    }

    fn debug_name(&self) -> &str {
        "FlowMeasurePolicy"
    }
}

#[cfg(test)]
#[path = "tests/flow_tests.rs"]
mod tests;
