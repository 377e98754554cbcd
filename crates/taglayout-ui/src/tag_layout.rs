//! Container that wraps its tags onto successive rows.

use taglayout_ui_graphics::{DrawPrimitive, EdgeInsets, Point, Size};
use taglayout_ui_layout::{
    Element, FlowMeasurePolicy, LayoutHost, MeasurePolicy, MeasureResult, MeasureSpec,
};

/// Ordered collection of elements laid out by [`FlowMeasurePolicy`].
///
/// The host drives it through [`LayoutHost`]: `on_measure` computes and keeps
/// the row layout, `on_layout` hands each child its rectangle. Adding a child
/// drops the kept result, so `on_layout` is a no-op until the next measure.
pub struct TagLayout {
    children: Vec<Box<dyn Element>>,
    padding: EdgeInsets,
    policy: FlowMeasurePolicy,
    last_result: Option<MeasureResult>,
    measured_size: Size,
}

impl TagLayout {
    pub fn new() -> Self {
        Self {
            children: Vec::new(),
            padding: EdgeInsets::default(),
            policy: FlowMeasurePolicy::new(),
            last_result: None,
            measured_size: Size::ZERO,
        }
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding.non_negative();
        self.last_result = None;
        self
    }

    pub fn with_child(mut self, child: impl Element + 'static) -> Self {
        self.push(child);
        self
    }

    pub fn push(&mut self, child: impl Element + 'static) {
        self.children.push(Box::new(child));
        self.last_result = None;
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn children(&self) -> &[Box<dyn Element>] {
        &self.children
    }

    pub fn padding(&self) -> EdgeInsets {
        self.padding
    }

    /// Size reported by the last `on_measure`, padding included.
    pub fn measured_size(&self) -> Size {
        self.measured_size
    }

    /// Row layout computed by the last `on_measure`, in content coordinates.
    pub fn last_result(&self) -> Option<&MeasureResult> {
        self.last_result.as_ref()
    }

    /// Measures against an exact width and unbounded height, then places
    /// every child. Returns the container size.
    pub fn measure_and_place(&mut self, available_width: f32) -> Size {
        let size = self.on_measure(MeasureSpec::exactly(available_width), MeasureSpec::Unspecified);
        self.on_layout();
        size
    }

    /// Collects the draw primitives of every child in order.
    pub fn render(&self) -> Vec<DrawPrimitive> {
        self.children.iter().flat_map(|child| child.draw()).collect()
    }
}

impl Default for TagLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl LayoutHost for TagLayout {
    fn on_measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let padding = self.padding;
        let result = self.policy.measure(
            &self.children,
            width.deflate(padding.horizontal_sum()),
            height.deflate(padding.vertical_sum()),
        );

        // Content may be wider than the incoming spec; the size is not clamped.
        self.measured_size = Size::new(
            result.size.width + padding.horizontal_sum(),
            result.size.height + padding.vertical_sum(),
        );
        self.last_result = Some(result);
        self.measured_size
    }

    fn on_layout(&mut self) {
        let Some(result) = &self.last_result else {
            log::warn!("TagLayout::on_layout called without a current measure pass");
            return;
        };
        let origin = Point::new(self.padding.left, self.padding.top);
        self.policy.place(result, &mut self.children, origin);
    }
}

#[cfg(test)]
#[path = "tests/tag_layout_tests.rs"]
mod tests;
