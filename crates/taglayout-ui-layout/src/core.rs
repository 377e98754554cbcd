//! Core layout traits and types shared by the tag container and its children.

use std::ops::Range;

use crate::measure_spec::{LayoutParams, MeasureSpec};
use smallvec::SmallVec;
use taglayout_ui_graphics::{DrawPrimitive, Rect, Size};

/// A leaf box a container can measure and place.
pub trait Element {
    /// Sizing intents and margins for this element.
    fn layout_params(&self) -> LayoutParams;

    /// Measures the element against per-axis specs and returns its size.
    ///
    /// `Exactly` must be matched, `AtMost` must not be exceeded and
    /// `Unspecified` yields the natural content size.
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Assigns the element's final bounds within its container.
    fn place(&mut self, bounds: Rect);

    /// Draw operations for the element's current bounds.
    fn draw(&self) -> Vec<DrawPrimitive> {
        Vec::new()
    }
}

/// Container capability that receives measure/layout callbacks from its host.
pub trait LayoutHost {
    /// Measures the container and its children, returning the container size.
    fn on_measure(&mut self, width: MeasureSpec, height: MeasureSpec) -> Size;

    /// Places every child using the result of the last [`LayoutHost::on_measure`].
    fn on_layout(&mut self);
}

/// Policy responsible for measuring and placing children.
pub trait MeasurePolicy {
    /// Runs the measurement pass with the provided children and specs.
    fn measure(
        &self,
        children: &[Box<dyn Element>],
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> MeasureResult;

    fn debug_name(&self) -> &str;
}

/// Result of a measurement operation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MeasureResult {
    pub size: Size,
    pub placements: Vec<Placement>,
    pub lines: SmallVec<[FlowLine; 4]>,
}

impl MeasureResult {
    pub fn new(size: Size, placements: Vec<Placement>, lines: SmallVec<[FlowLine; 4]>) -> Self {
        Self {
            size,
            placements,
            lines,
        }
    }

    /// Returns the row holding the child at `index`.
    pub fn line_of(&self, index: usize) -> Option<&FlowLine> {
        self.lines.iter().find(|line| line.range.contains(&index))
    }
}

/// Content-box rectangle computed for a child during one pass.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Placement {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl Placement {
    pub fn new(left: f32, top: f32, size: Size) -> Self {
        Self {
            left,
            top,
            right: left + size.width,
            bottom: top + size.height,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }

    pub fn rect(&self) -> Rect {
        Rect::from_ltrb(self.left, self.top, self.right, self.bottom)
    }
}

/// One row of a flow layout.
#[derive(Clone, Debug, PartialEq)]
pub struct FlowLine {
    /// Indices of the children on this row.
    pub range: Range<usize>,
    /// Offset of the row's top edge from the content origin.
    pub top: f32,
    /// Tallest child on the row, margins included.
    pub height: f32,
    /// Horizontal extent used by the row, margins included.
    pub width: f32,
}
