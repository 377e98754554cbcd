//! Per-axis measurement specs and the child sizing intents they are resolved against.

use taglayout_ui_graphics::EdgeInsets;

/// Requirement a parent imposes on one axis of a child.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeasureSpec {
    /// The child must be exactly this size.
    Exactly(f32),
    /// The child may be any size up to this one.
    AtMost(f32),
    /// The parent imposes nothing; the child reports its natural size.
    Unspecified,
}

impl MeasureSpec {
    pub fn exactly(size: f32) -> Self {
        Self::Exactly(size.max(0.0))
    }

    pub fn at_most(size: f32) -> Self {
        Self::AtMost(size.max(0.0))
    }

    /// Size carried by the spec, `0` when unspecified.
    pub fn size(&self) -> f32 {
        match *self {
            MeasureSpec::Exactly(size) | MeasureSpec::AtMost(size) => size,
            MeasureSpec::Unspecified => 0.0,
        }
    }

    /// Upper bound implied by the spec, infinite when unspecified.
    pub fn max_size(&self) -> f32 {
        match *self {
            MeasureSpec::Exactly(size) | MeasureSpec::AtMost(size) => size,
            MeasureSpec::Unspecified => f32::INFINITY,
        }
    }

    /// Removes `amount` of space from the spec without changing its mode.
    pub fn deflate(self, amount: f32) -> Self {
        match self {
            MeasureSpec::Exactly(size) => MeasureSpec::exactly(size - amount),
            MeasureSpec::AtMost(size) => MeasureSpec::at_most(size - amount),
            MeasureSpec::Unspecified => MeasureSpec::Unspecified,
        }
    }

    /// Resolves the spec handed to a child that wants `dimension`, after
    /// `consumed` of this spec's space is already taken by padding, margins
    /// and siblings.
    pub fn child_spec(self, consumed: f32, dimension: ChildDimension) -> MeasureSpec {
        let available = (self.size() - consumed).max(0.0);
        match (self, dimension) {
            (_, ChildDimension::Exact(size)) => MeasureSpec::exactly(size),
            (MeasureSpec::Exactly(_), ChildDimension::FillAvailable) => {
                MeasureSpec::Exactly(available)
            }
            (MeasureSpec::Exactly(_), ChildDimension::FitContent)
            | (MeasureSpec::AtMost(_), ChildDimension::FillAvailable)
            | (MeasureSpec::AtMost(_), ChildDimension::FitContent) => {
                MeasureSpec::AtMost(available)
            }
            (MeasureSpec::Unspecified, _) => MeasureSpec::Unspecified,
        }
    }

    /// Picks the size a child should report for a natural size of `desired`.
    pub fn resolve_size(self, desired: f32) -> f32 {
        let desired = desired.max(0.0);
        match self {
            MeasureSpec::Exactly(size) => size,
            MeasureSpec::AtMost(size) => desired.min(size),
            MeasureSpec::Unspecified => desired,
        }
    }
}

/// Sizing intent a child expresses along one axis.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ChildDimension {
    Exact(f32),
    FillAvailable,
    FitContent,
}

/// Layout parameters an element exposes to its container.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LayoutParams {
    pub width: ChildDimension,
    pub height: ChildDimension,
    pub margin: EdgeInsets,
}

impl LayoutParams {
    pub fn new(width: ChildDimension, height: ChildDimension) -> Self {
        Self {
            width,
            height,
            margin: EdgeInsets::default(),
        }
    }

    /// Both axes sized to content, no margins.
    pub fn wrap_content() -> Self {
        Self::new(ChildDimension::FitContent, ChildDimension::FitContent)
    }

    pub fn with_margin(mut self, margin: EdgeInsets) -> Self {
        self.margin = margin.non_negative();
        self
    }
}

impl Default for LayoutParams {
    fn default() -> Self {
        Self::wrap_content()
    }
}

#[cfg(test)]
#[path = "tests/measure_spec_tests.rs"]
mod tests;
