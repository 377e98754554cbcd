//! Layout constraints system

use crate::measure_spec::MeasureSpec;
use taglayout_ui_graphics::Size;

/// Min/max box an element's measured size has to fit in.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Constraints {
    pub min_width: f32,
    pub max_width: f32,
    pub min_height: f32,
    pub max_height: f32,
}

impl Constraints {
    /// Converts a pair of per-axis specs into a min/max box.
    pub fn from_specs(width: MeasureSpec, height: MeasureSpec) -> Self {
        let (min_width, max_width) = Self::axis_bounds(width);
        let (min_height, max_height) = Self::axis_bounds(height);
        Self {
            min_width,
            max_width,
            min_height,
            max_height,
        }
    }

    fn axis_bounds(spec: MeasureSpec) -> (f32, f32) {
        match spec {
            MeasureSpec::Exactly(size) => {
                let size = size.max(0.0);
                (size, size)
            }
            MeasureSpec::AtMost(size) => (0.0, size.max(0.0)),
            MeasureSpec::Unspecified => (0.0, f32::INFINITY),
        }
    }

    /// Constrains the provided width and height to fit within these constraints.
    pub fn constrain(&self, width: f32, height: f32) -> Size {
        Size::new(
            width.clamp(self.min_width, self.max_width),
            height.clamp(self.min_height, self.max_height),
        )
    }
}

#[cfg(test)]
#[path = "tests/constraints_tests.rs"]
mod tests;
