//! Unit types: Dp, Sp, and conversions

/// Density-independent pixels
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Dp(pub f32);

impl Dp {
    pub fn to_px(&self, density: Density) -> f32 {
        self.0 * density.density
    }
}

/// Scale-independent pixels (for text)
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Sp(pub f32);

impl Sp {
    pub fn to_px(&self, density: Density) -> f32 {
        self.0 * density.density * density.font_scale
    }
}

/// Display density used to convert [`Dp`] and [`Sp`] into pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Density {
    pub density: f32,
    pub font_scale: f32,
}

impl Density {
    pub const fn new(density: f32, font_scale: f32) -> Self {
        Self {
            density,
            font_scale,
        }
    }
}

impl Default for Density {
    fn default() -> Self {
        Self::new(1.0, 1.0)
    }
}
