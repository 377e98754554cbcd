//! Pill-shaped text tag, the leaf element of a [`TagLayout`](crate::TagLayout).

use crate::text::measure_text;
use taglayout_ui_graphics::{
    Brush, Color, Density, DrawPrimitive, DrawScope, DrawScopeDefault, Dp, EdgeInsets, Rect,
    RoundedCornerShape, Size, Sp,
};
use taglayout_ui_layout::{Constraints, Element, LayoutParams, MeasureSpec};

pub const TAG_COLORS: [Color; 6] = [
    Color::RED,
    Color::BLUE,
    Color::CYAN,
    Color::GREEN,
    Color::YELLOW,
    Color::GRAY,
];
pub const TAG_TEXT_SIZES: [Sp; 3] = [Sp(16.0), Sp(22.0), Sp(28.0)];
pub const TAG_TEXT_COLOR: Color = Color::WHITE;
pub const TAG_CORNER_RADIUS: Dp = Dp(4.0);
pub const TAG_PADDING_X: Dp = Dp(16.0);
pub const TAG_PADDING_Y: Dp = Dp(8.0);

/// Background color and text size of a tag.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TagStyle {
    pub color: Color,
    pub text_size: Sp,
}

impl TagStyle {
    pub fn new(color: Color, text_size: Sp) -> Self {
        Self { color, text_size }
    }

    /// Picks a palette color and text size from the OS random source.
    pub fn random() -> Self {
        Self::from_seed(random_seed())
    }

    /// Deterministic pick: the low part of `seed` selects the color, the
    /// rest selects the text size.
    pub fn from_seed(seed: u32) -> Self {
        let colors = TAG_COLORS.len() as u32;
        let sizes = TAG_TEXT_SIZES.len() as u32;
        Self {
            color: TAG_COLORS[(seed % colors) as usize],
            text_size: TAG_TEXT_SIZES[((seed / colors) % sizes) as usize],
        }
    }
}

fn random_seed() -> u32 {
    getrandom::u32().unwrap_or_else(|err| {
        log::warn!("OS random source unavailable ({err}); using the default tag style");
        0
    })
}

/// A text label drawn on a rounded, colored background.
///
/// The style is chosen once when the tag is created and survives every
/// re-layout; only `bounds` changes between passes.
#[derive(Clone, Debug)]
pub struct TagElement {
    text: String,
    style: TagStyle,
    density: Density,
    params: LayoutParams,
    bounds: Option<Rect>,
}

impl TagElement {
    /// Creates a tag with a random style.
    pub fn new(text: impl Into<String>) -> Self {
        Self::with_style(text, TagStyle::random())
    }

    pub fn with_style(text: impl Into<String>, style: TagStyle) -> Self {
        Self {
            text: text.into(),
            style,
            density: Density::default(),
            params: LayoutParams::wrap_content(),
            bounds: None,
        }
    }

    pub fn with_density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    pub fn with_layout_params(mut self, params: LayoutParams) -> Self {
        self.params = params.with_margin(params.margin);
        self
    }

    pub fn with_margin(mut self, margin: EdgeInsets) -> Self {
        self.params = self.params.with_margin(margin);
        self
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn style(&self) -> TagStyle {
        self.style
    }

    /// Bounds assigned by the last placement pass.
    pub fn bounds(&self) -> Option<Rect> {
        self.bounds
    }

    fn padding_px(&self) -> (f32, f32) {
        (
            TAG_PADDING_X.to_px(self.density),
            TAG_PADDING_Y.to_px(self.density),
        )
    }

    fn font_size_px(&self) -> f32 {
        self.style.text_size.to_px(self.density)
    }

    /// Natural size: the text plus padding on every side.
    pub fn content_size(&self) -> Size {
        let metrics = measure_text(&self.text, self.font_size_px());
        let (padding_x, padding_y) = self.padding_px();
        Size::new(
            metrics.width + 2.0 * padding_x,
            metrics.height + 2.0 * padding_y,
        )
    }
}

impl Element for TagElement {
    fn layout_params(&self) -> LayoutParams {
        self.params
    }

    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Size {
        let content = self.content_size();
        Constraints::from_specs(width, height).constrain(content.width, content.height)
    }

    fn place(&mut self, bounds: Rect) {
        self.bounds = Some(bounds);
    }

    fn draw(&self) -> Vec<DrawPrimitive> {
        let Some(bounds) = self.bounds else {
            return Vec::new();
        };

        let mut scope = DrawScopeDefault::new(bounds);
        let radii = RoundedCornerShape::uniform(TAG_CORNER_RADIUS.to_px(self.density))
            .resolve(bounds.width, bounds.height);
        scope.draw_round_rect(Brush::solid(self.style.color), radii);

        // Text sits inside the padding and is clipped to the bounds.
        let font_size = self.font_size_px();
        let metrics = measure_text(&self.text, font_size);
        let (padding_x, padding_y) = self.padding_px();
        let text_rect = Rect {
            x: padding_x.min(bounds.width),
            y: padding_y.min(bounds.height),
            width: metrics
                .width
                .min((bounds.width - 2.0 * padding_x).max(0.0)),
            height: metrics
                .height
                .min((bounds.height - 2.0 * padding_y).max(0.0)),
        };
        scope.draw_text_at(text_rect, &self.text, TAG_TEXT_COLOR, font_size);

        scope.into_primitives()
    }
}

#[cfg(test)]
#[path = "tests/tag_tests.rs"]
mod tests;
