use std::sync::{OnceLock, PoisonError, RwLock};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextMetrics {
    pub width: f32,
    pub height: f32,
}

pub trait TextMeasurer: Send + Sync + 'static {
    /// Measures `text` rendered at `font_size` pixels.
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics;
}

/// Default measurer: every character is half the font size wide and each
/// line is 1.25 font sizes tall.
#[derive(Clone, Copy, Debug, Default)]
pub struct MonospacedTextMeasurer;

impl MonospacedTextMeasurer {
    const CHAR_WIDTH_RATIO: f32 = 0.5;
    const LINE_HEIGHT_RATIO: f32 = 1.25;
}

impl TextMeasurer for MonospacedTextMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        let font_size = font_size.max(0.0);
        let char_width = font_size * Self::CHAR_WIDTH_RATIO;
        let line_height = font_size * Self::LINE_HEIGHT_RATIO;

        // Split by newlines to handle multiline
        let lines: Vec<&str> = text.split('\n').collect();
        let line_count = lines.len().max(1);

        // Width is the max width of any line
        let width = lines
            .iter()
            .map(|line| line.chars().count() as f32 * char_width)
            .fold(0.0_f32, f32::max);

        TextMetrics {
            width,
            height: line_count as f32 * line_height,
        }
    }
}

fn global_text_measurer() -> &'static RwLock<Box<dyn TextMeasurer>> {
    static TEXT_MEASURER: OnceLock<RwLock<Box<dyn TextMeasurer>>> = OnceLock::new();
    TEXT_MEASURER.get_or_init(|| RwLock::new(Box::new(MonospacedTextMeasurer)))
}

/// Replaces the measurer used by every tag from now on.
pub fn set_text_measurer<M: TextMeasurer>(measurer: M) {
    let mut guard = global_text_measurer()
        .write()
        .unwrap_or_else(PoisonError::into_inner);
    *guard = Box::new(measurer);
}

pub fn measure_text(text: &str, font_size: f32) -> TextMetrics {
    global_text_measurer()
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .measure(text, font_size)
}
