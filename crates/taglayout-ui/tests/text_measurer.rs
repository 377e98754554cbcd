//! Swapping the global text measurer changes how tags size themselves.
//!
//! Lives in its own test binary so the global swap cannot race the unit tests.

use taglayout_ui::{
    measure_text, set_text_measurer, Element, MeasureSpec, MonospacedTextMeasurer, Size,
    TagElement, TagStyle, TextMeasurer, TextMetrics,
};

struct FixedGlyphMeasurer;

impl TextMeasurer for FixedGlyphMeasurer {
    fn measure(&self, text: &str, font_size: f32) -> TextMetrics {
        TextMetrics {
            width: text.chars().count() as f32 * 10.0,
            height: font_size,
        }
    }
}

#[test]
fn installed_measurer_drives_tag_size() {
    let tag = TagElement::with_style("abc", TagStyle::from_seed(0));
    assert_eq!(tag.content_size(), Size::new(56.0, 36.0));

    set_text_measurer(FixedGlyphMeasurer);
    let custom = tag.content_size();
    let measured = tag.measure(MeasureSpec::Unspecified, MeasureSpec::Unspecified);
    assert_eq!(measure_text("abc", 16.0), TextMetrics { width: 30.0, height: 16.0 });

    set_text_measurer(MonospacedTextMeasurer);
    assert_eq!(custom, Size::new(62.0, 32.0));
    assert_eq!(measured, custom);
    assert_eq!(tag.content_size(), Size::new(56.0, 36.0));
}
