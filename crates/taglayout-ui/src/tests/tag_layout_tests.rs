use super::*;
use crate::tag::{TagElement, TagStyle};
use taglayout_ui_graphics::Rect;
use taglayout_ui_layout::{ChildDimension, LayoutParams};

fn fixed_tag(width: f32, height: f32) -> TagElement {
    TagElement::with_style("tag", TagStyle::from_seed(0)).with_layout_params(LayoutParams::new(
        ChildDimension::Exact(width),
        ChildDimension::Exact(height),
    ))
}

fn tag_rects(layout: &TagLayout) -> Vec<Rect> {
    layout
        .render()
        .into_iter()
        .filter(|primitive| matches!(primitive, DrawPrimitive::RoundRect { .. }))
        .map(|primitive| primitive.rect())
        .collect()
}

#[test]
fn three_tags_wrap_after_two() {
    let mut layout = TagLayout::new()
        .with_child(fixed_tag(40.0, 20.0))
        .with_child(fixed_tag(40.0, 20.0))
        .with_child(fixed_tag(40.0, 20.0));

    let size = layout.measure_and_place(100.0);

    assert_eq!(size, Size::new(80.0, 40.0));
    assert_eq!(
        tag_rects(&layout),
        vec![
            Rect::from_ltrb(0.0, 0.0, 40.0, 20.0),
            Rect::from_ltrb(40.0, 0.0, 80.0, 20.0),
            Rect::from_ltrb(0.0, 20.0, 40.0, 40.0),
        ]
    );
    assert_eq!(layout.last_result().map(|result| result.lines.len()), Some(2));
}

#[test]
fn padding_offsets_children_and_grows_size() {
    let mut layout = TagLayout::new()
        .with_padding(EdgeInsets::uniform(10.0))
        .with_child(fixed_tag(40.0, 20.0))
        .with_child(fixed_tag(40.0, 20.0))
        .with_child(fixed_tag(40.0, 20.0));

    let size = layout.measure_and_place(120.0);

    assert_eq!(size, Size::new(100.0, 60.0));
    assert_eq!(layout.measured_size(), size);
    let rects = tag_rects(&layout);
    assert_eq!(rects[0], Rect::from_ltrb(10.0, 10.0, 50.0, 30.0));
    assert_eq!(rects[2], Rect::from_ltrb(10.0, 30.0, 50.0, 50.0));
}

#[test]
fn empty_layout_is_only_padding() {
    let mut layout = TagLayout::new();
    assert!(layout.is_empty());
    assert_eq!(layout.measure_and_place(100.0), Size::ZERO);

    let mut padded = TagLayout::new().with_padding(EdgeInsets::symmetric(4.0, 2.0));
    assert_eq!(padded.measure_and_place(100.0), Size::new(8.0, 4.0));
}

#[test]
fn oversized_tag_widens_container() {
    let mut layout = TagLayout::new().with_child(fixed_tag(150.0, 20.0));

    let size = layout.measure_and_place(100.0);

    assert_eq!(size, Size::new(150.0, 20.0));
    assert_eq!(tag_rects(&layout), vec![Rect::from_ltrb(0.0, 0.0, 150.0, 20.0)]);
}

#[test]
fn natural_tags_wrap_by_content_width() {
    let mut layout = TagLayout::new();
    for _ in 0..3 {
        layout.push(TagElement::with_style("abc", TagStyle::from_seed(0)));
    }

    let size = layout.measure_and_place(150.0);

    assert_eq!(layout.len(), 3);
    assert_eq!(size, Size::new(112.0, 72.0));
    assert_eq!(tag_rects(&layout)[2], Rect::from_ltrb(0.0, 36.0, 56.0, 72.0));
}

#[test]
fn fill_tag_under_at_most_keeps_content_width() {
    let fill = LayoutParams::new(ChildDimension::FillAvailable, ChildDimension::FitContent);
    let mut layout = TagLayout::new()
        .with_child(TagElement::with_style("abc", TagStyle::from_seed(0)).with_layout_params(fill));

    let size = layout.on_measure(MeasureSpec::at_most(100.0), MeasureSpec::Unspecified);
    layout.on_layout();

    assert_eq!(size, Size::new(56.0, 36.0));
}

#[test]
fn layout_without_measure_places_nothing() {
    let mut layout = TagLayout::new().with_child(fixed_tag(40.0, 20.0));
    layout.on_layout();
    assert!(layout.render().is_empty());
}

#[test]
fn pushing_invalidates_previous_measure() {
    let mut layout = TagLayout::new().with_child(fixed_tag(40.0, 20.0));
    layout.measure_and_place(100.0);

    layout.push(fixed_tag(40.0, 20.0));
    assert!(layout.last_result().is_none());
    layout.on_layout();

    assert_eq!(tag_rects(&layout).len(), 1);
}

#[test]
fn relayout_keeps_geometry_and_style() {
    let mut layout = TagLayout::new();
    for word in ["rust", "layout", "flow", "tags", "wrap"] {
        layout.push(TagElement::new(word));
    }

    layout.measure_and_place(200.0);
    let first = layout.render();
    layout.measure_and_place(200.0);

    assert_eq!(layout.render(), first);
}
