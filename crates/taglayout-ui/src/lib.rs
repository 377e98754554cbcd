//! Tag widgets for TagLayout

mod tag;
mod tag_layout;
mod text;

pub use tag::*;
pub use tag_layout::*;
pub use text::*;

pub use taglayout_ui_graphics::{
    Brush, Color, CornerRadii, Density, DrawPrimitive, Dp, EdgeInsets, Point, Rect, Size, Sp,
};
pub use taglayout_ui_layout::{
    ChildDimension, Element, FlowLine, FlowMeasurePolicy, LayoutHost, LayoutParams,
    MeasurePolicy, MeasureResult, MeasureSpec, Placement,
};
