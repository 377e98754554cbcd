//! Pure math/data for drawing & units in TagLayout
//!
//! This crate contains geometry primitives, color definitions, brushes,
//! and unit types shared by the layout engine and the tag widgets.

mod brush;
mod color;
mod geometry;
mod unit;

pub use brush::*;
pub use color::*;
pub use geometry::*;
pub use unit::*;

#[cfg(test)]
#[path = "tests/geometry_tests.rs"]
mod tests;
