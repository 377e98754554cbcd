//! Layout contracts & policies for TagLayout

mod constraints;
mod core;
mod flow;
mod measure_spec;

pub use constraints::*;
pub use core::*;
pub use flow::*;
pub use measure_spec::*;
