//! Display abstraction traits
//!
//! These traits define the interface between application code and a
//! segment display driver.

pub mod display;

pub use display::{SegmentDisplay, SegmentDisplayExt};
