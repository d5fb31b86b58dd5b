//! Board-agnostic logic for TM1637 7-segment displays
//!
//! This crate contains everything that does not touch a GPIO line:
//!
//! - Segment encoding (glyph table, dots, integer and float layouts)
//! - Brightness levels and protocol command bytes
//! - Display configuration types
//! - The [`SegmentDisplay`](traits::SegmentDisplay) trait implemented by drivers,
//!   with number/float helpers layered on top

#![no_std]
#![deny(unsafe_code)]

pub mod brightness;
pub mod command;
pub mod config;
pub mod segment;
pub mod traits;

pub use brightness::Brightness;
pub use config::DisplayConfig;
