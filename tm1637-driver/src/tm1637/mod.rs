//! TM1637 protocol driver
//!
//! - [`bus`]: start/stop conditions and byte transfer with acknowledge
//! - [`display`]: the device handle and the command sequences built on the bus

mod bus;
mod display;

#[cfg(test)]
mod mock;

pub use display::{Error, Tm1637};
