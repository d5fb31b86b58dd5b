//! TM1637 display driver
//!
//! This crate drives TM1637 7-segment modules over their two-wire CLK/DIO
//! interface. The bus looks like I2C but is not: there is no device
//! address, bytes go out least-significant bit first, and the controller
//! acknowledges every byte by pulling DIO low for one clock.
//!
//! The driver is blocking and single-owner. Every write runs to completion
//! on the calling thread, paced only by the configured settle delay; share
//! a handle between tasks only behind external mutual exclusion.
//!
//! ```ignore
//! use tm1637_driver::{Tm1637, SegmentDisplay, SegmentDisplayExt};
//!
//! let mut display = Tm1637::new(clk, dio, delay, &DisplayConfig::default())?;
//! display.set_brightness(3);
//! display.set_number_lead_dot(1230, true, 0x04)?; // "12:30"
//! display.set_float(-1.5)?;                      // "-1.50"
//! ```

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod tm1637;

pub use tm1637::{Error, Tm1637};
pub use tm1637_core::traits::{SegmentDisplay, SegmentDisplayExt};
pub use tm1637_core::{Brightness, DisplayConfig};
