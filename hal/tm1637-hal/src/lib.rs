//! TM1637 Hardware Abstraction Layer
//!
//! This crate defines the capabilities the TM1637 driver consumes from the
//! host platform. Chip-specific crates implement them; the driver only ever
//! sees these traits.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Application (owns the display handle)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tm1637-driver / tm1637-core            │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  tm1637-hal (this crate - traits)       │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │  tm1637-hal-  │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::FlexPin`] - Digital line that can switch between input and output
//! - [`DelayNs`] - Blocking microsecond delay (re-exported from `embedded-hal`)

#![no_std]
#![deny(unsafe_code)]

pub mod gpio;

// Re-export key traits at crate root for convenience
pub use embedded_hal::delay::DelayNs;
pub use embedded_hal::digital::{InputPin, OutputPin};
pub use gpio::{FlexPin, PinMode};
