//! Display configuration
//!
//! Runtime settings for one attached display. Pins are not part of the
//! config: the caller hands already-claimed pin objects to the driver.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::Brightness;

/// Grids a TM1637 can drive
pub const MAX_DIGITS: u8 = 6;

/// Grids on the common 4-digit modules
pub const DEFAULT_DIGITS: u8 = 4;

/// Default settle time between two line transitions, in microseconds
pub const DEFAULT_BIT_DELAY_US: u32 = 50;

/// Configuration for one display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Initial brightness (0-7, clamped)
    pub brightness: u8,
    /// Settle delay between line transitions in microseconds
    ///
    /// Too short and the controller misses edges; longer only slows
    /// refresh.
    pub bit_delay_us: u32,
    /// Number of digit positions on the module (1-6, clamped)
    pub digits: u8,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            brightness: Brightness::MAX.get(),
            bit_delay_us: DEFAULT_BIT_DELAY_US,
            digits: DEFAULT_DIGITS,
        }
    }
}

impl DisplayConfig {
    /// Set the initial brightness
    pub const fn with_brightness(mut self, level: u8) -> Self {
        self.brightness = level;
        self
    }

    /// Set the settle delay
    pub const fn with_bit_delay_us(mut self, us: u32) -> Self {
        self.bit_delay_us = us;
        self
    }

    /// Set the number of digit positions
    pub const fn with_digits(mut self, digits: u8) -> Self {
        self.digits = digits;
        self
    }

    /// Initial brightness as a clamped level
    pub const fn brightness(&self) -> Brightness {
        Brightness::new(self.brightness)
    }

    /// Digit count clamped to 1..=6
    pub fn digit_count(&self) -> u8 {
        self.digits.clamp(1, MAX_DIGITS)
    }
}
