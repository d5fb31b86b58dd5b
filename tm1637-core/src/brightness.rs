//! Display brightness

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Brightness level of the display, clamped to 0-7
///
/// The TM1637 encodes brightness as the low three bits of the display
/// control command, so anything above 7 saturates at 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Brightness(u8);

impl Brightness {
    /// Dimmest setting (display still on)
    pub const MIN: Self = Self(0);

    /// Brightest setting
    pub const MAX: Self = Self(7);

    /// Create a brightness level, clamping values above 7 to 7
    pub const fn new(level: u8) -> Self {
        if level > Self::MAX.0 {
            Self::MAX
        } else {
            Self(level)
        }
    }

    /// Get the raw level (0-7)
    pub const fn get(self) -> u8 {
        self.0
    }
}

impl Default for Brightness {
    fn default() -> Self {
        Self::MAX
    }
}

impl From<u8> for Brightness {
    fn from(level: u8) -> Self {
        Self::new(level)
    }
}
