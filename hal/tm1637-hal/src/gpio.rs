//! GPIO pin abstractions
//!
//! The TM1637 data line is bidirectional: the host drives it while clocking
//! bits out, then releases it so the controller can pull it low as an
//! acknowledge. [`FlexPin`] adds that direction switch on top of the
//! `embedded-hal` digital traits.

use embedded_hal::digital::{InputPin, OutputPin};

/// Direction of a GPIO line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PinMode {
    /// Push-pull output driven by the host
    Output,
    /// High-impedance input sampled by the host
    Input,
}

/// Pin whose direction can be changed at runtime
///
/// Implementations wrap the chip's flexible GPIO type. Level control and
/// sampling come from the `embedded-hal` supertraits, so `Self::Error` is
/// shared by every operation.
pub trait FlexPin: OutputPin + InputPin {
    /// Configure the pin as a digital output
    fn configure_output(&mut self) -> Result<(), Self::Error>;

    /// Configure the pin as a digital input
    fn configure_input(&mut self) -> Result<(), Self::Error>;

    /// Configure the pin for the given direction
    fn configure(&mut self, mode: PinMode) -> Result<(), Self::Error> {
        match mode {
            PinMode::Output => self.configure_output(),
            PinMode::Input => self.configure_input(),
        }
    }

    /// Drive the pin to a specific level (true = high)
    fn set_level(&mut self, high: bool) -> Result<(), Self::Error> {
        if high {
            self.set_high()
        } else {
            self.set_low()
        }
    }
}
