//! Bidirectional GPIO for the RP2040

use core::convert::Infallible;

use embassy_rp::gpio::{Flex, Pin, Pull};
use embassy_rp::Peri;
use embedded_hal::digital::{ErrorType, InputPin, OutputPin};
use tm1637_hal::FlexPin;

/// RP2040 GPIO that can switch between driving and sensing its line
pub struct RpFlexPin<'d> {
    pin: Flex<'d>,
}

impl<'d> RpFlexPin<'d> {
    /// Take a GPIO with the internal pull-up enabled
    pub fn new(pin: Peri<'d, impl Pin>) -> Self {
        let mut pin = Flex::new(pin);
        pin.set_pull(Pull::Up);
        Self { pin }
    }
}

impl ErrorType for RpFlexPin<'_> {
    type Error = Infallible;
}

impl OutputPin for RpFlexPin<'_> {
    fn set_low(&mut self) -> Result<(), Infallible> {
        self.pin.set_low();
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Infallible> {
        self.pin.set_high();
        Ok(())
    }
}

impl InputPin for RpFlexPin<'_> {
    fn is_high(&mut self) -> Result<bool, Infallible> {
        Ok(self.pin.is_high())
    }

    fn is_low(&mut self) -> Result<bool, Infallible> {
        Ok(self.pin.is_low())
    }
}

impl FlexPin for RpFlexPin<'_> {
    fn configure_output(&mut self) -> Result<(), Infallible> {
        self.pin.set_as_output();
        Ok(())
    }

    fn configure_input(&mut self) -> Result<(), Infallible> {
        self.pin.set_as_input();
        Ok(())
    }
}
