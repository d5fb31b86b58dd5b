//! RP2040 glue for the TM1637 driver
//!
//! Wraps embassy-rp GPIO so a pin can be handed to [`tm1637_driver::Tm1637`]
//! and uses `embassy_time::Delay` for the bit timing.
//!
//! ```ignore
//! let p = embassy_rp::init(Default::default());
//! let mut display = tm1637_hal_rp2040::display(p.PIN_2, p.PIN_3, &DisplayConfig::default())?;
//! display.set_number(1234)?;
//! ```

#![no_std]

pub mod gpio;

use core::convert::Infallible;

use embassy_rp::gpio::Pin;
use embassy_rp::Peri;
use embassy_time::Delay;
use tm1637_core::DisplayConfig;
use tm1637_driver::{Error, Tm1637};

pub use gpio::RpFlexPin;

/// TM1637 on two RP2040 GPIOs
pub type Rp2040Display<'d> = Tm1637<RpFlexPin<'d>, RpFlexPin<'d>, Delay>;

/// Set up a display on the given CLK and DIO pins
///
/// Both pins get the internal pull-up so DIO reads high when the
/// controller releases it.
pub fn display<'d>(
    clk: Peri<'d, impl Pin>,
    dio: Peri<'d, impl Pin>,
    config: &DisplayConfig,
) -> Result<Rp2040Display<'d>, Error<Infallible>> {
    Tm1637::new(RpFlexPin::new(clk), RpFlexPin::new(dio), Delay, config)
}
