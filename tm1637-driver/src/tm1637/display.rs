//! TM1637 device handle
//!
//! A raw segment write is three transactions:
//!
//! ```text
//! [start] 0x44                 [stop]   fixed-address write mode
//! [start] 0xC0|pos  bitmap     [stop]   address + segment data
//! [start] 0x88|brightness      [stop]   display on, brightness
//! ```
//!
//! Brightness therefore only reaches the hardware with the next write.

use tm1637_core::command;
use tm1637_core::traits::SegmentDisplay;
use tm1637_core::{Brightness, DisplayConfig};
use tm1637_hal::{DelayNs, FlexPin};

use super::bus::Bus;

/// Errors that can occur when driving the display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A GPIO operation failed
    Pin(E),
    /// Write addressed a position beyond the configured digit count
    InvalidPosition(u8),
}

impl<E> From<E> for Error<E> {
    fn from(err: E) -> Self {
        Error::Pin(err)
    }
}

/// One attached TM1637 display
///
/// Owns both pins and the delay for its whole lifetime; hand them back
/// with [`Tm1637::release`]. Number and float output comes from
/// [`SegmentDisplayExt`](tm1637_core::traits::SegmentDisplayExt).
pub struct Tm1637<CLK, DIO, D> {
    bus: Bus<CLK, DIO, D>,
    brightness: Brightness,
    digits: u8,
    /// Bytes the controller did not acknowledge
    missed_acks: u32,
}

impl<CLK, DIO, D, E> Tm1637<CLK, DIO, D>
where
    CLK: FlexPin<Error = E>,
    DIO: FlexPin<Error = E>,
    D: DelayNs,
{
    /// Initialize the display
    ///
    /// Configures both pins as outputs and leaves the bus idle. Nothing is
    /// shown until the first write.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Pin`] if a pin cannot be configured or driven.
    pub fn new(clk: CLK, dio: DIO, delay: D, config: &DisplayConfig) -> Result<Self, Error<E>> {
        let mut bus = Bus::new(clk, dio, delay, config.bit_delay_us);
        bus.init()?;

        let display = Self {
            bus,
            brightness: config.brightness(),
            digits: config.digit_count(),
            missed_acks: 0,
        };

        #[cfg(feature = "defmt")]
        defmt::debug!(
            "TM1637 ready: {} digits, brightness {}, {}us bit delay",
            display.digits,
            display.brightness.get(),
            config.bit_delay_us
        );

        Ok(display)
    }

    /// Number of bytes the controller has not acknowledged so far
    ///
    /// Missing acknowledges never fail a write; this is a wiring diagnostic.
    pub fn missed_acks(&self) -> u32 {
        self.missed_acks
    }

    /// Write consecutive positions in one address-auto-increment burst
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPosition`] with the first position past the
    /// display if `start` or the run does not fit, before anything is sent.
    /// An empty run at a valid position sends nothing.
    pub fn write_segments(&mut self, start: u8, bitmaps: &[u8]) -> Result<(), Error<E>> {
        let end = usize::from(start) + bitmaps.len();
        if start >= self.digits || end > usize::from(self.digits) {
            return Err(Error::InvalidPosition(start.max(self.digits)));
        }
        if bitmaps.is_empty() {
            return Ok(());
        }

        self.transaction([command::DATA_AUTO_INCREMENT])?;
        self.transaction(
            core::iter::once(command::address(start)).chain(bitmaps.iter().copied()),
        )?;
        self.transaction([command::display_control(self.brightness)])
    }

    /// Release the pins and delay
    pub fn release(self) -> (CLK, DIO, D) {
        self.bus.release()
    }

    fn transaction(&mut self, bytes: impl IntoIterator<Item = u8>) -> Result<(), Error<E>> {
        let missed = self.bus.transaction(bytes)?;
        if missed > 0 {
            self.missed_acks = self.missed_acks.saturating_add(missed);

            #[cfg(feature = "defmt")]
            defmt::warn!("TM1637 did not acknowledge {} byte(s)", missed);
        }
        Ok(())
    }
}

impl<CLK, DIO, D, E> SegmentDisplay for Tm1637<CLK, DIO, D>
where
    CLK: FlexPin<Error = E>,
    DIO: FlexPin<Error = E>,
    D: DelayNs,
{
    type Error = Error<E>;

    fn digit_count(&self) -> u8 {
        self.digits
    }

    fn set_brightness(&mut self, level: u8) {
        self.brightness = Brightness::new(level);
    }

    fn brightness(&self) -> Brightness {
        self.brightness
    }

    fn write_segment_raw(&mut self, position: u8, bitmap: u8) -> Result<(), Error<E>> {
        if position >= self.digits {
            return Err(Error::InvalidPosition(position));
        }

        #[cfg(feature = "defmt")]
        defmt::trace!("TM1637 grid {} <- {=u8:#x}", position, bitmap);

        self.transaction([command::DATA_FIXED_ADDRESS])?;
        self.transaction([command::address(position), bitmap])?;
        self.transaction([command::display_control(self.brightness)])
    }
}
