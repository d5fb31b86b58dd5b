//! Bit-level CLK/DIO signalling
//!
//! Timing profile used throughout:
//!
//! ```text
//! idle   CLK ‾‾‾‾‾   DIO ‾‾‾‾‾
//! start  CLK ‾‾‾‾‾   DIO ‾‾\__          (DIO falls while CLK high)
//! bit    CLK \__/‾   DIO =X===          (DIO changes while CLK low, LSB first)
//! ack    CLK \__/‾\_ DIO released, controller pulls it low
//! stop   CLK __/‾‾   DIO __/‾           (CLK rises, then DIO rises)
//! ```
//!
//! Start only drops DIO: it relies on the bus being idle (both lines high),
//! which init and every stop leave it in.

use tm1637_hal::{DelayNs, FlexPin, PinMode};

/// Two-wire bus to one controller
pub(crate) struct Bus<CLK, DIO, D> {
    clk: CLK,
    dio: DIO,
    delay: D,
    /// Settle time between any two line transitions
    bit_delay_us: u32,
}

impl<CLK, DIO, D, E> Bus<CLK, DIO, D>
where
    CLK: FlexPin<Error = E>,
    DIO: FlexPin<Error = E>,
    D: DelayNs,
{
    pub(crate) fn new(clk: CLK, dio: DIO, delay: D, bit_delay_us: u32) -> Self {
        Self {
            clk,
            dio,
            delay,
            bit_delay_us,
        }
    }

    /// Configure both lines as outputs and bring the bus to idle
    pub(crate) fn init(&mut self) -> Result<(), E> {
        // CLK stays low while DIO comes up so no start condition is produced
        self.clk.configure(PinMode::Output)?;
        self.clk.set_low()?;
        self.settle();
        self.dio.configure(PinMode::Output)?;
        self.dio.set_high()?;
        self.settle();
        self.clk.set_high()?;
        self.settle();
        Ok(())
    }

    fn settle(&mut self) {
        self.delay.delay_us(self.bit_delay_us);
    }

    /// Start condition
    pub(crate) fn start(&mut self) -> Result<(), E> {
        self.dio.set_low()?;
        self.settle();
        Ok(())
    }

    /// Stop condition, leaves the bus idle
    pub(crate) fn stop(&mut self) -> Result<(), E> {
        self.dio.set_low()?;
        self.settle();
        self.clk.set_high()?;
        self.settle();
        self.dio.set_high()?;
        self.settle();
        Ok(())
    }

    /// Clock one byte out, LSB first, then run the acknowledge clock
    ///
    /// Returns whether the controller acknowledged. DIO is an input for the
    /// acknowledge clock and an output again on return.
    pub(crate) fn write_byte(&mut self, byte: u8) -> Result<bool, E> {
        let mut bits = byte;
        for _ in 0..8 {
            self.clk.set_low()?;
            self.settle();
            self.dio.set_level(bits & 0x01 != 0)?;
            self.settle();
            self.clk.set_high()?;
            self.settle();
            bits >>= 1;
        }

        self.dio.configure(PinMode::Input)?;
        let acked = self.ack_clock();
        // DIO goes back to output even when the acknowledge clock failed
        let restored = self.dio.configure(PinMode::Output);
        let acked = acked?;
        restored?;

        Ok(acked)
    }

    /// Ninth clock, with DIO released
    ///
    /// The controller holds DIO low from the 8th falling edge to the 9th.
    fn ack_clock(&mut self) -> Result<bool, E> {
        self.clk.set_low()?;
        self.settle();
        let acked = self.dio.is_low()?;
        self.clk.set_high()?;
        self.settle();
        self.clk.set_low()?;
        self.settle();
        Ok(acked)
    }

    /// Send `bytes` bracketed by start and stop
    ///
    /// Returns the number of bytes that were not acknowledged.
    pub(crate) fn transaction(&mut self, bytes: impl IntoIterator<Item = u8>) -> Result<u32, E> {
        self.start()?;
        let mut missed = 0;
        for byte in bytes {
            if !self.write_byte(byte)? {
                missed += 1;
            }
        }
        self.stop()?;
        Ok(missed)
    }

    /// Give back the pins and delay
    pub(crate) fn release(self) -> (CLK, DIO, D) {
        (self.clk, self.dio, self.delay)
    }
}
