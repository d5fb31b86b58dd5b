//! Recording mocks for driver tests
//!
//! Both pins and the delay append to one shared log, so a test sees the
//! exact interleaving of line changes the controller would see.

use std::cell::RefCell;
use std::rc::Rc;
use std::vec::Vec;

use embedded_hal::digital::{ErrorKind, ErrorType, InputPin, OutputPin};
use tm1637_hal::{DelayNs, FlexPin, PinMode};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line {
    Clk,
    Dio,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Mode(Line, PinMode),
    Level(Line, bool),
    Delay(u32),
}

pub type Log = Rc<RefCell<Vec<Event>>>;

pub fn new_log() -> Log {
    Rc::new(RefCell::new(Vec::new()))
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MockError;

impl embedded_hal::digital::Error for MockError {
    fn kind(&self) -> ErrorKind {
        ErrorKind::Other
    }
}

pub struct MockPin {
    line: Line,
    log: Log,
    mode: PinMode,
    level: bool,
    /// Pull the line low whenever it is read as an input
    acknowledge: bool,
    fail_configure: bool,
    /// `set_low` calls that succeed before every further one fails
    lows_left: Option<u32>,
}

impl MockPin {
    pub fn new(line: Line, log: &Log) -> Self {
        Self {
            line,
            log: Rc::clone(log),
            mode: PinMode::Input,
            level: false,
            acknowledge: true,
            fail_configure: false,
            lows_left: None,
        }
    }

    /// Controller that never acknowledges
    pub fn without_ack(mut self) -> Self {
        self.acknowledge = false;
        self
    }

    /// Pin whose direction cannot be configured
    pub fn failing(mut self) -> Self {
        self.fail_configure = true;
        self
    }

    /// Pin that can be driven low `count` times, then fails
    pub fn failing_low_after(mut self, count: u32) -> Self {
        self.lows_left = Some(count);
        self
    }

    pub fn mode(&self) -> PinMode {
        self.mode
    }

    fn record(&self, event: Event) {
        self.log.borrow_mut().push(event);
    }

    fn set_mode(&mut self, mode: PinMode) -> Result<(), MockError> {
        if self.fail_configure {
            return Err(MockError);
        }
        self.mode = mode;
        self.record(Event::Mode(self.line, mode));
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = MockError;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), MockError> {
        if let Some(left) = self.lows_left.as_mut() {
            if *left == 0 {
                return Err(MockError);
            }
            *left -= 1;
        }
        self.level = false;
        self.record(Event::Level(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), MockError> {
        self.level = true;
        self.record(Event::Level(self.line, true));
        Ok(())
    }
}

impl InputPin for MockPin {
    fn is_high(&mut self) -> Result<bool, MockError> {
        match self.mode {
            PinMode::Input => Ok(!self.acknowledge),
            PinMode::Output => Ok(self.level),
        }
    }

    fn is_low(&mut self) -> Result<bool, MockError> {
        self.is_high().map(|high| !high)
    }
}

impl FlexPin for MockPin {
    fn configure_output(&mut self) -> Result<(), MockError> {
        self.set_mode(PinMode::Output)
    }

    fn configure_input(&mut self) -> Result<(), MockError> {
        self.set_mode(PinMode::Input)
    }
}

pub struct MockDelay {
    log: Log,
}

impl MockDelay {
    pub fn new(log: &Log) -> Self {
        Self {
            log: Rc::clone(log),
        }
    }
}

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.log.borrow_mut().push(Event::Delay(ns / 1000));
    }

    fn delay_us(&mut self, us: u32) {
        self.log.borrow_mut().push(Event::Delay(us));
    }
}

/// Rebuild the transactions a TM1637 would see from a recorded trace
///
/// The trace is assumed to begin on an idle bus (both lines high, DIO
/// driven), which is where init and every stop leave it. A trace that
/// includes init decodes the same, since init pulls CLK low first.
///
/// A transaction runs from a start condition (DIO falling while CLK is
/// high) to a stop condition (DIO rising while CLK is high). Bits are
/// sampled on CLK rising edges while the host drives DIO, LSB first.
pub fn decode(events: &[Event]) -> Vec<Vec<u8>> {
    let (mut clk, mut dio, mut dio_driven) = (true, true, true);
    let mut bits: Option<Vec<bool>> = None;
    let mut transactions = Vec::new();

    for event in events {
        match *event {
            Event::Mode(Line::Dio, mode) => dio_driven = mode == PinMode::Output,
            Event::Level(Line::Clk, high) => {
                if high && !clk && dio_driven {
                    if let Some(bits) = bits.as_mut() {
                        bits.push(dio);
                    }
                }
                clk = high;
            }
            Event::Level(Line::Dio, high) => {
                if clk && dio_driven {
                    if dio && !high {
                        bits = Some(Vec::new());
                    } else if !dio && high {
                        if let Some(done) = bits.take() {
                            transactions.push(to_bytes(&done));
                        }
                    }
                }
                dio = high;
            }
            Event::Mode(Line::Clk, _) | Event::Delay(_) => {}
        }
    }
    transactions
}

/// Pack LSB-first bits into bytes, dropping the clock edge of the stop condition
fn to_bytes(bits: &[bool]) -> Vec<u8> {
    bits.chunks_exact(8)
        .map(|byte| {
            byte.iter()
                .rev()
                .fold(0u8, |acc, &bit| (acc << 1) | u8::from(bit))
        })
        .collect()
}
