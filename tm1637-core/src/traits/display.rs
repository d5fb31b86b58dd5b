//! Segment display trait

use crate::segment::{self, BLANK};
use crate::Brightness;

/// Trait for 7-segment display drivers
///
/// A driver only has to know how to put one raw bitmap at one position.
/// Everything that turns numbers into bitmaps lives in [`SegmentDisplayExt`].
pub trait SegmentDisplay {
    /// Error type for display writes
    type Error;

    /// Number of digit positions on the module
    fn digit_count(&self) -> u8;

    /// Set the brightness level (0-7, clamped)
    ///
    /// Takes effect on the next write; nothing is sent to the display here.
    fn set_brightness(&mut self, level: u8);

    /// Get the current brightness level
    fn brightness(&self) -> Brightness;

    /// Write a raw segment bitmap to one position
    ///
    /// - `position`: digit index, 0 is leftmost
    /// - `bitmap`: segment bits, `DP G F E D C B A` from bit 7 down
    fn write_segment_raw(&mut self, position: u8, bitmap: u8) -> Result<(), Self::Error>;
}

/// Number and float helpers for any [`SegmentDisplay`]
pub trait SegmentDisplayExt: SegmentDisplay {
    /// Write one hex digit (0-15, or [`segment::MINUS_SIGN`]) with optional dot
    ///
    /// Other values show a blank position.
    fn write_digit(&mut self, position: u8, value: u8, dot: bool) -> Result<(), Self::Error> {
        let bitmap = segment::apply_dot(segment::digit_to_bitmap(value), dot);
        self.write_segment_raw(position, bitmap)
    }

    /// Write consecutive bitmaps starting at position 0
    fn write_frame(&mut self, frame: &[u8]) -> Result<(), Self::Error> {
        for (position, &bitmap) in (0..self.digit_count()).zip(frame) {
            self.write_segment_raw(position, bitmap)?;
        }
        Ok(())
    }

    /// Blank every position
    fn clear(&mut self) -> Result<(), Self::Error> {
        for position in 0..self.digit_count() {
            self.write_segment_raw(position, BLANK)?;
        }
        Ok(())
    }

    /// Show a decimal number (0-9999) without leading zeros
    fn set_number(&mut self, number: u16) -> Result<(), Self::Error> {
        self.set_number_lead_dot(number, false, 0x00)
    }

    /// Show a decimal number, optionally with leading zeros
    fn set_number_lead(&mut self, number: u16, lead_zero: bool) -> Result<(), Self::Error> {
        self.set_number_lead_dot(number, lead_zero, 0x00)
    }

    /// Show a decimal number with leading-zero and dot control
    ///
    /// `dot_mask` bit 3 is the leftmost position, bit 0 the rightmost.
    fn set_number_lead_dot(
        &mut self,
        number: u16,
        lead_zero: bool,
        dot_mask: u8,
    ) -> Result<(), Self::Error> {
        let frame = segment::decompose_integer(number, lead_zero, dot_mask);
        self.write_frame(&frame)
    }

    /// Show a float using the layouts of [`segment::decompose_float`]
    ///
    /// Values with no layout (NaN, magnitude too large) leave the display
    /// unchanged.
    fn set_float(&mut self, value: f32) -> Result<(), Self::Error> {
        match segment::decompose_float(value) {
            Some(frame) => self.write_frame(&frame),
            None => Ok(()),
        }
    }
}

// Blanket implementation for all SegmentDisplay types
impl<T: SegmentDisplay> SegmentDisplayExt for T {}
