//! TM1637 command bytes
//!
//! Every frame on the wire starts with one of three command classes,
//! selected by the top two bits:
//!
//! ```text
//! 01xx_xxxx  data command     (write mode, address increment)
//! 10xx_xxxx  display control  (on/off, brightness in bits 0-2)
//! 11xx_xxxx  address command  (grid address in bits 0-2)
//! ```

use crate::Brightness;

/// Data command: write display registers, auto-increment address
pub const DATA_AUTO_INCREMENT: u8 = 0x40;

/// Data command: write display registers, fixed address
pub const DATA_FIXED_ADDRESS: u8 = 0x44;

/// Address command base (grid 0)
pub const ADDRESS_BASE: u8 = 0xC0;

/// Display control base with the display switched on
pub const DISPLAY_ON: u8 = 0x88;

/// Mask for the grid address in an address command
pub const ADDRESS_MASK: u8 = 0x07;

/// Address command for a grid position
pub const fn address(position: u8) -> u8 {
    ADDRESS_BASE | (position & ADDRESS_MASK)
}

/// Display control command: display on at the given brightness
pub const fn display_control(brightness: Brightness) -> u8 {
    DISPLAY_ON | brightness.get()
}
