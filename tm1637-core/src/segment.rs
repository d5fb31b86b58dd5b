//! Segment encoding
//!
//! Converts digits, integers and floats into per-position segment bitmaps.
//!
//! ```text
//!       A
//!      ---
//!   F |   | B
//!      -G-
//!   E |   | C
//!      ---  .DP
//!       D
//!
//! bit:  7  6  5  4  3  2  1  0
//!      DP  G  F  E  D  C  B  A
//! ```
//!
//! Position 0 is the leftmost digit. All layouts here are for the four
//! leftmost positions.

/// Number of positions produced by the integer and float layouts
pub const FRAME_DIGITS: usize = 4;

/// Decimal point / colon bit
pub const SEG_DP: u8 = 0x80;

/// All segments off
pub const BLANK: u8 = 0x00;

/// Glyph table index of the minus sign
pub const MINUS_SIGN: u8 = 16;

/// Four segment bitmaps, most significant position first
pub type Frame = [u8; FRAME_DIGITS];

/// Glyphs for 0-F plus the minus sign
static GLYPHS: [u8; 17] = [
    // XGFEDCBA
    0b0011_1111, // 0
    0b0000_0110, // 1
    0b0101_1011, // 2
    0b0100_1111, // 3
    0b0110_0110, // 4
    0b0110_1101, // 5
    0b0111_1101, // 6
    0b0000_0111, // 7
    0b0111_1111, // 8
    0b0110_1111, // 9
    0b0111_0111, // A
    0b0111_1100, // b
    0b0011_1001, // C
    0b0101_1110, // d
    0b0111_1001, // E
    0b0111_0001, // F
    0b0100_0000, // minus
];

/// Glyph for a hex digit (0-15) or [`MINUS_SIGN`]
///
/// Anything else maps to [`BLANK`].
pub fn digit_to_bitmap(value: u8) -> u8 {
    GLYPHS.get(usize::from(value)).copied().unwrap_or(BLANK)
}

/// Set the decimal point bit when `dot` is true
pub const fn apply_dot(bitmap: u8, dot: bool) -> u8 {
    if dot {
        bitmap | SEG_DP
    } else {
        bitmap
    }
}

/// Whether `dot_mask` lights the dot at `position`
///
/// Bit 3 belongs to position 0 (leftmost), bit 0 to position 3.
pub const fn dot_at(dot_mask: u8, position: usize) -> bool {
    position < FRAME_DIGITS && dot_mask & (0x08_u8 >> position) != 0
}

/// Glyph for a computed digit value, with optional dot
///
/// Values that do not fit the glyph table render blank.
fn glyph(value: u32, dot: bool) -> u8 {
    let bitmap = u8::try_from(value).map_or(BLANK, digit_to_bitmap);
    apply_dot(bitmap, dot)
}

/// Lay out an integer over four positions
///
/// Positions left of the most significant digit are filled with `0` when
/// `lead_zero` is set, blank otherwise; each still honours its own bit of
/// `dot_mask`. Values above 9999 keep only the lowest four decimal digits.
pub fn decompose_integer(number: u16, lead_zero: bool, dot_mask: u8) -> Frame {
    let number = u32::from(number);
    let significant = match number {
        0..=9 => 1,
        10..=99 => 2,
        100..=999 => 3,
        _ => 4,
    };
    let lead = if lead_zero { digit_to_bitmap(0) } else { BLANK };

    let mut frame = [BLANK; FRAME_DIGITS];
    let mut divisor = 1000;
    for (position, bitmap) in frame.iter_mut().enumerate() {
        let dot = dot_at(dot_mask, position);
        *bitmap = if position < FRAME_DIGITS - significant {
            apply_dot(lead, dot)
        } else {
            glyph((number / divisor) % 10, dot)
        };
        divisor /= 10;
    }
    frame
}

/// Round `value * scale` to the nearest integer (half away from zero)
///
/// Out-of-range results saturate.
fn round_scaled(value: f32, scale: f32) -> u32 {
    libm::roundf(value * scale) as u32
}

/// Lay out a float over four positions
///
/// | range          | rounding   | layout  |
/// |----------------|------------|---------|
/// | `0 <= n < 10`  | 1 decimal  | `d.d00` |
/// | `10 <= n < 100`| 2 decimals | `dd.dd` |
/// | `100 <= n < 1000` | 2 decimals, hundredths dropped | `ddd.d` |
/// | `-10 < n < 0`  | 1 decimal  | `-d.d0` |
/// | `-100 < n`     | 1 decimal  | `-dd.d` |
/// | `-1000 < n`    | 1 decimal, tenths round the units | `-ddd` |
///
/// The range is picked before rounding for positive values and after
/// rounding for negative ones, so a carry out of the top digit is not
/// re-ranged: 9.96 becomes integer part 10 in a one-digit field and
/// renders as the `A` glyph, 99.996 wraps to `00.00`, and -129.5 renders
/// its units as `A`.
///
/// Digits come from the value scaled and rounded once as an integer, not
/// from the fraction of a rounded float, so 2.3 shows `2.300` rather than
/// `2.299`.
///
/// Returns `None` for NaN and for values outside the table.
pub fn decompose_float(value: f32) -> Option<Frame> {
    if value.is_nan() {
        None
    } else if value < 0.0 {
        decompose_negative(libm::fabsf(value))
    } else {
        decompose_positive(value)
    }
}

fn decompose_positive(value: f32) -> Option<Frame> {
    if value < 10.0 {
        let tenths = round_scaled(value, 10.0);
        let int_part = tenths / 10;
        Some([
            glyph(int_part, true),
            glyph(tenths % 10, false),
            glyph(0, false),
            glyph(0, false),
        ])
    } else if value < 100.0 {
        let hundredths = round_scaled(value, 100.0);
        let (int_part, frac) = (hundredths / 100, hundredths % 100);
        Some([
            glyph((int_part / 10) % 10, false),
            glyph(int_part % 10, true),
            glyph(frac / 10, false),
            glyph(frac % 10, false),
        ])
    } else if value < 1000.0 {
        let hundredths = round_scaled(value, 100.0);
        let (int_part, frac) = (hundredths / 100, hundredths % 100);
        Some([
            glyph((int_part / 100) % 10, false),
            glyph((int_part / 10) % 10, false),
            glyph(int_part % 10, true),
            glyph(frac / 10, false),
        ])
    } else {
        None
    }
}

fn decompose_negative(magnitude: f32) -> Option<Frame> {
    let tenths = round_scaled(magnitude, 10.0);
    let (int_part, tenth) = (tenths / 10, tenths % 10);

    let body = if tenths < 100 {
        [glyph(int_part, true), glyph(tenth, false), glyph(0, false)]
    } else if tenths < 1000 {
        [
            glyph((int_part / 10) % 10, false),
            glyph(int_part % 10, true),
            glyph(tenth, false),
        ]
    } else if tenths < 10_000 {
        let round_up = u32::from(tenth >= 5);
        [
            glyph((int_part / 100) % 10, false),
            glyph((int_part / 10) % 10, false),
            glyph(int_part % 10 + round_up, false),
        ]
    } else {
        return None;
    };

    Some([digit_to_bitmap(MINUS_SIGN), body[0], body[1], body[2]])
}
