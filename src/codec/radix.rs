// src/codec/radix.rs

//! Conversions between binary and hexadecimal digit strings.
//!
//! The two directions are inverses for well-formed input. They are *not*
//! round-trip safe for malformed input: both sides silently drop characters
//! outside their alphabet, and `binary_to_hex` pads a short trailing chunk,
//! so information can be lost on the way through.

/// One hex digit expands to exactly this many binary digits.
const BITS_PER_HEX_DIGIT: usize = 4;

/// Expands a hexadecimal digit string into a binary digit string.
///
/// Each hex digit (either case) becomes four binary digits, most significant
/// bit first, zero-padded. Characters that are not hex digits are dropped.
/// Empty input comes back unchanged.
pub fn hex_to_binary(hex: &str) -> String {
    let mut binary = String::with_capacity(hex.len() * BITS_PER_HEX_DIGIT);
    for value in hex.chars().filter_map(|c| c.to_digit(16)) {
        binary.push_str(&format!("{:04b}", value));
    }
    binary
}

/// Collapses a binary digit string into a hexadecimal digit string.
///
/// The input is filtered to `0`/`1` and grouped into chunks of four, left to
/// right. A short final chunk is read as if zero-padded on the right, so its
/// bits stay in the high positions: `"101"` reads as `"1010"` and becomes
/// `A`. Output digits are uppercase.
///
/// If filtering leaves no binary digits at all, the original input is
/// returned unchanged rather than an empty string. Callers relying on the
/// output being a digit string must not feed this function digit-free text.
pub fn binary_to_hex(binary: &str) -> String {
    let bits: Vec<u32> = binary.chars().filter_map(|c| c.to_digit(2)).collect();
    if bits.is_empty() {
        return binary.to_string();
    }

    let mut hex = String::with_capacity((bits.len() + BITS_PER_HEX_DIGIT - 1) / BITS_PER_HEX_DIGIT);
    for chunk in bits.chunks(BITS_PER_HEX_DIGIT) {
        let mut value = 0u32;
        for i in 0..BITS_PER_HEX_DIGIT {
            // missing low-order bits in a short final chunk read as zero
            value = (value << 1) | chunk.get(i).copied().unwrap_or(0);
        }
        hex.push_str(&format!("{:X}", value));
    }
    hex
}
