// src/codec/pixels.rs

//! Decodes a binary digit string into RGB pixel triples.
//!
//! The decoder scans the string once, filling one channel at a time in
//! red → green → blue order, `bits / 3` binary digits per channel value.
//! It is grid-size agnostic: it emits as many pixels as the input supplies
//! complete red-channel groups for, and the caller decides what grid they
//! land on.

use crate::color::Pixel;

/// Red, green, blue.
const CHANNEL_COUNT: usize = 3;

/// Decodes `binary` at the given bit depth into pixel triples.
///
/// At a bit depth of 1 each digit becomes one monochrome pixel with all
/// three channels equal to that digit. At any other depth the digits are
/// accumulated most-significant-bit first into `bits / 3`-wide channel
/// groups, cycling through the channels; pixels are then assembled by
/// zipping the channel lists positionally. A green or blue group the input
/// never completed reads as 0; a red group the input never completed emits
/// no pixel at all.
///
/// Characters other than `0` and `1` are skipped. The function never fails.
pub fn decode_pixels(binary: &str, bits: u32) -> Vec<Pixel> {
    if bits == 1 {
        return binary
            .chars()
            .filter_map(|c| c.to_digit(2))
            .map(|bit| Pixel::splat(bit as u8))
            .collect();
    }

    debug_assert!(
        bits % CHANNEL_COUNT as u32 == 0,
        "bit depth {} does not split evenly into RGB channel groups",
        bits
    );
    let group_len = bits / CHANNEL_COUNT as u32;

    let mut channels: [Vec<u8>; CHANNEL_COUNT] = Default::default();
    let mut accumulator: u8 = 0;
    let mut group_fill: u32 = 0;
    let mut channel: usize = 0;

    for bit in binary.chars().filter_map(|c| c.to_digit(2)) {
        accumulator += bit as u8;
        group_fill += 1;
        if group_fill == group_len {
            channels[channel].push(accumulator);
            accumulator = 0;
            group_fill = 0;
            channel = (channel + 1) % CHANNEL_COUNT;
        } else {
            // shift only between digits of a group, never after the last one
            accumulator <<= 1;
        }
    }

    let [red, green, blue] = channels;
    red.iter()
        .enumerate()
        .map(|(i, &r)| Pixel {
            r,
            g: green.get(i).copied().unwrap_or(0),
            b: blue.get(i).copied().unwrap_or(0),
        })
        .collect()
}
