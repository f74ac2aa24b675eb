// src/renderer.rs

//! Terminal presentation of an artwork.
//!
//! The renderer translates decoded pixel data into ANSI true-color output:
//! one two-column cell per artwork pixel, with an alternating light
//! checkerboard where no pixel has been set. It also decides when a level
//! shows the spaced hexadecimal view alongside the picture.
//!
//! Unlike the rasterizer, the renderer never fails: pixels past the end of
//! the grid are logged and skipped so the terminal view always comes out.

use crate::codec::{decode_pixels, format_hex};
use crate::color::scale_to_rgb8;
use crate::config::{EditMode, LevelConfig, RenderConfig};
use bitflags::bitflags;
use log::warn;
use std::fmt::Write;

bitflags! {
    /// Which parts of a level's display to compose.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RenderFlags: u8 {
        const ARTWORK      = 1 << 0;
        const HEX_VIEW     = 1 << 1;
        const INSTRUCTIONS = 1 << 2;
    }
}

impl Default for RenderFlags {
    fn default() -> Self {
        RenderFlags::ARTWORK | RenderFlags::HEX_VIEW
    }
}

/// Binary-entry levels from this depth up get the hex view.
const HEX_VIEW_MIN_BITS: u32 = 12;

/// Terminal checkerboard cell colors, matching the raster background.
const TERM_CHECKER_SHADED: (u8, u8, u8) = (0xEE, 0xEE, 0xEE);
const TERM_CHECKER_PLAIN: (u8, u8, u8) = (0xFF, 0xFF, 0xFF);

/// Whether a level's display includes the hexadecimal view.
///
/// Shown once binary entry reaches a depth where hex abbreviation starts to
/// pay off; hexadecimal-entry levels already show hex in the editor itself.
pub fn hex_view_visible(level: &LevelConfig) -> bool {
    level.edit == EditMode::Binary && level.bits >= HEX_VIEW_MIN_BITS
}

/// Renders a binary digit string as a grid of ANSI true-color cells.
///
/// Each artwork pixel becomes two space characters on a colored background;
/// unset grid cells alternate light gray and white. Every line resets the
/// color at the end so the output composes with surrounding text.
pub fn artwork_ansi(binary: &str, bits: u32, cfg: &RenderConfig) -> String {
    let pixels = decode_pixels(binary, bits);
    let cells = cfg.cell_count();
    if pixels.len() > cells {
        warn!(
            "artwork has {} pixels but the grid holds {}; extra pixels not shown",
            pixels.len(),
            cells
        );
    }

    let mut out = String::new();
    for row in 0..cfg.grid_height as usize {
        for col in 0..cfg.grid_width as usize {
            let idx = row * cfg.grid_width as usize + col;
            let (r, g, b) = match pixels.get(idx) {
                Some(px) => (
                    scale_to_rgb8(px.r, bits),
                    scale_to_rgb8(px.g, bits),
                    scale_to_rgb8(px.b, bits),
                ),
                None if (row + col) % 2 == 0 => TERM_CHECKER_SHADED,
                None => TERM_CHECKER_PLAIN,
            };
            let _ = write!(out, "\x1b[48;2;{};{};{}m  ", r, g, b);
        }
        out.push_str("\x1b[0m\n");
    }
    out
}

/// The spaced hex view for a level, or `None` when the level doesn't show
/// one.
pub fn hex_view(hex: &str, level: &LevelConfig) -> Option<String> {
    if !hex_view_visible(level) {
        return None;
    }
    Some(format_hex(hex, level.bits))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_LEVELS;

    fn cfg() -> RenderConfig {
        RenderConfig::default()
    }

    #[test]
    fn test_hex_view_visibility_rule() {
        let visible: Vec<bool> = DEFAULT_LEVELS.iter().map(hex_view_visible).collect();
        // 1, 3, 6 bpp: too shallow; 12 bpp binary: shown; 24 bpp hex entry: not shown
        assert_eq!(visible, vec![false, false, false, true, false]);
    }

    #[test]
    fn test_artwork_has_one_line_per_grid_row() {
        let out = artwork_ansi("1", 1, &cfg());
        assert_eq!(out.lines().count(), 8);
    }

    #[test]
    fn test_artwork_first_cell_color() {
        // single 101 pixel at 3 bpp scales to magenta
        let out = artwork_ansi("101", 3, &cfg());
        assert!(out.starts_with("\x1b[48;2;255;0;255m  "));
    }

    #[test]
    fn test_empty_artwork_is_checkerboard() {
        let out = artwork_ansi("", 1, &cfg());
        assert!(out.starts_with("\x1b[48;2;238;238;238m  \x1b[48;2;255;255;255m  "));
    }

    #[test]
    fn test_lines_reset_color() {
        let out = artwork_ansi("1", 1, &cfg());
        for line in out.lines() {
            assert!(line.ends_with("\x1b[0m"));
        }
    }

    #[test]
    fn test_overflow_is_clipped_not_fatal() {
        let too_many = "1".repeat(65);
        let out = artwork_ansi(&too_many, 1, &cfg());
        assert_eq!(out.lines().count(), 8);
    }

    #[test]
    fn test_hex_view_for_deep_binary_level() {
        let level = &DEFAULT_LEVELS[3]; // 12 bpp, binary entry
        let view = hex_view("0F0000112233445566778899", level).unwrap();
        assert_eq!(view, "0F0 000 112 233 445 566 778 899");
    }

    #[test]
    fn test_no_hex_view_for_shallow_level() {
        assert!(hex_view("0F0", &DEFAULT_LEVELS[0]).is_none());
    }
}
