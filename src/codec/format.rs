// src/codec/format.rs

//! Formats a hexadecimal digit string into grouped display lines.

/// One display line holds one grid row's worth of pixels.
const PIXELS_PER_LINE: usize = 8;

/// Re-groups a hex digit string into per-pixel cells and 8-pixel lines.
///
/// The line length is `bits * 8 / 4` digits (one grid row) and the cell
/// width is `bits / 4` digits (one pixel). Cells within a line are joined
/// with single spaces, lines with newlines, and the result is uppercased.
/// The final line and its final cell may be short when the input length is
/// not a multiple of the grouping.
///
/// Callers must pick a `bits` that yields whole positive cell widths; the
/// level catalog only asks for the hex view at 12 and 24 bits per pixel.
/// Empty input comes back unchanged.
pub fn format_hex(hex: &str, bits: u32) -> String {
    debug_assert!(
        bits >= 4 && bits % 4 == 0,
        "bit depth {} does not form whole hex cells",
        bits
    );
    let cell_width = ((bits / 4) as usize).max(1);
    let line_length = cell_width * PIXELS_PER_LINE;

    let digits: Vec<char> = hex.chars().collect();
    digits
        .chunks(line_length)
        .map(|line| {
            line.chunks(cell_width)
                .map(|cell| cell.iter().collect::<String>())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect::<Vec<_>>()
        .join("\n")
        .to_uppercase()
}
