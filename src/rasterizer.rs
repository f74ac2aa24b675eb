// src/rasterizer.rs

//! Paints decoded pixel data into an RGBA framebuffer.
//!
//! The raster shows a light checkerboard wherever no pixel has been set, so
//! a half-finished picture reads as "transparent" rather than black. Decoded
//! channel values are scaled from their level's bit depth up to the 0-255
//! display range before filling.
//!
//! This is the one place in the program that can reject learner data: more
//! pixels than the grid holds is an error, reported to the caller instead of
//! silently cropped. Everything upstream degrades gracefully by contract.

use crate::codec::decode_pixels;
use crate::color::scale_to_rgb8;
use crate::config::RenderConfig;
use anyhow::{bail, Context, Result};
use std::path::Path;

/// RGBA color in 32-bit format (8 bits per channel).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Convert to an RGBA byte array.
    pub fn to_bytes(&self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

/// Checkerboard square colors behind unset pixels.
const CHECKER_SHADED: Rgba = Rgba::opaque(0xEE, 0xEE, 0xEE);
const CHECKER_PLAIN: Rgba = Rgba::opaque(0xFF, 0xFF, 0xFF);

/// A row-major RGBA8 framebuffer.
#[derive(Debug, Clone)]
pub struct Raster {
    width_px: usize,
    height_px: usize,
    data: Vec<u8>,
}

impl Raster {
    fn new(width_px: usize, height_px: usize) -> Self {
        Raster {
            width_px,
            height_px,
            data: vec![0; width_px * height_px * 4],
        }
    }

    pub fn width_px(&self) -> usize {
        self.width_px
    }

    pub fn height_px(&self) -> usize {
        self.height_px
    }

    /// Raw RGBA bytes, row-major, 4 bytes per raster pixel.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// The color at raster coordinates (x, y). Out of bounds reads as
    /// transparent black.
    pub fn pixel_at(&self, x: usize, y: usize) -> Rgba {
        if x >= self.width_px || y >= self.height_px {
            return Rgba::new(0, 0, 0, 0);
        }
        let idx = (y * self.width_px + x) * 4;
        Rgba::new(self.data[idx], self.data[idx + 1], self.data[idx + 2], self.data[idx + 3])
    }

    /// Fills a rectangle, clipped to the buffer.
    fn fill_rect(&mut self, x: usize, y: usize, w: usize, h: usize, color: Rgba) {
        let bytes = color.to_bytes();
        for row in y..(y + h).min(self.height_px) {
            for col in x..(x + w).min(self.width_px) {
                let idx = (row * self.width_px + col) * 4;
                self.data[idx..idx + 4].copy_from_slice(&bytes);
            }
        }
    }
}

/// Rasterizes a binary digit string at the given bit depth.
///
/// Paints the checkerboard, decodes the pixels, scales each channel to the
/// display range, and fills one `pixel_size` square per pixel in row-major
/// grid order. An empty input leaves the bare checkerboard.
///
/// # Errors
/// Fails when the input decodes to more pixels than the grid holds.
pub fn render(binary: &str, bits: u32, cfg: &RenderConfig) -> Result<Raster> {
    let width_px = (cfg.pixel_size * cfg.grid_width) as usize;
    let height_px = (cfg.pixel_size * cfg.grid_height) as usize;
    let mut raster = Raster::new(width_px, height_px);

    paint_checkerboard(&mut raster, cfg.pattern_size as usize);

    if binary.is_empty() {
        return Ok(raster);
    }

    let pixels = decode_pixels(binary, bits);
    if pixels.len() > cfg.cell_count() {
        bail!(
            "picture has {} pixels but the {}x{} grid only holds {}",
            pixels.len(),
            cfg.grid_width,
            cfg.grid_height,
            cfg.cell_count()
        );
    }

    let pixel_size = cfg.pixel_size as usize;
    for (i, px) in pixels.iter().enumerate() {
        let row = i / cfg.grid_width as usize;
        let col = i % cfg.grid_width as usize;
        let color = Rgba::opaque(
            scale_to_rgb8(px.r, bits),
            scale_to_rgb8(px.g, bits),
            scale_to_rgb8(px.b, bits),
        );
        raster.fill_rect(col * pixel_size, row * pixel_size, pixel_size, pixel_size, color);
    }

    Ok(raster)
}

fn paint_checkerboard(raster: &mut Raster, pattern_size: usize) {
    let pattern_size = pattern_size.max(1);
    for y in (0..raster.height_px()).step_by(pattern_size) {
        for x in (0..raster.width_px()).step_by(pattern_size) {
            let color = if (x / pattern_size) % 2 == (y / pattern_size) % 2 {
                CHECKER_SHADED
            } else {
                CHECKER_PLAIN
            };
            raster.fill_rect(x, y, pattern_size, pattern_size, color);
        }
    }
}

/// Writes a raster as a PNG file.
pub fn write_png(raster: &Raster, path: &Path) -> Result<()> {
    image::save_buffer(
        path,
        raster.data(),
        raster.width_px() as u32,
        raster.height_px() as u32,
        image::ColorType::Rgba8,
    )
    .with_context(|| format!("failed to write PNG to {}", path.display()))
}
