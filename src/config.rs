// src/config.rs

//! Level catalog and render geometry.
//!
//! Five levels of increasing bit depth walk the learner from single-bit
//! monochrome up to 24-bit color with hexadecimal entry. The catalog is
//! plain data: bit depth, entry mode, title, instruction text. No display
//! markup lives here; presentation belongs to the renderer.
//!
//! The whole configuration can be deserialized from a JSON file to swap in
//! a custom catalog or different render geometry. Missing fields fall back
//! to the built-in defaults.

use anyhow::Context;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Complete application configuration: the level catalog plus render
/// geometry.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Ordered level catalog. Level indices are positions in this list.
    pub levels: Vec<LevelConfig>,
    /// Rasterizer geometry.
    pub render: RenderConfig,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            levels: DEFAULT_LEVELS.clone(),
            render: RenderConfig::default(),
        }
    }
}

impl Config {
    /// Loads a configuration from a JSON file.
    pub fn load(path: &Path) -> anyhow::Result<Config> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config: Config = serde_json::from_str(&text)
            .with_context(|| format!("failed to parse config file {}", path.display()))?;
        Ok(config)
    }

    /// The level at `index`, if the catalog has one.
    pub fn level(&self, index: usize) -> Option<&LevelConfig> {
        self.levels.get(index)
    }
}

/// Which base the learner types in at a given level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum EditMode {
    /// The entry text is a binary digit string.
    #[default]
    Binary,
    /// The entry text is a hexadecimal digit string and is expanded to
    /// binary before decoding.
    Hexadecimal,
}

/// One stage of the exercise.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Total bits encoding one pixel. 1 for monochrome, otherwise divisible
    /// by 3 so the bits split evenly across the RGB channels.
    pub bits: u32,
    /// Entry base for this level.
    pub edit: EditMode,
    /// Short level title.
    pub title: String,
    /// Instruction text shown to the learner. Plain text; newlines separate
    /// paragraphs.
    pub instruction: String,
}

/// Rasterizer geometry: an 8x8 grid of 32px pixels over a 6px checkerboard
/// by default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Side length of one artwork pixel, in raster pixels.
    pub pixel_size: u32,
    /// Side length of one checkerboard square, in raster pixels.
    pub pattern_size: u32,
    /// Artwork grid width, in artwork pixels.
    pub grid_width: u32,
    /// Artwork grid height, in artwork pixels.
    pub grid_height: u32,
}

impl Default for RenderConfig {
    fn default() -> Self {
        RenderConfig {
            pixel_size: 32,
            pattern_size: 6,
            grid_width: 8,
            grid_height: 8,
        }
    }
}

impl RenderConfig {
    /// Total artwork pixels the grid holds.
    pub fn cell_count(&self) -> usize {
        (self.grid_width * self.grid_height) as usize
    }
}

/// The built-in five-level catalog.
pub static DEFAULT_LEVELS: Lazy<Vec<LevelConfig>> = Lazy::new(|| {
    vec![
        LevelConfig {
            bits: 1,
            edit: EditMode::Binary,
            title: "On and Off".to_string(),
            instruction: "Each pixel in the image is represented by a single bit. Use 1 to make \
                          a pixel white, and 0 to make a pixel black.\n\
                          Draw a picture using 1's and 0's.\n\
                          All white space (spaces and new lines) is ignored so you can format \
                          the text as you please."
                .to_string(),
        },
        LevelConfig {
            bits: 3,
            edit: EditMode::Binary,
            title: "Red, Green, and Blue".to_string(),
            instruction: "Each pixel in the image is now represented by three bits. The first \
                          bit represents red, the second green, and the third blue.\n\
                          You can create new colours by mixing red, green, and blue.\n\
                          e.g. 010 is just green (red off, green on, blue off), but 101 mixes \
                          red and blue to make magenta.\n\
                          Draw a colourful picture using 1's and 0's."
                .to_string(),
        },
        LevelConfig {
            bits: 6,
            edit: EditMode::Binary,
            title: "More Colours".to_string(),
            instruction: "Each pixel in the image is now represented by six bits. Two for red, \
                          two for green, and two for blue.\n\
                          You can now create even more colours by using four shades of each \
                          colour component: 00, 01, 10, and 11.\n\
                          e.g. Bright green is 001100 (zero red, full green, zero blue), but \
                          dark green is 000100.\n\
                          As each pixel is six bits, you can now choose from 64 different \
                          colours in total.\n\
                          Draw another colourful picture using 1's and 0's."
                .to_string(),
        },
        LevelConfig {
            bits: 12,
            edit: EditMode::Binary,
            title: "Even More Colours".to_string(),
            instruction: "Each pixel in the image is now represented by twelve bits. Four for \
                          red, four for green, and four for blue.\n\
                          e.g. Bright green is represented as 000011110000 (zero red, full \
                          green, zero blue).\n\
                          As each pixel is twelve bits, you can now choose from 4096 different \
                          colours in total.\n\
                          Draw an even more colourful picture using 1's and 0's.\n\
                          A hexadecimal view is also shown so that you can see how binary can \
                          be abbreviated as hexadecimal.\n\
                          e.g. 000011110000 is written in hexadecimal as 0F0. This makes it \
                          much easier to see the red, green, and blue values at a glance."
                .to_string(),
        },
        LevelConfig {
            bits: 24,
            edit: EditMode::Hexadecimal,
            title: "Your Masterpiece".to_string(),
            instruction: "Each pixel in the image is now represented by twenty-four bits. \
                          Eight for red, eight for green, and eight for blue.\n\
                          As each pixel is twenty-four bits, you can now choose from over 16 \
                          million different colours.\n\
                          Drawing a picture using binary will be very tedious, so this time \
                          you'll be using hexadecimal to draw your final masterpiece.\n\
                          Each pixel is 6 hexadecimal digits. e.g. Bright green is written as \
                          00FF00 (zero red, full green, zero blue)."
                .to_string(),
        },
    ]
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_catalog_shape() {
        let config = Config::default();
        assert_eq!(config.levels.len(), 5);
        let bits: Vec<u32> = config.levels.iter().map(|l| l.bits).collect();
        assert_eq!(bits, vec![1, 3, 6, 12, 24]);
        // only the last level uses hexadecimal entry
        for level in &config.levels[..4] {
            assert_eq!(level.edit, EditMode::Binary);
        }
        assert_eq!(config.levels[4].edit, EditMode::Hexadecimal);
    }

    #[test]
    fn test_channel_split_invariant() {
        for level in DEFAULT_LEVELS.iter() {
            assert!(level.bits == 1 || level.bits % 3 == 0, "level {:?}", level.title);
        }
    }

    #[test]
    fn test_render_defaults() {
        let render = RenderConfig::default();
        assert_eq!(render.pixel_size, 32);
        assert_eq!(render.pattern_size, 6);
        assert_eq!(render.cell_count(), 64);
    }

    #[test]
    fn test_config_json_round_trip() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let back: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(back.levels, config.levels);
        assert_eq!(back.render, config.render);
    }

    #[test]
    fn test_partial_config_uses_defaults() {
        let config: Config = serde_json::from_str(r#"{"render": {"pixel_size": 16}}"#).unwrap();
        assert_eq!(config.render.pixel_size, 16);
        assert_eq!(config.render.pattern_size, 6);
        assert_eq!(config.levels.len(), 5);
    }

    #[test]
    fn test_edit_mode_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&EditMode::Hexadecimal).unwrap(), "\"hexadecimal\"");
        let mode: EditMode = serde_json::from_str("\"binary\"").unwrap();
        assert_eq!(mode, EditMode::Binary);
    }
}
