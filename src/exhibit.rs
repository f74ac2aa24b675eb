// src/exhibit.rs

//! Wires the codec, catalog, and renderers into the level-by-level flow.
//!
//! An `Exhibit` holds one raw entry string per level, the way the learner
//! left them, and derives everything else on demand: the normalized digit
//! string, its binary and hexadecimal views, the terminal artwork, and the
//! raster. Rasterizer errors stop here and come out as display text; the
//! codec itself cannot fail.

use crate::codec::{binary_to_hex, hex_to_binary, normalize};
use crate::config::{Config, EditMode};
use crate::rasterizer::{self, Raster};
use crate::renderer::{artwork_ansi, hex_view, RenderFlags};
use anyhow::{anyhow, Context, Result};
use log::debug;
use std::fmt::Write;

/// The gallery: per-level entries plus the catalog they are read against.
#[derive(Debug, Clone)]
pub struct Exhibit {
    config: Config,
    entries: Vec<String>,
}

impl Exhibit {
    /// An exhibit with empty entries for every level in the catalog.
    pub fn new(config: Config) -> Self {
        let entries = vec![String::new(); config.levels.len()];
        Exhibit { config, entries }
    }

    /// An exhibit seeded with saved entries. Shorter lists are padded with
    /// empty entries; extra entries beyond the catalog are kept but never
    /// shown.
    pub fn with_entries(config: Config, mut entries: Vec<String>) -> Self {
        if entries.len() < config.levels.len() {
            entries.resize(config.levels.len(), String::new());
        }
        Exhibit { config, entries }
    }

    /// Loads entries from a JSON string array, one element per level.
    pub fn from_json(config: Config, json: &str) -> Result<Self> {
        let entries: Vec<String> =
            serde_json::from_str(json).context("entries file is not a JSON array of strings")?;
        Ok(Self::with_entries(config, entries))
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn level_count(&self) -> usize {
        self.config.levels.len()
    }

    pub fn entry(&self, level: usize) -> &str {
        self.entries.get(level).map_or("", String::as_str)
    }

    pub fn set_entry(&mut self, level: usize, text: String) {
        if level < self.entries.len() {
            self.entries[level] = text;
        }
    }

    /// The binary and hexadecimal digit strings for one level's entry, in
    /// that order, after normalization and base conversion per the level's
    /// entry mode.
    pub fn digit_views(&self, level: usize) -> (String, String) {
        let Some(level_cfg) = self.config.level(level) else {
            return (String::new(), String::new());
        };
        let data = normalize(self.entry(level));
        match level_cfg.edit {
            EditMode::Hexadecimal => (hex_to_binary(&data), data),
            EditMode::Binary => {
                let hex = binary_to_hex(&data);
                (data, hex)
            }
        }
    }

    /// Rasterizes one level's entry into an RGBA framebuffer.
    ///
    /// # Errors
    /// Fails for an unknown level index or when the entry decodes to more
    /// pixels than the grid holds.
    pub fn rasterize(&self, level: usize) -> Result<Raster> {
        let level_cfg = self
            .config
            .level(level)
            .ok_or_else(|| anyhow!("no level {} in a {}-level catalog", level, self.level_count()))?;
        let (binary, _) = self.digit_views(level);
        rasterizer::render(&binary, level_cfg.bits, &self.config.render)
    }

    /// Composes one level's terminal display.
    ///
    /// Always includes the title header. `flags` select the instruction
    /// text, the ANSI artwork, and the hex view; the hex view additionally
    /// follows the catalog's visibility rule. A rasterizer rejection is
    /// rendered as an error line under the artwork instead of propagating.
    pub fn view(&self, level: usize, flags: RenderFlags) -> String {
        let Some(level_cfg) = self.config.level(level) else {
            return String::new();
        };
        debug!("rendering level {} ({})", level, level_cfg.title);

        let mut out = String::new();
        let _ = writeln!(out, "{}: {}", level + 1, level_cfg.title);

        if flags.contains(RenderFlags::INSTRUCTIONS) {
            let _ = writeln!(out, "\n{}", level_cfg.instruction);
        }

        let (binary, hex) = self.digit_views(level);

        if flags.contains(RenderFlags::ARTWORK) {
            out.push('\n');
            out.push_str(&artwork_ansi(&binary, level_cfg.bits, &self.config.render));
            if let Err(err) = rasterizer::render(&binary, level_cfg.bits, &self.config.render) {
                let _ = writeln!(out, "error: {}", err);
            }
        }

        if flags.contains(RenderFlags::HEX_VIEW) {
            if let Some(view) = hex_view(&hex, level_cfg) {
                if !view.is_empty() {
                    let _ = writeln!(out, "\n{}", view);
                }
            }
        }

        out
    }

    /// Composes the display for every level in the catalog.
    pub fn gallery(&self, flags: RenderFlags) -> String {
        (0..self.level_count())
            .map(|level| self.view(level, flags))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn exhibit_with(level: usize, text: &str) -> Exhibit {
        let mut exhibit = Exhibit::new(Config::default());
        exhibit.set_entry(level, text.to_string());
        exhibit
    }

    #[test]
    fn test_digit_views_binary_entry() {
        // level 3 is 12 bpp binary entry
        let exhibit = exhibit_with(3, "0000 1111 0000 // bright green\n");
        let (binary, hex) = exhibit.digit_views(3);
        assert_eq!(binary, "000011110000");
        assert_eq!(hex, "0F0");
    }

    #[test]
    fn test_digit_views_hex_entry() {
        // level 4 is 24 bpp hexadecimal entry
        let exhibit = exhibit_with(4, "00ff00");
        let (binary, hex) = exhibit.digit_views(4);
        assert_eq!(hex, "00FF00");
        assert_eq!(binary, "000000001111111100000000");
    }

    #[test]
    fn test_digit_views_unknown_level() {
        let exhibit = exhibit_with(0, "1");
        assert_eq!(exhibit.digit_views(99), (String::new(), String::new()));
    }

    #[test]
    fn test_view_has_title_and_artwork() {
        let exhibit = exhibit_with(0, "1010");
        let view = exhibit.view(0, RenderFlags::default());
        assert!(view.starts_with("1: On and Off\n"));
        assert!(view.contains("\x1b[48;2;"));
    }

    #[test]
    fn test_view_hex_view_only_where_visible() {
        let exhibit = exhibit_with(3, "000011110000");
        assert!(exhibit.view(3, RenderFlags::default()).contains("0F0"));

        // same entry on a shallow level: artwork only
        let exhibit = exhibit_with(1, "000011110000");
        assert!(!exhibit.view(1, RenderFlags::default()).contains("0F0 "));
    }

    #[test]
    fn test_view_catches_rasterizer_error() {
        let exhibit = exhibit_with(0, &"1".repeat(65));
        let view = exhibit.view(0, RenderFlags::default());
        assert!(view.contains("error: "), "missing error line: {:?}", view);
    }

    #[test]
    fn test_view_instructions_flag() {
        let exhibit = exhibit_with(0, "");
        let with = exhibit.view(0, RenderFlags::default() | RenderFlags::INSTRUCTIONS);
        assert!(with.contains("single bit"));
        let without = exhibit.view(0, RenderFlags::default());
        assert!(!without.contains("single bit"));
    }

    #[test]
    fn test_from_json_pads_missing_entries() {
        let exhibit = Exhibit::from_json(Config::default(), r#"["111"]"#).unwrap();
        assert_eq!(exhibit.entry(0), "111");
        assert_eq!(exhibit.entry(4), "");
        assert_eq!(exhibit.level_count(), 5);
    }

    #[test]
    fn test_from_json_rejects_non_array() {
        assert!(Exhibit::from_json(Config::default(), r#"{"a": 1}"#).is_err());
    }

    #[test]
    fn test_gallery_covers_every_level() {
        let exhibit = Exhibit::new(Config::default());
        let gallery = exhibit.gallery(RenderFlags::ARTWORK);
        for (i, level) in exhibit.config().levels.iter().enumerate() {
            assert!(gallery.contains(&format!("{}: {}", i + 1, level.title)));
        }
    }
}
