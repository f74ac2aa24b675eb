// src/main.rs

// Declare modules
pub mod codec;
pub mod color;
pub mod config;
pub mod exhibit;
pub mod rasterizer;
pub mod renderer;

use crate::config::Config;
use crate::exhibit::Exhibit;
use crate::renderer::RenderFlags;

use anyhow::{bail, Context};
use clap::Parser;
use log::info;
use std::fs;
use std::io::Read;
use std::path::PathBuf;

/// Decode binary and hexadecimal digit strings into 8x8 pixel art.
#[derive(Parser)]
#[command(name = "pixel-easel", version, about)]
struct Cli {
    /// Learner text file; reads stdin when omitted
    file: Option<PathBuf>,

    /// Level index, 0-based
    #[arg(long, default_value_t = 0)]
    level: usize,

    /// JSON array of saved per-level entries; renders every level and
    /// ignores FILE and --level
    #[arg(long)]
    gallery: Option<PathBuf>,

    /// Level catalog and render geometry override (JSON)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Write the rasterized artwork as a PNG file
    #[arg(long)]
    png: Option<PathBuf>,

    /// Suppress the hexadecimal view
    #[arg(long)]
    no_hex: bool,

    /// Show the level's instruction text
    #[arg(long)]
    instructions: bool,
}

fn main() -> anyhow::Result<()> {
    // Default filter is "info" if RUST_LOG is not set.
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => {
            let config = Config::load(path)?;
            info!("loaded catalog of {} levels from {}", config.levels.len(), path.display());
            config
        }
        None => Config::default(),
    };

    let mut flags = RenderFlags::default();
    if cli.no_hex {
        flags.remove(RenderFlags::HEX_VIEW);
    }
    if cli.instructions {
        flags.insert(RenderFlags::INSTRUCTIONS);
    }

    if let Some(gallery_path) = &cli.gallery {
        let json = fs::read_to_string(gallery_path)
            .with_context(|| format!("failed to read entries file {}", gallery_path.display()))?;
        let exhibit = Exhibit::from_json(config, &json)?;
        print!("{}", exhibit.gallery(flags));
        return Ok(());
    }

    if config.levels.is_empty() {
        bail!("the level catalog is empty");
    }
    if cli.level >= config.levels.len() {
        bail!(
            "level {} does not exist; the catalog has levels 0-{}",
            cli.level,
            config.levels.len() - 1
        );
    }

    let text = match &cli.file {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?,
        None => {
            let mut text = String::new();
            std::io::stdin()
                .read_to_string(&mut text)
                .context("failed to read stdin")?;
            text
        }
    };

    let mut exhibit = Exhibit::new(config);
    exhibit.set_entry(cli.level, text);

    if let Some(png_path) = &cli.png {
        let raster = exhibit.rasterize(cli.level)?;
        rasterizer::write_png(&raster, png_path)?;
        info!("wrote {}", png_path.display());
    }

    print!("{}", exhibit.view(cli.level, flags));
    Ok(())
}
