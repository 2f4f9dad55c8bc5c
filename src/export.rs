//! Biome map rasterisation and PNG export.
//!
//! Renders a square region of column biomes into an image, one pixel per
//! sampled column, and writes it alongside a JSON manifest describing the
//! sampled extent. Rows render in parallel; the generator is shared
//! read-only across the worker threads.

use std::path::{Path, PathBuf};

use image::RgbaImage;
use log::info;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::biome::Biome;
use crate::core::Error;
use crate::generator::EndGenerator;

/// Region and output settings for a biome map export.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExportConfig {
    /// World seed.
    pub seed: u64,
    /// Center of the rendered square, in block coordinates.
    pub center_x: i32,
    pub center_z: i32,
    /// Half-extent of the square, in blocks.
    pub radius: i32,
    /// Blocks per pixel.
    pub step: i32,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            center_x: 0,
            center_z: 0,
            radius: 2048,
            step: 16,
        }
    }
}

impl ExportConfig {
    /// Side length of the rendered image in pixels.
    pub fn side(&self) -> u32 {
        ((self.radius * 2) / self.step.max(1)).max(1) as u32
    }
}

/// Fixed display color per biome.
pub fn biome_color(biome: Biome) -> [u8; 4] {
    match biome {
        Biome::Default => [128, 128, 128, 255],
        Biome::TheEnd => [59, 36, 84, 255],
        Biome::SmallEndIslands => [32, 26, 49, 255],
        Biome::EndMidlands => [181, 176, 140, 255],
        Biome::EndHighlands => [226, 223, 178, 255],
        Biome::EndBarrens => [112, 108, 94, 255],
    }
}

/// Render the configured region into an RGBA image.
pub fn render_region(generator: &EndGenerator, config: &ExportConfig) -> RgbaImage {
    let side = config.side();
    let step = config.step.max(1);
    let min_x = config.center_x - config.radius;
    let min_z = config.center_z - config.radius;

    let rows: Vec<Vec<u8>> = (0..side)
        .into_par_iter()
        .map(|row| {
            let z = min_z + row as i32 * step;
            let mut pixels = Vec::with_capacity(side as usize * 4);
            for col in 0..side {
                let x = min_x + col as i32 * step;
                pixels.extend_from_slice(&biome_color(generator.column_biome(x, z)));
            }
            pixels
        })
        .collect();

    let mut buffer = Vec::with_capacity(side as usize * side as usize * 4);
    for row in rows {
        buffer.extend_from_slice(&row);
    }
    RgbaImage::from_raw(side, side, buffer)
        .expect("row buffers always match the image dimensions")
}

/// Render the region and write `end_biomes_<seed>.png` plus `manifest.json`
/// into `out_dir`. Returns the image path.
pub fn export_png(
    generator: &EndGenerator,
    config: &ExportConfig,
    out_dir: &Path,
) -> Result<PathBuf, Error> {
    std::fs::create_dir_all(out_dir)?;

    let image = render_region(generator, config);
    let png_path = out_dir.join(format!("end_biomes_{}.png", config.seed));
    image.save(&png_path)?;

    let manifest = serde_json::json!({
        "seed": config.seed,
        "center": [config.center_x, config.center_z],
        "radius": config.radius,
        "step": config.step,
        "side_px": config.side(),
        "image": png_path.file_name().and_then(|name| name.to_str()),
    });
    std::fs::write(
        out_dir.join("manifest.json"),
        serde_json::to_vec_pretty(&manifest)?,
    )?;

    info!("exported biome map: {}", png_path.display());
    Ok(png_path)
}
