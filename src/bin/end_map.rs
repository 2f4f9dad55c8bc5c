//! Biome map renderer: rasterises an End biome region to a PNG.
//!
//! Usage: cargo run --release --bin end_map -- [OPTIONS]
//!
//! Options:
//!   --seed <SEED>       World seed (default: 0)
//!   --center-x <X>      Region center X in blocks (default: 0)
//!   --center-z <Z>      Region center Z in blocks (default: 0)
//!   --radius <BLOCKS>   Half-extent of the square (default: 2048)
//!   --step <BLOCKS>     Blocks per pixel (default: 16)
//!   --out <DIR>         Output directory (default: "maps")
//!
//! Output structure:
//!   <dir>/
//!     end_biomes_<seed>.png   # One pixel per sampled column
//!     manifest.json           # Seed + extent metadata

use std::path::PathBuf;
use std::time::Instant;

use endgen::EndGenerator;
use endgen::export::{ExportConfig, export_png};

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .format_timestamp_millis()
    .init();

    let args: Vec<String> = std::env::args().collect();
    let config = ExportConfig {
        seed: parse_u64_arg(&args, "--seed").unwrap_or(0),
        center_x: parse_i32_arg(&args, "--center-x").unwrap_or(0),
        center_z: parse_i32_arg(&args, "--center-z").unwrap_or(0),
        radius: parse_i32_arg(&args, "--radius").unwrap_or(2048),
        step: parse_i32_arg(&args, "--step").unwrap_or(16),
    };
    let out_dir = PathBuf::from(
        parse_str_arg(&args, "--out").unwrap_or_else(|| "maps".to_string()),
    );

    println!("=== End Biome Map ===");
    println!("Seed:   {}", config.seed);
    println!("Center: ({}, {})", config.center_x, config.center_z);
    println!("Radius: {} blocks, {} blocks/pixel", config.radius, config.step);
    println!("Image:  {0}x{0} px", config.side());
    println!("Output: {}", out_dir.display());
    println!();

    let start = Instant::now();
    let generator = EndGenerator::new(config.seed);
    match export_png(&generator, &config, &out_dir) {
        Ok(path) => println!("Wrote {} in {:.2?}", path.display(), start.elapsed()),
        Err(err) => {
            eprintln!("Export failed: {err}");
            std::process::exit(1);
        }
    }
}

fn parse_u64_arg(args: &[String], flag: &str) -> Option<u64> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_i32_arg(args: &[String], flag: &str) -> Option<i32> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .and_then(|s| s.parse().ok())
}

fn parse_str_arg(args: &[String], flag: &str) -> Option<String> {
    args.iter().position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .cloned()
}
