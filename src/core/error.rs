//! Error types for the endgen engine

use thiserror::Error;

/// Main error type for the engine.
///
/// Biome classification is pure computation over pre-seeded tables and has
/// no failure modes; errors only arise on the map-export path.
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Manifest error: {0}")]
    Manifest(#[from] serde_json::Error),
}
