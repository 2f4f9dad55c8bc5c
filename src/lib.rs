//! Endgen - deterministic End-dimension biome generation
//!
//! Reproduces the reference End generator bit-for-bit: a world seed keys the
//! island noise field and the boundary-fuzzing stream, and every query for a
//! block coordinate resolves to one of the five End biomes. Classification
//! is a pure function of (seed, coordinate): the same inputs yield the same
//! biome across calls, generators, threads, and process restarts.

pub mod core;
pub mod rng;
pub mod noise;
pub mod zoom;
pub mod biome;
pub mod generator;
pub mod export;

pub use crate::biome::Biome;
pub use crate::core::Error;
pub use crate::generator::EndGenerator;
