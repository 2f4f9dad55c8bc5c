//! Seeded coherent noise fields.

mod simplex;

pub use simplex::SimplexNoise;
