//! Seeded End biome generator: owns the noise state and answers queries.

use dashmap::DashMap;
use log::info;

use crate::biome::{Biome, EndBiomeMap};
use crate::zoom::VoronoiZoom;

/// Deterministic biome generator for one world seed.
///
/// Construction builds every noise table up front; afterwards the state is
/// immutable and queries are pure reads, so a generator can be shared across
/// threads freely. The chunk-level result cache is per-generator, so entries
/// can never bleed between seeds. The cache grows with the number of distinct
/// chunks touched; callers sweeping unbounded areas can drop and recreate the
/// generator to bound memory.
///
/// Deliberately not `Clone`: one value represents one world's generation
/// session, created once and released by dropping it.
pub struct EndGenerator {
    seed: u64,
    zoom: VoronoiZoom,
    map: EndBiomeMap,
    cache: DashMap<u64, Biome>,
}

impl EndGenerator {
    /// Build a generator for `seed`. Never fails.
    pub fn new(seed: u64) -> Self {
        let zoom = VoronoiZoom::new(seed);
        let map = EndBiomeMap::new(seed);
        info!("end generator initialized: seed={seed}");
        Self {
            seed,
            zoom,
            map,
            cache: DashMap::with_capacity(1024),
        }
    }

    /// The world seed this generator is bound to.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Biome at a block position.
    pub fn biome_at(&self, x: i32, y: i32, z: i32) -> Biome {
        let (quart_x, _, quart_z) = self.zoom.quart_pos(x, y, z);
        self.chunk_biome(quart_x >> 2, quart_z >> 2)
    }

    /// Column biome at block (x, z).
    ///
    /// Identical to `biome_at(x, 0, z)`. Classification is height-independent
    /// (y only jitters the fuzzed cell choice), and y = 0 is the canonical
    /// plane for 2D queries, so column sums stay reproducible.
    pub fn column_biome(&self, x: i32, z: i32) -> Biome {
        self.biome_at(x, 0, z)
    }

    /// Biome for a post-fuzz chunk position, memoized per generator.
    pub fn chunk_biome(&self, chunk_x: i32, chunk_z: i32) -> Biome {
        let key = ((chunk_x as u32 as u64) << 32) | chunk_z as u32 as u64;
        if let Some(biome) = self.cache.get(&key) {
            return *biome;
        }
        let biome = self.map.classify(chunk_x, chunk_z);
        self.cache.insert(key, biome);
        biome
    }
}
