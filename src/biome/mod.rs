//! End-dimension biome identities and classification.

mod map;

pub use map::EndBiomeMap;

use std::fmt;

/// Discrete biome classification for the End dimension.
///
/// Discriminants are a wire contract shared with external callers and must
/// never be reassigned.
#[repr(u32)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Biome {
    /// Reserved fallback code. Never produced by classification; kept so the
    /// wire code 0 stays attached to a name.
    Default = 0,
    /// The central island, within 64 chunks of the origin.
    TheEnd = 9,
    /// Scattered archipelago between the larger outer islands.
    SmallEndIslands = 40,
    /// Slopes of the outer islands.
    EndMidlands = 41,
    /// Tops of the outer islands.
    EndHighlands = 42,
    /// Flat wastes on the fringes of the outer islands.
    EndBarrens = 43,
}

impl Biome {
    /// Stable integer code used by external callers.
    pub const fn code(self) -> u32 {
        self as u32
    }

    /// Look up a biome by its wire code.
    pub const fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Default),
            9 => Some(Self::TheEnd),
            40 => Some(Self::SmallEndIslands),
            41 => Some(Self::EndMidlands),
            42 => Some(Self::EndHighlands),
            43 => Some(Self::EndBarrens),
            _ => None,
        }
    }
}

impl fmt::Display for Biome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{self:?}")
    }
}
