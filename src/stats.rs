//! Cosmetic per-card numbers.
//!
//! Nothing drawn here relates to any round outcome. Tests may check bounds,
//! never relationships between values.

use rand::Rng;
use serde::Serialize;

use crate::types::Color;

/// Exclusive upper bound for both win percent and coin count.
pub const STAT_BOUND: u32 = 100;

/// Uniform integer source. Implementations must return values in `[0, bound)`.
pub trait RandomSource: Send + Sync {
    fn below(&self, bound: u32) -> u32;
}

/// Non-seeded thread-local RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRandom;

impl RandomSource for ThreadRandom {
    fn below(&self, bound: u32) -> u32 {
        rand::thread_rng().gen_range(0..bound)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ColorStats {
    pub color: Color,
    pub win_percent: u32,
    pub coin_count: u32,
}

/// Draws a fresh set for every card, win percent before coin count.
pub fn generate(source: &dyn RandomSource) -> [ColorStats; 3] {
    Color::ALL.map(|color| ColorStats {
        color,
        win_percent: source.below(STAT_BOUND),
        coin_count: source.below(STAT_BOUND),
    })
}
