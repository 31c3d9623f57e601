//! Fill colors for flowchart boxes
//!
//! A [`Palette`] owns its pool of remaining colors. Each draw removes a
//! pseudo-random color from the pool; an empty pool is refilled with all of
//! [`COLORS`], so ten consecutive draws from a full pool never repeat.

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;

type SmallRng = Xoshiro256StarStar;

pub const COLORS: [&str; 10] = [
    "#ff595e", "#ff924c", "#ffca3a", "#c5ca30", "#8ac926", "#52a675", "#1982c4", "#4267ac",
    "#6a4c93", "#b5a6c9",
];

#[derive(Debug, Clone)]
pub struct Palette {
    remaining: Vec<&'static str>,
    rng: SmallRng,
}

impl Palette {
    /// A palette seeded from the thread RNG
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// A palette whose draws are fully determined by `seed`
    pub fn seeded(seed: u64) -> Self {
        Self {
            remaining: COLORS.to_vec(),
            rng: SmallRng::seed_from_u64(seed),
        }
    }

    /// Colors left before the next refill
    pub fn remaining(&self) -> usize {
        self.remaining.len()
    }

    pub fn next_color(&mut self) -> &'static str {
        if self.remaining.is_empty() {
            self.remaining = COLORS.to_vec();
        }
        let index = self.rng.gen_range(0..self.remaining.len());
        self.remaining.swap_remove(index)
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::new()
    }
}
