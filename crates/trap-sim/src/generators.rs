use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Seeded source of the random quote moves the algo makes once the buyer
/// has shown up. Every draw is scaled by the algo's aggression.
#[derive(Debug, Clone)]
pub struct QuoteShockGenerator {
    rng: ChaCha8Rng,
    aggression: f64,
}

impl QuoteShockGenerator {
    pub fn new(seed: u64, aggression: f64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            aggression: aggression.clamp(0.0, 1.0),
        }
    }

    pub fn next_unit(&mut self) -> f64 {
        self.rng.gen::<f64>()
    }

    /// One-sided move in `[0, aggression * max_move)`.
    pub fn adverse_move(&mut self, max_move: f64) -> f64 {
        self.next_unit() * self.aggression * max_move
    }

    /// Two-sided move in `(-aggression * max_move, aggression * max_move)`.
    pub fn symmetric_jitter(&mut self, max_move: f64) -> f64 {
        (self.next_unit() * 2.0 - 1.0) * self.aggression * max_move
    }
}
