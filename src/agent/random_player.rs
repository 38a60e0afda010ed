//! Baseline player that moves uniformly at random.

use crate::agent::player::Player;
use crate::game_repr::{GameState, Move};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Picks any legal move with equal probability. Useful as the weakest
/// tournament opponent and for producing random openings.
pub struct RandomPlayer {
    rng: StdRng,
    name: String,
}

impl RandomPlayer {
    /// Reproducible player: the same seed replays the same choices.
    pub fn new(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            name: "Random".to_string(),
        }
    }

    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
            name: "Random".to_string(),
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}

impl<G: GameState> Player<G> for RandomPlayer {
    fn get_move(&mut self, _game: &G, legal_moves: &[Move], _time_left: &dyn Fn() -> f64) -> Move {
        legal_moves.choose(&mut self.rng).copied().unwrap_or(Move::NONE)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
