//! Baseline player with a one-ply lookahead.

use crate::agent::ai::{Heuristic, HeuristicKind};
use crate::agent::player::Player;
use crate::game_repr::{GameState, Move};

/// Plays the move whose resulting position scores best for itself, without
/// considering the reply. Ties go to the first move generated.
pub struct GreedyPlayer<G> {
    heuristic: Box<dyn Heuristic<G>>,
    name: String,
}

impl<G: GameState + 'static> GreedyPlayer<G> {
    pub fn new(kind: HeuristicKind) -> Self {
        Self::with_heuristic(kind.score_fn::<G>()).named(&format!("Greedy ({})", kind.name()))
    }

    pub fn with_heuristic(heuristic: impl Heuristic<G> + 'static) -> Self {
        Self {
            heuristic: Box::new(heuristic),
            name: "Greedy".to_string(),
        }
    }
}

impl<G> GreedyPlayer<G> {
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }
}

impl<G: GameState> Player<G> for GreedyPlayer<G> {
    fn get_move(&mut self, game: &G, legal_moves: &[Move], _time_left: &dyn Fn() -> f64) -> Move {
        let me = game.active_player();
        let mut best: Option<(f64, Move)> = None;

        for &mv in legal_moves {
            let score = self.heuristic.evaluate(&game.forecast_move(mv), me);
            if best.map_or(true, |(top, _)| score > top) {
                best = Some((score, mv));
            }
        }

        best.map_or(Move::NONE, |(_, mv)| mv)
    }

    fn name(&self) -> &str {
        &self.name
    }
}
