// Position evaluation functions
// Scores are from the point of view of the given player: +inf for a won
// position, -inf for a lost one, and a finite mobility estimate otherwise.

use crate::game_repr::{GameState, PlayerId};
use serde::{Deserialize, Serialize};

/// Pluggable evaluation strategy used at the leaves of the search.
///
/// Any `Fn(&G, PlayerId) -> f64` closure or function item is a heuristic,
/// so alternative scoring can be swapped in without touching the search.
pub trait Heuristic<G>: Send {
    fn evaluate(&self, game: &G, player: PlayerId) -> f64;
}

impl<G, F> Heuristic<G> for F
where
    F: Fn(&G, PlayerId) -> f64 + Send,
{
    fn evaluate(&self, game: &G, player: PlayerId) -> f64 {
        self(game, player)
    }
}

/// Decided positions dominate every finite score.
fn terminal_score<G: GameState>(game: &G, player: PlayerId) -> Option<f64> {
    if game.is_loser(player) {
        Some(f64::NEG_INFINITY)
    } else if game.is_winner(player) {
        Some(f64::INFINITY)
    } else {
        None
    }
}

fn mobility<G: GameState>(game: &G, player: PlayerId) -> (f64, f64) {
    let own = game.legal_moves_for(player).len() as f64;
    let opp = game.legal_moves_for(game.get_opponent(player)).len() as f64;
    (own, opp)
}

/// Own legal move count minus the opponent's. The default heuristic.
pub fn improved_score<G: GameState>(game: &G, player: PlayerId) -> f64 {
    if let Some(score) = terminal_score(game, player) {
        return score;
    }
    let (own, opp) = mobility(game, player);
    own - opp
}

/// Own legal move count only.
pub fn open_move_score<G: GameState>(game: &G, player: PlayerId) -> f64 {
    if let Some(score) = terminal_score(game, player) {
        return score;
    }
    game.legal_moves_for(player).len() as f64
}

/// Every undecided position is worth zero.
pub fn null_score<G: GameState>(game: &G, player: PlayerId) -> f64 {
    terminal_score(game, player).unwrap_or(0.0)
}

/// Mobility difference that weighs the opponent's moves twice, chasing the
/// opponent rather than keeping room for itself.
pub fn aggressive_score<G: GameState>(game: &G, player: PlayerId) -> f64 {
    if let Some(score) = terminal_score(game, player) {
        return score;
    }
    let (own, opp) = mobility(game, player);
    own - 2.0 * opp
}

/// Named heuristics selectable from configuration files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    #[default]
    Improved,
    OpenMove,
    Null,
    Aggressive,
}

impl HeuristicKind {
    pub fn all() -> &'static [HeuristicKind] {
        &[
            HeuristicKind::Improved,
            HeuristicKind::OpenMove,
            HeuristicKind::Null,
            HeuristicKind::Aggressive,
        ]
    }

    pub fn name(&self) -> &'static str {
        match self {
            HeuristicKind::Improved => "improved",
            HeuristicKind::OpenMove => "open_move",
            HeuristicKind::Null => "null",
            HeuristicKind::Aggressive => "aggressive",
        }
    }

    /// The scoring function for this kind, usable wherever a [`Heuristic`] is.
    pub fn score_fn<G: GameState>(&self) -> fn(&G, PlayerId) -> f64 {
        match self {
            HeuristicKind::Improved => improved_score::<G>,
            HeuristicKind::OpenMove => open_move_score::<G>,
            HeuristicKind::Null => null_score::<G>,
            HeuristicKind::Aggressive => aggressive_score::<G>,
        }
    }
}
