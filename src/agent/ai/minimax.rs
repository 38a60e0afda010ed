// Plain depth-limited minimax
//
// Maximizing and minimizing plies alternate; every leaf is scored from the
// root player's point of view. Kept alongside alpha-beta as the reference
// the pruned search must agree with.

use super::deadline::TimeExceeded;
use super::search::{improves, SearchResult, Searcher};
use crate::game_repr::GameState;

impl<G: GameState> Searcher<'_, G> {
    /// Minimax search `depth` plies below `game`.
    ///
    /// Returns the best score and the move that reaches it. At depth 0 or on
    /// a position where the side to move is stuck, the position itself is
    /// evaluated and the move is [`Move::NONE`](crate::game_repr::Move::NONE).
    pub fn minimax(&mut self, game: &G, depth: u32, maximizing: bool) -> Result<SearchResult, TimeExceeded> {
        self.enter()?;

        if depth == 0 {
            return Ok(self.leaf(game));
        }

        let moves = game.legal_moves();
        let Some(&first) = moves.first() else {
            return Ok(self.leaf(game));
        };

        let mut best = SearchResult::unscored(first, maximizing);
        for &mv in &moves {
            let child = self.minimax(&game.forecast_move(mv), depth - 1, !maximizing)?;
            if improves(maximizing, child.score, best.score) {
                best = SearchResult::new(child.score, mv);
            }
        }

        Ok(best)
    }
}
