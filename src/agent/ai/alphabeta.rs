// Minimax with Alpha-Beta Pruning
//
// Same tree, same leaf evaluation and same first-best tie-break as minimax.
// alpha is the score the maximizer is already guaranteed, beta the score the
// minimizer is already guaranteed. Bounds are passed down by value and
// tightened left to right across the sibling loop; once alpha >= beta the
// remaining siblings cannot change the parent's choice and are skipped.

use super::deadline::TimeExceeded;
use super::search::{improves, SearchResult, Searcher};
use crate::game_repr::GameState;

impl<G: GameState> Searcher<'_, G> {
    /// Alpha-beta search `depth` plies below `game` within `(alpha, beta)`.
    ///
    /// Called from the root with `(-inf, +inf)` this returns exactly what
    /// [`Searcher::minimax`] returns, score and move, while visiting fewer nodes.
    pub fn alphabeta(
        &mut self,
        game: &G,
        depth: u32,
        mut alpha: f64,
        mut beta: f64,
        maximizing: bool,
    ) -> Result<SearchResult, TimeExceeded> {
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
            let child = self.alphabeta(&game.forecast_move(mv), depth - 1, alpha, beta, !maximizing)?;

            if !improves(maximizing, child.score, best.score) {
                continue;
            }
            best = SearchResult::new(child.score, mv);

            // Only the acting side's bound moves
            if maximizing {
                if child.score > alpha {
                    alpha = child.score;
                }
            } else if child.score < beta {
                beta = child.score;
            }

            if alpha >= beta {
                self.record_cutoff();
                break;
            }
        }

        Ok(best)
    }
}
