// AI Agent - Minimax / Alpha-Beta with a hard deadline
//
// This module implements the Isolation search agent: depth-limited minimax
// and alpha-beta over positions generated on demand, driven by iterative
// deepening and cut off by a caller-supplied clock.
//
// Key features:
// - Deterministic (same position and clock readings always give same move)
// - Pluggable leaf evaluation, always scored from the searching player's side
// - Deadline polled at every node; the aborted depth is discarded
// - Alpha-beta returns exactly the minimax result, only faster

mod alphabeta;
mod deadline;
mod evaluation;
mod minimax;
mod search;
mod search_player;

#[cfg(test)]
mod tests;

pub use deadline::{countdown, Deadline, TimeExceeded, DEFAULT_TIMEOUT_MS};
pub use evaluation::{
    aggressive_score, improved_score, null_score, open_move_score, Heuristic, HeuristicKind,
};
pub use search::{CompletedDepth, SearchMethod, SearchResult, Searcher, UnknownSearchMethod};
pub use search_player::{Difficulty, SearchPlayer};
