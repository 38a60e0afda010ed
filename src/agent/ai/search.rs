// Search context and iterative deepening driver
//
// A `Searcher` lives for one move decision. It carries the evaluation
// function, the deadline and the fixed "self" perspective every leaf is
// scored from, and counts nodes for the search log. Minimax and alpha-beta
// are implemented on it in their own modules; this module drives them at
// increasing depths.

use super::deadline::{Deadline, TimeExceeded};
use super::evaluation::Heuristic;
use crate::game_repr::{GameState, Move, PlayerId};
use log::{debug, trace};
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Score and best move of one search node.
///
/// Leaves carry [`Move::NONE`]; the score is unbounded and may be infinite
/// for decided positions.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchResult {
    pub score: f64,
    pub best_move: Move,
}

impl SearchResult {
    pub fn new(score: f64, best_move: Move) -> Self {
        Self { score, best_move }
    }

    pub fn leaf(score: f64) -> Self {
        Self::new(score, Move::NONE)
    }

    /// Placeholder before any child has been searched: the first move with
    /// the worst score for the side to play, so any real child can replace it.
    pub(super) fn unscored(first_move: Move, maximizing: bool) -> Self {
        let score = if maximizing { f64::NEG_INFINITY } else { f64::INFINITY };
        Self::new(score, first_move)
    }
}

/// Whether a child score replaces the running best on this ply.
///
/// Strict comparison: among equal scores the first enumerated move is kept.
pub(super) fn improves(maximizing: bool, candidate: f64, current: f64) -> bool {
    if maximizing {
        candidate > current
    } else {
        candidate < current
    }
}

/// Tree search algorithm used by the move selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SearchMethod {
    #[default]
    Minimax,
    AlphaBeta,
}

impl SearchMethod {
    pub fn name(&self) -> &'static str {
        match self {
            SearchMethod::Minimax => "minimax",
            SearchMethod::AlphaBeta => "alphabeta",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown search method {0:?}, expected \"minimax\" or \"alphabeta\"")]
pub struct UnknownSearchMethod(pub String);

impl FromStr for SearchMethod {
    type Err = UnknownSearchMethod;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "minimax" => Ok(SearchMethod::Minimax),
            "alphabeta" => Ok(SearchMethod::AlphaBeta),
            other => Err(UnknownSearchMethod(other.to_string())),
        }
    }
}

/// Result of the deepest fully searched depth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CompletedDepth {
    pub depth: u32,
    pub result: SearchResult,
    /// Nodes visited across all iterations up to and including this one
    pub nodes: u64,
}

/// Per-decision search state.
pub struct Searcher<'a, G> {
    heuristic: &'a dyn Heuristic<G>,
    deadline: Deadline<'a>,
    perspective: PlayerId,
    nodes: u64,
    cutoffs: u64,
}

impl<'a, G: GameState> Searcher<'a, G> {
    pub fn new(heuristic: &'a dyn Heuristic<G>, deadline: Deadline<'a>, perspective: PlayerId) -> Self {
        Self {
            heuristic,
            deadline,
            perspective,
            nodes: 0,
            cutoffs: 0,
        }
    }

    pub fn perspective(&self) -> PlayerId {
        self.perspective
    }

    /// Nodes entered so far, including the one that hit the deadline.
    pub fn nodes(&self) -> u64 {
        self.nodes
    }

    /// Sibling loops cut short by alpha-beta.
    pub fn cutoffs(&self) -> u64 {
        self.cutoffs
    }

    /// Node entry: poll the deadline before doing any work.
    pub(super) fn enter(&mut self) -> Result<(), TimeExceeded> {
        self.nodes += 1;
        self.deadline.check()
    }

    pub(super) fn record_cutoff(&mut self) {
        self.cutoffs += 1;
    }

    /// Leaf score, always from the perspective fixed at the root.
    pub(super) fn leaf(&self, game: &G) -> SearchResult {
        SearchResult::leaf(self.heuristic.evaluate(game, self.perspective))
    }

    /// One fixed-depth search from the root, maximizing for the perspective player.
    pub fn search(&mut self, game: &G, depth: u32, method: SearchMethod) -> Result<SearchResult, TimeExceeded> {
        match method {
            SearchMethod::Minimax => self.minimax(game, depth, true),
            SearchMethod::AlphaBeta => {
                self.alphabeta(game, depth, f64::NEG_INFINITY, f64::INFINITY, true)
            }
        }
    }

    /// Search at depth 1, 2, 3, ... until the deadline fires or `max_depth`
    /// has been completed.
    ///
    /// `best` is overwritten after every depth that finishes, so when this
    /// returns `Err(TimeExceeded)` it still holds the deepest complete result
    /// and the aborted depth leaves no trace.
    pub fn iterative_deepening(
        &mut self,
        game: &G,
        method: SearchMethod,
        max_depth: Option<u32>,
        best: &mut Option<CompletedDepth>,
    ) -> Result<(), TimeExceeded> {
        for depth in 1.. {
            if max_depth.is_some_and(|max| depth > max) {
                break;
            }

            let result = match self.search(game, depth, method) {
                Ok(result) => result,
                Err(signal) => {
                    trace!("abandoning depth {} after {} nodes: {}", depth, self.nodes, signal);
                    return Err(signal);
                }
            };

            *best = Some(CompletedDepth {
                depth,
                result,
                nodes: self.nodes,
            });
            debug!(
                "{} depth {} score {} move {} nodes {} cutoffs {}",
                method.name(),
                depth,
                result.score,
                result.best_move,
                self.nodes,
                self.cutoffs
            );
        }
        Ok(())
    }
}
