//! SearchPlayer - time-bounded minimax / alpha-beta Isolation agent
//!
//! This is the move selector facade over the search core. Per move it:
//! - returns [`Move::NONE`] straight away when there is nothing to play
//! - falls back to the first legal move in case no search depth completes
//! - runs iterative deepening (or one fixed-depth search) with the configured
//!   method, polling the caller's clock at every node
//! - swallows the deadline signal and answers with the deepest complete result
//!
//! # Examples
//!
//! ```
//! use isolation_agent::agent::ai::{SearchPlayer, Difficulty};
//! use isolation_agent::agent::Player;
//! use isolation_agent::game_repr::{Board, GameState};
//!
//! let board = Board::default();
//! let mut ai: SearchPlayer<Board> = SearchPlayer::with_difficulty(Difficulty::Medium);
//! let legal = board.legal_moves();
//! let mv = ai.get_move(&board, &legal, &|| 1_000.0);
//! assert!(legal.contains(&mv));
//! ```

use super::deadline::Deadline;
use super::evaluation::{Heuristic, HeuristicKind};
use super::search::{CompletedDepth, SearchMethod, Searcher};
use crate::agent::player::Player;
use crate::config::SearchConfig;
use crate::game_repr::{GameState, Move};
use log::{debug, trace};

/// Preset agent strengths.
///
/// - **Easy**: fixed depth 1 minimax
/// - **Medium**: fixed depth 3 alpha-beta
/// - **Hard**: iterative deepening minimax
/// - **Expert**: iterative deepening alpha-beta
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
    Expert,
}

impl Difficulty {
    pub fn all() -> &'static [Difficulty] {
        &[
            Difficulty::Easy,
            Difficulty::Medium,
            Difficulty::Hard,
            Difficulty::Expert,
        ]
    }

    pub fn config(&self) -> SearchConfig {
        let heuristic = HeuristicKind::Improved;
        match self {
            Difficulty::Easy => SearchConfig::fixed(SearchMethod::Minimax, 1, heuristic),
            Difficulty::Medium => SearchConfig::fixed(SearchMethod::AlphaBeta, 3, heuristic),
            Difficulty::Hard => SearchConfig::iterative(SearchMethod::Minimax, heuristic),
            Difficulty::Expert => SearchConfig::iterative(SearchMethod::AlphaBeta, heuristic),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Easy => "Easy",
            Difficulty::Medium => "Medium",
            Difficulty::Hard => "Hard",
            Difficulty::Expert => "Expert",
        }
    }
}

/// Game-playing agent choosing moves by depth-limited minimax or alpha-beta
/// search under a wall-clock deadline.
///
/// Holds no game state between calls. The `time_left` callback is only
/// borrowed for the duration of one `get_move`.
pub struct SearchPlayer<G> {
    config: SearchConfig,
    heuristic: Box<dyn Heuristic<G>>,
    name: String,
    /// Diagnostics of the most recent decision; never read by the search
    last_search: Option<CompletedDepth>,
}

impl<G: GameState + 'static> SearchPlayer<G> {
    /// Agent scoring leaves with the heuristic named in `config`.
    pub fn new(config: SearchConfig) -> Self {
        Self::with_heuristic(config, config.heuristic.score_fn::<G>())
    }

    /// Agent scoring leaves with any pluggable heuristic, overriding
    /// `config.heuristic`.
    pub fn with_heuristic(config: SearchConfig, heuristic: impl Heuristic<G> + 'static) -> Self {
        Self {
            name: default_name(&config),
            config,
            heuristic: Box::new(heuristic),
            last_search: None,
        }
    }

    pub fn with_difficulty(difficulty: Difficulty) -> Self {
        Self::new(difficulty.config()).named(&format!("AI ({})", difficulty.name()))
    }
}

impl<G> SearchPlayer<G> {
    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Deepest complete search of the last `get_move`, if any depth finished.
    pub fn last_search(&self) -> Option<CompletedDepth> {
        self.last_search
    }
}

fn default_name(config: &SearchConfig) -> String {
    let depth = if config.iterative {
        "id".to_string()
    } else {
        format!("d{}", config.search_depth)
    };
    format!("{}/{}/{}", config.method.name(), config.heuristic.name(), depth)
}

impl<G: GameState> Player<G> for SearchPlayer<G> {
    fn get_move(&mut self, game: &G, legal_moves: &[Move], time_left: &dyn Fn() -> f64) -> Move {
        self.last_search = None;

        let Some(&fallback) = legal_moves.first() else {
            return Move::NONE;
        };

        let deadline = Deadline::new(time_left, self.config.timeout);
        let mut searcher = Searcher::new(self.heuristic.as_ref(), deadline, game.active_player());
        let method = self.config.method;
        let mut best: Option<CompletedDepth> = None;

        let outcome = if self.config.iterative {
            searcher.iterative_deepening(game, method, self.config.max_depth, &mut best)
        } else {
            let depth = self.config.search_depth;
            searcher.search(game, depth, method).map(|result| {
                best = Some(CompletedDepth {
                    depth,
                    result,
                    nodes: searcher.nodes(),
                });
            })
        };

        // Running out of time is the normal way an iterative search ends
        if let Err(signal) = outcome {
            trace!("[{}] search stopped: {}", self.name, signal);
        }

        self.last_search = best;
        let chosen = match best {
            Some(done) if !done.result.best_move.is_none() => done.result.best_move,
            _ => fallback,
        };

        debug!(
            "[{}] chose {} at depth {} ({} nodes)",
            self.name,
            chosen,
            best.map_or(0, |done| done.depth),
            searcher.nodes()
        );
        chosen
    }

    fn name(&self) -> &str {
        &self.name
    }
}
