//! Player trait and associated types for Isolation agents.
//!
//! This module provides the core abstraction for anything that can pick a move:
//! the search agent, the random and greedy baselines, or a test double. The
//! match runner in [`crate::orchestrator`] only talks to players through this
//! trait.
//!
//! # Design Philosophy
//!
//! The `Player` trait focuses on **behavior** rather than construction. Each
//! player type needs different settings (a search configuration, a random seed,
//! a heuristic), so the trait has no constructor and every implementation
//! provides its own.
//!
//! # Synchronous Design
//!
//! `get_move()` is blocking. The caller passes a `time_left` callback and the
//! player must return before it reaches zero; a player that overruns loses the
//! game. Time control is cooperative: nothing interrupts a player from outside.

use crate::game_repr::{GameState, Move, PlayerId};

/// Why a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EndReason {
    /// The loser had no legal move on their turn
    NoLegalMoves,
    /// The loser returned after their clock ran out
    Timeout,
    /// The loser returned a move outside their legal move list
    IllegalMove,
}

/// Result of a completed game, passed to players via `game_ended()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameResult {
    pub winner: PlayerId,
    pub reason: EndReason,
}

impl GameResult {
    pub fn loser(&self) -> PlayerId {
        self.winner.opponent()
    }
}

/// Trait for entities that can provide Isolation moves.
///
/// # Required Methods
///
/// Only `get_move()` must be implemented. `game_ended()` and `name()` have
/// default implementations.
pub trait Player<G: GameState> {
    /// Choose a move for the player to move in `game`.
    ///
    /// `legal_moves` are the moves available to that player, in generation
    /// order. `time_left` reports the milliseconds remaining for this turn.
    ///
    /// # Return Value
    ///
    /// One of `legal_moves`, or [`Move::NONE`] when `legal_moves` is empty.
    fn get_move(&mut self, game: &G, legal_moves: &[Move], time_left: &dyn Fn() -> f64) -> Move;

    /// Notify this player that the game has ended.
    ///
    /// Does nothing by default.
    fn game_ended(&mut self, _result: GameResult) {}

    /// Display name used in logs and tournament tables.
    fn name(&self) -> &str {
        "Player"
    }
}
