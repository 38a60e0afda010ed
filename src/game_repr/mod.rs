//! Game representation consumed by the search core.
//!
//! The search never looks inside a board: it only asks for legal moves,
//! successor states and win/loss predicates through [`GameState`]. [`Board`]
//! is the knight-move Isolation implementation used by the players, the match
//! runner and the tests.

mod board;
mod moves;

#[cfg(test)]
mod tests;

pub use board::*;
pub use moves::*;

/// One of the two participants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    First,
    Second,
}

impl PlayerId {
    pub fn opponent(&self) -> PlayerId {
        match self {
            PlayerId::First => PlayerId::Second,
            PlayerId::Second => PlayerId::First,
        }
    }

    pub(crate) fn index(&self) -> usize {
        match self {
            PlayerId::First => 0,
            PlayerId::Second => 1,
        }
    }
}

/// Read-only view of a two-player, perfect-information game position.
///
/// Implementations have value semantics: `forecast_move` returns a new state
/// and leaves the receiver untouched, so a search can hold on to every
/// ancestor of the node it is expanding.
pub trait GameState {
    /// Player whose turn it is.
    fn active_player(&self) -> PlayerId;

    /// Moves `player` could make from this position. Empty means that player
    /// is stuck, which loses the game when it is their turn.
    fn legal_moves_for(&self, player: PlayerId) -> MoveList;

    /// Legal moves of the player to move.
    fn legal_moves(&self) -> MoveList {
        self.legal_moves_for(self.active_player())
    }

    /// Successor state after the active player plays `mv`.
    fn forecast_move(&self, mv: Move) -> Self
    where
        Self: Sized;

    fn is_winner(&self, player: PlayerId) -> bool;

    fn is_loser(&self, player: PlayerId) -> bool;

    fn get_opponent(&self, player: PlayerId) -> PlayerId {
        player.opponent()
    }
}
