use super::*;
use crate::error::BoardError;

// ==================== HELPER FUNCTIONS ====================

/// Build a board from an ASCII layout, panicking on malformed fixtures
pub fn board(layout: &str, active: PlayerId) -> Board {
    Board::from_layout(layout, active).expect("valid test layout")
}

/// Collect a move list as plain coordinate pairs for easy comparison
pub fn coords(moves: &[Move]) -> Vec<(i32, i32)> {
    moves.iter().map(|&m| m.into()).collect()
}

// ==================== TEST MODULES ====================
