//! Match runner: plays one game of Isolation between two [`Player`]s.
//!
//! The runner owns the board and the clock. Each turn it:
//! 1. Ends the game if the player to move has no legal move
//! 2. Starts a fresh wall-clock budget and asks the player for a move
//! 3. Forfeits the player if the budget ran out before it answered
//! 4. Forfeits the player if the move is not one of its legal moves
//! 5. Applies the move and passes the turn
//!
//! Both players are told the result through [`Player::game_ended`].
//!
//! # Example Flow
//!
//! ```text
//! [Opening] -> [First to move] -> [get_move under countdown]
//!   -> [Check clock] -> [Validate + apply] -> [Second to move] ...
//!   -> [Player stuck / late / illegal] -> [game_ended x2] -> GameRecord
//! ```

use crate::agent::ai::countdown;
use crate::agent::player::{EndReason, GameResult, Player};
use crate::error::BoardError;
use crate::game_repr::{Board, GameState, Move, PlayerId};
use log::{debug, info, warn};
use rand::seq::SliceRandom;
use rand::Rng;

/// Everything worth keeping about a finished game.
#[derive(Debug, Clone)]
pub struct GameRecord {
    pub winner: PlayerId,
    pub reason: EndReason,
    /// Moves played by the contenders, in order. Opening moves made before
    /// `play_game` was called are not included.
    pub history: Vec<Move>,
    pub final_board: Board,
}

impl GameRecord {
    pub fn result(&self) -> GameResult {
        GameResult {
            winner: self.winner,
            reason: self.reason,
        }
    }
}

/// Play `board` to the end. `players[0]` moves for [`PlayerId::First`] and
/// `players[1]` for [`PlayerId::Second`]; the board decides who starts.
///
/// Every turn gets its own `time_limit_ms` budget.
pub fn play_game(
    mut board: Board,
    mut players: [&mut dyn Player<Board>; 2],
    time_limit_ms: f64,
) -> GameRecord {
    let mut history = Vec::new();

    let (winner, reason) = loop {
        let active = board.active_player();
        let legal = board.legal_moves();
        if legal.is_empty() {
            break (active.opponent(), EndReason::NoLegalMoves);
        }

        let player = &mut *players[active.index()];
        let clock = countdown(time_limit_ms);
        let mv = player.get_move(&board, &legal, &clock);

        let remaining = clock();
        if remaining <= 0.0 {
            warn!(
                "{} ({:?}) overran its budget by {:.1} ms",
                player.name(),
                active,
                -remaining
            );
            break (active.opponent(), EndReason::Timeout);
        }

        if let Err(err) = board.apply_move(mv) {
            warn!("{} forfeits: {}", player.name(), err);
            break (active.opponent(), EndReason::IllegalMove);
        }

        debug!("{} ({:?}) plays {}", player.name(), active, mv);
        history.push(mv);
    };

    let result = GameResult { winner, reason };
    info!(
        "{} beats {} ({:?}) after {} moves",
        players[winner.index()].name(),
        players[winner.opponent().index()].name(),
        reason,
        history.len()
    );
    for player in players.iter_mut() {
        player.game_ended(result);
    }

    GameRecord {
        winner,
        reason,
        history,
        final_board: board,
    }
}

/// Play up to `plies` uniformly random moves so that repeated games between
/// deterministic players do not all start the same way.
///
/// Stops early if the side to move is stuck. Returns the moves played.
pub fn random_opening<R: Rng + ?Sized>(
    board: &mut Board,
    plies: u32,
    rng: &mut R,
) -> Result<Vec<Move>, BoardError> {
    let mut played = Vec::with_capacity(plies as usize);
    for _ in 0..plies {
        let legal = board.legal_moves();
        let Some(&mv) = legal.choose(rng) else {
            break;
        };
        board.apply_move(mv)?;
        played.push(mv);
    }
    Ok(played)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::RandomPlayer;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::time::Duration;

    /// Always plays the first legal move and remembers how the game ended.
    #[derive(Default)]
    struct FirstMove {
        result: Option<GameResult>,
    }

    impl Player<Board> for FirstMove {
        fn get_move(&mut self, _game: &Board, legal_moves: &[Move], _time_left: &dyn Fn() -> f64) -> Move {
            legal_moves.first().copied().unwrap_or(Move::NONE)
        }

        fn game_ended(&mut self, result: GameResult) {
            self.result = Some(result);
        }
    }

    struct Fixed(Move);

    impl Player<Board> for Fixed {
        fn get_move(&mut self, _game: &Board, _legal_moves: &[Move], _time_left: &dyn Fn() -> f64) -> Move {
            self.0
        }
    }

    struct Sleeper(Duration);

    impl Player<Board> for Sleeper {
        fn get_move(&mut self, _game: &Board, legal_moves: &[Move], _time_left: &dyn Fn() -> f64) -> Move {
            std::thread::sleep(self.0);
            legal_moves[0]
        }
    }

    #[test]
    fn test_stuck_player_loses() {
        let board = Board::from_layout(
            "1 # #
             # # #
             # # 2",
            PlayerId::First,
        )
        .unwrap();
        let mut first = FirstMove::default();
        let mut second = FirstMove::default();

        let record = play_game(board, [&mut first, &mut second], 100.0);

        assert_eq!(record.winner, PlayerId::Second);
        assert_eq!(record.reason, EndReason::NoLegalMoves);
        assert!(record.history.is_empty());
        assert_eq!(first.result, Some(record.result()));
        assert_eq!(second.result, Some(record.result()));
    }

    #[test]
    fn test_game_runs_to_completion() {
        let mut first = FirstMove::default();
        let mut second = FirstMove::default();

        let record = play_game(Board::new(4, 4).unwrap(), [&mut first, &mut second], 1_000.0);

        assert_eq!(record.reason, EndReason::NoLegalMoves);
        assert!(record.final_board.is_loser(record.winner.opponent()));
        assert!(record.final_board.is_winner(record.winner));
        assert_eq!(record.history.len() as u32, record.final_board.move_count());
        // The very first moves may land anywhere
        assert_eq!(record.history[0], Move::new(0, 0));
        assert_eq!(record.history[1], Move::new(0, 1));
    }

    #[test]
    fn test_illegal_move_forfeits() {
        let mut cheat = Fixed(Move::new(9, 9));
        let mut honest = FirstMove::default();

        let record = play_game(Board::default(), [&mut honest, &mut cheat], 1_000.0);

        assert_eq!(record.winner, PlayerId::First);
        assert_eq!(record.reason, EndReason::IllegalMove);
        assert_eq!(record.history.len(), 1);
    }

    #[test]
    fn test_sentinel_with_moves_available_forfeits() {
        let mut passer = Fixed(Move::NONE);
        let mut honest = FirstMove::default();

        let record = play_game(Board::default(), [&mut passer, &mut honest], 1_000.0);

        assert_eq!(record.winner, PlayerId::Second);
        assert_eq!(record.reason, EndReason::IllegalMove);
    }

    #[test]
    fn test_late_answer_forfeits() {
        let mut slow = Sleeper(Duration::from_millis(30));
        let mut honest = FirstMove::default();

        let record = play_game(Board::default(), [&mut slow, &mut honest], 5.0);

        assert_eq!(record.winner, PlayerId::Second);
        assert_eq!(record.reason, EndReason::Timeout);
        assert!(record.history.is_empty());
    }

    #[test]
    fn test_random_opening_plays_requested_plies() {
        let mut board = Board::default();
        let mut rng = StdRng::seed_from_u64(3);

        let played = random_opening(&mut board, 2, &mut rng).unwrap();

        assert_eq!(played.len(), 2);
        assert_eq!(board.move_count(), 2);
        assert_eq!(board.location(PlayerId::First), Some(played[0]));
        assert_eq!(board.location(PlayerId::Second), Some(played[1]));
    }

    #[test]
    fn test_random_opening_is_seeded() {
        let mut a = Board::default();
        let mut b = Board::default();
        random_opening(&mut a, 4, &mut StdRng::seed_from_u64(11)).unwrap();
        random_opening(&mut b, 4, &mut StdRng::seed_from_u64(11)).unwrap();
        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_random_opening_stops_when_stuck() {
        let mut board = Board::from_layout("1 2", PlayerId::First).unwrap();
        let played = random_opening(&mut board, 3, &mut StdRng::seed_from_u64(0)).unwrap();
        assert!(played.is_empty());
    }

    #[test]
    fn test_random_players_finish() {
        let mut first = RandomPlayer::new(1);
        let mut second = RandomPlayer::new(2);
        let record = play_game(Board::default(), [&mut first, &mut second], 1_000.0);
        assert_eq!(record.reason, EndReason::NoLegalMoves);
    }
}
