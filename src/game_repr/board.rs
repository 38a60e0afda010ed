// Knight-move Isolation board
//
// Every visited cell is blocked for the rest of the game. A player's first
// move may land on any open cell; afterwards players jump like chess knights.
// Occupancy is a single u64 mask indexed row-major, so boards are capped at
// 8x8 and cloning a position for `forecast_move` is a handful of words.

use super::{GameState, Move, MoveList, PlayerId};
use crate::error::BoardError;
use std::fmt;

pub const DEFAULT_WIDTH: usize = 7;
pub const DEFAULT_HEIGHT: usize = 7;
const MAX_SIDE: usize = 8;

/// Knight jump offsets, in the order legal moves are reported.
const KNIGHT_JUMPS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    width: usize,
    height: usize,
    occupied: u64,
    locations: [Option<Move>; 2],
    active: PlayerId,
    move_count: u32,
}

impl Board {
    /// Empty board with `PlayerId::First` to move.
    pub fn new(width: usize, height: usize) -> Result<Board, BoardError> {
        if width == 0 || height == 0 || width > MAX_SIDE || height > MAX_SIDE {
            return Err(BoardError::InvalidDimensions { width, height });
        }

        Ok(Board {
            width,
            height,
            occupied: 0,
            locations: [None, None],
            active: PlayerId::First,
            move_count: 0,
        })
    }

    /// Parse an ASCII grid: `.` open, `#` blocked, `1`/`2` player positions.
    /// Whitespace inside a row is ignored and blank lines are skipped.
    pub fn from_layout(layout: &str, active: PlayerId) -> Result<Board, BoardError> {
        let rows: Vec<Vec<char>> = layout
            .lines()
            .map(|line| line.chars().filter(|c| !c.is_whitespace()).collect::<Vec<_>>())
            .filter(|row| !row.is_empty())
            .collect();

        let height = rows.len();
        let width = rows.first().map_or(0, |row| row.len());
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, row)| row.len() != width) {
            return Err(BoardError::Layout(format!(
                "row {} has {} cells, expected {}",
                i,
                row.len(),
                width
            )));
        }

        let mut board = Board::new(width, height)?;
        board.active = active;

        for (r, row) in rows.iter().enumerate() {
            for (c, &cell) in row.iter().enumerate() {
                let mv = Move::new(r as i32, c as i32);
                match cell {
                    '.' => {}
                    '#' => board.block(mv)?,
                    '1' | '2' => {
                        let player = if cell == '1' { PlayerId::First } else { PlayerId::Second };
                        if board.locations[player.index()].is_some() {
                            return Err(BoardError::Layout(format!(
                                "player {} placed twice",
                                cell
                            )));
                        }
                        board.occupy(mv);
                        board.locations[player.index()] = Some(mv);
                    }
                    other => {
                        return Err(BoardError::Layout(format!(
                            "unexpected character {:?} at {}",
                            other, mv
                        )));
                    }
                }
            }
        }

        board.move_count = board.locations.iter().flatten().count() as u32;
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of plies played so far.
    pub fn move_count(&self) -> u32 {
        self.move_count
    }

    pub fn location(&self, player: PlayerId) -> Option<Move> {
        self.locations[player.index()]
    }

    fn cell_bit(&self, mv: Move) -> Option<u64> {
        let on_board = mv.row >= 0
            && mv.col >= 0
            && (mv.row as usize) < self.height
            && (mv.col as usize) < self.width;
        on_board.then(|| 1u64 << (mv.row as usize * self.width + mv.col as usize))
    }

    /// True if `mv` is on the board and nobody has visited it.
    pub fn is_open(&self, mv: Move) -> bool {
        self.cell_bit(mv).is_some_and(|bit| self.occupied & bit == 0)
    }

    /// All open cells in row-major order.
    pub fn open_cells(&self) -> MoveList {
        let mut cells = MoveList::new();
        for row in 0..self.height as i32 {
            for col in 0..self.width as i32 {
                let mv = Move::new(row, col);
                if self.is_open(mv) {
                    cells.push(mv);
                }
            }
        }
        cells
    }

    /// Permanently block an open cell without moving anyone.
    pub fn block(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.is_open(mv) {
            return Err(BoardError::CellUnavailable { mv });
        }
        self.occupy(mv);
        Ok(())
    }

    /// Play `mv` for the active player, rejecting anything not in
    /// [`GameState::legal_moves`].
    pub fn apply_move(&mut self, mv: Move) -> Result<(), BoardError> {
        if !self.legal_moves().contains(&mv) {
            return Err(BoardError::IllegalMove {
                mv,
                player: self.active,
            });
        }
        self.play(mv);
        Ok(())
    }

    fn occupy(&mut self, mv: Move) {
        if let Some(bit) = self.cell_bit(mv) {
            self.occupied |= bit;
        }
    }

    fn play(&mut self, mv: Move) {
        self.occupy(mv);
        self.locations[self.active.index()] = Some(mv);
        self.active = self.active.opponent();
        self.move_count += 1;
    }
}

impl Default for Board {
    fn default() -> Self {
        Board {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            occupied: 0,
            locations: [None, None],
            active: PlayerId::First,
            move_count: 0,
        }
    }
}

impl GameState for Board {
    fn active_player(&self) -> PlayerId {
        self.active
    }

    fn legal_moves_for(&self, player: PlayerId) -> MoveList {
        let Some(from) = self.locations[player.index()] else {
            return self.open_cells();
        };

        KNIGHT_JUMPS
            .iter()
            .map(|&(dr, dc)| Move::new(from.row + dr, from.col + dc))
            .filter(|&mv| self.is_open(mv))
            .collect()
    }

    fn forecast_move(&self, mv: Move) -> Board {
        debug_assert!(
            self.legal_moves().contains(&mv),
            "forecast of illegal move {} for {:?}",
            mv,
            self.active
        );
        let mut next = self.clone();
        next.play(mv);
        next
    }

    fn is_winner(&self, player: PlayerId) -> bool {
        player != self.active && self.legal_moves().is_empty()
    }

    fn is_loser(&self, player: PlayerId) -> bool {
        player == self.active && self.legal_moves().is_empty()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.height as i32 {
            let cells: Vec<&str> = (0..self.width as i32)
                .map(|col| {
                    let mv = Move::new(row, col);
                    if self.locations[0] == Some(mv) {
                        "1"
                    } else if self.locations[1] == Some(mv) {
                        "2"
                    } else if self.is_open(mv) {
                        "."
                    } else {
                        "#"
                    }
                })
                .collect();
            writeln!(f, "{}", cells.join(" "))?;
        }
        Ok(())
    }
}
