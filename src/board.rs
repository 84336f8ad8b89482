//! Board state and the move rules: ray scans, legality and captures.
//!
//! Coordinates are `(row, col)` with `(0, 0)` in the upper-left corner.
//! Every rule is built on [`Board::scan_ray`], which walks one of the eight
//! directions away from a target cell and reports whether it ends in a
//! capturable opponent run.

use crate::bitboard::BB8x8;
use crate::common::{BoardError, Cell, Player, Score};
use crate::config::{BOARD_SIZE, DIRECTIONS, NUM_CELLS, STARTING_DISCS};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;
use core::fmt;

const SIZE: usize = BOARD_SIZE as usize;

/// Result of walking a single direction from a target cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ray {
    /// The walk met the edge, an empty cell, or an own disc with no opponent
    /// discs before it. Nothing flips along this direction.
    Blocked,
    /// Opponent discs bracketed by one of the player's own discs.
    Capture(BB8x8),
}

/// Serializable board snapshot: one raw row-major mask per colour.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardState {
    pub black: u64,
    pub white: u64,
}

/// The 8×8 grid. Each cell is empty or holds one disc.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    black: BB8x8,
    white: BB8x8,
}

#[inline]
fn bit(row: usize, col: usize) -> BB8x8 {
    BB8x8::from_raw(1u64 << (row * SIZE + col))
}

#[inline]
fn step(row: usize, col: usize, (dr, dc): (isize, isize)) -> Option<(usize, usize)> {
    let r = row.checked_add_signed(dr)?;
    let c = col.checked_add_signed(dc)?;
    (r < SIZE && c < SIZE).then_some((r, c))
}

impl Board {
    /// Create the standard starting position.
    pub fn new() -> Self {
        let mut board = Self::empty();
        for (row, col, player) in STARTING_DISCS {
            *board.discs_mut(player) |= bit(row, col);
        }
        board
    }

    /// Create a board with no discs, for building positions by hand.
    pub fn empty() -> Self {
        Board {
            black: BB8x8::new(),
            white: BB8x8::new(),
        }
    }

    /// Mask of the cells holding `player`'s discs.
    pub fn discs(&self, player: Player) -> BB8x8 {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }

    fn discs_mut(&mut self, player: Player) -> &mut BB8x8 {
        match player {
            Player::Black => &mut self.black,
            Player::White => &mut self.white,
        }
    }

    /// Mask of all occupied cells.
    pub fn occupied(&self) -> BB8x8 {
        self.black | self.white
    }

    /// Contents of the cell at (row, col).
    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        if self.black.get(row, col)? {
            Ok(Cell::Black)
        } else if self.white.get(row, col)? {
            Ok(Cell::White)
        } else {
            Ok(Cell::Empty)
        }
    }

    /// Overwrite a single cell. Used to set up positions, not to play moves.
    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<(), BoardError> {
        self.black.clear(row, col)?;
        self.white.clear(row, col)?;
        if let Some(player) = cell.owner() {
            self.discs_mut(player).set(row, col)?;
        }
        Ok(())
    }

    fn owner_at(&self, row: usize, col: usize) -> Option<Player> {
        let cell = bit(row, col);
        if !(self.black & cell).is_empty() {
            Some(Player::Black)
        } else if !(self.white & cell).is_empty() {
            Some(Player::White)
        } else {
            None
        }
    }

    /// Walk from (row, col) along `dir` and classify what `player` would
    /// capture there. The target cell itself is not inspected. A walk that
    /// leaves the board before reaching an own disc captures nothing.
    pub fn scan_ray(&self, row: usize, col: usize, dir: (isize, isize), player: Player) -> Ray {
        if row >= SIZE || col >= SIZE {
            return Ray::Blocked;
        }
        let mut run = BB8x8::new();
        let mut pos = step(row, col, dir);
        while let Some((r, c)) = pos {
            match self.owner_at(r, c) {
                None => return Ray::Blocked,
                Some(owner) if owner == player => {
                    return if run.is_empty() {
                        Ray::Blocked
                    } else {
                        Ray::Capture(run)
                    };
                }
                Some(_) => run |= bit(r, c),
            }
            pos = step(r, c, dir);
        }
        Ray::Blocked
    }

    /// All discs `player` would flip by playing at (row, col).
    pub fn captures(&self, row: usize, col: usize, player: Player) -> Result<BB8x8, BoardError> {
        if self.occupied().get(row, col)? {
            return Err(BoardError::CellOccupied { row, col });
        }
        let mut flips = BB8x8::new();
        for dir in DIRECTIONS {
            if let Ray::Capture(run) = self.scan_ray(row, col, dir, player) {
                flips |= run;
            }
        }
        if flips.is_empty() {
            Err(BoardError::NoCapture { row, col })
        } else {
            Ok(flips)
        }
    }

    /// Whether `player` may place a disc at (row, col). Off-board
    /// coordinates are never valid.
    pub fn is_valid_move(&self, row: usize, col: usize, player: Player) -> bool {
        match self.occupied().get(row, col) {
            Ok(false) => DIRECTIONS
                .iter()
                .any(|&dir| matches!(self.scan_ray(row, col, dir, player), Ray::Capture(_))),
            _ => false,
        }
    }

    /// Place `player`'s disc at (row, col) and flip every captured run.
    /// Returns the number of flipped discs. On error the board is unchanged.
    pub fn apply_move(&mut self, row: usize, col: usize, player: Player) -> Result<usize, BoardError> {
        let flips = self.captures(row, col, player)?;
        *self.discs_mut(player) |= flips | bit(row, col);
        *self.discs_mut(player.opponent()) &= !flips;
        Ok(flips.count_ones())
    }

    /// Mask of every legal target for `player`.
    pub fn valid_move_mask(&self, player: Player) -> BB8x8 {
        let mut mask = BB8x8::new();
        for (row, col) in (!self.occupied()).iter_set_bits() {
            if self.is_valid_move(row, col, player) {
                mask |= bit(row, col);
            }
        }
        mask
    }

    /// Legal targets for `player` in row-major order.
    pub fn valid_moves(&self, player: Player) -> Vec<(usize, usize)> {
        self.valid_move_mask(player).iter_set_bits().collect()
    }

    pub fn has_any_valid_move(&self, player: Player) -> bool {
        (!self.occupied())
            .iter_set_bits()
            .any(|(row, col)| self.is_valid_move(row, col, player))
    }

    /// Count discs of each colour.
    pub fn score(&self) -> Score {
        Score {
            black: self.black.count_ones(),
            white: self.white.count_ones(),
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board {{ black: {:?}, white: {:?} }}", self.black, self.white)
    }
}

/// Labelled grid: `B` black, `W` white, `.` empty.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "   A B C D E F G H")?;
        for row in 0..SIZE {
            write!(f, "\n {} ", row + 1)?;
            for col in 0..SIZE {
                let ch = match self.owner_at(row, col) {
                    Some(Player::Black) => 'B',
                    Some(Player::White) => 'W',
                    None => '.',
                };
                write!(f, "{} ", ch)?;
            }
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseBoardError {
    /// The string did not describe exactly 64 cells.
    WrongLength(usize),
    InvalidChar(char),
}

impl fmt::Display for ParseBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseBoardError::WrongLength(n) => {
                write!(f, "expected {} cells, found {}", NUM_CELLS, n)
            }
            ParseBoardError::InvalidChar(c) => write!(f, "invalid cell character '{}'", c),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseBoardError {}

/// Parse 64 row-major cells. `B`, `X` or `#` is black, `W` or `O` is
/// white, `.` or `-` is empty; whitespace is ignored.
impl core::str::FromStr for Board {
    type Err = ParseBoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut board = Board::empty();
        let mut idx = 0;
        for ch in s.chars().filter(|c| !c.is_whitespace()) {
            let owner = match ch.to_ascii_uppercase() {
                'B' | 'X' | '#' => Some(Player::Black),
                'W' | 'O' => Some(Player::White),
                '.' | '-' => None,
                other => return Err(ParseBoardError::InvalidChar(other)),
            };
            if idx < NUM_CELLS {
                if let Some(player) = owner {
                    *board.discs_mut(player) |= bit(idx / SIZE, idx % SIZE);
                }
            }
            idx += 1;
        }
        if idx != NUM_CELLS {
            return Err(ParseBoardError::WrongLength(idx));
        }
        Ok(board)
    }
}

impl From<&Board> for BoardState {
    fn from(board: &Board) -> Self {
        BoardState {
            black: board.black.into_raw(),
            white: board.white.into_raw(),
        }
    }
}

impl TryFrom<BoardState> for Board {
    type Error = BoardError;

    fn try_from(state: BoardState) -> Result<Self, Self::Error> {
        if state.black & state.white != 0 {
            return Err(BoardError::OverlappingDiscs);
        }
        Ok(Board {
            black: BB8x8::from_raw(state.black),
            white: BB8x8::from_raw(state.white),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_stops_at_edges() {
        assert_eq!(step(0, 0, (-1, 0)), None);
        assert_eq!(step(0, 7, (0, 1)), None);
        assert_eq!(step(7, 7, (1, 1)), None);
        assert_eq!(step(3, 3, (1, -1)), Some((4, 2)));
    }

    #[test]
    fn scan_ray_from_opening() {
        let board = Board::new();
        // D3 looking south: white (3,3) then black (4,3).
        assert_eq!(
            board.scan_ray(2, 3, (1, 0), Player::Black),
            Ray::Capture(bit(3, 3))
        );
        // Own disc straight away.
        assert_eq!(board.scan_ray(2, 4, (1, 0), Player::Black), Ray::Blocked);
        // Empty neighbour.
        assert_eq!(board.scan_ray(2, 3, (-1, 0), Player::Black), Ray::Blocked);
    }

    #[test]
    fn scan_ray_off_board_start_is_blocked() {
        let board = Board::new();
        assert_eq!(board.scan_ray(8, 3, (-1, 0), Player::Black), Ray::Blocked);
    }

    #[test]
    fn display_marks_discs() {
        let text = Board::new().to_string();
        assert!(text.starts_with("   A B C D E F G H"));
        assert!(text.contains(" 4 . . . W B . . . "));
        assert!(text.contains(" 5 . . . B W . . . "));
    }
}
