//! Common types for Othello: players, cells, scores and board errors.

use crate::bitboard::BitBoardError;
use core::fmt;

/// One of the two sides. Black always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Player {
    #[default]
    Black,
    White,
}

impl Player {
    /// The other side.
    pub const fn opponent(self) -> Self {
        match self {
            Player::Black => Player::White,
            Player::White => Player::Black,
        }
    }
}

impl core::ops::Not for Player {
    type Output = Self;

    fn not(self) -> Self {
        self.opponent()
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Black => f.write_str("Black"),
            Player::White => f.write_str("White"),
        }
    }
}

/// Contents of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Cell {
    #[default]
    Empty,
    Black,
    White,
}

impl Cell {
    /// Owner of the disc in this cell, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Black => Some(Player::Black),
            Cell::White => Some(Player::White),
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        match player {
            Player::Black => Cell::Black,
            Player::White => Cell::White,
        }
    }
}

/// Final result of a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    BlackWins,
    WhiteWins,
    Tie,
}

impl Outcome {
    pub fn winner(self) -> Option<Player> {
        match self {
            Outcome::BlackWins => Some(Player::Black),
            Outcome::WhiteWins => Some(Player::White),
            Outcome::Tie => None,
        }
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::BlackWins => f.write_str("Black wins!"),
            Outcome::WhiteWins => f.write_str("White wins!"),
            Outcome::Tie => f.write_str("It's a tie!"),
        }
    }
}

/// Compare disc counts; equal counts are a tie.
pub fn determine_winner(black: usize, white: usize) -> Outcome {
    match black.cmp(&white) {
        core::cmp::Ordering::Greater => Outcome::BlackWins,
        core::cmp::Ordering::Less => Outcome::WhiteWins,
        core::cmp::Ordering::Equal => Outcome::Tie,
    }
}

/// Disc counts for both sides. Always derived from a board, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    pub black: usize,
    pub white: usize,
}

impl Score {
    pub fn total(&self) -> usize {
        self.black + self.white
    }

    /// Number of empty cells on the 8×8 board.
    pub fn empty(&self) -> usize {
        crate::config::NUM_CELLS - self.total()
    }

    pub fn outcome(&self) -> Outcome {
        determine_winner(self.black, self.white)
    }

    pub fn of(&self, player: Player) -> usize {
        match player {
            Player::Black => self.black,
            Player::White => self.white,
        }
    }
}

/// Coarse game status, derived from whether anyone can still move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Over,
}

/// Whose move it is, or that nobody can move any more.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum TurnState {
    BlackToMove,
    WhiteToMove,
    GameOver,
}

/// Errors returned by Board and GameEngine operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying bitboard error (coordinates off the board).
    BitBoardError(BitBoardError),
    /// Target cell already holds a disc.
    CellOccupied { row: usize, col: usize },
    /// No direction brackets an opponent run.
    NoCapture { row: usize, col: usize },
    /// Neither player can move; only a reset is accepted.
    GameOver,
    /// A snapshot placed a black and a white disc on the same cell.
    OverlappingDiscs,
}

impl BoardError {
    /// True for the expected, recoverable rejections of a submitted move.
    pub fn is_invalid_move(&self) -> bool {
        matches!(
            self,
            BoardError::CellOccupied { .. } | BoardError::NoCapture { .. } | BoardError::GameOver
        )
    }
}

impl From<BitBoardError> for BoardError {
    fn from(err: BitBoardError) -> Self {
        BoardError::BitBoardError(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::BitBoardError(e) => write!(f, "BitBoard error: {}", e),
            BoardError::CellOccupied { row, col } => {
                write!(f, "Cell ({}, {}) is already occupied", row, col)
            }
            BoardError::NoCapture { row, col } => {
                write!(f, "A disc at ({}, {}) would not flip anything", row, col)
            }
            BoardError::GameOver => write!(f, "The game is over"),
            BoardError::OverlappingDiscs => write!(f, "Black and white discs overlap"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}
