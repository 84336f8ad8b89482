#![cfg_attr(not(feature = "std"), no_std)]

//! Othello (Reversi) on the standard 8×8 board.
//!
//! The engine core (`Board`, `GameEngine` and their types) builds without
//! `std`. The `std` feature adds serde snapshots, logging setup, a text
//! renderer and the terminal session used by the binaries.

#[cfg(not(feature = "std"))]
extern crate alloc;

mod bitboard;
mod board;
mod common;
mod config;
mod game;
#[cfg(feature = "std")]
pub mod cli;
#[cfg(feature = "std")]
mod logging;
#[cfg(feature = "std")]
pub mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use bitboard::{BitBoard, BitBoardError, SetBits, BB8x8};
pub use board::*;
pub use common::*;
pub use config::*;
pub use game::*;
#[cfg(feature = "std")]
pub use cli::{parse_command, parse_coord, Command};
#[cfg(feature = "std")]
pub use logging::init_logging;
#[cfg(feature = "std")]
pub use session::{InputSource, LineInput, RandomMover, Session};
#[cfg(feature = "std")]
pub use ui::{coord_to_string, render_board, render_game_over, render_status};
