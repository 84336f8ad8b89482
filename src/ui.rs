#![cfg(feature = "std")]

//! Text rendering of engine state. Everything here is a pure projection
//! of a [`GameEngine`]; nothing in this module changes the game.

use crate::{
    common::{Cell, GameStatus},
    config::BOARD_SIZE,
    game::GameEngine,
};
use std::collections::HashSet;
use std::fmt::Write;

const SIZE: usize = BOARD_SIZE as usize;

const BLACK_DISC: char = '●';
const WHITE_DISC: char = '○';
const HINT: char = '*';
const EMPTY: char = '.';

/// Algebraic name of a cell: column letter then 1-based row ("D3").
pub fn coord_to_string(r: usize, c: usize) -> String {
    let col = (b'A' + c as u8) as char;
    format!("{}{}", col, r + 1)
}

/// Draw the board in a frame. With `hints`, empty cells that are legal
/// for the side to move are marked with `*`.
pub fn render_board(engine: &GameEngine, hints: bool) -> String {
    let legal: HashSet<(usize, usize)> = if hints {
        engine.valid_moves().into_iter().collect()
    } else {
        HashSet::new()
    };

    let mut lines = Vec::with_capacity(SIZE + 1);
    let mut header = String::from("   ");
    for c in 0..SIZE {
        let _ = write!(header, " {}", (b'A' + c as u8) as char);
    }
    header.push(' ');
    lines.push(header);

    for r in 0..SIZE {
        let mut line = format!(" {:>2}", r + 1);
        for c in 0..SIZE {
            let ch = match engine.cell(r, c) {
                Ok(Cell::Black) => BLACK_DISC,
                Ok(Cell::White) => WHITE_DISC,
                _ if legal.contains(&(r, c)) => HINT,
                _ => EMPTY,
            };
            let _ = write!(line, " {}", ch);
        }
        line.push(' ');
        lines.push(line);
    }

    let width = lines[0].chars().count();
    let bar = "═".repeat(width);
    let mut out = String::new();
    let _ = writeln!(out, "    ╔{}╗", bar);
    let _ = writeln!(out, "    ║{}║", lines[0]);
    let _ = writeln!(out, "    ╠{}╣", bar);
    for line in &lines[1..] {
        let _ = writeln!(out, "    ║{}║", line);
    }
    let _ = writeln!(out, "    ╚{}╝", bar);
    if hints {
        let _ = write!(
            out,
            "    Legend: {}=Black  {}=White  {}=Legal move  {}=Empty",
            BLACK_DISC, WHITE_DISC, HINT, EMPTY
        );
    } else {
        let _ = write!(
            out,
            "    Legend: {}=Black  {}=White  {}=Empty",
            BLACK_DISC, WHITE_DISC, EMPTY
        );
    }
    out
}

/// Turn indicator and score line, plus a note when a turn was skipped.
pub fn render_status(engine: &GameEngine) -> String {
    let score = engine.score();
    let mut out = match engine.status() {
        GameStatus::InProgress => format!("Current turn: {}\n", engine.current_player()),
        GameStatus::Over => String::from("Game over\n"),
    };
    let _ = write!(out, "Black: {}  White: {}", score.black, score.white);
    if let Some(skipped) = engine.last_pass() {
        let _ = write!(
            out,
            "\n{} has no legal move and passes; {} plays again.",
            skipped,
            skipped.opponent()
        );
    }
    out
}

/// Final score and winner text, once the game is over.
pub fn render_game_over(engine: &GameEngine) -> Option<String> {
    let score = engine.score();
    engine
        .outcome()
        .map(|outcome| format!("{} - {}. {}", score.black, score.white, outcome))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Player};

    #[test]
    fn coords_are_algebraic() {
        assert_eq!(coord_to_string(0, 0), "A1");
        assert_eq!(coord_to_string(2, 3), "D3");
        assert_eq!(coord_to_string(7, 7), "H8");
    }

    #[test]
    fn opening_board_shows_four_hints() {
        let engine = GameEngine::new();
        let text = render_board(&engine, true);
        assert_eq!(text.matches(HINT).count() - 1, 4, "legend also has one marker");
        assert_eq!(text.matches(BLACK_DISC).count() - 1, 2);
        assert_eq!(text.matches(WHITE_DISC).count() - 1, 2);
        assert!(text.contains("  4 . . * ○ ● . . . "));

        let plain = render_board(&engine, false);
        assert!(!plain.contains(HINT));
        assert!(plain.contains("  4 . . . ○ ● . . . "));
    }

    #[test]
    fn status_shows_turn_and_score() {
        let mut engine = GameEngine::new();
        assert_eq!(render_status(&engine), "Current turn: Black\nBlack: 2  White: 2");
        engine.submit_move(2, 3).unwrap();
        assert_eq!(render_status(&engine), "Current turn: White\nBlack: 4  White: 1");
        assert_eq!(render_game_over(&engine), None);
    }

    #[test]
    fn game_over_text() {
        let board: Board = "BBBBBBBB BBBBBBBB BBBBBBBB BBBBBBBB
                            WWWWWWWW WWWWWWWW WWWWWWWW WWWWWWWW"
            .parse()
            .unwrap();
        let engine = GameEngine::from_position(board, Player::Black);
        assert_eq!(render_game_over(&engine).as_deref(), Some("32 - 32. It's a tie!"));
        assert!(render_status(&engine).starts_with("Game over"));
    }
}
