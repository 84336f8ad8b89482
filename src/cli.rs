#![cfg(feature = "std")]

//! Parsing of typed commands for the terminal front end.

use crate::config::BOARD_SIZE;

/// A single instruction from whoever is at the keyboard (or a stand-in).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Place a disc at (row, col).
    Move { row: usize, col: usize },
    /// Throw the current game away and start over.
    Reset,
    /// Toggle legal-move markers.
    Hints,
    Help,
    Quit,
    /// Input that could not be understood, with the reason.
    Unrecognized(String),
}

/// Parse algebraic notation ("D3": column letter A-H, row 1-8) into
/// zero-based `(row, col)`.
pub fn parse_coord(input: &str) -> Result<(usize, usize), String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty input".to_string());
    }
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., D3)".to_string());
    }
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-H", col_ch));
    }
    let col = (col_ch as u8).wrapping_sub(b'A') as usize;
    if col >= BOARD_SIZE as usize {
        return Err(format!("Column '{}' out of bounds - must be A-H", col_ch));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-8", row_str))?;
    if row == 0 {
        return Err("Row cannot be 0 - must be 1-8".to_string());
    }
    if row > BOARD_SIZE as usize {
        return Err(format!("Row {} out of bounds - must be 1-8", row));
    }
    Ok((row - 1, col))
}

/// Parse one line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "reset" | "new" | "again" => Ok(Command::Reset),
        "hints" | "hint" | "moves" => Ok(Command::Hints),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" | "q" => Ok(Command::Quit),
        _ => parse_coord(line).map(|(row, col)| Command::Move { row, col }),
    }
}

pub const HELP_TEXT: &str = "\
Commands:
  <col><row>   place a disc, e.g. D3 (columns A-H, rows 1-8)
  hints        toggle legal-move markers
  reset        start a new game
  help         show this text
  quit         leave";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_coord_accepts_either_case() {
        assert_eq!(parse_coord("D3"), Ok((2, 3)));
        assert_eq!(parse_coord("d3"), Ok((2, 3)));
        assert_eq!(parse_coord(" h8 "), Ok((7, 7)));
        assert_eq!(parse_coord("a1"), Ok((0, 0)));
    }

    #[test]
    fn parse_coord_rejects_off_board() {
        assert!(parse_coord("").is_err());
        assert!(parse_coord("D").is_err());
        assert!(parse_coord("I1").is_err());
        assert!(parse_coord("A9").is_err());
        assert!(parse_coord("A0").is_err());
        assert!(parse_coord("3D").is_err());
        assert!(parse_coord("A12").is_err());
    }

    #[test]
    fn parse_command_keywords() {
        assert_eq!(parse_command("RESET"), Ok(Command::Reset));
        assert_eq!(parse_command("hints"), Ok(Command::Hints));
        assert_eq!(parse_command("quit\n"), Ok(Command::Quit));
        assert_eq!(parse_command("f5"), Ok(Command::Move { row: 4, col: 5 }));
        assert!(parse_command("castle").is_err());
    }
}
