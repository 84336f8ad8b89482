use crate::{
    board::{Board, BoardState},
    common::{BoardError, Cell, GameStatus, Outcome, Player, Score, TurnState},
};
#[cfg(not(feature = "std"))]
use alloc::vec::Vec;

/// Serializable overall game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct GameState {
    pub board: BoardState,
    pub current: Player,
    pub over: bool,
    pub passed: Option<Player>,
    pub moves_played: usize,
}

/// Core game logic: owns the board and drives turns.
///
/// This is the only thing that mutates a game's board. Presentation code
/// reads it through the query methods and changes it through
/// [`GameEngine::submit_move`] and [`GameEngine::reset`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameEngine {
    board: Board,
    current: Player,
    over: bool,
    passed: Option<Player>,
    moves_played: usize,
}

impl GameEngine {
    /// Create a new game at the standard starting position, Black to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current: Player::Black,
            over: false,
            passed: None,
            moves_played: 0,
        }
    }

    /// Start from an arbitrary position. If `to_move` has no legal move the
    /// turn passes straight away, and if neither side can move the game is
    /// already over.
    pub fn from_position(board: Board, to_move: Player) -> Self {
        let mut engine = Self {
            board,
            current: to_move,
            over: false,
            passed: None,
            moves_played: 0,
        };
        engine.settle_turn();
        engine
    }

    /// Make sure the side to move can actually move: hand the turn over if
    /// only the other side can, or end the game if neither can.
    fn settle_turn(&mut self) {
        let stuck = self.current;
        if self.board.has_any_valid_move(stuck) {
            return;
        }
        if self.board.has_any_valid_move(stuck.opponent()) {
            log::debug!("{} has no legal move; turn passes to {}", stuck, stuck.opponent());
            self.current = stuck.opponent();
            self.passed = Some(stuck);
        } else {
            self.over = true;
            self.passed = None;
        }
    }

    /// Immutable reference to the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn cell(&self, row: usize, col: usize) -> Result<Cell, BoardError> {
        self.board.cell(row, col)
    }

    /// The side to move. Once the game is over this stays on the player
    /// who made the final move.
    pub fn current_player(&self) -> Player {
        self.current
    }

    pub fn turn(&self) -> TurnState {
        match (self.over, self.current) {
            (true, _) => TurnState::GameOver,
            (false, Player::Black) => TurnState::BlackToMove,
            (false, Player::White) => TurnState::WhiteToMove,
        }
    }

    pub fn status(&self) -> GameStatus {
        if self.over {
            GameStatus::Over
        } else {
            GameStatus::InProgress
        }
    }

    /// Winner by disc count, once the game is over.
    pub fn outcome(&self) -> Option<Outcome> {
        self.over.then(|| self.score().outcome())
    }

    pub fn score(&self) -> Score {
        self.board.score()
    }

    /// Legal moves for the side to move; empty once the game is over.
    pub fn valid_moves(&self) -> Vec<(usize, usize)> {
        if self.over {
            return Vec::new();
        }
        self.board.valid_moves(self.current)
    }

    pub fn valid_moves_for(&self, player: Player) -> Vec<(usize, usize)> {
        self.board.valid_moves(player)
    }

    /// The player whose turn was skipped by the last move, if any.
    pub fn last_pass(&self) -> Option<Player> {
        self.passed
    }

    pub fn moves_played(&self) -> usize {
        self.moves_played
    }

    /// Play a disc for the side to move. Invalid moves leave the game
    /// untouched.
    pub fn submit_move(&mut self, row: usize, col: usize) -> Result<(), BoardError> {
        if self.over {
            return Err(BoardError::GameOver);
        }
        let mover = self.current;
        let flipped = self.board.apply_move(row, col, mover)?;
        self.moves_played += 1;
        log::debug!("{} played ({}, {}), flipping {}", mover, row, col, flipped);
        self.advance_turn(mover);
        Ok(())
    }

    fn advance_turn(&mut self, mover: Player) {
        let opponent = mover.opponent();
        if self.board.has_any_valid_move(opponent) {
            self.current = opponent;
            self.passed = None;
        } else if self.board.has_any_valid_move(mover) {
            log::info!("{} has no legal move; {} plays again", opponent, mover);
            self.current = mover;
            self.passed = Some(opponent);
        } else {
            let score = self.board.score();
            log::info!(
                "game over: {} - {}. {}",
                score.black,
                score.white,
                score.outcome()
            );
            self.current = mover;
            self.passed = None;
            self.over = true;
        }
    }

    /// Discard the current game and start again from the opening position.
    pub fn reset(&mut self) {
        log::debug!("resetting game after {} moves", self.moves_played);
        *self = Self::new();
    }

    /// Generate a serializable snapshot of the current state.
    pub fn state(&self) -> GameState {
        GameState {
            board: BoardState::from(&self.board),
            current: self.current,
            over: self.over,
            passed: self.passed,
            moves_played: self.moves_played,
        }
    }

    /// Restore an engine from a snapshot. Turn and game-over state are
    /// settled against the board rather than trusted.
    pub fn from_state(state: GameState) -> Result<Self, BoardError> {
        let mut engine = Self {
            board: Board::try_from(state.board)?,
            current: state.current,
            over: false,
            passed: state.passed,
            moves_played: state.moves_played,
        };
        engine.settle_turn();
        Ok(engine)
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_game_is_black_to_move() {
        let engine = GameEngine::new();
        assert_eq!(engine.turn(), TurnState::BlackToMove);
        assert_eq!(engine.status(), GameStatus::InProgress);
        assert_eq!(engine.outcome(), None);
        assert_eq!(engine.last_pass(), None);
    }

    #[test]
    fn move_hands_turn_to_white() {
        let mut engine = GameEngine::new();
        engine.submit_move(2, 3).unwrap();
        assert_eq!(engine.current_player(), Player::White);
        assert_eq!(engine.score(), Score { black: 4, white: 1 });
        assert_eq!(engine.moves_played(), 1);
    }

    #[test]
    fn rejected_move_changes_nothing() {
        let mut engine = GameEngine::new();
        let before = engine.clone();
        assert_eq!(
            engine.submit_move(0, 0),
            Err(BoardError::NoCapture { row: 0, col: 0 })
        );
        assert_eq!(
            engine.submit_move(3, 3),
            Err(BoardError::CellOccupied { row: 3, col: 3 })
        );
        assert!(matches!(
            engine.submit_move(8, 0),
            Err(BoardError::BitBoardError(_))
        ));
        assert_eq!(engine, before);
    }

    #[test]
    fn from_position_passes_when_side_to_move_is_stuck() {
        // White to move but owns no discs; Black can still capture.
        let board: Board = "B W . . . . . .
                            . . . . . . . .
                            . . . . . . . .
                            . . . . . . . .
                            . . . . . . . .
                            . . . . . . . .
                            . . . . . . . .
                            . . . . . . . ."
            .parse()
            .unwrap();
        let engine = GameEngine::from_position(board, Player::White);
        assert_eq!(engine.current_player(), Player::Black);
        assert_eq!(engine.last_pass(), Some(Player::White));
        assert_eq!(engine.status(), GameStatus::InProgress);
    }
}
