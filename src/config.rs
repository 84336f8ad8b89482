use crate::common::Player;

pub const BOARD_SIZE: u8 = 8;
pub const NUM_CELLS: usize = BOARD_SIZE as usize * BOARD_SIZE as usize;

/// Discs present before the first move, as `(row, col, owner)`.
pub const STARTING_DISCS: [(usize, usize, Player); 4] = [
    (3, 3, Player::White),
    (3, 4, Player::Black),
    (4, 3, Player::Black),
    (4, 4, Player::White),
];

/// The eight ray directions as `(row step, column step)`, clockwise from north-west.
pub const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
];

/// Environment variable read by [`crate::init_logging`].
pub const LOG_ENV_VAR: &str = "OTHELLO_LOG";
