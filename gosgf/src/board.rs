pub mod coordinates;
mod error;

pub use coordinates::{to_board_coordinates, to_screen_coordinates, BoardGeometry};
pub use error::*;

use serde::{Deserialize, Serialize};

/// The number of lines per side of a standard Go board.
pub const BOARD_SIZE: usize = 19;

/// The content of a single intersection.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
#[repr(u8)]
pub enum Stone {
    #[default]
    Empty = 0,
    Black = 1,
    White = 2,
}

impl Stone {
    /// Decodes the integer encoding used in board grids (0 = empty, 1 = black, 2 = white).
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(Stone::Empty),
            1 => Some(Stone::Black),
            2 => Some(Stone::White),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        self as u8
    }
}

/// A single move, given as the board coordinates of the placed stone.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Move {
    pub x: i32,
    pub y: i32,
}

/// The state of a board at some point in a game, together with who played it.
///
/// This is an in-memory value only. It is unrelated to the persisted
/// [`GameRecord`](crate::GameRecord) and there is no conversion between them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardSnapshot {
    /// Indexed as `board_state[y][x]`. Always square.
    pub board_state: Vec<Vec<Stone>>,
    pub black_player: String,
    pub white_player: String,
    /// The moves leading to this position, in order.
    pub moves: Vec<Move>,
    /// Free-form, e.g. "Black wins", "White wins", "Draw".
    pub game_result: String,
}

impl BoardSnapshot {
    /// A snapshot of an empty `size` x `size` board before the first move.
    pub fn empty(size: usize, black_player: &str, white_player: &str) -> Self {
        Self {
            board_state: vec![vec![Stone::Empty; size]; size],
            black_player: String::from(black_player),
            white_player: String::from(white_player),
            moves: Vec::new(),
            game_result: String::new(),
        }
    }

    /// The number of lines per side.
    pub fn size(&self) -> usize {
        self.board_state.len()
    }

    /// The stone at `(x, y)`, or `None` if the coordinates are off the board.
    pub fn stone_at(&self, x: i32, y: i32) -> Option<Stone> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        self.board_state.get(y)?.get(x).copied()
    }
}
