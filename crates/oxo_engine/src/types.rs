//! Core domain types for tic-tac-toe.

use derive_more::Display;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumIter,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X.
    #[serde(alias = "x")]
    X,
    /// Player O.
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    #[default]
    Empty,
    /// Cell occupied by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the player occupying this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// Side length of the board.
pub const SIZE: usize = 3;

/// A coordinate on the board. Row and column are always in `0..3`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[display("({}, {})", row, col)]
#[serde(try_from = "(usize, usize)", into = "(usize, usize)")]
pub struct Coord {
    row: usize,
    col: usize,
}

impl Coord {
    /// All nine coordinates in row-major order.
    pub const ALL: [Coord; 9] = [
        Coord::at(0, 0),
        Coord::at(0, 1),
        Coord::at(0, 2),
        Coord::at(1, 0),
        Coord::at(1, 1),
        Coord::at(1, 2),
        Coord::at(2, 0),
        Coord::at(2, 1),
        Coord::at(2, 2),
    ];

    /// Creates a coordinate, or `None` if either component is off the board.
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < SIZE && col < SIZE).then_some(Self { row, col })
    }

    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Row (0-2).
    pub fn row(self) -> usize {
        self.row
    }

    /// Column (0-2).
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * SIZE + self.col
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        const LABELS: [&str; 9] = [
            "Top-left",
            "Top-center",
            "Top-right",
            "Middle-left",
            "Center",
            "Middle-right",
            "Bottom-left",
            "Bottom-center",
            "Bottom-right",
        ];
        LABELS[self.index()]
    }
}

impl TryFrom<(usize, usize)> for Coord {
    type Error = String;

    fn try_from((row, col): (usize, usize)) -> Result<Self, Self::Error> {
        Coord::new(row, col).ok_or_else(|| format!("coordinate ({}, {}) is off the board", row, col))
    }
}

impl From<Coord> for (usize, usize) {
    fn from(coord: Coord) -> Self {
        (coord.row, coord.col)
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; SIZE]; SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    /// Sets the cell at the given coordinate.
    pub fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Returns the rows of the board.
    pub fn rows(&self) -> &[[Cell; SIZE]; SIZE] {
        &self.cells
    }

    /// Empty cells in row-major order.
    #[instrument(skip(self))]
    pub fn empty_cells(&self) -> Vec<Coord> {
        Coord::ALL
            .iter()
            .copied()
            .filter(|&coord| self.is_empty(coord))
            .collect()
    }

    /// Number of occupied cells.
    pub fn filled_count(&self) -> usize {
        Coord::ALL.len() - self.empty_cells().len()
    }

    /// Number of cells holding the given player's mark.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|&&cell| cell == Cell::Occupied(player))
            .count()
    }
}

impl std::fmt::Display for Board {
    /// Renders the board with empty cells numbered 1-9.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (row, cells) in self.cells.iter().enumerate() {
            for (col, cell) in cells.iter().enumerate() {
                match cell {
                    Cell::Empty => write!(f, "{}", row * SIZE + col + 1)?,
                    Cell::Occupied(player) => write!(f, "{}", player)?,
                }
                if col < SIZE - 1 {
                    write!(f, "|")?;
                }
            }
            if row < SIZE - 1 {
                write!(f, "\n-+-+-\n")?;
            }
        }
        Ok(())
    }
}

/// Error parsing a board from its compact text form.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
#[display("Invalid board: {}", _0)]
pub struct BoardParseError(String);

impl std::error::Error for BoardParseError {}

impl FromStr for Board {
    type Err = BoardParseError;

    /// Parses three `/`-separated rows of `X`, `O` or `.`, e.g. `"XO./.X./..O"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rows: Vec<&str> = s.trim().split('/').collect();
        if rows.len() != SIZE {
            return Err(BoardParseError(format!("expected 3 rows, got {}", rows.len())));
        }

        let mut board = Board::new();
        for (row, text) in rows.iter().enumerate() {
            let chars: Vec<char> = text.chars().collect();
            if chars.len() != SIZE {
                return Err(BoardParseError(format!("row {} must have 3 cells", row)));
            }
            for (col, ch) in chars.into_iter().enumerate() {
                let cell = match ch {
                    'X' | 'x' => Cell::Occupied(Player::X),
                    'O' | 'o' => Cell::Occupied(Player::O),
                    '.' => Cell::Empty,
                    other => return Err(BoardParseError(format!("unexpected '{}'", other))),
                };
                board.set(Coord::at(row, col), cell);
            }
        }
        Ok(board)
    }
}
