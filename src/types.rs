//! Core types shared across the application
//! This module contains pure data types with no external dependencies

/// Default board dimensions (classic Connect Four)
pub const BOARD_ROWS: usize = 6;
pub const BOARD_COLS: usize = 7;

/// Default streak length required to win a round
pub const WIN_LEN: u32 = 4;

/// Player color. Doubles as the value stored in occupied board cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Color {
    Human,
    Ai,
}

impl Color {
    /// The opposing color
    pub fn opponent(&self) -> Self {
        match self {
            Color::Human => Color::Ai,
            Color::Ai => Color::Human,
        }
    }

    /// Short display tag
    pub fn as_str(&self) -> &'static str {
        match self {
            Color::Human => "you",
            Color::Ai => "AI",
        }
    }
}

/// Cell on the board (None = empty, Some = occupied by a player's coin)
pub type Cell = Option<Color>;

/// Immutable construction parameters for a game.
///
/// Fixed at engine construction; degenerate values are a contract violation,
/// not a runtime error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of rows (row 0 is the top of the board)
    pub rows: usize,
    /// Number of columns
    pub cols: usize,
    /// Streak length that wins a round
    pub win_len: u32,
}

impl GameConfig {
    pub fn new(rows: usize, cols: usize, win_len: u32) -> Self {
        debug_assert!(rows > 0 && cols > 0, "board must have at least one cell");
        debug_assert!(win_len > 0, "winning streak must be positive");
        Self {
            rows,
            cols,
            win_len,
        }
    }

    /// Total number of cells; a round ties when this many moves are accepted
    pub fn capacity(&self) -> u32 {
        (self.rows * self.cols) as u32
    }

    /// How far a streak scan reaches on each side of the anchor cell
    pub fn reach(&self) -> usize {
        (self.win_len - 1) as usize
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(BOARD_ROWS, BOARD_COLS, WIN_LEN)
    }
}

/// Discrete notification emitted by the engine, rendered by a presenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notification {
    /// Move rejected (bad column, full column, or out-of-turn color)
    Rejected,
    /// A coin was placed: move number (1-based), actor, landing cell
    Placed {
        move_number: u32,
        color: Color,
        row: usize,
        column: usize,
    },
    /// Round scores after a non-winning placement
    Score { human: u32, ai: u32 },
    /// The round was won by `color`; a fresh round has already started
    Win { color: Color },
    /// Board filled with no winner; a fresh round has already started
    Tie,
}
