//! Game engine - move validation, placement, scoring, round lifecycle
//!
//! `GameEngine` owns the board and all round state. Its single mutating
//! operation is [`GameEngine::play`]: validate, place with gravity, detect
//! streaks around the new coin, update scores, and handle win/tie restarts.
//! A valid human move synchronously triggers the AI's own move through the
//! same operation before `play` returns.
//!
//! The engine never does I/O. Every observable effect is queued as a
//! [`Notification`] and drained by the caller (console, UI, or test harness).

use arrayvec::ArrayVec;

use crate::core::rng::ColumnPicker;
use crate::core::{streak, Board};
use crate::types::{Color, GameConfig, Notification};

/// Upper bound on notifications a single top-level `play` can queue:
/// placement + score for the human, then placement + score + tie (or a
/// rejection) for the AI sub-move.
const MAX_NOTIFICATIONS: usize = 6;

/// Complete state of one game against the random AI.
#[derive(Debug, Clone)]
pub struct GameEngine {
    config: GameConfig,
    board: Board,
    /// Color of the last accepted placement; None at round start so either
    /// player may open.
    last_color: Option<Color>,
    /// Accepted placements this round.
    moves: u32,
    human_score: u32,
    ai_score: u32,
    picker: ColumnPicker,
    /// Monotonic round id (increments on every win/tie restart).
    round: u32,
    pending: ArrayVec<Notification, MAX_NOTIFICATIONS>,
}

impl GameEngine {
    /// Create a new engine with the given configuration and RNG seed
    pub fn new(config: GameConfig, seed: u32) -> Self {
        Self {
            config,
            board: Board::new(config.rows, config.cols),
            last_color: None,
            moves: 0,
            human_score: 0,
            ai_score: 0,
            picker: ColumnPicker::new(seed, config.cols),
            round: 0,
            pending: ArrayVec::new(),
        }
    }

    pub fn config(&self) -> GameConfig {
        self.config
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn last_color(&self) -> Option<Color> {
        self.last_color
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn human_score(&self) -> u32 {
        self.human_score
    }

    pub fn ai_score(&self) -> u32 {
        self.ai_score
    }

    pub fn round(&self) -> u32 {
        self.round
    }

    /// Current RNG state (displayed so a session can be reproduced)
    pub fn seed(&self) -> u32 {
        self.picker.seed()
    }

    /// Drain the notifications queued by the last `play` call.
    pub fn take_notifications(&mut self) -> ArrayVec<Notification, MAX_NOTIFICATIONS> {
        std::mem::take(&mut self.pending)
    }

    /// The sole mutating operation: attempt to drop a coin for `color` into
    /// `column`.
    ///
    /// An invalid move (column out of range, column full, or `color` equal to
    /// the last placed color) changes no state and queues a single
    /// `Rejected`. A valid non-terminal human move triggers the AI's move
    /// through this same operation before returning; an invalid AI pick is
    /// absorbed as a rejected sub-move with no retry.
    pub fn play(&mut self, color: Color, column: usize) {
        // Stale notifications from an undrained previous call are dropped so
        // the buffer bound holds per top-level call.
        self.pending.clear();
        self.play_move(color, column);
    }

    /// Shared move operation for both the external caller and the AI chain.
    fn play_move(&mut self, color: Color, column: usize) {
        if column >= self.config.cols
            || self.board.is_column_full(column)
            || self.last_color == Some(color)
        {
            self.pending.push(Notification::Rejected);
            return;
        }

        // Validation passed: place the coin. drop_piece cannot fail here.
        let Some(row) = self.board.drop_piece(column, color) else {
            self.pending.push(Notification::Rejected);
            return;
        };
        self.last_color = Some(color);
        self.moves += 1;
        self.pending.push(Notification::Placed {
            move_number: self.moves,
            color,
            row,
            column,
        });

        let best = streak::best_streak(&self.board, row, column, color, self.config.reach());

        if best >= self.config.win_len {
            *self.score_mut(color) = self.config.win_len;
            self.pending.push(Notification::Win { color });
            self.start_round();
            return;
        }

        let score = self.score_mut(color);
        *score = (*score).max(best);
        self.pending.push(Notification::Score {
            human: self.human_score,
            ai: self.ai_score,
        });

        if self.moves == self.config.capacity() {
            self.pending.push(Notification::Tie);
            self.start_round();
        } else if color == Color::Human {
            let pick = self.picker.pick();
            self.play_move(Color::Ai, pick);
        }
    }

    fn score_mut(&mut self, color: Color) -> &mut u32 {
        match color {
            Color::Human => &mut self.human_score,
            Color::Ai => &mut self.ai_score,
        }
    }

    /// Full reset: board, fill pointers, scores, move counter, and the
    /// open-move sentinel all reinitialize together. The RNG keeps its
    /// sequence so a seeded session stays reproducible across rounds.
    fn start_round(&mut self) {
        self.board.reset();
        self.last_color = None;
        self.moves = 0;
        self.human_score = 0;
        self.ai_score = 0;
        self.round = self.round.wrapping_add(1);
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameConfig::default(), 1)
    }
}
