//! GameView: maps engine state and the message log into styled text lines.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameEngine;
use crate::types::{Color, Notification};

/// Semantic tint of a span; the renderer maps tints to terminal colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tint {
    Default,
    /// Bold panel labels
    Label,
    /// Human coins ("red" in the classic game)
    Human,
    /// AI coins ("yellow")
    Ai,
    /// Grid dots and hints
    Dim,
}

/// A run of characters sharing one tint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    pub tint: Tint,
}

impl Span {
    pub fn new(text: impl Into<String>, tint: Tint) -> Self {
        Self {
            text: text.into(),
            tint,
        }
    }
}

pub type Line = Vec<Span>;

/// Human-readable lines for a notification, matching the classic console
/// messages of the game.
pub fn notification_lines(notification: &Notification) -> Vec<String> {
    match *notification {
        Notification::Rejected => vec!["Not a valid move! Try again :)".to_string()],
        Notification::Placed {
            move_number,
            color,
            row,
            column,
        } => vec![format!(
            "For move {} {} placed a coin on row {} and column {}",
            move_number,
            color.as_str(),
            row,
            column
        )],
        Notification::Score { human, ai } => vec![
            format!("you have a score of {}", human),
            format!("AI has a score of {}", ai),
        ],
        Notification::Win { color } => match color {
            Color::Human => vec!["You win!!".to_string()],
            Color::Ai => vec!["Sorry.. AI wins".to_string()],
        },
        Notification::Tie => vec!["It's a tie!".to_string()],
    }
}

/// Renders the board, a status panel, and the scrolling message log.
pub struct GameView {
    /// Maximum log lines shown below the board
    log_lines: usize,
}

impl Default for GameView {
    fn default() -> Self {
        Self { log_lines: 10 }
    }
}

impl GameView {
    pub fn new(log_lines: usize) -> Self {
        Self { log_lines }
    }

    /// Render the current game state into styled lines, top to bottom.
    pub fn render(&self, engine: &GameEngine, log: &[String]) -> Vec<Line> {
        let config = engine.config();
        let mut lines = Vec::new();

        // Column header.
        let mut header = String::from(" ");
        for col in 0..config.cols {
            header.push_str(&format!("{} ", col % 10));
        }
        lines.push(vec![Span::new(header, Tint::Label)]);

        // Grid, one line per row, coins tinted per player.
        for row in 0..config.rows {
            let mut line: Line = vec![Span::new(" ", Tint::Default)];
            for col in 0..config.cols {
                let (glyph, tint) = match engine.board().get(row, col) {
                    Some(Some(Color::Human)) => ("\u{25cf} ", Tint::Human),
                    Some(Some(Color::Ai)) => ("\u{25cf} ", Tint::Ai),
                    _ => ("\u{00b7} ", Tint::Dim),
                };
                line.push(Span::new(glyph, tint));
            }
            lines.push(line);
        }

        lines.push(Vec::new());

        // Status panel.
        lines.push(vec![
            Span::new("ROUND ", Tint::Label),
            Span::new(engine.round().to_string(), Tint::Default),
            Span::new("  MOVES ", Tint::Label),
            Span::new(engine.moves().to_string(), Tint::Default),
            Span::new("  SEED ", Tint::Label),
            Span::new(engine.seed().to_string(), Tint::Default),
        ]);
        lines.push(vec![
            Span::new("YOU ", Tint::Human),
            Span::new(engine.human_score().to_string(), Tint::Default),
            Span::new("  AI ", Tint::Ai),
            Span::new(engine.ai_score().to_string(), Tint::Default),
        ]);

        lines.push(Vec::new());

        // Most recent log lines, oldest first.
        let skip = log.len().saturating_sub(self.log_lines);
        for entry in &log[skip..] {
            lines.push(vec![Span::new(entry.clone(), Tint::Default)]);
        }

        lines.push(Vec::new());
        lines.push(vec![Span::new(
            format!("0-{} drop a coin   q quit", config.cols - 1),
            Tint::Dim,
        )]);

        lines
    }
}
