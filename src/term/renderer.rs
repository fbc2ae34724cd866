//! TerminalRenderer: flushes styled lines to a real terminal.
//!
//! A turn-based game redraws at most a few dozen lines per accepted move, so
//! this clears and reprints rather than diffing frames.

use std::io::{self, Write};

use anyhow::Result;

use crossterm::{
    cursor,
    style::{Attribute, Color, Print, ResetColor, SetAttribute, SetForegroundColor},
    terminal, QueueableCommand,
};

use crate::term::view::{Line, Tint};

pub struct TerminalRenderer {
    stdout: io::Stdout,
}

impl TerminalRenderer {
    pub fn new() -> Self {
        Self {
            stdout: io::stdout(),
        }
    }

    pub fn enter(&mut self) -> Result<()> {
        terminal::enable_raw_mode()?;
        self.stdout.queue(terminal::EnterAlternateScreen)?;
        self.stdout.queue(cursor::Hide)?;
        self.stdout.flush()?;
        Ok(())
    }

    pub fn exit(&mut self) -> Result<()> {
        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.queue(cursor::Show)?;
        self.stdout.queue(terminal::LeaveAlternateScreen)?;
        self.stdout.flush()?;
        terminal::disable_raw_mode()?;
        Ok(())
    }

    /// Clear the screen and print every line, applying span tints.
    pub fn draw(&mut self, lines: &[Line]) -> Result<()> {
        self.stdout
            .queue(terminal::Clear(terminal::ClearType::All))?;
        self.stdout.queue(cursor::MoveTo(0, 0))?;

        let mut current: Option<Tint> = None;
        for line in lines {
            for span in line {
                if current != Some(span.tint) {
                    self.apply_tint(span.tint)?;
                    current = Some(span.tint);
                }
                self.stdout.queue(Print(span.text.as_str()))?;
            }
            self.stdout.queue(Print("\r\n"))?;
        }

        self.stdout.queue(ResetColor)?;
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        self.stdout.flush()?;
        Ok(())
    }

    fn apply_tint(&mut self, tint: Tint) -> Result<()> {
        self.stdout.queue(SetAttribute(Attribute::Reset))?;
        match tint {
            Tint::Default => {
                self.stdout.queue(ResetColor)?;
            }
            Tint::Label => {
                self.stdout.queue(ResetColor)?;
                self.stdout.queue(SetAttribute(Attribute::Bold))?;
            }
            Tint::Human => {
                self.stdout.queue(SetForegroundColor(Color::Red))?;
            }
            Tint::Ai => {
                self.stdout.queue(SetForegroundColor(Color::Yellow))?;
            }
            Tint::Dim => {
                self.stdout.queue(ResetColor)?;
                self.stdout.queue(SetAttribute(Attribute::Dim))?;
            }
        }
        Ok(())
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new()
    }
}
