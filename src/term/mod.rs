//! Terminal presentation layer.
//!
//! `view` is pure (engine state -> styled lines) so it stays testable;
//! `renderer` owns stdout and the raw-mode/alternate-screen lifecycle.

pub mod renderer;
pub mod view;

pub use renderer::TerminalRenderer;
pub use view::{notification_lines, GameView, Line, Span, Tint};
