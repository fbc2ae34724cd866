//! Core module - pure game logic with no external dependencies
//!
//! This module contains all the game rules, state management, and logic.
//! It has zero dependencies on UI or I/O.

pub mod board;
pub mod engine;
pub mod rng;
pub mod streak;

// Re-export commonly used types
pub use board::Board;
pub use engine::GameEngine;
pub use rng::{ColumnPicker, SimpleRng};
