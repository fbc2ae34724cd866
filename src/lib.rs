//! Terminal Connect Four against a random-move AI.
//!
//! `core` holds the engine (move validation, gravity placement, streak
//! detection, round lifecycle) and emits notifications; `term` renders them.

pub mod core;
pub mod term;
pub mod types;
