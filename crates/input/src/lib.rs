//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. It holds no
//! state: buffering and validation happen in the core intent queue.

pub mod map;

pub use snake_tetris_types as types;

pub use map::{handle_key_event, should_quit};
