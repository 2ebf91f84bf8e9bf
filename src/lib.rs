//! Snake Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates under short names and adds the
//! process-level pieces: environment configuration, logging and the JSON
//! high-score store used by the terminal binary.

pub mod config;
pub mod highscore;
pub mod logging;

pub use snake_tetris_core as core;
pub use snake_tetris_input as input;
pub use snake_tetris_term as term;
pub use snake_tetris_types as types;

pub use config::Config;
pub use highscore::JsonFileStore;
