//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It intentionally avoids widget/layout libraries and instead renders into a
//! simple framebuffer that can be flushed to a terminal backend.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render purely from snapshots (the view never sees the live world)
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod audio;
pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod screen;

pub use snake_tetris_core as core;
pub use snake_tetris_types as types;

pub use audio::BellAudio;
pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use screen::Screen;
