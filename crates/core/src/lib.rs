//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the whole simulation: grid geometry, the piece
//! catalog, entity state, the per-tick engine and the input controller.
//! It has **no dependencies** on terminals, files or wall-clock time:
//!
//! - **Deterministic**: time is injected per tick and every random choice
//!   goes through [`RandomSource`], so a seed replays a game exactly
//! - **Testable**: scripted RNG ([`SequenceRng`]) and virtual clock
//!   ([`ManualClock`]) let tests assert exact placements and expirations
//! - **Allocation-light**: the tick reports events through a fixed-capacity
//!   buffer and snapshots reuse their vectors
//!
//! # Module Structure
//!
//! - [`grid`]: 18x25 lattice, bounds and scan order
//! - [`board`]: settled cells, one flat slot per grid cell
//! - [`pieces`]: the seven tetrominoes and kick-based rotation
//! - [`world`]: snake, falling piece, apple, star, explosions, timers
//! - [`scoring`]: points and speed scalars
//! - [`engine`]: the tick algorithm and piece control
//! - [`input`]: intent queue drained once per tick
//! - [`game_state`]: lifecycle (Running / Ended / restart) and high score
//! - [`snapshot`]: read-only views for rendering
//! - [`sinks`]: render / audio / score / high-score collaborator traits
//!
//! # Example
//!
//! ```
//! use snake_tetris_core::GameState;
//! use snake_tetris_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(12345, 0, 0);
//! game.push_action(GameAction::Steer(Direction::Up));
//! let report = game.tick(200);
//!
//! assert!(game.is_running());
//! assert_eq!(game.world().snake.direction(), Direction::Up);
//! assert!(report.events.len() <= 16);
//! ```
//!
//! # Timing
//!
//! The runner calls [`GameState::tick`] once per snake interval (200ms at
//! the start, shrinking with every apple to a 50ms floor) and must re-read
//! [`GameState::snake_interval`] before scheduling the next tick.

pub mod board;
pub mod clock;
pub mod engine;
pub mod events;
pub mod game_state;
pub mod grid;
pub mod input;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod sinks;
pub mod snapshot;
pub mod world;

pub use snake_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use clock::{Clock, ManualClock, SystemClock};
pub use events::{GameEvent, TickReport};
pub use game_state::GameState;
pub use input::IntentQueue;
pub use pieces::{piece_type, try_rotate, PieceType};
pub use rng::{RandomSource, SequenceRng, SimpleRng};
pub use scoring::{apple_points, SpeedScalars};
pub use sinks::{
    AudioCue, AudioSink, HighScoreStore, MemoryStore, NullAudio, RenderSink, ScoreDisplay,
    ScoreSink,
};
pub use snapshot::{ExplosionSnapshot, FallingSnapshot, GameSnapshot};
pub use world::{FallingPiece, Snake, World};
