//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the game.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (simulation, terminal rendering, input mapping).
//!
//! # Grid Dimensions
//!
//! - **Width**: 18 columns (indexed 0-17)
//! - **Height**: 25 rows (indexed 0-24, top to bottom)
//! - **Snake start**: head at (9, 12) heading right, 4 segments long
//!
//! # Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_SNAKE_INTERVAL_MS` | 200 | Snake tick interval at game start |
//! | `MIN_SNAKE_INTERVAL_MS` | 50 | Fastest snake tick interval |
//! | `BASE_DROP_INTERVAL_MS` | 1000 | Delay between a settle and the next spawn |
//! | `MIN_DROP_INTERVAL_MS` | 200 | Shortest spawn delay |
//! | `DESTRUCTION_MODE_MS` | 5000 | Length of the destruction-mode window |
//! | `EXPLOSION_MS` | 600 | Lifetime of an explosion effect |
//!
//! # Examples
//!
//! ```
//! use snake_tetris_types::{Direction, GameAction, PieceKind, Pos, GRID_HEIGHT, GRID_WIDTH};
//!
//! let d = Direction::Right;
//! assert!(d.is_opposite(Direction::Left));
//! assert_eq!(Pos::new(9, 12).step(d), Pos::new(10, 12));
//!
//! assert_eq!(GameAction::from_str("rotateCw"), Some(GameAction::RotateCw));
//! assert_eq!(PieceKind::from_str("t"), Some(PieceKind::T));
//!
//! assert_eq!(GRID_WIDTH, 18);
//! assert_eq!(GRID_HEIGHT, 25);
//! ```

/// Grid width in cells (18 columns)
pub const GRID_WIDTH: u8 = 18;

/// Grid height in cells (25 rows)
pub const GRID_HEIGHT: u8 = 25;

/// Number of snake segments at game start
pub const INITIAL_SNAKE_LEN: usize = 4;

/// Snake tick interval at game start
pub const BASE_SNAKE_INTERVAL_MS: f64 = 200.0;

/// Lower clamp for the snake tick interval
pub const MIN_SNAKE_INTERVAL_MS: f64 = 50.0;

/// Piece drop (spawn cadence) interval at game start
pub const BASE_DROP_INTERVAL_MS: f64 = 1000.0;

/// Lower clamp for the piece drop interval
pub const MIN_DROP_INTERVAL_MS: f64 = 200.0;

/// Cells a falling piece descends per tick at game start
pub const BASE_FALL_RATE: f64 = 1.0;

/// Upper clamp for the fall rate
pub const MAX_FALL_RATE: f64 = 5.0;

/// Interval multiplier applied on every apple (10% faster)
pub const SPEED_UP_FACTOR: f64 = 0.9;

/// Fall rate multiplier applied on every apple
pub const FALL_RATE_FACTOR: f64 = 1.1;

/// Destruction mode duration
pub const DESTRUCTION_MODE_MS: u64 = 5000;

/// Explosion effect lifetime
pub const EXPLOSION_MS: u64 = 600;

/// Minimum delay before the next star appears
pub const STAR_DELAY_MIN_MS: u64 = 5000;

/// Random spread added to [`STAR_DELAY_MIN_MS`] (uniform in `[0, spread)`)
pub const STAR_DELAY_SPREAD_MS: u64 = 8000;

/// Points per snake segment when an apple is eaten
pub const APPLE_POINTS_PER_SEGMENT: u32 = 10;

/// Flat bonus for collecting a star
pub const STAR_POINTS: u32 = 50;

/// Bonus for ramming a settled cell in destruction mode
pub const SETTLED_DESTROY_POINTS: u32 = 20;

/// Bonus for ramming the falling piece in destruction mode
pub const FALLING_DESTROY_POINTS: u32 = 30;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn speed_clamps_are_ordered() {
        assert!(MIN_SNAKE_INTERVAL_MS < BASE_SNAKE_INTERVAL_MS);
        assert!(MIN_DROP_INTERVAL_MS < BASE_DROP_INTERVAL_MS);
        assert!(BASE_FALL_RATE < MAX_FALL_RATE);
        assert!(SPEED_UP_FACTOR < 1.0);
        assert!(FALL_RATE_FACTOR > 1.0);
    }

    #[test]
    fn initial_snake_fits_left_of_center() {
        assert!((GRID_WIDTH / 2) as usize >= INITIAL_SNAKE_LEN - 1);
    }
}

/// A grid cell coordinate.
///
/// `x` grows to the right, `y` grows downwards. Values outside the grid are
/// representable so that a candidate snake head can be tested for a wall hit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pos {
    pub x: i8,
    pub y: i8,
}

impl Pos {
    pub const fn new(x: i8, y: i8) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }

    /// Offset by an arbitrary delta.
    pub fn offset(self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x.saturating_add(dx),
            y: self.y.saturating_add(dy),
        }
    }
}

/// Snake heading (unit vector on one axis)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit vector `(dx, dy)`
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    pub fn opposite(&self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// True when `other` points exactly the other way.
    pub fn is_opposite(&self, other: Direction) -> bool {
        self.opposite() == other
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// The seven tetromino piece kinds
///
/// Catalog order matches the spawn table: I, O, T, L, J, S, Z.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// All kinds in catalog order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Parse piece kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use snake_tetris_types::PieceKind;
    ///
    /// assert_eq!(PieceKind::from_str("i"), Some(PieceKind::I));
    /// assert_eq!(PieceKind::from_str("Z"), Some(PieceKind::Z));
    /// assert_eq!(PieceKind::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "o" => Some(PieceKind::O),
            "t" => Some(PieceKind::T),
            "l" => Some(PieceKind::L),
            "j" => Some(PieceKind::J),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::L => "l",
            PieceKind::J => "j",
            PieceKind::S => "s",
            PieceKind::Z => "z",
        }
    }

    /// Position in [`PieceKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::L => 3,
            PieceKind::J => 4,
            PieceKind::S => 5,
            PieceKind::Z => 6,
        }
    }
}

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Player intents
///
/// Steering belongs to the snake player; the piece actions belong to the
/// block player. `Restart` is only honoured once the game has ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    Steer(Direction),
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    Restart,
}

impl GameAction {
    /// Parse action from string
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(GameAction::Steer(Direction::Up)),
            "down" => Some(GameAction::Steer(Direction::Down)),
            "left" => Some(GameAction::Steer(Direction::Left)),
            "right" => Some(GameAction::Steer(Direction::Right)),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Steer(d) => d.as_str(),
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Restart => "restart",
        }
    }

    /// Whether this intent targets the falling piece
    pub fn is_piece_control(&self) -> bool {
        matches!(
            self,
            GameAction::MoveLeft
                | GameAction::MoveRight
                | GameAction::RotateCw
                | GameAction::RotateCcw
        )
    }
}

/// Why a game ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeathCause {
    Wall,
    SelfBite,
    SettledPiece,
    FallingPiece,
}

impl DeathCause {
    pub fn as_str(&self) -> &'static str {
        match self {
            DeathCause::Wall => "snake hit the wall",
            DeathCause::SelfBite => "snake hit itself",
            DeathCause::SettledPiece => "snake hit a settled piece",
            DeathCause::FallingPiece => "snake hit the falling piece",
        }
    }
}

/// Game lifecycle phase. `Ended` is terminal until an explicit restart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    Running,
    Ended(DeathCause),
}

impl Phase {
    pub fn is_running(&self) -> bool {
        matches!(self, Phase::Running)
    }
}
