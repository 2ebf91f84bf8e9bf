//! World module - the single owned aggregate of mutable entity state
//!
//! A [`World`] is constructed at game start and replaced wholesale on
//! restart. Only the engine mutates it; everything else reads it through
//! snapshots.

use std::collections::VecDeque;

use crate::board::Board;
use crate::grid::{self, in_bounds};
use crate::pieces::PieceType;
use crate::rng::RandomSource;
use crate::scoring::{ScoreState, SpeedScalars};
use crate::types::{
    Direction, Phase, Pos, DESTRUCTION_MODE_MS, EXPLOSION_MS, INITIAL_SNAKE_LEN,
    STAR_DELAY_MIN_MS, STAR_DELAY_SPREAD_MS,
};

/// The snake: body cells head first, plus the heading.
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    body: VecDeque<Pos>,
    direction: Direction,
}

impl Snake {
    /// Initial snake: head at the grid center, body trailing to the left, heading right
    pub fn new() -> Self {
        let head = grid::center();
        let body = (0..INITIAL_SNAKE_LEN as i8)
            .map(|i| head.offset(-i, 0))
            .collect();
        Self {
            body,
            direction: Direction::Right,
        }
    }

    /// Build a snake from explicit cells (head first)
    pub fn from_cells(cells: impl IntoIterator<Item = Pos>, direction: Direction) -> Self {
        Self {
            body: cells.into_iter().collect(),
            direction,
        }
    }

    pub fn head(&self) -> Pos {
        self.body[0]
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.body.contains(&pos)
    }

    pub fn cells(&self) -> impl Iterator<Item = Pos> + '_ {
        self.body.iter().copied()
    }

    /// Change heading. Reversals are rejected.
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        if dir.is_opposite(self.direction) {
            return false;
        }
        self.direction = dir;
        true
    }

    /// Cell the head will move into next
    pub fn next_head(&self) -> Pos {
        self.head().step(self.direction)
    }

    pub(crate) fn push_head(&mut self, pos: Pos) {
        self.body.push_front(pos);
    }

    pub(crate) fn pop_tail(&mut self) -> Option<Pos> {
        self.body.pop_back()
    }
}

impl Default for Snake {
    fn default() -> Self {
        Self::new()
    }
}

/// The live falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingPiece {
    pub piece: &'static PieceType,
    pub rotation: usize,
    pub x: i8,
    /// Fractional row; cells are resolved at the rounded value
    pub y: f64,
    pub suspended: bool,
}

impl FallingPiece {
    pub fn new(piece: &'static PieceType, x: i8, y: i8) -> Self {
        Self {
            piece,
            rotation: 0,
            x,
            y: y as f64,
            suspended: false,
        }
    }

    /// Row the piece occupies on the grid
    pub fn grid_y(&self) -> i8 {
        round_row(self.y)
    }

    /// Occupied cells at the current rounded position
    pub fn cells(&self) -> [Pos; 4] {
        self.piece.cells(self.rotation, self.x, self.grid_y())
    }

    /// Occupied cells at an arbitrary placement of this piece
    pub fn cells_at(&self, rotation: usize, x: i8, y: i8) -> [Pos; 4] {
        self.piece.cells(rotation, x, y)
    }

    pub fn occupies(&self, pos: Pos) -> bool {
        self.cells().contains(&pos)
    }
}

/// Round a fractional row to the grid (half away from zero, rows are never negative)
pub fn round_row(y: f64) -> i8 {
    y.round().clamp(i8::MIN as f64, i8::MAX as f64) as i8
}

/// Visual-only explosion marker
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Explosion {
    pub pos: Pos,
    pub started_ms: u64,
}

impl Explosion {
    pub fn elapsed_ms(&self, now_ms: u64) -> u64 {
        now_ms.saturating_sub(self.started_ms)
    }

    pub fn is_expired(&self, now_ms: u64) -> bool {
        self.elapsed_ms(now_ms) >= EXPLOSION_MS
    }

    /// Fraction of the animation played, in `[0, 1]`
    pub fn progress(&self, now_ms: u64) -> f32 {
        (self.elapsed_ms(now_ms) as f32 / EXPLOSION_MS as f32).min(1.0)
    }
}

/// Active destruction-mode window
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destruction {
    pub activated_ms: u64,
}

impl Destruction {
    /// Ends on the first tick strictly after the full duration
    pub fn is_expired(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.activated_ms) > DESTRUCTION_MODE_MS
    }

    pub fn remaining_ms(&self, now_ms: u64) -> u64 {
        (self.activated_ms + DESTRUCTION_MODE_MS).saturating_sub(now_ms)
    }
}

/// All mutable entity state for one game
#[derive(Debug, Clone)]
pub struct World {
    pub snake: Snake,
    pub board: Board,
    pub falling: Option<FallingPiece>,
    pub apple: Option<Pos>,
    pub star: Option<Pos>,
    /// Earliest time a star may appear
    pub next_star_ms: u64,
    pub destruction: Option<Destruction>,
    pub explosions: Vec<Explosion>,
    pub score: ScoreState,
    pub speed: SpeedScalars,
    /// Last spawn or settle; None until the first piece spawns
    pub last_drop_ms: Option<u64>,
    pub phase: Phase,
}

impl World {
    /// Fresh world: initial snake, an apple, and a scheduled star
    pub fn new(now_ms: u64, rng: &mut impl RandomSource) -> Self {
        let mut world = Self::empty(Snake::new());
        world.spawn_apple(rng);
        world.schedule_star(now_ms, rng);
        world
    }

    /// World with the given snake and nothing else placed
    pub fn empty(snake: Snake) -> Self {
        Self {
            snake,
            board: Board::new(),
            falling: None,
            apple: None,
            star: None,
            next_star_ms: u64::MAX,
            destruction: None,
            explosions: Vec::new(),
            score: ScoreState::default(),
            speed: SpeedScalars::base(),
            last_drop_ms: None,
            phase: Phase::Running,
        }
    }

    pub fn destruction_active(&self) -> bool {
        self.destruction.is_some()
    }

    pub fn is_running(&self) -> bool {
        self.phase.is_running()
    }

    /// True if a piece cell at `pos` would collide with a settled cell or the snake,
    /// or leave the grid
    pub fn blocks_piece(&self, pos: Pos) -> bool {
        !in_bounds(pos) || self.board.is_occupied(pos) || self.snake.contains(pos)
    }

    /// Place the apple on a random cell free of snake and settled cells.
    ///
    /// With no free cell the apple stays unset; calling again later is safe.
    pub fn spawn_apple(&mut self, rng: &mut impl RandomSource) -> bool {
        self.apple = self.pick_free_cell(rng, |_| true);
        self.apple.is_some()
    }

    /// Place the star on a random cell free of snake, settled cells and the apple
    pub fn spawn_star(&mut self, rng: &mut impl RandomSource) -> bool {
        let apple = self.apple;
        self.star = self.pick_free_cell(rng, |pos| Some(pos) != apple);
        self.star.is_some()
    }

    /// Next star becomes due 5-13 seconds from `now_ms`
    pub fn schedule_star(&mut self, now_ms: u64, rng: &mut impl RandomSource) {
        let delay = STAR_DELAY_MIN_MS + rng.next_below(STAR_DELAY_SPREAD_MS as u32) as u64;
        self.next_star_ms = now_ms + delay;
    }

    /// Uniformly pick a cell (in grid scan order) not covered by the snake or
    /// settled cells that also passes `extra`. No allocation.
    fn pick_free_cell(
        &self,
        rng: &mut impl RandomSource,
        extra: impl Fn(Pos) -> bool,
    ) -> Option<Pos> {
        let free = |pos: &Pos| {
            !self.snake.contains(*pos) && !self.board.is_occupied(*pos) && extra(*pos)
        };
        let count = grid::cells().filter(free).count();
        if count == 0 {
            return None;
        }
        let pick = rng.next_below(count as u32) as usize;
        grid::cells().filter(free).nth(pick)
    }
}
