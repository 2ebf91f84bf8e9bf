use crate::types::{Direction, Phase, PieceKind, Pos, Rgb};
use crate::world::{round_row, World};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FallingSnapshot {
    pub kind: PieceKind,
    pub color: Rgb,
    pub rotation: usize,
    pub x: i8,
    /// Fractional row
    pub y: f64,
    /// Cells at the rounded row
    pub cells: [Pos; 4],
    pub suspended: bool,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExplosionSnapshot {
    pub pos: Pos,
    pub elapsed_ms: u64,
    pub progress: f32,
}

/// Read-only view handed to the render sink.
///
/// Buffers are reused by [`GameSnapshot::fill_from`], so a renderer can keep
/// one snapshot for the whole session.
#[derive(Debug, Clone, PartialEq)]
pub struct GameSnapshot {
    pub snake: Vec<Pos>,
    pub direction: Direction,
    pub settled: Vec<(Pos, Rgb)>,
    pub falling: Option<FallingSnapshot>,
    pub apple: Option<Pos>,
    pub star: Option<Pos>,
    pub explosions: Vec<ExplosionSnapshot>,
    pub destruction_active: bool,
    pub destruction_remaining_ms: u64,
    pub score: u32,
    pub high_score: u32,
    pub apples: u32,
    pub phase: Phase,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.snake.clear();
        self.direction = Direction::Right;
        self.settled.clear();
        self.falling = None;
        self.apple = None;
        self.star = None;
        self.explosions.clear();
        self.destruction_active = false;
        self.destruction_remaining_ms = 0;
        self.score = 0;
        self.high_score = 0;
        self.apples = 0;
        self.phase = Phase::Running;
    }

    /// Overwrite from a world at `now_ms`
    pub fn fill_from(&mut self, world: &World, high_score: u32, now_ms: u64) {
        self.snake.clear();
        self.snake.extend(world.snake.cells());
        self.direction = world.snake.direction();

        self.settled.clear();
        self.settled.extend(
            world
                .board
                .iter()
                .map(|(pos, kind)| (pos, crate::pieces::piece_type(kind).color)),
        );

        self.falling = world.falling.map(|p| FallingSnapshot {
            kind: p.piece.kind,
            color: p.piece.color,
            rotation: p.rotation,
            x: p.x,
            y: p.y,
            cells: p.piece.cells(p.rotation, p.x, round_row(p.y)),
            suspended: p.suspended,
        });

        self.apple = world.apple;
        self.star = world.star;

        self.explosions.clear();
        self.explosions.extend(world.explosions.iter().map(|e| ExplosionSnapshot {
            pos: e.pos,
            elapsed_ms: e.elapsed_ms(now_ms),
            progress: e.progress(now_ms),
        }));

        self.destruction_active = world.destruction.is_some();
        self.destruction_remaining_ms = world
            .destruction
            .map_or(0, |d| d.remaining_ms(now_ms));

        self.score = world.score.score();
        self.high_score = high_score;
        self.apples = world.score.apples_eaten();
        self.phase = world.phase;
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }

    pub fn head(&self) -> Option<Pos> {
        self.snake.first().copied()
    }

    pub fn playable(&self) -> bool {
        self.phase.is_running()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            snake: Vec::new(),
            direction: Direction::Right,
            settled: Vec::new(),
            falling: None,
            apple: None,
            star: None,
            explosions: Vec::new(),
            destruction_active: false,
            destruction_remaining_ms: 0,
            score: 0,
            high_score: 0,
            apples: 0,
            phase: Phase::Running,
        }
    }
}
