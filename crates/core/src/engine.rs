//! Simulation engine - one discrete tick over the [`World`]
//!
//! A tick runs these steps in order:
//!
//! 1. Snake advance: wall, self, settled and falling-piece collisions
//!    (destruction mode turns piece contact into a kill instead of a death)
//! 2. Apple: grow and speed up, or drop the tail
//! 3. Star: bonus points and (re)start destruction mode
//! 4. Falling piece: spawn on cadence, then fall, settle or suspend
//! 5. Destruction-mode timer and star spawning
//! 6. Explosion aging
//!
//! A fatal collision in step 1 ends the game and skips the rest.

use log::{debug, info};

use crate::events::{GameEvent, TickReport};
use crate::grid::{below_floor, in_bounds};
use crate::pieces::{piece_type, try_rotate, SPAWN_X_RANGE, SPAWN_Y};
use crate::rng::RandomSource;
use crate::types::{
    DeathCause, Phase, PieceKind, Pos, FALLING_DESTROY_POINTS, SETTLED_DESTROY_POINTS,
    STAR_POINTS,
};
use crate::world::{round_row, Destruction, Explosion, FallingPiece, World};

/// Advance the world by one tick at `now_ms`. No-op once the game has ended.
pub fn tick(world: &mut World, rng: &mut impl RandomSource, now_ms: u64, report: &mut TickReport) {
    if !world.is_running() {
        return;
    }

    let Some(head) = advance_snake(world, now_ms, report) else {
        return;
    };
    resolve_apple(world, rng, head, report);
    resolve_star(world, rng, head, now_ms, report);
    advance_piece(world, rng, now_ms, report);
    update_star_system(world, rng, now_ms, report);
    world.explosions.retain(|e| !e.is_expired(now_ms));
}

/// Step 1. Returns the new head, or None if the snake died.
fn advance_snake(world: &mut World, now_ms: u64, report: &mut TickReport) -> Option<Pos> {
    let head = world.snake.next_head();

    if !in_bounds(head) {
        return end_game(world, DeathCause::Wall, report);
    }
    if world.snake.contains(head) {
        return end_game(world, DeathCause::SelfBite, report);
    }

    if world.board.is_occupied(head) {
        if !world.destruction_active() {
            return end_game(world, DeathCause::SettledPiece, report);
        }
        world.board.remove(head);
        explode(world, head, now_ms);
        world.score.add(SETTLED_DESTROY_POINTS);
        report.score_changed = true;
        report.push(GameEvent::SettledDestroyed { pos: head });
        debug!("destroyed settled cell at ({}, {})", head.x, head.y);
    }

    // Checked against the piece's position before this tick's fall.
    if let Some(piece) = world.falling {
        if piece.occupies(head) {
            if !world.destruction_active() {
                return end_game(world, DeathCause::FallingPiece, report);
            }
            world.falling = None;
            explode(world, head, now_ms);
            world.score.add(FALLING_DESTROY_POINTS);
            report.score_changed = true;
            report.push(GameEvent::FallingDestroyed {
                pos: head,
                kind: piece.piece.kind,
            });
            debug!("destroyed falling {:?} piece", piece.piece.kind);
        }
    }

    world.snake.push_head(head);
    Some(head)
}

/// Step 2. Grow-or-shift.
fn resolve_apple(
    world: &mut World,
    rng: &mut impl RandomSource,
    head: Pos,
    report: &mut TickReport,
) {
    if world.apple != Some(head) {
        world.snake.pop_tail();
        if world.apple.is_none() {
            // Previous placement found no free cell; try again.
            world.spawn_apple(rng);
        }
        return;
    }

    let length = world.snake.len();
    let points = world.score.record_apple(length);
    world.spawn_apple(rng);
    world.speed.speed_up();

    if let Some(piece) = world.falling.as_mut() {
        if piece.suspended {
            piece.suspended = false;
            report.push(GameEvent::PieceResumed);
        }
    }

    report.score_changed = true;
    report.length_changed = true;
    report.push(GameEvent::AppleEaten {
        pos: head,
        points,
        length,
    });
    debug!(
        "apple eaten: length={} points={} snake_interval={:.1}ms",
        length,
        points,
        world.speed.snake_interval_ms()
    );
}

/// Step 3. Eating a star restarts the destruction window even if it is open.
fn resolve_star(
    world: &mut World,
    rng: &mut impl RandomSource,
    head: Pos,
    now_ms: u64,
    report: &mut TickReport,
) {
    if world.star != Some(head) {
        return;
    }
    world.score.add(STAR_POINTS);
    world.star = None;
    world.schedule_star(now_ms, rng);
    world.destruction = Some(Destruction {
        activated_ms: now_ms,
    });
    report.score_changed = true;
    report.push(GameEvent::StarCollected { pos: head });
    debug!("destruction mode until {}ms", now_ms + crate::types::DESTRUCTION_MODE_MS);
}

/// Step 4.
fn advance_piece(
    world: &mut World,
    rng: &mut impl RandomSource,
    now_ms: u64,
    report: &mut TickReport,
) {
    if world.falling.is_none() && spawn_due(world, now_ms) {
        spawn_piece(world, rng, now_ms, report);
    }

    let Some(mut piece) = world.falling else {
        return;
    };

    let new_y = piece.y + world.speed.fall_rate();
    let target = piece.cells_at(piece.rotation, piece.x, round_row(new_y));
    let hits_solid = target
        .iter()
        .any(|&c| below_floor(c) || world.board.is_occupied(c));
    let hits_snake = target.iter().any(|&c| world.snake.contains(c));

    if piece.suspended {
        if hits_snake {
            return;
        }
        piece.suspended = false;
        report.push(GameEvent::PieceResumed);
    }

    if !hits_solid && !hits_snake {
        piece.y = new_y;
        world.falling = Some(piece);
    } else if hits_solid {
        let cells = piece.cells();
        let settled = world.board.settle(&cells, piece.piece.kind);
        world.falling = None;
        world.last_drop_ms = Some(now_ms);
        report.push(GameEvent::PieceSettled {
            kind: piece.piece.kind,
            cells: settled,
        });
        debug!(
            "{:?} settled at x={} y={} ({} cells on board)",
            piece.piece.kind,
            piece.x,
            piece.grid_y(),
            world.board.count()
        );
    } else {
        piece.suspended = true;
        world.falling = Some(piece);
        report.push(GameEvent::PieceSuspended);
    }
}

fn spawn_due(world: &World, now_ms: u64) -> bool {
    match world.last_drop_ms {
        None => true,
        Some(last) => now_ms.saturating_sub(last) as f64 > world.speed.drop_interval_ms(),
    }
}

/// Uniform kind, then a uniform column among those where rotation 0 fits at
/// the top. No fitting column skips the spawn until a later tick.
fn spawn_piece(
    world: &mut World,
    rng: &mut impl RandomSource,
    now_ms: u64,
    report: &mut TickReport,
) {
    let kind = PieceKind::ALL[rng.next_below(PieceKind::ALL.len() as u32) as usize];
    let ty = piece_type(kind);
    let fits = |x: &i8| {
        ty.cells(0, *x, SPAWN_Y)
            .iter()
            .all(|&c| !world.blocks_piece(c))
    };

    let count = (0..SPAWN_X_RANGE as i8).filter(fits).count();
    if count == 0 {
        debug!("no room to spawn {:?}", kind);
        return;
    }
    let pick = rng.next_below(count as u32) as usize;
    let Some(x) = (0..SPAWN_X_RANGE as i8).filter(fits).nth(pick) else {
        return;
    };

    world.falling = Some(FallingPiece::new(ty, x, SPAWN_Y));
    world.last_drop_ms = Some(now_ms);
    report.push(GameEvent::PieceSpawned { kind, x });
}

/// Step 5.
fn update_star_system(
    world: &mut World,
    rng: &mut impl RandomSource,
    now_ms: u64,
    report: &mut TickReport,
) {
    if world.destruction.is_some_and(|d| d.is_expired(now_ms)) {
        world.destruction = None;
        report.push(GameEvent::DestructionEnded);
        debug!("destruction mode ended");
    }

    if world.star.is_none() && now_ms > world.next_star_ms && world.spawn_star(rng) {
        if let Some(pos) = world.star {
            report.push(GameEvent::StarSpawned { pos });
        }
    }
}

fn explode(world: &mut World, pos: Pos, now_ms: u64) {
    world.explosions.push(Explosion {
        pos,
        started_ms: now_ms,
    });
}

fn end_game(world: &mut World, cause: DeathCause, report: &mut TickReport) -> Option<Pos> {
    world.phase = Phase::Ended(cause);
    report.push(GameEvent::GameOver(cause));
    info!(
        "game over: {} (score={}, length={})",
        cause.as_str(),
        world.score.score(),
        world.snake.len()
    );
    None
}

/// Shift the falling piece one column. Settled cells, the snake and the walls
/// all block. Returns whether the piece moved.
pub fn shift_piece(world: &mut World, dx: i8) -> bool {
    let Some(piece) = world.falling else {
        return false;
    };
    let moved = piece.cells_at(piece.rotation, piece.x + dx, piece.grid_y());
    if moved.iter().any(|&c| world.blocks_piece(c)) {
        return false;
    }
    if let Some(p) = world.falling.as_mut() {
        p.x += dx;
    }
    true
}

/// Rotate the falling piece with horizontal kicks. On failure nothing changes.
pub fn rotate_piece(world: &mut World, clockwise: bool) -> bool {
    let Some(piece) = world.falling else {
        return false;
    };
    let Some((rotation, dx)) = try_rotate(
        piece.piece,
        piece.rotation,
        piece.x,
        piece.grid_y(),
        clockwise,
        |c| !world.blocks_piece(c),
    ) else {
        return false;
    };
    if let Some(p) = world.falling.as_mut() {
        p.rotation = rotation;
        p.x += dx;
    }
    true
}
