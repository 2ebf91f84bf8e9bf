//! Input controller - buffered player intents
//!
//! Key events arrive between ticks. They are queued here and drained exactly
//! once, at the start of the next tick, so nothing outside `tick` ever
//! touches the world mid-update.

use crate::engine::{rotate_piece, shift_piece};
use crate::types::{Direction, GameAction};
use crate::world::World;

/// Queued intents for the next tick
#[derive(Debug, Clone, Default)]
pub struct IntentQueue {
    /// Latest accepted steering intent
    steer: Option<Direction>,
    /// Piece controls in arrival order
    piece: Vec<GameAction>,
    restart: bool,
}

impl IntentQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a steering intent, validated against the current heading.
    /// Reversals are rejected; a valid intent replaces any pending one.
    pub fn steer(&mut self, dir: Direction, current: Direction) -> bool {
        if dir.is_opposite(current) {
            return false;
        }
        self.steer = Some(dir);
        true
    }

    /// Queue a piece control. Non-piece actions are ignored.
    pub fn piece(&mut self, action: GameAction) -> bool {
        if !action.is_piece_control() {
            return false;
        }
        self.piece.push(action);
        true
    }

    pub fn request_restart(&mut self) {
        self.restart = true;
    }

    pub fn restart_requested(&self) -> bool {
        self.restart
    }

    pub fn pending_steer(&self) -> Option<Direction> {
        self.steer
    }

    pub fn pending_piece(&self) -> &[GameAction] {
        &self.piece
    }

    pub fn is_empty(&self) -> bool {
        self.steer.is_none() && self.piece.is_empty() && !self.restart
    }

    /// Drop everything (keeps buffer capacity)
    pub fn clear(&mut self) {
        self.steer = None;
        self.piece.clear();
        self.restart = false;
    }

    /// Apply queued steering and piece intents to the world, then clear.
    /// Restart is not handled here; the caller owns the lifecycle.
    pub fn apply(&mut self, world: &mut World) {
        if let Some(dir) = self.steer.take() {
            world.snake.set_direction(dir);
        }
        for action in self.piece.drain(..) {
            match action {
                GameAction::MoveLeft => {
                    shift_piece(world, -1);
                }
                GameAction::MoveRight => {
                    shift_piece(world, 1);
                }
                GameAction::RotateCw => {
                    rotate_piece(world, true);
                }
                GameAction::RotateCcw => {
                    rotate_piece(world, false);
                }
                GameAction::Steer(_) | GameAction::Restart => {}
            }
        }
        self.restart = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::piece_type;
    use crate::types::{PieceKind, Pos};
    use crate::world::{FallingPiece, Snake};

    #[test]
    fn reverse_steer_is_rejected_at_enqueue() {
        let mut q = IntentQueue::new();
        assert!(!q.steer(Direction::Left, Direction::Right));
        assert_eq!(q.pending_steer(), None);
    }

    #[test]
    fn latest_steer_wins() {
        let mut q = IntentQueue::new();
        assert!(q.steer(Direction::Up, Direction::Right));
        assert!(q.steer(Direction::Down, Direction::Right));
        assert_eq!(q.pending_steer(), Some(Direction::Down));
    }

    #[test]
    fn piece_intents_apply_in_order() {
        let mut world = World::empty(Snake::from_cells([Pos::new(0, 20)], Direction::Right));
        world.falling = Some(FallingPiece::new(piece_type(PieceKind::O), 5, 2));

        let mut q = IntentQueue::new();
        q.piece(GameAction::MoveLeft);
        q.piece(GameAction::MoveLeft);
        q.piece(GameAction::MoveRight);
        assert!(!q.piece(GameAction::Restart));
        q.apply(&mut world);

        assert_eq!(world.falling.map(|p| p.x), Some(4));
        assert!(q.is_empty());
    }

    #[test]
    fn piece_intents_without_piece_are_dropped() {
        let mut world = World::empty(Snake::new());
        let mut q = IntentQueue::new();
        q.piece(GameAction::RotateCw);
        q.apply(&mut world);
        assert!(world.falling.is_none());
        assert!(q.pending_piece().is_empty());
    }

    #[test]
    fn steer_is_applied_on_drain() {
        let mut world = World::empty(Snake::new());
        let mut q = IntentQueue::new();
        q.steer(Direction::Up, world.snake.direction());
        assert_eq!(world.snake.direction(), Direction::Right);
        q.apply(&mut world);
        assert_eq!(world.snake.direction(), Direction::Up);
    }
}
