//! Game state module - lifecycle around the world
//!
//! Owns the [`World`], the random source, the intent queue and the high
//! score. The high score is process-wide: it survives restarts, which replace
//! the world wholesale.

use std::time::Duration;

use log::{debug, info};

use crate::engine;
use crate::events::{GameEvent, TickReport};
use crate::input::IntentQueue;
use crate::rng::{RandomSource, SimpleRng};
use crate::sinks::{AudioSink, HighScoreStore, ScoreDisplay, ScoreSink};
use crate::snapshot::GameSnapshot;
use crate::types::{GameAction, Phase};
use crate::world::World;

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState<R: RandomSource = SimpleRng> {
    world: World,
    rng: R,
    intents: IntentQueue,
    high_score: u32,
    /// Completed restarts
    episode: u32,
}

impl GameState<SimpleRng> {
    /// Create a new running game with the given RNG seed
    pub fn new(seed: u32, high_score: u32, now_ms: u64) -> Self {
        Self::with_rng(SimpleRng::new(seed), high_score, now_ms)
    }
}

impl<R: RandomSource> GameState<R> {
    pub fn with_rng(mut rng: R, high_score: u32, now_ms: u64) -> Self {
        let world = World::new(now_ms, &mut rng);
        Self::from_world(world, rng, high_score)
    }

    /// Wrap a prepared world (scenario setup)
    pub fn from_world(world: World, rng: R, high_score: u32) -> Self {
        Self {
            world,
            rng,
            intents: IntentQueue::new(),
            high_score,
            episode: 0,
        }
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    /// Direct world access for scenario setup. Gameplay goes through
    /// [`push_action`](Self::push_action) and [`tick`](Self::tick).
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    pub fn phase(&self) -> Phase {
        self.world.phase
    }

    pub fn is_running(&self) -> bool {
        self.world.is_running()
    }

    pub fn score(&self) -> u32 {
        self.world.score.score()
    }

    pub fn high_score(&self) -> u32 {
        self.high_score
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    pub fn intents(&self) -> &IntentQueue {
        &self.intents
    }

    /// Current snake tick interval. Re-read every cycle; it shrinks as apples
    /// are eaten.
    pub fn snake_interval(&self) -> Duration {
        self.world.speed.snake_interval()
    }

    pub fn display(&self) -> ScoreDisplay {
        ScoreDisplay {
            length: self.world.snake.len(),
            score: self.world.score.score(),
            high_score: self.high_score,
            apples: self.world.score.apples_eaten(),
        }
    }

    /// Queue a player intent for the next tick.
    ///
    /// Returns false when the intent is discarded: a reversal, anything but
    /// restart while ended, or restart while running.
    pub fn push_action(&mut self, action: GameAction) -> bool {
        match (self.world.phase, action) {
            (Phase::Ended(_), GameAction::Restart) => {
                self.intents.request_restart();
                true
            }
            (Phase::Ended(_), _) | (Phase::Running, GameAction::Restart) => false,
            (Phase::Running, GameAction::Steer(dir)) => {
                self.intents.steer(dir, self.world.snake.direction())
            }
            (Phase::Running, action) => self.intents.piece(action),
        }
    }

    /// Run one tick at `now_ms`: drain intents, then advance the world.
    pub fn tick(&mut self, now_ms: u64) -> TickReport {
        let mut report = TickReport::default();

        if !self.world.is_running() {
            if self.intents.restart_requested() {
                self.restart(now_ms);
                report.push(GameEvent::Restarted);
                report.score_changed = true;
                report.length_changed = true;
            }
            self.intents.clear();
            return report;
        }

        self.intents.apply(&mut self.world);
        engine::tick(&mut self.world, &mut self.rng, now_ms, &mut report);

        if self.world.score.score() > self.high_score {
            self.high_score = self.world.score.score();
            report.high_score_changed = true;
        }
        report
    }

    /// Fresh world with base speeds. The high score is kept.
    pub fn restart(&mut self, now_ms: u64) {
        info!(
            "restart after episode {} (score={}, high={})",
            self.episode,
            self.world.score.score(),
            self.high_score
        );
        self.world = World::new(now_ms, &mut self.rng);
        self.intents.clear();
        self.episode += 1;
    }

    pub fn snapshot(&self, now_ms: u64) -> GameSnapshot {
        let mut snap = GameSnapshot::default();
        self.snapshot_into(&mut snap, now_ms);
        snap
    }

    /// Fill an existing snapshot, reusing its buffers
    pub fn snapshot_into(&self, out: &mut GameSnapshot, now_ms: u64) {
        out.fill_from(&self.world, self.high_score, now_ms);
    }

    /// Forward a tick's outcome to the collaborators
    pub fn notify(
        &self,
        report: &TickReport,
        audio: &mut impl AudioSink,
        scores: &mut impl ScoreSink,
        store: &mut impl HighScoreStore,
    ) {
        for cue in report.audio_cues() {
            audio.play(cue);
        }
        if report.display_changed() {
            scores.score_changed(self.display());
        }
        if report.high_score_changed {
            debug!("new high score {}", self.high_score);
            store.save(self.high_score);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceRng;
    use crate::sinks::{AudioCue, LastScore, MemoryStore, RecordingAudio};
    use crate::types::{DeathCause, Direction, Pos};
    use crate::world::Snake;

    fn scenario(snake: Snake, high_score: u32) -> GameState<SequenceRng> {
        let mut world = World::empty(snake);
        world.apple = Some(Pos::new(17, 24));
        world.last_drop_ms = Some(0);
        GameState::from_world(world, SequenceRng::new(vec![0]), high_score)
    }

    #[test]
    fn new_game_is_running_with_initial_snake() {
        let game = GameState::new(12345, 10, 0);
        assert!(game.is_running());
        assert_eq!(game.world().snake.len(), 4);
        assert_eq!(game.high_score(), 10);
        assert_eq!(game.snake_interval(), Duration::from_millis(200));
    }

    #[test]
    fn reverse_intent_is_rejected() {
        let mut game = GameState::new(1, 0, 0);
        assert!(!game.push_action(GameAction::Steer(Direction::Left)));
        game.tick(200);
        assert_eq!(game.world().snake.direction(), Direction::Right);
    }

    #[test]
    fn steer_applies_on_next_tick() {
        let snake = Snake::from_cells([Pos::new(5, 5), Pos::new(4, 5)], Direction::Right);
        let mut game = scenario(snake, 0);
        assert!(game.push_action(GameAction::Steer(Direction::Down)));
        game.tick(10);
        assert_eq!(game.world().snake.head(), Pos::new(5, 6));
    }

    #[test]
    fn restart_only_when_ended() {
        let mut game = scenario(Snake::from_cells([Pos::new(17, 5)], Direction::Right), 0);
        assert!(!game.push_action(GameAction::Restart));

        game.tick(10);
        assert_eq!(game.phase(), Phase::Ended(DeathCause::Wall));
        assert!(!game.push_action(GameAction::Steer(Direction::Up)));
        assert!(game.push_action(GameAction::Restart));

        let report = game.tick(20);
        assert!(game.is_running());
        assert_eq!(game.episode(), 1);
        assert!(report.contains(|e| *e == GameEvent::Restarted));
        assert_eq!(game.world().snake.len(), 4);
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn high_score_survives_restart() {
        let mut game = scenario(
            Snake::from_cells([Pos::new(9, 12), Pos::new(8, 12)], Direction::Right),
            20,
        );
        game.world_mut().apple = Some(Pos::new(10, 12));
        let report = game.tick(10);
        assert_eq!(game.score(), 30);
        assert_eq!(game.high_score(), 30);
        assert!(report.high_score_changed);

        game.world_mut().phase = Phase::Ended(DeathCause::Wall);
        game.push_action(GameAction::Restart);
        game.tick(20);
        assert_eq!(game.score(), 0);
        assert_eq!(game.high_score(), 30);
        assert_eq!(game.snake_interval(), Duration::from_millis(200));
    }

    #[test]
    fn notify_dispatches_to_sinks() {
        let mut game = scenario(
            Snake::from_cells([Pos::new(9, 12), Pos::new(8, 12)], Direction::Right),
            0,
        );
        game.world_mut().apple = Some(Pos::new(10, 12));
        let report = game.tick(10);

        let mut audio = RecordingAudio::default();
        let mut scores = LastScore::default();
        let mut store = MemoryStore::new(0);
        game.notify(&report, &mut audio, &mut scores, &mut store);

        assert_eq!(audio.cues, vec![AudioCue::Apple]);
        assert_eq!(
            scores.last,
            Some(ScoreDisplay {
                length: 3,
                score: 30,
                high_score: 30,
                apples: 1
            })
        );
        assert_eq!(store.value, 30);
    }

    #[test]
    fn quiet_tick_notifies_nobody() {
        let mut game = scenario(Snake::from_cells([Pos::new(5, 5)], Direction::Down), 0);
        let report = game.tick(10);
        let mut audio = RecordingAudio::default();
        let mut scores = LastScore::default();
        let mut store = MemoryStore::new(0);
        game.notify(&report, &mut audio, &mut scores, &mut store);
        assert!(audio.cues.is_empty());
        assert_eq!(scores.updates, 0);
        assert_eq!(store.saves, 0);
    }

    #[test]
    fn snapshot_reflects_world() {
        let game = GameState::new(7, 99, 0);
        let snap = game.snapshot(0);
        assert_eq!(snap.length(), 4);
        assert_eq!(snap.head(), Some(Pos::new(9, 12)));
        assert_eq!(snap.high_score, 99);
        assert_eq!(snap.apple, game.world().apple);
        assert!(snap.playable());
    }
}
