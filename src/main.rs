//! Terminal Snake Tetris runner (default binary).
//!
//! Cooperative single-threaded loop: wait for input until the next tick
//! deadline, queue mapped intents, tick, dispatch events to the sinks, render,
//! then schedule the next tick from the *current* snake interval. The deadline
//! is an `Instant`, so fractional intervals are not rounded down.

use std::time::Instant;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info};

use snake_tetris::config::Config;
use snake_tetris::core::{
    Clock, GameSnapshot, GameState, HighScoreStore, RenderSink, ScoreDisplay, ScoreSink,
    SystemClock,
};
use snake_tetris::input::{handle_key_event, should_quit};
use snake_tetris::term::{BellAudio, GameView, Screen};
use snake_tetris::{logging, JsonFileStore};

/// Score display sink. The panel itself is drawn from snapshots; this only
/// records the changes.
struct ScoreLog;

impl ScoreSink for ScoreLog {
    fn score_changed(&mut self, display: ScoreDisplay) {
        debug!(
            "length={} score={} high={} apples={}",
            display.length, display.score, display.high_score, display.apples
        );
    }
}

fn main() -> Result<()> {
    let config = Config::from_env();
    logging::init(&config)?;

    let mut store = JsonFileStore::new(&config.highscore_path);
    let high_score = store.load();

    let mut screen = Screen::new(GameView::default());
    screen.enter()?;

    let result = run(&mut screen, &config, &mut store, high_score);

    // Always try to restore terminal state.
    let _ = screen.exit();
    result
}

fn run(
    screen: &mut Screen,
    config: &Config,
    store: &mut JsonFileStore,
    high_score: u32,
) -> Result<()> {
    let clock = SystemClock::new();
    let seed = config.seed();
    info!("starting game seed={} high_score={}", seed, high_score);

    let mut game = GameState::new(seed, high_score, clock.now_ms());
    let mut audio = BellAudio::new(config.muted);
    let mut scores = ScoreLog;
    let mut snapshot = GameSnapshot::default();

    game.snapshot_into(&mut snapshot, clock.now_ms());
    screen.render(&snapshot)?;
    let mut deadline = clock.deadline_after(clock.now_ms(), game.snake_interval());

    loop {
        let timeout = deadline.saturating_duration_since(Instant::now());
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind != KeyEventKind::Release => {
                    if should_quit(key) {
                        info!("quit (score={}, high={})", game.score(), game.high_score());
                        return Ok(());
                    }
                    if let Some(action) = handle_key_event(key) {
                        game.push_action(action);
                    }
                }
                Event::Resize(w, h) => {
                    screen.resize(w, h);
                    screen.render(&snapshot)?;
                }
                _ => {}
            }
            continue;
        }

        let now = clock.now_ms();
        let report = game.tick(now);
        game.notify(&report, &mut audio, &mut scores, store);

        game.snapshot_into(&mut snapshot, now);
        screen.render(&snapshot)?;

        // Re-read every cycle: apples shorten the interval.
        deadline = clock.deadline_after(now, game.snake_interval());
    }
}
