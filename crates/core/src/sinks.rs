//! Collaborator interfaces for the presentation and persistence layers.
//!
//! These are the only seams between the simulation and the outside world.
//! Implementations live elsewhere (terminal renderer, bell, JSON file); the
//! in-memory ones here back tests and headless runs.

use crate::snapshot::GameSnapshot;

/// Fire-and-forget sound cues
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AudioCue {
    /// Rising C5-E5-G5 triad
    Apple,
    /// Descending A4 -> A3 -> A2
    GameOver,
}

impl AudioCue {
    /// `(frequency_hz, offset_ms)` pairs
    pub fn notes(&self) -> &'static [(f32, u32)] {
        match self {
            AudioCue::Apple => &[(523.25, 0), (659.25, 100), (783.99, 200)],
            AudioCue::GameOver => &[(440.0, 0), (220.0, 300), (110.0, 800)],
        }
    }

    /// Total cue length in milliseconds
    pub fn duration_ms(&self) -> u32 {
        match self {
            AudioCue::Apple => 400,
            AudioCue::GameOver => 1000,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AudioCue::Apple => "apple",
            AudioCue::GameOver => "game_over",
        }
    }
}

/// Values shown by the score display
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreDisplay {
    pub length: usize,
    pub score: u32,
    pub high_score: u32,
    pub apples: u32,
}

/// Draws one frame from a read-only snapshot
pub trait RenderSink {
    type Error;

    fn render(&mut self, snapshot: &GameSnapshot) -> Result<(), Self::Error>;
}

pub trait AudioSink {
    fn play(&mut self, cue: AudioCue);
}

/// Notified whenever length, score or high score changes
pub trait ScoreSink {
    fn score_changed(&mut self, display: ScoreDisplay);
}

/// Single persisted integer. Read once at startup, written when beaten.
///
/// Implementations absorb their own I/O failures: a store that cannot be
/// read reports 0, a failed write is dropped.
pub trait HighScoreStore {
    fn load(&mut self) -> u32;
    fn save(&mut self, high_score: u32);
}

/// Audio sink that discards every cue
#[derive(Debug, Default, Clone, Copy)]
pub struct NullAudio;

impl AudioSink for NullAudio {
    fn play(&mut self, _cue: AudioCue) {}
}

/// Records cues in order (tests, headless runs)
#[derive(Debug, Default, Clone)]
pub struct RecordingAudio {
    pub cues: Vec<AudioCue>,
}

impl AudioSink for RecordingAudio {
    fn play(&mut self, cue: AudioCue) {
        self.cues.push(cue);
    }
}

/// Keeps the last display update
#[derive(Debug, Default, Clone)]
pub struct LastScore {
    pub last: Option<ScoreDisplay>,
    pub updates: usize,
}

impl ScoreSink for LastScore {
    fn score_changed(&mut self, display: ScoreDisplay) {
        self.last = Some(display);
        self.updates += 1;
    }
}

/// High score kept in memory
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    pub value: u32,
    pub saves: usize,
}

impl MemoryStore {
    pub fn new(value: u32) -> Self {
        Self { value, saves: 0 }
    }
}

impl HighScoreStore for MemoryStore {
    fn load(&mut self) -> u32 {
        self.value
    }

    fn save(&mut self, high_score: u32) {
        self.value = high_score;
        self.saves += 1;
    }
}

impl<S: HighScoreStore + ?Sized> HighScoreStore for &mut S {
    fn load(&mut self) -> u32 {
        (**self).load()
    }

    fn save(&mut self, high_score: u32) {
        (**self).save(high_score)
    }
}
