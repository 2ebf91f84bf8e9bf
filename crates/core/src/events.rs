//! Events produced by one tick.
//!
//! The engine never calls collaborators directly. Each tick returns a
//! [`TickReport`]; the runner forwards it to the audio and score sinks.

use arrayvec::ArrayVec;

use crate::sinks::AudioCue;
use crate::types::{DeathCause, PieceKind, Pos};

/// Upper bound on events per tick. A tick produces at most one of each
/// kind, so this never fills.
pub const MAX_TICK_EVENTS: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Restarted,
    AppleEaten { pos: Pos, points: u32, length: usize },
    StarCollected { pos: Pos },
    StarSpawned { pos: Pos },
    SettledDestroyed { pos: Pos },
    FallingDestroyed { pos: Pos, kind: PieceKind },
    PieceSpawned { kind: PieceKind, x: i8 },
    PieceSettled { kind: PieceKind, cells: usize },
    PieceSuspended,
    PieceResumed,
    DestructionEnded,
    GameOver(DeathCause),
}

impl GameEvent {
    /// Sound to play for this event, if any
    pub fn audio_cue(&self) -> Option<AudioCue> {
        match self {
            GameEvent::AppleEaten { .. } => Some(AudioCue::Apple),
            GameEvent::GameOver(_) => Some(AudioCue::GameOver),
            _ => None,
        }
    }
}

/// Outcome of one tick
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickReport {
    pub events: ArrayVec<GameEvent, MAX_TICK_EVENTS>,
    pub score_changed: bool,
    pub length_changed: bool,
    pub high_score_changed: bool,
}

impl TickReport {
    pub(crate) fn push(&mut self, event: GameEvent) {
        // Capacity exceeds the per-tick maximum; a full buffer drops silently.
        let _ = self.events.try_push(event);
    }

    /// Any change the score display should hear about
    pub fn display_changed(&self) -> bool {
        self.score_changed || self.length_changed || self.high_score_changed
    }

    pub fn game_over(&self) -> Option<DeathCause> {
        self.events.iter().find_map(|e| match e {
            GameEvent::GameOver(cause) => Some(*cause),
            _ => None,
        })
    }

    pub fn contains(&self, pred: impl Fn(&GameEvent) -> bool) -> bool {
        self.events.iter().any(pred)
    }

    pub fn audio_cues(&self) -> impl Iterator<Item = AudioCue> + '_ {
        self.events.iter().filter_map(GameEvent::audio_cue)
    }
}
