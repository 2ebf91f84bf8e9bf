//! Terminal audio sink.
//!
//! A terminal can't synthesize the tones, so each cue rings the bell (once for
//! an apple, three times for game over) and is logged with its notes.

use std::io::{self, Write};

use log::{debug, warn};

use crate::core::{AudioCue, AudioSink};

pub struct BellAudio<W: Write = io::Stdout> {
    out: W,
    muted: bool,
}

impl BellAudio<io::Stdout> {
    pub fn new(muted: bool) -> Self {
        Self::with_writer(io::stdout(), muted)
    }
}

impl<W: Write> BellAudio<W> {
    pub fn with_writer(out: W, muted: bool) -> Self {
        Self { out, muted }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn ring(&mut self, times: usize) -> io::Result<()> {
        for _ in 0..times {
            self.out.write_all(b"\x07")?;
        }
        self.out.flush()
    }
}

fn bells(cue: AudioCue) -> usize {
    match cue {
        AudioCue::Apple => 1,
        AudioCue::GameOver => cue.notes().len(),
    }
}

impl<W: Write> AudioSink for BellAudio<W> {
    fn play(&mut self, cue: AudioCue) {
        debug!("cue {} {:?}", cue.as_str(), cue.notes());
        if self.muted {
            return;
        }
        if let Err(err) = self.ring(bells(cue)) {
            warn!("bell for {} cue failed: {}", cue.as_str(), err);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn apple_rings_once_game_over_thrice() {
        let mut audio = BellAudio::with_writer(Vec::new(), false);
        audio.play(AudioCue::Apple);
        audio.play(AudioCue::GameOver);
        assert_eq!(audio.into_inner(), b"\x07\x07\x07\x07".to_vec());
    }

    #[test]
    fn muted_sink_is_silent() {
        let mut audio = BellAudio::with_writer(Vec::new(), true);
        audio.play(AudioCue::Apple);
        assert!(audio.is_muted());
        assert!(audio.into_inner().is_empty());
    }
}
