//! Time sources.
//!
//! The engine never reads wall-clock time itself; every tick receives a
//! millisecond timestamp. Expirations (destruction mode, explosions, spawn
//! cadence, star schedule) are plain comparisons against that value.

use std::cell::Cell;
use std::time::{Duration, Instant};

/// Monotonic millisecond clock
pub trait Clock {
    fn now_ms(&self) -> u64;
}

/// Real time, measured from construction.
#[derive(Debug, Clone)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }

    /// Instant at which `now_ms()` will read `ms`
    pub fn instant_at(&self, ms: u64) -> Instant {
        self.origin + Duration::from_millis(ms)
    }

    /// Wall-clock deadline `interval` after the tick at `now_ms`. Sub-millisecond
    /// intervals are kept so a runner does not drift ahead of the engine.
    pub fn deadline_after(&self, now_ms: u64, interval: Duration) -> Instant {
        self.instant_at(now_ms) + interval
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }
}

/// Virtual clock advanced by hand (tests, replays).
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn advance(&self, ms: u64) -> u64 {
        let next = self.now.get().saturating_add(ms);
        self.now.set(next);
        next
    }

    pub fn set(&self, ms: u64) {
        self.now.set(ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manual_clock_advances() {
        let clock = ManualClock::new(100);
        assert_eq!(clock.now_ms(), 100);
        assert_eq!(clock.advance(50), 150);
        clock.set(10);
        assert_eq!(clock.now_ms(), 10);
    }

    #[test]
    fn deadline_keeps_fractional_interval() {
        let clock = SystemClock::new();
        // Three apples: 200 * 0.9^3 = 145.8ms
        let interval = Duration::from_secs_f64(0.1458);
        let deadline = clock.deadline_after(300, interval);

        assert_eq!(deadline.duration_since(clock.instant_at(300)), interval);
        assert!(interval > Duration::from_millis(145));
        assert_eq!(
            clock.instant_at(300).duration_since(clock.instant_at(0)),
            Duration::from_millis(300)
        );
    }

    #[test]
    fn system_clock_is_monotonic() {
        let clock = SystemClock::new();
        let a = clock.now_ms();
        let b = clock.now_ms();
        assert!(b >= a);
    }
}
