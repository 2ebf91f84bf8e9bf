//! Scoring module - points and the speed scalars they drive
//!
//! Eating an apple is the only event that changes speed: both intervals shrink
//! by [`SPEED_UP_FACTOR`] and the fall rate grows by [`FALL_RATE_FACTOR`],
//! each clamped. A restart restores the base values.

use std::time::Duration;

use crate::types::{
    APPLE_POINTS_PER_SEGMENT, BASE_DROP_INTERVAL_MS, BASE_FALL_RATE, BASE_SNAKE_INTERVAL_MS,
    FALL_RATE_FACTOR, MAX_FALL_RATE, MIN_DROP_INTERVAL_MS, MIN_SNAKE_INTERVAL_MS, SPEED_UP_FACTOR,
};

/// Points for eating an apple with a snake of `length` segments (after growth)
pub fn apple_points(length: usize) -> u32 {
    APPLE_POINTS_PER_SEGMENT.saturating_mul(length as u32)
}

/// Derived speed scalars
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpeedScalars {
    snake_interval_ms: f64,
    drop_interval_ms: f64,
    fall_rate: f64,
}

impl SpeedScalars {
    pub fn base() -> Self {
        Self {
            snake_interval_ms: BASE_SNAKE_INTERVAL_MS,
            drop_interval_ms: BASE_DROP_INTERVAL_MS,
            fall_rate: BASE_FALL_RATE,
        }
    }

    /// Apply one apple's worth of speed-up
    pub fn speed_up(&mut self) {
        self.snake_interval_ms =
            (self.snake_interval_ms * SPEED_UP_FACTOR).max(MIN_SNAKE_INTERVAL_MS);
        self.drop_interval_ms = (self.drop_interval_ms * SPEED_UP_FACTOR).max(MIN_DROP_INTERVAL_MS);
        self.fall_rate = (self.fall_rate * FALL_RATE_FACTOR).min(MAX_FALL_RATE);
    }

    pub fn snake_interval_ms(&self) -> f64 {
        self.snake_interval_ms
    }

    /// Snake tick interval as a scheduler delay
    pub fn snake_interval(&self) -> Duration {
        Duration::from_secs_f64(self.snake_interval_ms / 1000.0)
    }

    pub fn drop_interval_ms(&self) -> f64 {
        self.drop_interval_ms
    }

    /// Cells per tick
    pub fn fall_rate(&self) -> f64 {
        self.fall_rate
    }
}

impl Default for SpeedScalars {
    fn default() -> Self {
        Self::base()
    }
}

/// Per-game score counters. The high score lives outside the world because it
/// survives restarts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreState {
    score: u32,
    apples_eaten: u32,
}

impl ScoreState {
    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn apples_eaten(&self) -> u32 {
        self.apples_eaten
    }

    pub fn add(&mut self, points: u32) {
        self.score = self.score.saturating_add(points);
    }

    pub fn record_apple(&mut self, length: usize) -> u32 {
        let points = apple_points(length);
        self.apples_eaten += 1;
        self.add(points);
        points
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apple_points_scale_with_length() {
        assert_eq!(apple_points(5), 50);
        assert_eq!(apple_points(12), 120);
    }

    #[test]
    fn test_single_speed_up() {
        let mut s = SpeedScalars::base();
        s.speed_up();
        assert!((s.snake_interval_ms() - 180.0).abs() < 1e-9);
        assert!((s.drop_interval_ms() - 900.0).abs() < 1e-9);
        assert!((s.fall_rate() - 1.1).abs() < 1e-9);
    }

    #[test]
    fn test_speed_up_clamps() {
        let mut s = SpeedScalars::base();
        for _ in 0..200 {
            s.speed_up();
        }
        assert_eq!(s.snake_interval_ms(), MIN_SNAKE_INTERVAL_MS);
        assert_eq!(s.drop_interval_ms(), MIN_DROP_INTERVAL_MS);
        assert_eq!(s.fall_rate(), MAX_FALL_RATE);
    }

    #[test]
    fn test_speed_up_is_monotonic() {
        let mut s = SpeedScalars::base();
        for _ in 0..50 {
            let before = s;
            s.speed_up();
            assert!(s.snake_interval_ms() <= before.snake_interval_ms());
            assert!(s.drop_interval_ms() <= before.drop_interval_ms());
            assert!(s.fall_rate() >= before.fall_rate());
        }
    }

    #[test]
    fn test_snake_interval_duration() {
        assert_eq!(SpeedScalars::base().snake_interval(), Duration::from_millis(200));
    }

    #[test]
    fn test_record_apple() {
        let mut score = ScoreState::default();
        assert_eq!(score.record_apple(5), 50);
        score.add(20);
        assert_eq!(score.score(), 70);
        assert_eq!(score.apples_eaten(), 1);
    }
}
