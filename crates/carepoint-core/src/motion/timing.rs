//! Time calculation utilities for animations
//!
//! Everything takes the current instant as an argument so callers decide
//! the clock (frame time in the UI, synthetic instants in tests).

use std::time::{Duration, Instant};

/// Animation progress in [0.0, 1.0] at `now`
#[inline]
pub fn progress(start: Instant, duration: Duration, now: Instant) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if an animation started at `start` has run its course at `now`
#[inline]
pub fn is_complete(start: Instant, duration: Duration, now: Instant) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lerp() {
        assert!((lerp(0.0, 100.0, 0.0) - 0.0).abs() < 0.001);
        assert!((lerp(0.0, 100.0, 0.5) - 50.0).abs() < 0.001);
        assert!((lerp(100.0, 0.0, 0.25) - 75.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_zero_duration() {
        let start = Instant::now();
        assert!((progress(start, Duration::ZERO, start) - 1.0).abs() < 0.001);
    }

    #[test]
    fn test_progress_midway_and_past_end() {
        let start = Instant::now();
        let d = Duration::from_millis(200);
        assert!((progress(start, d, start + Duration::from_millis(100)) - 0.5).abs() < 1e-9);
        assert_eq!(progress(start, d, start + Duration::from_millis(500)), 1.0);
        assert!(is_complete(start, d, start + d));
        assert!(!is_complete(start, d, start + Duration::from_millis(199)));
    }

    #[test]
    fn test_now_before_start_is_zero() {
        let now = Instant::now();
        let start = now + Duration::from_millis(10);
        assert_eq!(progress(start, Duration::from_millis(100), now), 0.0);
    }
}
