//! Retargetable animated scalar
//!
//! A value that interpolates toward a target over a duration. Calling
//! `animate_to` while a segment is running starts a new segment from the
//! value sampled at that instant, so a running animation can be redirected
//! without a visible jump (last writer wins on the target).

use std::time::{Duration, Instant};

use crate::config::EasingType;
use crate::motion::{is_complete, lerp, progress, EasingTypeExt};

#[derive(Debug, Clone)]
struct Segment {
    start: Instant,
    from: f64,
    to: f64,
    duration: Duration,
    easing: EasingType,
}

#[derive(Debug, Clone)]
pub struct AnimatedValue {
    value: f64,
    segment: Option<Segment>,
}

impl AnimatedValue {
    pub fn new(value: f64) -> Self {
        Self {
            value,
            segment: None,
        }
    }

    /// Last sampled value
    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Value the current segment ends on (the current value when at rest)
    pub fn target(&self) -> f64 {
        self.segment.as_ref().map(|s| s.to).unwrap_or(self.value)
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.segment.is_some()
    }

    /// True when no segment is running and the value sits on `value`
    pub fn is_at_rest_on(&self, value: f64) -> bool {
        self.segment.is_none() && (self.value - value).abs() < f64::EPSILON
    }

    /// Jump to a value, dropping any running segment
    pub fn set(&mut self, value: f64) {
        self.segment = None;
        self.value = value;
    }

    /// Start (or redirect) an animation toward `to`
    pub fn animate_to(&mut self, to: f64, duration: Duration, easing: EasingType, now: Instant) {
        // Sample first so a redirect starts where the old curve currently is
        self.update(now);

        if duration.is_zero() {
            self.set(to);
            return;
        }

        self.segment = Some(Segment {
            start: now,
            from: self.value,
            to,
            duration,
            easing,
        });
    }

    /// Advance to `now` and return the sampled value
    pub fn update(&mut self, now: Instant) -> f64 {
        if let Some(ref seg) = self.segment {
            if is_complete(seg.start, seg.duration, now) {
                self.value = seg.to;
                self.segment = None;
            } else {
                let t = progress(seg.start, seg.duration, now);
                self.value = lerp(seg.from, seg.to, seg.easing.apply(t));
            }
        }
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MS: fn(u64) -> Duration = Duration::from_millis;

    #[test]
    fn test_linear_segment_reaches_target() {
        let t0 = Instant::now();
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(100.0, MS(200), EasingType::Linear, t0);
        assert!(v.is_animating());
        assert_eq!(v.target(), 100.0);

        assert!((v.update(t0 + MS(100)) - 50.0).abs() < 1e-9);
        assert_eq!(v.update(t0 + MS(200)), 100.0);
        assert!(!v.is_animating());
        assert!(v.is_at_rest_on(100.0));
    }

    #[test]
    fn test_redirect_starts_from_current_value() {
        let t0 = Instant::now();
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(100.0, MS(200), EasingType::Linear, t0);

        // Halfway there, turn around
        v.animate_to(0.0, MS(200), EasingType::Linear, t0 + MS(100));
        assert!((v.value() - 50.0).abs() < 1e-9);
        assert_eq!(v.target(), 0.0);

        assert!((v.update(t0 + MS(200)) - 25.0).abs() < 1e-9);
        assert_eq!(v.update(t0 + MS(300)), 0.0);
    }

    #[test]
    fn test_zero_duration_jumps() {
        let t0 = Instant::now();
        let mut v = AnimatedValue::new(1.0);
        v.animate_to(0.0, Duration::ZERO, EasingType::Cubic, t0);
        assert!(!v.is_animating());
        assert_eq!(v.value(), 0.0);
    }

    #[test]
    fn test_same_target_has_no_jump() {
        let t0 = Instant::now();
        let mut v = AnimatedValue::new(0.0);
        v.animate_to(0.0, MS(200), EasingType::EaseInOut, t0);
        for ms in [0, 50, 100, 150, 200] {
            assert_eq!(v.update(t0 + MS(ms)), 0.0);
        }
    }
}
