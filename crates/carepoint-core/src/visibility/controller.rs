//! Scroll-reactive visibility controller for the tab bar
//!
//! Consumes content scroll samples, derives a per-sample velocity and drives
//! two animated values (vertical offset and opacity) between the shown and
//! hidden resting states. All time is passed in explicitly so the controller
//! can be driven from a render loop, an actor or a test.

use std::time::Instant;

use tracing::{debug, trace};

use super::animated::AnimatedValue;
use super::transition::{TransitionEvent, TransitionTiming, VisibilityTarget};
use crate::config::TabBarConfig;

/// Scroll position of the content area
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ContentOffset {
    pub y: f64,
}

/// One scroll sample delivered by the host
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ScrollEvent {
    pub content_offset: ContentOffset,
}

impl ScrollEvent {
    pub fn at(y: f64) -> Self {
        Self {
            content_offset: ContentOffset { y },
        }
    }
}

/// Point-in-time view of the bar for renderers
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilitySnapshot {
    pub vertical_offset: f64,
    pub opacity: f64,
    pub target: VisibilityTarget,
    pub in_flight: bool,
    pub attached: bool,
    pub hidden_offset: f64,
}

impl VisibilitySnapshot {
    /// Fraction of the bar pushed out of view, in [0, 1]
    pub fn hidden_fraction(&self) -> f64 {
        if self.hidden_offset <= 0.0 {
            return 0.0;
        }
        (self.vertical_offset / self.hidden_offset).clamp(0.0, 1.0)
    }

    /// Fully shown and not moving
    pub fn is_fully_shown(&self) -> bool {
        self.target == VisibilityTarget::Shown && !self.in_flight && self.vertical_offset == 0.0
    }
}

impl Default for VisibilitySnapshot {
    fn default() -> Self {
        VisibilityController::default().snapshot()
    }
}

#[derive(Debug, Clone)]
pub struct VisibilityController {
    timing: TransitionTiming,
    velocity_threshold: f64,
    offset: AnimatedValue,
    opacity: AnimatedValue,
    target: VisibilityTarget,
    in_flight: bool,
    attached: bool,
    last_scroll_position: f64,
    transitions_started: u64,
}

impl Default for VisibilityController {
    fn default() -> Self {
        Self::new(&TabBarConfig::default())
    }
}

impl VisibilityController {
    /// Create a controller resting in the shown state
    ///
    /// A disabled tab bar starts detached, so transitions are never applied
    /// until `attach` is called.
    pub fn new(config: &TabBarConfig) -> Self {
        Self {
            timing: TransitionTiming::from(config),
            velocity_threshold: config.velocity_threshold.abs(),
            offset: AnimatedValue::new(0.0),
            opacity: AnimatedValue::new(1.0),
            target: VisibilityTarget::Shown,
            in_flight: false,
            attached: config.enabled,
            last_scroll_position: 0.0,
            transitions_started: 0,
        }
    }

    /// Feed one scroll sample
    ///
    /// Returns the target of a transition started by this sample, if any.
    pub fn handle_scroll(&mut self, event: ScrollEvent, now: Instant) -> Option<VisibilityTarget> {
        let current = event.content_offset.y;
        let velocity = current - self.last_scroll_position;

        // At (or bounced past) the top the bar is always shown, even mid-hide
        if current <= 0.0 {
            self.last_scroll_position = current;
            return self.show(now).then_some(VisibilityTarget::Shown);
        }

        let started = if self.in_flight {
            trace!(velocity, "Transition in flight, ignoring scroll sample");
            None
        } else if velocity > self.velocity_threshold {
            self.hide(now).then_some(VisibilityTarget::Hidden)
        } else if velocity < -self.velocity_threshold {
            self.show(now).then_some(VisibilityTarget::Shown)
        } else {
            None
        };

        self.last_scroll_position = current;
        started
    }

    /// Begin a transition to the shown state
    pub fn show(&mut self, now: Instant) -> bool {
        self.start_transition(VisibilityTarget::Shown, now)
    }

    /// Begin a transition to the hidden state
    pub fn hide(&mut self, now: Instant) -> bool {
        self.start_transition(VisibilityTarget::Hidden, now)
    }

    fn start_transition(&mut self, target: VisibilityTarget, now: Instant) -> bool {
        if !self.attached {
            trace!(%target, "Tab bar detached, dropping transition");
            return false;
        }

        let offset_to = self.timing.offset_for(target);
        let opacity_to = self.timing.opacity_for(target);

        // Requesting the state the bar already rests in changes nothing
        if self.target == target
            && self.offset.is_at_rest_on(offset_to)
            && self.opacity.is_at_rest_on(opacity_to)
        {
            return false;
        }

        // A transition already heading there keeps its own clock
        if self.in_flight
            && self.target == target
            && (self.offset.target() - offset_to).abs() < f64::EPSILON
            && (self.opacity.target() - opacity_to).abs() < f64::EPSILON
        {
            trace!(%target, "Transition already under way");
            return false;
        }

        debug!(
            %target,
            from_offset = self.offset.value(),
            from_opacity = self.opacity.value(),
            "Starting tab bar transition"
        );

        self.offset
            .animate_to(offset_to, self.timing.offset_duration, self.timing.easing, now);
        self.opacity
            .animate_to(opacity_to, self.timing.opacity_duration, self.timing.easing, now);
        self.target = target;
        self.transitions_started += 1;

        // Zero durations settle immediately
        self.in_flight = self.offset.is_animating() || self.opacity.is_animating();
        true
    }

    /// Advance running animations to `now`
    ///
    /// Returns `Completed` once, when both values of the latest transition
    /// have reached their end values. A transition replaced by a newer one
    /// never reports completion.
    pub fn tick(&mut self, now: Instant) -> Option<TransitionEvent> {
        self.offset.update(now);
        self.opacity.update(now);

        if self.in_flight && !self.offset.is_animating() && !self.opacity.is_animating() {
            self.in_flight = false;
            debug!(target = %self.target, "Tab bar transition completed");
            return Some(TransitionEvent::Completed(self.target));
        }
        None
    }

    /// Whether a tick would change anything
    pub fn needs_update(&self) -> bool {
        self.in_flight || self.offset.is_animating() || self.opacity.is_animating()
    }

    /// Mark the render surface as mounted
    pub fn attach(&mut self) {
        self.attached = true;
    }

    /// Mark the render surface as unmounted
    ///
    /// Later transitions are silently ignored. A running one is frozen where
    /// it is and no completion is reported for it.
    pub fn detach(&mut self) {
        if self.in_flight {
            let (offset, opacity) = (self.offset.value(), self.opacity.value());
            self.offset.set(offset);
            self.opacity.set(opacity);
            self.in_flight = false;
        }
        self.attached = false;
    }

    pub fn is_attached(&self) -> bool {
        self.attached
    }

    pub fn is_in_flight(&self) -> bool {
        self.in_flight
    }

    pub fn last_scroll_position(&self) -> f64 {
        self.last_scroll_position
    }

    pub fn target(&self) -> VisibilityTarget {
        self.target
    }

    pub fn vertical_offset(&self) -> f64 {
        self.offset.value()
    }

    pub fn opacity(&self) -> f64 {
        self.opacity.value()
    }

    /// Number of transitions started since creation
    pub fn transitions_started(&self) -> u64 {
        self.transitions_started
    }

    pub fn timing(&self) -> &TransitionTiming {
        &self.timing
    }

    pub fn snapshot(&self) -> VisibilitySnapshot {
        VisibilitySnapshot {
            vertical_offset: self.offset.value(),
            opacity: self.opacity.value(),
            target: self.target,
            in_flight: self.in_flight,
            attached: self.attached,
            hidden_offset: self.timing.hidden_offset,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    /// Tick far past every duration
    fn settle(c: &mut VisibilityController, now: Instant) -> Instant {
        let later = now + ms(1_000);
        c.tick(later);
        later
    }

    fn feed(c: &mut VisibilityController, offsets: &[f64], now: Instant) {
        for &y in offsets {
            c.handle_scroll(ScrollEvent::at(y), now);
        }
    }

    fn hidden_controller(t0: Instant) -> (VisibilityController, Instant) {
        let mut c = VisibilityController::default();
        c.handle_scroll(ScrollEvent::at(50.0), t0);
        let now = settle(&mut c, t0);
        assert_eq!(c.target(), VisibilityTarget::Hidden);
        (c, now)
    }

    #[test]
    fn test_starts_shown_at_rest() {
        let c = VisibilityController::default();
        let snap = c.snapshot();
        assert_eq!(snap.vertical_offset, 0.0);
        assert_eq!(snap.opacity, 1.0);
        assert_eq!(snap.target, VisibilityTarget::Shown);
        assert!(!snap.in_flight);
        assert!(snap.is_fully_shown());
        assert_eq!(c.last_scroll_position(), 0.0);
    }

    #[test]
    fn test_fast_downward_scroll_hides() {
        let t0 = Instant::now();
        let mut c = VisibilityController::default();
        assert_eq!(
            c.handle_scroll(ScrollEvent::at(40.0), t0),
            Some(VisibilityTarget::Hidden)
        );
        assert!(c.is_in_flight());
        assert_eq!(c.last_scroll_position(), 40.0);

        settle(&mut c, t0);
        assert_eq!(c.vertical_offset(), 100.0);
        assert_eq!(c.opacity(), 0.0);
        assert!(!c.is_in_flight());
    }

    #[test]
    fn test_fast_upward_scroll_shows() {
        let t0 = Instant::now();
        let (mut c, now) = hidden_controller(t0);
        c.handle_scroll(ScrollEvent::at(400.0), now);
        let now = settle(&mut c, now);

        assert_eq!(
            c.handle_scroll(ScrollEvent::at(380.0), now),
            Some(VisibilityTarget::Shown)
        );
        settle(&mut c, now);
        assert_eq!(c.vertical_offset(), 0.0);
        assert_eq!(c.opacity(), 1.0);
    }

    #[test]
    fn test_dead_zone_is_inclusive() {
        let t0 = Instant::now();
        for delta in [-5.0, -2.5, 0.0, 3.0, 5.0] {
            let mut c = VisibilityController::default();
            c.handle_scroll(ScrollEvent::at(100.0), t0);
            let now = settle(&mut c, t0);
            let before = c.snapshot();
            let count = c.transitions_started();

            assert_eq!(c.handle_scroll(ScrollEvent::at(100.0 + delta), now), None);
            assert_eq!(c.snapshot(), before, "delta {delta} changed state");
            assert_eq!(c.transitions_started(), count);
            assert_eq!(c.last_scroll_position(), 100.0 + delta);
        }
    }

    #[test]
    fn test_top_forces_show_while_hiding() {
        let t0 = Instant::now();
        let mut c = VisibilityController::default();
        c.handle_scroll(ScrollEvent::at(80.0), t0);
        assert!(c.is_in_flight());

        let mid = t0 + ms(100);
        c.tick(mid);
        assert!(c.vertical_offset() > 0.0);

        assert_eq!(
            c.handle_scroll(ScrollEvent::at(0.0), mid),
            Some(VisibilityTarget::Shown)
        );
        assert_eq!(c.target(), VisibilityTarget::Shown);

        let end = settle(&mut c, mid);
        assert_eq!(c.vertical_offset(), 0.0);
        assert_eq!(c.opacity(), 1.0);
        assert_eq!(c.tick(end), None);
    }

    #[test]
    fn test_negative_offset_counts_as_top() {
        let t0 = Instant::now();
        let (mut c, now) = hidden_controller(t0);
        c.handle_scroll(ScrollEvent::at(-12.0), now);
        assert_eq!(c.target(), VisibilityTarget::Shown);
        assert_eq!(c.last_scroll_position(), -12.0);
    }

    #[test]
    fn test_in_flight_ignores_opposite_velocity() {
        let t0 = Instant::now();
        let mut c = VisibilityController::default();
        c.handle_scroll(ScrollEvent::at(200.0), t0);
        assert!(c.is_in_flight());

        assert_eq!(c.handle_scroll(ScrollEvent::at(120.0), t0 + ms(50)), None);
        assert_eq!(c.target(), VisibilityTarget::Hidden);
        assert_eq!(c.last_scroll_position(), 120.0);
    }

    #[test]
    fn test_show_when_shown_is_noop() {
        let t0 = Instant::now();
        let mut c = VisibilityController::default();
        let before = c.snapshot();
        assert!(!c.show(t0));
        assert_eq!(c.snapshot(), before);
        assert_eq!(c.transitions_started(), 0);
        assert!(!c.is_in_flight());
    }

    #[test]
    fn test_repeated_show_keeps_running_transition() {
        let t0 = Instant::now();
        let (mut c, now) = hidden_controller(t0);
        assert!(c.show(now));
        let count = c.transitions_started();

        assert!(!c.show(now + ms(16)));
        assert_eq!(c.transitions_started(), count);
        assert!(c.is_in_flight());
    }

    #[test]
    fn test_top_samples_every_frame_still_reach_shown() {
        let t0 = Instant::now();
        let (mut c, mut now) = hidden_controller(t0);

        let mut completed = None;
        for _ in 0..16 {
            now += ms(16);
            c.handle_scroll(ScrollEvent::at(0.0), now);
            completed = completed.or(c.tick(now));
        }

        assert_eq!(completed, Some(TransitionEvent::Completed(VisibilityTarget::Shown)));
        assert_eq!(c.vertical_offset(), 0.0);
        assert_eq!(c.opacity(), 1.0);
        assert!(!c.is_in_flight());
    }

    #[test]
    fn test_completion_reported_once() {
        let t0 = Instant::now();
        let mut c = VisibilityController::default();
        c.hide(t0);
        assert_eq!(c.tick(t0 + ms(100)), None);
        assert_eq!(
            c.tick(t0 + ms(200)),
            Some(TransitionEvent::Completed(VisibilityTarget::Hidden))
        );
        assert_eq!(c.tick(t0 + ms(300)), None);
    }

    #[test]
    fn test_superseded_transition_never_completes() {
        let t0 = Instant::now();
        let mut c = VisibilityController::default();
        c.hide(t0);
        c.tick(t0 + ms(80));
        c.show(t0 + ms(80));

        // The hide would have finished at 200ms
        let mut events = Vec::new();
        for step in 1..=20 {
            if let Some(ev) = c.tick(t0 + ms(80 + step * 20)) {
                events.push(ev);
            }
        }
        assert_eq!(events, vec![TransitionEvent::Completed(VisibilityTarget::Shown)]);
    }

    #[test]
    fn test_redirect_continues_from_current_value() {
        let t0 = Instant::now();
        let mut c = VisibilityController::default();
        c.hide(t0);
        c.tick(t0 + ms(100));
        let mid_offset = c.vertical_offset();
        assert!(mid_offset > 0.0 && mid_offset < 100.0);

        c.show(t0 + ms(100));
        assert!((c.vertical_offset() - mid_offset).abs() < 1e-9);
        c.tick(t0 + ms(110));
        assert!(c.vertical_offset() <= mid_offset);
    }

    #[test]
    fn test_offset_outlasts_opacity() {
        let t0 = Instant::now();
        let mut c = VisibilityController::default();
        c.hide(t0);

        assert_eq!(c.tick(t0 + ms(150)), None);
        assert_eq!(c.opacity(), 0.0);
        assert!(c.vertical_offset() < 100.0);
        assert!(c.is_in_flight());

        assert!(c.tick(t0 + ms(200)).is_some());
    }

    #[test]
    fn test_values_stay_in_range() {
        let t0 = Instant::now();
        let mut c = VisibilityController::default();
        c.hide(t0);
        for step in 0..30 {
            let now = t0 + ms(step * 10);
            if step == 7 {
                c.show(now);
            }
            if step == 13 {
                c.hide(now);
            }
            c.tick(now);
            assert!((0.0..=100.0).contains(&c.vertical_offset()));
            assert!((0.0..=1.0).contains(&c.opacity()));
        }
    }

    #[test]
    fn test_scenario_accelerating_scroll_hides_once() {
        let t0 = Instant::now();
        let mut c = VisibilityController::default();
        feed(&mut c, &[0.0, 20.0, 60.0, 200.0], t0);

        assert_eq!(c.transitions_started(), 1);
        settle(&mut c, t0);
        assert_eq!(c.target(), VisibilityTarget::Hidden);
        assert_eq!(c.vertical_offset(), 100.0);
        assert_eq!(c.opacity(), 0.0);
    }

    #[test]
    fn test_scenario_scroll_back_to_top() {
        let t0 = Instant::now();
        let mut c = VisibilityController::default();
        let mut now = t0;
        for y in [300.0, 250.0, 0.0] {
            c.handle_scroll(ScrollEvent::at(y), now);
            now = settle(&mut c, now);
        }
        assert_eq!(c.target(), VisibilityTarget::Shown);
        assert_eq!(c.vertical_offset(), 0.0);
        assert_eq!(c.opacity(), 1.0);

        // Same samples delivered in one burst
        let mut c = VisibilityController::default();
        feed(&mut c, &[300.0, 250.0, 0.0], t0);
        settle(&mut c, t0);
        assert_eq!(c.target(), VisibilityTarget::Shown);
        assert_eq!(c.vertical_offset(), 0.0);
    }

    #[test]
    fn test_scenario_slow_drift_triggers_nothing() {
        let t0 = Instant::now();
        let (mut c, now) = hidden_controller(t0);
        c.handle_scroll(ScrollEvent::at(100.0), now);
        let now = settle(&mut c, now);
        let count = c.transitions_started();
        let before = c.snapshot();

        feed(&mut c, &[102.0, 104.0], now);
        assert_eq!(c.transitions_started(), count);
        assert_eq!(c.snapshot(), before);
    }

    #[test]
    fn test_detached_ignores_transitions() {
        let t0 = Instant::now();
        let mut c = VisibilityController::default();
        c.detach();

        assert_eq!(c.handle_scroll(ScrollEvent::at(90.0), t0), None);
        assert!(!c.is_in_flight());
        assert_eq!(c.target(), VisibilityTarget::Shown);
        assert_eq!(c.last_scroll_position(), 90.0);

        c.attach();
        assert_eq!(
            c.handle_scroll(ScrollEvent::at(150.0), t0),
            Some(VisibilityTarget::Hidden)
        );
    }

    #[test]
    fn test_detach_mid_transition_drops_completion() {
        let t0 = Instant::now();
        let mut c = VisibilityController::default();
        c.hide(t0);
        c.tick(t0 + ms(50));
        c.detach();
        assert!(!c.is_in_flight());
        assert_eq!(c.tick(t0 + ms(500)), None);
    }

    #[test]
    fn test_disabled_config_starts_detached() {
        let config = TabBarConfig {
            enabled: false,
            ..TabBarConfig::default()
        };
        let mut c = VisibilityController::new(&config);
        assert!(!c.is_attached());
        assert!(!c.hide(Instant::now()));
    }

    #[test]
    fn test_custom_threshold() {
        let config = TabBarConfig {
            velocity_threshold: 30.0,
            ..TabBarConfig::default()
        };
        let t0 = Instant::now();
        let mut c = VisibilityController::new(&config);
        c.handle_scroll(ScrollEvent::at(1.0), t0);
        assert_eq!(c.handle_scroll(ScrollEvent::at(25.0), t0), None);
        assert_eq!(
            c.handle_scroll(ScrollEvent::at(60.0), t0),
            Some(VisibilityTarget::Hidden)
        );
    }

    #[test]
    fn test_hidden_fraction() {
        let t0 = Instant::now();
        let (c, _) = hidden_controller(t0);
        assert_eq!(c.snapshot().hidden_fraction(), 1.0);
        assert_eq!(VisibilitySnapshot::default().hidden_fraction(), 0.0);
    }
}
