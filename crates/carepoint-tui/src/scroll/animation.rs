//! Per-screen content scrolling
//!
//! The position lives in fractional rows on an `AnimatedValue`, so the tab
//! bar controller sees the eased offset rather than whole-row jumps.
//! Relative scrolls queue up between frames and `update` folds them into a
//! single retarget.

use std::time::Instant;

use carepoint_core::visibility::AnimatedValue;

use super::config::{ScrollConfig, ScrollConfigExt};

#[derive(Debug, Clone)]
pub struct ScrollAnimator {
    position: AnimatedValue,
    config: ScrollConfig,
    /// Rows requested since the last frame
    queued: i32,
}

impl Default for ScrollAnimator {
    fn default() -> Self {
        Self::new(ScrollConfig::default())
    }
}

fn to_row(value: f64) -> u16 {
    value.round().clamp(0.0, u16::MAX as f64) as u16
}

impl ScrollAnimator {
    pub fn new(config: ScrollConfig) -> Self {
        Self {
            position: AnimatedValue::new(0.0),
            config,
            queued: 0,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.position.is_animating()
    }

    /// Whether the next frame would move anything
    pub fn needs_update(&self) -> bool {
        self.position.is_animating() || self.queued != 0
    }

    /// Row the view settles on
    pub fn target_scroll(&self) -> u16 {
        to_row(self.position.target())
    }

    /// Row to render this frame
    pub fn current_scroll(&self) -> u16 {
        to_row(self.position.value())
    }

    /// Sampled position in tab bar controller units
    pub fn offset_units(&self) -> f64 {
        self.config.rows_to_units(self.position.value())
    }

    /// Jump without animating
    pub fn set_scroll(&mut self, row: u16) {
        self.position.set(row as f64);
        self.queued = 0;
    }

    /// Head for an absolute row, starting at `now`
    pub fn scroll_to(&mut self, row: u16, max_scroll: u16, now: Instant) {
        self.queued = 0;
        self.retarget(row.min(max_scroll), now);
    }

    fn retarget(&mut self, row: u16, now: Instant) {
        if !self.config.is_smooth() {
            self.position.set(row as f64);
            return;
        }
        if (self.position.target() - row as f64).abs() < f64::EPSILON {
            return;
        }
        self.position.animate_to(
            row as f64,
            self.config.animation_duration(),
            self.config.easing,
            now,
        );
    }

    /// Queue a relative scroll (positive = down)
    ///
    /// Applied at once when smooth scrolling is off.
    pub fn scroll_by(&mut self, rows: i32, max_scroll: u16) {
        if self.config.is_smooth() {
            self.queued = self.queued.saturating_add(rows);
            return;
        }
        let row = (self.target_scroll() as i32 + rows).clamp(0, max_scroll as i32);
        self.position.set(row as f64);
    }

    pub fn scroll_down(&mut self, max_scroll: u16) {
        let step = self.config.line_step();
        self.scroll_by(step, max_scroll);
    }

    pub fn scroll_up(&mut self, max_scroll: u16) {
        let step = self.config.line_step();
        self.scroll_by(-step, max_scroll);
    }

    pub fn scroll_half_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(half(viewport_height), max_scroll);
    }

    pub fn scroll_half_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-half(viewport_height), max_scroll);
    }

    pub fn scroll_full_page_down(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(viewport_height.max(1) as i32, max_scroll);
    }

    pub fn scroll_full_page_up(&mut self, viewport_height: u16, max_scroll: u16) {
        self.scroll_by(-(viewport_height.max(1) as i32), max_scroll);
    }

    /// Advance to `now` and return the row to render
    pub fn update(&mut self, max_scroll: u16, now: Instant) -> u16 {
        if self.queued != 0 {
            let row = (self.target_scroll() as i32 + self.queued).clamp(0, max_scroll as i32);
            self.queued = 0;
            self.retarget(row as u16, now);
        }

        // Content may have shrunk since the last frame
        if self.position.update(now) > max_scroll as f64 {
            self.position.set(max_scroll as f64);
        }
        self.current_scroll()
    }
}

fn half(viewport_height: u16) -> i32 {
    (viewport_height / 2).max(1) as i32
}
