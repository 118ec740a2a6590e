//! Visibility targets and the timing of transitions between them

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::config::{EasingType, TabBarConfig};

/// Resting state a transition drives the tab bar toward
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityTarget {
    Shown,
    Hidden,
}

impl VisibilityTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            VisibilityTarget::Shown => "shown",
            VisibilityTarget::Hidden => "hidden",
        }
    }
}

impl std::fmt::Display for VisibilityTarget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reported by `VisibilityController::tick` when a transition settles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionEvent {
    Completed(VisibilityTarget),
}

/// End values and durations for show/hide transitions
#[derive(Debug, Clone, PartialEq)]
pub struct TransitionTiming {
    pub hidden_offset: f64,
    pub offset_duration: Duration,
    pub opacity_duration: Duration,
    pub easing: EasingType,
}

impl TransitionTiming {
    /// Offset the bar rests at for `target`
    pub fn offset_for(&self, target: VisibilityTarget) -> f64 {
        match target {
            VisibilityTarget::Shown => 0.0,
            VisibilityTarget::Hidden => self.hidden_offset,
        }
    }

    /// Opacity the bar rests at for `target`
    pub fn opacity_for(&self, target: VisibilityTarget) -> f64 {
        match target {
            VisibilityTarget::Shown => 1.0,
            VisibilityTarget::Hidden => 0.0,
        }
    }
}

impl Default for TransitionTiming {
    fn default() -> Self {
        Self::from(&TabBarConfig::default())
    }
}

impl From<&TabBarConfig> for TransitionTiming {
    fn from(config: &TabBarConfig) -> Self {
        Self {
            hidden_offset: config.hidden_offset,
            offset_duration: Duration::from_millis(config.offset_duration_ms),
            opacity_duration: Duration::from_millis(config.opacity_duration_ms),
            easing: config.easing,
        }
    }
}
