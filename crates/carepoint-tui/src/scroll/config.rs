use std::time::Duration;

pub use carepoint_core::{EasingType, ScrollConfig};

/// Derived values over `ScrollConfig`
pub trait ScrollConfigExt {
    fn animation_duration(&self) -> Duration;

    /// Smooth scrolling enabled with a non-zero duration
    fn is_smooth(&self) -> bool;

    /// Rows moved by a single line step
    fn line_step(&self) -> i32;

    /// Convert a (fractional) row offset to tab bar controller units
    fn rows_to_units(&self, rows: f64) -> f64;
}

impl ScrollConfigExt for ScrollConfig {
    fn animation_duration(&self) -> Duration {
        Duration::from_millis(self.animation_duration_ms)
    }

    fn is_smooth(&self) -> bool {
        self.smooth_enabled && self.animation_duration_ms > 0
    }

    fn line_step(&self) -> i32 {
        self.scroll_lines.max(1) as i32
    }

    fn rows_to_units(&self, rows: f64) -> f64 {
        rows.max(0.0) * self.row_height.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ScrollConfig::default();
        assert!(config.is_smooth());
        assert_eq!(config.animation_duration(), Duration::from_millis(150));
        assert_eq!(config.easing, EasingType::Cubic);
        assert_eq!(config.line_step(), 1);
    }

    #[test]
    fn test_zero_duration_is_not_smooth() {
        let config = ScrollConfig {
            animation_duration_ms: 0,
            ..Default::default()
        };
        assert!(!config.is_smooth());
    }

    #[test]
    fn test_rows_to_units() {
        let config = ScrollConfig::default();
        assert_eq!(config.rows_to_units(0.0), 0.0);
        assert_eq!(config.rows_to_units(3.0), 12.0);
        assert_eq!(config.rows_to_units(2.5), 10.0);
        assert_eq!(config.rows_to_units(-1.0), 0.0);
    }

    #[test]
    fn test_line_step_never_zero() {
        let config = ScrollConfig {
            scroll_lines: 0,
            ..Default::default()
        };
        assert_eq!(config.line_step(), 1);
    }
}
