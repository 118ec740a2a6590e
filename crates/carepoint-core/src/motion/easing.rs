//! Easing curves mapping linear progress onto eased progress

use crate::config::EasingType;

pub trait EasingTypeExt {
    /// Eased progress for `t`; input outside [0, 1] is clamped first.
    fn apply(&self, t: f64) -> f64;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => (t >= 1.0) as u8 as f64,
            EasingType::Linear => t,
            EasingType::Cubic => 1.0 - (1.0 - t).powi(3),
            EasingType::Quintic => 1.0 - (1.0 - t).powi(5),
            EasingType::EaseOut if t >= 1.0 => 1.0,
            EasingType::EaseOut => 1.0 - 2f64.powf(-10.0 * t),
            EasingType::EaseInOut if t < 0.5 => 4.0 * t.powi(3),
            EasingType::EaseInOut => 1.0 - (2.0 - 2.0 * t).powi(3) / 2.0,
        }
    }
}
