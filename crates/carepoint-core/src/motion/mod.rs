//! Motion primitives shared by the tab bar controller and content scrolling
//!
//! - `easing` - pure easing curves mapping [0, 1] to [0, 1]
//! - `timing` - progress and interpolation over explicit instants

pub mod easing;
pub mod timing;

pub use easing::EasingTypeExt;
pub use timing::{is_complete, lerp, progress};
