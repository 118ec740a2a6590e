//! Tab bar visibility
//!
//! - `controller` - scroll handling and show/hide transitions
//! - `actor` - channel-driven wrapper for multi-threaded hosts
//! - `animated` - retargetable animated values
//! - `transition` - targets, timings and completion events

pub mod actor;
pub mod animated;
pub mod controller;
pub mod transition;

pub use actor::{VisibilityActor, VisibilityCommand, VisibilityHandle};
pub use animated::AnimatedValue;
pub use controller::{ContentOffset, ScrollEvent, VisibilityController, VisibilitySnapshot};
pub use transition::{TransitionEvent, TransitionTiming, VisibilityTarget};
