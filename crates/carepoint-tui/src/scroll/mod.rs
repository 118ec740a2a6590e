//! Smooth content scrolling
//!
//! - `config` - extension helpers over `carepoint_core::ScrollConfig`
//! - `animation` - per-screen animator driven with explicit frame instants
//!
//! Easing and timing live in `carepoint_core::motion` so the tab bar and the
//! content share the same curves.
//!
//! ```ignore
//! use carepoint_tui::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::new(config.ui.scroll.clone());
//! animator.scroll_by(10, max_scroll);
//!
//! // Every frame
//! let rows = animator.update(max_scroll, Instant::now());
//! controller.handle_scroll(ScrollEvent::at(animator.offset_units()), now);
//! ```

pub mod animation;
pub mod config;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
