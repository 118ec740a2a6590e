pub mod appointments;
pub mod catalog;
pub mod config;
pub mod error;
pub mod motion;
pub mod navigation;
pub mod profile;
pub mod visibility;

pub use config::{AppConfig, EasingType, ScrollConfig, TabBarConfig};
pub use error::{Error, Result};
pub use visibility::{ScrollEvent, VisibilityController, VisibilitySnapshot, VisibilityTarget};
