//! In-app navigation: routes, history and tab bar targets

mod route;
mod router;
mod tabs;

pub use route::Route;
pub use router::Router;
pub use tabs::TabTarget;
