use tracing::debug;

use super::route::Route;

/// Stack-based navigation history
///
/// Always holds at least one entry.
#[derive(Debug, Clone)]
pub struct Router {
    history: Vec<Route>,
}

impl Default for Router {
    fn default() -> Self {
        Self::new()
    }
}

impl Router {
    /// Start at Home
    pub fn new() -> Self {
        Self::starting_at(Route::Home)
    }

    pub fn starting_at(route: Route) -> Self {
        Self {
            history: vec![route],
        }
    }

    pub fn push(&mut self, route: Route) {
        debug!(path = %route, "Router push");
        self.history.push(route);
    }

    /// Swap the top entry
    pub fn replace(&mut self, route: Route) {
        debug!(path = %route, "Router replace");
        match self.history.last_mut() {
            Some(top) => *top = route,
            None => self.history.push(route),
        }
    }

    /// Pop the top entry; returns false when already at the root
    pub fn back(&mut self) -> bool {
        if self.history.len() <= 1 {
            return false;
        }
        self.history.pop();
        true
    }

    pub fn current(&self) -> &Route {
        // history is never empty
        &self.history[self.history.len() - 1]
    }

    pub fn current_path(&self) -> String {
        self.current().path()
    }

    pub fn depth(&self) -> usize {
        self.history.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_home() {
        let router = Router::new();
        assert_eq!(router.current(), &Route::Home);
        assert_eq!(router.current_path(), "/home");
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_push_and_back() {
        let mut router = Router::new();
        router.push(Route::Hospitals);
        router.push(Route::Hospital("1".into()));
        assert_eq!(router.depth(), 3);

        assert!(router.back());
        assert_eq!(router.current(), &Route::Hospitals);
        assert!(router.back());
        assert!(!router.back());
        assert_eq!(router.current(), &Route::Home);
        assert_eq!(router.depth(), 1);
    }

    #[test]
    fn test_replace_keeps_depth() {
        let mut router = Router::new();
        router.push(Route::Profile);
        router.replace(Route::Home);
        assert_eq!(router.depth(), 2);
        assert_eq!(router.current(), &Route::Home);
    }
}
