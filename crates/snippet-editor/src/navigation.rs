//! The navigation effect performed after a successful request.

use std::sync::{Arc, Mutex, PoisonError};

use tracing::info;

/// Moves the user to another page.
pub trait Navigator: Send + Sync {
    /// Navigates to `path`.
    fn navigate(&self, path: &str);
}

impl<N: Navigator + ?Sized> Navigator for Arc<N> {
    fn navigate(&self, path: &str) {
        (**self).navigate(path);
    }
}

impl<N: Navigator + ?Sized> Navigator for &N {
    fn navigate(&self, path: &str) {
        (**self).navigate(path);
    }
}

/// Navigator that remembers every path it was sent to.
#[derive(Debug, Default)]
pub struct RecordingNavigator {
    visited: Mutex<Vec<String>>,
}

impl RecordingNavigator {
    /// Creates a navigator with no history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the visited paths, oldest first.
    pub fn visited(&self) -> Vec<String> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Returns the most recently visited path.
    pub fn current(&self) -> Option<String> {
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }
}

impl Navigator for RecordingNavigator {
    fn navigate(&self, path: &str) {
        info!(%path, "navigating");
        self.visited
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(path.to_string());
    }
}
