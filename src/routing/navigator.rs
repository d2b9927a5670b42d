//! Navigation boundary

use std::sync::Mutex;

/// Imperative "go to path" primitive used for redirects
pub trait Navigator: Send + Sync {
    /// Move to `path`
    fn navigate(&self, path: &str);

    /// Path currently navigated to
    fn current_path(&self) -> String;
}

/// In-process location with a history of visited paths
#[derive(Debug)]
pub struct Location {
    history: Mutex<Vec<String>>,
}

impl Location {
    /// Start at `path`
    pub fn new(path: &str) -> Self {
        Self {
            history: Mutex::new(vec![path.to_string()]),
        }
    }

    /// All paths visited, oldest first, including the starting path
    #[allow(dead_code)]
    pub fn history(&self) -> Vec<String> {
        self.history.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }
}

impl Navigator for Location {
    fn navigate(&self, path: &str) {
        log::debug!("Navigating to {}", path);
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(path.to_string());
    }

    fn current_path(&self) -> String {
        self.history
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
            .unwrap_or_default()
    }
}
