use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::roster::Roster;

/// Shared application state
///
/// One roster per process. Registration takes the write lock, every view
/// takes the read lock.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    roster: Arc<RwLock<Roster>>,
}

impl AppState {
    /// Creates state around an empty roster
    pub fn new() -> Self {
        Self::default()
    }

    pub fn roster(&self) -> &RwLock<Roster> {
        &self.roster
    }
}
