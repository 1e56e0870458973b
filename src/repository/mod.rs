use std::sync::Arc;

use serde::Serialize;

use crate::domain::driver::Driver;
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod memory;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

pub use memory::InMemoryDriverStore;

/// Identifies one load request. Later loads get larger tickets.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn get(self) -> u64 {
        self.0
    }
}

/// Lifecycle of the driver collection.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(tag = "state", rename_all = "camelCase")]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
    Failed {
        message: String,
    },
}

impl LoadState {
    /// User-facing failure message, if the last load failed.
    pub fn error(&self) -> Option<&str> {
        match self {
            LoadState::Failed { message } => Some(message),
            _ => None,
        }
    }
}

/// Result of a load: the new collection or a user-facing failure message.
pub type LoadOutcome = Result<Vec<Driver>, String>;

pub trait DriverReader {
    /// Snapshot of the current collection. Unchanged data is shared, not copied.
    fn list_drivers(&self) -> RepositoryResult<Arc<Vec<Driver>>>;
    fn load_state(&self) -> RepositoryResult<LoadState>;
}

pub trait DriverWriter {
    /// Registers a new load and marks the store as loading.
    fn begin_load(&self) -> RepositoryResult<LoadTicket>;
    /// Applies `outcome` if `ticket` is still the latest load.
    ///
    /// Returns `false` when a newer load superseded this one. A failed
    /// outcome clears the collection.
    fn complete_load(&self, ticket: LoadTicket, outcome: LoadOutcome) -> RepositoryResult<bool>;
}
