//! In-memory driver store shared by all workers.

use std::sync::{Arc, RwLock};

use crate::domain::driver::Driver;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DriverReader, DriverWriter, LoadOutcome, LoadState, LoadTicket};

#[derive(Debug, Default)]
struct StoreState {
    drivers: Arc<Vec<Driver>>,
    state: LoadState,
    latest: u64,
}

/// Holds the currently loaded collection and its load state.
///
/// Cloning is cheap and every clone sees the same data.
#[derive(Clone, Debug, Default)]
pub struct InMemoryDriverStore {
    inner: Arc<RwLock<StoreState>>,
}

impl InMemoryDriverStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl DriverReader for InMemoryDriverStore {
    fn list_drivers(&self) -> RepositoryResult<Arc<Vec<Driver>>> {
        let inner = self.inner.read()?;
        Ok(Arc::clone(&inner.drivers))
    }

    fn load_state(&self) -> RepositoryResult<LoadState> {
        let inner = self.inner.read()?;
        Ok(inner.state.clone())
    }
}

impl DriverWriter for InMemoryDriverStore {
    fn begin_load(&self) -> RepositoryResult<LoadTicket> {
        let mut inner = self.inner.write()?;
        inner.latest += 1;
        inner.state = LoadState::Loading;
        Ok(LoadTicket::new(inner.latest))
    }

    fn complete_load(&self, ticket: LoadTicket, outcome: LoadOutcome) -> RepositoryResult<bool> {
        let mut inner = self.inner.write()?;
        if ticket.get() != inner.latest {
            return Ok(false);
        }

        match outcome {
            Ok(drivers) => {
                inner.drivers = Arc::new(drivers);
                inner.state = LoadState::Ready;
            }
            Err(message) => {
                inner.drivers = Arc::new(Vec::new());
                inner.state = LoadState::Failed { message };
            }
        }
        Ok(true)
    }
}
