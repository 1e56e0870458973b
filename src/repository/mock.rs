//! Mock repository implementations for isolating services in tests.

use std::sync::Arc;

use mockall::mock;

use crate::domain::driver::Driver;
use crate::repository::errors::RepositoryResult;
use crate::repository::{DriverReader, DriverWriter, LoadOutcome, LoadState, LoadTicket};

mock! {
    pub Repository {}

    impl DriverReader for Repository {
        fn list_drivers(&self) -> RepositoryResult<Arc<Vec<Driver>>>;
        fn load_state(&self) -> RepositoryResult<LoadState>;
    }

    impl DriverWriter for Repository {
        fn begin_load(&self) -> RepositoryResult<LoadTicket>;
        fn complete_load(&self, ticket: LoadTicket, outcome: LoadOutcome) -> RepositoryResult<bool>;
    }
}
