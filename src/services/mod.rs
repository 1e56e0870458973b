use thiserror::Error;

use crate::export::ExportError;
use crate::repository::errors::RepositoryError;

pub mod drivers;
pub mod loader;

#[derive(Debug, Error)]
pub enum ServiceError {
    /// User-facing problem with submitted parameters.
    #[error("{0}")]
    Form(String),

    #[error("repository error: {0}")]
    Repository(#[from] RepositoryError),

    #[error("export error: {0}")]
    Export(#[from] ExportError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;
