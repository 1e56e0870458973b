//! Data source adapters producing normalized driver records.
//!
//! The source is picked once at startup from `use_mock_data`: a bundled JSON
//! fixture or the placeholder users API.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;

use crate::domain::driver::Driver;
use crate::models::config::ServerConfig;

pub mod fixture;
pub mod remote;

pub use fixture::FixtureSource;
pub use remote::RemoteSource;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read fixture {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("unexpected payload shape: {0}")]
    Shape(#[from] serde_json::Error),

    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
}

pub type SourceResult<T> = Result<T, SourceError>;

/// Produces the full driver collection. A load either yields every record or
/// fails as a whole.
pub trait DriverSource {
    fn load(&self) -> impl Future<Output = SourceResult<Vec<Driver>>> + Send;
}

/// Source selected by configuration.
#[derive(Debug, Clone)]
pub enum DataSource {
    Fixture(FixtureSource),
    Remote(RemoteSource),
}

impl DataSource {
    pub fn from_config(config: &ServerConfig) -> SourceResult<Self> {
        if config.use_mock_data {
            return Ok(DataSource::Fixture(FixtureSource::new(&config.fixture_path)));
        }

        let remote = RemoteSource::new(
            &config.api_base_url,
            Duration::from_secs(config.request_timeout_secs),
        )?;
        Ok(DataSource::Remote(remote))
    }
}

impl DriverSource for DataSource {
    async fn load(&self) -> SourceResult<Vec<Driver>> {
        match self {
            DataSource::Fixture(source) => source.load().await,
            DataSource::Remote(source) => source.load().await,
        }
    }
}
