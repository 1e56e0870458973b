use std::path::{Path, PathBuf};

use actix_web::web;
use serde_json::Value;

use crate::domain::driver::Driver;
use crate::sources::{DriverSource, SourceError, SourceResult};

/// Reads drivers from a JSON array on disk.
///
/// Rows are cast to [`Driver`] without further validation. Only an unreadable
/// file or a document that is not a JSON array fails the load.
#[derive(Debug, Clone)]
pub struct FixtureSource {
    path: PathBuf,
}

impl FixtureSource {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

impl DriverSource for FixtureSource {
    async fn load(&self) -> SourceResult<Vec<Driver>> {
        let path = self.path.clone();
        let raw = web::block(move || std::fs::read_to_string(path))
            .await
            .map_err(std::io::Error::other)
            .and_then(|read| read)
            .map_err(|source| SourceError::Io {
                path: self.path.display().to_string(),
                source,
            })?;

        let rows: Vec<Value> = serde_json::from_str(&raw)?;
        Ok(rows.into_iter().enumerate().map(row_to_driver).collect())
    }
}

// Non-object rows become empty records.
fn row_to_driver((index, row): (usize, Value)) -> Driver {
    if !row.is_object() {
        log::warn!("Fixture row {index} is not an object: {row}");
        return Driver::default();
    }
    serde_json::from_value(row).unwrap_or_else(|err| {
        log::warn!("Fixture row {index} could not be read: {err}");
        Driver::default()
    })
}
