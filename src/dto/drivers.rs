use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::driver::Driver;
use crate::domain::filter::FilterDefinition;
use crate::pagination::Paginated;
use crate::repository::LoadState;

/// Data required to render the main index template.
#[derive(Debug)]
pub struct IndexPageData {
    /// Current page of filtered drivers.
    pub drivers: Paginated<Driver>,
    /// Number of drivers matching the filters across all pages.
    pub total: usize,
    /// Number of filters currently constraining the table.
    pub active_filters: usize,
    pub definitions: &'static [FilterDefinition],
    /// Submitted filter values keyed by query parameter.
    pub filter_values: BTreeMap<&'static str, String>,
    /// Filter query string reused by pager and export links.
    pub query: String,
    pub load_state: LoadState,
}

/// Result payload returned by `/api/v1/drivers`.
#[derive(Debug, Serialize)]
pub struct DriversResponse {
    /// Total number of drivers matching the filter.
    pub total: usize,
    pub drivers: Vec<Driver>,
    /// Load failure message, if the last load failed.
    pub error: Option<String>,
}

/// Encoded export ready to be sent as a download.
#[derive(Debug)]
pub struct ExportFile {
    pub file_name: String,
    pub content_type: &'static str,
    pub body: Vec<u8>,
}

/// What happened to a reload request.
#[derive(Debug, PartialEq, Eq)]
pub struct ReloadOutcome {
    /// `false` when a newer reload superseded this one.
    pub applied: bool,
    pub loaded: usize,
    pub error: Option<String>,
}
