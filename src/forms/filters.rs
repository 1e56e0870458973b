use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::filter::FilterState;
use crate::domain::types::parse_date;
use crate::forms::FormError;

#[derive(Clone, Debug, Default, Deserialize, Serialize, Validate, PartialEq, Eq)]
/// Filter panel query parameters shared by the page, API and export routes.
///
/// Empty values mean "no constraint".
pub struct FilterForm {
    /// Name search text.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[validate(length(max = 100))]
    pub search: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[validate(length(max = 100))]
    pub email: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[validate(length(max = 32))]
    pub status: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    #[validate(length(max = 100))]
    pub location: String,
    /// `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub start_date: String,
    /// `YYYY-MM-DD`.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub end_date: String,
    /// Table page, ignored by exports.
    #[serde(default, skip_serializing)]
    pub page: Option<usize>,
}

fn parse_optional_date(field: &'static str, value: &str) -> Result<Option<NaiveDate>, FormError> {
    if value.trim().is_empty() {
        return Ok(None);
    }
    parse_date(value)
        .map(Some)
        .map_err(|source| FormError::InvalidDate { field, source })
}

impl FilterForm {
    /// Validates the form and converts it into a [`FilterState`].
    ///
    /// Text inputs are trimmed; the status value is kept verbatim.
    pub fn to_state(&self) -> Result<FilterState, FormError> {
        self.validate()?;

        Ok(FilterState {
            search_text: self.search.trim().to_string(),
            selected_status: self.status.clone(),
            email_search: self.email.trim().to_string(),
            location_search: self.location.trim().to_string(),
            start_date: parse_optional_date("start_date", &self.start_date)?,
            end_date: parse_optional_date("end_date", &self.end_date)?,
        })
    }

    /// Current value of every filter parameter, keyed by parameter name.
    pub fn values(&self) -> BTreeMap<&'static str, String> {
        BTreeMap::from([
            ("search", self.search.clone()),
            ("email", self.email.clone()),
            ("status", self.status.clone()),
            ("location", self.location.clone()),
            ("start_date", self.start_date.clone()),
            ("end_date", self.end_date.clone()),
        ])
    }

    /// URL-encoded filter parameters without the page, for building links.
    pub fn query_string(&self) -> String {
        serde_html_form::to_string(self).unwrap_or_default()
    }
}
