//! Filter engine for the driver table.
//!
//! Filters are declared once in [`FILTER_DEFINITIONS`] (what the UI renders)
//! and evaluated through [`PREDICATES`], a registry of named predicates keyed
//! by the same filter ids. [`filter_drivers`] ANDs every active predicate and
//! keeps the input order.

use chrono::NaiveDate;
use serde::Serialize;

use crate::domain::driver::{Driver, STATUS_ACTIVE, STATUS_INACTIVE};
use crate::domain::types::{DateRange, SearchTerm, parse_date};

pub const NAME_SEARCH: &str = "nameSearch";
pub const EMAIL_SEARCH: &str = "emailSearch";
pub const STATUS: &str = "status";
pub const LOCATION_SEARCH: &str = "location";
pub const START_DATE_RANGE: &str = "startDateRange";

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum FilterKind {
    Text,
    Dropdown,
    DateRange,
}

#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct FilterOption {
    pub value: &'static str,
    pub label: &'static str,
}

/// Describes one control of the filter panel.
#[derive(Clone, Copy, Debug, Serialize, PartialEq, Eq)]
pub struct FilterDefinition {
    pub id: &'static str,
    pub label: &'static str,
    pub kind: FilterKind,
    /// Record field the filter applies to.
    pub key: &'static str,
    /// Query parameter(s) carrying the filter value.
    pub params: &'static [&'static str],
    pub placeholder: Option<&'static str>,
    pub options: &'static [FilterOption],
}

pub static FILTER_DEFINITIONS: &[FilterDefinition] = &[
    FilterDefinition {
        id: NAME_SEARCH,
        label: "Name Search",
        kind: FilterKind::Text,
        key: "name",
        params: &["search"],
        placeholder: Some("Search by first or last name..."),
        options: &[],
    },
    FilterDefinition {
        id: EMAIL_SEARCH,
        label: "Email",
        kind: FilterKind::Text,
        key: "email",
        params: &["email"],
        placeholder: Some("Search by email..."),
        options: &[],
    },
    FilterDefinition {
        id: STATUS,
        label: "Status",
        kind: FilterKind::Dropdown,
        key: "status",
        params: &["status"],
        placeholder: None,
        options: &[
            FilterOption {
                value: "",
                label: "All",
            },
            FilterOption {
                value: STATUS_ACTIVE,
                label: "Active",
            },
            FilterOption {
                value: STATUS_INACTIVE,
                label: "Inactive",
            },
        ],
    },
    FilterDefinition {
        id: LOCATION_SEARCH,
        label: "Location",
        kind: FilterKind::Text,
        key: "location",
        params: &["location"],
        placeholder: Some("Search by location..."),
        options: &[],
    },
    FilterDefinition {
        id: START_DATE_RANGE,
        label: "Start Date Range",
        kind: FilterKind::DateRange,
        key: "startDate",
        params: &["start_date", "end_date"],
        placeholder: None,
        options: &[],
    },
];

/// Currently selected filter criteria.
///
/// Empty strings and `None` mean "no constraint".
#[derive(Clone, Debug, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct FilterState {
    pub search_text: String,
    pub selected_status: String,
    pub email_search: String,
    pub location_search: String,
    pub start_date: Option<NaiveDate>,
    pub end_date: Option<NaiveDate>,
}

/// Value handed to a predicate.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FilterValue {
    Contains(SearchTerm),
    Exact(String),
    Within(DateRange),
}

/// A filter id paired with the value it is active with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ActiveFilter {
    pub id: &'static str,
    pub value: FilterValue,
}

impl FilterState {
    /// Returns the clauses that constrain the result, in registry order.
    ///
    /// The date clause is active only when both bounds are set.
    pub fn active_filters(&self) -> Vec<ActiveFilter> {
        let mut active = Vec::new();

        let mut push_search = |id: &'static str, text: &str| {
            if let Ok(term) = SearchTerm::new(text) {
                active.push(ActiveFilter {
                    id,
                    value: FilterValue::Contains(term),
                });
            }
        };
        push_search(NAME_SEARCH, &self.search_text);
        push_search(EMAIL_SEARCH, &self.email_search);
        push_search(LOCATION_SEARCH, &self.location_search);

        if !self.selected_status.is_empty() {
            active.push(ActiveFilter {
                id: STATUS,
                value: FilterValue::Exact(self.selected_status.clone()),
            });
        }

        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            active.push(ActiveFilter {
                id: START_DATE_RANGE,
                value: FilterValue::Within(DateRange::new(start, end)),
            });
        }

        active
    }

    pub fn is_empty(&self) -> bool {
        self.active_filters().is_empty()
    }
}

pub type Predicate = fn(&Driver, &FilterValue) -> bool;

pub struct NamedPredicate {
    pub id: &'static str,
    pub predicate: Predicate,
}

pub static PREDICATES: &[NamedPredicate] = &[
    NamedPredicate {
        id: NAME_SEARCH,
        predicate: matches_name,
    },
    NamedPredicate {
        id: EMAIL_SEARCH,
        predicate: matches_email,
    },
    NamedPredicate {
        id: STATUS,
        predicate: matches_status,
    },
    NamedPredicate {
        id: LOCATION_SEARCH,
        predicate: matches_location,
    },
    NamedPredicate {
        id: START_DATE_RANGE,
        predicate: matches_start_date,
    },
];

fn predicate_for(id: &str) -> Option<Predicate> {
    PREDICATES
        .iter()
        .find(|named| named.id == id)
        .map(|named| named.predicate)
}

fn matches_name(driver: &Driver, value: &FilterValue) -> bool {
    match value {
        FilterValue::Contains(term) => term.matches(&driver.full_name()),
        _ => false,
    }
}

fn matches_email(driver: &Driver, value: &FilterValue) -> bool {
    match value {
        FilterValue::Contains(term) => term.matches(&driver.email),
        _ => false,
    }
}

fn matches_location(driver: &Driver, value: &FilterValue) -> bool {
    match (value, driver.location.as_deref()) {
        (FilterValue::Contains(term), Some(location)) => term.matches(location),
        _ => false,
    }
}

fn matches_status(driver: &Driver, value: &FilterValue) -> bool {
    match value {
        FilterValue::Exact(status) => driver.status.as_deref() == Some(status.as_str()),
        _ => false,
    }
}

// Records without a parseable start date never satisfy an active range.
fn matches_start_date(driver: &Driver, value: &FilterValue) -> bool {
    let FilterValue::Within(range) = value else {
        return false;
    };
    driver
        .start_date
        .as_deref()
        .and_then(|raw| parse_date(raw).ok())
        .is_some_and(|date| range.contains(date))
}

/// Returns the drivers satisfying every active clause of `state`, in input order.
pub fn filter_drivers(records: &[Driver], state: &FilterState) -> Vec<Driver> {
    let active: Vec<(Predicate, FilterValue)> = state
        .active_filters()
        .into_iter()
        .filter_map(|filter| predicate_for(filter.id).map(|p| (p, filter.value)))
        .collect();

    if active.is_empty() {
        return records.to_vec();
    }

    records
        .iter()
        .filter(|driver| active.iter().all(|(predicate, value)| predicate(driver, value)))
        .cloned()
        .collect()
}
