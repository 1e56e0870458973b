use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

pub const STATUS_ACTIVE: &str = "Active";
pub const STATUS_INACTIVE: &str = "Inactive";

/// Serialized field names in column order. Used as the CSV header.
pub const DRIVER_FIELDS: [&str; 8] = [
    "id",
    "firstName",
    "lastName",
    "email",
    "phoneNumber",
    "status",
    "location",
    "startDate",
];

/// Human readable column labels matching [`DRIVER_FIELDS`].
pub const DRIVER_LABELS: [&str; 8] = [
    "ID",
    "First Name",
    "Last Name",
    "Email",
    "Phone Number",
    "Status",
    "Location",
    "Start Date",
];

/// Normalized driver record shown in the table.
///
/// Deserialization is lenient: missing strings become empty, `null` counts
/// as missing and other non-string values are kept in their JSON text form,
/// so malformed fixture rows still load.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct Driver {
    #[serde(default, deserialize_with = "lenient_string")]
    pub id: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub first_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub last_name: String,
    #[serde(default, deserialize_with = "lenient_string")]
    pub email: String,
    #[serde(
        default,
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub phone_number: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub status: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub location: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_optional_string",
        skip_serializing_if = "Option::is_none"
    )]
    pub start_date: Option<String>,
}

fn value_to_string(value: Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(text) => Some(text),
        other => Some(other.to_string()),
    }
}

fn lenient_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_optional_string<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(value_to_string(Value::deserialize(deserializer)?))
}

impl Driver {
    /// `"{first_name} {last_name}"`, the text matched by name search.
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Field values in [`DRIVER_FIELDS`] order, absent values as empty strings.
    pub fn values(&self) -> [&str; 8] {
        [
            self.id.as_str(),
            self.first_name.as_str(),
            self.last_name.as_str(),
            self.email.as_str(),
            self.phone_number.as_deref().unwrap_or_default(),
            self.status.as_deref().unwrap_or_default(),
            self.location.as_deref().unwrap_or_default(),
            self.start_date.as_deref().unwrap_or_default(),
        ]
    }
}
