use std::time::Duration;

use serde::Deserialize;

use crate::domain::driver::{Driver, STATUS_ACTIVE};
use crate::sources::{DriverSource, SourceResult};

/// Start date assigned to remote drivers; the API has no such field.
pub const DEFAULT_START_DATE: &str = "2023-01-01";

/// User object as returned by the placeholder API.
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamUser {
    pub id: i64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: String,
    pub phone: String,
    pub address: UpstreamAddress,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamAddress {
    pub city: String,
    pub zipcode: String,
}

impl From<UpstreamUser> for Driver {
    fn from(user: UpstreamUser) -> Self {
        let name = user.name.unwrap_or_default();
        let mut tokens = name.split_whitespace();
        let first_name = tokens.next().unwrap_or_default().to_string();
        let last_name = tokens.collect::<Vec<_>>().join(" ");

        let phone_number = user
            .phone
            .split_whitespace()
            .next()
            .unwrap_or_default()
            .to_string();

        let zip_prefix = user
            .address
            .zipcode
            .split('-')
            .next()
            .unwrap_or_default();

        Driver {
            id: user.id.to_string(),
            first_name,
            last_name,
            email: user.email,
            phone_number: Some(phone_number),
            status: Some(STATUS_ACTIVE.to_string()),
            location: Some(format!("{}, {}", user.address.city, zip_prefix)),
            start_date: Some(DEFAULT_START_DATE.to_string()),
        }
    }
}

/// Fetches `GET {base_url}/users` and maps every user to a [`Driver`].
#[derive(Debug, Clone)]
pub struct RemoteSource {
    client: reqwest::Client,
    base_url: String,
}

impl RemoteSource {
    pub fn new(base_url: &str, timeout: Duration) -> SourceResult<Self> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }
}

impl DriverSource for RemoteSource {
    async fn load(&self) -> SourceResult<Vec<Driver>> {
        let body = self
            .client
            .get(self.users_url())
            .send()
            .await?
            .error_for_status()?
            .bytes()
            .await?;

        let users: Vec<UpstreamUser> = serde_json::from_slice(&body)?;
        Ok(users.into_iter().map(Driver::from).collect())
    }
}
