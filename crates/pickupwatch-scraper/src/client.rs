//! HTTP client for the vendor's pickup-availability endpoint.

use std::time::Duration;

use chrono::{Local, NaiveDate};
use pickupwatch_core::AvailabilityRecord;
use reqwest::Client;

use crate::error::PickupError;
use crate::parse::extract_store_records;

/// HTTP client for the `pickup-message` JSON endpoint.
///
/// One GET per queried location; non-2xx responses and unparseable bodies are
/// surfaced as typed errors. There is no retry policy — a failed fetch is the
/// caller's to log or propagate.
pub struct PickupClient {
    client: Client,
}

impl PickupClient {
    /// Creates a `PickupClient` with configured timeout and `User-Agent`.
    ///
    /// # Errors
    ///
    /// Returns [`PickupError::Http`] if the underlying `reqwest::Client`
    /// cannot be constructed (e.g., invalid TLS config).
    pub fn new(timeout_secs: u64, user_agent: &str) -> Result<Self, PickupError> {
        let client = Client::builder()
            .timeout(Duration::from_secs(timeout_secs))
            .connect_timeout(Duration::from_secs(10))
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client })
    }

    /// Fetches pickup availability for one location, with day offsets relative
    /// to the local calendar's current day.
    ///
    /// # Errors
    ///
    /// - [`PickupError::UnexpectedStatus`] — any non-2xx status.
    /// - [`PickupError::Http`] — network or TLS failure.
    /// - [`PickupError::Deserialize`] — response body is not valid JSON.
    /// - [`PickupError::InvalidBaseUrl`] — `base_url` cannot be parsed.
    pub async fn fetch_availability(
        &self,
        base_url: &str,
        part_number: &str,
        location: &str,
    ) -> Result<Vec<AvailabilityRecord>, PickupError> {
        self.fetch_availability_as_of(base_url, part_number, location, Local::now().date_naive())
            .await
    }

    /// Like [`Self::fetch_availability`], but with an explicit reference day
    /// for the day-offset computation and the quote's missing year.
    ///
    /// # Errors
    ///
    /// Same as [`Self::fetch_availability`].
    pub async fn fetch_availability_as_of(
        &self,
        base_url: &str,
        part_number: &str,
        location: &str,
        today: NaiveDate,
    ) -> Result<Vec<AvailabilityRecord>, PickupError> {
        let url = Self::pickup_url(base_url, part_number, location)?;

        let response = self
            .client
            .get(&url)
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await?;
        let status = response.status();

        if !status.is_success() {
            return Err(PickupError::UnexpectedStatus {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.text().await?;
        let data: serde_json::Value =
            serde_json::from_str(&body).map_err(|e| PickupError::Deserialize {
                context: format!("pickup availability for location {location}"),
                source: e,
            })?;

        Ok(extract_store_records(&data, part_number, today))
    }

    /// Builds the pickup-message URL for the given part number and location.
    ///
    /// Query pairs are form-urlencoded, so a part number like `MMEF2ZM/A`
    /// ends up as `parts.0=MMEF2ZM%2FA`.
    ///
    /// # Errors
    ///
    /// Returns [`PickupError::InvalidBaseUrl`] if `base_url` is not a valid
    /// URL base.
    fn pickup_url(
        base_url: &str,
        part_number: &str,
        location: &str,
    ) -> Result<String, PickupError> {
        let mut url =
            reqwest::Url::parse(base_url).map_err(|e| PickupError::InvalidBaseUrl {
                base_url: base_url.to_owned(),
                reason: e.to_string(),
            })?;

        url.query_pairs_mut()
            .append_pair("parts.0", part_number)
            .append_pair("location", location);

        Ok(url.to_string())
    }
}

#[cfg(test)]
#[path = "client_test.rs"]
mod tests;
