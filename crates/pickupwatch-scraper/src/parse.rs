//! JSON extraction for pickup-message responses.
//!
//! The endpoint nests per-store availability under `body.stores[]`, with the
//! pickup quote for a part under `partsAvailability.<part>.pickupSearchQuote`.
//! Stores missing any required field are dropped here, so downstream consumers
//! only ever see well-formed records.

use chrono::{Datelike, NaiveDate};
use pickupwatch_core::AvailabilityRecord;
use serde_json::Value;

/// Prefix the endpoint prepends to the quote when the part is orderable.
const QUOTE_AVAILABLE_PREFIX: &str = "Verfügbar<br/>";

/// Extract availability records from a pickup-message response body,
/// preserving the endpoint's store order.
pub(crate) fn extract_store_records(
    data: &Value,
    part_number: &str,
    today: NaiveDate,
) -> Vec<AvailabilityRecord> {
    let Some(stores) = data
        .get("body")
        .and_then(|body| body.get("stores"))
        .and_then(Value::as_array)
    else {
        tracing::debug!("pickup response has no body.stores array");
        return Vec::new();
    };

    stores
        .iter()
        .filter_map(|store| {
            let name = store.get("storeName")?.as_str()?;
            let city = store.get("city")?.as_str()?;
            let quote = store
                .get("partsAvailability")?
                .get(part_number)?
                .get("pickupSearchQuote")?
                .as_str()?;

            let Some(available_date) = parse_quote_date(quote, today) else {
                tracing::debug!(store = name, quote, "skipping store with unparseable quote");
                return None;
            };

            Some(AvailabilityRecord::with_reference_date(
                name.to_string(),
                city.to_string(),
                available_date,
                today,
            ))
        })
        .collect()
}

/// Parses the date out of a pickup quote such as `"Verfügbar<br/>23 May"`.
///
/// The quote fragment carries a day and an English month abbreviation but no
/// year; the reference day's year is appended before parsing.
///
/// TODO: a December fetch that sees a January quote parses it into the
/// current year, i.e. ~11 months in the past, instead of rolling forward.
pub(crate) fn parse_quote_date(quote: &str, today: NaiveDate) -> Option<NaiveDate> {
    let fragment = quote
        .strip_prefix(QUOTE_AVAILABLE_PREFIX)
        .unwrap_or(quote)
        .trim();

    NaiveDate::parse_from_str(&format!("{fragment} {}", today.year()), "%d %b %Y").ok()
}

#[cfg(test)]
#[path = "parse_test.rs"]
mod tests;
