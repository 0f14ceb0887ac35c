//! Pickup availability domain model: per-store records, the cross-location
//! merge, and the row labels consumed by the table renderer.

use chrono::{DateTime, Local, NaiveDate};
use serde::{Deserialize, Serialize};

/// One store's pickup availability for the watched product.
///
/// Records are immutable after construction; a refresh replaces the whole
/// merged collection rather than mutating records in place.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityRecord {
    /// Store display name, e.g. `"Rosenstraße"`. Dedup key within a merged
    /// collection: compared exactly, case-sensitive, no normalization.
    pub store_name: String,
    /// City the store is in. Sort key for the merged collection.
    pub city: String,
    /// First day the product can be picked up, day precision.
    pub available_date: NaiveDate,
    /// Whole-day offset from the day the record was constructed to
    /// `available_date`, signed (a date already passed is negative).
    ///
    /// Computed once at construction and never recomputed, so it reflects the
    /// fetch moment, not render time. `None` means the offset could not be
    /// evaluated; renderers show it as an empty cell, never as "today".
    pub days_until_available: Option<i64>,
}

impl AvailabilityRecord {
    /// Builds a record relative to the local calendar's current day.
    #[must_use]
    pub fn new(store_name: String, city: String, available_date: NaiveDate) -> Self {
        Self::with_reference_date(store_name, city, available_date, Local::now().date_naive())
    }

    /// Builds a record with an explicit reference day.
    ///
    /// The scraper captures one reference day per fetch cycle and passes it
    /// here so all records of a refresh share the same "today".
    #[must_use]
    pub fn with_reference_date(
        store_name: String,
        city: String,
        available_date: NaiveDate,
        today: NaiveDate,
    ) -> Self {
        let days_until_available = Some(available_date.signed_duration_since(today).num_days());
        Self {
            store_name,
            city,
            available_date,
            days_until_available,
        }
    }

    /// Builds a record from a full timestamp, truncating it to its calendar
    /// day before the day-offset computation.
    #[must_use]
    pub fn from_datetime(
        store_name: String,
        city: String,
        available_at: DateTime<Local>,
        today: NaiveDate,
    ) -> Self {
        Self::with_reference_date(store_name, city, available_at.date_naive(), today)
    }

    /// Human-readable availability label for this record's day offset.
    #[must_use]
    pub fn availability_label(&self) -> String {
        days_until_label(self.days_until_available)
    }
}

/// Merges the two per-location result sequences into one collection sorted by
/// city.
///
/// `secondary` records are appended in order, skipping any whose `store_name`
/// already appears (stores near both queried locations show up in both
/// responses; `primary`'s copy wins). The sort is stable, so records with the
/// same city keep their pre-sort relative order.
///
/// Both inputs must be fully materialized; there is no streaming merge.
#[must_use]
pub fn merge_availability(
    primary: Vec<AvailabilityRecord>,
    secondary: Vec<AvailabilityRecord>,
) -> Vec<AvailabilityRecord> {
    let mut merged = primary;
    for record in secondary {
        if merged.iter().any(|seen| seen.store_name == record.store_name) {
            continue;
        }
        merged.push(record);
    }
    merged.sort_by(|a, b| a.city.cmp(&b.city));
    merged
}

/// Formats a day offset for display.
///
/// `0` and `1` get the spoken forms; every other offset, including negative
/// ones, is rendered with the literal number. An unknown offset renders as an
/// empty string.
#[must_use]
pub fn days_until_label(days: Option<i64>) -> String {
    match days {
        Some(0) => "heute".to_string(),
        Some(1) => "morgen".to_string(),
        Some(n) => format!("in {n} Tagen"),
        None => String::new(),
    }
}

/// Composes the share-status message for one store.
#[must_use]
pub fn share_message(record: &AvailabilityRecord, product_label: &str) -> String {
    format!(
        "Der Apple Store {} hat {} {} vorrätig.",
        record.store_name,
        record.availability_label(),
        product_label
    )
}
