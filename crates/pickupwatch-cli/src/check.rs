//! The manual refresh: fetch both configured locations in sequence, merge,
//! and render the table.
//!
//! A failed location fetch is logged and treated as an empty result rather
//! than propagated, so one bad location does not hide the other's rows.

use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::Table;
use pickupwatch_core::{merge_availability, AppConfig, AvailabilityRecord};
use pickupwatch_scraper::PickupClient;

pub(crate) async fn run_check(config: &AppConfig) -> anyhow::Result<()> {
    let records = fetch_merged(config).await?;

    if records.is_empty() {
        println!("No stores with pickup availability found.");
        return Ok(());
    }

    let table = availability_table(&records);
    println!("{table}");
    Ok(())
}

/// Fetches both locations (south first, then north) and merges the results.
///
/// The second fetch only starts after the first resolves; the merge runs once
/// both sequences are fully materialized.
pub(crate) async fn fetch_merged(config: &AppConfig) -> anyhow::Result<Vec<AvailabilityRecord>> {
    let client = PickupClient::new(config.request_timeout_secs, &config.user_agent)?;

    let south = fetch_location(&client, config, &config.location_south).await;
    let north = fetch_location(&client, config, &config.location_north).await;

    Ok(merge_availability(south, north))
}

async fn fetch_location(
    client: &PickupClient,
    config: &AppConfig,
    location: &str,
) -> Vec<AvailabilityRecord> {
    match client
        .fetch_availability(&config.pickup_base_url, &config.part_number, location)
        .await
    {
        Ok(records) => {
            tracing::info!(location, count = records.len(), "fetched pickup availability");
            records
        }
        Err(error) => {
            tracing::warn!(location, %error, "skipping location — pickup fetch failed");
            Vec::new()
        }
    }
}

fn availability_table(records: &[AvailabilityRecord]) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec!["Apple Store", "Stadt", "Verfügbarkeit"]);
    for record in records {
        table.add_row(vec![
            record.store_name.clone(),
            record.city.clone(),
            record.availability_label(),
        ]);
    }
    table
}
