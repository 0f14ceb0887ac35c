//! Share-status composition: runs a fresh check and prints the message for
//! one store. Posting it anywhere is left to the user's clipboard.

use pickupwatch_core::{share_message, AppConfig};

pub(crate) async fn run_share(config: &AppConfig, store: &str) -> anyhow::Result<()> {
    let records = crate::check::fetch_merged(config).await?;

    let record = records
        .iter()
        .find(|r| r.store_name == store)
        .ok_or_else(|| {
            anyhow::anyhow!("store '{store}' not found in the current availability results")
        })?;

    println!("{}", share_message(record, &config.product_label));
    Ok(())
}
