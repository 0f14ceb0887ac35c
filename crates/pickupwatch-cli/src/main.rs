use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod check;
mod share;

#[derive(Debug, Parser)]
#[command(name = "pickupwatch")]
#[command(about = "Checks in-store pickup availability for a watched product")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Fetch both locations, merge the results, and print the availability table
    Check,
    /// Compose the share-status message for one store from a fresh check
    Share {
        /// Store name, matched exactly
        #[arg(long)]
        store: String,
    },
    /// Print the storefront page URL of the watched product
    StoreUrl,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = pickupwatch_core::load_app_config_from_env()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let cli = Cli::parse();
    match cli.command {
        Some(Commands::Check) | None => check::run_check(&config).await,
        Some(Commands::Share { store }) => share::run_share(&config, &store).await,
        Some(Commands::StoreUrl) => {
            println!("{}", config.product_page_url);
            Ok(())
        }
    }
}
