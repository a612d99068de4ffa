mod check;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "stockcheck-cli")]
#[command(about = "Retail store availability checker")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Check store availability for catalog products or raw SKUs.
    Check {
        /// Zip code to search around.
        #[arg(long)]
        zip: String,
        /// Catalog label to check (repeatable).
        #[arg(long = "product")]
        products: Vec<String>,
        /// Raw SKU to check (repeatable).
        #[arg(long = "sku")]
        skus: Vec<String>,
        /// Check every product in the catalog.
        #[arg(long)]
        all: bool,
        /// Emit results as JSON instead of a text summary.
        #[arg(long)]
        json: bool,
    },
    /// List the configured product catalog.
    Products,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();
    let config = stockcheck_core::load_app_config()?;

    match cli.command {
        Commands::Check {
            zip,
            products,
            skus,
            all,
            json,
        } => {
            check::run_check(
                &config,
                &check::CheckArgs {
                    zip,
                    products,
                    skus,
                    all,
                    json,
                },
            )
            .await
        }
        Commands::Products => {
            let catalog = stockcheck_core::load_products(&config.products_path)?;
            for product in &catalog.products {
                println!("{}\t{}", product.label, product.sku);
            }
            Ok(())
        }
    }
}
