mod commands;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "storeforge-cli")]
#[command(about = "Storeforge supplier catalog command line interface")]
struct Cli {
    /// Supplier to talk to (`cj` or `eprolo`); defaults to the configured
    /// default supplier.
    #[arg(long, global = true)]
    supplier: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search the supplier catalog.
    Search {
        keyword: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        page: Option<u32>,
        #[arg(long)]
        page_size: Option<u32>,
    },
    /// Show full detail for one product.
    Show { product_id: String },
    /// List the supplier's catalog categories.
    Categories,
    /// Submit an order from a JSON payload file.
    Order { payload: std::path::PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let config = storeforge_core::load_app_config()?;
    let registry = storeforge_suppliers::SupplierRegistry::from_config(&config)?;
    let client = registry.resolve(cli.supplier.as_deref())?;

    match cli.command {
        Commands::Search {
            keyword,
            category,
            page,
            page_size,
        } => commands::run_search(client, &keyword, category.as_deref(), page, page_size).await,
        Commands::Show { product_id } => commands::run_show(client, &product_id).await,
        Commands::Categories => commands::run_categories(client).await,
        Commands::Order { payload } => commands::run_order(client, &payload).await,
    }
}
