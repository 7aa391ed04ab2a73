mod render;

use aether_client::CatalogClient;
use aether_core::{AppConfig, Category, CategorySelection, ConfigError, ProductGenerator};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "aether-cli")]
#[command(about = "Aether Deals catalog command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Generate products locally and print them as JSON
    Generate {
        #[arg(long, default_value_t = 20)]
        count: usize,
        /// footwear, eyewear or all
        #[arg(long, default_value = "footwear", value_parser = parse_selection)]
        category: CategorySelection,
        /// Seed for reproducible output
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Fetch a category listing from the catalog endpoint
    List {
        #[arg(value_parser = parse_category)]
        category: Category,
    },
    /// Look a product up by slug through the catalog endpoint
    Show { slug: String },
}

fn parse_category(raw: &str) -> Result<Category, String> {
    Category::parse(raw)
        .ok_or_else(|| format!("unknown category '{raw}' (expected footwear or eyewear)"))
}

fn parse_selection(raw: &str) -> Result<CategorySelection, String> {
    if raw == "all" {
        return Ok(CategorySelection::Mixed);
    }
    parse_category(raw)
        .map(CategorySelection::Only)
        .map_err(|_| format!("unknown category '{raw}' (expected footwear, eyewear or all)"))
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let output = run(cli.command, aether_core::load_app_config_from_env).await?;
    print!("{output}");
    Ok(())
}

/// Execute one command and return the text to print.
///
/// Configuration is only loaded for commands that talk to the catalog
/// endpoint, so `generate` works offline whatever the environment holds.
async fn run<F>(command: Commands, load_config: F) -> anyhow::Result<String>
where
    F: FnOnce() -> Result<AppConfig, ConfigError>,
{
    match command {
        Commands::Generate {
            count,
            category,
            seed,
        } => {
            let mut generator = match seed {
                Some(seed) => ProductGenerator::from_seed(seed),
                None => ProductGenerator::from_entropy(),
            };
            let products = generator.generate_batch(count, category);
            Ok(format!("{}\n", serde_json::to_string_pretty(&products)?))
        }
        Commands::List { category } => {
            let client = CatalogClient::from_config(&load_config()?)?;
            tracing::info!(base_url = client.base_url(), %category, "fetching listing");
            let products = client.listing(category).await?;
            Ok(render::listing(category, &products))
        }
        Commands::Show { slug } => {
            let client = CatalogClient::from_config(&load_config()?)?;
            tracing::info!(base_url = client.base_url(), %slug, "looking up product");
            let product = client.product_by_slug(&slug).await?;
            Ok(render::detail(&product))
        }
    }
}
