pub mod commands;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(
    name = "storefront",
    about = "Storefront search and pricing CLI",
    long_about = "Run free-text catalog searches and dynamic pricing evaluations against \
                  a catalog JSON file or the bundled demo catalog.",
    after_help = "Examples:\n  storefront search \"headphones under \\$100\"\n  storefront search --relaxed \"dres\"\n  storefront price 7 --at 2026-08-05T15:00:00Z\n  storefront categories"
)]
pub struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    #[command(about = "Interpret a free-text query and rank the catalog")]
    Search {
        #[arg(required = true, help = "Free-text query, e.g. \"headphones under $100\"")]
        query: Vec<String>,
        #[arg(long, help = "Relaxed keyword gating (live-suggestion mode, no fallback pass)")]
        relaxed: bool,
        #[arg(long, value_name = "PATH", help = "Catalog JSON file (defaults to the demo catalog)")]
        catalog: Option<PathBuf>,
    },
    #[command(about = "Compute the dynamic price adjustment for one product")]
    Price {
        #[arg(help = "Product id to price")]
        product_id: String,
        #[arg(long, value_name = "RFC3339", help = "Pin the pricing clock to this instant")]
        at: Option<String>,
        #[arg(long, value_name = "PATH", help = "Catalog JSON file (defaults to the demo catalog)")]
        catalog: Option<PathBuf>,
    },
    #[command(about = "List the catalog's distinct categories")]
    Categories {
        #[arg(long, value_name = "PATH", help = "Catalog JSON file (defaults to the demo catalog)")]
        catalog: Option<PathBuf>,
    },
}

pub fn run() -> ExitCode {
    init_logging();

    let cli = Cli::parse();
    let result = match cli.command {
        Command::Search { query, relaxed, catalog } => {
            commands::search::run(&query.join(" "), relaxed, catalog.as_deref())
        }
        Command::Price { product_id, at, catalog } => {
            commands::price::run(&product_id, at.as_deref(), catalog.as_deref())
        }
        Command::Categories { catalog } => commands::categories::run(catalog.as_deref()),
    };

    println!("{}", result.output);
    ExitCode::from(result.exit_code)
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .compact()
        .init();
}
