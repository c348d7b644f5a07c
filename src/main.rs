mod commands;
mod logging;
mod render;
mod utils;

use anyhow::Result;
use clap::{Parser, Subcommand};
use sgpi_core::Resource;
use sgpi_core::search::Category;

#[derive(Parser)]
#[command(name = "sgpi")]
#[command(about = "Browse the SGPI events listing and member directory")]
struct Cli {
    /// Log sync and search activity to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Search the member directory
    Members {
        /// Name, member ID, qualification, address, email or phone
        #[arg(short, long)]
        search: Option<String>,

        /// Membership category (All, Life, Founder, "Ad Hoc", Associate)
        #[arg(short, long)]
        category: Option<Category>,

        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Open a shared directory link instead of the configured site
        #[arg(long, conflicts_with_all = ["search", "category"])]
        url: Option<String>,
    },
    /// List academic events
    Events {
        /// Title, date, location or description
        #[arg(short, long)]
        search: Option<String>,

        #[arg(short, long, default_value_t = 1)]
        page: usize,

        /// Open a shared events link instead of the configured site
        #[arg(long, conflicts_with = "search")]
        url: Option<String>,
    },
    /// Show the next upcoming event with a countdown
    NextEvent,
    /// Interactively search a listing
    Browse {
        /// "members" or "events"
        resource: Resource,

        #[arg(long)]
        url: Option<String>,
    },
    /// Show the effective configuration
    Config {
        /// Write a commented default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose)?;

    match cli.command {
        Commands::Members {
            search,
            category,
            page,
            url,
        } => {
            let ctx = commands::Context::load()?;
            let query = commands::list::Query {
                keyword: search,
                category,
                page,
            };
            commands::list::run(&ctx, Resource::Members, url.as_deref(), query).await
        }
        Commands::Events { search, page, url } => {
            let ctx = commands::Context::load()?;
            let query = commands::list::Query {
                keyword: search,
                category: None,
                page,
            };
            commands::list::run(&ctx, Resource::Events, url.as_deref(), query).await
        }
        Commands::NextEvent => {
            let ctx = commands::Context::load()?;
            commands::next_event::run(&ctx).await
        }
        Commands::Browse { resource, url } => {
            let ctx = commands::Context::load()?;
            commands::browse::run(&ctx, resource, url.as_deref()).await
        }
        Commands::Config { init } => commands::config::run(init),
    }
}
