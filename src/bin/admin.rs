//! CLI administration tool for keylink.
//!
//! Reads and writes the same database as the server, without going through
//! HTTP.
//!
//! # Usage
//!
//! ```bash
//! # Shorten a URL
//! cargo run --bin admin -- link create https://example.com/a/very/long/path
//!
//! # Show a link
//! cargo run --bin admin -- link show AbCdE
//!
//! # List recent visits of a link
//! cargo run --bin admin -- link visits AbCdE --limit 20
//!
//! # Totals
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! The same as the server, see [`keylink::config`].

use keylink::AppState;
use keylink::application::services::stats_service::DEFAULT_VISIT_LIMIT;
use keylink::config;
use keylink::server::{build_state, connect_pool};

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use tracing_subscriber::EnvFilter;

/// CLI tool for managing keylink.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Inspect and create links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show totals
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Shorten a URL (reuses the existing key when deduplication is on)
    Create {
        /// URL to shorten
        url: String,
    },

    /// Show a link by key
    Show {
        /// Short key
        key: String,
    },

    /// List the most recent visits of a link
    Visits {
        /// Short key
        key: String,

        /// Maximum number of visits to show
        #[arg(short, long, default_value_t = DEFAULT_VISIT_LIMIT)]
        limit: i64,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new("warn"))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let pool = connect_pool(&config).await?;

    match cli.command {
        Commands::Link { action } => {
            let state = build_state(pool, &config)?;
            handle_link_action(action, &state).await?
        }
        Commands::Stats => {
            let state = build_state(pool, &config)?;
            handle_stats(&state).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link commands.
async fn handle_link_action(action: LinkAction, state: &AppState) -> Result<()> {
    match action {
        LinkAction::Create { url } => {
            let link = state.link_service.create_or_get(url).await?;

            println!("{}", "✅ Link ready".green().bold());
            println!();
            print_link(state, &link);
        }
        LinkAction::Show { key } => {
            let link = state.link_service.find_by_key(&key).await?;
            print_link(state, &link);
        }
        LinkAction::Visits { key, limit } => {
            list_visits(state, &key, limit).await?;
        }
    }

    Ok(())
}

fn print_link(state: &AppState, link: &keylink::prelude::Link) {
    println!("  Key:     {}", link.key.cyan().bold());
    println!("  URL:     {}", link.url.bright_white());
    println!(
        "  Link:    {}",
        state.link_service.short_url(&link.key).bright_yellow()
    );
    println!("  Created: {}", link.created_display().bright_black());
    println!(
        "  Visits:  {}",
        link.visits().to_string().bright_green().bold()
    );
    println!();
}

/// Lists visits of a link, newest first.
///
/// # Output Format
///
/// ```text
/// 👣 Visits of AbCdE
///
///   ID     Time                 User agent
///   ──────────────────────────────────────────────────────
///   42     2024-06-01 13:45:07  Mozilla/5.0 (X11; Linux x86_64)
/// ```
async fn list_visits(state: &AppState, key: &str, limit: i64) -> Result<()> {
    let link = state.link_service.find_by_key(key).await?;

    println!("{} {}", "👣 Visits of".bright_blue().bold(), link.key.cyan());
    println!();

    let visits = state.stats_service.recent_visits(&link.key, limit).await?;

    if visits.is_empty() {
        println!("{}", "  No visits recorded".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<6} {:<20} {}",
        "ID".bright_white().bold(),
        "Time".bright_white().bold(),
        "User agent".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for visit in &visits {
        let user_agent = if visit.user_agent.is_empty() {
            "-"
        } else {
            visit.user_agent.as_str()
        };

        println!(
            "  {:<6} {:<20} {}",
            visit.id.to_string().bright_black(),
            visit
                .created
                .format("%Y-%m-%d %H:%M:%S")
                .to_string()
                .bright_black(),
            user_agent
        );
    }

    println!();
    println!(
        "  Shown: {} of {}",
        visits.len().to_string().bright_white().bold(),
        link.visits().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Displays totals of links and visits.
async fn handle_stats(state: &AppState) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count = state.link_service.count_links().await?;
    let visits_count = state.stats_service.count_visits().await?;

    println!(
        "  Links:  {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Visits: {}",
        visits_count.to_string().bright_green().bold()
    );
    println!(
        "  Policy: {}",
        format!("{:?}", state.link_service.policy()).bright_white()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
