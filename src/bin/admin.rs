//! CLI administration tool for link-shortener.
//!
//! Manages links and inspects the database without going through the HTTP API.
//! Link commands run through [`LinkService`], so the same validation and alias
//! rules apply as over HTTP.
//!
//! # Usage
//!
//! ```bash
//! # List the first 20 links
//! cargo run --bin admin -- links list --limit 20
//!
//! # Show a link by id or alias
//! cargo run --bin admin -- links show docs
//!
//! # Create a link
//! cargo run --bin admin -- links create docs https://example.com/docs
//!
//! # Delete a link
//! cargo run --bin admin -- links delete 42
//!
//! # View statistics
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `BASE_URL` (optional): prefix for displayed short URLs

use link_shortener::application::services::LinkService;
use link_shortener::domain::entities::Link;
use link_shortener::domain::pagination::PageWindow;
use link_shortener::infrastructure::persistence::PgLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing link-shortener.
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
    /// Manage links
    Links {
        #[command(subcommand)]
        action: LinkAction,
    },

    /// Show statistics
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Link management subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// List links in id order
    List {
        /// Number of links to skip
        #[arg(short, long, default_value_t = 0)]
        offset: i64,

        /// Maximum number of links to show (all when omitted)
        #[arg(short, long)]
        limit: Option<i64>,
    },

    /// Show a single link
    Show {
        /// Link id or alias
        id_or_name: String,
    },

    /// Create a link
    Create {
        /// Alias for the link
        short_name: String,

        /// Redirect target
        url: String,
    },

    /// Delete a link
    Delete {
        /// Link id
        id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
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

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;
    let base_url =
        std::env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:8000".to_string());

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    let service = LinkService::new(
        Arc::new(PgLinkRepository::new(Arc::new(pool.clone()))),
        base_url,
    );

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &service).await?,
        Commands::Stats => handle_stats(&service).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &LinkService) -> Result<()> {
    match action {
        LinkAction::List { offset, limit } => list_links(service, offset, limit).await,
        LinkAction::Show { id_or_name } => show_link(service, &id_or_name).await,
        LinkAction::Create { short_name, url } => create_link(service, short_name, url).await,
        LinkAction::Delete { id, yes } => delete_link(service, id, yes).await,
    }
}

/// Lists links as a table.
///
/// # Output Format
///
/// ```text
/// 🔗 Links (links 0-1/2)
///
///   ID   Alias                Created            Target
///   ──────────────────────────────────────────────────────────────
///   1    docs                 2025-06-01 10:30   https://example.com/docs
///   2    blog                 2025-06-02 14:20   https://example.com/blog
/// ```
async fn list_links(service: &LinkService, offset: i64, limit: Option<i64>) -> Result<()> {
    let window = PageWindow {
        offset: offset.max(0),
        limit: limit.filter(|l| *l > 0),
    };

    let page = service
        .list_links(window)
        .await
        .context("Failed to list links")?;

    println!(
        "{} {}",
        "🔗 Links".bright_blue().bold(),
        format!("({})", page.range).bright_black()
    );
    println!();

    if page.links.is_empty() {
        println!("{}", "  No links found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<20} {:<18} {}",
        "ID".bright_white().bold(),
        "Alias".bright_white().bold(),
        "Created".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &page.links {
        println!(
            "  {:<4} {:<20} {:<18} {}",
            link.id.to_string().bright_black(),
            link.short_name.cyan(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    Ok(())
}

/// Shows one link, looked up by id when the argument is numeric, otherwise by alias.
async fn show_link(service: &LinkService, id_or_name: &str) -> Result<()> {
    let link = match id_or_name.parse::<i64>() {
        Ok(id) => service.get_link(id).await,
        Err(_) => service.resolve(id_or_name).await,
    }?;

    print_link(service, &link);
    Ok(())
}

async fn create_link(service: &LinkService, short_name: String, url: String) -> Result<()> {
    let link = service
        .create_link(url, short_name)
        .await
        .context("Failed to create link")?;

    println!("{}", "✅ Link created".green().bold());
    print_link(service, &link);
    Ok(())
}

/// Deletes a link after confirmation (default: No).
async fn delete_link(service: &LinkService, id: i64, skip_confirm: bool) -> Result<()> {
    let link = service.get_link(id).await?;

    print_link(service, &link);

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this link? This cannot be undone")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    service
        .delete_link(id)
        .await
        .context("Failed to delete link")?;

    println!("{}", "✅ Link deleted".green().bold());
    Ok(())
}

fn print_link(service: &LinkService, link: &Link) {
    println!();
    println!("  ID:        {}", link.id.to_string().bright_black());
    println!("  Alias:     {}", link.short_name.cyan());
    println!("  Target:    {}", link.original_url);
    println!(
        "  Short URL: {}",
        service.short_url(&link.short_name).bright_yellow()
    );
    println!(
        "  Created:   {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
}

/// Displays the total number of stored links.
async fn handle_stats(service: &LinkService) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count = service
        .count_links()
        .await
        .context("Failed to count links")?;

    println!(
        "  Links: {}",
        links_count.to_string().bright_green().bold()
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
