//! CLI administration tool for affiliate-links.
//!
//! Creates and inspects links directly against the database, without going
//! through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Create a link (prompts for the URL if omitted)
//! cargo run --bin admin -- links create https://example.com/product/123
//!
//! # List all links
//! cargo run --bin admin -- links list
//!
//! # Show one link
//! cargo run --bin admin -- links show Ab3dE9
//!
//! # View totals
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (default: `sqlite://affiliate.db`)

use affiliate_links::application::services::LinkService;
use affiliate_links::config::Config;
use affiliate_links::domain::entities::Link;
use affiliate_links::infrastructure::database;
use affiliate_links::infrastructure::persistence::SqliteLinkRepository;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::SqlitePool;
use std::sync::Arc;
use std::time::Duration;

/// CLI tool for managing affiliate-links.
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

    /// Show totals
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
    /// Create a new short link
    Create {
        /// Original URL (prompted for if omitted)
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all links, newest first
    List,

    /// Show a single link
    Show {
        /// Short code
        code: String,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,
}

type Service = LinkService<SqliteLinkRepository>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = Config::from_env();

    let pool = database::connect(
        &config.database_url,
        config.db_max_connections,
        Duration::from_secs(config.db_connect_timeout),
    )
    .await?;
    database::migrate(&pool).await?;

    let service = LinkService::new(Arc::new(SqliteLinkRepository::new(Arc::new(
        pool.clone(),
    ))));

    match cli.command {
        Commands::Links { action } => handle_link_action(action, &service).await?,
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches link management commands.
async fn handle_link_action(action: LinkAction, service: &Service) -> Result<()> {
    match action {
        LinkAction::Create { url, yes } => create_link(service, url, yes).await,
        LinkAction::List => list_links(service).await,
        LinkAction::Show { code } => show_link(service, &code).await,
    }
}

/// Creates a new link with interactive prompts.
async fn create_link(service: &Service, url: Option<String>, skip_confirm: bool) -> Result<()> {
    println!("{}", "🔗 Create Link".bright_blue().bold());
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("Original URL").interact_text()?,
    };

    println!("  URL: {}", url.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this link?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let link = service
        .create_link(&url)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create link: {}", e))?;

    println!();
    println!("{}", "✅ Link created successfully!".green().bold());
    println!("  ID:    {}", link.id.to_string().bright_black());
    println!("  Code:  {}", link.short_code.bright_yellow().bold());
    println!("  Path:  {}", service.short_path(&link).bright_cyan());
    println!();

    Ok(())
}

/// Lists all links.
///
/// # Output Format
///
/// ```text
/// 📋 Links
///
///   ID    Code    Clicks   Created            URL
///   ──────────────────────────────────────────────────────────────
///   2     Ab3dE9  14       2025-01-15 10:30   https://example.com/product/123
/// ```
async fn list_links(service: &Service) -> Result<()> {
    println!("{}", "📋 Links".bright_blue().bold());
    println!();

    let links = service
        .get_all_links()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list links: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No links found".yellow());
        println!();
        println!(
            "  Create one with: {} admin links create <URL>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<5} {:<7} {:<8} {:<18} {}",
        "ID".bright_white().bold(),
        "Code".bright_white().bold(),
        "Clicks".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<5} {:<7} {:<8} {:<18} {}",
            link.id.to_string().bright_black(),
            link.short_code.cyan(),
            link.click_count.to_string().green(),
            link.created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.original_url
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Shows a single link by short code.
async fn show_link(service: &Service, code: &str) -> Result<()> {
    let link: Link = service
        .get_link_by_code(code)
        .await
        .with_context(|| format!("Link '{code}' not found"))?;

    println!("{}", "🔎 Link".bright_blue().bold());
    println!();
    println!("  ID:       {}", link.id.to_string().bright_black());
    println!("  Code:     {}", link.short_code.bright_yellow().bold());
    println!("  Path:     {}", service.short_path(&link).bright_cyan());
    println!("  URL:      {}", link.original_url);
    println!("  Clicks:   {}", link.click_count.to_string().green().bold());
    println!(
        "  Created:  {}",
        link.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();

    Ok(())
}

/// Displays link and click totals.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let links_count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM links")
        .fetch_one(pool)
        .await?;

    let clicks_count: i64 = sqlx::query_scalar("SELECT COALESCE(SUM(click_count), 0) FROM links")
        .fetch_one(pool)
        .await?;

    println!(
        "  Links:   {}",
        links_count.to_string().bright_green().bold()
    );
    println!(
        "  Clicks:  {}",
        clicks_count.to_string().bright_green().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  SQLite: {}", version.bright_white());
        }
    }

    Ok(())
}
