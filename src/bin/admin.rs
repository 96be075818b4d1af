//! CLI administration tool for linkdrop.
//!
//! Inspects stored records and performs maintenance without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Record counts
//! cargo run --bin admin -- stats
//!
//! # Inspect a record by code
//! cargo run --bin admin -- url show Ab3dE9
//! cargo run --bin admin -- clipboard show Xy7Pq2
//! cargo run --bin admin -- linklist show reading
//!
//! # Delete a link list with its entries
//! cargo run --bin admin -- linklist delete reading
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL`, or `DB_HOST`/`DB_PORT`/`DB_USER`/`DB_PASSWORD`/`DB_NAME`

use linkdrop::AppError;
use linkdrop::application::services::LinkListService;
use linkdrop::config::Config;
use linkdrop::domain::repositories::{ClipboardRepository, LinkListRepository, UrlRepository};
use linkdrop::infrastructure::persistence::{
    PgClipboardRepository, PgLinkListRepository, PgUrlRepository,
};
use linkdrop::utils::code_generator::CodeGenerator;
use linkdrop::utils::unique_code::DEFAULT_MAX_ATTEMPTS;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing linkdrop.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show record counts
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Short URL operations
    Url {
        #[command(subcommand)]
        action: UrlAction,
    },

    /// Clipboard operations
    Clipboard {
        #[command(subcommand)]
        action: ClipboardAction,
    },

    /// Link list operations
    Linklist {
        #[command(subcommand)]
        action: LinkListAction,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[derive(Subcommand)]
enum UrlAction {
    /// Show a short URL by its generated or custom code
    Show { code: String },
}

#[derive(Subcommand)]
enum ClipboardAction {
    /// Show a clipboard entry
    Show { code: String },
}

#[derive(Subcommand)]
enum LinkListAction {
    /// Show a link list with its entries
    Show { code: String },

    /// Delete a link list and all of its entries
    Delete {
        code: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = Config::load_database_url()?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::Url { action } => handle_url_action(action, &pool).await?,
        Commands::Clipboard { action } => handle_clipboard_action(action, &pool).await?,
        Commands::Linklist { action } => handle_link_list_action(action, &pool).await?,
    }

    Ok(())
}

/// Displays record counts per entity type.
async fn handle_stats(pool: &PgPool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let shared = Arc::new(pool.clone());
    let urls = PgUrlRepository::new(shared.clone()).count().await?;
    let lists = PgLinkListRepository::new(shared.clone()).count().await?;
    let clipboards = PgClipboardRepository::new(shared).count().await?;

    let expired: i64 = sqlx::query_scalar(
        "SELECT COUNT(*) FROM urls WHERE expiration_date IS NOT NULL AND expiration_date < NOW()",
    )
    .fetch_one(pool)
    .await?;

    let entries: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM link_entries")
        .fetch_one(pool)
        .await?;

    println!(
        "  Short URLs:   {} ({} expired)",
        urls.to_string().bright_green().bold(),
        expired.to_string().yellow()
    );
    println!(
        "  Link lists:   {} ({} entries)",
        lists.to_string().bright_green().bold(),
        entries.to_string().bright_black()
    );
    println!(
        "  Clipboards:   {}",
        clipboards.to_string().bright_green().bold()
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

            let migrations: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM _sqlx_migrations")
                .fetch_one(pool)
                .await
                .unwrap_or(0);

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Migrations: {}", migrations.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}

async fn handle_url_action(action: UrlAction, pool: &PgPool) -> Result<()> {
    let repo = PgUrlRepository::new(Arc::new(pool.clone()));

    match action {
        UrlAction::Show { code } => {
            let url = repo
                .find_by_code(&code)
                .await?
                .with_context(|| format!("No short URL with code '{code}'"))?;

            println!("{}", "🔗 Short URL".bright_blue().bold());
            println!();
            println!("  ID:         {}", url.id.to_string().bright_black());
            println!("  Code:       {}", url.short_url.cyan());
            if let Some(custom) = &url.custom_url {
                println!("  Custom:     {}", custom.cyan());
            }
            println!("  Target:     {}", url.original_url.bright_white());
            println!(
                "  Created:    {}",
                url.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
            );

            let expiry = match url.expiration_date {
                None => "never".green(),
                Some(at) if url.is_expired() => {
                    format!("{} (expired)", at.format("%Y-%m-%d %H:%M")).red()
                }
                Some(at) => at.format("%Y-%m-%d %H:%M").to_string().yellow(),
            };
            println!("  Expires:    {}", expiry);
            println!();
        }
    }

    Ok(())
}

async fn handle_clipboard_action(action: ClipboardAction, pool: &PgPool) -> Result<()> {
    let repo = PgClipboardRepository::new(Arc::new(pool.clone()));

    match action {
        ClipboardAction::Show { code } => {
            let clipboard = repo
                .find_by_code(&code)
                .await?
                .with_context(|| format!("No clipboard with code '{code}'"))?;

            println!("{}", "📋 Clipboard".bright_blue().bold());
            println!();
            println!("  ID:      {}", clipboard.id.to_string().bright_black());
            println!("  Code:    {}", clipboard.clipboard_short_url.cyan());
            println!(
                "  Created: {}",
                clipboard
                    .created_at
                    .format("%Y-%m-%d %H:%M")
                    .to_string()
                    .bright_black()
            );
            println!(
                "  Length:  {} bytes",
                clipboard.clipboard_text.len().to_string().bright_white()
            );
            println!();
            println!("{}", clipboard.clipboard_text);
            println!();
        }
    }

    Ok(())
}

async fn handle_link_list_action(action: LinkListAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgLinkListRepository::new(Arc::new(pool.clone())));

    match action {
        LinkListAction::Show { code } => {
            let list = repo
                .find_by_code(&code)
                .await?
                .with_context(|| format!("No link list with code '{code}'"))?;

            println!(
                "{} {}",
                "📚 Link list".bright_blue().bold(),
                list.short_link.cyan()
            );
            println!();

            if list.entries.is_empty() {
                println!("{}", "  No entries".yellow());
                println!();
                return Ok(());
            }

            for entry in &list.entries {
                println!(
                    "  {:<3} {}",
                    (entry.position + 1).to_string().bright_black(),
                    entry.title.bright_white().bold()
                );
                println!("      {}", entry.url.cyan());
                if !entry.description.is_empty() {
                    println!("      {}", entry.description.bright_black());
                }
            }

            println!();
            println!(
                "  Total: {}",
                list.entries.len().to_string().bright_white().bold()
            );
            println!();
        }
        LinkListAction::Delete { code, yes } => {
            println!("{}", "🗑️  Delete Link List".bright_blue().bold());
            println!();

            let list = repo
                .find_by_code(&code)
                .await?
                .with_context(|| format!("No link list with code '{code}'"))?;

            println!("  Code:    {}", list.short_link.cyan());
            println!(
                "  Entries: {}",
                list.entries.len().to_string().bright_white()
            );
            println!();

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Delete this list and all of its entries?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            let service = LinkListService::new(
                repo,
                Arc::new(CodeGenerator::from_entropy()?),
                DEFAULT_MAX_ATTEMPTS,
            );

            match service.delete(&code).await {
                Ok(()) => println!("{}", "✅ Link list deleted".green().bold()),
                Err(AppError::NotFound { .. }) => {
                    println!("{}", "⚠️  Link list was already gone".yellow())
                }
                Err(e) => return Err(e.into()),
            }
            println!();
        }
    }

    Ok(())
}
