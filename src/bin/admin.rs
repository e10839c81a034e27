//! CLI administration tool for the reference data API.
//!
//! Provides commands for managing API tokens and checking the database without
//! requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a token acting for person 0000123
//! cargo run --bin admin -- token create --person-id 0000123
//!
//! # Create a token that may read anyone's work tasks, valid for 90 days
//! cargo run --bin admin -- token create --person-id 0000123 \
//!     --permission VIEW.ANY.PERSON.WORK.TASKS --expires-in-days 90
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Revoke a token
//! cargo run --bin admin -- token revoke "Advising portal"
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `DATABASE_URL` (or `DB_*`) and `TOKEN_SIGNING_SECRET`.

use reference_data_api::application::services::auth_service::hash_token;
use reference_data_api::config;
use reference_data_api::domain::repositories::{NewApiToken, TokenRepository};
use reference_data_api::infrastructure::persistence::PgTokenRepository;

use anyhow::{Context, Result};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{Duration, Utc};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use rand::RngCore;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing the reference data API.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum TokenAction {
    /// Create a new API token
    Create {
        /// Person the token acts for
        #[arg(short, long)]
        person_id: String,

        /// Token name (e.g., "Advising portal")
        #[arg(short, long)]
        name: Option<String>,

        /// Extra permission granted to the token; repeatable
        #[arg(long = "permission")]
        permissions: Vec<String>,

        /// Expire the token after this many days
        #[arg(short, long)]
        expires_in_days: Option<u32>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token by name
    Revoke { name: String },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database version and reference-data row counts
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env()?;

    let pool = PgPool::connect(&config.database.url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Token { action } => {
            handle_token_action(action, &pool, &config.token_signing_secret).await?
        }
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

async fn handle_token_action(action: TokenAction, pool: &PgPool, secret: &str) -> Result<()> {
    let repo = Arc::new(PgTokenRepository::new(Arc::new(pool.clone())));

    match action {
        TokenAction::Create {
            person_id,
            name,
            permissions,
            expires_in_days,
            yes,
        } => {
            let request = CreateRequest {
                person_id,
                name,
                permissions,
                expires_in_days,
                skip_confirm: yes,
            };
            create_token(repo, secret, request).await?;
        }
        TokenAction::List => list_tokens(repo).await?,
        TokenAction::Revoke { name } => revoke_token(repo, name).await?,
    }

    Ok(())
}

struct CreateRequest {
    person_id: String,
    name: Option<String>,
    permissions: Vec<String>,
    expires_in_days: Option<u32>,
    skip_confirm: bool,
}

/// Creates a new API token.
///
/// Only the HMAC-SHA256 hash keyed by `TOKEN_SIGNING_SECRET` is stored; the raw
/// token is printed once.
async fn create_token(
    repo: Arc<PgTokenRepository>,
    secret: &str,
    request: CreateRequest,
) -> Result<()> {
    println!("{}", "🔑 Create API Token".bright_blue().bold());
    println!();

    let person_id = request.person_id.trim().to_string();
    if person_id.is_empty() {
        anyhow::bail!("--person-id must not be blank");
    }

    let token_name = match request.name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text(format!("token-{person_id}"))
            .interact_text()?,
    };

    let permissions: Vec<String> = request
        .permissions
        .iter()
        .map(|p| p.trim().to_ascii_uppercase())
        .filter(|p| !p.is_empty())
        .collect();

    let expires_at = request
        .expires_in_days
        .map(|days| Utc::now() + Duration::days(i64::from(days)));

    let token_value = generate_token();

    println!("{}", "Token details:".bright_white().bold());
    println!("  Name:        {}", token_name.cyan());
    println!("  Person:      {}", person_id.cyan());
    println!(
        "  Permissions: {}",
        if permissions.is_empty() {
            "(none)".bright_black()
        } else {
            permissions.join(", ").cyan()
        }
    );
    println!(
        "  Expires:     {}",
        expires_at.map_or_else(
            || "never".bright_black(),
            |at| at.format("%Y-%m-%d %H:%M UTC").to_string().cyan()
        )
    );
    println!();

    if !request.skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    repo.create_token(NewApiToken {
        name: token_name,
        token_hash: hash_token(secret, &token_value),
        person_id,
        permissions,
        expires_at,
    })
    .await
    .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!("{}", "✅ Token created successfully!".green().bold());
    println!();
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();
    println!("{}", "Example:".bright_white());
    println!(
        "  curl -H \"Authorization: Bearer {}\" http://localhost:3000/denominations",
        token_value.bright_yellow()
    );
    println!();

    Ok(())
}

async fn list_tokens(repo: Arc<PgTokenRepository>) -> Result<()> {
    println!("{}", "📋 API Tokens".bright_blue().bold());
    println!();

    let tokens = repo
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        println!();
        println!(
            "  Create one with: {} admin token create --person-id <id>",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<4} {:<28} {:<12} {:<17} {:<10}",
        "ID".bright_white().bold(),
        "Name".bright_white().bold(),
        "Person".bright_white().bold(),
        "Created".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(78).bright_black());

    let now = Utc::now();
    for token in &tokens {
        let status = if token.is_revoked() {
            "REVOKED".red()
        } else if token.is_expired_at(now) {
            "EXPIRED".yellow()
        } else {
            "ACTIVE".green()
        };

        println!(
            "  {:<4} {:<28} {:<12} {:<17} {}",
            token.id.to_string().bright_black(),
            token.name.cyan(),
            token.person_id,
            token
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status
        );
    }

    println!();
    println!(
        "  Total: {}",
        tokens.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn revoke_token(repo: Arc<PgTokenRepository>, name: String) -> Result<()> {
    println!("{}", "🔒 Revoke API Token".bright_blue().bold());
    println!();
    println!("  Token: {}", name.cyan());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    let revoked = repo
        .revoke_by_name(&name)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    if revoked {
        println!("{}", "✅ Token revoked successfully!".green().bold());
    } else {
        println!("{}", "⚠️  No active token with that name".yellow());
    }
    println!();

    Ok(())
}

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

            for table in [
                "denominations",
                "divisions",
                "schools",
                "office_codes",
                "convenience_fees",
                "miscellaneous_text",
                "tax_form_box_codes",
                "institution_roles",
                "work_tasks",
                "api_tokens",
            ] {
                let count: i64 = sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
                    .fetch_one(pool)
                    .await?;
                println!("  {:<20} {}", table, count.to_string().bright_green().bold());
            }
            println!();
        }
    }

    Ok(())
}

/// Generates a random token: 32 bytes from the thread RNG, base64url without padding
/// (43 characters).
fn generate_token() -> String {
    let mut bytes = [0u8; 32];
    rand::rng().fill_bytes(&mut bytes);
    URL_SAFE_NO_PAD.encode(bytes)
}
