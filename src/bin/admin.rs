//! CLI administration tool for the FoodRescue backend.
//!
//! Reads the same store configuration as the server and talks to the store
//! directly, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Donation totals
//! cargo run --bin admin -- stats
//!
//! # Dump donations as JSON lines, optionally for one provider
//! cargo run --bin admin -- donations --provider "Green Cafe"
//! cargo run --bin admin -- donations --provider-id "prov-42"
//!
//! # Expiry estimate for one donation
//! cargo run --bin admin -- expiry Xk3v9QmZp2LrT8aBcD1e
//!
//! # Check store connectivity
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `STORE_BACKEND`, `DATABASE_URL` or the `DB_*` components.

use food_rescue::application::services::{AdminService, DonationFilter, DonationService};
use food_rescue::config;
use food_rescue::domain::entities::Urgency;
use food_rescue::domain::repositories::DocumentStore;
use food_rescue::server::build_store;

use anyhow::Result;
use chrono::Utc;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;

/// CLI tool for managing the FoodRescue backend.
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
    /// Show donation statistics
    Stats,

    /// Print donations as JSON lines
    Donations {
        /// Only donations whose providerName equals this value
        #[arg(short, long)]
        provider: Option<String>,

        /// Only donations whose providerId equals this value
        #[arg(long)]
        provider_id: Option<String>,
    },

    /// Show the predicted remaining shelf life of a donation
    Expiry {
        /// Donation identifier
        id: String,
    },

    /// Store operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Store operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check store connectivity
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let store = build_store(&config).await?;

    match cli.command {
        Commands::Stats => handle_stats(store).await?,
        Commands::Donations {
            provider,
            provider_id,
        } => handle_donations(store, provider, provider_id).await?,
        Commands::Expiry { id } => handle_expiry(store, &id).await?,
        Commands::Db { action } => handle_db_action(action, store).await?,
    }

    Ok(())
}

/// Displays donation count and total quantity.
async fn handle_stats(store: Arc<dyn DocumentStore>) -> Result<()> {
    println!("{}", "📊 Donation Statistics".bright_blue().bold());
    println!();

    let stats = AdminService::new(store)
        .donation_stats()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to compute stats: {}", e))?;

    println!(
        "  Donations: {}",
        stats.total_donations.to_string().bright_white().bold()
    );
    println!(
        "  Total kg:  {}",
        stats.total_kg.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Prints each donation as one JSON object per line.
async fn handle_donations(
    store: Arc<dyn DocumentStore>,
    provider: Option<String>,
    provider_id: Option<String>,
) -> Result<()> {
    let filter = DonationFilter {
        provider_name: provider.as_deref(),
        provider_id: provider_id.as_deref(),
    };

    let donations = DonationService::new(store)
        .list_donations(filter)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list donations: {}", e))?;

    for donation in &donations {
        println!("{}", serde_json::to_string(donation)?);
    }

    eprintln!(
        "{} {}",
        "Total:".bright_black(),
        donations.len().to_string().bright_white().bold()
    );

    Ok(())
}

/// Prints the shelf-life estimate and the factors behind it.
async fn handle_expiry(store: Arc<dyn DocumentStore>, id: &str) -> Result<()> {
    let prediction = DonationService::new(store)
        .predict_expiry(id, Utc::now())
        .await
        .map_err(|e| anyhow::anyhow!("Failed to predict expiry: {}", e))?;

    let urgency = format!("{:?}", prediction.urgency);
    let urgency = match prediction.urgency {
        Urgency::High => urgency.red().bold(),
        Urgency::Medium => urgency.yellow().bold(),
        Urgency::Low => urgency.green().bold(),
    };

    println!("{}", "⏳ Expiry Prediction".bright_blue().bold());
    println!();
    println!(
        "  Remaining: {} h",
        prediction.remaining_hours.to_string().bright_white().bold()
    );
    println!("  Urgency:   {}", urgency);
    println!();

    for factor in &prediction.explanations {
        println!("  {} {}", format!("{}:", factor.factor).bright_black(), factor.impact);
    }

    Ok(())
}

/// Dispatches store commands.
async fn handle_db_action(action: DbAction, store: Arc<dyn DocumentStore>) -> Result<()> {
    match action {
        DbAction::Check => {
            print!("Checking store connection... ");

            if store.health_check().await {
                println!("{}", "✅ OK".green().bold());
            } else {
                println!("{}", "❌ FAILED".red().bold());
                anyhow::bail!("Document store is unreachable");
            }
        }
    }

    Ok(())
}
