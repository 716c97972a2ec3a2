#![allow(missing_docs)]

//! Wayfarer CLI — generate itineraries and analyze trip budgets from the
//! command line. Prints result JSON on stdout; logs go to stderr (and to
//! a JSON file when `--log-dir` is given).

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::warn;

use wayfarer::config::PlannerConfig;
use wayfarer::credentials::{self, Credentials};
use wayfarer::itinerary::TripRequest;
use wayfarer::kb::KnowledgeBase;
use wayfarer::planner::analysis::Expense;
use wayfarer::planner::TripPlanner;
use wayfarer::providers::gateway::ModelGateway;
use wayfarer::logging;

#[derive(Parser)]
#[command(name = "wayfarer", version, about = "Travel itinerary engine")]
struct Cli {
    /// Also write daily-rotated JSON logs to this directory.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Generate a day-by-day itinerary for a trip.
    Plan {
        /// Destination name, e.g. 南京.
        #[arg(long)]
        destination: String,
        /// Trip length in days.
        #[arg(long)]
        days: u32,
        /// Total budget in currency units.
        #[arg(long)]
        budget: f64,
        /// Number of travelers.
        #[arg(long, default_value_t = 1)]
        travelers: u32,
        /// Preference tag; repeat for multiple.
        #[arg(long = "prefer")]
        preferences: Vec<String>,
        /// Free-text notes passed through to the planner.
        #[arg(long)]
        notes: Option<String>,
        /// Pretty-print the output JSON.
        #[arg(long)]
        pretty: bool,
    },
    /// Analyze recorded expenses against a total budget.
    Analyze {
        /// Total trip budget.
        #[arg(long)]
        total_budget: f64,
        /// Expense as `category=amount`; repeat for multiple.
        #[arg(long = "expense")]
        expenses: Vec<String>,
        /// Pretty-print the output JSON.
        #[arg(long)]
        pretty: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let _guard = match &cli.log_dir {
        Some(dir) => Some(logging::init_production(dir)?),
        None => {
            logging::init_cli();
            None
        }
    };

    let config = PlannerConfig::load().context("failed to load configuration")?;

    let loaded = credentials::load_default_credentials().unwrap_or_else(|e| {
        warn!(error = %e, "could not load credentials file; using process environment only");
        Credentials::from_env()
    });

    let gateway = ModelGateway::from_credentials(&loaded, &config.gateway);
    let engine = TripPlanner::new(
        gateway,
        Arc::new(KnowledgeBase::builtin()),
        config.gateway.clone(),
    );

    match cli.command {
        Command::Plan {
            destination,
            days,
            budget,
            travelers,
            preferences,
            notes,
            pretty,
        } => {
            let request = TripRequest {
                destination,
                days,
                budget,
                travelers,
                preferences,
                additional_info: notes,
            };
            request.validate().context("invalid trip request")?;

            let itinerary = engine.generate_itinerary(&request).await;
            print_json(&itinerary, pretty)?;
        }
        Command::Analyze {
            total_budget,
            expenses,
            pretty,
        } => {
            let parsed: Vec<Expense> = expenses
                .iter()
                .map(|raw| parse_expense(raw))
                .collect::<Result<_>>()?;

            let analysis = engine
                .analyze_budget(&parsed, total_budget)
                .await
                .context("budget analysis failed; please retry")?;
            print_json(&analysis, pretty)?;
        }
    }

    Ok(())
}

/// Parse `category=amount` into an [`Expense`].
fn parse_expense(raw: &str) -> Result<Expense> {
    let (category, amount) = raw
        .split_once('=')
        .with_context(|| format!("expected category=amount, got {raw:?}"))?;
    let amount: f64 = amount
        .trim()
        .parse()
        .with_context(|| format!("invalid amount in {raw:?}"))?;
    Ok(Expense {
        category: category.trim().to_owned(),
        amount,
    })
}

fn print_json<T: serde::Serialize>(value: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{json}");
    Ok(())
}
