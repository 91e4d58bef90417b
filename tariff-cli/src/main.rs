//! Tariff CLI
//!
//! Command-line interface for the tariff adjustment BFF.

use std::str::FromStr;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rust_decimal::Decimal;

use tariff_client::TariffClient;
use tariff_types::{Fee, NotificationMessage};

#[derive(Parser)]
#[command(name = "tariff")]
#[command(author, version, about = "Tariff adjustment BFF CLI client", long_about = None)]
struct Cli {
    /// Base URL of the tariff BFF
    #[arg(long, env = "TARIFF_API_URL", default_value = "http://localhost:8080")]
    api_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Account operations
    Account {
        #[command(subcommand)]
        action: AccountCommands,
    },
    /// Tariff adjustment operations
    Adjustment {
        #[command(subcommand)]
        action: AdjustmentCommands,
    },
    /// Send an approval flow notification for an account
    Notify {
        /// Account ID
        account: String,
        #[arg(long, default_value = "")]
        transaction_id: String,
        #[arg(long, default_value = "approved")]
        status: String,
    },
    /// Search accounts by term
    Search {
        /// Search term; omit to list every account
        #[arg(default_value = "")]
        term: String,
    },
    /// Show the account report
    Report,
    /// Check API health
    Health,
}

#[derive(Subcommand)]
enum AccountCommands {
    /// Get account details
    Get {
        /// Account ID
        id: String,
    },
}

#[derive(Subcommand)]
enum AdjustmentCommands {
    /// List the adjustments of an account
    List {
        /// Account ID
        account: String,
    },
    /// Request a new monthly fee for an account
    Submit {
        /// Account ID
        account: String,
        /// New monthly fee, e.g. 4.99
        #[arg(long)]
        fee: String,
    },
}

fn parse_fee(s: &str) -> Result<Fee> {
    let amount =
        Decimal::from_str(s).map_err(|_| anyhow::anyhow!("Invalid fee: {}", s))?;
    Fee::new(amount).map_err(|e| anyhow::anyhow!("Invalid fee {}: {}", s, e))
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let client = TariffClient::new(&cli.api_url);

    match cli.command {
        Commands::Health => {
            let healthy = client.health().await?;
            if healthy {
                println!("✓ API is healthy");
            } else {
                println!("✗ API is not healthy");
                std::process::exit(1);
            }
        }

        Commands::Account { action } => match action {
            AccountCommands::Get { id } => {
                let account = client.get_account(&id).await?;
                println!("{}", serde_json::to_string_pretty(&account)?);
            }
        },

        Commands::Adjustment { action } => match action {
            AdjustmentCommands::List { account } => {
                let adjustments = client.list_adjustments(&account).await?;
                println!("{}", serde_json::to_string_pretty(&adjustments)?);
            }
            AdjustmentCommands::Submit { account, fee } => {
                let fee = parse_fee(&fee)?;
                client.submit_adjustment(&account, fee).await?;
                println!("✓ Adjustment to {} submitted for {}", fee, account);
            }
        },

        Commands::Notify {
            account,
            transaction_id,
            status,
        } => {
            let message = NotificationMessage {
                transaction_id,
                account_id: account,
                status,
            };
            client.notify(&message).await?;
            println!("✓ Notification accepted");
        }

        Commands::Search { term } => {
            let found = client.search(&term).await?;
            println!("{}", serde_json::to_string_pretty(&found)?);
        }

        Commands::Report => {
            let report = client.report().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
    }

    Ok(())
}
