//! Lunchman - Administrative tool to manage a Luncher instance.
//!
//! # Usage
//!
//! ```bash
//! # Add a region, prompting for its name and time zone
//! lunchman add region
//!
//! # Add a restaurant and its administrator
//! lunchman add restaurant
//!
//! # Show every region
//! lunchman list regions
//! ```
//!
//! Prompts are written to stdout and logs to stderr. The store is
//! configured through the `LUNCHER_DB_*` environment variables.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::io::{self, BufReader};

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use luncher_db::{Client, Config, RegionsCollection, RestaurantsCollection, UsersCollection};
use lunchman::commands;
use lunchman::interact::Actor;

#[derive(Parser)]
#[command(name = "lunchman")]
#[command(author, version, about = "An administrative tool to manage your luncher instance")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Add a new value to the DB
    Add {
        #[command(subcommand)]
        target: AddTarget,
    },
    /// Show values stored in the DB
    List {
        #[command(subcommand)]
        target: ListTarget,
    },
}

#[derive(Subcommand)]
enum AddTarget {
    /// Add a region
    Region,
    /// Add a restaurant
    Restaurant,
}

#[derive(Subcommand)]
enum ListTarget {
    /// List regions
    Regions,
}

#[tokio::main(flavor = "current_thread")]
async fn main() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| "lunchman=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut client = Client::new(Config::from_env()?);
    client.connect().await?;

    let mut actor = Actor::new(BufReader::new(io::stdin()), io::stdout());
    let result = match cli.command {
        Commands::Add { target } => match target {
            AddTarget::Region => {
                let regions = RegionsCollection::new(&client)?;
                commands::region::add(&mut actor, &regions).await.map(drop)
            }
            AddTarget::Restaurant => {
                let restaurants = RestaurantsCollection::new(&client)?;
                let users = UsersCollection::new(&client)?;
                commands::restaurant::add(&mut actor, &restaurants, &users)
                    .await
                    .map(drop)
            }
        },
        Commands::List { target } => match target {
            ListTarget::Regions => {
                let regions = RegionsCollection::new(&client)?;
                commands::region::list(&mut actor, &regions).await
            }
        },
    };

    client.disconnect().await;
    result.map_err(Into::into)
}
