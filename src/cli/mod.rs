use anyhow::Result;
use clap::{Parser, Subcommand};

pub mod init;
pub mod merge;
pub mod migrate;
pub mod reconcile;
pub mod serve;

use crate::core::AppConfig;

#[derive(Subcommand)]
enum Command {
    /// Create the storage directory and database schema
    Init {},
    /// Apply pending db schema migrations
    Migrate {},
    /// Run the API server
    Serve {
        /// Set the server host address
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Set the server port
        #[arg(long, default_value = "2222")]
        port: String,
    },
    /// Merge attendees that share a LinkedIn URL but were booked
    /// under different emails
    MergeAttendees {
        /// Report what would be merged without writing anything
        #[arg(long, action, default_value = "false")]
        dry_run: bool,
    },
    /// Show which email a booking would be stored under
    Reconcile {
        #[arg(long)]
        linkedin_url: String,
        #[arg(long)]
        email: String,
    },
}

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

pub async fn run() -> Result<()> {
    let args = Cli::parse();
    let config = AppConfig::default();

    // Handle each sub command
    match args.command {
        Some(Command::Init {}) => {
            init::run(&config).await?;
        }
        Some(Command::Migrate {}) => {
            migrate::run(&config).await?;
        }
        Some(Command::Serve { host, port }) => {
            serve::run(host, port, config).await?;
        }
        Some(Command::MergeAttendees { dry_run }) => {
            merge::run(dry_run, &config).await?;
        }
        Some(Command::Reconcile {
            linkedin_url,
            email,
        }) => {
            reconcile::run(&linkedin_url, &email, &config).await?;
        }
        None => {}
    }

    Ok(())
}
