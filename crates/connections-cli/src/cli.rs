//! CLI argument definitions.

use clap::{Parser, Subcommand};
use connections::types::DEFAULT_API_URL;

use crate::commands::auth::AuthCommand;

/// Command-line client for the connections API.
#[derive(Parser, Debug)]
#[command(name = "connections")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    /// API base URL used by signup and login
    #[arg(long, global = true, env = "CONNECTIONS_API_URL", default_value = DEFAULT_API_URL)]
    pub api_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Account and session operations
    Auth(AuthCommand),
}
