//! Auth subcommand implementations.

mod login;
mod logout;
mod signup;
mod status;
mod whoami;

use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Subcommand};

use connections::{ApiUrl, SessionOperations};

use crate::notifier::ConsoleNotifier;

#[derive(Args, Debug)]
pub struct AuthCommand {
    #[command(subcommand)]
    pub command: AuthSubcommand,
}

#[derive(Subcommand, Debug)]
pub enum AuthSubcommand {
    /// Create a new account and log into it
    Signup(signup::SignupArgs),

    /// Log into an existing account
    Login(login::LoginArgs),

    /// End the active session
    Logout(logout::LogoutArgs),

    /// Re-authenticate with the saved token and show the current user
    Whoami(whoami::WhoamiArgs),

    /// Show the saved session without contacting the API
    Status(status::StatusArgs),
}

pub async fn handle(cmd: AuthCommand, api_url: &str) -> Result<()> {
    match cmd.command {
        AuthSubcommand::Signup(args) => signup::run(args, api_url).await,
        AuthSubcommand::Login(args) => login::run(args, api_url).await,
        AuthSubcommand::Logout(args) => logout::run(args).await,
        AuthSubcommand::Whoami(args) => whoami::run(args).await,
        AuthSubcommand::Status(args) => status::run(args),
    }
}

/// Session operations that report failures on the terminal.
fn operations(api: ApiUrl) -> SessionOperations {
    SessionOperations::new(api, Arc::new(ConsoleNotifier))
}

fn parse_api_url(api_url: &str) -> Result<ApiUrl> {
    ApiUrl::new(api_url).context("Invalid API URL")
}
