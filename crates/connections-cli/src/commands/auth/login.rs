//! Login command implementation.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use connections::{SessionState, UserData};

use crate::output::{self, Reported};
use crate::session::{StoredSession, storage};

#[derive(Args, Debug)]
pub struct LoginArgs {
    /// Account email address
    #[arg(long)]
    pub email: String,

    /// Account password
    #[arg(long)]
    pub password: String,
}

pub async fn run(args: LoginArgs, api_url: &str) -> Result<()> {
    let api = super::parse_api_url(api_url)?;
    let data = UserData::login(&args.email, &args.password);

    eprintln!("{}", "Logging in...".dimmed());

    let response = super::operations(api.clone())
        .login(&data)
        .await
        .map_err(|_| Reported)?;

    let mut state = SessionState::new();
    state.apply_auth(&response);

    storage::save_session(&mut StoredSession::new(api, state)).context("Failed to save session")?;

    let user = response.user();
    output::success("Logged in successfully");
    println!();
    output::field("Name", user.name().unwrap_or("-"));
    output::field("Email", user.email().unwrap_or("-"));

    Ok(())
}
