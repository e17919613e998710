//! Status command implementation.

use anyhow::{Context, Result};
use clap::Args;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct StatusArgs {}

pub fn run(_args: StatusArgs) -> Result<()> {
    let stored = storage::load_session().context("Failed to load session")?;

    let Some(stored) = stored.filter(|s| s.state.is_logged_in) else {
        output::field("Status", "Not logged in");
        return Ok(());
    };

    let user = stored.state.user();
    output::field("Status", "Logged in");
    output::field("Name", user.and_then(|u| u.name()).unwrap_or("-"));
    output::field("Email", user.and_then(|u| u.email()).unwrap_or("-"));
    output::field("API", stored.api.as_str());
    output::field(
        "Saved",
        &stored.saved_at.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
    );

    Ok(())
}
