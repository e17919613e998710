//! Logout command implementation.
//!
//! The saved session is removed whether or not the API acknowledged the
//! logout; a failure has already been reported on stderr by then.

use anyhow::{Context, Result};
use clap::Args;
use colored::Colorize;

use crate::output;
use crate::session::storage;

#[derive(Args, Debug)]
pub struct LogoutArgs {}

pub async fn run(_args: LogoutArgs) -> Result<()> {
    let stored = storage::load_session()
        .context("Failed to load session")?
        .context("No active session. Run 'connections auth login' first.")?;

    let session = super::operations(stored.api.clone());
    if let Some(token) = stored.state.persisted_token() {
        session.credentials().set(token.clone());
    }

    eprintln!("{}", "Logging out...".dimmed());
    session.logout().await;

    storage::clear_session().context("Failed to clear session")?;

    if session.credentials().is_set() {
        output::field("Session", "cleared locally");
    } else {
        output::success("Logged out");
    }

    Ok(())
}
