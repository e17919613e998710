//! Whoami command implementation.

use anyhow::{Context, Result, bail};
use clap::Args;

use connections::RefreshOutcome;

use crate::output::{self, Reported};
use crate::session::storage;

#[derive(Args, Debug)]
pub struct WhoamiArgs {
    /// Print the user as JSON
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: WhoamiArgs) -> Result<()> {
    let Some(mut stored) = storage::load_session().context("Failed to load session")? else {
        bail!("Not logged in. Run 'connections auth login' first.");
    };

    let session = super::operations(stored.api.clone());

    stored.state.begin_refresh();
    let result = session.refresh(stored.state.persisted_token()).await;
    stored.state.apply_refresh(&result);

    match result {
        Ok(RefreshOutcome::Refreshed(profile)) => {
            storage::save_session(&mut stored).context("Failed to save session")?;

            if args.json {
                output::json_pretty(&profile)?;
            } else {
                output::field("Name", profile.name().unwrap_or("-"));
                output::field("Email", profile.email().unwrap_or("-"));
                output::field("API", stored.api.as_str());
            }
            Ok(())
        }
        // The notifier has already printed why
        Ok(RefreshOutcome::Unavailable) => Err(Reported.into()),
        Err(e) if e.is_not_authenticated() => {
            bail!("Not logged in. Run 'connections auth login' first.")
        }
        Err(e) => Err(e).context("Failed to refresh session"),
    }
}
