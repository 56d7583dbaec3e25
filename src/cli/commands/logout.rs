use crate::cli::Output;
use crate::session::LoginSession;
use anyhow::Result;

use super::{load_config, open_store};

/// Remove the stored login flag
pub async fn execute(custom_config: Option<&str>, output: &Output) -> Result<()> {
    let config = load_config(custom_config)?;
    let store = open_store(&config)?;

    if !LoginSession::is_logged_in(&store).await? {
        output.info("Not logged in");
        return Ok(());
    }

    LoginSession::logout(&store).await?;
    output.success("Logged out");
    Ok(())
}
