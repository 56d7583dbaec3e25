//! Launch screen
//!
//! Decides where the app opens: straight to the report form when a session
//! was stored earlier, otherwise the splash screen.

use crate::cli::Output;
use crate::navigation::{Navigator, Route};
use anyhow::Result;

use super::{load_config, open_store};

pub async fn execute(custom_config: Option<&str>, output: &Output) -> Result<()> {
    let config = load_config(custom_config)?;
    let store = open_store(&config)?;
    let nav = Navigator::launch(&store).await?;

    match nav.current() {
        Route::Report => {
            output.success("Already logged in");
            output.info("Run 'citizen report --help' to file a hazard report");
        }
        _ => {
            output.header("Citizen App");
            output.info("Run 'citizen login' to continue");
        }
    }
    output.verbose(&format!("Opening route: {}", nav.current()));

    Ok(())
}
