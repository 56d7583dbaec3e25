//! Version command implementation

use crate::cli::Output;
use anyhow::Result;

/// Execute the version command
pub async fn execute(output: &Output) -> Result<()> {
    let version = env!("CARGO_PKG_VERSION");
    let name = env!("CARGO_PKG_NAME");
    let description = env!("CARGO_PKG_DESCRIPTION");

    output.header("citizen-report version information");
    output.table_row("Version", &format!("{} v{}", name, version));
    output.table_row("About", description);
    output.table_row("Target", std::env::consts::ARCH);
    output.table_row(
        "Profile",
        if cfg!(debug_assertions) { "debug" } else { "release" },
    );
    output.blank_line();
    output.info("Run 'citizen --help' for usage information");

    Ok(())
}
