use anyhow::{Context, Result};
use serde_json::Value;

use crate::api::ReportsClient;
use crate::cli::{Format, Output};

use super::load_config;

/// List the reports the server holds
pub async fn execute(custom_config: Option<&str>, format: Format, output: &Output) -> Result<()> {
    let config = load_config(custom_config)?;
    let client = ReportsClient::new(&config.api.base_url, config.api.timeout())?;

    let spinner = output.spinner("Fetching reports...");
    let result = client.list_reports().await;
    spinner.finish_and_clear();
    let reports = result.with_context(|| format!("Could not fetch {}", client.reports_url()))?;

    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&reports)?);
        return Ok(());
    }

    output.header(&format!("Reports ({})", reports.len()));
    if reports.is_empty() {
        output.info("No reports yet");
    }
    for report in &reports {
        output.list_item(&describe(report));
    }
    Ok(())
}

/// One-line description of a server-side report; the shape is not fixed, so
/// fall back to compact JSON when the familiar fields are missing
fn describe(report: &Value) -> String {
    let hazard = report.get("hazardType").and_then(Value::as_str);
    let description = report.get("description").and_then(Value::as_str);
    match (hazard, description) {
        (Some(hazard), Some(description)) => format!("{}: {}", hazard, description),
        (Some(hazard), None) => hazard.to_string(),
        _ => report.to_string(),
    }
}
