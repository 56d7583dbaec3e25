use anyhow::Result;

use crate::cli::{Format, Output};
use crate::report::HazardType;

/// List the hazard categories accepted by `citizen report --hazard`
pub async fn execute(format: Format, output: &Output) -> Result<()> {
    if format == Format::Json {
        println!("{}", serde_json::to_string_pretty(&HazardType::ALL)?);
        return Ok(());
    }

    output.header("Hazard types");
    for hazard in HazardType::ALL {
        output.table_row(&hazard.slug(), hazard.label());
    }
    Ok(())
}
