//! The `lindagrades average` command.

use std::path::PathBuf;

use anyhow::Result;

use lindagrades_report::AverageReport;

pub async fn execute(config_path: Option<PathBuf>) -> Result<()> {
    let (_, records) = super::fetch_records(config_path).await?;

    let report = AverageReport::compute(&records);
    print!("{}", report.render());

    Ok(())
}
