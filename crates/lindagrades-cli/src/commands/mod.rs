//! Subcommand implementations.

pub mod average;
pub mod init;
pub mod list;
pub mod new_exams;

use std::path::PathBuf;

use anyhow::{Context, Result};

use lindagrades_core::ExamRecord;
use lindagrades_session::{create_session, load_config_from, LindaConfig};

/// Load the config, log in, and fetch all exam records.
pub(crate) async fn fetch_records(
    config_path: Option<PathBuf>,
) -> Result<(LindaConfig, Vec<ExamRecord>)> {
    let config = load_config_from(config_path.as_deref())?;
    config.ensure_credentials()?;

    let mut session = create_session(&config)?.build()?;
    session
        .login(&config.username, &config.password)
        .await
        .context("failed to log in")?;
    let records = session
        .exam_records()
        .await
        .context("failed to get exams")?;

    Ok((config, records))
}
