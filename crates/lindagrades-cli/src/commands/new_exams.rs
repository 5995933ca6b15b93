//! The `lindagrades new-exams` command.

use std::path::PathBuf;

use anyhow::{Context, Result};

use lindagrades_report::{find_new_exams, render_new_exams, ExamCache};

pub async fn execute(config_path: Option<PathBuf>, cache_path: Option<PathBuf>) -> Result<()> {
    let (config, current) = super::fetch_records(config_path).await?;

    let cache = ExamCache::new(cache_path.unwrap_or(config.cache_path));
    let cached = cache.load().context("failed to get cached exams")?;
    cache.save(&current).context("failed to save current exams")?;

    let new_exams = find_new_exams(&current, &cached);
    tracing::info!(
        current = current.len(),
        cached = cached.len(),
        new = new_exams.len(),
        "compared against cache"
    );
    print!("{}", render_new_exams(&new_exams));

    Ok(())
}
