//! JSON cache of previously fetched exam records.

use std::fs::OpenOptions;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;

use lindagrades_core::ExamRecord;

/// Records from the last run, stored as a pretty-printed JSON array.
#[derive(Debug, Clone)]
pub struct ExamCache {
    path: PathBuf,
}

impl ExamCache {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Cached records; a missing file is an empty cache.
    pub fn load(&self) -> Result<Vec<ExamRecord>> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "no exam cache yet");
                return Ok(Vec::new());
            }
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("failed to read exam cache from {}", self.path.display())
                })
            }
        };

        serde_json::from_str(&content)
            .with_context(|| format!("failed to parse exam cache {}", self.path.display()))
    }

    /// Replace the cache with `records`, readable by the owner only.
    pub fn save(&self, records: &[ExamRecord]) -> Result<()> {
        let mut buf = Vec::new();
        let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
        let mut serializer = serde_json::Serializer::with_formatter(&mut buf, formatter);
        records
            .serialize(&mut serializer)
            .context("failed to serialize exam records")?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let mut options = OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }

        let mut file = options
            .open(&self.path)
            .with_context(|| format!("failed to open exam cache {}", self.path.display()))?;
        file.write_all(&buf)
            .with_context(|| format!("failed to write exam cache {}", self.path.display()))?;

        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            std::fs::set_permissions(&self.path, std::fs::Permissions::from_mode(0o600))?;
        }

        tracing::debug!(path = %self.path.display(), count = records.len(), "saved exam cache");
        Ok(())
    }
}
