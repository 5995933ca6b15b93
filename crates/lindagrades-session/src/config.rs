//! lindagrades configuration and session factory.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use lindagrades_core::EctsOverrides;

use crate::endpoints::DEFAULT_BASE_URL;
use crate::session::{Session, SessionBuilder};

/// Name of the config file looked up in the current directory.
pub const LOCAL_CONFIG_FILE: &str = "lindagrades.toml";

/// Top-level lindagrades configuration.
///
/// Note: Custom Debug impl masks the password to keep it out of logs.
#[derive(Clone, Serialize, Deserialize)]
pub struct LindaConfig {
    /// LINDA user name.
    #[serde(default)]
    pub username: String,
    /// LINDA password.
    #[serde(default)]
    pub password: String,
    /// Portal host.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Where `new-exams` keeps the previously seen records.
    #[serde(default = "default_cache_path")]
    pub cache_path: PathBuf,
    /// Exam id → replacement ECTS credits.
    ///
    /// TOML keys are strings; [`LindaConfig::overrides`] parses them.
    #[serde(default)]
    pub ects_overrides: BTreeMap<String, f64>,
}

impl std::fmt::Debug for LindaConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LindaConfig")
            .field("username", &self.username)
            .field("password", &"***")
            .field("base_url", &self.base_url)
            .field("cache_path", &self.cache_path)
            .field("ects_overrides", &self.ects_overrides)
            .finish()
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_cache_path() -> PathBuf {
    PathBuf::from("exams.json")
}

impl Default for LindaConfig {
    fn default() -> Self {
        Self {
            username: String::new(),
            password: String::new(),
            base_url: default_base_url(),
            cache_path: default_cache_path(),
            ects_overrides: BTreeMap::new(),
        }
    }
}

impl LindaConfig {
    /// Parse a TOML document.
    pub fn from_toml(content: &str) -> Result<Self> {
        let config: LindaConfig = toml::from_str(content)?;
        config.overrides()?;
        Ok(config)
    }

    /// The override table with numeric exam ids.
    pub fn overrides(&self) -> Result<EctsOverrides> {
        self.ects_overrides
            .iter()
            .map(|(id, credits)| {
                let id = id
                    .trim()
                    .parse::<i64>()
                    .with_context(|| format!("ects_overrides: exam id '{id}' is not a number"))?;
                anyhow::ensure!(
                    credits.is_finite() && *credits >= 0.0,
                    "ects_overrides: credits for exam {id} must be a non-negative number"
                );
                Ok((id, *credits))
            })
            .collect()
    }

    /// Fail unless both credentials are present.
    pub fn ensure_credentials(&self) -> Result<()> {
        anyhow::ensure!(
            !self.username.is_empty(),
            "no username configured (set `username` or LINDAGRADES_USERNAME)"
        );
        anyhow::ensure!(
            !self.password.is_empty(),
            "no password configured (set `password` or LINDAGRADES_PASSWORD)"
        );
        Ok(())
    }
}

/// Replace `${VAR_NAME}` references with the variable's value.
///
/// Unset variables resolve to an empty string.
fn resolve_env_vars(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut rest = s;
    while let Some(start) = rest.find("${") {
        let Some(len) = rest[start..].find('}') else {
            break;
        };
        result.push_str(&rest[..start]);
        let var_name = &rest[start + 2..start + len];
        result.push_str(&std::env::var(var_name).unwrap_or_default());
        rest = &rest[start + len + 1..];
    }
    result.push_str(rest);
    result
}

/// Load configuration from well-known paths.
///
/// Search order:
/// 1. `lindagrades.toml` in the current directory
/// 2. `~/.config/lindagrades/config.toml`
///
/// Environment variable overrides: `LINDAGRADES_USERNAME`, `LINDAGRADES_PASSWORD`.
pub fn load_config() -> Result<LindaConfig> {
    load_config_from(None)
}

/// Load config from an explicit path, or search the default locations.
pub fn load_config_from(path: Option<&Path>) -> Result<LindaConfig> {
    let config_path = match path {
        Some(p) if p.exists() => Some(p.to_path_buf()),
        Some(p) => anyhow::bail!("config file not found: {}", p.display()),
        None => {
            let local = PathBuf::from(LOCAL_CONFIG_FILE);
            if local.exists() {
                Some(local)
            } else {
                dirs_path()
                    .map(|dir| dir.join("config.toml"))
                    .filter(|global| global.exists())
            }
        }
    };

    let mut config = match config_path {
        Some(path) => {
            tracing::debug!(path = %path.display(), "loading config");
            let content = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read config: {}", path.display()))?;
            LindaConfig::from_toml(&content)
                .with_context(|| format!("failed to parse config: {}", path.display()))?
        }
        None => LindaConfig::default(),
    };

    Ok(apply_env_overrides(
        config,
        std::env::var("LINDAGRADES_USERNAME").ok(),
        std::env::var("LINDAGRADES_PASSWORD").ok(),
    ))
}

/// Resolve `${VAR}` references in file values, then let the
/// `LINDAGRADES_*` variables replace credentials verbatim.
fn apply_env_overrides(
    mut config: LindaConfig,
    username: Option<String>,
    password: Option<String>,
) -> LindaConfig {
    config.username = resolve_env_vars(&config.username);
    config.password = resolve_env_vars(&config.password);
    config.base_url = resolve_env_vars(&config.base_url);

    if let Some(username) = username {
        config.username = username;
    }
    if let Some(password) = password {
        config.password = password;
    }
    config
}

fn dirs_path() -> Option<PathBuf> {
    std::env::var("HOME")
        .ok()
        .map(|h| PathBuf::from(h).join(".config").join("lindagrades"))
}

/// Session builder wired to the configured host and override table.
pub fn create_session(config: &LindaConfig) -> Result<SessionBuilder> {
    Ok(Session::builder()
        .base_url(&config.base_url)
        .overrides(config.overrides()?))
}
