//! Configuration file support for sizewise.
//!
//! Provides YAML-based configuration through `sizewise.config.yml` files,
//! including data structures, file loading, validation, and the merge of
//! defaults, config values, and CLI flags.

use anyhow::{bail, Context};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::application::use_cases::{PollPolicy, DEFAULT_POLL_MAX_ATTEMPTS};
use crate::shared::Result;
use crate::workload_analysis::services::DEFAULT_PAGE_SIZE;

const CONFIG_FILENAME: &str = "sizewise.config.yml";

/// Built-in service URL, overridable via config or `--api-url`.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub api_base_url: Option<String>,
    pub poll_interval_secs: Option<u64>,
    pub poll_max_attempts: Option<u32>,
    pub page_size: Option<usize>,
    pub session_file: Option<String>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if config.poll_interval_secs == Some(0) {
        bail!(
            "Invalid config: poll_interval_secs must be at least 1.\n\n\
             💡 Hint: The service refreshes progress roughly every 2 seconds; polling faster gains nothing."
        );
    }
    if config.poll_max_attempts == Some(0) {
        bail!("Invalid config: poll_max_attempts must be at least 1.");
    }
    if config.page_size == Some(0) {
        bail!("Invalid config: page_size must be at least 1.");
    }
    if let Some(url) = &config.api_base_url {
        if url.trim().is_empty() {
            bail!("Invalid config: api_base_url must not be empty.");
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!("⚠️  Warning: Unknown config field '{}' will be ignored.", key);
    }
}

/// Effective settings after merging defaults, config file, and CLI flags.
#[derive(Debug, Clone)]
pub struct Settings {
    pub api_base_url: String,
    pub poll_policy: PollPolicy,
    pub page_size: usize,
    pub session_file: Option<PathBuf>,
}

impl Settings {
    /// CLI flags win over config values, which win over defaults.
    pub fn resolve(config: Option<ConfigFile>, api_url_flag: Option<String>) -> Self {
        let config = config.unwrap_or_default();

        let api_base_url = api_url_flag
            .or(config.api_base_url)
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        let mut poll_policy = PollPolicy::default();
        if let Some(secs) = config.poll_interval_secs {
            poll_policy.interval = Duration::from_secs(secs);
        }
        poll_policy.max_attempts = Some(
            config
                .poll_max_attempts
                .unwrap_or(DEFAULT_POLL_MAX_ATTEMPTS),
        );

        Self {
            api_base_url,
            poll_policy,
            page_size: config.page_size.unwrap_or(DEFAULT_PAGE_SIZE),
            session_file: config.session_file.map(PathBuf::from),
        }
    }
}
