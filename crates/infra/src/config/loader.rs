//! Configuration loader
//!
//! Loads integration configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. First, attempts to load from environment variables
//! 2. If incomplete, falls back to loading from file
//! 3. Probes multiple paths for config files
//!
//! ## Environment Variables
//! - `HOURBRIDGE_EMAIL`: Account email used for the initial login
//! - `HOURBRIDGE_ACTOR`: Actor recorded on compiled timesheets
//! - `HOURBRIDGE_STATE_DIR`: Directory holding the credential file
//! - `HOURBRIDGE_AUDIENCE_ID`: Integration identity (optional)
//! - `HOURBRIDGE_BASE_URL`: API base URL override (optional)
//!
//! Plan defaults (roles/objectives/actions/subjects) can only come from a
//! config file; the environment path leaves them empty.
//!
//! ## File Locations
//! The loader probes the following paths (in order):
//! 1. `./hourbridge.toml` (current working directory)
//! 2. `./config.toml` (current working directory)
//! 3. `../hourbridge.toml` (parent directory)

use std::path::{Path, PathBuf};

use hourbridge_domain::{default_audience_id, BridgeConfig, BridgeError, Result};

/// Load configuration with automatic fallback strategy
///
/// First attempts to load from environment variables. If any required
/// variables are missing, falls back to loading from a config file.
///
/// # Errors
/// Returns `BridgeError::Config` if configuration cannot be loaded from
/// either source.
pub fn load() -> Result<BridgeConfig> {
    match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            Ok(config)
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            load_from_file(None)
        }
    }
}

/// Load configuration from environment variables
///
/// All required environment variables must be present. Returns an error
/// if any are missing.
///
/// # Errors
/// Returns `BridgeError::Config` if required variables are missing.
pub fn load_from_env() -> Result<BridgeConfig> {
    let email = env_var("HOURBRIDGE_EMAIL")?;
    let actor = env_var("HOURBRIDGE_ACTOR")?;
    let state_dir = env_var("HOURBRIDGE_STATE_DIR")?;
    let audience_id =
        std::env::var("HOURBRIDGE_AUDIENCE_ID").unwrap_or_else(|_| default_audience_id());
    let base_url = std::env::var("HOURBRIDGE_BASE_URL").ok();

    Ok(BridgeConfig {
        email,
        actor,
        audience_id,
        state_dir: PathBuf::from(state_dir),
        base_url,
        defaults: hourbridge_domain::PlanDefaults::default(),
    })
}

/// Load configuration from a TOML file
///
/// If `path` is `None`, probes the locations listed in the module
/// documentation and uses the first file that exists.
///
/// # Errors
/// Returns `BridgeError::Config` if no file is found or the file does not
/// parse.
pub fn load_from_file(path: Option<&Path>) -> Result<BridgeConfig> {
    let path = match path {
        Some(path) => path.to_path_buf(),
        None => probe_config_paths()
            .into_iter()
            .find(|candidate| candidate.exists())
            .ok_or_else(|| BridgeError::Config("no config file found".to_string()))?,
    };

    let raw = std::fs::read_to_string(&path).map_err(|err| {
        BridgeError::Config(format!("failed to read config {}: {err}", path.display()))
    })?;

    let config = toml::from_str(&raw).map_err(|err| {
        BridgeError::Config(format!("invalid config file {}: {err}", path.display()))
    })?;
    tracing::info!(path = %path.display(), "Configuration loaded from file");
    Ok(config)
}

fn probe_config_paths() -> Vec<PathBuf> {
    vec![
        PathBuf::from("./hourbridge.toml"),
        PathBuf::from("./config.toml"),
        PathBuf::from("../hourbridge.toml"),
    ]
}

fn env_var(name: &str) -> Result<String> {
    std::env::var(name)
        .map_err(|_| BridgeError::Config(format!("missing environment variable {name}")))
}
