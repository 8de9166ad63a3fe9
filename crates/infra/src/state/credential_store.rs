//! TOML-backed credential persistence
//!
//! One record, one file: `<state_dir>/token.toml`. The file is rewritten
//! wholesale on every successful login or refresh and removed when the
//! provider rejects the refresh token.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use hourbridge_core::session::ports::CredentialStore;
use hourbridge_domain::{BridgeError, Credential, Result};
use tracing::debug;

/// File name of the persisted credential record.
const TOKEN_FILE: &str = "token.toml";

/// Credential store writing a single TOML file under the state directory.
pub struct TomlCredentialStore {
    path: PathBuf,
}

impl TomlCredentialStore {
    /// Store the credential at `<state_dir>/token.toml`.
    #[must_use]
    pub fn new(state_dir: &Path) -> Self {
        Self { path: state_dir.join(TOKEN_FILE) }
    }

    /// Store the credential at an explicit file path.
    #[must_use]
    pub fn at_path(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl CredentialStore for TomlCredentialStore {
    async fn load(&self) -> Result<Option<Credential>> {
        let raw = match tokio::fs::read_to_string(&self.path).await {
            Ok(raw) => raw,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(None),
            Err(err) => {
                return Err(BridgeError::Io(format!(
                    "failed to read {}: {err}",
                    self.path.display()
                )))
            }
        };

        let credential = toml::from_str(&raw).map_err(|err| {
            BridgeError::Internal(format!(
                "credential file {} is corrupted: {err}",
                self.path.display()
            ))
        })?;
        Ok(Some(credential))
    }

    async fn save(&self, credential: &Credential) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            tokio::fs::create_dir_all(parent).await.map_err(|err| {
                BridgeError::Io(format!("failed to create {}: {err}", parent.display()))
            })?;
        }

        let encoded = toml::to_string_pretty(credential)
            .map_err(|err| BridgeError::Internal(format!("failed to encode credential: {err}")))?;

        // Write-then-rename so a concurrent reader never sees a torn file
        let staging = self.path.with_extension("toml.tmp");
        tokio::fs::write(&staging, encoded).await.map_err(|err| {
            BridgeError::Io(format!("failed to write {}: {err}", staging.display()))
        })?;
        tokio::fs::rename(&staging, &self.path).await.map_err(|err| {
            BridgeError::Io(format!("failed to move credential into place: {err}"))
        })?;

        debug!(path = %self.path.display(), "credential persisted");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => {
                debug!(path = %self.path.display(), "credential removed");
                Ok(())
            }
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(err) => {
                Err(BridgeError::Io(format!("failed to remove {}: {err}", self.path.display())))
            }
        }
    }
}
