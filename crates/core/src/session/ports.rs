//! Port interfaces for the session lifecycle

use async_trait::async_trait;
use hourbridge_domain::{Credential, Result};

/// Outcome of a refresh decision, carried as data so callers branch on a
/// variant instead of matching error text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RefreshOutcome {
    /// Credential is still comfortably inside its validity window; no
    /// network call was made and the input is returned unchanged.
    Valid(Credential),
    /// The provider issued a fresh credential triple.
    Refreshed(Credential),
    /// The provider rejected the refresh token; the caller must
    /// re-authenticate from scratch.
    NeedsReauth,
}

/// The provider's two-call token flow.
#[async_trait]
pub trait AuthClient: Send + Sync {
    /// Exchange email and password for a credential triple.
    async fn login(&self, email: &str, password: &str) -> Result<Credential>;

    /// Exchange the refresh token for a new credential triple.
    ///
    /// Returns `Refreshed` on success and `NeedsReauth` when the provider
    /// rejects the refresh token; never returns `Valid`.
    async fn refresh(&self, credential: &Credential) -> Result<RefreshOutcome>;
}

/// Durable storage for the single persisted credential record.
#[async_trait]
pub trait CredentialStore: Send + Sync {
    /// Load the persisted credential, if one exists.
    async fn load(&self) -> Result<Option<Credential>>;

    /// Overwrite the persisted credential wholesale.
    async fn save(&self, credential: &Credential) -> Result<()>;

    /// Remove the persisted credential. Idempotent.
    async fn clear(&self) -> Result<()>;
}

/// Interactive source for the login password.
///
/// Implementations must never log or persist what they read.
#[async_trait]
pub trait SecretPrompt: Send + Sync {
    /// Read the password for `email` from an interactive source.
    async fn read_password(&self, email: &str) -> Result<String>;
}

/// Yields a bearer token valid at the moment of the call.
#[async_trait]
pub trait AccessTokenProvider: Send + Sync {
    /// Retrieve an access token to authorize a remote call.
    async fn access_token(&self) -> Result<String>;
}
