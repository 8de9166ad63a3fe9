//! Session manager with refresh-before-expiry and invalidation recovery
//!
//! Manages the credential lifecycle:
//! - Credential retrieval from the store
//! - Refresh when within the expiry margin (5 min)
//! - Recovery from a rejected refresh token via a fresh login
//! - Persistence of every (re)issued credential

use async_trait::async_trait;
use tracing::{debug, info};

use super::ports::{AccessTokenProvider, AuthClient, CredentialStore, RefreshOutcome, SecretPrompt};
use hourbridge_domain::{Credential, Result};

/// Refresh this many seconds before expiry; absorbs clock skew and request
/// latency so a token never expires mid-flight.
pub const REFRESH_MARGIN_SECS: i64 = 300;

/// Owns the credential lifecycle for a single account.
///
/// State machine: `NoCredential → Authenticating → Valid → (near-expiry) →
/// Refreshing → Valid`, with `Refreshing → NoCredential` on a rejected
/// refresh token looping back to `Authenticating`. Any other login or
/// refresh failure aborts the whole operation.
pub struct SessionManager<A: AuthClient + 'static, S: CredentialStore + 'static, P: SecretPrompt + 'static> {
    auth: A,
    store: S,
    prompt: P,
    email: String,
}

impl<A: AuthClient + 'static, S: CredentialStore + 'static, P: SecretPrompt + 'static>
    SessionManager<A, S, P>
{
    /// Create a new session manager.
    ///
    /// # Arguments
    /// * `auth` - Provider login/refresh calls
    /// * `store` - Durable credential storage (explicit, no process-wide
    ///   state)
    /// * `prompt` - Interactive password source, used at initial login only
    /// * `email` - Account the session belongs to
    pub fn new(auth: A, store: S, prompt: P, email: String) -> Self {
        Self { auth, store, prompt, email }
    }

    /// Produce a valid access token, logging in or refreshing as needed.
    ///
    /// Loads the persisted credential if present; otherwise performs an
    /// initial login. A stored credential near expiry is refreshed; a
    /// rejected refresh token clears the store and falls back to a fresh
    /// login exactly once. Any other failure propagates unchanged.
    pub async fn authenticate(&self) -> Result<String> {
        let credential = match self.store.load().await? {
            Some(stored) => match self.refresh_if_necessary(stored).await? {
                RefreshOutcome::Valid(cred) | RefreshOutcome::Refreshed(cred) => cred,
                RefreshOutcome::NeedsReauth => {
                    info!("session expired and refresh was rejected; logging in again");
                    self.store.clear().await?;
                    self.initial_login().await?
                }
            },
            None => self.initial_login().await?,
        };

        Ok(credential.access_token)
    }

    /// Refresh the credential if it is within the expiry margin.
    ///
    /// Returns `Valid` with the input unchanged (and makes no network call)
    /// while `now <= expires_at - 5min`. Otherwise performs exactly one
    /// refresh call; a successful refresh is persisted before returning.
    pub async fn refresh_if_necessary(&self, credential: Credential) -> Result<RefreshOutcome> {
        if !credential.is_expiring_within(REFRESH_MARGIN_SECS) {
            debug!("access token still valid; skipping refresh");
            return Ok(RefreshOutcome::Valid(credential));
        }

        info!("access token near expiry; refreshing");
        match self.auth.refresh(&credential).await? {
            RefreshOutcome::Refreshed(fresh) => {
                self.store.save(&fresh).await?;
                Ok(RefreshOutcome::Refreshed(fresh))
            }
            other => Ok(other),
        }
    }

    /// Exchange an interactively supplied password for a credential triple.
    ///
    /// The password is read out-of-band, passed straight to the login call
    /// and dropped; only the resulting credential is persisted.
    async fn initial_login(&self) -> Result<Credential> {
        let password = self.prompt.read_password(&self.email).await?;
        let credential = self.auth.login(&self.email, &password).await?;
        self.store.save(&credential).await?;
        info!("authenticated; session persisted");
        Ok(credential)
    }
}

#[async_trait]
impl<A: AuthClient + 'static, S: CredentialStore + 'static, P: SecretPrompt + 'static>
    AccessTokenProvider for SessionManager<A, S, P>
{
    async fn access_token(&self) -> Result<String> {
        self.authenticate().await
    }
}
