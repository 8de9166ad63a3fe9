//! Persisted session credential
//!
//! The credential triple returned by the provider's login and refresh calls.
//! It is the only durable state the integration keeps: one record, one file,
//! single tenant.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Access and refresh tokens with expiry metadata.
///
/// `expires_at` is derived as issuance time + `expires_in` at the moment the
/// credential is (re)issued and never recomputed afterward.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credential {
    /// Bearer token for API authentication
    pub access_token: String,

    /// Token exchanged for a fresh pair when the access token nears expiry
    pub refresh_token: String,

    /// Access token lifetime in seconds, as reported by the provider
    pub expires_in: i64,

    /// Absolute expiration timestamp (UTC)
    pub expires_at: DateTime<Utc>,
}

impl Credential {
    /// Create a credential from a freshly issued token triple.
    #[must_use]
    pub fn new(access_token: String, refresh_token: String, expires_in: i64) -> Self {
        Self::issued_at(access_token, refresh_token, expires_in, Utc::now())
    }

    /// Create a credential with an explicit issuance instant.
    ///
    /// `expires_at` is fixed here and not touched again for the lifetime of
    /// the record.
    #[must_use]
    pub fn issued_at(
        access_token: String,
        refresh_token: String,
        expires_in: i64,
        issued: DateTime<Utc>,
    ) -> Self {
        Self {
            access_token,
            refresh_token,
            expires_in,
            expires_at: issued + chrono::Duration::seconds(expires_in),
        }
    }

    /// Check whether the access token is expired or will expire within the
    /// given margin.
    ///
    /// # Arguments
    /// * `margin_seconds` - Seconds before `expires_at` at which the token is
    ///   already considered stale (the session manager uses 300 = 5 minutes)
    #[must_use]
    pub fn is_expiring_within(&self, margin_seconds: i64) -> bool {
        Utc::now() + chrono::Duration::seconds(margin_seconds) > self.expires_at
    }
}
