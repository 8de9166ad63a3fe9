//! Session lifecycle
//!
//! Owns the credential lifecycle: load, validate expiry, refresh,
//! re-authenticate, persist. Everything that talks to the remote service
//! depends on this module for a bearer token.

pub mod manager;
pub mod ports;

pub use manager::SessionManager;
pub use ports::{AccessTokenProvider, AuthClient, CredentialStore, RefreshOutcome, SecretPrompt};
