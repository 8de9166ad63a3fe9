//! Durable state

pub mod credential_store;

pub use credential_store::TomlCredentialStore;
