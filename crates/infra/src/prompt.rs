//! Interactive password prompt
//!
//! Reads the login password from the terminal at initial login. The value
//! is handed straight to the login call and dropped; it is never logged and
//! never persisted.

use std::io::{BufRead, Write};

use async_trait::async_trait;
use hourbridge_core::session::ports::SecretPrompt;
use hourbridge_domain::{BridgeError, Result};

/// Prompt reading from standard input, announcing itself on standard error.
pub struct TerminalPrompt;

impl TerminalPrompt {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Default for TerminalPrompt {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SecretPrompt for TerminalPrompt {
    async fn read_password(&self, email: &str) -> Result<String> {
        let email = email.to_string();
        tokio::task::spawn_blocking(move || {
            let mut stderr = std::io::stderr();
            writeln!(stderr, "Please enter your password to authenticate with MyHours.")
                .and_then(|()| writeln!(stderr, "This password will not be stored."))
                .and_then(|()| write!(stderr, "Password for {email}: "))
                .and_then(|()| stderr.flush())
                .map_err(|err| BridgeError::Io(format!("failed to write prompt: {err}")))?;

            let mut password = String::new();
            std::io::stdin()
                .lock()
                .read_line(&mut password)
                .map_err(|err| BridgeError::Io(format!("failed to read password: {err}")))?;

            Ok(password.trim_end_matches(['\r', '\n']).to_string())
        })
        .await
        .map_err(|err| BridgeError::Internal(format!("prompt task failed: {err}")))?
    }
}
