//! Configuration structures
//!
//! Loaded by `hourbridge-infra`'s loader from environment variables or a
//! TOML file; see that crate for the loading strategy.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Statically configured plan vocabulary merged into every pulled plan.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDefaults {
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub objectives: Vec<String>,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub subjects: Vec<String>,
}

/// Top-level integration configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    /// Account email used for the initial login
    pub email: String,

    /// Actor recorded on compiled timesheets
    pub actor: String,

    /// Identity of this integration; doubles as the tracker namespace prefix
    /// and the audience tag on submission metadata
    #[serde(default = "default_audience_id")]
    pub audience_id: String,

    /// Directory holding the persisted credential file
    pub state_dir: PathBuf,

    /// Remote API base URL; only overridden in tests
    #[serde(default)]
    pub base_url: Option<String>,

    #[serde(default)]
    pub defaults: PlanDefaults,
}

/// Audience id used when none is configured.
pub fn default_audience_id() -> String {
    "myhours".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_config_fills_defaults() {
        let config: BridgeConfig = toml::from_str(
            r#"
            email = "user@example.com"
            actor = "user"
            state_dir = "/tmp/hourbridge"
            "#,
        )
        .unwrap();

        assert_eq!(config.audience_id, "myhours");
        assert!(config.base_url.is_none());
        assert!(config.defaults.roles.is_empty());
    }

    #[test]
    fn defaults_table_is_parsed() {
        let config: BridgeConfig = toml::from_str(
            r#"
            email = "user@example.com"
            actor = "user"
            audience_id = "element"
            state_dir = "/tmp/hourbridge"

            [defaults]
            roles = ["engineer"]
            subjects = ["internal/ops"]
            "#,
        )
        .unwrap();

        assert_eq!(config.audience_id, "element");
        assert_eq!(config.defaults.roles, vec!["engineer".to_string()]);
        assert_eq!(config.defaults.subjects, vec!["internal/ops".to_string()]);
        assert!(config.defaults.objectives.is_empty());
    }
}
