//! Plan model produced by a plan pull

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A day plan derived from the remote project catalogue plus static defaults.
///
/// The tracker mapping (external project id → display name) is fetched fresh
/// on every pull and never cached across calls.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Plan {
    /// Identity of the integration that produced this plan
    pub source: String,
    pub valid_from: NaiveDate,
    pub valid_until: Option<NaiveDate>,
    pub roles: Vec<String>,
    pub objectives: Vec<String>,
    pub actions: Vec<String>,
    pub subjects: Vec<String>,
    pub trackers: BTreeMap<String, String>,
}
