//! Submission outcome reporting
//!
//! A day submission can drop individual entries without failing (the remote
//! service rejects entries for archived projects, and items without trackers
//! cannot be submitted at all). The report makes that partial success
//! explicit instead of letting it masquerade as a full submission.

use serde::{Deserialize, Serialize};

/// Why a timeline item was left out of an otherwise successful submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SkipReason {
    /// The item carried no tracker identifiers
    MissingTracker,
    /// The remote service rejected the insert because the project is archived
    ArchivedProject(String),
}

/// A timeline item that was skipped, with the reason recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedItem {
    pub alias: String,
    pub reason: SkipReason,
}

/// Terminal state of a day submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SubmissionOutcome {
    /// Every timeline item was inserted
    Submitted,
    /// The day was reconciled but one or more items were skipped
    PartiallySubmitted,
    /// The timesheet had no timeline items; no remote call was made
    SkippedEmptyTimeline,
}

/// Result of reconciling one remote day against a compiled timesheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionReport {
    pub outcome: SubmissionOutcome,
    /// Pre-existing remote entries removed before reinsertion
    pub deleted: usize,
    /// Timeline items successfully inserted
    pub inserted: usize,
    pub skipped: Vec<SkippedItem>,
}

impl SubmissionReport {
    /// Report for an empty timesheet that was never submitted.
    #[must_use]
    pub fn skipped_empty() -> Self {
        Self {
            outcome: SubmissionOutcome::SkippedEmptyTimeline,
            deleted: 0,
            inserted: 0,
            skipped: Vec::new(),
        }
    }
}
