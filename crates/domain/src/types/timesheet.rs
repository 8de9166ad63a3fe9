//! Log and timesheet models consumed from the host planner
//!
//! The host application builds a dated `Log` of timeline items; hourbridge
//! filters it into a `Timesheet` and pushes that to the remote service. These
//! types mirror the collaborator contract and are never persisted here.

use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// What a timeline item was spent on.
///
/// Tracker identifiers are namespaced strings (`"<audience>:<project id>"`);
/// an item may carry none at all, in which case it cannot be submitted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub trackers: Vec<String>,
}

/// A single contiguous interval of work.
///
/// Start and end retain their zone offset so both the local calendar date
/// and the UTC instants stay recoverable at submission time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineItem {
    pub alias: String,
    pub intent: Intent,
    pub start: DateTime<FixedOffset>,
    pub end: DateTime<FixedOffset>,
}

/// One day of recorded work, as handed over by the host application.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Log {
    pub date: NaiveDate,
    pub timezone: String,
    pub timeline: Vec<TimelineItem>,
}

/// Submission metadata attached to a compiled timesheet.
///
/// `submitted_at` and `submitted_by` stay unset at compile time; the host
/// fills them in once a submission went through.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimesheetMeta {
    pub audience_id: String,
    pub submitted_at: Option<DateTime<Utc>>,
    pub submitted_by: Option<String>,
}

/// A compiled daily timesheet ready for submission.
///
/// Always produced by compilation, even when the filtered timeline is empty:
/// a compiled-but-empty timesheet is distinct from one that was never
/// compiled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timesheet {
    pub actor: String,
    pub date: NaiveDate,
    pub compiled: DateTime<Utc>,
    pub timezone: String,
    pub timeline: Vec<TimelineItem>,
    pub meta: TimesheetMeta,
}

impl Timesheet {
    /// True when the compiled timeline carries no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timeline.is_empty()
    }
}
