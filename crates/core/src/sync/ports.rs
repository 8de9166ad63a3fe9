//! Port interface for the remote time-log service

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, Utc};
use hourbridge_domain::Result;

/// Remote log entry identifier
pub type WorkLogId = i64;

/// A project from the remote catalogue, in listing order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub id: String,
    pub name: String,
}

/// A log entry owned by the remote service.
///
/// Only `id` is guaranteed; the service omits fields freely, and the
/// reconciliation protocol needs nothing beyond the id to clear a day.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WorkLog {
    pub id: WorkLogId,
    pub project_id: Option<String>,
    pub note: Option<String>,
    pub date: Option<NaiveDate>,
    pub start: Option<DateTime<Utc>>,
    pub end: Option<DateTime<Utc>>,
}

/// A log entry to be created remotely.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewWorkLog {
    pub project_id: String,
    pub note: String,
    /// Calendar date of the entry in the item's local time
    pub date: NaiveDate,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Result of an insert the service accepted or selectively rejected.
///
/// A rejected archived-project insert is a recorded non-fatal outcome, not
/// an error; every other rejection surfaces as `BridgeError::Remote`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    SkippedArchived(String),
}

/// Remote time-log operations.
///
/// Implementations acquire a bearer token immediately before each call and
/// never cache one across calls.
#[async_trait]
pub trait TimeLogClient: Send + Sync {
    /// Fetch the project catalogue in listing order.
    async fn list_projects(&self) -> Result<Vec<Project>>;

    /// Fetch every log entry for a calendar date.
    async fn list_day_entries(&self, date: NaiveDate) -> Result<Vec<WorkLog>>;

    /// Create a log entry.
    async fn insert_entry(&self, entry: &NewWorkLog) -> Result<InsertOutcome>;

    /// Delete a log entry by id.
    async fn delete_entry(&self, id: WorkLogId) -> Result<()>;
}
