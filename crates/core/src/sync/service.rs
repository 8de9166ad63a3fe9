//! Day synchronizer - delete-then-reinsert reconciliation

use std::sync::Arc;

use chrono::{NaiveDate, Utc};
use hourbridge_domain::{
    Result, SkipReason, SkippedItem, SubmissionOutcome, SubmissionReport, Timesheet,
};
use tracing::{debug, info, warn};

use super::ports::{InsertOutcome, NewWorkLog, TimeLogClient};

/// Reconciles one remote day against a compiled timesheet.
pub struct DaySyncService {
    client: Arc<dyn TimeLogClient>,
    /// Tracker namespace recognized when extracting project ids
    audience_id: String,
}

impl DaySyncService {
    /// Create a new day synchronizer.
    pub fn new(client: Arc<dyn TimeLogClient>, audience_id: String) -> Self {
        Self { client, audience_id }
    }

    /// Check whether the remote day has no entries.
    pub async fn day_is_empty(&self, date: NaiveDate) -> Result<bool> {
        Ok(self.client.list_day_entries(date).await?.is_empty())
    }

    /// Replace the remote day's entries with the timesheet's timeline.
    ///
    /// An empty timeline is a no-op: an incomplete local build must never
    /// wipe remote entries. Otherwise every pre-existing entry is deleted in
    /// listing order before any insert; a deletion failure aborts the whole
    /// submission. Inserts rejected for an archived project are skipped and
    /// recorded, any other insert failure aborts.
    pub async fn submit_timesheet(&self, timesheet: &Timesheet) -> Result<SubmissionReport> {
        if timesheet.is_empty() {
            warn!(date = %timesheet.date, "timesheet has no timeline items; skipping submission");
            return Ok(SubmissionReport::skipped_empty());
        }

        let existing = self.client.list_day_entries(timesheet.date).await?;
        info!(
            date = %timesheet.date,
            existing = existing.len(),
            items = timesheet.timeline.len(),
            "reconciling remote day"
        );

        for entry in &existing {
            debug!(id = entry.id, "deleting remote entry");
            self.client.delete_entry(entry.id).await?;
        }

        let mut inserted = 0;
        let mut skipped = Vec::new();

        for item in &timesheet.timeline {
            let Some(tracker) = item.intent.trackers.first() else {
                warn!(alias = %item.alias, "skipping timeline item: no trackers found");
                skipped.push(SkippedItem {
                    alias: item.alias.clone(),
                    reason: SkipReason::MissingTracker,
                });
                continue;
            };

            let entry = NewWorkLog {
                project_id: tracker_project_id(tracker, &self.audience_id).to_string(),
                note: item.alias.clone(),
                date: item.start.date_naive(),
                start: item.start.with_timezone(&Utc),
                end: item.end.with_timezone(&Utc),
            };

            match self.client.insert_entry(&entry).await? {
                InsertOutcome::Inserted => inserted += 1,
                InsertOutcome::SkippedArchived(reason) => {
                    warn!(
                        alias = %item.alias,
                        reason = %reason,
                        "entry rejected for archived project; continuing"
                    );
                    skipped.push(SkippedItem {
                        alias: item.alias.clone(),
                        reason: SkipReason::ArchivedProject(reason),
                    });
                }
            }
        }

        let outcome = if skipped.is_empty() {
            SubmissionOutcome::Submitted
        } else {
            SubmissionOutcome::PartiallySubmitted
        };
        info!(inserted, skipped = skipped.len(), deleted = existing.len(), "day submitted");

        Ok(SubmissionReport { outcome, deleted: existing.len(), inserted, skipped })
    }
}

/// Extract the external project id from a tracker identifier.
///
/// A recognized `"<namespace>:"` prefix is stripped; anything else is used
/// as-is for backwards compatibility with un-namespaced trackers.
#[must_use]
pub fn tracker_project_id<'a>(tracker: &'a str, namespace: &str) -> &'a str {
    match tracker.split_once(':') {
        Some((ns, rest)) if ns == namespace => rest,
        _ => tracker,
    }
}
