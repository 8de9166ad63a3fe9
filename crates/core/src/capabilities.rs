//! Capability interfaces the integration offers to a host application
//!
//! The two roles have disjoint operation sets, so they are independent
//! traits rather than a shared base: a host may wire an integration as a
//! plan source, as an audience for compiled timesheets, or as both.

use async_trait::async_trait;
use chrono::NaiveDate;
use hourbridge_domain::{Log, Plan, Result, SubmissionReport, Timesheet};

/// Supplies day plans derived from remote state.
#[async_trait]
pub trait PlanSource: Send + Sync {
    /// Fetch remote state and derive a plan valid from `date`.
    async fn pull_plan(&self, date: NaiveDate) -> Result<Plan>;
}

/// Receives compiled timesheets.
#[async_trait]
pub trait Audience: Send + Sync {
    /// Filter a log down to the items this audience can accept and wrap
    /// them in a timesheet. Always produces a timesheet, even an empty one.
    fn compile_timesheet(&self, log: &Log) -> Timesheet;

    /// Reconcile the remote day with the compiled timesheet.
    async fn submit_timesheet(&self, timesheet: &Timesheet) -> Result<SubmissionReport>;
}
