//! Day reconciliation
//!
//! Makes a remote day's entry set match a locally compiled timesheet via
//! full delete-then-reinsert; no diffing.

pub mod ports;
pub mod service;

pub use ports::{InsertOutcome, NewWorkLog, Project, TimeLogClient, WorkLog, WorkLogId};
pub use service::DaySyncService;
