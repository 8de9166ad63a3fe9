//! # Hourbridge Core
//!
//! Pure business logic layer - no infrastructure dependencies.
//!
//! This crate contains:
//! - The session lifecycle (token refresh, invalidation recovery)
//! - The day-reconciliation protocol (delete-then-reinsert)
//! - Plan and timesheet compilation
//! - Port/adapter interfaces (traits)
//!
//! ## Architecture Principles
//! - Only depends on `hourbridge-domain`
//! - No HTTP, filesystem, or terminal code
//! - All external dependencies via traits
//! - Pure, testable business logic

pub mod capabilities;
pub mod plan;
pub mod session;
pub mod sync;

// Re-export specific items to avoid ambiguity
pub use capabilities::{Audience, PlanSource};
pub use plan::{build_plan, compile_timesheet};
pub use session::ports::{AccessTokenProvider, AuthClient, CredentialStore, RefreshOutcome, SecretPrompt};
pub use session::SessionManager;
pub use sync::ports::{InsertOutcome, NewWorkLog, Project, TimeLogClient, WorkLog, WorkLogId};
pub use sync::DaySyncService;
