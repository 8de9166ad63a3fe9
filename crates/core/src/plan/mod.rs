//! Plan and timesheet compilation

pub mod service;

pub use service::{build_plan, compile_timesheet};
