//! MyHours integration
//!
//! Adapters for the MyHours time-tracking API:
//!
//! - **Auth**: `MyHoursAuthClient` - the provider's two-call token flow
//!   (`/tokens/login`, `/tokens/refresh`)
//! - **Client**: `MyHoursClient` - project catalogue and day log endpoints
//! - **Rejection**: classification of the provider's untyped insert errors
//! - **Integration**: `MyHoursIntegration` - wires the session, client and
//!   day synchronizer into the `PlanSource` and `Audience` capabilities
//!
//! # Authentication
//!
//! Every API call acquires a bearer token through an `AccessTokenProvider`
//! immediately before the request. Production wiring uses the session
//! manager, which refreshes or re-authenticates as needed and is cheap when
//! the stored credential is still fresh.

pub mod auth;
pub mod client;
pub mod integration;
pub mod rejection;

pub use auth::MyHoursAuthClient;
pub use client::MyHoursClient;
pub use integration::MyHoursIntegration;

/// Production API base URL; overridden in tests via `BridgeConfig::base_url`.
pub const DEFAULT_BASE_URL: &str = "https://api2.myhours.com/api";
