//! MyHours integration facade
//!
//! Wires the session manager, REST client and day synchronizer into the two
//! capabilities a host application consumes: `PlanSource` and `Audience`.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::NaiveDate;
use hourbridge_core::capabilities::{Audience, PlanSource};
use hourbridge_core::session::ports::AccessTokenProvider;
use hourbridge_core::session::SessionManager;
use hourbridge_core::sync::ports::TimeLogClient;
use hourbridge_core::sync::DaySyncService;
use hourbridge_core::{build_plan, compile_timesheet};
use hourbridge_domain::{BridgeConfig, Log, Plan, PlanDefaults, Result, SubmissionReport, Timesheet};
use tracing::info;

use super::auth::MyHoursAuthClient;
use super::client::MyHoursClient;
use super::DEFAULT_BASE_URL;
use crate::http::HttpClient;
use crate::prompt::TerminalPrompt;
use crate::state::TomlCredentialStore;

/// The MyHours integration, acting as both a plan source and an audience.
pub struct MyHoursIntegration {
    id: String,
    actor: String,
    defaults: PlanDefaults,
    client: Arc<MyHoursClient>,
    sync: DaySyncService,
}

impl MyHoursIntegration {
    /// Wire the full production stack from configuration.
    ///
    /// Builds the HTTP client, the token endpoints, the on-disk credential
    /// store and the terminal prompt, and stacks the session manager on top
    /// as the token provider for every API call.
    pub fn from_config(config: &BridgeConfig) -> Result<Self> {
        let http = HttpClient::new()?;
        let base_url =
            config.base_url.clone().unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

        let session = SessionManager::new(
            MyHoursAuthClient::new(base_url.clone(), http.clone()),
            TomlCredentialStore::new(&config.state_dir),
            TerminalPrompt::new(),
            config.email.clone(),
        );

        Ok(Self::with_token_provider(config, base_url, http, Arc::new(session)))
    }

    /// Wire the integration around an externally supplied token provider.
    ///
    /// Used by tests to swap the interactive session for a canned token.
    pub fn with_token_provider(
        config: &BridgeConfig,
        base_url: String,
        http: HttpClient,
        tokens: Arc<dyn AccessTokenProvider>,
    ) -> Self {
        let client = Arc::new(MyHoursClient::new(base_url, http, tokens));
        let log_client: Arc<dyn TimeLogClient> = client.clone();
        let sync = DaySyncService::new(log_client, config.audience_id.clone());

        Self {
            id: config.audience_id.clone(),
            actor: config.actor.clone(),
            defaults: config.defaults.clone(),
            client,
            sync,
        }
    }

    /// Check whether the remote day has no entries.
    pub async fn day_is_empty(&self, date: NaiveDate) -> Result<bool> {
        self.sync.day_is_empty(date).await
    }
}

#[async_trait]
impl PlanSource for MyHoursIntegration {
    async fn pull_plan(&self, date: NaiveDate) -> Result<Plan> {
        info!(%date, "pulling MyHours plan");
        let projects = self.client.list_projects().await?;
        Ok(build_plan(date, &projects, &self.defaults, &self.id))
    }
}

#[async_trait]
impl Audience for MyHoursIntegration {
    fn compile_timesheet(&self, log: &Log) -> Timesheet {
        compile_timesheet(log, &self.actor, &self.id)
    }

    async fn submit_timesheet(&self, timesheet: &Timesheet) -> Result<SubmissionReport> {
        self.sync.submit_timesheet(timesheet).await
    }
}
