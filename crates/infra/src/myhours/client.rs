//! MyHours log and project endpoints

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, SecondsFormat, Utc};
use hourbridge_core::session::ports::AccessTokenProvider;
use hourbridge_core::sync::ports::{
    InsertOutcome, NewWorkLog, Project, TimeLogClient, WorkLog, WorkLogId,
};
use hourbridge_domain::{BridgeError, Result};
use reqwest::{Method, Response};
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::rejection::{classify_insert_rejection, InsertRejection};
use crate::http::HttpClient;

/// Fixed page size for day listings; one bounded call covers a day.
const DAY_PAGE_SIZE: u32 = 100;

/// REST client for the MyHours log and project endpoints.
///
/// A bearer token is acquired from the provider port immediately before
/// every call; no token is cached here.
pub struct MyHoursClient {
    base_url: String,
    http: HttpClient,
    tokens: Arc<dyn AccessTokenProvider>,
}

impl MyHoursClient {
    /// Create a new client.
    pub fn new(base_url: String, http: HttpClient, tokens: Arc<dyn AccessTokenProvider>) -> Self {
        Self { base_url, http, tokens }
    }

    async fn unexpected_status(response: Response) -> BridgeError {
        let status = response.status().as_u16();
        let body = response.text().await.unwrap_or_default();
        BridgeError::Remote { status, body }
    }
}

// =============================================================================
// Wire types
// =============================================================================

#[derive(Debug, Deserialize)]
struct ProjectDto {
    id: i64,
    name: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WorkLogDto {
    id: WorkLogId,
    #[serde(default)]
    project_id: Option<i64>,
    #[serde(default)]
    note: Option<String>,
    #[serde(default)]
    date: Option<NaiveDate>,
    #[serde(default)]
    start: Option<DateTime<Utc>>,
    #[serde(default)]
    end: Option<DateTime<Utc>>,
}

impl From<WorkLogDto> for WorkLog {
    fn from(dto: WorkLogDto) -> Self {
        Self {
            id: dto.id,
            project_id: dto.project_id.map(|id| id.to_string()),
            note: dto.note,
            date: dto.date,
            start: dto.start,
            end: dto.end,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct InsertLogRequest<'a> {
    project_id: &'a str,
    note: &'a str,
    date: String,
    start: String,
    end: String,
}

impl<'a> From<&'a NewWorkLog> for InsertLogRequest<'a> {
    fn from(entry: &'a NewWorkLog) -> Self {
        Self {
            project_id: &entry.project_id,
            note: &entry.note,
            date: entry.date.format("%Y-%m-%d").to_string(),
            start: entry.start.to_rfc3339_opts(SecondsFormat::Secs, true),
            end: entry.end.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

#[async_trait]
impl TimeLogClient for MyHoursClient {
    async fn list_projects(&self) -> Result<Vec<Project>> {
        let token = self.tokens.access_token().await?;
        let url = format!("{}/projects", self.base_url);

        let response = self.http.send(self.http.request(Method::GET, &url).bearer_auth(&token)).await?;
        if !response.status().is_success() {
            return Err(Self::unexpected_status(response).await);
        }

        let projects: Vec<ProjectDto> = response.json().await.map_err(|err| {
            BridgeError::Internal(format!("failed to parse project listing: {err}"))
        })?;
        debug!(count = projects.len(), "fetched project catalogue");

        Ok(projects
            .into_iter()
            .map(|dto| Project { id: dto.id.to_string(), name: dto.name })
            .collect())
    }

    async fn list_day_entries(&self, date: NaiveDate) -> Result<Vec<WorkLog>> {
        let token = self.tokens.access_token().await?;
        let url = format!("{}/Logs", self.base_url);

        let request = self
            .http
            .request(Method::GET, &url)
            .bearer_auth(&token)
            .query(&[("date", date.to_string()), ("step", DAY_PAGE_SIZE.to_string())]);

        let response = self.http.send(request).await?;
        if !response.status().is_success() {
            return Err(Self::unexpected_status(response).await);
        }

        let entries: Vec<WorkLogDto> = response.json().await.map_err(|err| {
            BridgeError::Internal(format!("failed to parse day listing: {err}"))
        })?;
        debug!(count = entries.len(), %date, "fetched day entries");

        Ok(entries.into_iter().map(WorkLog::from).collect())
    }

    async fn insert_entry(&self, entry: &NewWorkLog) -> Result<InsertOutcome> {
        let token = self.tokens.access_token().await?;
        let url = format!("{}/Logs/insertlog", self.base_url);

        let request = self
            .http
            .request(Method::POST, &url)
            .bearer_auth(&token)
            .json(&InsertLogRequest::from(entry));

        let response = self.http.send(request).await?;
        let status = response.status();
        if status.is_success() {
            debug!(project_id = %entry.project_id, "inserted log entry");
            return Ok(InsertOutcome::Inserted);
        }

        let body = response.text().await.unwrap_or_default();
        match classify_insert_rejection(status, &body) {
            InsertRejection::ArchivedProject(reason) => Ok(InsertOutcome::SkippedArchived(reason)),
            InsertRejection::Other => {
                Err(BridgeError::Remote { status: status.as_u16(), body })
            }
        }
    }

    async fn delete_entry(&self, id: WorkLogId) -> Result<()> {
        let token = self.tokens.access_token().await?;
        let url = format!("{}/Logs/{id}", self.base_url);

        let response =
            self.http.send(self.http.request(Method::DELETE, &url).bearer_auth(&token)).await?;
        if !response.status().is_success() {
            return Err(Self::unexpected_status(response).await);
        }

        debug!(id, "deleted remote entry");
        Ok(())
    }
}
