//! MyHours token endpoints
//!
//! Implements the provider's two-call token flow. Status handling is fixed
//! by the session lifecycle contract: 200 yields a credential triple, 401
//! is a typed signal (`InvalidCredentials` on login, `NeedsReauth` on
//! refresh), anything else is a non-recoverable authentication error.

use async_trait::async_trait;
use hourbridge_core::session::ports::{AuthClient, RefreshOutcome};
use hourbridge_domain::{BridgeError, Credential, Result};
use reqwest::{Method, Response, StatusCode};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use crate::http::HttpClient;

/// Client id the provider expects on login calls.
const CLIENT_ID: &str = "api";

/// Client for the MyHours token endpoints.
pub struct MyHoursAuthClient {
    base_url: String,
    http: HttpClient,
}

impl MyHoursAuthClient {
    /// Create a new auth client.
    ///
    /// # Arguments
    /// * `base_url` - API base, e.g. `https://api2.myhours.com/api`
    /// * `http` - Shared HTTP client
    pub fn new(base_url: String, http: HttpClient) -> Self {
        Self { base_url, http }
    }
}

#[derive(Serialize)]
struct LoginRequest<'a> {
    granttype: &'a str,
    email: &'a str,
    password: &'a str,
    #[serde(rename = "clientId")]
    client_id: &'a str,
}

#[derive(Serialize)]
struct RefreshRequest<'a> {
    granttype: &'a str,
    #[serde(rename = "refreshToken")]
    refresh_token: &'a str,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenResponse {
    access_token: String,
    refresh_token: String,
    expires_in: i64,
}

async fn credential_from(response: Response) -> Result<Credential> {
    let body: TokenResponse = response
        .json()
        .await
        .map_err(|err| BridgeError::Internal(format!("failed to parse token response: {err}")))?;
    Ok(Credential::new(body.access_token, body.refresh_token, body.expires_in))
}

#[async_trait]
impl AuthClient for MyHoursAuthClient {
    async fn login(&self, email: &str, password: &str) -> Result<Credential> {
        info!(email, "logging in to MyHours");
        let url = format!("{}/tokens/login", self.base_url);
        let request = self.http.request(Method::POST, &url).json(&LoginRequest {
            granttype: "password",
            email,
            password,
            client_id: CLIENT_ID,
        });

        let response = self.http.send(request).await?;
        match response.status() {
            StatusCode::OK => credential_from(response).await,
            StatusCode::UNAUTHORIZED => Err(BridgeError::InvalidCredentials),
            status => Err(BridgeError::AuthFailed { status: status.as_u16() }),
        }
    }

    async fn refresh(&self, credential: &Credential) -> Result<RefreshOutcome> {
        let url = format!("{}/tokens/refresh", self.base_url);
        let request = self
            .http
            .request(Method::POST, &url)
            .bearer_auth(&credential.access_token)
            .json(&RefreshRequest {
                granttype: "refresh_token",
                refresh_token: &credential.refresh_token,
            });

        let response = self.http.send(request).await?;
        match response.status() {
            StatusCode::OK => Ok(RefreshOutcome::Refreshed(credential_from(response).await?)),
            StatusCode::UNAUTHORIZED => {
                debug!("refresh token rejected by provider");
                Ok(RefreshOutcome::NeedsReauth)
            }
            status => Err(BridgeError::RefreshFailed { status: status.as_u16() }),
        }
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use serde_json::json;
    use wiremock::matchers::{body_partial_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn token_body(access: &str) -> serde_json::Value {
        json!({
            "accessToken": access,
            "refreshToken": "refresh-1",
            "expiresIn": 3600
        })
    }

    fn auth_client(server: &MockServer) -> MyHoursAuthClient {
        MyHoursAuthClient::new(server.uri(), HttpClient::new().expect("http client"))
    }

    #[tokio::test]
    async fn login_sends_password_grant_and_returns_credential() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tokens/login"))
            .and(body_partial_json(json!({
                "granttype": "password",
                "email": "user@example.com",
                "password": "hunter2",
                "clientId": "api"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-1")))
            .expect(1)
            .mount(&server)
            .await;

        let before = Utc::now();
        let credential =
            auth_client(&server).login("user@example.com", "hunter2").await.expect("credential");

        assert_eq!(credential.access_token, "access-1");
        assert_eq!(credential.refresh_token, "refresh-1");
        assert_eq!(credential.expires_in, 3600);
        assert!(credential.expires_at >= before + chrono::Duration::seconds(3600));
    }

    #[tokio::test]
    async fn login_401_is_invalid_credentials() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tokens/login"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let result = auth_client(&server).login("user@example.com", "wrong").await;

        assert!(matches!(result, Err(BridgeError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn login_other_status_is_auth_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tokens/login"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let result = auth_client(&server).login("user@example.com", "hunter2").await;

        assert!(matches!(result, Err(BridgeError::AuthFailed { status: 500 })));
    }

    #[tokio::test]
    async fn refresh_exchanges_refresh_token_with_bearer_header() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tokens/refresh"))
            .and(header("Authorization", "Bearer old-access"))
            .and(body_partial_json(json!({
                "granttype": "refresh_token",
                "refreshToken": "old-refresh"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(token_body("access-2")))
            .expect(1)
            .mount(&server)
            .await;

        let stale = Credential::new("old-access".into(), "old-refresh".into(), 60);
        let outcome = auth_client(&server).refresh(&stale).await.expect("outcome");

        let RefreshOutcome::Refreshed(fresh) = outcome else {
            panic!("expected a refreshed credential");
        };
        assert_eq!(fresh.access_token, "access-2");
        assert!(fresh.expires_at > stale.expires_at);
    }

    #[tokio::test]
    async fn refresh_401_is_needs_reauth_not_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tokens/refresh"))
            .respond_with(ResponseTemplate::new(401))
            .mount(&server)
            .await;

        let stale = Credential::new("old-access".into(), "old-refresh".into(), 60);
        let outcome = auth_client(&server).refresh(&stale).await.expect("outcome");

        assert_eq!(outcome, RefreshOutcome::NeedsReauth);
    }

    #[tokio::test]
    async fn refresh_other_status_is_refresh_failed() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tokens/refresh"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&server)
            .await;

        let stale = Credential::new("old-access".into(), "old-refresh".into(), 60);
        let result = auth_client(&server).refresh(&stale).await;

        assert!(matches!(result, Err(BridgeError::RefreshFailed { status: 503 })));
    }

    #[tokio::test]
    async fn malformed_token_body_is_internal_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/tokens/login"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let result = auth_client(&server).login("user@example.com", "hunter2").await;

        assert!(matches!(result, Err(BridgeError::Internal(_))));
    }
}
