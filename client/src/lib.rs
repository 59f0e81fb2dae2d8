//! Mastodon REST API client.
//!
//! # Architecture
//!
//! [`Mastodon`] wraps an HTTP client pointed at a single instance. It is
//! constructed from the instance base URL; a bearer token can be attached
//! with [`Mastodon::with_token`] for endpoints that require authorization.
//!
//! | Operation | Endpoint |
//! |-----------|----------|
//! | [`Mastodon::register_app`] | `POST /api/v1/apps` |
//! | [`Mastodon::obtain_token`] | `POST /api/v1/oauth/token` |
//! | [`Mastodon::public_timeline`] | `GET /api/v1/timelines/public` |
//! | [`Mastodon::status`] | `GET /api/v1/statuses/{id}` |
//!
//! Responses deserialize into the entities from [`tootkit_types`].
//!
//! # Error Handling
//!
//! All operations return [`ClientError`]. Non-success statuses are captured
//! as [`ClientError::Api`] with a truncated copy of the response body; they
//! are never decoded as entities. Idempotent GET operations retry transient
//! failures per the policy in [`retry`]; POST operations never retry.

mod error;
mod requests;
pub mod retry;

pub use error::ClientError;
pub use requests::{AppRegistration, TokenRequest};

pub use tootkit_types;

use crate::retry::RetryConfig;
use reqwest::redirect::Policy;
use reqwest::{Client, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use std::time::Duration;
use tokio::time::sleep;
use tootkit_types::{AccessToken, RegisteredApp, Status};
use url::Url;

const APPS_PATH: &str = "/api/v1/apps";
const OAUTH_TOKEN_PATH: &str = "/api/v1/oauth/token";
const PUBLIC_TIMELINE_PATH: &str = "/api/v1/timelines/public";
const STATUSES_PATH: &str = "/api/v1/statuses";

const CONNECT_TIMEOUT_SECS: u64 = 30;
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Cap on captured error response bodies.
const MAX_ERROR_BODY_BYTES: usize = 32 * 1024;

/// A client for one Mastodon instance.
#[derive(Debug, Clone)]
pub struct Mastodon {
    base: Url,
    http: Client,
    token: Option<String>,
    retry: RetryConfig,
}

impl Mastodon {
    /// A client for the instance at `base_url`.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        let base = Url::parse(base_url)?;
        let http = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .redirect(Policy::none())
            .build()?;
        Ok(Mastodon {
            base,
            http,
            token: None,
            retry: RetryConfig::default(),
        })
    }

    /// Attach a bearer token, sent with every subsequent request.
    #[must_use]
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Replace the retry policy for idempotent requests.
    #[must_use]
    pub fn with_retry(mut self, retry: RetryConfig) -> Self {
        self.retry = retry;
        self
    }

    /// Register an application with the instance.
    ///
    /// See <https://docs.joinmastodon.org/methods/apps/#create>.
    pub async fn register_app(
        &self,
        registration: AppRegistration,
    ) -> Result<RegisteredApp, ClientError> {
        self.post_json(APPS_PATH, &registration).await
    }

    /// Obtain an OAuth token.
    ///
    /// See <https://docs.joinmastodon.org/methods/oauth/#token>.
    pub async fn obtain_token(&self, request: TokenRequest) -> Result<AccessToken, ClientError> {
        self.post_json(OAUTH_TOKEN_PATH, &request).await
    }

    /// View the public timeline.
    ///
    /// See <https://docs.joinmastodon.org/methods/timelines/#public>.
    pub async fn public_timeline(&self) -> Result<Vec<Status>, ClientError> {
        self.get_json(PUBLIC_TIMELINE_PATH).await
    }

    /// View a single status.
    ///
    /// See <https://docs.joinmastodon.org/methods/statuses/#get>.
    pub async fn status(&self, id: &str) -> Result<Status, ClientError> {
        self.get_json(&format!("{STATUSES_PATH}/{id}")).await
    }

    fn endpoint(&self, path: &str) -> Result<Url, ClientError> {
        Ok(self.base.join(path)?)
    }

    async fn get_json<T>(&self, path: &str) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
    {
        let url = self.endpoint(path)?;
        let mut backoff_step = 0;
        loop {
            tracing::debug!(%url, "sending GET request");
            match self.authorized(self.http.get(url.clone())).send().await {
                Ok(response) => {
                    let status = response.status();
                    if status.is_success() {
                        return decode_body(response).await;
                    }
                    let retryable = retry::is_retryable_status(status);
                    if backoff_step < self.retry.max_retries && retryable {
                        let headers = response.headers();
                        let delay = retry::backoff_delay(backoff_step, &self.retry, Some(headers));
                        tracing::warn!(%url, %status, ?delay, "retrying after non-success status");
                        sleep(delay).await;
                        backoff_step += 1;
                        continue;
                    }
                    return Err(api_error(response).await);
                }
                Err(e) => {
                    let retryable = e.is_connect() || e.is_timeout();
                    if backoff_step < self.retry.max_retries && retryable {
                        let delay = retry::backoff_delay(backoff_step, &self.retry, None);
                        tracing::warn!(%url, error = %e, ?delay, "retrying after transport error");
                        sleep(delay).await;
                        backoff_step += 1;
                        continue;
                    }
                    return Err(ClientError::Transport(e));
                }
            }
        }
    }

    async fn post_json<T, B>(&self, path: &str, body: &B) -> Result<T, ClientError>
    where
        T: DeserializeOwned,
        B: Serialize,
    {
        let url = self.endpoint(path)?;
        tracing::debug!(%url, "sending POST request");
        let response = self.authorized(self.http.post(url)).json(body).send().await?;
        if response.status().is_success() {
            decode_body(response).await
        } else {
            Err(api_error(response).await)
        }
    }

    fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        if let Some(token) = &self.token {
            builder.bearer_auth(token)
        } else {
            builder
        }
    }
}

async fn decode_body<T>(response: Response) -> Result<T, ClientError>
where
    T: DeserializeOwned,
{
    let bytes = response.bytes().await?;
    Ok(serde_json::from_slice(&bytes)?)
}

async fn api_error(response: Response) -> ClientError {
    let status = response.status();
    let body = match response.bytes().await {
        Ok(bytes) => {
            let truncated = &bytes[..bytes.len().min(MAX_ERROR_BODY_BYTES)];
            String::from_utf8_lossy(truncated).into_owned()
        }
        Err(_) => String::new(),
    };
    tracing::warn!(%status, "request failed");
    ClientError::Api { status, body }
}
