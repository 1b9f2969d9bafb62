//! # API Client
//!
//! Shared HTTP client for backend communication. Every request goes through
//! [`ApiClient::dispatch`], which attaches the bearer token from the session,
//! tags the request with an id, sends it, and runs the response interceptor.

use std::time::{Duration, Instant};

use async_channel::Sender;
use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::multipart::{Form, Part};
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use tracing::Instrument;

use super::error::ApiError;
use super::interceptor::ResponseInterceptor;
use super::request::{ApiRequest, RequestBody};
use crate::app::{AppEvent, Session};

/// Default backend address
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:8080";

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

/// Header carrying the per-request id
pub const REQUEST_ID_HEADER: &str = "x-request-id";

/// Backend connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: DEFAULT_TIMEOUT,
        }
    }
}

impl ApiConfig {
    /// Load configuration from environment variables
    ///
    /// - `DASHBOARD_API_URL`: backend base URL
    /// - `DASHBOARD_API_TIMEOUT_MS`: request timeout in milliseconds
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: std::env::var("DASHBOARD_API_URL").unwrap_or(defaults.base_url),
            timeout: std::env::var("DASHBOARD_API_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.timeout),
        }
    }
}

/// HTTP client for the analytics backend.
///
/// Cloning is cheap: the connection pool, session and event channel are shared.
#[derive(Clone)]
pub struct ApiClient {
    pub(crate) client: Client,
    config: ApiConfig,
    session: Session,
    interceptor: ResponseInterceptor,
}

impl ApiClient {
    /// Create a client bound to `session`. Interceptor side effects are
    /// reported on `events`.
    pub fn new(
        config: ApiConfig,
        session: Session,
        events: Sender<AppEvent>,
    ) -> Result<Self, ApiError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ApiError::Request(format!("failed to build HTTP client: {}", e)))?;

        let interceptor = ResponseInterceptor::new(session.clone(), events);

        Ok(Self {
            client,
            config,
            session,
            interceptor,
        })
    }

    pub fn config(&self) -> &ApiConfig {
        &self.config
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    /// Turn a descriptor into a concrete request.
    ///
    /// The `Authorization: Bearer <token>` header is set whenever the session
    /// holds a token and omitted otherwise.
    pub fn build_request(&self, request: ApiRequest) -> Result<reqwest::Request, ApiError> {
        let ApiRequest {
            method,
            path,
            body,
            headers,
        } = request;

        let mut builder = self.client.request(method, self.url(&path));

        builder = match body {
            RequestBody::Empty => builder,
            RequestBody::Json(value) => builder.json(&value),
            RequestBody::Form(fields) => builder.form(&fields),
            RequestBody::Multipart(upload) => {
                let part = Part::bytes(upload.contents)
                    .file_name(upload.file_name)
                    .mime_str("text/csv")
                    .map_err(|e| ApiError::Request(e.to_string()))?;
                builder.multipart(Form::new().part("file", part))
            }
        };

        // Session values are inserted over any override so each header is sent once.
        let mut headers = headers;
        if let Some(token) = self.session.token() {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token))
                .map_err(|e| ApiError::Request(format!("invalid token: {}", e)))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }
        let request_id = HeaderValue::from_str(&uuid::Uuid::new_v4().to_string())
            .map_err(|e| ApiError::Request(e.to_string()))?;
        headers.insert(REQUEST_ID_HEADER, request_id);

        builder
            .headers(headers)
            .build()
            .map_err(|e| ApiError::Request(e.to_string()))
    }

    /// Send a request and apply the global response policy.
    pub async fn dispatch(&self, request: ApiRequest) -> Result<Response, ApiError> {
        let request = self.build_request(request)?;
        let request_id = request
            .headers()
            .get(REQUEST_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .unwrap_or_default()
            .to_string();

        let span = tracing::info_span!(
            "api_request",
            request_id = %request_id,
            method = %request.method(),
            path = %request.url().path(),
        );

        let start = Instant::now();
        let outcome = self.client.execute(request).instrument(span.clone()).await;

        span.in_scope(|| match &outcome {
            Ok(response) => tracing::debug!(
                status = response.status().as_u16(),
                duration_ms = start.elapsed().as_millis(),
                "Response received"
            ),
            Err(e) => tracing::debug!(
                error = %e,
                duration_ms = start.elapsed().as_millis(),
                "No response received"
            ),
        });

        span.in_scope(|| self.interceptor.on_response(outcome))
    }

    /// Dispatch and decode a JSON response body.
    ///
    /// The body is read before decoding so that a transfer cut short by a
    /// timeout or reset counts as a network failure, not a malformed body.
    pub(crate) async fn fetch_json<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(request).await?;
        let body = response
            .bytes()
            .await
            .map_err(|e| self.interceptor.reject(ApiError::Network(e.to_string())))?;

        serde_json::from_slice::<T>(&body)
            .map_err(|e| self.interceptor.reject(ApiError::Decode(e.to_string())))
    }
}
