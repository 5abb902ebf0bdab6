//! JSON HTTP Client
//!
//! Thin wrapper over `reqwest` for talking to a JSON API rooted at a base URL.
//! Non-2xx responses are not errors at this layer: callers receive the status
//! and the decoded body and decide what a failure means for their operation.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, StatusCode, Url};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use thiserror::Error;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP transport errors
#[derive(Debug, Error)]
pub enum HttpError {
    /// Base URL could not be parsed
    #[error("Invalid base URL: {0}")]
    InvalidBaseUrl(String),

    /// Request could not be sent or the response could not be read
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Successful response whose body is not the expected JSON
    #[error("Invalid JSON in {status} response: {source}")]
    Decode {
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

/// Decoded response: status plus JSON body (if any)
#[derive(Debug, Clone)]
pub struct JsonResponse {
    pub status: StatusCode,
    pub body: Option<Value>,
}

impl JsonResponse {
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }

    /// `message` field of an error payload, when the server sent one
    pub fn message(&self) -> Option<String> {
        self.body
            .as_ref()?
            .get("message")?
            .as_str()
            .map(str::to_owned)
    }

    /// Deserialize the body into `T` (an absent body is read as `null`)
    pub fn into_json<T: DeserializeOwned>(self) -> Result<T, HttpError> {
        let status = self.status;
        serde_json::from_value(self.body.unwrap_or(Value::Null))
            .map_err(|source| HttpError::Decode { status, source })
    }
}

/// JSON API client bound to a base URL
#[derive(Debug, Clone)]
pub struct JsonClient {
    http: Client,
    base_url: Url,
}

impl JsonClient {
    /// Create a client for `base_url` with the given request timeout
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, HttpError> {
        // A trailing slash keeps the last path segment when joining
        let normalized = format!("{}/", base_url.trim_end_matches('/'));
        let base_url =
            Url::parse(&normalized).map_err(|e| HttpError::InvalidBaseUrl(format!("{base_url}: {e}")))?;

        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self { http, base_url })
    }

    pub fn base_url(&self) -> &str {
        self.base_url.as_str()
    }

    /// GET `path`
    pub async fn get(&self, path: &str, bearer: Option<&str>) -> Result<JsonResponse, HttpError> {
        let request = self.request(Method::GET, path, bearer)?;
        self.execute(request).await
    }

    /// POST `body` as JSON to `path`
    pub async fn post<B>(
        &self,
        path: &str,
        bearer: Option<&str>,
        body: &B,
    ) -> Result<JsonResponse, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::POST, path, bearer)?.json(body);
        self.execute(request).await
    }

    /// PUT `body` as JSON to `path`
    pub async fn put<B>(
        &self,
        path: &str,
        bearer: Option<&str>,
        body: &B,
    ) -> Result<JsonResponse, HttpError>
    where
        B: Serialize + ?Sized,
    {
        let request = self.request(Method::PUT, path, bearer)?.json(body);
        self.execute(request).await
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        bearer: Option<&str>,
    ) -> Result<RequestBuilder, HttpError> {
        let url = self
            .base_url
            .join(path.trim_start_matches('/'))
            .map_err(|e| HttpError::InvalidBaseUrl(format!("{path}: {e}")))?;

        tracing::debug!(method = %method, url = %url, "Sending request");

        let mut request = self
            .http
            .request(method, url)
            .header(reqwest::header::ACCEPT, "application/json");
        if let Some(token) = bearer {
            request = request.bearer_auth(token);
        }
        Ok(request)
    }

    async fn execute(&self, request: RequestBuilder) -> Result<JsonResponse, HttpError> {
        let response = request.send().await?;
        let status = response.status();
        let text = response.text().await?;

        tracing::debug!(status = status.as_u16(), bytes = text.len(), "Received response");

        if text.trim().is_empty() {
            return Ok(JsonResponse { status, body: None });
        }

        match serde_json::from_str(&text) {
            Ok(body) => Ok(JsonResponse {
                status,
                body: Some(body),
            }),
            // Error pages are often HTML; the status alone is enough there
            Err(_) if !status.is_success() => Ok(JsonResponse { status, body: None }),
            Err(source) => Err(HttpError::Decode { status, source }),
        }
    }
}
