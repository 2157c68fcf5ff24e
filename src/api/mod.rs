//! HTTP client adapter for the REST backend.
//!
//! All calls go through [`ApiClient::send`], which attaches the bearer header when a
//! token is given and turns every failure into an [`AppError`]. Nothing is retried.

mod auth;
mod incidents;
mod registration;

use reqwest::{header, Method, RequestBuilder, StatusCode, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::auth::bearer;
use crate::errors::{classify_response, AppError};

/// Thin wrapper over `reqwest::Client` with a fixed base URL.
#[derive(Clone)]
pub struct ApiClient {
    base: Url,
    client: reqwest::Client,
}

impl ApiClient {
    pub fn new(base_url: &str) -> Result<Self, AppError> {
        // Relative endpoints join under the base only when it ends with a slash.
        let normalized = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{}/", base_url)
        };

        let base = Url::parse(&normalized)
            .map_err(|e| AppError::LocalUnexpected(format!("Invalid API base URL: {}", e)))?;

        let client = reqwest::Client::builder()
            .build()
            .map_err(|e| AppError::LocalUnexpected(format!("HTTP client error: {}", e)))?;

        Ok(Self { base, client })
    }

    fn url(&self, path: &str) -> Result<Url, AppError> {
        self.base
            .join(path)
            .map_err(|e| AppError::LocalUnexpected(format!("Invalid endpoint {}: {}", path, e)))
    }

    fn request(
        &self,
        method: Method,
        path: &str,
        token: Option<&str>,
    ) -> Result<RequestBuilder, AppError> {
        let mut builder = self
            .client
            .request(method, self.url(path)?)
            .header(header::ACCEPT, "application/json");
        if let Some(token) = token {
            builder = builder.header(header::AUTHORIZATION, bearer(token));
        }
        Ok(builder)
    }

    /// Send a request and return the success status with the raw body.
    async fn exchange<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<(StatusCode, String), AppError> {
        let mut builder = self.request(method.clone(), path, token)?;
        if let Some(body) = body {
            builder = builder.json(body);
        }

        tracing::debug!("{} {}", method, path);
        let resp = builder.send().await?;
        let status = resp.status();
        let text = resp.text().await?;

        if status.is_success() {
            return Ok((status, text));
        }

        let err = classify_response(status, &text, token.is_some());
        tracing::warn!("{} {} failed with HTTP {}: {}", method, path, status, err);
        Err(err)
    }

    /// Send a request and return the raw success body.
    async fn send<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<String, AppError> {
        self.exchange(method, path, body, token)
            .await
            .map(|(_, text)| text)
    }

    /// Send a form submission. Only 200 and 201 count as accepted.
    async fn submit<B: Serialize + ?Sized>(
        &self,
        method: Method,
        path: &str,
        body: &B,
        token: Option<&str>,
    ) -> Result<(), AppError> {
        let (status, _) = self.exchange(method.clone(), path, Some(body), token).await?;
        form_accepted(status).inspect_err(|_| {
            tracing::warn!("{} {} answered HTTP {}, not accepted", method, path, status);
        })
    }

    /// Send a request and decode a JSON success body.
    async fn send_json<B, T>(
        &self,
        method: Method,
        path: &str,
        body: Option<&B>,
        token: Option<&str>,
    ) -> Result<T, AppError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let text = self.send(method, path, body, token).await?;
        serde_json::from_str(&text).map_err(|e| {
            tracing::error!("Unexpected response body from {}: {}", path, e);
            AppError::LocalUnexpected(format!("Unexpected response from server: {}", e))
        })
    }
}

fn form_accepted(status: StatusCode) -> Result<(), AppError> {
    match status {
        StatusCode::OK | StatusCode::CREATED => Ok(()),
        other => Err(AppError::LocalUnexpected(format!(
            "Unexpected status from server: HTTP {}",
            other.as_u16()
        ))),
    }
}
