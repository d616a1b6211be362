//! HTTP client for the upstream backend service

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use std::time::Duration;
use tracing::{debug, error};

use cms_core::error::DomainError;

/// Shared handle; clones reuse one connection pool.
#[derive(Clone, Debug)]
pub struct UpstreamClient {
    http: Client,
    base_url: String,
}

impl UpstreamClient {
    pub fn new(base_url: &str, timeout_seconds: u64) -> Result<Self, DomainError> {
        let http = Client::builder()
            .timeout(Duration::from_secs(timeout_seconds))
            .build()
            .map_err(|e| DomainError::InternalError(format!("HTTP client error: {}", e)))?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    pub fn request(&self, method: Method, path: &str) -> RequestBuilder {
        let url = self.url(path);
        debug!("Upstream {} {}", method, url);
        self.http.request(method, url)
    }

    /// Sends the request. `Ok(None)` means the upstream answered 404;
    /// any other failure becomes `DomainError::UpstreamError`.
    pub async fn send(&self, request: RequestBuilder) -> Result<Option<Response>, DomainError> {
        let response = request.send().await.map_err(|e| {
            error!("Upstream request failed: {}", e);
            DomainError::UpstreamError {
                status: e.status().map(|s| s.as_u16()),
                message: e.to_string(),
            }
        })?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Ok(None);
        }
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            error!("Upstream responded {}: {}", status, body);
            return Err(DomainError::UpstreamError {
                status: Some(status.as_u16()),
                message: if body.is_empty() {
                    format!("Upstream responded {}", status)
                } else {
                    body
                },
            });
        }

        Ok(Some(response))
    }
}
