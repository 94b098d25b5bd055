//! Thin reqwest wrapper: joins paths onto the backend base URL and runs each request under a [`RetryPolicy`].

use reqwest::{Client, RequestBuilder, Url};
use serde::Serialize;
use tracing::{debug, instrument};

use crate::error::{BackendError, Result};
use crate::retry::RetryPolicy;

/// HTTP client bound to one backend base URL.
#[derive(Clone, Debug)]
pub struct HttpClient {
    client: Client,
    base_url: String,
}

impl HttpClient {
    /// Creates a client for `base_url` (e.g. `https://tutor.example.com`). Fails when the URL does not parse.
    pub fn new(base_url: &str) -> Result<Self> {
        Self::with_client(Client::new(), base_url)
    }

    /// Same as [`HttpClient::new`] with a caller-provided reqwest client.
    pub fn with_client(client: Client, base_url: &str) -> Result<Self> {
        Url::parse(base_url)
            .map_err(|e| BackendError::InvalidUrl(format!("{}: {}", base_url, e)))?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full URL for `path`; tolerates a missing or doubled slash.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    /// POSTs `payload` as JSON, retrying per `policy`. Returns the body of the first 2xx response.
    #[instrument(skip(self, payload, policy))]
    pub async fn post_with_retry<B>(&self, path: &str, payload: &B, policy: &RetryPolicy) -> Result<String>
    where
        B: Serialize + ?Sized + Sync,
    {
        let url = self.endpoint(path);
        policy
            .run(path, move |attempt| {
                debug!(path, attempt = attempt + 1, "POST");
                let request = self.client.post(&url).json(payload);
                self.send_once(request, path, policy)
            })
            .await
    }

    /// GETs `path`, retrying per `policy`. Returns the body of the first 2xx response.
    #[instrument(skip(self, policy))]
    pub async fn get_with_retry(&self, path: &str, policy: &RetryPolicy) -> Result<String> {
        let url = self.endpoint(path);
        policy
            .run(path, move |attempt| {
                debug!(path, attempt = attempt + 1, "GET");
                let request = self.client.get(&url);
                self.send_once(request, path, policy)
            })
            .await
    }

    /// One attempt: applies the policy timeout, treats non-2xx as failure and reads the whole body.
    async fn send_once(&self, request: RequestBuilder, path: &str, policy: &RetryPolicy) -> Result<String> {
        let response = request
            .timeout(policy.timeout())
            .send()
            .await
            .map_err(|e| BackendError::from_reqwest(path, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| BackendError::from_reqwest(path, e))?;

        if !status.is_success() {
            return Err(BackendError::Status {
                path: path.to_string(),
                status: status.as_u16(),
                body,
            });
        }
        Ok(body)
    }
}
