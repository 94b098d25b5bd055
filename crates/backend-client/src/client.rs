//! Backend API: `POST /correct`, `POST /resetar`, `GET /health`.

use async_trait::async_trait;
use tracing::{info, instrument};

use crate::error::{BackendError, Result};
use crate::http::HttpClient;
use crate::retry::RetryPolicy;
use crate::types::{CorrectionRequest, CorrectionResponse, ResetRequest};

pub const CORRECT_PATH: &str = "/correct";
pub const RESET_PATH: &str = "/resetar";
pub const HEALTH_PATH: &str = "/health";

/// Tutoring backend operations used by the bot. Object safe so handlers hold `Arc<dyn BackendClient>`.
#[async_trait]
pub trait BackendClient: Send + Sync {
    /// Sends the user's text for correction and returns the reply text.
    async fn correct(&self, request: &CorrectionRequest) -> Result<String>;

    /// Clears the backend-side memory for `user_id`.
    async fn reset(&self, user_id: &str) -> Result<()>;

    /// Reachability probe; the body is ignored.
    async fn health(&self) -> Result<()>;
}

/// [`BackendClient`] over HTTP. Correction and reset share one policy; health has its own.
#[derive(Clone, Debug)]
pub struct HttpBackendClient {
    http: HttpClient,
    request_policy: RetryPolicy,
    health_policy: RetryPolicy,
}

impl HttpBackendClient {
    /// Client with the default correction and health policies.
    pub fn new(base_url: &str) -> Result<Self> {
        Ok(Self::with_policies(
            HttpClient::new(base_url)?,
            RetryPolicy::correction(),
            RetryPolicy::health(),
        ))
    }

    pub fn with_policies(http: HttpClient, request_policy: RetryPolicy, health_policy: RetryPolicy) -> Self {
        Self {
            http,
            request_policy,
            health_policy,
        }
    }

    pub fn base_url(&self) -> &str {
        self.http.base_url()
    }
}

/// Extracts a non-blank `reply` from a `/correct` body.
pub fn parse_reply(body: &str) -> Result<String> {
    let parsed: CorrectionResponse =
        serde_json::from_str(body).map_err(|e| BackendError::MalformedResponse {
            path: CORRECT_PATH.to_string(),
            reason: e.to_string(),
        })?;
    match parsed.reply {
        Some(reply) if !reply.trim().is_empty() => Ok(reply),
        Some(_) => Err(BackendError::MalformedResponse {
            path: CORRECT_PATH.to_string(),
            reason: "empty reply".to_string(),
        }),
        None => Err(BackendError::MalformedResponse {
            path: CORRECT_PATH.to_string(),
            reason: "missing reply field".to_string(),
        }),
    }
}

#[async_trait]
impl BackendClient for HttpBackendClient {
    #[instrument(skip(self, request), fields(user_id = %request.phone, user_level = %request.level))]
    async fn correct(&self, request: &CorrectionRequest) -> Result<String> {
        let body = self
            .http
            .post_with_retry(CORRECT_PATH, request, &self.request_policy)
            .await?;
        let reply = parse_reply(&body)?;
        info!(reply_len = reply.chars().count(), "correction received");
        Ok(reply)
    }

    #[instrument(skip(self))]
    async fn reset(&self, user_id: &str) -> Result<()> {
        let payload = ResetRequest {
            phone: user_id.to_string(),
        };
        self.http
            .post_with_retry(RESET_PATH, &payload, &self.request_policy)
            .await?;
        info!("backend memory reset");
        Ok(())
    }

    #[instrument(skip(self))]
    async fn health(&self) -> Result<()> {
        self.http
            .get_with_retry(HEALTH_PATH, &self.health_policy)
            .await?;
        Ok(())
    }
}
