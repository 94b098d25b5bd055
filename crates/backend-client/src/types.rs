//! Wire types for the tutoring backend.

use serde::{Deserialize, Serialize};
use tutor_core::Level;

/// Body of `POST /correct`. `phone` is the backend's per-user memory key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CorrectionRequest {
    pub user_message: String,
    pub level: Level,
    pub phone: String,
}

impl CorrectionRequest {
    pub fn new(user_message: impl Into<String>, level: Level, user_id: impl Into<String>) -> Self {
        Self {
            user_message: user_message.into(),
            level,
            phone: user_id.into(),
        }
    }
}

/// Body returned by `POST /correct`. A missing `reply` is tolerated here and rejected by the client.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CorrectionResponse {
    #[serde(default)]
    pub reply: Option<String>,
}

/// Body of `POST /resetar`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResetRequest {
    pub phone: String,
}
