//! # Backend client
//!
//! Talks to the tutoring backend over HTTP. [`RetryPolicy`] is the single retry/backoff abstraction;
//! [`HttpClient`] applies it to POST/GET; [`BackendClient`] exposes the three backend operations and
//! [`HttpBackendClient`] implements them. Transport-agnostic with respect to the chat channel.

mod client;
mod error;
mod http;
mod retry;
mod types;

pub use client::{parse_reply, BackendClient, HttpBackendClient, CORRECT_PATH, HEALTH_PATH, RESET_PATH};
pub use error::{BackendError, Result};
pub use http::HttpClient;
pub use retry::RetryPolicy;
pub use types::{CorrectionRequest, CorrectionResponse, ResetRequest};
