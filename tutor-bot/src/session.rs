//! Session state store: per-user proficiency level, in memory for the life of the process.
//!
//! [`SessionStore`] is the seam the handlers depend on; [`InMemorySessionStore`] is the only backing today.

use async_trait::async_trait;
use std::collections::HashMap;
use tokio::sync::RwLock;
use tracing::debug;
use tutor_core::{Level, UserSession};

#[async_trait]
pub trait SessionStore: Send + Sync {
    /// Session for `user_id`, or `None` if the user never picked a level.
    async fn get(&self, user_id: &str) -> Option<UserSession>;

    /// Creates or overwrites the user's level. Last write wins.
    async fn set_level(&self, user_id: &str, level: Level) -> UserSession;

    /// Level to use for backend calls; [`Level::Basic`] when absent.
    async fn level_for(&self, user_id: &str) -> Level {
        self.get(user_id)
            .await
            .map(|session| session.level)
            .unwrap_or_default()
    }
}

/// HashMap behind an async RwLock. Sessions are never expired or removed.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: RwLock<HashMap<String, UserSession>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.sessions.read().await.is_empty()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: &str) -> Option<UserSession> {
        self.sessions.read().await.get(user_id).cloned()
    }

    async fn set_level(&self, user_id: &str, level: Level) -> UserSession {
        let session = UserSession {
            user_id: user_id.to_string(),
            level,
        };
        self.sessions
            .write()
            .await
            .insert(user_id.to_string(), session.clone());
        debug!(user_id, new_level = %level, "session level updated");
        session
    }
}
