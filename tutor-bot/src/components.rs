//! Component factory: builds the backend client, session store, warm-up prober and handler chain.

use anyhow::Result;
use backend_client::{BackendClient, HttpBackendClient, HttpClient};
use handler_chain::HandlerChain;
use std::sync::Arc;
use tracing::{info, instrument};
use tutor_core::Bot;

use crate::config::BackendConfig;
use crate::handlers::{CommandHandler, CorrectionHandler, FilterHandler, WarmupHandler};
use crate::session::{InMemorySessionStore, SessionStore};
use crate::warmup::WarmupProber;

/// Shared dependencies of the handlers. Everything is behind a trait object so tests can swap pieces.
#[derive(Clone)]
pub struct TutorComponents {
    pub bot: Arc<dyn Bot>,
    pub backend: Arc<dyn BackendClient>,
    pub sessions: Arc<dyn SessionStore>,
    pub warmup: Arc<WarmupProber>,
}

impl TutorComponents {
    /// Assembles components around an existing bot and backend, with a fresh in-memory session store.
    pub fn new(bot: Arc<dyn Bot>, backend: Arc<dyn BackendClient>) -> Self {
        Self::with_sessions(bot, backend, Arc::new(InMemorySessionStore::new()))
    }

    pub fn with_sessions(
        bot: Arc<dyn Bot>,
        backend: Arc<dyn BackendClient>,
        sessions: Arc<dyn SessionStore>,
    ) -> Self {
        let warmup = Arc::new(WarmupProber::new(backend.clone(), bot.clone()));
        Self {
            bot,
            backend,
            sessions,
            warmup,
        }
    }
}

/// HTTP backend client configured from [`BackendConfig`].
pub fn create_backend_client(config: &BackendConfig) -> Result<HttpBackendClient> {
    let http = HttpClient::new(&config.backend_url)?;
    Ok(HttpBackendClient::with_policies(
        http,
        config.correction_policy.clone(),
        config.health_policy.clone(),
    ))
}

/// Builds components for the running bot.
#[instrument(skip(config, bot))]
pub fn build_components(config: &BackendConfig, bot: Arc<dyn Bot>) -> Result<TutorComponents> {
    let backend = create_backend_client(config)?;
    info!(backend_url = %backend.base_url(), "backend client ready");
    Ok(TutorComponents::new(bot, Arc::new(backend)))
}

/// Chain order: filter → warm-up → commands → correction.
pub fn build_handler_chain(components: &TutorComponents) -> HandlerChain {
    HandlerChain::new()
        .add_handler(Arc::new(FilterHandler::new()))
        .add_handler(Arc::new(WarmupHandler::new(components.warmup.clone())))
        .add_handler(Arc::new(CommandHandler::new(
            components.sessions.clone(),
            components.backend.clone(),
        )))
        .add_handler(Arc::new(CorrectionHandler::new(
            components.sessions.clone(),
            components.backend.clone(),
        )))
}
