//! Backend warm-up: a one-shot health probe fired by the first inbound message of the process.
//!
//! The state moves `NotStarted → InProgress → Done` exactly once. The first transition is a single
//! compare-exchange done before any `.await`, so two concurrent first messages cannot both start a probe.

use std::sync::atomic::{AtomicU8, Ordering};
use std::sync::Arc;

use backend_client::BackendClient;
use tokio::task::JoinHandle;
use tracing::{info, instrument, warn};
use tutor_core::Bot;

use crate::texts::WARMUP_NOTICE_TEXT;

const NOT_STARTED: u8 = 0;
const IN_PROGRESS: u8 = 1;
const DONE: u8 = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarmupState {
    NotStarted,
    InProgress,
    /// Probe finished, successfully or not. Never leaves this state.
    Done,
}

pub struct WarmupProber {
    state: Arc<AtomicU8>,
    backend: Arc<dyn BackendClient>,
    bot: Arc<dyn Bot>,
}

impl WarmupProber {
    pub fn new(backend: Arc<dyn BackendClient>, bot: Arc<dyn Bot>) -> Self {
        Self {
            state: Arc::new(AtomicU8::new(NOT_STARTED)),
            backend,
            bot,
        }
    }

    pub fn state(&self) -> WarmupState {
        match self.state.load(Ordering::Acquire) {
            NOT_STARTED => WarmupState::NotStarted,
            IN_PROGRESS => WarmupState::InProgress,
            _ => WarmupState::Done,
        }
    }

    /// Starts the probe if it never ran. Returns the probe task for the caller that won the race, `None` otherwise.
    ///
    /// The winner sends the "preparing" notice to `user_id` first, then spawns the probe. The probe
    /// outcome is only logged; callers do not need to await the handle.
    #[instrument(skip(self))]
    pub async fn trigger(&self, user_id: &str) -> Option<JoinHandle<()>> {
        if self
            .state
            .compare_exchange(NOT_STARTED, IN_PROGRESS, Ordering::AcqRel, Ordering::Acquire)
            .is_err()
        {
            return None;
        }

        info!("warm-up started");
        if let Err(e) = self.bot.send_text(user_id, WARMUP_NOTICE_TEXT).await {
            warn!(error = %e, "failed to send warm-up notice");
        }

        let backend = self.backend.clone();
        let state = self.state.clone();
        let probe = tokio::spawn(async move {
            match backend.health().await {
                Ok(()) => info!("warm-up: backend is up"),
                Err(e) => warn!(error = %e, transient = e.is_transient(), "warm-up: backend did not answer"),
            }
            state.store(DONE, Ordering::Release);
        });

        Some(probe)
    }
}
