//! Mock implementation of [`tutor_core::Bot`] for integration tests.
//!
//! Records every `send_text` call so tests can assert on what each user received
//! without hitting Telegram. All sends, or only the n-th one, can be made to fail for delivery-error tests.

use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use tutor_core::{Bot, Result, TutorError};

/// One recorded call to `send_text(user_id, text)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentRecord {
    pub user_id: String,
    pub text: String,
}

/// Mock Bot that records sent texts in order.
#[derive(Default)]
pub struct MockBot {
    sent: Mutex<Vec<SentRecord>>,
    fail_sends: AtomicBool,
    attempts: AtomicUsize,
    fail_on_attempt: Mutex<Option<usize>>,
}

#[allow(dead_code)]
impl MockBot {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    /// Makes every later `send_text` fail (after recording nothing).
    pub fn fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    /// Makes only the `n`-th send from now on fail (1-based); sends before and after succeed.
    pub fn fail_nth_send(&self, n: usize) {
        self.attempts.store(0, Ordering::SeqCst);
        *self.fail_on_attempt.lock().unwrap() = Some(n);
    }

    pub fn sent(&self) -> Vec<SentRecord> {
        self.sent.lock().unwrap().clone()
    }

    /// Texts sent so far, in order.
    pub fn texts(&self) -> Vec<String> {
        self.sent().into_iter().map(|r| r.text).collect()
    }

    pub fn clear(&self) {
        self.sent.lock().unwrap().clear();
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_text(&self, user_id: &str, text: &str) -> Result<()> {
        let attempt = self.attempts.fetch_add(1, Ordering::SeqCst) + 1;
        if *self.fail_on_attempt.lock().unwrap() == Some(attempt) {
            return Err(TutorError::Bot(format!("mock failure on send #{}", attempt)));
        }
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(TutorError::Bot("mock send failure".to_string()));
        }
        self.sent.lock().unwrap().push(SentRecord {
            user_id: user_id.to_string(),
            text: text.to_string(),
        });
        Ok(())
    }
}
