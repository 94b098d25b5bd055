//! End-to-end tests: InboundMessage → TutorBot::handle → mock Bot, with a mockito backend.
//!
//! Covers level selection feeding the correction payload, warm-up on the first message, dropped
//! group and empty messages, the audio notice, retry exhaustion, reset, reply annotation, chunking and
//! the "unexpected error" notice when delivery fails.

mod common;

use std::sync::Arc;
use std::time::Duration;

use backend_client::{HttpBackendClient, HttpClient, RetryPolicy};
use mockito::{Matcher, Mock, ServerGuard};
use tutor_bot::texts::{
    AUDIO_DISABLED_TEXT, BACKEND_UNAVAILABLE_TEXT, FALLBACK_REPLY_TEXT, HELP_TEXT,
    INCORRECT_BANNER, LEVEL_MENU_TEXT, RESET_FAILED_TEXT, RESET_OK_TEXT, UNEXPECTED_ERROR_TEXT,
    WARMUP_NOTICE_TEXT,
};
use tutor_bot::{TutorBot, TutorComponents, WarmupState};
use tutor_core::{InboundMessage, MediaType};

use common::mock_bot::MockBot;

const USER: &str = "5511988887777";

fn fast_policy(max_attempts: u32) -> RetryPolicy {
    RetryPolicy::new(
        max_attempts,
        vec![Duration::ZERO, Duration::from_millis(10), Duration::from_millis(20)],
        Duration::from_secs(5),
    )
    .unwrap()
}

struct Harness {
    bot: Arc<MockBot>,
    components: TutorComponents,
    tutor: TutorBot,
}

impl Harness {
    fn new(server: &ServerGuard, max_chunk_len: usize) -> Self {
        let backend = HttpBackendClient::with_policies(
            HttpClient::new(&server.url()).unwrap(),
            fast_policy(3),
            fast_policy(1),
        );
        let bot = MockBot::new();
        let components = TutorComponents::new(bot.clone(), Arc::new(backend));
        let tutor = TutorBot::from_components(&components, max_chunk_len);
        Self {
            bot,
            components,
            tutor,
        }
    }

    /// Runs the warm-up up front and clears its notice so tests only see their own replies.
    async fn warmed_up(server: &ServerGuard, max_chunk_len: usize) -> Self {
        let harness = Self::new(server, max_chunk_len);
        if let Some(probe) = harness.components.warmup.trigger("warmup").await {
            probe.await.unwrap();
        }
        harness.bot.clear();
        harness
    }

    async fn send(&self, body: &str) {
        self.tutor.handle(&InboundMessage::text("m", USER, body)).await;
    }

    async fn wait_for_warmup(&self) {
        for _ in 0..200 {
            if self.components.warmup.state() == WarmupState::Done {
                return;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!("warm-up probe did not finish");
    }
}

async fn health_mock(server: &mut ServerGuard) -> Mock {
    server
        .mock("GET", "/health")
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await
}

/// **Test: #nivel shows the menu, "3" selects intermediate, and the next sentence is corrected at that level.**
#[tokio::test]
async fn test_level_selection_flows_into_correction() {
    let mut server = mockito::Server::new_async().await;
    let _health = health_mock(&mut server).await;
    let correct = server
        .mock("POST", "/correct")
        .match_body(Matcher::Json(serde_json::json!({
            "user_message": "I go school yesterday",
            "level": "intermediate",
            "phone": USER
        })))
        .with_status(200)
        .with_body(r#"{"reply": "*Correção:* I went to school yesterday."}"#)
        .expect(1)
        .create_async()
        .await;

    let h = Harness::warmed_up(&server, 3000).await;

    h.send("#nivel").await;
    h.send("3").await;
    h.send("  I go school yesterday  ").await;

    let texts = h.bot.texts();
    assert_eq!(texts.len(), 3);
    assert_eq!(texts[0], LEVEL_MENU_TEXT);
    assert!(texts[1].contains("intermediate"));
    assert_eq!(texts[2], "*Correção:* I went to school yesterday.");
    assert!(h.bot.sent().iter().all(|r| r.user_id == USER));
    correct.assert_async().await;
}

/// **Test: A user who never picked a level is corrected at basic.**
#[tokio::test]
async fn test_default_level_is_basic() {
    let mut server = mockito::Server::new_async().await;
    let _health = health_mock(&mut server).await;
    let correct = server
        .mock("POST", "/correct")
        .match_body(Matcher::PartialJson(serde_json::json!({ "level": "basic" })))
        .with_status(200)
        .with_body(r#"{"reply": "Perfect!"}"#)
        .expect(1)
        .create_async()
        .await;

    let h = Harness::warmed_up(&server, 3000).await;
    h.send("She likes apples").await;

    assert_eq!(h.bot.texts(), vec!["Perfect!".to_string()]);
    correct.assert_async().await;
}

/// **Test: The first message triggers one warm-up notice and one health probe; later messages do not.**
#[tokio::test]
async fn test_first_message_triggers_single_warmup() {
    let mut server = mockito::Server::new_async().await;
    let health = server
        .mock("GET", "/health")
        .with_status(200)
        .expect(1)
        .create_async()
        .await;

    let h = Harness::new(&server, 3000);
    assert_eq!(h.components.warmup.state(), WarmupState::NotStarted);

    h.send("#ajuda").await;
    h.wait_for_warmup().await;
    h.send("#ajuda").await;

    let texts = h.bot.texts();
    assert_eq!(texts, vec![WARMUP_NOTICE_TEXT, HELP_TEXT, HELP_TEXT]);
    health.assert_async().await;
}

/// **Test: A failing health probe still ends the warm-up; it is not retried on the next message.**
#[tokio::test]
async fn test_failed_warmup_is_not_repeated() {
    let mut server = mockito::Server::new_async().await;
    let health = server
        .mock("GET", "/health")
        .with_status(503)
        .expect(1)
        .create_async()
        .await;

    let h = Harness::new(&server, 3000);
    h.send("#ajuda").await;
    h.wait_for_warmup().await;
    h.send("#ajuda").await;

    let notices = h
        .bot
        .texts()
        .into_iter()
        .filter(|t| t == WARMUP_NOTICE_TEXT)
        .count();
    assert_eq!(notices, 1);
    health.assert_async().await;
}

/// **Test: Group and empty messages produce no output and do not start the warm-up.**
#[tokio::test]
async fn test_group_and_empty_messages_are_dropped() {
    let mut server = mockito::Server::new_async().await;
    let health = server.mock("GET", "/health").expect(0).create_async().await;
    let correct = server.mock("POST", "/correct").expect(0).create_async().await;

    let h = Harness::new(&server, 3000);

    let mut group = InboundMessage::text("g", "-100123", "I go school yesterday");
    group.is_group = true;
    h.tutor.handle(&group).await;
    h.send("").await;
    h.send("   \n\t").await;

    assert!(h.bot.sent().is_empty());
    assert_eq!(h.components.warmup.state(), WarmupState::NotStarted);
    health.assert_async().await;
    correct.assert_async().await;
}

/// **Test: An audio message gets exactly one notice and never reaches /correct.**
#[tokio::test]
async fn test_audio_gets_notice_without_backend_call() {
    let mut server = mockito::Server::new_async().await;
    let _health = health_mock(&mut server).await;
    let correct = server.mock("POST", "/correct").expect(0).create_async().await;

    let h = Harness::warmed_up(&server, 3000).await;

    let mut voice = InboundMessage::text("v", USER, "");
    voice.media_type = MediaType::Audio;
    h.tutor.handle(&voice).await;

    assert_eq!(h.bot.texts(), vec![AUDIO_DISABLED_TEXT]);
    correct.assert_async().await;
}

/// **Test: Every attempt fails; the user gets one "try again" notice and nothing else.**
#[tokio::test]
async fn test_retry_exhaustion_sends_single_notice() {
    let mut server = mockito::Server::new_async().await;
    let _health = health_mock(&mut server).await;
    let correct = server
        .mock("POST", "/correct")
        .with_status(500)
        .with_body("boom")
        .expect(3)
        .create_async()
        .await;

    let h = Harness::warmed_up(&server, 3000).await;
    h.send("I has a dog").await;

    assert_eq!(h.bot.texts(), vec![BACKEND_UNAVAILABLE_TEXT]);
    correct.assert_async().await;
}

/// **Test: A 200 without a usable reply field yields the fallback notice.**
#[tokio::test]
async fn test_malformed_reply_sends_fallback() {
    let mut server = mockito::Server::new_async().await;
    let _health = health_mock(&mut server).await;
    let _correct = server
        .mock("POST", "/correct")
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .create_async()
        .await;

    let h = Harness::warmed_up(&server, 3000).await;
    h.send("I has a dog").await;

    assert_eq!(h.bot.texts(), vec![FALLBACK_REPLY_TEXT]);
}

/// **Test: #resetar calls the backend and keeps the locally chosen level.**
#[tokio::test]
async fn test_reset_keeps_level() {
    let mut server = mockito::Server::new_async().await;
    let _health = health_mock(&mut server).await;
    let reset = server
        .mock("POST", "/resetar")
        .match_body(Matcher::Json(serde_json::json!({ "phone": USER })))
        .with_status(200)
        .with_body(r#"{"status": "ok"}"#)
        .expect(1)
        .create_async()
        .await;
    let correct = server
        .mock("POST", "/correct")
        .match_body(Matcher::PartialJson(serde_json::json!({ "level": "advanced" })))
        .with_status(200)
        .with_body(r#"{"reply": "Great sentence."}"#)
        .expect(1)
        .create_async()
        .await;

    let h = Harness::warmed_up(&server, 3000).await;
    h.send("4").await;
    h.send("#RESETAR").await;
    h.send("Nevertheless, I persisted.").await;

    let texts = h.bot.texts();
    assert_eq!(texts.len(), 3);
    assert!(texts[0].contains("advanced"));
    assert_eq!(texts[1], RESET_OK_TEXT);
    assert_eq!(texts[2], "Great sentence.");
    reset.assert_async().await;
    correct.assert_async().await;
}

/// **Test: A failed reset is reported to the user.**
#[tokio::test]
async fn test_reset_failure_notice() {
    let mut server = mockito::Server::new_async().await;
    let _health = health_mock(&mut server).await;
    let _reset = server
        .mock("POST", "/resetar")
        .with_status(500)
        .create_async()
        .await;

    let h = Harness::warmed_up(&server, 3000).await;
    h.send("#resetar").await;

    assert_eq!(h.bot.texts(), vec![RESET_FAILED_TEXT]);
}

/// **Test: #quiz is forwarded verbatim and a wrong-answer marker gets the incorrect banner.**
#[tokio::test]
async fn test_delegated_command_reply_is_annotated() {
    let mut server = mockito::Server::new_async().await;
    let _health = health_mock(&mut server).await;
    let correct = server
        .mock("POST", "/correct")
        .match_body(Matcher::PartialJson(serde_json::json!({ "user_message": "#quiz" })))
        .with_status(200)
        .with_body(r#"{"reply": "❌ Ops! Resposta incorreta."}"#)
        .expect(1)
        .create_async()
        .await;

    let h = Harness::warmed_up(&server, 3000).await;
    h.send("#quiz").await;

    assert_eq!(
        h.bot.texts(),
        vec![format!("{}❌ Ops! Resposta incorreta.", INCORRECT_BANNER)]
    );
    correct.assert_async().await;
}

/// **Test: A reply longer than the chunk size arrives as ordered chunks.**
#[tokio::test]
async fn test_long_reply_is_chunked() {
    let mut server = mockito::Server::new_async().await;
    let _health = health_mock(&mut server).await;
    let reply = "a".repeat(25);
    let _correct = server
        .mock("POST", "/correct")
        .with_status(200)
        .with_body(serde_json::json!({ "reply": reply }).to_string())
        .create_async()
        .await;

    let h = Harness::warmed_up(&server, 10).await;
    h.send("Tell me a long story").await;

    let texts = h.bot.texts();
    assert_eq!(texts, vec!["a".repeat(10), "a".repeat(10), "a".repeat(5)]);
    assert_eq!(texts.concat(), reply);
}

/// **Test: When sending fails, handle still returns and nothing panics.**
#[tokio::test]
async fn test_send_failure_is_swallowed() {
    let mut server = mockito::Server::new_async().await;
    let _health = health_mock(&mut server).await;

    let h = Harness::warmed_up(&server, 3000).await;
    h.bot.fail_sends(true);
    h.send("#ajuda").await;

    assert!(h.bot.sent().is_empty());
}

/// **Test: The reply send fails once; the user then gets exactly one "unexpected error" notice.**
#[tokio::test]
async fn test_failed_reply_send_yields_unexpected_error_notice() {
    let mut server = mockito::Server::new_async().await;
    let _health = health_mock(&mut server).await;

    let h = Harness::new(&server, 3000);
    // Send #1 is the warm-up notice, #2 the help reply.
    h.bot.fail_nth_send(2);
    h.send("#ajuda").await;

    let texts = h.bot.texts();
    assert_eq!(texts, vec![WARMUP_NOTICE_TEXT, UNEXPECTED_ERROR_TEXT]);
    assert_eq!(texts.last().map(String::as_str), Some(UNEXPECTED_ERROR_TEXT));
    assert!(h.bot.sent().iter().all(|r| r.user_id == USER));
}

/// **Test: Without a sender id there is nobody to notify; a failed send produces no further output.**
#[tokio::test]
async fn test_failed_send_without_sender_id_sends_nothing() {
    let mut server = mockito::Server::new_async().await;
    let _health = health_mock(&mut server).await;

    let h = Harness::warmed_up(&server, 3000).await;
    h.bot.fail_nth_send(1);
    h.tutor.handle(&InboundMessage::text("m", "", "#ajuda")).await;

    assert!(h.bot.sent().is_empty());
}
