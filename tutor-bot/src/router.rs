//! Command router: classifies an inbound message into exactly one [`Route`].
//!
//! Priority: audio → empty → `#ajuda` → `#nivel` → `1`..`4` → `#resetar` → backend-delegated keywords → correction.
//! `#` keywords match case-insensitively on the trimmed body; digits must be the whole body.

use tutor_core::{InboundMessage, Level, MediaType};

/// Keywords advertised in the help text whose behavior lives in the backend; forwarded on the correction path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DelegatedCommand {
    Desafio,
    Quiz,
    Meta,
    Frase,
}

impl DelegatedCommand {
    pub fn keyword(self) -> &'static str {
        match self {
            DelegatedCommand::Desafio => "#desafio",
            DelegatedCommand::Quiz => "#quiz",
            DelegatedCommand::Meta => "#meta",
            DelegatedCommand::Frase => "#frase",
        }
    }

    fn from_keyword(lower: &str) -> Option<Self> {
        match lower {
            "#desafio" => Some(DelegatedCommand::Desafio),
            "#quiz" => Some(DelegatedCommand::Quiz),
            "#meta" => Some(DelegatedCommand::Meta),
            "#frase" => Some(DelegatedCommand::Frase),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Empty body; nothing is sent.
    Ignore,
    AudioDisabled,
    Help,
    LevelMenu,
    SetLevel(Level),
    Reset,
    Delegated(DelegatedCommand),
    /// Default path: send the text to the backend for correction.
    Correct,
}

impl Route {
    /// Short name for logs.
    pub fn name(&self) -> &'static str {
        match self {
            Route::Ignore => "ignore",
            Route::AudioDisabled => "audio_disabled",
            Route::Help => "help",
            Route::LevelMenu => "level_menu",
            Route::SetLevel(_) => "set_level",
            Route::Reset => "reset",
            Route::Delegated(_) => "delegated",
            Route::Correct => "correct",
        }
    }

    /// True when the message continues to the backend correction call.
    pub fn goes_to_backend(&self) -> bool {
        matches!(self, Route::Delegated(_) | Route::Correct)
    }
}

pub fn classify(message: &InboundMessage) -> Route {
    classify_body(&message.body, message.media_type)
}

/// Classifies a raw body of the given media type.
pub fn classify_body(body: &str, media_type: MediaType) -> Route {
    if media_type == MediaType::Audio {
        return Route::AudioDisabled;
    }

    let body = body.trim();
    if body.is_empty() {
        return Route::Ignore;
    }

    let lower = body.to_lowercase();
    match lower.as_str() {
        "#ajuda" => return Route::Help,
        "#nivel" => return Route::LevelMenu,
        _ => {}
    }

    if let Some(level) = Level::from_choice(body) {
        return Route::SetLevel(level);
    }

    if lower == "#resetar" {
        return Route::Reset;
    }

    match DelegatedCommand::from_keyword(&lower) {
        Some(command) => Route::Delegated(command),
        None => Route::Correct,
    }
}
