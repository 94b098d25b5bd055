//! User-facing text templates. Keywords and wording here are what users see and type.

use tutor_core::Level;

pub const HELP_TEXT: &str = "📚 *Comandos disponíveis*\n\n\
#ajuda - mostra esta mensagem\n\
#nivel - escolhe seu nível de inglês\n\
#resetar - apaga a memória da conversa\n\
#desafio - desafio de completar a frase\n\
#quiz - pergunta de múltipla escolha\n\
#meta - meta de estudo do dia\n\
#frase - frase do dia\n\n\
Ou envie qualquer frase em inglês para eu corrigir. ✍️";

pub const LEVEL_MENU_TEXT: &str = "🎯 *Escolha seu nível de inglês*\n\n\
1️⃣ Iniciante (beginner)\n\
2️⃣ Básico (basic)\n\
3️⃣ Intermediário (intermediate)\n\
4️⃣ Avançado (advanced)\n\n\
Responda com o número (1 a 4).";

pub const AUDIO_DISABLED_TEXT: &str =
    "🎙️ Ainda não consigo ouvir áudios. Por favor, envie sua frase por texto.";

pub const RESET_OK_TEXT: &str = "🔄 Sua memória foi resetada com sucesso! Pode recomeçar.";

pub const RESET_FAILED_TEXT: &str =
    "⚠️ Não consegui resetar sua memória agora. Tente novamente em instantes.";

pub const WARMUP_NOTICE_TEXT: &str =
    "⏳ Estou acordando o professor... a primeira resposta pode demorar um pouquinho.";

/// Backend unreachable after all retries.
pub const BACKEND_UNAVAILABLE_TEXT: &str =
    "⚠️ O professor está demorando para responder. Tente novamente em alguns instantes.";

/// Backend answered without a usable reply.
pub const FALLBACK_REPLY_TEXT: &str =
    "🤔 Não consegui entender a resposta do professor. Pode reenviar sua frase?";

pub const UNEXPECTED_ERROR_TEXT: &str = "⚠️ Ocorreu um erro inesperado. Tente novamente.";

pub const CORRECT_BANNER: &str = "🎉 *Correto!*\n\n";
pub const INCORRECT_BANNER: &str = "📝 *Incorreto*\n\n";

/// Confirmation after choosing a level; names the level by its wire name.
pub fn level_confirmation(level: Level) -> String {
    format!("✅ Nível atualizado para: *{}*", level)
}
