use crate::openai::{ChatCompletionRequest, ChatMessage, OpenAiError};

pub const MODEL: &str = "gpt-3.5-turbo";
pub const MAX_TOKENS: u32 = 100;
pub const TEMPERATURE: f64 = 0.8;

pub const SYSTEM_PROMPT: &str = "You are a playful hippo fortune teller. \
    Give short, whimsical fortune predictions in 1-2 sentences. \
    Be cheerful, slightly quirky, and optimistic. \
    Use emojis sparingly but effectively.";

pub const USER_PROMPT: &str = "Tell me my fortune for today. Make it fun and optimistic!";

const QUOTA_MESSAGE: &str =
    "The hippo has used up all its wisdom for today. Please try again tomorrow! 🦛✨";
const CREDENTIAL_MESSAGE: &str =
    "The hippo forgot its magic words. Please check the configuration! 🦛🔑";
const NAP_MESSAGE: &str = "The hippo is taking a nap. Please try again later! 🦛💤";

/// Build the fixed fortune prompt.
pub fn request() -> ChatCompletionRequest {
    ChatCompletionRequest {
        model: MODEL.to_string(),
        messages: vec![
            ChatMessage::system(SYSTEM_PROMPT),
            ChatMessage::user(USER_PROMPT),
        ],
        max_tokens: MAX_TOKENS,
        temperature: TEMPERATURE,
    }
}

/// Select the user-facing message for a failed fortune request.
///
/// Known provider codes get a tailored message; anything else, transport
/// errors included, falls back to the nap message.
pub fn user_message(error: &OpenAiError) -> &'static str {
    match error.code() {
        Some("insufficient_quota") => QUOTA_MESSAGE,
        Some("invalid_api_key") => CREDENTIAL_MESSAGE,
        _ => NAP_MESSAGE,
    }
}
