use serde::{Deserialize, Serialize};

use super::{error_from_response, OpenAiClient, OpenAiError};

/// A role-tagged message in a chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: "system".to_string(),
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: "user".to_string(),
            content: content.into(),
        }
    }
}

/// A non-streaming chat completion request.
#[derive(Debug, Clone, Serialize)]
pub struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    pub max_tokens: u32,
    pub temperature: f64,
}

#[derive(Debug, Deserialize)]
struct ChatCompletionResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    #[serde(default)]
    message: ResponseMessage,
}

#[derive(Debug, Default, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: String,
}

impl OpenAiClient {
    /// Submit a chat completion and return the first choice's content.
    pub async fn chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<String, OpenAiError> {
        let response = self
            .post("/v1/chat/completions")
            .json(request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(error_from_response(response).await);
        }

        let completion: ChatCompletionResponse = response.json().await?;
        let choice = completion
            .choices
            .into_iter()
            .next()
            .ok_or(OpenAiError::EmptyCompletion)?;

        Ok(choice.message.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_role_tagged_messages() {
        let request = ChatCompletionRequest {
            model: "gpt-3.5-turbo".into(),
            messages: vec![
                ChatMessage::system("Be brief."),
                ChatMessage::user("Hello!"),
            ],
            max_tokens: 100,
            temperature: 0.8,
        };

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["messages"][0]["role"], "system");
        assert_eq!(json["messages"][0]["content"], "Be brief.");
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["max_tokens"], 100);
        assert_eq!(json["temperature"], 0.8);
    }

    #[test]
    fn deserializes_completion_content() {
        let body = r#"{"id":"chatcmpl-1","choices":[{"index":0,"message":{"role":"assistant","content":"You will thrive."},"finish_reason":"stop"}]}"#;
        let completion: ChatCompletionResponse = serde_json::from_str(body).unwrap();
        assert_eq!(completion.choices[0].message.content, "You will thrive.");
    }

    #[test]
    fn deserializes_choice_less_completion() {
        let completion: ChatCompletionResponse =
            serde_json::from_str(r#"{"id":"chatcmpl-2"}"#).unwrap();
        assert!(completion.choices.is_empty());
    }
}
