//! Wire models of the chat-completion API.

use serde::{Deserialize, Serialize};

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    /// Instructions for the model.
    System,
    /// Player input.
    User,
}

/// One message of the prompt sent to the model.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    /// Author of the message.
    pub role: ChatRole,
    /// Prompt text.
    pub content: String,
}

impl ChatMessage {
    /// Message setting the model's behaviour.
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::System,
            content: content.into(),
        }
    }

    /// Message written on behalf of the player.
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }
}

/// Body of `POST /chat/completions`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatCompletionRequest {
    /// Model identifier.
    pub model: String,
    /// Prompt, in order.
    pub messages: Vec<ChatMessage>,
    /// Upper bound on generated tokens.
    pub max_tokens: u32,
}

/// Completion response, decoded leniently: both fields may be absent.
#[derive(Debug, Default, Deserialize)]
pub struct ChatCompletionResponse {
    /// Generated alternatives.
    #[serde(default)]
    pub choices: Option<Vec<CompletionChoice>>,
    /// Error reported instead of choices.
    #[serde(default)]
    pub error: Option<ApiErrorBody>,
}

/// A single generated alternative.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompletionChoice {
    /// Generated message.
    #[serde(default)]
    pub message: Option<CompletionMessage>,
}

impl CompletionChoice {
    /// Text generated for this choice, if the model produced any.
    pub fn content(&self) -> Option<&str> {
        self.message.as_ref()?.content.as_deref()
    }
}

/// Assistant message carried by a [`CompletionChoice`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct CompletionMessage {
    /// Generated text.
    #[serde(default)]
    pub content: Option<String>,
}

/// Error object returned by the API instead of choices.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ApiErrorBody {
    /// Human readable description.
    #[serde(default)]
    pub message: Option<String>,
    /// Error category, e.g. `invalid_request_error`.
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    /// Machine readable code, string or number.
    #[serde(default)]
    pub code: Option<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn request_uses_lowercase_roles() {
        let request = ChatCompletionRequest {
            model: "gpt-4".into(),
            messages: vec![ChatMessage::system("be a GM"), ChatMessage::user("go")],
            max_tokens: 200,
        };
        let value = serde_json::to_value(&request).unwrap();
        assert_eq!(value["messages"][0]["role"], "system");
        assert_eq!(value["messages"][1]["role"], "user");
        assert_eq!(value["max_tokens"], 200);
    }

    #[test]
    fn decodes_success_payload() {
        let payload = json!({
            "id": "chatcmpl-1",
            "object": "chat.completion",
            "choices": [
                {"index": 0, "message": {"role": "assistant", "content": "  A cave.  "}, "finish_reason": "stop"}
            ],
            "usage": {"prompt_tokens": 40, "completion_tokens": 3, "total_tokens": 43}
        });
        let response: ChatCompletionResponse = serde_json::from_value(payload).unwrap();
        let choices = response.choices.unwrap();
        assert_eq!(choices[0].content(), Some("  A cave.  "));
        assert!(response.error.is_none());
    }

    #[test]
    fn decodes_error_payload() {
        let payload = json!({
            "error": {
                "message": "Incorrect API key provided",
                "type": "invalid_request_error",
                "param": null,
                "code": "invalid_api_key"
            }
        });
        let response: ChatCompletionResponse = serde_json::from_value(payload).unwrap();
        let error = response.error.unwrap();
        assert_eq!(error.message.as_deref(), Some("Incorrect API key provided"));
        assert_eq!(error.kind.as_deref(), Some("invalid_request_error"));
        assert!(response.choices.is_none());
    }
}
