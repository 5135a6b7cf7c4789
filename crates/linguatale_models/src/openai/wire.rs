//! Wire types for the OpenAI chat-completions endpoint.

use linguatale_core::{Message, Role};
use serde::{Deserialize, Serialize};

/// Request body for `POST /v1/chat/completions`.
#[derive(Debug, Clone, Serialize)]
pub(crate) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<ChatMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
}

/// A single role-tagged message on the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct ChatMessage {
    pub role: String,
    pub content: String,
}

impl From<&Message> for ChatMessage {
    fn from(msg: &Message) -> Self {
        let role = match msg.role {
            Role::System => "system",
            Role::User => "user",
            Role::Assistant => "assistant",
        };
        Self {
            role: role.to_string(),
            content: msg.content.clone(),
        }
    }
}

/// Response body for `POST /v1/chat/completions`.
///
/// Only the fields the gateway reads are modeled; the endpoint returns more.
#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatCompletionResponse {
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatChoice {
    pub message: ChatChoiceMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub(crate) struct ChatChoiceMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn roles_map_to_wire_names() {
        let msg: ChatMessage = (&Message::system("ctx")).into();
        assert_eq!(msg.role, "system");
        let msg: ChatMessage = (&Message::user("hi")).into();
        assert_eq!(msg.role, "user");
        let msg: ChatMessage = (&Message::assistant("ok")).into();
        assert_eq!(msg.role, "assistant");
    }

    #[test]
    fn absent_sampling_parameters_are_omitted() {
        let body = ChatCompletionRequest {
            model: "gpt-3.5-turbo".to_string(),
            messages: vec![(&Message::user("hi")).into()],
            temperature: None,
            top_p: Some(0.9),
            max_tokens: None,
        };
        let value = serde_json::to_value(&body).unwrap();
        assert!(value.get("temperature").is_none());
        assert_eq!(value["top_p"], 0.9);
        assert_eq!(value["messages"][0]["role"], "user");
    }

    #[test]
    fn response_parses_with_missing_content() {
        let raw = r#"{"choices":[{"message":{"role":"assistant"}}]}"#;
        let parsed: ChatCompletionResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.choices[0].message.content.is_none());
    }
}
