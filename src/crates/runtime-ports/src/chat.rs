use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatOptions {
    pub model: String,
}

impl ChatOptions {
    pub fn new(model: impl Into<String>) -> Self {
        Self { model: model.into() }
    }
}

/// One element of a content array: either a bare string or an object
/// carrying an optional `text` field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentPart {
    Text(String),
    Block {
        #[serde(default)]
        text: Option<String>,
    },
}

impl ContentPart {
    pub fn text(&self) -> Option<&str> {
        match self {
            ContentPart::Text(text) => Some(text),
            ContentPart::Block { text } => text.as_deref(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

impl MessageContent {
    /// Text of the first content element.
    pub fn first_text(&self) -> Option<&str> {
        match self {
            MessageContent::Text(text) => Some(text),
            MessageContent::Parts(parts) => parts.first().and_then(ContentPart::text),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default)]
    pub content: Option<MessageContent>,
}

/// Chat completion envelope.
///
/// Integrations have placed the model text in different spots over time;
/// this is the closed set of shapes accepted. Anything else deserializes to
/// `Unrecognized` and is treated as carrying no content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ChatResponse {
    /// `"..."`
    Text(String),
    /// `{ "content": ["..."] }` or `{ "content": [{ "text": "..." }] }`
    Content { content: MessageContent },
    /// `{ "message": { "content": ... } }`
    Message { message: ChatMessage },
    Unrecognized(Value),
}

impl ChatResponse {
    pub fn text(text: impl Into<String>) -> Self {
        ChatResponse::Text(text.into())
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        ChatResponse::Message {
            message: ChatMessage {
                role: Some("assistant".to_string()),
                content: Some(MessageContent::Text(content.into())),
            },
        }
    }

    /// Text of the first content element, if the envelope carries one.
    pub fn first_text(&self) -> Option<&str> {
        match self {
            ChatResponse::Text(text) => Some(text),
            ChatResponse::Content { content } => content.first_text(),
            ChatResponse::Message { message } => {
                message.content.as_ref().and_then(MessageContent::first_text)
            }
            ChatResponse::Unrecognized(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> ChatResponse {
        serde_json::from_value(value).expect("every value maps to some variant")
    }

    #[test]
    fn accepts_string_content_array() {
        let response = parse(json!({ "content": ["  hello  ", "ignored"] }));
        assert!(matches!(response, ChatResponse::Content { .. }));
        assert_eq!(response.first_text(), Some("  hello  "));
    }

    #[test]
    fn accepts_text_block_content_array() {
        let response = parse(json!({ "content": [{ "type": "text", "text": "block" }] }));
        assert_eq!(response.first_text(), Some("block"));
    }

    #[test]
    fn accepts_nested_message() {
        let response = parse(json!({
            "index": 0,
            "message": { "role": "assistant", "content": "{\"a\":1}" }
        }));
        assert!(matches!(response, ChatResponse::Message { .. }));
        assert_eq!(response.first_text(), Some("{\"a\":1}"));
    }

    #[test]
    fn block_without_text_has_no_content() {
        let response = parse(json!({ "content": [{ "type": "image" }] }));
        assert_eq!(response.first_text(), None);
    }

    #[test]
    fn unknown_shapes_are_unrecognized() {
        let response = parse(json!({ "choices": [] }));
        assert!(matches!(response, ChatResponse::Unrecognized(_)));
        assert_eq!(response.first_text(), None);

        let response = parse(json!({ "content": [] }));
        assert_eq!(response.first_text(), None);
    }
}
