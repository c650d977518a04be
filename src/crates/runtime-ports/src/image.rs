use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Image handed to the platform's image-to-text capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImageInput {
    /// Remote or data URL.
    Url(String),
    /// Raw encoded image bytes (png, jpeg, ...).
    Bytes { data: Vec<u8>, mime_type: String },
}

impl ImageInput {
    pub fn describe(&self) -> String {
        match self {
            ImageInput::Url(url) => format!("url({})", url),
            ImageInput::Bytes { data, mime_type } => {
                format!("bytes({}, {} bytes)", mime_type, data.len())
            }
        }
    }
}

/// Image-to-text result: either an object with a `text` field or a bare string.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Img2TxtResponse {
    Plain(String),
    Structured {
        #[serde(default)]
        text: Option<String>,
        #[serde(flatten)]
        extra: Map<String, Value>,
    },
}

impl Img2TxtResponse {
    pub fn structured(text: impl Into<String>) -> Self {
        Img2TxtResponse::Structured {
            text: Some(text.into()),
            extra: Map::new(),
        }
    }

    /// The `text` field when present and non-empty, otherwise the raw result.
    pub fn into_text(self) -> String {
        match self {
            Img2TxtResponse::Plain(text) => text,
            Img2TxtResponse::Structured { text: Some(text), .. } if !text.is_empty() => text,
            Img2TxtResponse::Structured { text, extra } => {
                let mut raw = extra;
                if let Some(text) = text {
                    raw.insert("text".to_string(), Value::String(text));
                }
                Value::Object(raw).to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn prefers_text_field() {
        let response: Img2TxtResponse =
            serde_json::from_value(json!({ "text": "scanned", "confidence": 0.9 })).unwrap();
        assert_eq!(response.into_text(), "scanned");
    }

    #[test]
    fn bare_string_is_returned_as_is() {
        let response: Img2TxtResponse = serde_json::from_value(json!("plain")).unwrap();
        assert_eq!(response.into_text(), "plain");
    }

    #[test]
    fn falls_back_to_raw_object_without_text() {
        let response: Img2TxtResponse =
            serde_json::from_value(json!({ "lines": ["a"] })).unwrap();
        assert_eq!(response.into_text(), r#"{"lines":["a"]}"#);
    }
}
