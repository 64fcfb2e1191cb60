use serde_json::Value;
use std::fmt;

/// Response body decoded as UTF-8 text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Payload(pub String);

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    Json(String),
    Fallback { message: String, raw: String },
}

impl fmt::Display for Rendered {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rendered::Json(pretty) => write!(f, "{}", pretty),
            Rendered::Fallback { message, raw } => {
                write!(f, "Error parsing JSON: {}\nRaw data: {}", message, raw)
            }
        }
    }
}

/// Re-serializes the payload with 2-space indentation, or falls back to the
/// parser's message plus the raw text.
pub fn render(payload: &Payload) -> Rendered {
    let fallback = |message: String| Rendered::Fallback {
        message,
        raw: payload.0.clone(),
    };

    match serde_json::from_str::<Value>(&payload.0) {
        Ok(value) => match serde_json::to_string_pretty(&value) {
            Ok(pretty) => Rendered::Json(pretty),
            Err(e) => fallback(e.to_string()),
        },
        Err(e) => fallback(e.to_string()),
    }
}
