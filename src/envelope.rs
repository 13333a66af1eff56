//! Webhook response envelope
//!
//! The assistant backend answers each chat submission with a JSON body whose
//! `reply` field carries the raw reply text. An absent, empty, or non-string
//! field is handled here with a placeholder message, before the formatter
//! ever runs; malformed JSON is the caller's error to handle.

use crate::Result;
use serde::Deserialize;
use serde_json::Value;

/// Shown in place of a reply when the backend answered without one.
pub const MISSING_REPLY_PLACEHOLDER: &str = "Sorry, I didn't receive a response.";

/// JSON response body from the assistant webhook.
///
/// The field is kept as a raw value so a backend that answers with a
/// non-string reply degrades to the placeholder instead of a parse error.
#[derive(Debug, Clone, Deserialize)]
pub struct ReplyEnvelope {
    #[serde(default)]
    pub reply: Option<Value>,
}

impl ReplyEnvelope {
    pub fn from_json(body: &str) -> Result<Self> {
        Ok(serde_json::from_str(body)?)
    }

    /// The reply text, or the placeholder when the field is absent, empty,
    /// or not a string.
    pub fn reply_or_placeholder(self) -> String {
        match self.reply {
            Some(Value::String(reply)) if !reply.is_empty() => reply,
            _ => MISSING_REPLY_PLACEHOLDER.to_string(),
        }
    }
}

/// Parse a webhook response body and pull out the reply text.
pub fn extract_reply(body: &str) -> Result<String> {
    Ok(ReplyEnvelope::from_json(body)?.reply_or_placeholder())
}
