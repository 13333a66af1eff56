//! Replyfmt - formatting pipeline for care-assistant chat replies
//!
//! Turns the semi-structured text an assistant backend returns into styled
//! HTML markup ready for display:
//! - Ordered substitution pipeline (headers, bold, labels, bullets, dates)
//! - Table-driven recoloring of known medical section and field labels
//! - Opt-in escape pre-pass for untrusted reply sources
//!
//! The formatter is pure, synchronous, and total over all string inputs; the
//! only fallible surfaces are the webhook envelope and the CLI's I/O.

pub mod envelope;
pub mod escape;
pub mod pipeline;
pub mod style;

pub use envelope::{extract_reply, ReplyEnvelope, MISSING_REPLY_PLACEHOLDER};
pub use pipeline::{format, Formatter};

/// Result type for Replyfmt operations
pub type Result<T> = std::result::Result<T, ReplyfmtError>;

/// Errors that can occur around the formatter (never inside it)
#[derive(Debug, thiserror::Error)]
pub enum ReplyfmtError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
