//! Escape pre-pass for untrusted reply sources.
//!
//! The pipeline emits raw markup and performs no sanitization of its own, so
//! a deployment whose reply source is not trusted must escape first. Enabled
//! via `Formatter::with_escape_input`; runs before any pattern step so the
//! pipeline's own fragments are never escaped.

/// Escape the markup-significant characters of `text`.
pub fn escape_markup(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}
