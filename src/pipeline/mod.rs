//! Reply formatting pipeline
//!
//! Converts a semi-structured assistant reply into styled HTML markup through
//! an ordered sequence of text substitutions. The ordering is load-bearing:
//! each step operates on the cumulative output of the previous one, so label
//! recoloring matches the `<strong>` fragments produced by the bold step, and
//! whitespace normalization runs on raw newlines before they become `<br>`.
//!
//! The pipeline is strictly forward: no step re-scans the output of a later
//! step. Overlap between patterns is resolved by step order - the first step
//! to wrap a span wins, and the free-pattern steps (dates, titled names) only
//! match text outside existing tags so they never touch attribute text.
//!
//! Formatting is pure and total: any input string produces an output string,
//! the empty string comes back unchanged, and no state is held across calls.
//! It is NOT idempotent - re-formatting formatted output may double-wrap.
//!
//! Input is trusted markup-wise by default; enable the escape pre-pass via
//! [`Formatter::with_escape_input`] when the source is untrusted.

pub mod labels;

use crate::{escape, style};
use regex::{Captures, Regex};

/// Reply formatter holding the compiled patterns for every pipeline step.
///
/// Compile once, format many: construction compiles ~10 regexes, while
/// [`Formatter::format`] is allocation-only.
pub struct Formatter {
    header_re: Regex,
    bold_re: Regex,
    field_re: Regex,
    divider_re: Regex,
    bullet_re: Regex,
    numbered_re: Regex,
    date_re: Regex,
    doctor_re: Regex,
    spaces_re: Regex,
    blank_runs_re: Regex,
    tag_re: Regex,
    escape_input: bool,
}

impl Formatter {
    pub fn new() -> Self {
        let field_alternation = labels::FIELD_LABELS
            .iter()
            .map(|label| regex::escape(label))
            .collect::<Vec<_>>()
            .join("|");

        Self {
            header_re: Regex::new(r"(?m)^### (.+)$").unwrap(),
            bold_re: Regex::new(r"\*\*(.*?)\*\*").unwrap(),
            field_re: Regex::new(&format!(r"(<strong>(?:{})</strong>)", field_alternation))
                .unwrap(),
            divider_re: Regex::new(r"\s*---\s*").unwrap(),
            bullet_re: Regex::new(r"\s*\u{2022}\s+([^\u{2022}\n]+)").unwrap(),
            numbered_re: Regex::new(r"(\d+)\.\s+(<strong>.*?</strong>)").unwrap(),
            date_re: Regex::new(r"\b\d{4}-\d{2}-\d{2}\b").unwrap(),
            doctor_re: Regex::new(r"Dr\.\s+[A-Za-z\s]+").unwrap(),
            spaces_re: Regex::new(r"[ \t]+").unwrap(),
            blank_runs_re: Regex::new(r"\n{3,}").unwrap(),
            tag_re: Regex::new(r"<[^>]*>").unwrap(),
            escape_input: false,
        }
    }

    /// Escape markup-significant characters before the pipeline runs.
    /// Required when the reply source is untrusted; off by default because
    /// the paired backend is trusted and replies may carry no markup of
    /// their own.
    pub fn with_escape_input(mut self, escape: bool) -> Self {
        self.escape_input = escape;
        self
    }

    /// Run the full pipeline. Total: never fails, never panics on any input.
    pub fn format(&self, raw: &str) -> String {
        if raw.is_empty() {
            return raw.to_string();
        }

        let text = if self.escape_input {
            escape::escape_markup(raw)
        } else {
            raw.to_string()
        };

        // Pattern steps, in contract order
        let text = self.headers(&text);
        let text = self.bold(&text);
        let text = self.section_labels(&text);
        let text = self.recolor_headers(&text);
        let text = self.field_labels(&text);
        let text = self.dividers(&text);
        let text = self.bullets(&text);
        let text = self.numbered(&text);
        let text = self.dates(&text);
        let text = self.doctors(&text);

        // Whitespace cleanup on raw newlines, then break conversion
        let text = self.normalize_whitespace(&text);
        self.breaks(&text)
    }

    /// Step 1: `### text` at line start becomes a header fragment.
    fn headers(&self, text: &str) -> String {
        self.header_re
            .replace_all(text, |caps: &Captures| style::header(&caps[1]))
            .into_owned()
    }

    /// Step 2: `**text**` becomes an emphasis fragment.
    fn bold(&self, text: &str) -> String {
        self.bold_re
            .replace_all(text, |caps: &Captures| style::strong(&caps[1]))
            .into_owned()
    }

    /// Step 3: known section labels get wrapped in their colored container.
    /// Table-driven; see [`labels::SECTION_LABELS`].
    fn section_labels(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (label, container_style) in labels::SECTION_LABELS {
            let fragment = style::strong(label);
            if out.contains(&fragment) {
                out = out.replace(
                    &fragment,
                    &style::section_container(container_style, &fragment),
                );
            }
        }
        out
    }

    /// Step 4: headers whose text is a recolored label swap their default
    /// color for the label's. The whole fragment is replaced so the override
    /// actually takes effect.
    fn recolor_headers(&self, text: &str) -> String {
        let mut out = text.to_string();
        for (label, color) in labels::RECOLORED_HEADERS {
            let default = style::header(label);
            if out.contains(&default) {
                out = out.replace(&default, &style::header_recolored(label, color));
            }
        }
        out
    }

    /// Step 5: known field-name labels appearing as bold fragments get the
    /// field span.
    fn field_labels(&self, text: &str) -> String {
        self.field_re
            .replace_all(text, |caps: &Captures| style::field_span(&caps[1]))
            .into_owned()
    }

    /// Step 6: `---` with surrounding whitespace becomes a divider.
    fn dividers(&self, text: &str) -> String {
        self.divider_re
            .replace_all(text, |_: &Captures| style::divider())
            .into_owned()
    }

    /// Step 7: each `•` bullet and its text up to the next bullet or line end
    /// becomes an indented item with a layout-positioned glyph.
    fn bullets(&self, text: &str) -> String {
        self.bullet_re
            .replace_all(text, |caps: &Captures| style::bullet_item(&caps[1]))
            .into_owned()
    }

    /// Step 8: a number immediately followed by a bold fragment becomes a
    /// numbered item. Plain numbered text without bold is left as-is; the
    /// original pipeline behaves this way and callers rely on it.
    fn numbered(&self, text: &str) -> String {
        self.numbered_re
            .replace_all(text, |caps: &Captures| {
                style::numbered_item(&caps[1], &caps[2])
            })
            .into_owned()
    }

    /// Step 9: ISO dates (exactly 4-2-2 digit groups) get a badge. Applied
    /// outside tags only.
    fn dates(&self, text: &str) -> String {
        self.replace_outside_tags(text, &self.date_re, |caps: &Captures| {
            style::date_badge(&caps[0])
        })
    }

    /// Step 10: `Dr.` followed by a name gets the clinician highlight.
    /// Applied outside tags only.
    fn doctors(&self, text: &str) -> String {
        self.replace_outside_tags(text, &self.doctor_re, |caps: &Captures| {
            style::doctor_span(&caps[0])
        })
    }

    /// Step 11: collapse space/tab runs, strip leading and trailing newlines,
    /// cap blank-line runs at one blank line.
    fn normalize_whitespace(&self, text: &str) -> String {
        let collapsed = self.spaces_re.replace_all(text, " ");
        let trimmed = collapsed.trim_matches('\n');
        self.blank_runs_re.replace_all(trimmed, "\n\n").into_owned()
    }

    /// Step 12: remaining newlines become break fragments.
    fn breaks(&self, text: &str) -> String {
        text.replace('\n', style::LINE_BREAK)
    }

    /// Apply `re` only to the text runs between markup tags, leaving tags
    /// (and their attribute text) untouched. This is the overlap policy for
    /// the free-pattern steps: earlier steps' fragments cannot be corrupted,
    /// while matches inside element content still nest cleanly.
    fn replace_outside_tags<F>(&self, text: &str, re: &Regex, replace: F) -> String
    where
        F: Fn(&Captures) -> String,
    {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;
        for tag in self.tag_re.find_iter(text) {
            out.push_str(&re.replace_all(&text[last..tag.start()], |caps: &Captures| {
                replace(caps)
            }));
            out.push_str(tag.as_str());
            last = tag.end();
        }
        out.push_str(&re.replace_all(&text[last..], |caps: &Captures| replace(caps)));
        out
    }
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience wrapper: build a one-shot [`Formatter`] and run it.
pub fn format(raw: &str) -> String {
    Formatter::new().format(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fmt(input: &str) -> String {
        Formatter::new().format(input)
    }

    #[test]
    fn test_empty_input_unchanged() {
        assert_eq!(fmt(""), "");
    }

    #[test]
    fn test_plain_prose_survives() {
        assert_eq!(fmt("hello world"), "hello world");
    }

    #[test]
    fn test_header_line() {
        let out = fmt("### Lab Results");
        assert_eq!(out, style::header("Lab Results"));
    }

    #[test]
    fn test_header_must_start_line() {
        let out = fmt("note ### Lab Results");
        assert!(!out.contains("<h3"));
    }

    #[test]
    fn test_bold_markers() {
        assert_eq!(fmt("**key** point"), "<strong>key</strong> point");
    }

    #[test]
    fn test_section_label_container() {
        let out = fmt("**Patient Summary**");
        assert_eq!(
            out,
            style::section_container(
                style::SECTION_SUMMARY,
                &style::strong("Patient Summary")
            )
        );
    }

    #[test]
    fn test_unknown_label_stays_plain_bold() {
        let out = fmt("**Allergies**");
        assert_eq!(out, style::strong("Allergies"));
    }

    #[test]
    fn test_medical_history_header_recolored() {
        let out = fmt("### Medical History");
        assert_eq!(
            out,
            style::header_recolored("Medical History", style::Palette::HISTORY_RED)
        );
        assert!(!out.contains(style::Palette::HEADER));
    }

    #[test]
    fn test_field_label_span() {
        let out = fmt("**Name:** John Doe");
        assert_eq!(
            out,
            format!("{} John Doe", style::field_span(&style::strong("Name:")))
        );
    }

    #[test]
    fn test_divider() {
        let out = fmt("above\n---\nbelow");
        assert_eq!(out, format!("above{}below", style::divider()));
    }

    #[test]
    fn test_bullets_consume_glyph_and_newlines() {
        let out = fmt("\u{2022} First item\n\u{2022} Second item");
        assert_eq!(
            out,
            format!(
                "{}{}",
                style::bullet_item("First item"),
                style::bullet_item("Second item")
            )
        );
        // Every remaining glyph sits inside a positioned span
        assert_eq!(out.matches('\u{2022}').count(), 2);
        assert_eq!(out.matches("\u{2022}</span>").count(), 2);
    }

    #[test]
    fn test_numbered_item_requires_bold() {
        let out = fmt("1. **Aspirin** 81mg");
        assert!(out.contains("margin-right: 8px;\">1.</span>"));
        assert!(out.contains(&style::strong("Aspirin")));

        // Plain numbered text is left unconverted
        let plain = fmt("2. Tylenol");
        assert_eq!(plain, "2. Tylenol");
    }

    #[test]
    fn test_date_badge_wraps_exactly_the_date() {
        let out = fmt("Visit date: 2024-01-15");
        assert_eq!(
            out,
            format!("Visit date: {}", style::date_badge("2024-01-15"))
        );
    }

    #[test]
    fn test_date_requires_exact_digit_groups() {
        assert_eq!(fmt("id 12345-67-89 end"), "id 12345-67-89 end");
    }

    #[test]
    fn test_date_never_matches_inside_attribute_text() {
        // The divider fragment's attributes carry digits; a date right next
        // to it must still only badge the date itself.
        let out = fmt("---\n2024-01-15");
        assert!(out.contains(&style::date_badge("2024-01-15")));
        assert!(out.contains("border-top: 2px solid"));
    }

    #[test]
    fn test_doctor_highlight() {
        let out = fmt("Call Dr. Lee.");
        assert_eq!(out, format!("Call {}.", style::doctor_span("Dr. Lee")));
    }

    #[test]
    fn test_whitespace_collapse_and_breaks() {
        assert_eq!(fmt("a  \t b"), "a b");
        assert_eq!(fmt("\n\nline\n\n"), "line");
        assert_eq!(fmt("line1\n\n\n\nline2"), "line1<br><br>line2");
    }

    #[test]
    fn test_ordering_headers_before_bold() {
        // A bold run inside a header line: the header claims the whole line
        // first, then the bold step formats within it.
        let out = fmt("### Results for **John**");
        assert!(out.starts_with("<h3"));
        assert!(out.contains(&style::strong("John")));
    }

    #[test]
    fn test_not_idempotent() {
        let once = fmt("**Patient Summary**");
        let twice = fmt(&once);
        // The label step re-matches its own <strong> content and double-wraps
        assert_ne!(once, twice);
    }
}
