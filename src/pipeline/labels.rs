//! Label tables consulted by the recoloring steps.
//!
//! Adding a new labeled section or field is a data change here, not a new
//! substitution in the pipeline. Matching is by exact label text,
//! case-sensitive.

use crate::style;

/// Known section labels and the container style each one receives when it
/// appears as an emphasis fragment.
pub const SECTION_LABELS: &[(&str, &str)] = &[
    ("Patient Summary", style::SECTION_SUMMARY),
    ("Medical History", style::SECTION_HISTORY),
    ("Medications", style::SECTION_MEDICATIONS),
    ("Recent Visit", style::SECTION_VISIT),
    ("Conversation Insights", style::SECTION_INSIGHTS),
];

/// Header text that overrides the default header color, with the color applied.
pub const RECOLORED_HEADERS: &[(&str, &str)] = &[("Medical History", style::Palette::HISTORY_RED)];

/// Field-name labels highlighted when they appear as bold fragments.
/// Each label includes its trailing colon.
pub const FIELD_LABELS: &[&str] = &["Name:", "User ID:", "Date of Birth:", "Gender:"];

/// Look up the container style for a section label, if it is a known one.
pub fn section_style(label: &str) -> Option<&'static str> {
    SECTION_LABELS
        .iter()
        .find(|(name, _)| *name == label)
        .map(|(_, style)| *style)
}
