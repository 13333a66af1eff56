//! Fragment styles for formatted replies - inline CSS matching the chat UI palette

/// Palette used across reply fragments
pub struct Palette;

impl Palette {
    pub const HEADER: &'static str = "#374151";
    pub const SUMMARY_BLUE: &'static str = "#2563eb";
    pub const HISTORY_RED: &'static str = "#dc2626";
    pub const MEDICATION_GREEN: &'static str = "#059669";
    pub const VISIT_BROWN: &'static str = "#7c2d12";
    pub const INSIGHT_PURPLE: &'static str = "#7c3aed";
    pub const FIELD_GRAY: &'static str = "#1f2937";
    pub const ACCENT_BLUE: &'static str = "#3b82f6";
    pub const BADGE_BG: &'static str = "#dbeafe";
    pub const DIVIDER_GRAY: &'static str = "#e5e7eb";
}

/// Container styles for known section labels, consulted via the label table
pub const SECTION_SUMMARY: &str = "color: #2563eb; font-size: 18px; margin-bottom: 10px;";
pub const SECTION_HISTORY: &str = "color: #dc2626; font-size: 16px; margin: 15px 0 8px 0;";
pub const SECTION_MEDICATIONS: &str = "color: #059669; font-size: 16px; margin: 15px 0 8px 0;";
pub const SECTION_VISIT: &str = "color: #7c2d12; font-size: 16px; margin: 15px 0 8px 0;";
pub const SECTION_INSIGHTS: &str = "color: #7c3aed; font-size: 16px; margin: 15px 0 8px 0;";

/// Line-break fragment emitted for each remaining newline
pub const LINE_BREAK: &str = "<br>";

/// Default header fragment for `### text` lines
pub fn header(text: &str) -> String {
    format!(
        "<h3 style=\"font-size: 16px; font-weight: 600; color: {}; margin: 15px 0 8px 0;\">{}</h3>",
        Palette::HEADER,
        text
    )
}

/// Header fragment restyled with a section-specific color
pub fn header_recolored(text: &str, color: &str) -> String {
    format!(
        "<h3 style=\"color: {}; font-size: 16px; font-weight: 600; margin: 15px 0 8px 0;\">{}</h3>",
        color, text
    )
}

/// Emphasis fragment for `**text**`
pub fn strong(text: &str) -> String {
    format!("<strong>{}</strong>", text)
}

/// Colored container wrapped around a section-label emphasis fragment
pub fn section_container(style: &str, inner: &str) -> String {
    format!("<div style=\"{}\">{}</div>", style, inner)
}

/// Span wrapped around a field-name emphasis fragment (`Name:`, `Gender:`, ...)
pub fn field_span(inner: &str) -> String {
    format!(
        "<span style=\"color: {}; font-weight: 600;\">{}</span>",
        Palette::FIELD_GRAY,
        inner
    )
}

/// Divider fragment replacing `---`
pub fn divider() -> String {
    format!(
        "<div style=\"border-top: 2px solid {}; margin: 20px 0; padding-top: 15px;\"></div>",
        Palette::DIVIDER_GRAY
    )
}

/// Indented bullet fragment; the glyph is repositioned via layout, not text order
pub fn bullet_item(text: &str) -> String {
    format!(
        "<div style=\"margin: 8px 0; padding-left: 20px; position: relative;\">\
         <span style=\"position: absolute; left: 0; color: {};\">\u{2022}</span>{}</div>",
        Palette::ACCENT_BLUE,
        text
    )
}

/// Numbered-list fragment for `N.` followed by an emphasis fragment
pub fn numbered_item(number: &str, bold: &str) -> String {
    format!(
        "<div style=\"margin: 12px 0; font-weight: 600; color: {};\">\
         <span style=\"color: {}; margin-right: 8px;\">{}.</span>{}</div>",
        Palette::HEADER,
        Palette::ACCENT_BLUE,
        number,
        bold
    )
}

/// Badge fragment highlighting an ISO date
pub fn date_badge(date: &str) -> String {
    format!(
        "<span style=\"background: {}; padding: 2px 6px; border-radius: 4px; font-weight: 500;\">{}</span>",
        Palette::BADGE_BG,
        date
    )
}

/// Highlight fragment for titled clinician names (`Dr. ...`)
pub fn doctor_span(name: &str) -> String {
    format!(
        "<span style=\"color: {}; font-weight: 600;\">{}</span>",
        Palette::MEDICATION_GREEN,
        name
    )
}
