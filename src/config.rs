// Configuration for tag classification
// Defaults follow the HTML void-element list; legacy() keeps the short list

/// HTML void elements: never have content or a closing tag.
pub const HTML_VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "param", "source",
    "track", "wbr",
];

/// Minimal unpaired-tag list of older truncation code.
pub const LEGACY_VOID_ELEMENTS: &[&str] = &["br", "hr", "img"];

/// Tag classification configuration
#[derive(Debug, Clone, PartialEq)]
pub struct TagConfig {
    /// Element names that never take a closing tag, matched case-insensitively
    /// (default: HTML_VOID_ELEMENTS)
    pub void_elements: Vec<String>,

    /// Lowercase the name in synthesized closing tags (default false: `<DIV>` closes with `</DIV>`)
    pub lowercase_close_tags: bool,
}

impl Default for TagConfig {
    fn default() -> Self {
        Self {
            void_elements: HTML_VOID_ELEMENTS.iter().map(|s| s.to_string()).collect(),
            lowercase_close_tags: false,
        }
    }
}

impl TagConfig {
    /// Only `br`, `hr` and `img` are treated as unpaired.
    pub fn legacy() -> Self {
        Self {
            void_elements: LEGACY_VOID_ELEMENTS.iter().map(|s| s.to_string()).collect(),
            ..Self::default()
        }
    }
}
