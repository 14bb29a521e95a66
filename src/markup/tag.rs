use std::collections::HashSet;

use lazy_static::lazy_static;

use super::chars::is_markup_whitespace;
use crate::config::TagConfig;
use crate::error::TagError;

lazy_static! {
    static ref DEFAULT_RULES: TagRules = TagRules::default();
}

/// Elements whose body is opaque to the scanner and never balanced.
const OPAQUE_ELEMENT: &str = "script";

/// `<`, at least one character, `>`.
fn is_tag_shaped(text: &str) -> bool {
    text.len() >= 3 && text.starts_with('<') && text.ends_with('>')
}

fn is_valid_element_name(name: &str) -> bool {
    !name.is_empty()
        && !name
            .chars()
            .any(|c| is_markup_whitespace(c) || matches!(c, '<' | '>' | '/'))
}

/// `<` or `< `, then `!--`, anything, `-->`.
pub fn is_html_comment(text: &str) -> bool {
    let Some(mut body) = text.strip_prefix('<') else {
        return false;
    };
    if let Some(c) = body.chars().next().filter(|&c| is_markup_whitespace(c)) {
        body = &body[c.len_utf8()..];
    }
    body.strip_prefix("!--")
        .is_some_and(|rest| rest.ends_with("-->"))
}

/// Any `<...>` or `</...>` span that is not a comment.
pub fn is_html_tag(text: &str) -> bool {
    is_tag_shaped(text) && !is_html_comment(text)
}

/// Name of a tag: the characters right after `<` (or `</`) up to whitespace,
/// `/` or `>`. `None` for comments, non-tags and tags with no name.
pub fn tag_name(text: &str) -> Option<&str> {
    if !is_html_tag(text) {
        return None;
    }
    let inner = &text[1..text.len() - 1];
    let inner = inner.strip_prefix('/').unwrap_or(inner);
    let end = inner
        .find(|c: char| is_markup_whitespace(c) || c == '/' || c == '>')
        .unwrap_or(inner.len());
    let name = &inner[..end];
    (!name.is_empty()).then_some(name)
}

/// Opening-tag test with the default rules.
pub fn is_open_tag(text: &str) -> bool {
    DEFAULT_RULES.is_open_tag(text)
}

/// Closing tag for `text` with the default rules.
pub fn close_tag_for(text: &str) -> Result<String, TagError> {
    DEFAULT_RULES.close_tag_for(text)
}

/// Shared default rules, built on first use.
pub fn default_rules() -> &'static TagRules {
    &DEFAULT_RULES
}

/// Decides which tags open an element and how to close them.
#[derive(Debug, Clone)]
pub struct TagRules {
    void_elements: HashSet<String>,
    lowercase_close_tags: bool,
}

impl Default for TagRules {
    fn default() -> Self {
        let config = TagConfig::default();
        Self {
            void_elements: config
                .void_elements
                .iter()
                .map(|name| name.to_ascii_lowercase())
                .collect(),
            lowercase_close_tags: config.lowercase_close_tags,
        }
    }
}

impl TagRules {
    /// Builds rules from a config, rejecting void-element names that could
    /// never match a tag name.
    pub fn from_config(config: &TagConfig) -> Result<Self, TagError> {
        let mut void_elements = HashSet::with_capacity(config.void_elements.len());
        for name in &config.void_elements {
            if !is_valid_element_name(name) {
                return Err(TagError::InvalidElementName(name.clone()));
            }
            void_elements.insert(name.to_ascii_lowercase());
        }
        Ok(Self {
            void_elements,
            lowercase_close_tags: config.lowercase_close_tags,
        })
    }

    pub fn is_void_element(&self, name: &str) -> bool {
        self.void_elements.contains(&name.to_ascii_lowercase())
    }

    /// A tag that needs a matching closing tag: not a closing tag, not a
    /// void element, not `script`, not a declaration (`<!DOCTYPE>`, `<?xml>`)
    /// and not written self-closing (`<x />`).
    pub fn is_open_tag(&self, text: &str) -> bool {
        if text.starts_with("</") || text.ends_with("/>") {
            return false;
        }
        let Some(name) = tag_name(text) else {
            return false;
        };
        !name.starts_with(['!', '?'])
            && !name.eq_ignore_ascii_case(OPAQUE_ELEMENT)
            && !self.is_void_element(name)
    }

    /// `</name>` for an opening tag, attributes dropped. The name keeps its
    /// source case unless the rules lowercase it.
    pub fn close_tag_for(&self, text: &str) -> Result<String, TagError> {
        if !self.is_open_tag(text) {
            return Err(TagError::NotAnOpenTag(text.to_string()));
        }
        let name = tag_name(text).ok_or_else(|| TagError::NotAnOpenTag(text.to_string()))?;
        if self.lowercase_close_tags {
            Ok(format!("</{}>", name.to_ascii_lowercase()))
        } else {
            Ok(format!("</{}>", name))
        }
    }
}
