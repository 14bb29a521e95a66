use std::ops::Range;

use super::tag::{self, TagRules};
use crate::error::TagError;

/// What the scanner matched for a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    /// A whole `<script>...</script>` block.
    Script,
    /// Any other `<...>` span: opening, closing, self-closing, declarations.
    Tag,
    /// `<!-- ... -->`
    Comment,
    Whitespace,
    /// Text, digits, punctuation and symbols, plus spans nothing else matched.
    Content,
    Emoji,
}

impl TokenKind {
    /// Whether a truncation budget counts this token as visible text.
    pub fn counts_toward_length(self) -> bool {
        matches!(self, TokenKind::Content | TokenKind::Emoji)
    }
}

/// A classified fragment of markup.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    /// Matched text with whitespace runs collapsed to a single space.
    pub text: String,
    pub kind: TokenKind,
    /// Byte range of the raw match in the tokenized input.
    pub span: Range<usize>,
}

impl Token {
    pub fn is_html_tag(&self) -> bool {
        tag::is_html_tag(&self.text)
    }

    pub fn is_html_comment(&self) -> bool {
        tag::is_html_comment(&self.text)
    }

    /// True for tags that need a matching closing tag. Uses the default rules;
    /// see `is_open_tag_with` for custom ones.
    pub fn is_open_tag(&self) -> bool {
        tag::is_open_tag(&self.text)
    }

    pub fn is_open_tag_with(&self, rules: &TagRules) -> bool {
        rules.is_open_tag(&self.text)
    }

    pub fn tag_name(&self) -> Option<&str> {
        tag::tag_name(&self.text)
    }

    /// Closing tag balancing this token, e.g. `</span>` for `<span class="x">`.
    /// Uses the default rules; see `close_tag_with`.
    pub fn close_tag(&self) -> Result<String, TagError> {
        tag::close_tag_for(&self.text)
    }

    pub fn close_tag_with(&self, rules: &TagRules) -> Result<String, TagError> {
        rules.close_tag_for(&self.text)
    }

    pub fn counts_toward_length(&self) -> bool {
        self.kind.counts_toward_length()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::TagConfig;

    fn token(text: &str, kind: TokenKind) -> Token {
        Token {
            text: text.to_string(),
            kind,
            span: 0..text.len(),
        }
    }

    #[test]
    fn test_counts_toward_length() {
        assert!(token("hi", TokenKind::Content).counts_toward_length());
        assert!(token("\u{1F3FB}", TokenKind::Emoji).counts_toward_length());
        assert!(!token("<b>", TokenKind::Tag).counts_toward_length());
        assert!(!token("<!-- x -->", TokenKind::Comment).counts_toward_length());
        assert!(!token("<script></script>", TokenKind::Script).counts_toward_length());
        assert!(!token(" ", TokenKind::Whitespace).counts_toward_length());
    }

    #[test]
    fn test_token_tag_queries() {
        let open = token("<span class=\"x\">", TokenKind::Tag);
        assert!(open.is_html_tag());
        assert!(open.is_open_tag());
        assert_eq!(open.tag_name(), Some("span"));
        assert_eq!(open.close_tag().unwrap(), "</span>");
    }

    #[test]
    fn test_token_comment_queries() {
        let comment = token("<!-- note -->", TokenKind::Comment);
        assert!(comment.is_html_comment());
        assert!(!comment.is_html_tag());
        assert!(!comment.is_open_tag());
        assert!(matches!(comment.close_tag(), Err(TagError::NotAnOpenTag(_))));
    }

    #[test]
    fn test_token_queries_with_custom_rules() {
        let legacy = TagRules::from_config(&TagConfig::legacy()).unwrap();
        let input = token("<input type=\"text\">", TokenKind::Tag);
        assert!(!input.is_open_tag());
        assert!(input.is_open_tag_with(&legacy));
        assert!(input.close_tag().is_err());
        assert_eq!(input.close_tag_with(&legacy).unwrap(), "</input>");

        let lowercase = TagRules::from_config(&TagConfig {
            lowercase_close_tags: true,
            ..TagConfig::default()
        })
        .unwrap();
        let div = token("<DIV>", TokenKind::Tag);
        assert_eq!(div.close_tag_with(&lowercase).unwrap(), "</div>");
    }

    #[test]
    fn test_token_content_queries_are_false() {
        let word = token("hello", TokenKind::Content);
        assert!(!word.is_html_tag());
        assert!(!word.is_html_comment());
        assert!(!word.is_open_tag());
        assert_eq!(word.tag_name(), None);
    }
}
