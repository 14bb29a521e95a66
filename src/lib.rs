//! Splits HTML into classified tokens for length-limited truncation.
//!
//! `tokenize` produces script blocks, tags, comments, whitespace, content and
//! emoji runs without ever cutting inside a tag or an emoji grapheme. The tag
//! queries tell a truncating caller which tags still need closing and what
//! closing tag to append.

pub mod config;
pub mod error;
pub mod markup;

pub use config::TagConfig;
pub use error::TagError;
pub use markup::{
    close_tag_for, is_html_comment, is_html_tag, is_open_tag, normalize_whitespace, tag_name,
    tokenize, TagRules, Token, TokenKind,
};
