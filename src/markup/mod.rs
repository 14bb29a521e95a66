pub mod chars;
pub mod tag;
pub mod token;
pub mod tokenizer;

pub use tag::{
    close_tag_for, default_rules, is_html_comment, is_html_tag, is_open_tag, tag_name, TagRules,
};
pub use token::{Token, TokenKind};
pub use tokenizer::{normalize_whitespace, tokenize};
