use std::thread;

use truncate_html::config::TagConfig;
use truncate_html::markup::{normalize_whitespace, tokenize, TagRules, Token, TokenKind};

/// Keeps at most `budget` content/emoji tokens and closes whatever is left open.
fn truncate_tokens(tokens: &[Token], budget: usize) -> String {
    let mut out = String::new();
    let mut open: Vec<&Token> = Vec::new();
    let mut visible = 0;

    for token in tokens {
        if visible >= budget {
            break;
        }
        out.push_str(&token.text);
        if token.counts_toward_length() {
            visible += 1;
        } else if token.is_open_tag() {
            open.push(token);
        } else if token.is_html_tag() && token.text.starts_with("</") {
            if open.last().and_then(|t| t.tag_name()) == token.tag_name() {
                open.pop();
            }
        }
    }

    for token in open.iter().rev() {
        out.push_str(&token.close_tag().unwrap());
    }
    out
}

fn joined(tokens: &[Token]) -> String {
    tokens.iter().map(|t| t.text.as_str()).collect()
}

#[test]
fn end_to_end_truncation() {
    let html = "<p>Hello <b>world</b> again</p>";
    let tokens = tokenize(html);

    assert_eq!(truncate_tokens(&tokens, 2), "<p>Hello <b>world</b></p>");
    assert_eq!(truncate_tokens(&tokens, 1), "<p>Hello</p>");
    assert_eq!(truncate_tokens(&tokens, 10), html);
}

#[test]
fn truncation_skips_void_and_script() {
    let html = "<div>one<br><script>var x = 1 < 2;</script><img src=\"a.png\"> two three</div>";
    let tokens = tokenize(html);

    // only "one" and "two" count
    assert_eq!(
        truncate_tokens(&tokens, 2),
        "<div>one<br><script>var x = 1 < 2;</script><img src=\"a.png\"> two</div>"
    );
}

#[test]
fn truncation_keeps_comments_unbalanced() {
    let tokens = tokenize("<!-- lead --><em>a b</em>");
    assert_eq!(tokens[0].kind, TokenKind::Comment);
    assert_eq!(truncate_tokens(&tokens, 1), "<!-- lead --><em>a</em>");
}

#[test]
fn round_trip_under_normalization() {
    let inputs = [
        "",
        "plain text",
        "  leading and trailing  ",
        "<p>\n  Line one\n\n  line two\r\n</p>",
        "<a href=\"x\"\n   title=\"y\">link</a>",
        "<script type=\"a\">\n if (a < b) {}\n</script>after",
        "1 < 2 > 0 <> <",
        "<!-- a > b --> c",
        "mixed 中文，标点。 and émoji 👍🏽 👨\u{200D}👩\u{200D}👧",
        "\u{07}\u{1F3FB}\u{FE0F} \u{200D}",
        "<unterminated attr=\"x\"",
        "\u{0600}<b>x</b>\u{0D4E}<i>y</i>\u{0600}  z",
        "ཀ།ཁ ܐ܀ܒ",
    ];

    for input in inputs {
        let tokens = tokenize(input);
        assert_eq!(joined(&tokens), normalize_whitespace(input), "input {input:?}");
        for token in &tokens {
            assert!(!token.text.is_empty(), "empty token in {input:?}");
        }
    }
}

#[test]
fn emoji_grapheme_never_split() {
    let thumbs = "👍🏽";
    let flag = "🇳🇱";
    let keycap = "#\u{FE0F}\u{20E3}";
    for emoji in [thumbs, flag, keycap] {
        let input = format!("a {emoji} b");
        let tokens = tokenize(&input);
        let holder = tokens
            .iter()
            .find(|t| t.text.contains(emoji))
            .unwrap_or_else(|| panic!("{emoji:?} was split: {tokens:?}"));
        assert_eq!(holder.text.chars().count(), emoji.chars().count());
    }
}

#[test]
fn custom_rules_with_tokens() {
    let rules = TagRules::from_config(&TagConfig::legacy()).unwrap();
    let tokens = tokenize("<p><input type=\"text\"><br></p>");

    let opening: Vec<&str> = tokens
        .iter()
        .filter(|t| t.is_open_tag_with(&rules))
        .map(|t| t.text.as_str())
        .collect();
    assert_eq!(opening, vec!["<p>", "<input type=\"text\">"]);
}

#[test]
fn tokenize_from_many_threads() {
    let inputs: Vec<String> = (0..8)
        .map(|i| format!("<div id=\"d{i}\">item {i} 😀</div>"))
        .collect();
    let expected: Vec<Vec<Token>> = inputs.iter().map(|s| tokenize(s)).collect();

    let handles: Vec<_> = inputs
        .clone()
        .into_iter()
        .map(|input| thread::spawn(move || tokenize(&input)))
        .collect();

    for (handle, want) in handles.into_iter().zip(expected) {
        assert_eq!(handle.join().unwrap(), want);
    }
}
