use std::borrow::Cow;
use std::ops::Range;

use memchr::memchr;
use unicode_segmentation::UnicodeSegmentation;

use super::chars::{is_content_char, is_emoji_lead, is_markup_whitespace};
use super::token::{Token, TokenKind};

const LOG_TARGET: &str = "truncate_html::tokenizer";

const SCRIPT_OPEN_TAG: &[u8] = b"<script";
const SCRIPT_CLOSE_TAG: &[u8] = b"</script";
const COMMENT_OPEN: &str = "!--";
const COMMENT_CLOSE: &str = "-->";

fn starts_with_ignore_ascii_case_at(haystack: &[u8], start: usize, needle: &[u8]) -> bool {
    haystack.len() >= start + needle.len()
        && haystack[start..start + needle.len()].eq_ignore_ascii_case(needle)
}

/// Finds `</script>` (optionally `</script  >`) at or after `from`.
/// Returns the byte offset just past the closing `>`.
fn find_script_close_tag(bytes: &[u8], from: usize) -> Option<usize> {
    let n = SCRIPT_CLOSE_TAG.len();
    let mut i = from;
    while i + n <= bytes.len() {
        i += memchr(b'<', &bytes[i..])?;
        if starts_with_ignore_ascii_case_at(bytes, i, SCRIPT_CLOSE_TAG) {
            let mut k = i + n;
            while k < bytes.len() && bytes[k].is_ascii_whitespace() {
                k += 1;
            }
            if k < bytes.len() && bytes[k] == b'>' {
                return Some(k + 1);
            }
        }
        i += 1;
    }
    None
}

/// Length of a `<script ...>...</script>` block at the start of `rest`.
fn match_script(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    if !starts_with_ignore_ascii_case_at(bytes, 0, SCRIPT_OPEN_TAG) {
        return None;
    }

    // `<scripted>` is not a script tag
    let after_name = SCRIPT_OPEN_TAG.len();
    match bytes.get(after_name) {
        Some(b) if b.is_ascii_whitespace() || *b == b'>' || *b == b'/' => {}
        _ => return None,
    }

    let open_end = after_name + memchr(b'>', &bytes[after_name..])? + 1;
    let end = find_script_close_tag(bytes, open_end);
    if end.is_none() {
        log::debug!(target: LOG_TARGET, "script block without </script>, scanning as a tag");
    }
    end
}

/// Length of a `<!-- ... -->` comment (or `< !-- ... -->`) at the start of `rest`.
fn match_comment(rest: &str) -> Option<usize> {
    let mut body = rest.strip_prefix('<')?;
    if let Some(c) = body.chars().next().filter(|&c| is_markup_whitespace(c)) {
        body = &body[c.len_utf8()..];
    }
    let body = body.strip_prefix(COMMENT_OPEN)?;
    let prefix_len = rest.len() - body.len();

    match body.find(COMMENT_CLOSE) {
        Some(end) => Some(prefix_len + end + COMMENT_CLOSE.len()),
        None => {
            log::debug!(target: LOG_TARGET, "comment without -->, scanning as a tag");
            None
        }
    }
}

/// Length of a generic `<...>` tag at the start of `rest`: `<`, at least one
/// character that is not `>`, then the next `>`.
fn match_tag(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    debug_assert_eq!(bytes.first(), Some(&b'<'));
    let close = memchr(b'>', bytes.get(1..)?)? + 1;
    if close == 1 {
        return None;
    }
    Some(close + 1)
}

/// Byte length of a cluster up to any `<` or whitespace after its first char.
///
/// Prepend characters (U+0600, U+0D4E, ...) cluster with whatever follows,
/// including `<` and spaces. Those must always start a scan of their own.
fn cluster_len(grapheme: &str) -> usize {
    grapheme
        .char_indices()
        .skip(1)
        .find(|&(_, c)| c == '<' || is_markup_whitespace(c))
        .map_or(grapheme.len(), |(i, _)| i)
}

/// Byte length of the leading run of graphemes whose first char passes `accept`.
fn grapheme_run(rest: &str, accept: fn(char) -> bool) -> usize {
    let mut len = 0;
    for grapheme in rest.graphemes(true) {
        if !grapheme.chars().next().is_some_and(accept) {
            break;
        }
        let kept = cluster_len(grapheme);
        len += kept;
        if kept < grapheme.len() {
            break;
        }
    }
    len
}

fn first_grapheme_len(rest: &str) -> usize {
    rest.graphemes(true).next().map_or(rest.len(), cluster_len)
}

/// Tries every alternative at `pos`, in priority order.
fn scan_at(input: &str, pos: usize) -> Option<(usize, TokenKind)> {
    let rest = &input[pos..];
    let first = rest.chars().next()?;

    if first == '<' {
        if let Some(len) = match_script(rest) {
            return Some((pos + len, TokenKind::Script));
        }
        if let Some(len) = match_comment(rest) {
            return Some((pos + len, TokenKind::Comment));
        }
        return match_tag(rest).map(|len| (pos + len, TokenKind::Tag));
    }

    if is_markup_whitespace(first) {
        let len = rest
            .find(|c: char| !is_markup_whitespace(c))
            .unwrap_or(rest.len());
        return Some((pos + len, TokenKind::Whitespace));
    }

    if is_content_char(first) {
        return Some((pos + grapheme_run(rest, is_content_char), TokenKind::Content));
    }

    if is_emoji_lead(first) {
        return Some((pos + grapheme_run(rest, is_emoji_lead), TokenKind::Emoji));
    }

    None
}

fn push_token(tokens: &mut Vec<Token>, input: &str, span: Range<usize>, kind: TokenKind) {
    let text = normalize_whitespace(&input[span.clone()]).into_owned();
    log::trace!(target: LOG_TARGET, "emit {:?} token at {:?}: {:?}", kind, span, text);
    tokens.push(Token { text, kind, span });
}

/// Collapses every run of whitespace (newlines included) into one ASCII space.
///
/// Borrows when the text is already normalized.
pub fn normalize_whitespace(text: &str) -> Cow<'_, str> {
    let mut prev_space = false;
    let already_normal = text.chars().all(|c| {
        let ok = if c == ' ' {
            !prev_space
        } else {
            !is_markup_whitespace(c)
        };
        prev_space = c == ' ';
        ok
    });
    if already_normal {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(text.len());
    let mut in_whitespace = false;
    for c in text.chars() {
        if is_markup_whitespace(c) {
            if !in_whitespace {
                out.push(' ');
            }
            in_whitespace = true;
        } else {
            out.push(c);
            in_whitespace = false;
        }
    }
    Cow::Owned(out)
}

/// Splits HTML markup into classified tokens.
///
/// Alternatives are tried in order at each position: script block, tag
/// (comments included), whitespace run, content run, emoji run. Content and
/// emoji runs advance by whole grapheme clusters so a multi-codepoint emoji
/// is never split. Spans matching none of them (a stray `<`, control
/// characters, CJK punctuation) are emitted as content tokens, so no input
/// character is lost.
///
/// Each token's text is whitespace-normalized; `span` keeps the raw byte
/// range. Never fails: empty input yields no tokens.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();
    let mut pos = 0;
    let mut unmatched_start: Option<usize> = None;

    while pos < input.len() {
        match scan_at(input, pos) {
            Some((end, kind)) => {
                if let Some(start) = unmatched_start.take() {
                    log::debug!(target: LOG_TARGET, "unmatched span {}..{} kept as content", start, pos);
                    push_token(&mut tokens, input, start..pos, TokenKind::Content);
                }
                push_token(&mut tokens, input, pos..end, kind);
                pos = end;
            }
            None => {
                unmatched_start.get_or_insert(pos);
                pos += first_grapheme_len(&input[pos..]);
            }
        }
    }

    if let Some(start) = unmatched_start {
        log::debug!(target: LOG_TARGET, "unmatched span {}..{} kept as content", start, pos);
        push_token(&mut tokens, input, start..pos, TokenKind::Content);
    }

    tokens
}
