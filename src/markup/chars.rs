// Character classes used by the markup scanner.
// Ranges are inclusive (start, end) codepoint pairs.

use unicode_properties::{GeneralCategory, GeneralCategoryGroup, UnicodeGeneralCategory};

/// CJK symbols and punctuation (U+3001..U+303F) and the fullwidth
/// punctuation forms. They are punctuation or symbols by category but stay
/// out of content runs: a run of CJK text must break at its punctuation
/// instead of swallowing it.
const CJK_PUNCTUATION: &[(u32, u32)] = &[
    (0x3001, 0x303F),
    (0xFF01, 0xFF0F),
    (0xFF1A, 0xFF20),
    (0xFF3B, 0xFF40),
    (0xFF5B, 0xFF65),
];

/// Special characters the content class always accepts.
const SPECIAL_CHARS: &[char] = &['²', '³', '§'];

/// Emoji codepoints, including the joiners and modifiers that glue
/// multi-codepoint emoji together.
const EMOJI_RANGES: &[(u32, u32)] = &[
    (0x00A9, 0x00A9),
    (0x00AE, 0x00AE),
    (0x200D, 0x200D),
    (0x203C, 0x203C),
    (0x2049, 0x2049),
    (0x20E3, 0x20E3),
    (0x2122, 0x2122),
    (0x2139, 0x2139),
    (0x2194, 0x21AA),
    (0x231A, 0x23FF),
    (0x24C2, 0x24C2),
    (0x25AA, 0x25FE),
    (0x2600, 0x27BF),
    (0x2934, 0x2935),
    (0x2B05, 0x2B55),
    (0x3030, 0x3030),
    (0x303D, 0x303D),
    (0x3297, 0x3299),
    (0xFE00, 0xFE0F),
    (0x1F000, 0x1FAFF),
    (0xE0020, 0xE007F),
];

fn in_ranges(c: char, ranges: &[(u32, u32)]) -> bool {
    let cp = c as u32;
    ranges
        .binary_search_by(|&(start, end)| {
            if end < cp {
                std::cmp::Ordering::Less
            } else if start > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Whitespace as the scanner sees it: space, tab, LF, VT, FF and CR.
pub fn is_markup_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r')
}

/// Characters that make up a content run.
///
/// `<` is never content since it always opens a tag, and ASCII whitespace is
/// handled by its own run so it can be normalized.
pub fn is_content_char(c: char) -> bool {
    if c == '<' || is_markup_whitespace(c) {
        return false;
    }

    if c.is_ascii() {
        return c.is_ascii_alphanumeric() || c.is_ascii_punctuation();
    }

    c.is_alphanumeric() || SPECIAL_CHARS.contains(&c) || is_symbol_or_punctuation(c)
}

/// Currency, math and other symbols, non-ASCII spaces and any punctuation,
/// minus the CJK punctuation block.
fn is_symbol_or_punctuation(c: char) -> bool {
    if in_ranges(c, CJK_PUNCTUATION) {
        return false;
    }

    match c.general_category() {
        GeneralCategory::CurrencySymbol
        | GeneralCategory::MathSymbol
        | GeneralCategory::OtherSymbol
        | GeneralCategory::SpaceSeparator => true,
        _ => c.general_category_group() == GeneralCategoryGroup::Punctuation,
    }
}

/// Codepoints listed in the emoji table.
pub fn is_emoji(c: char) -> bool {
    in_ranges(c, EMOJI_RANGES)
}

/// Emoji codepoints that can open an emoji run, i.e. those the content
/// class does not already claim.
pub fn is_emoji_lead(c: char) -> bool {
    is_emoji(c) && !is_content_char(c)
}
