//! Scanner primitives
//!
//! Position-based helpers over the source characters. None of them fail in the
//! exceptional sense: [`skip_spaces`] and [`scan_free_text`] always succeed, and
//! [`match_literal`] reports a mismatch as [`ParseResult::NoMatch`] carrying the
//! position it was given, so a caller that fails here has no cursor side effect.

use super::parse::ParseResult;

/// Which characters a free-text capture may consume
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextClass {
    /// Alphabetic characters and whitespace only
    Words,
    /// Anything except the structural delimiters `;`, `(`, `)`, `{` and `}`
    #[default]
    Phrases,
}

impl TextClass {
    pub fn admits(self, c: char) -> bool {
        match self {
            TextClass::Words => c.is_alphabetic() || c.is_whitespace(),
            TextClass::Phrases => !matches!(c, ';' | '(' | ')' | '{' | '}'),
        }
    }
}

/// Advance past zero or more whitespace characters
pub fn skip_spaces(text: &[char], pos: usize) -> usize {
    let mut i = pos;
    while text.get(i).is_some_and(|c| c.is_whitespace()) {
        i += 1;
    }
    i
}

/// Capture a maximal run of free text starting at `pos` (after leading whitespace).
///
/// The capture is trimmed and internal whitespace runs collapse to one space.
/// May return an empty string; callers that need text must check for that.
pub fn scan_free_text(text: &[char], pos: usize, class: TextClass) -> (String, usize) {
    let start = skip_spaces(text, pos);
    let mut end = start;
    while text.get(end).is_some_and(|&c| class.admits(c)) {
        end += 1;
    }

    let raw: String = text.get(start..end).unwrap_or_default().iter().collect();
    (raw.split_whitespace().collect::<Vec<_>>().join(" "), end)
}

/// Match a fixed literal at `pos`.
///
/// Leading whitespace is skipped first unless the literal is itself whitespace.
/// On mismatch the returned position is `pos`, never the whitespace-advanced one.
pub fn match_literal<'a>(literal: &'a str, text: &[char], pos: usize) -> ParseResult<&'a str> {
    let is_blank = !literal.is_empty() && literal.chars().all(char::is_whitespace);
    let mut i = if is_blank { pos } else { skip_spaces(text, pos) };

    for expected in literal.chars() {
        if text.get(i) != Some(&expected) {
            return ParseResult::NoMatch { pos };
        }
        i += 1;
    }

    ParseResult::Match {
        value: literal,
        next: i,
    }
}
