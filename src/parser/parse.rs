//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct, the [`ParseResult`] outcome type,
//! the grammar options and the helpers shared by the statement parsers.
//!
//! # Parser Architecture
//!
//! The parser is a backtracking recursive descent over the source characters:
//! - This module: Parser struct, helper methods, program-level entry point
//! - `scanner`: whitespace, free-text and literal primitives
//! - `statements`: one method per statement form plus the ordered-choice dispatcher
//!
//! Every parse method is a pure function of a start position. It either returns
//! [`ParseResult::Match`] with the position right after the consumed text, or
//! [`ParseResult::NoMatch`] carrying the position it was given. Nothing a failed
//! attempt did is visible to the caller, which is what lets the dispatcher try
//! the next alternative from the same place.

use crate::parser::ast::Node;
use crate::parser::scanner::{match_literal, scan_free_text, skip_spaces, TextClass};
use log::info;

/// Default maximum statement nesting depth
pub const DEFAULT_MAX_DEPTH: usize = 256;

/// Outcome of a single parse attempt
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum ParseResult<T> {
    /// The production matched; `next` is the position right after it
    Match { value: T, next: usize },
    /// Nothing matched; `pos` is the position the attempt started from
    NoMatch { pos: usize },
}

impl<T> ParseResult<T> {
    /// Run an all-or-nothing attempt starting at `pos`.
    ///
    /// Any `None` returned by the attempt collapses to a `NoMatch` at `pos`.
    pub(crate) fn attempt(pos: usize, f: impl FnOnce() -> Option<(T, usize)>) -> Self {
        match f() {
            Some((value, next)) => ParseResult::Match { value, next },
            None => ParseResult::NoMatch { pos },
        }
    }

    pub fn is_match(&self) -> bool {
        matches!(self, ParseResult::Match { .. })
    }

    /// The position after a match, or the untouched start position
    pub fn position(&self) -> usize {
        match self {
            ParseResult::Match { next, .. } => *next,
            ParseResult::NoMatch { pos } => *pos,
        }
    }

    pub fn value(&self) -> Option<&T> {
        match self {
            ParseResult::Match { value, .. } => Some(value),
            ParseResult::NoMatch { .. } => None,
        }
    }

    pub fn ok(self) -> Option<(T, usize)> {
        match self {
            ParseResult::Match { value, next } => Some((value, next)),
            ParseResult::NoMatch { .. } => None,
        }
    }
}

/// What may follow `else` before the false branch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ElseSeparator {
    /// Exactly one literal space
    SingleSpace,
    /// One or more whitespace characters, or none when the branch is a block
    #[default]
    Whitespace,
}

/// Grammar knobs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GrammarOptions {
    pub text: TextClass,
    pub else_separator: ElseSeparator,
    /// Statements nested deeper than this are not matched
    pub max_depth: usize,
}

impl Default for GrammarOptions {
    fn default() -> Self {
        Self {
            text: TextClass::default(),
            else_separator: ElseSeparator::default(),
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl GrammarOptions {
    /// Alphabetic text only, exactly one space after `else`
    pub fn strict() -> Self {
        Self {
            text: TextClass::Words,
            else_separator: ElseSeparator::SingleSpace,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

/// Backtracking recursive descent parser for the statement language
pub struct Parser {
    pub(crate) source: Vec<char>,
    pub(crate) options: GrammarOptions,
}

impl Parser {
    pub fn new(source: &str) -> Self {
        Self::with_options(source, GrammarOptions::default())
    }

    pub fn with_options(source: &str, options: GrammarOptions) -> Self {
        let source: Vec<char> = source.chars().collect();
        info!("Parser created for {} characters", source.len());
        Self { source, options }
    }

    /// Input length in characters
    pub fn len(&self) -> usize {
        self.source.len()
    }

    pub fn is_empty(&self) -> bool {
        self.source.is_empty()
    }

    /// Parse sibling statements from the start of the input until the dispatcher fails.
    ///
    /// Returns the statements and the position where parsing stopped. Whether that
    /// position is the end of input is for the caller to decide.
    pub fn parse_program(&self) -> (Vec<Node>, usize) {
        let mut statements = Vec::new();
        let mut pos = 0;

        while let ParseResult::Match { value, next } = self.parse_action(pos) {
            statements.push(value);
            pos = next;
        }

        info!(
            "Parsed {} top-level statements, stopped at offset {} of {}",
            statements.len(),
            pos,
            self.len()
        );
        (statements, pos)
    }

    // ===== Helper methods =====

    /// Position after `literal`, if it matches at `pos`
    pub(crate) fn literal(&self, literal: &str, pos: usize) -> Option<usize> {
        match_literal(literal, &self.source, pos)
            .ok()
            .map(|(_, next)| next)
    }

    pub(crate) fn skip_spaces(&self, pos: usize) -> usize {
        skip_spaces(&self.source, pos)
    }

    pub(crate) fn free_text(&self, pos: usize) -> (String, usize) {
        scan_free_text(&self.source, pos, self.options.text)
    }

    /// Free text that must not be empty (guards and `for` clauses)
    pub(crate) fn required_text(&self, pos: usize) -> Option<(String, usize)> {
        let (text, next) = self.free_text(pos);
        (!text.is_empty()).then_some((text, next))
    }

    /// `(` guard `)`
    pub(crate) fn parenthesized_guard(&self, pos: usize) -> Option<(String, usize)> {
        let i = self.literal("(", pos)?;
        let (guard, i) = self.required_text(i)?;
        let i = self.literal(")", i)?;
        Some((guard, i))
    }

    /// Whatever separates `else` from the false branch
    pub(crate) fn else_separator(&self, pos: usize) -> Option<usize> {
        match self.options.else_separator {
            ElseSeparator::SingleSpace => self.literal(" ", pos),
            ElseSeparator::Whitespace => {
                let next = self.skip_spaces(pos);
                (next > pos || self.source.get(pos) == Some(&'{')).then_some(next)
            }
        }
    }
}
