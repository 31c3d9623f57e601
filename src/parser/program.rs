//! Program-level driver
//!
//! The grammar parsers only ever answer "matched here" or "no match here". This
//! module turns a full parse of the input into a [`Program`] or a
//! [`ProgramError`]: nothing parsed at all, or parsing stopped before the end.

use crate::parser::ast::{Item, Node};
use crate::parser::parse::{GrammarOptions, Parser};
use std::fmt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProgramError {
    #[error("input rejected: no statement could be parsed")]
    Rejected,

    #[error("unparsed input at offset {consumed} of {total}")]
    TrailingInput { consumed: usize, total: usize },
}

/// A parsed input: its top-level statements in source order
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    pub statements: Vec<Node>,
}

impl Program {
    pub fn parse(source: &str) -> Result<Self, ProgramError> {
        Self::parse_with(source, GrammarOptions::default())
    }

    pub fn parse_with(source: &str, options: GrammarOptions) -> Result<Self, ProgramError> {
        let (program, outcome) = Self::parse_lenient(source, options);
        outcome.map(|()| program)
    }

    /// Parse as much as possible.
    ///
    /// Always returns the statements parsed before the first failure, together
    /// with the verdict on whether the whole input was consumed. Trailing
    /// whitespace counts as consumed.
    pub fn parse_lenient(
        source: &str,
        options: GrammarOptions,
    ) -> (Self, Result<(), ProgramError>) {
        let parser = Parser::with_options(source, options);
        let (statements, stopped_at) = parser.parse_program();
        let end = parser.skip_spaces(stopped_at);

        let outcome = if end == parser.len() {
            Ok(())
        } else if statements.is_empty() {
            Err(ProgramError::Rejected)
        } else {
            Err(ProgramError::TrailingInput {
                consumed: end,
                total: parser.len(),
            })
        };

        (Self { statements }, outcome)
    }

    pub fn len(&self) -> usize {
        self.statements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// The whole program as one sequence node
    pub fn to_node(&self) -> Node {
        Node::sequence(self.statements.iter().cloned().map(Item::Node).collect())
    }
}

impl fmt::Display for Program {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, statement) in self.statements.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", statement)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_whole_input() {
        let program = Program::parse("a;\n  b;  \n").unwrap();
        assert_eq!(program.statements, vec![Node::step("a"), Node::step("b")]);
        assert_eq!(program.to_string(), "{\n  a\n}\n{\n  b\n}");
    }

    #[test]
    fn test_blank_input_is_empty_program() {
        assert!(Program::parse("  \n").unwrap().is_empty());
        assert!(Program::parse("").unwrap().is_empty());
    }

    #[test]
    fn test_rejected() {
        assert_eq!(Program::parse("if (x"), Err(ProgramError::Rejected));
    }

    #[test]
    fn test_trailing_input() {
        assert_eq!(
            Program::parse("a; b"),
            Err(ProgramError::TrailingInput {
                consumed: 3,
                total: 4
            })
        );
    }

    #[test]
    fn test_lenient_keeps_partial_statements() {
        let (program, outcome) = Program::parse_lenient("a; }", GrammarOptions::default());
        assert_eq!(program.len(), 1);
        assert!(outcome.is_err());
    }
}
