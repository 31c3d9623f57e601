//! Statement parsing implementation
//!
//! This module handles parsing of the five statement forms:
//!
//! - Steps: `eat cake;`
//! - Blocks: `{ ... }`
//! - Control flow: `if`, `while`, `for`
//!
//! # Grammar
//!
//! ```text
//! statement ::= if | while | for | block | step
//! step      ::= TEXT ';'
//! block     ::= '{' statement* '}'
//! if        ::= 'if' '(' TEXT ')' statement ( 'else' SEP statement )?
//! while     ::= 'while' '(' TEXT ')' statement
//! for       ::= 'for' '(' TEXT ';' TEXT ';' TEXT ')' statement
//! ```
//!
//! Alternatives are tried in the order listed on the first line. A step would
//! happily swallow `if (x) a` as plain text, so the keyword forms have to go first.
//!
//! All parsing methods are implemented on the [`Parser`] struct. The public ones
//! start at nesting depth zero; the `*_at` variants thread the current depth.

use crate::parser::ast::{Item, Node};
use crate::parser::parse::{ParseResult, Parser};
use log::{debug, trace};

type StatementParser = fn(&Parser, usize, usize) -> ParseResult<Node>;

impl Parser {
    /// Parse any statement at `pos` (ordered choice)
    pub fn parse_action(&self, pos: usize) -> ParseResult<Node> {
        self.action_at(pos, 0)
    }

    pub fn parse_step(&self, pos: usize) -> ParseResult<Node> {
        self.step_at(pos, 0)
    }

    pub fn parse_block(&self, pos: usize) -> ParseResult<Node> {
        self.block_at(pos, 0)
    }

    pub fn parse_if(&self, pos: usize) -> ParseResult<Node> {
        self.if_at(pos, 0)
    }

    pub fn parse_while(&self, pos: usize) -> ParseResult<Node> {
        self.while_at(pos, 0)
    }

    pub fn parse_for(&self, pos: usize) -> ParseResult<Node> {
        self.for_at(pos, 0)
    }

    pub(crate) fn action_at(&self, pos: usize, depth: usize) -> ParseResult<Node> {
        if depth > self.options.max_depth {
            debug!(
                "Nesting limit {} exceeded at offset {}",
                self.options.max_depth, pos
            );
            return ParseResult::NoMatch { pos };
        }

        let alternatives: [(&str, StatementParser); 5] = [
            ("if", Parser::if_at),
            ("while", Parser::while_at),
            ("for", Parser::for_at),
            ("block", Parser::block_at),
            ("step", Parser::step_at),
        ];

        for (name, parse) in alternatives {
            let result = parse(self, pos, depth);
            if result.is_match() {
                trace!("Matched {} at offset {} (depth {})", name, pos, depth);
                return result;
            }
        }

        trace!("No statement at offset {}", pos);
        ParseResult::NoMatch { pos }
    }

    /// TEXT ';'
    fn step_at(&self, pos: usize, _depth: usize) -> ParseResult<Node> {
        ParseResult::attempt(pos, || {
            let (text, i) = self.free_text(pos);
            let i = self.literal(";", i)?;
            Some((Node::step(text), i))
        })
    }

    /// '{' statement* '}'
    fn block_at(&self, pos: usize, depth: usize) -> ParseResult<Node> {
        ParseResult::attempt(pos, || {
            let mut i = self.literal("{", pos)?;

            let mut items = Vec::new();
            while let ParseResult::Match { value, next } = self.action_at(i, depth + 1) {
                items.push(Item::Node(value));
                i = next;
            }

            let i = self.literal("}", i)?;
            Some((Node::sequence(items), i))
        })
    }

    /// 'if' '(' TEXT ')' statement ( 'else' SEP statement )?
    fn if_at(&self, pos: usize, depth: usize) -> ParseResult<Node> {
        ParseResult::attempt(pos, || {
            let i = self.literal("if", pos)?;
            let (guard, i) = self.parenthesized_guard(i)?;
            let (when_true, i) = self.action_at(i, depth + 1).ok()?;

            // A half-matched else clause is dropped entirely; the condition then
            // ends right after the true branch.
            match self.else_branch(i, depth) {
                Some((when_false, next)) => {
                    Some((Node::condition(guard, when_true, when_false), next))
                }
                None => Some((Node::condition(guard, when_true, Node::empty()), i)),
            }
        })
    }

    fn else_branch(&self, pos: usize, depth: usize) -> Option<(Node, usize)> {
        let i = self.literal("else", pos)?;
        let i = self.else_separator(i)?;
        self.action_at(i, depth + 1).ok()
    }

    /// 'while' '(' TEXT ')' statement
    fn while_at(&self, pos: usize, depth: usize) -> ParseResult<Node> {
        ParseResult::attempt(pos, || {
            let i = self.literal("while", pos)?;
            let (guard, i) = self.parenthesized_guard(i)?;
            let (body, i) = self.action_at(i, depth + 1).ok()?;
            Some((Node::iteration(guard, body), i))
        })
    }

    /// 'for' '(' TEXT ';' TEXT ';' TEXT ')' statement
    fn for_at(&self, pos: usize, depth: usize) -> ParseResult<Node> {
        ParseResult::attempt(pos, || {
            let i = self.literal("for", pos)?;
            let i = self.literal("(", i)?;
            let (initializer, i) = self.required_text(i)?;
            let i = self.literal(";", i)?;
            let (guard, i) = self.required_text(i)?;
            let i = self.literal(";", i)?;
            let (increment, i) = self.required_text(i)?;
            let i = self.literal(")", i)?;
            let (body, i) = self.action_at(i, depth + 1).ok()?;
            Some((Node::counted_loop(initializer, guard, increment, body), i))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse::GrammarOptions;

    fn parse(source: &str) -> ParseResult<Node> {
        Parser::new(source).parse_action(0)
    }

    #[test]
    fn test_parse_step() {
        assert_eq!(
            parse("a;"),
            ParseResult::Match {
                value: Node::step("a"),
                next: 2
            }
        );
    }

    #[test]
    fn test_step_without_semicolon_fails() {
        assert_eq!(Parser::new("  eat cake").parse_step(0), ParseResult::NoMatch { pos: 0 });
    }

    #[test]
    fn test_empty_step_is_accepted() {
        assert_eq!(parse(" ;").value(), Some(&Node::step("")));
    }

    #[test]
    fn test_parse_empty_block() {
        assert_eq!(
            parse("{}"),
            ParseResult::Match {
                value: Node::empty(),
                next: 2
            }
        );
    }

    #[test]
    fn test_unclosed_block_fails() {
        assert_eq!(Parser::new("{a; b;").parse_block(0), ParseResult::NoMatch { pos: 0 });
    }

    #[test]
    fn test_parse_if_without_else() {
        let expected = Node::condition("x", Node::step("a"), Node::empty());
        assert_eq!(
            parse("if(x)a;"),
            ParseResult::Match {
                value: expected,
                next: 7
            }
        );
    }

    #[test]
    fn test_parse_if_with_else() {
        let expected = Node::condition("x", Node::step("a"), Node::step("b"));
        assert_eq!(parse("if(x)a; else b;").value(), Some(&expected));
    }

    #[test]
    fn test_if_requires_guard() {
        assert!(!Parser::new("if()a;").parse_if(0).is_match());
    }

    #[test]
    fn test_if_requires_true_branch() {
        assert_eq!(Parser::new("if (x)").parse_if(0), ParseResult::NoMatch { pos: 0 });
    }

    #[test]
    fn test_dangling_else_rolls_back() {
        // `else` followed by something that is not a statement
        let parser = Parser::new("if(x)a; else }");
        assert_eq!(
            parser.parse_if(0),
            ParseResult::Match {
                value: Node::condition("x", Node::step("a"), Node::empty()),
                next: 7
            }
        );
    }

    #[test]
    fn test_strict_else_needs_single_space() {
        let parser = Parser::with_options("if(x)a; else\nb;", GrammarOptions::strict());
        assert_eq!(parser.parse_if(0).position(), 7);

        let parser = Parser::new("if(x)a; else\nb;");
        assert_eq!(parser.parse_if(0).position(), 15);
    }

    #[test]
    fn test_else_glued_to_word_is_not_else() {
        let parser = Parser::new("if(x)a; elsewhere;");
        let result = parser.parse_if(0);
        assert_eq!(result.position(), 7);
        assert_eq!(parser.parse_action(7).value(), Some(&Node::step("elsewhere")));
    }

    #[test]
    fn test_else_block_without_space() {
        let expected = Node::condition(
            "x",
            Node::step("a"),
            Node::sequence(vec![Item::Node(Node::step("b"))]),
        );
        assert_eq!(parse("if(x)a; else{b;}").value(), Some(&expected));
    }

    #[test]
    fn test_parse_while() {
        let expected = Node::iteration(
            "hungry",
            Node::sequence(vec![Item::Node(Node::step("eat"))]),
        );
        assert_eq!(parse("while (hungry) { eat; }").value(), Some(&expected));
    }

    #[test]
    fn test_while_without_body_fails() {
        assert_eq!(Parser::new("while (x) ").parse_while(0), ParseResult::NoMatch { pos: 0 });
    }

    #[test]
    fn test_parse_for() {
        let expected = Node::counted_loop("i", "i<9", "i++", Node::step("a"));
        assert_eq!(parse("for(i;i<9;i++)a;").value(), Some(&expected));
    }

    #[test]
    fn test_for_missing_clause_fails() {
        assert_eq!(Parser::new("for(i;;i++)a;").parse_for(0), ParseResult::NoMatch { pos: 0 });
    }

    #[test]
    fn test_keyword_prefix_falls_back_to_step() {
        assert_eq!(parse("iffy;").value(), Some(&Node::step("iffy")));
        assert_eq!(parse("format disk;").value(), Some(&Node::step("format disk")));
    }

    #[test]
    fn test_nesting_limit() {
        let options = GrammarOptions {
            max_depth: 2,
            ..GrammarOptions::default()
        };
        assert!(Parser::with_options("{{a;}}", options.clone()).parse_action(0).is_match());
        assert!(!Parser::with_options("{{{a;}}}", options).parse_action(0).is_match());
    }
}
