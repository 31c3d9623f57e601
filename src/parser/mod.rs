//! Statement language parser
//!
//! This module transforms program text into an Abstract Syntax Tree (AST) and back:
//! - [`scanner`]: Position-based primitives (whitespace, free text, literals)
//! - [`parse`]: The [`Parser`] struct, [`ParseResult`] and grammar options
//! - `statements`: One method per statement form plus the ordered-choice dispatcher
//! - [`program`]: Whole-input parsing and the completeness check
//! - [`ast`]: AST node definitions and the indented pretty-printer
//!
//! # Supported Language
//!
//! Steps are free-form phrases ended by `;`. They can be grouped in `{ }` blocks
//! and guarded by `if (..) .. else ..`, `while (..) ..` and `for (..; ..; ..) ..`.
//! Guards are free-form text too; there is no expression grammar.
//!
//! # Parser Implementation
//!
//! Hand-written backtracking recursive descent directly over the characters.
//! No tokenizer, no external parser generator.

pub mod ast;
pub mod parse;
pub mod program;
pub mod scanner;
mod statements;

pub use ast::{Item, Node};
pub use parse::{ElseSeparator, GrammarOptions, ParseResult, Parser, DEFAULT_MAX_DEPTH};
pub use program::{Program, ProgramError};
pub use scanner::TextClass;
