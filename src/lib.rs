//! # Introduction
//!
//! flowlang parses a tiny structured-control-flow language (steps, blocks,
//! `if/else`, `while`, `for`) into an AST, prints the AST back as an indented
//! outline, and renders it as a nested-box HTML flowchart.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Parser → AST → Outline text
//!                      ↘ Flowchart HTML
//!                      ↘ TUI viewer
//! ```
//!
//! 1. [`parser`] — scanner primitives, ordered-choice statement parsers and the
//!    [`parser::Program`] driver.
//! 2. [`flowchart`] — HTML rendering with an explicit, seedable color [`flowchart::Palette`].
//! 3. [`ui`] — ratatui-based viewer showing source and outline side by side; not
//!    part of the stable library API.
//! 4. [`logging`] — the stderr `log` backend used by the binary.
//!
//! ## Language
//!
//! ```text
//! if (at home) while (hungry) { eat; eat; } else starve;
//! for (i = 0; i < 9; i++) { step; }
//! ```

pub mod flowchart;
pub mod logging;
pub mod parser;
pub mod ui;
