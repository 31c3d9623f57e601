//! Flowchart rendering
//!
//! Maps the three control-flow shapes of the AST to nested HTML boxes:
//! - [`html`]: node → fragment mapping and the page template
//! - [`palette`]: the fill colors handed out to step boxes
//!
//! The page links a stylesheet (or inlines [`STYLE`]) that lays out `.column`,
//! `.row`, `.block`, `.strip`, `.yes` and `.no` boxes.

pub mod html;
pub mod palette;

pub use html::{render_document, render_node, FlowchartOptions};
pub use palette::{Palette, COLORS};

/// Stylesheet for the classes emitted by [`html`]
pub const STYLE: &str = r#"body { font-family: sans-serif; background: white; }
.column { display: flex; flex-direction: column; flex: 1; }
.row { display: flex; flex-direction: row; }
.block { padding: 8px; margin: 2px; border-radius: 4px; color: black; }
.strip { writing-mode: vertical-rl; padding: 4px; background: #dddddd; }
.yes, .no { padding: 2px 8px; font-weight: bold; }
.yes { color: #2e7d32; }
.no { color: #c62828; }
"#;
