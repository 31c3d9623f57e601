//! Node → HTML fragment mapping
//!
//! # Layout
//!
//! - step: a colored `.block`
//! - sequence: a `.column` of its members
//! - condition: the guard block over a `.row` of YES / NO columns
//! - iteration: a `LOOP` `.strip` beside the guard block and a YES (body) / NO row
//!
//! Every step and guard box takes the next color from the [`Palette`] passed in,
//! in document order.

use crate::flowchart::palette::Palette;
use crate::flowchart::STYLE;
use crate::parser::ast::{Item, Node};
use crate::parser::program::Program;

/// Page-level settings for [`render_document`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlowchartOptions {
    pub title: String,
    /// Stylesheet URL linked from the page
    pub stylesheet: String,
    /// Embed [`STYLE`] instead of linking `stylesheet`
    pub inline_style: bool,
    /// Fixed palette seed; `None` draws colors from an entropy-seeded palette
    pub seed: Option<u64>,
}

impl Default for FlowchartOptions {
    fn default() -> Self {
        Self {
            title: String::from("Flowchart"),
            stylesheet: String::from("style.css"),
            inline_style: false,
            seed: None,
        }
    }
}

impl FlowchartOptions {
    /// Fresh palette for one document, seeded from `seed` when set
    pub fn palette(&self) -> Palette {
        self.seed.map(Palette::seeded).unwrap_or_default()
    }
}

/// Render a single node (and everything below it) as an HTML fragment
pub fn render_node(node: &Node, palette: &mut Palette) -> String {
    let mut out = String::new();
    write_node(&mut out, node, palette);
    out
}

/// Render a whole program as a standalone HTML page
pub fn render_document(
    program: &Program,
    options: &FlowchartOptions,
    palette: &mut Palette,
) -> String {
    let head_style = if options.inline_style {
        format!("<style>\n{}</style>", STYLE)
    } else {
        format!(
            r#"<link rel="stylesheet" type="text/css" href="{}" />"#,
            escape(&options.stylesheet)
        )
    };
    let title = escape(&options.title);
    let body = render_node(&program.to_node(), palette);

    format!(
        "<html>\n  <head>\n    <title>{title}</title>\n    {head_style}\n  </head>\n  \
         <body>\n    <h1> {title} </h1>\n    {body}\n  </body>\n</html>\n"
    )
}

fn write_node(out: &mut String, node: &Node, palette: &mut Palette) {
    match node {
        Node::Sequence(items) => {
            out.push_str(r#"<div class="column">"#);
            for item in items {
                match item {
                    Item::Text(text) => write_block(out, text, palette),
                    Item::Node(node) => write_node(out, node, palette),
                }
            }
            out.push_str("</div>");
        }
        Node::Condition {
            guard,
            when_true,
            when_false,
        } => {
            out.push_str(r#"<div class="column">"#);
            write_block(out, guard, palette);
            out.push_str(r#"<div class="row"><div class="column"><div class="yes"> YES </div>"#);
            write_node(out, when_true, palette);
            out.push_str(r#"</div><div class="column"><div class="no"> NO </div>"#);
            write_node(out, when_false, palette);
            out.push_str("</div></div></div>");
        }
        Node::Iteration { guard, body } => {
            out.push_str(r#"<div class="row"><div class="strip"> LOOP </div><div class="column">"#);
            write_block(out, guard, palette);
            out.push_str(r#"<div class="row">"#);
            out.push_str(r#"<div class="column" style="border-bottom: 8px solid white;">"#);
            out.push_str(r#"<div class="yes"> YES </div>"#);
            write_node(out, body, palette);
            out.push_str(r#"</div><div class="column"><div class="no"> NO </div></div>"#);
            out.push_str("</div></div></div>");
        }
    }
}

fn write_block(out: &mut String, text: &str, palette: &mut Palette) {
    // Empty steps draw nothing
    if text.is_empty() {
        return;
    }
    out.push_str(&format!(
        r#"<div class="block" style="background-color:{}"> {} </div>"#,
        palette.next_color(),
        escape(text)
    ));
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}
