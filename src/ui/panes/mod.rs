//! TUI pane rendering modules
//!
//! # Pane Modules
//!
//! - [`source`]: Source text with keyword highlighting and the stop-line indicator
//! - [`outline`]: The pretty-printed AST
//! - [`status`]: Status bar with parse state and keybindings
//!
//! Each pane module exports one `render_*` function taking the frame, its area
//! and whatever state it draws. Scrollable panes take their scroll offset by
//! `&mut` and clamp it to the content.

pub mod outline;
pub mod source;
pub mod status;

pub use outline::render_outline_pane;
pub use source::render_source_pane;
pub use status::render_status_bar;

/// Clamp a scroll offset so the last page stays full
pub(crate) fn clamp_scroll(scroll_offset: &mut usize, total_lines: usize, visible_height: usize) {
    if total_lines > visible_height {
        let max_scroll = total_lines - visible_height;
        *scroll_offset = (*scroll_offset).min(max_scroll);
    } else {
        *scroll_offset = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_scroll() {
        let mut offset = usize::MAX;
        clamp_scroll(&mut offset, 30, 10);
        assert_eq!(offset, 20);

        let mut offset = 5;
        clamp_scroll(&mut offset, 3, 10);
        assert_eq!(offset, 0);
    }
}
