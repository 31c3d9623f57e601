//! Outline pane: the pretty-printed AST

use crate::ui::panes::clamp_scroll;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
    Frame,
};

/// Color one outline line: `IF`/`ELSE`/`WHILE` headers, braces, plain steps
fn highlight_outline_line(line: &str) -> Line<'_> {
    let body = line.trim_start();
    let indent = &line[..line.len() - body.len()];
    let keyword_style = Style::default()
        .fg(DEFAULT_THEME.keyword)
        .add_modifier(Modifier::BOLD);

    let mut spans = vec![Span::raw(indent)];
    if let Some(guard) = body.strip_prefix("IF ") {
        spans.push(Span::styled("IF ", keyword_style));
        spans.push(Span::styled(guard, Style::default().fg(DEFAULT_THEME.guard)));
    } else if let Some(guard) = body.strip_prefix("WHILE ") {
        spans.push(Span::styled("WHILE ", keyword_style));
        spans.push(Span::styled(guard, Style::default().fg(DEFAULT_THEME.guard)));
    } else if body == "ELSE" {
        spans.push(Span::styled(body, keyword_style));
    } else if body == "{" || body == "}" {
        spans.push(Span::styled(body, Style::default().fg(DEFAULT_THEME.primary)));
    } else {
        spans.push(Span::styled(body, Style::default().fg(DEFAULT_THEME.fg)));
    }

    Line::from(spans)
}

/// Render the outline pane
pub fn render_outline_pane(
    frame: &mut Frame,
    area: Rect,
    outline: &str,
    is_focused: bool,
    scroll_offset: &mut usize,
) {
    let border_style = if is_focused {
        Style::default()
            .fg(DEFAULT_THEME.border_focused)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(DEFAULT_THEME.border_normal)
    };

    let block = Block::default()
        .title(" Outline ")
        .borders(Borders::ALL)
        .border_style(border_style);

    if outline.is_empty() {
        let paragraph = Paragraph::new("(nothing parsed)")
            .block(block)
            .style(Style::default().fg(DEFAULT_THEME.comment));
        frame.render_widget(paragraph, area);
        return;
    }

    let block = block.padding(Padding::new(1, 0, 0, 0));
    let lines: Vec<&str> = outline.lines().collect();
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|line| highlight_outline_line(line))
        .collect();

    frame.render_widget(Paragraph::new(visible_lines).block(block), area);
}
