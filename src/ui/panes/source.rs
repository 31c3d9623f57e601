//! Source pane rendering with keyword highlighting
//!
//! Shows the program text with line numbers. Keywords, brackets and statement
//! terminators are colored with a character-by-character pass; no parser state
//! is needed. When parsing stopped early, the line where it stopped is drawn in
//! the error style.

use crate::ui::panes::clamp_scroll;
use crate::ui::theme::DEFAULT_THEME;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Simple highlighting for the statement language
fn highlight_source_code(line: &str) -> Line<'_> {
    let mut spans = Vec::new();
    let mut current_word = String::new();

    for c in line.chars() {
        if c.is_alphanumeric() || c == '_' {
            current_word.push(c);
            continue;
        }

        if !current_word.is_empty() {
            spans.push(Span::styled(current_word.clone(), get_word_style(&current_word)));
            current_word.clear();
        }

        let style = match c {
            '{' | '}' | '(' | ')' => Style::default().fg(DEFAULT_THEME.primary), // Brackets
            ';' => Style::default().fg(DEFAULT_THEME.comment),                   // Terminators
            _ => Style::default().fg(DEFAULT_THEME.fg),
        };
        spans.push(Span::styled(c.to_string(), style));
    }

    if !current_word.is_empty() {
        let style = get_word_style(&current_word);
        spans.push(Span::styled(current_word, style));
    }

    Line::from(spans)
}

fn get_word_style(word: &str) -> Style {
    match word {
        "if" | "else" | "while" | "for" => Style::default()
            .fg(DEFAULT_THEME.keyword)
            .add_modifier(Modifier::BOLD),
        _ => Style::default().fg(DEFAULT_THEME.fg),
    }
}

/// Render the source pane
pub fn render_source_pane(
    frame: &mut Frame,
    area: Rect,
    source_code: &str,
    stop_line: Option<usize>,
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
        .title(" Source ")
        .borders(Borders::ALL)
        .border_style(border_style);

    let lines: Vec<&str> = source_code.lines().collect();
    // Account for borders (2), min 1
    let visible_height = area.height.saturating_sub(2).max(1) as usize;
    clamp_scroll(scroll_offset, lines.len(), visible_height);

    let visible_lines: Vec<Line> = lines
        .iter()
        .enumerate()
        .skip(*scroll_offset)
        .take(visible_height)
        .map(|(idx, line)| {
            let line_num = idx + 1;
            let is_stop = stop_line == Some(line_num);
            let line_num_str = format!("{:4} ", line_num);

            let mut content_line = highlight_source_code(line);

            let num_style = if is_stop {
                // Red text on the stop line, white on red for the content
                let content_style = Style::default()
                    .bg(DEFAULT_THEME.error)
                    .fg(Color::White)
                    .add_modifier(Modifier::BOLD);
                for span in &mut content_line.spans {
                    span.style = content_style;
                }
                Style::default()
                    .fg(DEFAULT_THEME.error)
                    .add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(DEFAULT_THEME.comment) // Line numbers
            };

            let mut final_spans = vec![Span::styled(line_num_str, num_style)];
            final_spans.extend(content_line.spans);
            Line::from(final_spans)
        })
        .collect();

    let paragraph = Paragraph::new(visible_lines).block(block);
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keywords_are_split_out() {
        let line = highlight_source_code("if (x) eat;");
        let words: Vec<&str> = line.spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(words, vec!["if", " ", "(", "x", ")", " ", "eat", ";"]);
        assert!(line.spans[0].style.add_modifier.contains(Modifier::BOLD));
    }
}
