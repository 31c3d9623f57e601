//! Main TUI application state and logic

use crate::parser::parse::GrammarOptions;
use crate::parser::program::{Program, ProgramError};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;

/// Lines moved by PageUp / PageDown
const PAGE: usize = 10;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    Source,
    Outline,
}

impl FocusedPane {
    pub fn next(self) -> Self {
        match self {
            FocusedPane::Source => FocusedPane::Outline,
            FocusedPane::Outline => FocusedPane::Source,
        }
    }

    pub fn prev(self) -> Self {
        // Two panes: same as next
        self.next()
    }
}

/// How far the parse got through the source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseStatus {
    Complete { statements: usize },
    /// Parsing stopped at character offset `consumed`
    Partial {
        statements: usize,
        consumed: usize,
        total: usize,
    },
    Rejected,
}

impl ParseStatus {
    fn from_outcome(program: &Program, outcome: Result<(), ProgramError>) -> Self {
        match outcome {
            Ok(()) => ParseStatus::Complete {
                statements: program.len(),
            },
            Err(ProgramError::TrailingInput { consumed, total }) => ParseStatus::Partial {
                statements: program.len(),
                consumed,
                total,
            },
            Err(ProgramError::Rejected) => ParseStatus::Rejected,
        }
    }

    /// 1-based source line where parsing stopped, if it stopped early
    pub fn stop_line(&self, source: &str) -> Option<usize> {
        match self {
            ParseStatus::Partial { consumed, .. } => {
                Some(source.chars().take(*consumed).filter(|&c| c == '\n').count() + 1)
            }
            // Nothing parsed: the first statement starts after any leading whitespace
            ParseStatus::Rejected => Some(
                source
                    .chars()
                    .take_while(|c| c.is_whitespace())
                    .filter(|&c| c == '\n')
                    .count()
                    + 1,
            ),
            ParseStatus::Complete { .. } => None,
        }
    }

    pub fn describe(&self) -> String {
        match self {
            ParseStatus::Complete { statements } => {
                format!("Parsed {} statement(s)", statements)
            }
            ParseStatus::Partial {
                statements,
                consumed,
                total,
            } => format!(
                "Parsed {} statement(s), unparsed input at offset {} of {}",
                statements, consumed, total
            ),
            ParseStatus::Rejected => "Input rejected, no AST produced".to_string(),
        }
    }
}

/// The main application state
pub struct App {
    /// The source text being viewed
    pub source_code: String,

    /// Pretty-printed outline of everything that parsed
    pub outline: String,

    pub status: ParseStatus,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub source_scroll: usize,
    pub outline_scroll: usize,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,
}

impl App {
    /// Parse the source and build the viewer state
    pub fn new(source_code: String, options: GrammarOptions) -> Self {
        let (program, outcome) = Program::parse_lenient(&source_code, options);
        let status = ParseStatus::from_outcome(&program, outcome);
        let status_message = status.describe();

        App {
            outline: program.to_string(),
            source_code,
            status,
            focused_pane: FocusedPane::Source,
            source_scroll: 0,
            outline_scroll: 0,
            should_quit: false,
            status_message,
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    self.handle_key_event(key);
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    pub fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(main_chunks[0]);

        super::panes::render_source_pane(
            frame,
            columns[0],
            &self.source_code,
            self.status.stop_line(&self.source_code),
            self.focused_pane == FocusedPane::Source,
            &mut self.source_scroll,
        );

        super::panes::render_outline_pane(
            frame,
            columns[1],
            &self.outline,
            self.focused_pane == FocusedPane::Outline,
            &mut self.outline_scroll,
        );

        super::panes::render_status_bar(frame, main_chunks[1], &self.status_message, &self.status);
    }

    /// Handle keyboard events
    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Up => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(1);
            }
            KeyCode::Down => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(1);
            }
            KeyCode::PageUp => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_sub(PAGE);
            }
            KeyCode::PageDown => {
                let scroll = self.focused_scroll();
                *scroll = scroll.saturating_add(PAGE);
            }
            KeyCode::Home => {
                *self.focused_scroll() = 0;
            }
            KeyCode::End => {
                // Clamped to the last page on the next render
                *self.focused_scroll() = usize::MAX;
            }
            _ => {}
        }
    }

    fn focused_scroll(&mut self) -> &mut usize {
        match self.focused_pane {
            FocusedPane::Source => &mut self.source_scroll,
            FocusedPane::Outline => &mut self.outline_scroll,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;
    use ratatui::backend::TestBackend;

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[test]
    fn test_status_for_complete_parse() {
        let app = App::new("a; b;".to_string(), GrammarOptions::default());
        assert_eq!(app.status, ParseStatus::Complete { statements: 2 });
        assert_eq!(app.outline, "{\n  a\n}\n{\n  b\n}");
    }

    #[test]
    fn test_status_for_partial_parse() {
        let app = App::new("a;\nb;\n}".to_string(), GrammarOptions::default());
        assert_eq!(
            app.status,
            ParseStatus::Partial {
                statements: 2,
                consumed: 6,
                total: 7
            }
        );
        assert_eq!(app.status.stop_line(&app.source_code), Some(3));
    }

    #[test]
    fn test_rejected_stop_line_skips_leading_blank_lines() {
        let app = App::new("\n\n  }\na;".to_string(), GrammarOptions::default());
        assert_eq!(app.status, ParseStatus::Rejected);
        assert_eq!(app.status.stop_line(&app.source_code), Some(3));

        let app = App::new("}".to_string(), GrammarOptions::default());
        assert_eq!(app.status.stop_line(&app.source_code), Some(1));
    }

    #[test]
    fn test_focus_and_scroll_keys() {
        let mut app = App::new("a;".to_string(), GrammarOptions::default());
        press(&mut app, KeyCode::Down);
        assert_eq!(app.source_scroll, 1);
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focused_pane, FocusedPane::Outline);
        press(&mut app, KeyCode::PageDown);
        assert_eq!(app.outline_scroll, PAGE);
        press(&mut app, KeyCode::Home);
        assert_eq!(app.outline_scroll, 0);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn test_render_draws_both_panes() {
        let mut app = App::new("while (hungry) eat;".to_string(), GrammarOptions::default());
        let mut terminal = Terminal::new(TestBackend::new(80, 12)).unwrap();
        terminal.draw(|f| app.render(f)).unwrap();

        let screen: String = terminal
            .backend()
            .buffer()
            .content
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Source"));
        assert!(screen.contains("Outline"));
        assert!(screen.contains("WHILE hungry"));
    }
}
