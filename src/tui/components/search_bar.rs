//! Search bar component
//!
//! A single-line text field holding the address being typed. Nothing is
//! searched while typing; Enter commits the current text (even when empty,
//! which clears the results). The text is passed on as-is, without trimming.

use crate::tui::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Placeholder shown while the field is empty
pub const PLACEHOLDER: &str = "Address";

/// Label of the submit hint next to the field
const SUBMIT_LABEL: &str = " Search ⏎ ";

/// What the search bar asks the App to do
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchBarAction {
    /// Commit this text as the search address
    Submit(String),
}

/// Editable address field
#[derive(Debug, Default)]
pub struct SearchBar {
    value: String,
    /// Cursor position in chars (not bytes)
    cursor: usize,
}

impl SearchBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    fn byte_index(&self, char_idx: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_idx)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn char_count(&self) -> usize {
        self.value.chars().count()
    }

    fn insert(&mut self, c: char) {
        let idx = self.byte_index(self.cursor);
        self.value.insert(idx, c);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let idx = self.byte_index(self.cursor);
        self.value.remove(idx);
    }

    fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let idx = self.byte_index(self.cursor);
            self.value.remove(idx);
        }
    }

    fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Display column of the cursor relative to the start of the text
    fn cursor_column(&self) -> u16 {
        let before = &self.value[..self.byte_index(self.cursor)];
        before.width() as u16
    }

    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme, focused: bool) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(Span::styled(" Search ", Style::default().fg(theme.title)));

        let inner = block.inner(area);
        f.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(1),
                Constraint::Length(SUBMIT_LABEL.width() as u16),
            ])
            .split(inner);

        let text = if self.value.is_empty() {
            Line::from(Span::styled(
                PLACEHOLDER,
                Style::default()
                    .fg(theme.muted)
                    .add_modifier(Modifier::ITALIC),
            ))
        } else {
            Line::from(Span::styled(
                self.value.as_str(),
                Style::default().fg(theme.foreground),
            ))
        };

        // Keep the cursor in view for long input
        let field_width = chunks[0].width.saturating_sub(1);
        let cursor_col = self.cursor_column();
        let scroll = cursor_col.saturating_sub(field_width);

        f.render_widget(Paragraph::new(text).scroll((0, scroll)), chunks[0]);

        let button_style = if focused {
            Style::default()
                .fg(theme.selection_fg)
                .bg(theme.highlight)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.muted)
        };
        f.render_widget(
            Paragraph::new(Span::styled(SUBMIT_LABEL, button_style)),
            chunks[1],
        );

        if focused {
            f.set_cursor_position(Position::new(
                chunks[0].x + cursor_col - scroll,
                chunks[0].y,
            ));
        }
    }
}

impl Interactive for SearchBar {
    type Action = SearchBarAction;

    fn handle_key(&mut self, key: KeyEvent) -> Handled<SearchBarAction> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Enter => Handled::Emit(SearchBarAction::Submit(self.value.clone())),
            KeyCode::Char('u') if ctrl => {
                self.clear();
                Handled::Yes
            }
            // Other control chords belong to the App
            KeyCode::Char(_) if ctrl || key.modifiers.contains(KeyModifiers::ALT) => Handled::No,
            KeyCode::Char(c) => {
                self.insert(c);
                Handled::Yes
            }
            KeyCode::Backspace => {
                self.backspace();
                Handled::Yes
            }
            KeyCode::Delete => {
                self.delete();
                Handled::Yes
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Handled::Yes
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.char_count());
                Handled::Yes
            }
            KeyCode::Home => {
                self.cursor = 0;
                Handled::Yes
            }
            KeyCode::End => {
                self.cursor = self.char_count();
                Handled::Yes
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> &'static str {
        "type address  Enter:search  Ctrl+U:clear"
    }
}
