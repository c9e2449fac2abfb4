//! Property type filter
//!
//! Vertical list of the available property types with "All" first. The entry
//! whose value equals the store's active filter is marked; the cursor is
//! independent of it so the user can browse before committing with Enter.

use crate::model::{PropertyType, PropertyTypeOption};
use crate::tui::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterAction {
    /// Apply this filter value (`None` = all types)
    Select(Option<PropertyType>),
    /// Fetch the type list again
    Reload,
}

/// Where the option list stands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum LoadState {
    Loading,
    Loaded,
    Failed,
}

#[derive(Debug)]
pub struct PropertyFilter {
    options: Vec<PropertyTypeOption>,
    cursor: usize,
    state: LoadState,
}

impl Default for PropertyFilter {
    fn default() -> Self {
        Self {
            options: Vec::new(),
            cursor: 0,
            state: LoadState::Loading,
        }
    }
}

impl PropertyFilter {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn options(&self) -> &[PropertyTypeOption] {
        &self.options
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the option list after a successful fetch
    pub fn set_options(&mut self, options: Vec<PropertyTypeOption>) {
        self.options = options;
        self.cursor = self.cursor.min(self.options.len().saturating_sub(1));
        self.state = LoadState::Loaded;
    }

    /// A fetch failed; keep whatever list we already had
    pub fn mark_failed(&mut self) {
        if self.options.is_empty() {
            self.state = LoadState::Failed;
        }
    }

    pub fn mark_loading(&mut self) {
        if self.options.is_empty() {
            self.state = LoadState::Loading;
        }
    }

    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        theme: &Theme,
        active: Option<&PropertyType>,
        focused: bool,
    ) {
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(Span::styled(
                " Property type ",
                Style::default().fg(theme.title),
            ));

        if self.options.is_empty() {
            let text = match self.state {
                LoadState::Loading => "Loading…",
                LoadState::Loaded => "No property types",
                LoadState::Failed => "Unavailable (r to retry)",
            };
            f.render_widget(
                Paragraph::new(Span::styled(text, Style::default().fg(theme.muted))).block(block),
                area,
            );
            return;
        }

        let items: Vec<ListItem> = self
            .options
            .iter()
            .map(|option| {
                let is_active = option.value.as_ref() == active;
                let (marker, style) = if is_active {
                    (
                        "● ",
                        Style::default()
                            .fg(theme.accent)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    ("○ ", Style::default().fg(theme.foreground))
                };
                ListItem::new(Line::from(vec![
                    Span::styled(marker, style),
                    Span::styled(option.label.as_str(), style),
                ]))
            })
            .collect();

        let mut list = List::new(items).block(block);
        if focused {
            list = list.highlight_style(theme.selected_row());
        }

        let mut state = ListState::default().with_selected(Some(self.cursor));
        f.render_stateful_widget(list, area, &mut state);
    }
}

impl Interactive for PropertyFilter {
    type Action = FilterAction;

    fn handle_key(&mut self, key: KeyEvent) -> Handled<FilterAction> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.options.len() {
                    self.cursor += 1;
                }
                Handled::Yes
            }
            KeyCode::Home => {
                self.cursor = 0;
                Handled::Yes
            }
            KeyCode::End => {
                self.cursor = self.options.len().saturating_sub(1);
                Handled::Yes
            }
            KeyCode::Enter | KeyCode::Char(' ') => match self.options.get(self.cursor) {
                Some(option) => Handled::Emit(FilterAction::Select(option.value.clone())),
                None => Handled::Yes,
            },
            KeyCode::Char('r') => Handled::Emit(FilterAction::Reload),
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> &'static str {
        "↑↓:browse  Enter:apply  r:reload"
    }
}
