//! Property tables
//!
//! The same table renders both the search results (with a checkbox column)
//! and the shortlist. Rows are whatever the store hands in; the component
//! only owns the cursor.

use crate::model::Property;
use crate::tui::theme::Theme;
use crate::tui::traits::{Handled, Interactive};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    layout::{Alignment, Constraint, Rect},
    style::{Modifier, Style},
    text::Span,
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, TableState},
    Frame,
};

pub const RESULTS_PLACEHOLDER: &str = "No property results to show";
pub const SHORTLIST_PLACEHOLDER: &str = "No selected properties yet";

const COLUMNS: [&str; 4] = ["Address", "Postcode", "Number of Rooms", "Floor Area (m²)"];

/// Which list a table shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Results,
    Shortlist,
}

impl TableKind {
    fn title(&self) -> &'static str {
        match self {
            TableKind::Results => " Search Results ",
            TableKind::Shortlist => " Selected properties ",
        }
    }

    fn placeholder(&self) -> &'static str {
        match self {
            TableKind::Results => RESULTS_PLACEHOLDER,
            TableKind::Shortlist => SHORTLIST_PLACEHOLDER,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableAction {
    /// Flip the checkbox of the row at this index
    Toggle(usize),
}

#[derive(Debug)]
pub struct PropertyTable {
    kind: TableKind,
    cursor: usize,
    row_count: usize,
}

impl PropertyTable {
    pub fn new(kind: TableKind) -> Self {
        Self {
            kind,
            cursor: 0,
            row_count: 0,
        }
    }

    #[cfg(test)]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Keep the cursor inside the current rows
    ///
    /// Called whenever the backing list changes.
    pub fn sync_rows(&mut self, row_count: usize) {
        self.row_count = row_count;
        self.cursor = self.cursor.min(row_count.saturating_sub(1));
    }

    pub fn reset_cursor(&mut self) {
        self.cursor = 0;
    }

    fn toggle(&self) -> Handled<TableAction> {
        if self.row_count == 0 {
            Handled::Yes
        } else {
            Handled::Emit(TableAction::Toggle(self.cursor))
        }
    }

    /// Render `rows`; `is_checked` drives the checkbox column (results only)
    pub fn render(
        &self,
        f: &mut Frame,
        area: Rect,
        theme: &Theme,
        rows: &[Property],
        is_checked: impl Fn(&Property) -> bool,
        focused: bool,
    ) {
        let title = format!("{}({}) ", self.kind.title(), rows.len());
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(theme.border_style(focused))
            .title(Span::styled(title, Style::default().fg(theme.title)));

        if rows.is_empty() {
            let placeholder = Paragraph::new(self.kind.placeholder())
                .alignment(Alignment::Center)
                .style(Style::default().fg(theme.muted))
                .block(block);
            f.render_widget(placeholder, area);
            return;
        }

        let with_checkbox = self.kind == TableKind::Results;

        let mut header_cells = Vec::with_capacity(COLUMNS.len() + 1);
        if with_checkbox {
            header_cells.push(Cell::from("✔"));
        }
        header_cells.extend(COLUMNS.iter().map(|c| Cell::from(*c)));
        let header = Row::new(header_cells).style(
            Style::default()
                .fg(theme.muted)
                .add_modifier(Modifier::BOLD),
        );

        let body: Vec<Row> = rows
            .iter()
            .map(|property| {
                let mut cells = Vec::with_capacity(COLUMNS.len() + 1);
                if with_checkbox {
                    let checked = is_checked(property);
                    let (mark, style) = if checked {
                        ("[x]", Style::default().fg(theme.accent))
                    } else {
                        ("[ ]", Style::default().fg(theme.muted))
                    };
                    cells.push(Cell::from(Span::styled(mark, style)));
                }
                cells.push(Cell::from(property.address.as_str()));
                cells.push(Cell::from(property.postcode.as_str()));
                cells.push(Cell::from(property.number_of_rooms.to_string()));
                cells.push(Cell::from(format_area(property.floor_area)));
                Row::new(cells).style(Style::default().fg(theme.foreground))
            })
            .collect();

        let mut widths = Vec::with_capacity(COLUMNS.len() + 1);
        if with_checkbox {
            widths.push(Constraint::Length(3));
        }
        widths.extend([
            Constraint::Min(20),
            Constraint::Length(8),
            Constraint::Length(15),
            Constraint::Length(15),
        ]);

        let mut table = Table::new(body, widths).header(header).block(block);
        if focused {
            table = table.row_highlight_style(theme.selected_row());
        }

        let mut state = TableState::default().with_selected(Some(self.cursor));
        f.render_stateful_widget(table, area, &mut state);
    }
}

impl Interactive for PropertyTable {
    type Action = TableAction;

    fn handle_key(&mut self, key: KeyEvent) -> Handled<TableAction> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.cursor = self.cursor.saturating_sub(1);
                Handled::Yes
            }
            KeyCode::Down | KeyCode::Char('j') => {
                if self.cursor + 1 < self.row_count {
                    self.cursor += 1;
                }
                Handled::Yes
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.cursor = 0;
                Handled::Yes
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.cursor = self.row_count.saturating_sub(1);
                Handled::Yes
            }
            KeyCode::Char(' ') | KeyCode::Enter => self.toggle(),
            KeyCode::Delete | KeyCode::Char('x') if self.kind == TableKind::Shortlist => {
                self.toggle()
            }
            _ => Handled::No,
        }
    }

    fn focus_hint(&self) -> &'static str {
        match self.kind {
            TableKind::Results => "↑↓:move  Space:select  y:copy shortlist",
            TableKind::Shortlist => "↑↓:move  Space/x:remove  y:copy",
        }
    }
}

/// Floor area with at most one decimal, dropping a trailing ".0"
pub fn format_area(area: f64) -> String {
    let rounded = (area * 10.0).round() / 10.0;
    if rounded.fract() == 0.0 {
        format!("{:.0}", rounded)
    } else {
        format!("{:.1}", rounded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyModifiers;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_toggle_reports_cursor_row() {
        let mut table = PropertyTable::new(TableKind::Results);
        table.sync_rows(3);
        table.handle_key(key(KeyCode::Down));
        table.handle_key(key(KeyCode::Down));
        table.handle_key(key(KeyCode::Down));
        assert_eq!(table.cursor(), 2);
        assert_eq!(
            table.handle_key(key(KeyCode::Char(' '))),
            Handled::Emit(TableAction::Toggle(2))
        );
    }

    #[test]
    fn test_toggle_on_empty_table_is_swallowed() {
        let mut table = PropertyTable::new(TableKind::Results);
        assert_eq!(table.handle_key(key(KeyCode::Enter)), Handled::Yes);
    }

    #[test]
    fn test_sync_rows_clamps_cursor() {
        let mut table = PropertyTable::new(TableKind::Shortlist);
        table.sync_rows(5);
        table.handle_key(key(KeyCode::End));
        assert_eq!(table.cursor(), 4);
        table.sync_rows(2);
        assert_eq!(table.cursor(), 1);
        table.sync_rows(0);
        assert_eq!(table.cursor(), 0);
    }

    #[test]
    fn test_remove_keys_only_apply_to_shortlist() {
        let mut results = PropertyTable::new(TableKind::Results);
        results.sync_rows(1);
        assert_eq!(results.handle_key(key(KeyCode::Char('x'))), Handled::No);

        let mut shortlist = PropertyTable::new(TableKind::Shortlist);
        shortlist.sync_rows(1);
        assert_eq!(
            shortlist.handle_key(key(KeyCode::Delete)),
            Handled::Emit(TableAction::Toggle(0))
        );
    }

    #[test]
    fn test_format_area() {
        assert_eq!(format_area(120.0), "120");
        assert_eq!(format_area(64.5), "64.5");
        assert_eq!(format_area(88.04), "88");
    }
}
