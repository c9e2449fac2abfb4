//! Responsive breakpoint system for TUI layout decisions.
//!
//! Single source of truth for width thresholds - no magic numbers scattered in render code.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Breakpoint {
    /// < 60 cols: Split pane, minimal terminal
    Compact,
    /// 60-99 cols: Half-screen
    Normal,
    /// 100-139 cols: Full terminal
    Wide,
    /// 140+ cols: Ultrawide monitor
    UltraWide,
}

impl Breakpoint {
    pub fn from_width(width: u16) -> Self {
        match width {
            0..=59 => Breakpoint::Compact,
            60..=99 => Breakpoint::Normal,
            100..=139 => Breakpoint::Wide,
            _ => Breakpoint::UltraWide,
        }
    }

    /// Check if at least this breakpoint (inclusive)
    pub fn at_least(&self, min: Breakpoint) -> bool {
        self.ordinal() >= min.ordinal()
    }

    fn ordinal(&self) -> u8 {
        match self {
            Breakpoint::Compact => 0,
            Breakpoint::Normal => 1,
            Breakpoint::Wide => 2,
            Breakpoint::UltraWide => 3,
        }
    }
}

/// Areas of the main screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub header: Rect,
    pub search: Rect,
    pub filter: Rect,
    pub shortlist: Rect,
    pub results: Rect,
    pub status: Rect,
}

/// Filter column width beside the tables
const FILTER_WIDTH: u16 = 26;
/// Filter height when stacked above the tables
const FILTER_STACKED_HEIGHT: u16 = 8;

impl ScreenAreas {
    /// Split the screen
    ///
    /// Normal and wider: filter on the left, shortlist above results on the
    /// right. Compact: everything stacked in one column.
    pub fn compute(area: Rect) -> Self {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3), // header
                Constraint::Length(3), // search bar
                Constraint::Min(6),    // body
                Constraint::Length(2), // status bar
            ])
            .split(area);

        let body = rows[2];

        let (filter, tables) = if Breakpoint::from_width(area.width).at_least(Breakpoint::Normal) {
            let cols = Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Length(FILTER_WIDTH), Constraint::Min(20)])
                .split(body);
            (cols[0], cols[1])
        } else {
            let stacked = Layout::default()
                .direction(Direction::Vertical)
                .constraints([
                    Constraint::Length(FILTER_STACKED_HEIGHT),
                    Constraint::Min(4),
                ])
                .split(body);
            (stacked[0], stacked[1])
        };

        let tables = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Percentage(40), Constraint::Percentage(60)])
            .split(tables);

        Self {
            header: rows[0],
            search: rows[1],
            filter,
            shortlist: tables[0],
            results: tables[1],
            status: rows[3],
        }
    }
}
