// Status bar component
//
// Key hints for the focused panel on the left, the latest log line on the
// right when there is room for it.

use crate::logging::LogLevel;
use crate::tui::app::App;
use crate::tui::layout::Breakpoint;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const GLOBAL_HINTS: &str = "Tab:focus  F5:refresh  t:theme  q:quit";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;
    let bp = Breakpoint::from_width(area.width);

    let hints = if bp.at_least(Breakpoint::Wide) {
        format!(" {}  │  {}", app.focus_hint(), GLOBAL_HINTS)
    } else {
        format!(" {}", app.focus_hint())
    };

    let block = Block::default().borders(Borders::TOP);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let latest = if bp.at_least(Breakpoint::Normal) {
        app.log_buffer.latest(LogLevel::Info)
    } else {
        None
    };

    let Some(entry) = latest else {
        f.render_widget(
            Paragraph::new(hints).style(Style::default().fg(theme.status_bar)),
            inner,
        );
        return;
    };

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(inner);

    f.render_widget(
        Paragraph::new(hints).style(Style::default().fg(theme.status_bar)),
        chunks[0],
    );

    let color = match entry.level {
        LogLevel::Error => theme.error,
        LogLevel::Warn => theme.title,
        _ => theme.muted,
    };
    let log_line = Line::from(vec![
        Span::styled(
            entry.timestamp.format("%H:%M:%S ").to_string(),
            Style::default().fg(theme.muted),
        ),
        Span::styled(entry.message, Style::default().fg(color)),
    ])
    .right_aligned();
    f.render_widget(Paragraph::new(log_line), chunks[1]);
}
