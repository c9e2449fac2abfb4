// Header component
//
// App name with a one-line tagline, plus an in-flight spinner while a search
// is running.

use crate::tui::app::App;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub const TITLE: &str = "IMMO";
pub const TAGLINE: &str = "Property search tool";

pub fn render(f: &mut Frame, area: Rect, app: &App) {
    let theme = &app.theme;

    let mut spans = vec![
        Span::styled(
            format!(" {} ", TITLE),
            Style::default()
                .fg(theme.title)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("── ", Style::default().fg(theme.border)),
        Span::styled(TAGLINE, Style::default().fg(theme.muted)),
    ];

    if app.store.in_flight() {
        spans.push(Span::styled(
            format!("  {} searching", app.spinner_char()),
            Style::default().fg(theme.info),
        ));
    }

    let header = Paragraph::new(Line::from(spans)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(theme.border_type)
            .border_style(Style::default().fg(theme.title))
            .title_top(Line::from(format!(" theme: {} ", theme.kind.name())).right_aligned()),
    );

    f.render_widget(header, area);
}
