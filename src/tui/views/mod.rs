// Views module - screen-level rendering logic
//
// There is a single screen: header, search bar, filter, the two tables and
// the status bar, with toasts drawn last on top of everything.

use super::app::{App, Focus};
use super::components::{header, status_bar};
use super::layout::ScreenAreas;
use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

/// Main UI render function - called on every frame
pub fn draw(f: &mut Frame, app: &App) {
    let theme = &app.theme;

    // Apply theme background to entire frame
    let bg_block = Block::default().style(
        Style::default()
            .bg(theme.background)
            .fg(theme.foreground),
    );
    f.render_widget(bg_block, f.area());

    let screen = f.area();
    let areas = ScreenAreas::compute(screen);

    header::render(f, areas.header, app);

    app.search_bar
        .render(f, areas.search, theme, app.focus == Focus::SearchBar);

    app.filter.render(
        f,
        areas.filter,
        theme,
        app.store.property_type_filter(),
        app.focus == Focus::Filter,
    );

    app.shortlist_table.render(
        f,
        areas.shortlist,
        theme,
        app.store.selection(),
        |_| true,
        app.focus == Focus::Shortlist,
    );

    app.results_table.render(
        f,
        areas.results,
        theme,
        app.store.results(),
        |property| app.store.is_selected(&property.id),
        app.focus == Focus::Results,
    );

    status_bar::render(f, areas.status, app);

    app.toasts.render(f, screen, theme);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FixtureSource;
    use crate::config::Config;
    use crate::logging::LogBuffer;
    use crate::model::PropertyType;
    use crate::tui::components::property_table::{RESULTS_PLACEHOLDER, SHORTLIST_PLACEHOLDER};
    use crate::tui::components::search_bar::PLACEHOLDER;
    use ratatui::backend::TestBackend;
    use ratatui::Terminal;
    use std::sync::Arc;
    use tokio::sync::mpsc;

    fn test_app() -> (App, mpsc::Receiver<crate::events::AppEvent>) {
        let (tx, rx) = mpsc::channel(16);
        let app = App::new(
            &Config::default(),
            Arc::new(FixtureSource::new()),
            tx,
            LogBuffer::new(),
        );
        (app, rx)
    }

    fn render(app: &App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| draw(f, app)).unwrap();

        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    #[tokio::test]
    async fn test_initial_screen_shows_placeholders() {
        let (app, _rx) = test_app();
        let screen = render(&app, 120, 32);

        assert!(screen.contains("IMMO"));
        assert!(screen.contains("Property search tool"));
        assert!(screen.contains(PLACEHOLDER));
        assert!(screen.contains(SHORTLIST_PLACEHOLDER));
        assert!(screen.contains(RESULTS_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_results_render_with_checkboxes() {
        let (mut app, mut rx) = test_app();
        app.submit_address("St".to_string());
        let event = rx.recv().await.unwrap();
        app.handle_event(event);
        app.toggle_result(0);

        let screen = render(&app, 120, 32);

        assert!(screen.contains("Number of Rooms"));
        assert!(screen.contains("Floor Area (m²)"));
        assert!(screen.contains("Forsmannstraße 5"));
        assert!(screen.contains("[x]"));
        assert!(screen.contains("[ ]"));
        assert!(!screen.contains(SHORTLIST_PLACEHOLDER));
        assert!(!screen.contains(RESULTS_PLACEHOLDER));
    }

    #[tokio::test]
    async fn test_error_toast_is_drawn() {
        let (mut app, _rx) = test_app();
        app.toasts.push_error("An unexpected error occurred");

        let screen = render(&app, 100, 30);
        assert!(screen.contains("An unexpected error occurred"));
    }

    #[tokio::test]
    async fn test_active_filter_entry_is_marked() {
        let (mut app, mut rx) = test_app();
        app.start();
        let event = rx.recv().await.unwrap();
        app.handle_event(event);

        let line_of = |screen: &str, label: &str| -> String {
            screen
                .lines()
                .find(|l| l.contains(&format!("○ {label}")) || l.contains(&format!("● {label}")))
                .unwrap_or_else(|| panic!("no filter line for {label}"))
                .to_string()
        };

        app.select_filter(Some(PropertyType::new("detached_house")));
        let screen = render(&app, 120, 32);
        assert!(line_of(&screen, "Detached house").contains("● Detached house"));
        assert!(line_of(&screen, "All").contains("○ All"));
        assert!(!line_of(&screen, "All").contains('●'));

        app.select_filter(None);
        let screen = render(&app, 120, 32);
        assert!(line_of(&screen, "All").contains("● All"));
        assert!(line_of(&screen, "Detached house").contains("○ Detached house"));
    }

    #[tokio::test]
    async fn test_compact_terminal_still_renders() {
        let (app, _rx) = test_app();
        let screen = render(&app, 50, 40);
        assert!(screen.contains("IMMO"));
    }
}
