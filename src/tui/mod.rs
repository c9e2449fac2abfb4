// TUI module - Terminal User Interface
//
// This module manages the terminal UI using ratatui. It handles:
// - Terminal initialization and cleanup
// - Event loop (keyboard input, timer ticks, fetch completions)
// - Layered key dispatch

pub mod app;
pub mod clipboard;
pub mod components;
pub mod layout;
pub mod theme;
pub mod traits;
pub mod views;

use crate::api::SharedSource;
use crate::config::Config;
use crate::events::AppEvent;
use crate::logging::LogBuffer;
use anyhow::{Context, Result};
use app::App;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;

/// Capacity of the completion channel
const EVENT_CHANNEL_CAPACITY: usize = 64;

/// Run the TUI
///
/// Sets up the terminal, runs the event loop, and restores the terminal
/// when done (also when the loop fails).
pub async fn run_tui(config: Config, source: SharedSource, log_buffer: LogBuffer) -> Result<()> {
    let (tx, mut event_rx) = mpsc::channel(EVENT_CHANNEL_CAPACITY);
    let mut app = App::new(&config, source, tx, log_buffer);

    // Set up terminal
    enable_raw_mode().context("Failed to enable raw mode")?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen).context("Failed to setup terminal")?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;

    tracing::info!("immo started");
    app.start();

    // Run the event loop
    let result = run_event_loop(&mut terminal, &mut app, &mut event_rx).await;

    // Restore terminal
    disable_raw_mode().context("Failed to disable raw mode")?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)
        .context("Failed to restore terminal")?;
    terminal.show_cursor().context("Failed to show cursor")?;

    result
}

/// Main event loop
///
/// Waits on three sources with tokio::select!:
/// 1. Keyboard input
/// 2. Timer ticks (spinner animation, toast expiry)
/// 3. Completions of background fetches
async fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    event_rx: &mut mpsc::Receiver<AppEvent>,
) -> Result<()> {
    let mut tick_interval = tokio::time::interval(Duration::from_millis(200));

    loop {
        terminal
            .draw(|f| views::draw(f, app))
            .context("Failed to draw terminal")?;

        tokio::select! {
            // Keyboard input
            _ = async {
                if event::poll(Duration::from_millis(10)).unwrap_or(false) {
                    if let Ok(Event::Key(key_event)) = event::read() {
                        handle_key_event(app, key_event);
                    }
                }
            } => {}

            // Periodic tick for redrawing
            _ = tick_interval.tick() => {
                app.tick();
            }

            // Fetch completions
            Some(app_event) = event_rx.recv() => {
                app.handle_event(app_event);
            }
        }

        if app.should_quit {
            break;
        }
    }

    tracing::info!("immo stopped");
    Ok(())
}

/// Handle keyboard input
/// Layered dispatch: Always-on → Focus cycling → Text field → Global → Panel
fn handle_key_event(app: &mut App, key_event: KeyEvent) {
    if key_event.kind != KeyEventKind::Press {
        return;
    }

    // Layer 1: keys that work everywhere, including while typing
    if handle_always_on_keys(app, &key_event) {
        return;
    }

    // Layer 2: the text field swallows printable keys before global shortcuts
    if app.is_editing() && app.dispatch_to_focused(key_event).was_handled() {
        return;
    }

    // Layer 3: single-letter shortcuts (only reachable outside the text field)
    if handle_global_keys(app, &key_event) {
        return;
    }

    // Layer 4: focused panel
    if !app.is_editing() {
        app.dispatch_to_focused(key_event);
    }
}

fn handle_always_on_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);

    match key_event.code {
        KeyCode::Char('c') if ctrl => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('r') if ctrl => {
            app.refresh();
            true
        }
        KeyCode::F(5) => {
            app.refresh();
            true
        }
        KeyCode::Esc => {
            app.toasts.dismiss_latest();
            true
        }
        KeyCode::Tab => {
            if key_event.modifiers.contains(KeyModifiers::SHIFT) {
                app.focus_prev();
            } else {
                app.focus_next();
            }
            true
        }
        KeyCode::BackTab => {
            app.focus_prev();
            true
        }
        _ => false,
    }
}

fn handle_global_keys(app: &mut App, key_event: &KeyEvent) -> bool {
    match key_event.code {
        KeyCode::Char('q') | KeyCode::Char('Q') => {
            app.should_quit = true;
            true
        }
        KeyCode::Char('t') => {
            app.next_theme();
            true
        }
        KeyCode::Char('y') => {
            app.copy_shortlist();
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FixtureSource;
    use app::Focus;
    use std::sync::Arc;

    fn test_app() -> (App, mpsc::Receiver<AppEvent>) {
        let (tx, rx) = mpsc::channel(16);
        let app = App::new(
            &Config::default(),
            Arc::new(FixtureSource::new()),
            tx,
            LogBuffer::new(),
        );
        (app, rx)
    }

    fn press(app: &mut App, code: KeyCode) {
        handle_key_event(app, KeyEvent::new(code, KeyModifiers::NONE));
    }

    #[tokio::test]
    async fn test_q_types_into_search_bar() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Char('q'));
        assert!(!app.should_quit);
        assert_eq!(app.search_bar.value(), "q");
    }

    #[tokio::test]
    async fn test_q_quits_outside_text_field() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.focus, Focus::Filter);
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_ctrl_c_quits_while_typing() {
        let (mut app, _rx) = test_app();
        handle_key_event(
            &mut app,
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
        );
        assert!(app.should_quit);
    }

    #[tokio::test]
    async fn test_backtab_and_esc() {
        let (mut app, _rx) = test_app();
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.focus, Focus::Shortlist);

        app.toasts.push_error("boom");
        press(&mut app, KeyCode::Esc);
        assert!(app.toasts.is_empty());
    }

    #[tokio::test]
    async fn test_enter_in_search_bar_searches() {
        let (mut app, mut rx) = test_app();
        press(&mut app, KeyCode::Char('S'));
        press(&mut app, KeyCode::Char('t'));
        press(&mut app, KeyCode::Enter);

        let event = rx.recv().await.unwrap();
        app.handle_event(event);
        assert_eq!(app.store.results().len(), 5);
    }

    #[tokio::test]
    async fn test_f5_refreshes_current_query() {
        let (mut app, mut rx) = test_app();
        app.submit_address("St".to_string());
        let first = rx.recv().await.unwrap();
        app.handle_event(first);
        let generation = app.store.generation();

        press(&mut app, KeyCode::F(5));
        assert_eq!(app.store.generation(), generation + 1);
        assert!(app.store.in_flight());
    }
}
