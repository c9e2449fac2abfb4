// Application state for the TUI
//
// App wraps the SearchStore with everything the terminal needs around it:
// the panels' local UI state, toasts, the theme and the handles used to run
// fetches in the background. Store transitions that return a SearchRequest
// are handed to `search::spawn_search`; completions come back as AppEvents
// through `handle_event`.

use super::clipboard;
use super::components::{
    FilterAction, PropertyFilter, PropertyTable, SearchBar, SearchBarAction, TableAction,
    TableKind, ToastStack,
};
use super::theme::Theme;
use super::traits::{Handled, Interactive};
use crate::api::SharedSource;
use crate::config::Config;
use crate::events::AppEvent;
use crate::logging::LogBuffer;
use crate::model::PropertyType;
use crate::search;
use crate::store::{SearchRequest, SearchStore};
use crossterm::event::KeyEvent;
use std::time::Duration;
use tokio::sync::mpsc;

/// Panels that can hold keyboard focus, in Tab order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    SearchBar,
    Filter,
    Results,
    Shortlist,
}

impl Focus {
    const ORDER: [Focus; 4] = [
        Focus::SearchBar,
        Focus::Filter,
        Focus::Results,
        Focus::Shortlist,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|&f| f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

pub struct App {
    /// Search workflow state
    pub store: SearchStore,

    source: SharedSource,
    tx: mpsc::Sender<AppEvent>,

    // Panels
    pub search_bar: SearchBar,
    pub filter: PropertyFilter,
    pub results_table: PropertyTable,
    pub shortlist_table: PropertyTable,
    pub focus: Focus,

    pub toasts: ToastStack,
    pub theme: Theme,
    /// Captured tracing output for the status bar
    pub log_buffer: LogBuffer,

    pub should_quit: bool,
    animation_frame: usize,
}

impl App {
    pub fn new(
        config: &Config,
        source: SharedSource,
        tx: mpsc::Sender<AppEvent>,
        log_buffer: LogBuffer,
    ) -> Self {
        Self {
            store: SearchStore::new(),
            source,
            tx,
            search_bar: SearchBar::new(),
            filter: PropertyFilter::new(),
            results_table: PropertyTable::new(TableKind::Results),
            shortlist_table: PropertyTable::new(TableKind::Shortlist),
            focus: Focus::default(),
            toasts: ToastStack::new(Duration::from_secs(config.toast_timeout_secs)),
            theme: Theme::by_name(&config.theme),
            log_buffer,
            should_quit: false,
            animation_frame: 0,
        }
    }

    /// Kick off the startup fetches
    pub fn start(&mut self) {
        self.load_property_types();
    }

    // ─── Store transitions ────────────────────────────────────

    pub fn submit_address(&mut self, address: String) {
        let request = self.store.set_address(address);
        self.after_transition(request);
    }

    pub fn select_filter(&mut self, filter: Option<PropertyType>) {
        let request = self.store.set_filter(filter);
        self.after_transition(request);
    }

    pub fn refresh(&mut self) {
        let request = self.store.refresh();
        self.after_transition(request);
    }

    fn after_transition(&mut self, request: Option<SearchRequest>) {
        match request {
            Some(request) => {
                tracing::debug!(
                    "Search #{} for '{}' ({})",
                    request.generation,
                    request.query.address,
                    request
                        .query
                        .property_type
                        .as_ref()
                        .map(PropertyType::as_str)
                        .unwrap_or("all types"),
                );
                search::spawn_search(self.source.clone(), request, self.tx.clone());
            }
            // Empty address: results were cleared synchronously
            None => self.sync_tables(),
        }
    }

    pub fn load_property_types(&mut self) {
        self.filter.mark_loading();
        search::spawn_property_types(self.source.clone(), self.tx.clone());
    }

    /// Flip the checkbox of a search result row
    pub fn toggle_result(&mut self, index: usize) {
        let Some(property) = self.store.results().get(index).cloned() else {
            return;
        };
        let checked = self.store.flip_selection(&property);
        tracing::debug!(
            "{} {}",
            if checked { "Shortlisted" } else { "Unlisted" },
            property.address
        );
        self.sync_tables();
    }

    /// Remove a shortlist row
    pub fn remove_shortlisted(&mut self, index: usize) {
        let Some(property) = self.store.selection().get(index).cloned() else {
            return;
        };
        self.store.toggle_selection(&property, false);
        self.sync_tables();
    }

    fn sync_tables(&mut self) {
        self.results_table.sync_rows(self.store.results().len());
        self.shortlist_table.sync_rows(self.store.selection().len());
    }

    // ─── Background completions ───────────────────────────────

    pub fn handle_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::SearchCompleted { generation, result } => match result {
                Ok(properties) => {
                    let count = properties.len();
                    if self.store.receive_results(generation, properties) {
                        tracing::info!("Found {} {}", count, plural(count));
                        self.results_table.reset_cursor();
                        self.sync_tables();
                    } else {
                        tracing::debug!("Discarding stale results of search #{}", generation);
                    }
                }
                Err(e) => {
                    if self.store.receive_failure(generation, &e) {
                        self.toasts.push_error(e.to_string());
                    } else {
                        tracing::debug!("Discarding stale failure of search #{}: {}", generation, e);
                    }
                }
            },
            AppEvent::PropertyTypesLoaded(result) => match result {
                Ok(options) => {
                    tracing::debug!("Loaded {} property type option(s)", options.len());
                    self.filter.set_options(options);
                }
                Err(e) => {
                    self.filter.mark_failed();
                    self.toasts.push_error(e.to_string());
                }
            },
        }
    }

    // ─── Keyboard ─────────────────────────────────────────────

    /// Route a key to the focused panel and apply whatever it asks for
    pub fn dispatch_to_focused(&mut self, key: KeyEvent) -> Handled<()> {
        match self.focus {
            Focus::SearchBar => match self.search_bar.handle_key(key) {
                Handled::Emit(SearchBarAction::Submit(address)) => {
                    self.submit_address(address);
                    Handled::Yes
                }
                other => discard_action(other),
            },
            Focus::Filter => match self.filter.handle_key(key) {
                Handled::Emit(FilterAction::Select(value)) => {
                    self.select_filter(value);
                    Handled::Yes
                }
                Handled::Emit(FilterAction::Reload) => {
                    self.load_property_types();
                    Handled::Yes
                }
                other => discard_action(other),
            },
            Focus::Results => match self.results_table.handle_key(key) {
                Handled::Emit(TableAction::Toggle(index)) => {
                    self.toggle_result(index);
                    Handled::Yes
                }
                other => discard_action(other),
            },
            Focus::Shortlist => match self.shortlist_table.handle_key(key) {
                Handled::Emit(TableAction::Toggle(index)) => {
                    self.remove_shortlisted(index);
                    Handled::Yes
                }
                other => discard_action(other),
            },
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    /// Whether keystrokes are going into the text field
    pub fn is_editing(&self) -> bool {
        self.focus == Focus::SearchBar
    }

    pub fn focus_hint(&self) -> &'static str {
        match self.focus {
            Focus::SearchBar => self.search_bar.focus_hint(),
            Focus::Filter => self.filter.focus_hint(),
            Focus::Results => self.results_table.focus_hint(),
            Focus::Shortlist => self.shortlist_table.focus_hint(),
        }
    }

    // ─── Misc actions ─────────────────────────────────────────

    pub fn next_theme(&mut self) {
        self.theme = self.theme.kind.next().theme();
        tracing::debug!("Theme: {}", self.theme.kind.name());
    }

    /// Copy the shortlist to the clipboard as JSON, reporting via toast
    pub fn copy_shortlist(&mut self) {
        let count = self.store.selection().len();
        if count == 0 {
            self.toasts.push_info("Shortlist is empty");
            return;
        }

        let result = clipboard::shortlist_json(self.store.selection())
            .and_then(|json| clipboard::copy_to_clipboard(&json));
        match result {
            Ok(()) => self
                .toasts
                .push_info(format!("Copied {} {} to clipboard", count, plural(count))),
            Err(e) => {
                tracing::warn!("Clipboard copy failed: {:#}", e);
                self.toasts.push_error("Failed to copy to clipboard");
            }
        }
    }

    // ─── Animation ────────────────────────────────────────────

    /// Advance animations and drop expired toasts (called on every tick)
    pub fn tick(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
        self.toasts.clear_expired();
    }

    pub fn spinner_char(&self) -> char {
        const SPINNER: [char; 4] = ['◐', '◓', '◑', '◒'];
        SPINNER[self.animation_frame % SPINNER.len()]
    }
}

fn plural(count: usize) -> &'static str {
    if count == 1 {
        "property"
    } else {
        "properties"
    }
}

/// A component action the App has no use for
fn discard_action<A>(handled: Handled<A>) -> Handled<()> {
    match handled {
        Handled::No => Handled::No,
        Handled::Yes | Handled::Emit(_) => Handled::Yes,
    }
}
