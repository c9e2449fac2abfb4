//! Interactive trait for components that handle keyboard input

use crossterm::event::KeyEvent;

/// Result of handling a key event
#[derive(Debug, Clone, PartialEq)]
pub enum Handled<A> {
    /// Event was not handled, should bubble up
    No,
    /// Event was consumed; only component-local state changed
    Yes,
    /// Event was consumed and produced an action for the App
    Emit(A),
}

impl<A> Handled<A> {
    /// Check if the event was handled
    pub fn was_handled(&self) -> bool {
        !matches!(self, Handled::No)
    }
}

/// Trait for components that handle keyboard input
pub trait Interactive {
    /// What this component asks the App to do
    type Action;

    /// Handle a key event while focused
    fn handle_key(&mut self, key: KeyEvent) -> Handled<Self::Action>;

    /// Key hints for the status bar while this component has focus
    fn focus_hint(&self) -> &'static str;
}
