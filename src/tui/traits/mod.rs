//! Component traits for the TUI
//!
//! Focusable components implement [`Interactive`]: the App routes key events
//! to whichever component has focus, and the component answers with a
//! [`Handled`] value. Components never touch the store themselves; anything
//! that changes workflow state comes back as an action for the App to apply.
//!
//! ```text
//! KeyEvent
//!    │
//!    ▼
//! App (global keys: Tab, Esc, F5, Ctrl+C, q/t/y outside text input)
//!    │
//!    │ if not handled
//!    ▼
//! Focused component ── Handled::Emit(action) ──▶ App applies it to the store
//! ```

mod interactive;

pub use interactive::{Handled, Interactive};
