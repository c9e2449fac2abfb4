//! Toast notifications
//!
//! Non-blocking overlays stacked in the bottom-right corner, newest at the
//! bottom. Each toast dismisses itself after the configured timeout; Esc
//! dismisses the newest one early.

use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Padding, Paragraph, Wrap},
    Frame,
};
use std::time::{Duration, Instant};
use unicode_width::UnicodeWidthStr;

/// Never show more than this many at once
const MAX_VISIBLE: usize = 4;
const MAX_WIDTH: u16 = 48;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Info,
}

/// A toast notification that auto-dismisses
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    created_at: Instant,
}

impl Toast {
    fn new(kind: ToastKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            created_at: Instant::now(),
        }
    }

    fn is_expired(&self, timeout: Duration, now: Instant) -> bool {
        now.saturating_duration_since(self.created_at) >= timeout
    }
}

#[derive(Debug)]
pub struct ToastStack {
    toasts: Vec<Toast>,
    timeout: Duration,
}

impl ToastStack {
    pub fn new(timeout: Duration) -> Self {
        Self {
            toasts: Vec::new(),
            timeout,
        }
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(ToastKind::Error, message));
    }

    pub fn push_info(&mut self, message: impl Into<String>) {
        self.toasts.push(Toast::new(ToastKind::Info, message));
    }

    /// Remove the newest toast; false if there was none
    pub fn dismiss_latest(&mut self) -> bool {
        self.toasts.pop().is_some()
    }

    pub fn clear_expired(&mut self) {
        self.clear_expired_at(Instant::now());
    }

    fn clear_expired_at(&mut self, now: Instant) {
        let timeout = self.timeout;
        self.toasts.retain(|t| !t.is_expired(timeout, now));
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.toasts.is_empty()
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.toasts.len()
    }

    #[cfg(test)]
    pub fn iter(&self) -> impl Iterator<Item = &Toast> {
        self.toasts.iter()
    }

    /// Render the newest toasts bottom-up in the bottom-right corner
    ///
    /// Uses `Clear` so each toast sits on top of other content.
    pub fn render(&self, f: &mut Frame, area: Rect, theme: &Theme) {
        let max_width = MAX_WIDTH.min(area.width.saturating_sub(4));
        if max_width < 8 {
            return;
        }

        let mut bottom = area.bottom().saturating_sub(1);
        let max_lines = usize::from(area.height.saturating_sub(3)).max(1);

        for toast in self.toasts.iter().rev().take(MAX_VISIBLE) {
            let (label, color) = match toast.kind {
                ToastKind::Error => ("✗ ", theme.error),
                ToastKind::Info => ("✓ ", theme.info),
            };

            // Borders plus one space of padding either side; long messages are clipped
            let text_width = toast.message.width() + label.width();
            let width = (text_width + 4).min(usize::from(max_width)) as u16;
            let inner_width = usize::from(width.saturating_sub(4).max(1));
            let lines = text_width
                .div_ceil(inner_width)
                .clamp(1, max_lines) as u16;
            let height = lines.saturating_add(2);

            if bottom < area.y.saturating_add(height) {
                break;
            }

            let x = area.right().saturating_sub(width + 2);
            let y = bottom - height;
            let toast_area = Rect::new(x, y, width, height);

            let block = Block::default()
                .borders(Borders::ALL)
                .border_type(theme.border_type)
                .border_style(Style::default().fg(color))
                .style(Style::default().bg(theme.background));

            let text = Paragraph::new(Line::from(vec![
                Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
                Span::styled(toast.message.as_str(), Style::default().fg(theme.foreground)),
            ]))
            .wrap(Wrap { trim: true })
            .block(block.padding(Padding::horizontal(1)));

            f.render_widget(Clear, toast_area);
            f.render_widget(text, toast_area);

            bottom = y;
        }
    }
}
