//! Transient notification surface
//!
//! One process-wide toast stack configured once at startup through
//! [`NotifyOptions`]. Toasts are non-interactive: no click-to-close, no
//! dragging, no pause-on-hover; they expire on their own and get pruned by
//! the application tick.

use crate::gui::theme;
use iced::widget::{container, text};
use iced::{Alignment, Element, Length};
use std::time::{Duration, Instant};

/// Where the toast stack is anchored in the window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastAnchor {
    TopRight,
    TopLeft,
}

/// Fixed configuration for the notification surface.
///
/// Built once in the bootstrap; there is no runtime reconfiguration.
#[derive(Debug, Clone)]
pub struct NotifyOptions {
    pub anchor: ToastAnchor,
    /// How long a toast stays visible.
    pub auto_dismiss: Duration,
    /// When false, new toasts stack below older ones.
    pub newest_on_top: bool,
}

impl Default for NotifyOptions {
    fn default() -> Self {
        Self {
            anchor: ToastAnchor::TopRight,
            auto_dismiss: Duration::from_millis(5000),
            newest_on_top: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// One live notification.
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    expires_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>, options: &NotifyOptions) -> Self {
        Self {
            kind,
            message: message.into(),
            expires_at: Instant::now() + options.auto_dismiss,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

/// Drop every toast whose lifetime has elapsed.
pub fn prune_expired(toasts: &mut Vec<Toast>, now: Instant) {
    toasts.retain(|t| !t.is_expired(now));
}

/// Render the toast stack.
///
/// Returns the stack wrapped in a full-width container aligned per the
/// configured anchor, so the caller can lay it over the top of the view.
pub fn toast_stack<'a, Message: 'a>(
    toasts: &[Toast],
    options: &NotifyOptions,
) -> Element<'a, Message> {
    let mut stack = iced::widget::Column::new().spacing(8);

    // newest_on_top disabled: iterate in insertion order
    let ordered: Vec<&Toast> = if options.newest_on_top {
        toasts.iter().rev().collect()
    } else {
        toasts.iter().collect()
    };

    for toast in ordered {
        let style = match toast.kind {
            ToastKind::Success => theme::ToastContainer::Success,
            ToastKind::Error => theme::ToastContainer::Error,
        };

        stack = stack.push(
            container(text(toast.message.clone()).size(14))
                .padding([10, 16])
                .style(iced::theme::Container::Custom(Box::new(style))),
        );
    }

    let anchored = match options.anchor {
        ToastAnchor::TopRight => iced::widget::Row::new()
            .push(iced::widget::Space::with_width(Length::Fill))
            .push(stack),
        ToastAnchor::TopLeft => iced::widget::Row::new()
            .push(stack)
            .push(iced::widget::Space::with_width(Length::Fill)),
    };

    container(anchored.align_items(Alignment::Start))
        .width(Length::Fill)
        .padding(12)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options_match_fixed_surface_config() {
        let options = NotifyOptions::default();
        assert_eq!(options.anchor, ToastAnchor::TopRight);
        assert_eq!(options.auto_dismiss, Duration::from_millis(5000));
        assert!(!options.newest_on_top);
    }

    #[test]
    fn test_toast_expires_after_auto_dismiss() {
        let options = NotifyOptions::default();
        let toast = Toast::new(ToastKind::Success, "ok", &options);

        let now = Instant::now();
        assert!(!toast.is_expired(now));
        assert!(toast.is_expired(now + Duration::from_millis(5001)));
    }

    #[test]
    fn test_prune_drops_only_expired_toasts() {
        let options = NotifyOptions::default();
        let short = NotifyOptions {
            auto_dismiss: Duration::from_millis(0),
            ..NotifyOptions::default()
        };

        let mut toasts = vec![
            Toast::new(ToastKind::Error, "old", &short),
            Toast::new(ToastKind::Success, "fresh", &options),
        ];

        prune_expired(&mut toasts, Instant::now() + Duration::from_millis(1));
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts[0].message, "fresh");
    }
}
