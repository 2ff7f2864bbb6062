// SPDX-License-Identifier: MPL-2.0
//! Toast widget for rendering the active notification.
//!
//! The toast is purely presentational: it has no dismiss button and emits no
//! messages, so it renders for any parent message type. Its visibility
//! follows the lifecycle phase the `Notifier` reports.

use super::notification::Notification;
use super::notifier::{Notifier, Phase};
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::widget::{text, Container, Text};
use iced::{alignment, Color, Element, Length, Theme};

/// Toast widget configuration.
pub struct Toast;

impl Toast {
    /// Renders the active toast.
    pub fn view<'a, M: 'a>(
        notification: &'a Notification,
        phase: Phase,
        scheme: &ColorScheme,
    ) -> Element<'a, M> {
        let alpha = phase_alpha(phase);
        let accent = notification.severity().color();

        let background = Color {
            a: scheme.overlay_background.a * alpha,
            ..scheme.overlay_background
        };
        let text_color = Color {
            a: alpha,
            ..scheme.overlay_text
        };
        let accent = Color {
            a: accent.a * alpha,
            ..accent
        };

        let message = Text::new(notification.message())
            .size(typography::BODY)
            .style(move |_theme: &Theme| text::Style {
                color: Some(text_color),
            });

        Container::new(message)
            .width(Length::Fixed(sizing::TOAST_WIDTH))
            .padding(spacing::SM)
            .style(styles::container::toast(background, accent))
            .into()
    }

    /// Renders the toast overlay, anchored to the bottom-right corner.
    pub fn view_overlay<'a, M: 'a>(
        notifier: &'a Notifier,
        scheme: &ColorScheme,
    ) -> Element<'a, M> {
        match notifier.active() {
            Some((notification, phase)) => {
                let toast = Self::view(notification, phase, scheme);

                Container::new(toast)
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .align_x(alignment::Horizontal::Right)
                    .align_y(alignment::Vertical::Bottom)
                    .padding(spacing::MD)
                    .into()
            }
            // Empty container that takes no space
            None => Container::new(text(""))
                .width(Length::Shrink)
                .height(Length::Shrink)
                .into(),
        }
    }
}

fn phase_alpha(phase: Phase) -> f32 {
    match phase {
        Phase::Pending | Phase::Hiding => 0.0,
        Phase::Showing => 1.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_is_invisible_outside_the_showing_phase() {
        assert_eq!(phase_alpha(Phase::Pending), 0.0);
        assert_eq!(phase_alpha(Phase::Showing), 1.0);
        assert_eq!(phase_alpha(Phase::Hiding), 0.0);
    }

    #[test]
    fn overlay_renders_without_a_toast() {
        let notifier = Notifier::new();
        let scheme = ColorScheme::light();
        let _element: Element<'_, ()> = Toast::view_overlay(&notifier, &scheme);
    }

    #[test]
    fn overlay_renders_the_active_toast() {
        let mut notifier = Notifier::new();
        let _ = notifier.notify(Notification::error("Please enter a valid email address"));

        let scheme = ColorScheme::dark();
        let _element: Element<'_, ()> = Toast::view_overlay(&notifier, &scheme);
    }
}
