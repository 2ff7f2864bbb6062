// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Shadow, Theme};

/// Generic panel surface used for dropdown menus and overlays.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Full-width band behind a page section.
pub fn section(background: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        ..Default::default()
    }
}

/// Sticky header chrome. Transparent while the hero is in view, an elevated
/// surface once the page has scrolled past the threshold.
pub fn header_bar(background: Option<Color>) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: background.map(Background::Color),
        shadow: if background.is_some() {
            Shadow {
                color: Color {
                    a: 0.12,
                    ..palette::BLACK
                },
                ..shadow::SM
            }
        } else {
            shadow::NONE
        },
        ..Default::default()
    }
}

/// Card surface that fades in as its reveal progress advances from 0 to 1.
///
/// `outline` adds an emphasis border, used to mark the featured pricing plan.
pub fn reveal_card(
    base: Color,
    outline: Option<Color>,
    progress: f32,
) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| {
        let eased = progress.clamp(0.0, 1.0);

        container::Style {
            background: Some(Background::Color(Color {
                a: base.a * eased,
                ..base
            })),
            border: Border {
                color: outline.map_or(Color::TRANSPARENT, |color| Color {
                    a: color.a * eased,
                    ..color
                }),
                width: if outline.is_some() { 2.0 } else { 0.0 },
                radius: radius::XL.into(),
            },
            shadow: Shadow {
                color: Color {
                    a: 0.16 * eased,
                    ..palette::BLACK
                },
                ..shadow::MD
            },
            ..Default::default()
        }
    }
}

/// Raised variant shown while the pointer hovers a pricing card.
pub fn lifted_card(base: Color, outline: Option<Color>) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            color: outline.unwrap_or(Color::TRANSPARENT),
            width: if outline.is_some() { 2.0 } else { 0.0 },
            radius: radius::XL.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.24,
                ..palette::BLACK
            },
            ..shadow::LG
        },
        ..Default::default()
    }
}

/// Toast surface with a severity accent along the border.
pub fn toast(background: Color, accent: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(background)),
        border: Border {
            color: accent,
            width: 2.0,
            radius: radius::MD.into(),
        },
        shadow: Shadow {
            color: Color {
                a: 0.3,
                ..palette::BLACK
            },
            ..shadow::LG
        },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveal_card_is_invisible_at_zero_progress() {
        let theme = Theme::Light;
        let style = reveal_card(palette::WHITE, None, 0.0)(&theme);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg.a, 0.0);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn reveal_card_is_opaque_at_full_progress() {
        let theme = Theme::Light;
        let style = reveal_card(palette::WHITE, None, 1.0)(&theme);

        if let Some(Background::Color(bg)) = style.background {
            assert_eq!(bg.a, 1.0);
        } else {
            panic!("Expected background color");
        }
    }

    #[test]
    fn outline_only_draws_for_featured_cards() {
        let theme = Theme::Light;

        let plain = reveal_card(palette::WHITE, None, 1.0)(&theme);
        let featured = reveal_card(palette::WHITE, Some(palette::PRIMARY_500), 1.0)(&theme);

        assert_eq!(plain.border.width, 0.0);
        assert_eq!(featured.border.width, 2.0);
    }

    #[test]
    fn header_bar_is_flat_until_scrolled() {
        let theme = Theme::Light;

        let at_top = header_bar(None)(&theme);
        let scrolled = header_bar(Some(palette::WHITE))(&theme);

        assert!(at_top.background.is_none());
        assert!(scrolled.background.is_some());
        assert_ne!(at_top.shadow.color.a, scrolled.shadow.color.a);
    }
}
