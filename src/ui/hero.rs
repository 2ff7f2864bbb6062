// SPDX-License-Identifier: MPL-2.0
//! Hero section: headline, call-to-action buttons, and the particle backdrop.
//!
//! The hero drifts at half the scroll speed (classic parallax), implemented by
//! padding its content down as the page scrolls away. The particle field is
//! stacked behind the text and redrawn from the shared animation clock.

use crate::page::content;
use crate::page::layout;
use crate::page::SectionId;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::particle_field::{Particle, ParticleField};
use iced::{
    alignment::Horizontal,
    widget::{button, Column, Container, Row, Stack, Text},
    Element, Length, Padding,
};
use std::time::Duration;

/// Fraction of the scroll offset applied as parallax displacement.
pub const PARALLAX_FACTOR: f32 = 0.5;

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    /// Current vertical scroll offset of the page.
    pub scroll_offset: f32,
    /// Particle trajectories; empty when particles are disabled.
    pub particles: &'a [Particle],
    /// Time elapsed since startup, driving the particle cycles.
    pub elapsed: Duration,
}

/// Messages emitted by the hero call-to-action buttons.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    GetStarted,
    LearnMore,
}

impl Message {
    /// The section each call-to-action navigates to.
    #[must_use]
    pub fn target(self) -> SectionId {
        match self {
            Message::GetStarted => SectionId::Contact,
            Message::LearnMore => SectionId::Features,
        }
    }
}

/// Displacement of the hero content for a given scroll offset.
#[must_use]
pub fn parallax_offset(scroll_offset: f32) -> f32 {
    (scroll_offset * PARALLAX_FACTOR).clamp(0.0, layout::HERO_HEIGHT)
}

/// Render the hero section.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let title = Text::new(content::HERO_TITLE)
        .size(typography::DISPLAY)
        .color(ctx.scheme.overlay_text)
        .align_x(Horizontal::Center);

    let subtitle = Text::new(content::HERO_SUBTITLE)
        .size(typography::BODY_LG)
        .color(ctx.scheme.overlay_text)
        .align_x(Horizontal::Center);

    let primary = button(Text::new(content::HERO_PRIMARY_CTA).size(typography::BODY_LG))
        .on_press(Message::GetStarted)
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary);

    let secondary = button(Text::new(content::HERO_SECONDARY_CTA).size(typography::BODY_LG))
        .on_press(Message::LearnMore)
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::ghost(ctx.scheme.overlay_text));

    let actions = Row::new()
        .spacing(spacing::MD)
        .push(primary)
        .push(secondary);

    let copy = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .max_width(layout::CONTENT_WIDTH)
        .push(title)
        .push(subtitle)
        .push(actions);

    // Parallax: the content trails the scroll by sinking into the section.
    let parallax = parallax_offset(ctx.scroll_offset);
    let copy_layer = Container::new(copy)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Center)
        .center_y(Length::Fill)
        .padding(Padding::new(spacing::LG).top(spacing::LG + parallax));

    let mut stack = Stack::new();
    if !ctx.particles.is_empty() {
        let field = ParticleField::new(ctx.particles, ctx.elapsed, ctx.scheme.overlay_text);
        stack = stack.push(field.into_element());
    }
    stack = stack.push(copy_layer);

    Container::new(stack)
        .width(Length::Fill)
        .height(Length::Fixed(layout::HERO_HEIGHT))
        .style(styles::container::section(ctx.scheme.brand_secondary))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::widgets::particle_field;

    #[test]
    fn parallax_trails_at_half_speed() {
        assert_eq!(parallax_offset(0.0), 0.0);
        assert_eq!(parallax_offset(200.0), 100.0);
    }

    #[test]
    fn parallax_is_clamped_to_the_hero() {
        assert_eq!(parallax_offset(100_000.0), layout::HERO_HEIGHT);
        assert_eq!(parallax_offset(-50.0), 0.0);
    }

    #[test]
    fn call_to_actions_target_their_sections() {
        assert_eq!(Message::GetStarted.target(), SectionId::Contact);
        assert_eq!(Message::LearnMore.target(), SectionId::Features);
    }

    #[test]
    fn hero_renders_with_and_without_particles() {
        let scheme = ColorScheme::dark();
        let particles = particle_field::spawn(8);

        let _with = view(ViewContext {
            scheme: &scheme,
            scroll_offset: 120.0,
            particles: &particles,
            elapsed: Duration::from_secs(2),
        });
        let _without = view(ViewContext {
            scheme: &scheme,
            scroll_offset: 0.0,
            particles: &[],
            elapsed: Duration::ZERO,
        });
    }
}
