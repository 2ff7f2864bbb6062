// SPDX-License-Identifier: MPL-2.0
//! Section views for the showcase page: features, how-it-works, pricing,
//! contact, and the footer.
//!
//! Card sections read their entrance progress from the reveal state the app
//! controller owns. A card whose reveal has not fired renders fully
//! transparent; once it fires, the card fades in over the entrance duration,
//! feature cards with an index-proportional stagger.

use crate::page::content::{self, Feature, Plan, Step};
use crate::page::layout;
use crate::page::TargetId;
use crate::reveal::RevealTrigger;
use crate::ui::contact;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::motion;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use iced::{
    alignment::Horizontal,
    widget::{button, mouse_area, text_input, Column, Container, Row, Text},
    Color, Element, Length,
};
use std::collections::HashMap;
use std::time::Instant;

/// Shared context for rendering the card sections.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub reveal: &'a RevealTrigger<TargetId>,
    /// When each target's reveal fired; drives the entrance animation.
    pub revealed_at: &'a HashMap<TargetId, Instant>,
    pub now: Instant,
    /// Skip entrance animation; revealed cards render fully opaque.
    pub reduce_motion: bool,
    /// Pricing card currently under the pointer, if any.
    pub hovered_plan: Option<usize>,
}

/// Messages emitted by the pricing cards.
#[derive(Debug, Clone, Copy)]
pub enum PricingMessage {
    Entered(usize),
    Exited(usize),
}

impl ViewContext<'_> {
    /// Entrance progress for a card, 0.0 (hidden) to 1.0 (settled).
    fn entrance(&self, id: TargetId) -> f32 {
        if !self.reveal.is_visible(id) {
            return 0.0;
        }
        if self.reduce_motion {
            return 1.0;
        }
        match self.revealed_at.get(&id) {
            Some(revealed_at) => {
                motion::entrance_progress(*revealed_at, self.now, id.stagger_index())
            }
            // Visible without a recorded instant: already settled.
            None => 1.0,
        }
    }

    fn faded(&self, color: Color, progress: f32) -> Color {
        Color {
            a: color.a * progress.clamp(0.0, 1.0),
            ..color
        }
    }
}

/// Render the features grid.
pub fn features<'a, M: 'a>(ctx: &ViewContext<'a>) -> Element<'a, M> {
    let mut grid = Column::new().spacing(layout::GRID_GAP);

    for (row_index, chunk) in content::FEATURES.chunks(layout::GRID_COLUMNS).enumerate() {
        let mut row = Row::new().spacing(layout::GRID_GAP);
        for (column, feature) in chunk.iter().enumerate() {
            let index = row_index * layout::GRID_COLUMNS + column;
            row = row.push(feature_card(ctx, index, feature));
        }
        grid = grid.push(row);
    }

    section_shell(
        ctx.scheme,
        ctx.scheme.surface_secondary,
        content::FEATURES_TITLE,
        content::FEATURES_SUBTITLE,
        grid.into(),
    )
}

fn feature_card<'a, M: 'a>(
    ctx: &ViewContext<'a>,
    index: usize,
    feature: &'a Feature,
) -> Element<'a, M> {
    let progress = ctx.entrance(TargetId::Feature(index));

    let body = Column::new()
        .spacing(spacing::SM)
        .push(Text::new(feature.glyph).size(sizing::FEATURE_GLYPH))
        .push(
            Text::new(feature.title)
                .size(typography::TITLE_MD)
                .color(ctx.faded(ctx.scheme.text_primary, progress)),
        )
        .push(
            Text::new(feature.blurb)
                .size(typography::BODY)
                .color(ctx.faded(ctx.scheme.text_secondary, progress)),
        );

    Container::new(body)
        .width(Length::Fixed(layout::CARD_WIDTH))
        .height(Length::Fixed(layout::FEATURE_CARD_HEIGHT))
        .padding(spacing::LG)
        .style(styles::container::reveal_card(
            ctx.scheme.surface_primary,
            None,
            progress,
        ))
        .into()
}

/// Render the how-it-works steps.
pub fn how_it_works<'a, M: 'a>(ctx: &ViewContext<'a>) -> Element<'a, M> {
    let mut row = Row::new().spacing(layout::GRID_GAP);
    for (index, step) in content::STEPS.iter().enumerate() {
        row = row.push(step_card(ctx, index, step));
    }

    section_shell(
        ctx.scheme,
        ctx.scheme.surface_primary,
        content::HOW_TITLE,
        content::HOW_SUBTITLE,
        row.into(),
    )
}

fn step_card<'a, M: 'a>(ctx: &ViewContext<'a>, index: usize, step: &'a Step) -> Element<'a, M> {
    let progress = ctx.entrance(TargetId::Step(index));

    let badge = Container::new(
        Text::new(step.number)
            .size(typography::TITLE_SM)
            .color(ctx.faded(ctx.scheme.overlay_text, progress)),
    )
    .width(Length::Fixed(sizing::STEP_BADGE))
    .height(Length::Fixed(sizing::STEP_BADGE))
    .center_x(Length::Fixed(sizing::STEP_BADGE))
    .center_y(Length::Fixed(sizing::STEP_BADGE))
    .style(styles::container::section(
        ctx.faded(ctx.scheme.brand_primary, progress),
    ));

    let body = Column::new()
        .spacing(spacing::SM)
        .push(badge)
        .push(
            Text::new(step.title)
                .size(typography::TITLE_MD)
                .color(ctx.faded(ctx.scheme.text_primary, progress)),
        )
        .push(
            Text::new(step.blurb)
                .size(typography::BODY)
                .color(ctx.faded(ctx.scheme.text_secondary, progress)),
        );

    Container::new(body)
        .width(Length::Fixed(layout::CARD_WIDTH))
        .height(Length::Fixed(layout::STEP_CARD_HEIGHT))
        .padding(spacing::LG)
        .style(styles::container::reveal_card(
            ctx.scheme.surface_secondary,
            None,
            progress,
        ))
        .into()
}

/// Render the pricing plans. Hovering a card lifts it.
pub fn pricing<'a>(ctx: &ViewContext<'a>) -> Element<'a, PricingMessage> {
    let mut row = Row::new().spacing(layout::GRID_GAP);
    for (index, plan) in content::PLANS.iter().enumerate() {
        row = row.push(plan_card(ctx, index, plan));
    }

    section_shell(
        ctx.scheme,
        ctx.scheme.surface_secondary,
        content::PRICING_TITLE,
        content::PRICING_SUBTITLE,
        row.into(),
    )
}

fn plan_card<'a>(ctx: &ViewContext<'a>, index: usize, plan: &'a Plan) -> Element<'a, PricingMessage> {
    let progress = ctx.entrance(TargetId::Pricing(index));
    let hovered = ctx.hovered_plan == Some(index);
    let outline = plan.featured.then_some(ctx.scheme.brand_primary);

    let mut body = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(plan.name)
                .size(typography::TITLE_MD)
                .color(ctx.faded(ctx.scheme.text_primary, progress)),
        )
        .push(
            Text::new(plan.price)
                .size(typography::DISPLAY)
                .color(ctx.faded(ctx.scheme.brand_primary, progress)),
        )
        .push(
            Text::new(plan.period)
                .size(typography::CAPTION)
                .color(ctx.faded(ctx.scheme.text_tertiary, progress)),
        );

    for highlight in &plan.highlights {
        body = body.push(
            Text::new(*highlight)
                .size(typography::BODY)
                .color(ctx.faded(ctx.scheme.text_secondary, progress)),
        );
    }

    let card = Container::new(body)
        .width(Length::Fixed(layout::CARD_WIDTH))
        .height(Length::Fixed(layout::PLAN_CARD_HEIGHT))
        .padding(spacing::LG);

    // The lifted style only applies once the entrance has finished, so a
    // hover during the fade-in cannot pop the card to full opacity early.
    let card = if hovered && progress >= 1.0 {
        card.style(styles::container::lifted_card(
            ctx.scheme.surface_primary,
            outline,
        ))
    } else {
        card.style(styles::container::reveal_card(
            ctx.scheme.surface_primary,
            outline,
            progress,
        ))
    };

    mouse_area(card)
        .on_enter(PricingMessage::Entered(index))
        .on_exit(PricingMessage::Exited(index))
        .into()
}

/// Render the contact section with the email form.
pub fn contact_section<'a>(
    scheme: &'a ColorScheme,
    state: &'a contact::State,
) -> Element<'a, contact::Message> {
    let input = text_input(content::CONTACT_PLACEHOLDER, state.email())
        .on_input(contact::Message::EmailChanged)
        .on_submit(contact::Message::Submit)
        .padding(spacing::SM)
        .size(typography::BODY_LG)
        .width(Length::Fixed(layout::CARD_WIDTH * 1.5));

    let label = if state.is_submitting() {
        content::CONTACT_SUBMITTING
    } else {
        content::CONTACT_SUBMIT
    };
    let mut submit = button(Text::new(label).size(typography::BODY_LG))
        .padding([spacing::SM, spacing::XL])
        .style(styles::button::primary);
    if !state.is_submitting() {
        submit = submit.on_press(contact::Message::Submit);
    }

    let form = Row::new()
        .spacing(spacing::MD)
        .push(input)
        .push(submit);

    section_shell(
        scheme,
        scheme.surface_primary,
        content::CONTACT_TITLE,
        content::CONTACT_SUBTITLE,
        Container::new(form)
            .width(Length::Fill)
            .align_x(Horizontal::Center)
            .into(),
    )
}

/// Render the footer band.
pub fn footer<'a, M: 'a>(scheme: &'a ColorScheme) -> Element<'a, M> {
    Container::new(
        Text::new(content::FOOTER_NOTE)
            .size(typography::CAPTION)
            .color(scheme.overlay_text),
    )
    .width(Length::Fill)
    .height(Length::Fixed(layout::FOOTER_HEIGHT))
    .center_x(Length::Fill)
    .center_y(Length::Fixed(layout::FOOTER_HEIGHT))
    .style(styles::container::section(scheme.overlay_background))
    .into()
}

/// Common band layout: centered header block above the section body.
fn section_shell<'a, M: 'a>(
    scheme: &'a ColorScheme,
    background: Color,
    title: &'a str,
    subtitle: &'a str,
    body: Element<'a, M>,
) -> Element<'a, M> {
    let header = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(
            Text::new(title)
                .size(typography::TITLE_LG)
                .color(scheme.text_primary),
        )
        .push(
            Text::new(subtitle)
                .size(typography::BODY_LG)
                .color(scheme.text_secondary),
        );

    let inner = Column::new()
        .spacing(spacing::XXL)
        .align_x(Horizontal::Center)
        .max_width(layout::CONTENT_WIDTH)
        .push(header)
        .push(body);

    Container::new(inner)
        .width(Length::Fill)
        .align_x(Horizontal::Center)
        .padding([layout::SECTION_PADDING, spacing::LG])
        .style(styles::container::section(background))
        .into()
}
