// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Assembles the fixed header, the page scrollable with every section, and
//! the toast overlay stacked on top.

use super::update::ScrollModel;
use super::Message;
use crate::page::TargetId;
use crate::reveal::RevealTrigger;
use crate::ui::contact;
use crate::ui::header;
use crate::ui::hero;
use crate::ui::notifications::{Notifier, Toast};
use crate::ui::sections;
use crate::ui::styles;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::particle_field::Particle;
use iced::widget::{Column, Container, Id, Scrollable, Stack};
use iced::{Element, Length};
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Widget id of the page scrollable, used by programmatic scroll tasks.
pub const PAGE_SCROLLABLE_ID: &str = "showcase-page";

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub scheme: &'a ColorScheme,
    pub menu_open: bool,
    pub contact: &'a contact::State,
    pub reveal: &'a RevealTrigger<TargetId>,
    pub revealed_at: &'a HashMap<TargetId, Instant>,
    pub notifier: &'a Notifier,
    pub scroll: &'a ScrollModel,
    pub hovered_plan: Option<usize>,
    pub particles: &'a [Particle],
    /// Time since startup, driving the particle cycles.
    pub elapsed: Duration,
    pub now: Instant,
    pub reduce_motion: bool,
}

/// Renders the full page.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let header_view = header::view(header::ViewContext {
        scheme: ctx.scheme,
        menu_open: ctx.menu_open,
        scrolled: ctx.scroll.is_scrolled(),
    })
    .map(Message::Header);

    let page = Column::new()
        .push(header_view)
        .push(page_scrollable(&ctx))
        .width(Length::Fill)
        .height(Length::Fill);

    let overlay = Toast::view_overlay(ctx.notifier, ctx.scheme);

    Stack::new().push(page).push(overlay).into()
}

fn page_scrollable<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let hero_view = hero::view(hero::ViewContext {
        scheme: ctx.scheme,
        scroll_offset: ctx.scroll.offset,
        particles: ctx.particles,
        elapsed: ctx.elapsed,
    })
    .map(Message::Hero);

    let sections_ctx = sections::ViewContext {
        scheme: ctx.scheme,
        reveal: ctx.reveal,
        revealed_at: ctx.revealed_at,
        now: ctx.now,
        reduce_motion: ctx.reduce_motion,
        hovered_plan: ctx.hovered_plan,
    };

    let content = Column::new()
        .push(hero_view)
        .push(sections::features(&sections_ctx))
        .push(sections::how_it_works(&sections_ctx))
        .push(sections::pricing(&sections_ctx).map(Message::Pricing))
        .push(sections::contact_section(ctx.scheme, ctx.contact).map(Message::Contact))
        .push(sections::footer(ctx.scheme))
        .width(Length::Fill);

    let scrollable = Scrollable::new(
        Container::new(content)
            .width(Length::Fill)
            .style(styles::container::section(ctx.scheme.surface_primary)),
    )
    .id(Id::new(PAGE_SCROLLABLE_ID))
    .width(Length::Fill)
    .height(Length::Fill)
    .on_scroll(|viewport| Message::ScrollChanged {
        offset: viewport.absolute_offset().y,
        viewport_height: viewport.bounds().height,
    });

    scrollable.into()
}
