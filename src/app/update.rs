// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! All state mutation funnels through these handlers, called from
//! `App::update`. The handlers own the scroll model, run the reveal pass
//! whenever viewport geometry changes, and translate component events into
//! toasts and timers.

use super::view;
use super::Message;
use crate::config::Config;
use crate::page::{layout, SectionId, TargetId};
use crate::reveal::RevealTrigger;
use crate::ui::contact;
use crate::ui::design_tokens::sizing;
use crate::ui::header;
use crate::ui::hero;
use crate::ui::motion::ScrollAnimation;
use crate::ui::notifications::{Notification, Notifier};
use crate::ui::sections::PricingMessage;
use iced::widget::scrollable::AbsoluteOffset;
use iced::widget::{operation, Id};
use iced::Task;
use std::collections::HashMap;
use std::time::Instant;

/// Scroll state of the page scrollable.
#[derive(Debug, Default, Clone)]
pub struct ScrollModel {
    pub offset: f32,
    pub last_offset: f32,
    /// Height of the scrollable's window onto the content.
    pub viewport_height: f32,
    /// True once real viewport geometry has been reported.
    pub loaded: bool,
    /// In-flight smooth scroll towards a section anchor.
    pub animation: Option<ScrollAnimation>,
}

impl ScrollModel {
    /// Records a viewport report from the scrollable.
    pub fn record(&mut self, offset: f32, viewport_height: f32) {
        self.last_offset = self.offset;
        self.offset = offset;
        self.viewport_height = viewport_height;
        self.loaded = true;
    }

    /// Whether the header should use its elevated styling.
    #[must_use]
    pub fn is_scrolled(&self) -> bool {
        self.offset > header::SCROLLED_THRESHOLD
    }
}

/// Context for update operations containing mutable references to app state.
pub struct UpdateContext<'a> {
    pub config: &'a Config,
    pub menu_open: &'a mut bool,
    pub contact: &'a mut contact::State,
    pub reveal: &'a mut RevealTrigger<TargetId>,
    pub revealed_at: &'a mut HashMap<TargetId, Instant>,
    pub notifier: &'a mut Notifier,
    pub scroll: &'a mut ScrollModel,
    pub hovered_plan: &'a mut Option<usize>,
    pub now: &'a mut Instant,
}

pub fn handle_header_message(
    ctx: &mut UpdateContext<'_>,
    message: header::Message,
) -> Task<Message> {
    match header::update(message, ctx.menu_open) {
        header::Event::None => Task::none(),
        header::Event::Navigate(section) => start_scroll_to(ctx, section),
    }
}

pub fn handle_hero_message(ctx: &mut UpdateContext<'_>, message: hero::Message) -> Task<Message> {
    start_scroll_to(ctx, message.target())
}

pub fn handle_pricing_message(
    ctx: &mut UpdateContext<'_>,
    message: PricingMessage,
) -> Task<Message> {
    match message {
        PricingMessage::Entered(index) => *ctx.hovered_plan = Some(index),
        PricingMessage::Exited(index) => {
            // Enter events for a neighboring card may arrive before the exit
            // of the old one; only clear if the exit matches.
            if *ctx.hovered_plan == Some(index) {
                *ctx.hovered_plan = None;
            }
        }
    }
    Task::none()
}

pub fn handle_contact_message(
    ctx: &mut UpdateContext<'_>,
    message: contact::Message,
) -> Task<Message> {
    match ctx.contact.update(message) {
        contact::Event::None => Task::none(),
        contact::Event::Invalid => notify(
            ctx,
            Notification::error(crate::page::content::TOAST_INVALID_EMAIL),
        ),
        contact::Event::SubmissionStarted => Task::perform(
            async {
                tokio::time::sleep(contact::SUBMIT_DURATION).await;
            },
            |()| Message::Contact(contact::Message::SubmissionFinished),
        ),
        contact::Event::Submitted => notify(
            ctx,
            Notification::success(crate::page::content::TOAST_SUBMITTED),
        ),
    }
}

pub fn handle_scroll_changed(
    ctx: &mut UpdateContext<'_>,
    offset: f32,
    viewport_height: f32,
) -> Task<Message> {
    ctx.scroll.record(offset, viewport_height);
    run_reveal_pass(ctx);
    Task::none()
}

pub fn handle_window_resized(ctx: &mut UpdateContext<'_>, size: iced::Size) -> Task<Message> {
    let viewport_height = (size.height - sizing::HEADER_HEIGHT).max(0.0);
    ctx.scroll.record(ctx.scroll.offset, viewport_height);
    run_reveal_pass(ctx);
    Task::none()
}

pub fn handle_tick(ctx: &mut UpdateContext<'_>, instant: Instant) -> Task<Message> {
    *ctx.now = instant;

    if let Some(animation) = ctx.scroll.animation {
        let (offset, done) = animation.offset_at(instant);
        if done {
            ctx.scroll.animation = None;
        }
        return scroll_page_to(offset);
    }

    Task::none()
}

/// Begins a smooth scroll towards a section anchor, or jumps straight there
/// when motion is reduced or the page has no geometry yet.
fn start_scroll_to(ctx: &mut UpdateContext<'_>, section: SectionId) -> Task<Message> {
    let target = layout::section_offset(section)
        .min(layout::max_scroll_offset(ctx.scroll.viewport_height));

    if ctx.config.reduce_motion || !ctx.scroll.loaded {
        ctx.scroll.animation = None;
        return scroll_page_to(target);
    }

    let started_at = Instant::now();
    *ctx.now = started_at;
    ctx.scroll.animation = Some(ScrollAnimation::new(ctx.scroll.offset, target, started_at));
    // The tick subscription picks the animation up on its next frame.
    Task::none()
}

/// Evaluates all still-hidden reveal targets against the current viewport.
pub fn run_reveal_pass(ctx: &mut UpdateContext<'_>) {
    if !ctx.scroll.loaded {
        return;
    }

    let viewport = layout::viewport_in_content(ctx.scroll.offset, ctx.scroll.viewport_height);
    let fired_at = Instant::now();
    for id in ctx.reveal.evaluate(viewport) {
        ctx.revealed_at.entry(id).or_insert(fired_at);
    }
}

fn notify(ctx: &mut UpdateContext<'_>, notification: Notification) -> Task<Message> {
    ctx.notifier.notify(notification).map(Message::Notification)
}

fn scroll_page_to(offset: f32) -> Task<Message> {
    operation::scroll_to(
        Id::new(view::PAGE_SCROLLABLE_ID),
        AbsoluteOffset { x: 0.0, y: offset },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scroll_model_tracks_last_offset() {
        let mut scroll = ScrollModel::default();
        scroll.record(120.0, 600.0);
        scroll.record(340.0, 600.0);

        assert_eq!(scroll.offset, 340.0);
        assert_eq!(scroll.last_offset, 120.0);
        assert!(scroll.loaded);
    }

    #[test]
    fn header_elevates_strictly_above_the_threshold() {
        let mut scroll = ScrollModel::default();

        scroll.record(header::SCROLLED_THRESHOLD, 600.0);
        assert!(!scroll.is_scrolled());

        scroll.record(header::SCROLLED_THRESHOLD + 1.0, 600.0);
        assert!(scroll.is_scrolled());
    }
}
