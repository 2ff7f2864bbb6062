// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Two sources feed the update loop from outside the widget tree: raw window
//! events (for the initial layout pass and resizes) and a 16 ms animation
//! tick that only runs while something is actually animating.

use super::Message;
use crate::ui::design_tokens::motion;
use iced::{event, time, window, Subscription};

/// Creates the window event subscription.
///
/// Only geometry events are routed; everything else stays with the widgets.
pub fn create_event_subscription() -> Subscription<Message> {
    event::listen_with(|event, _status, _window_id| match event {
        event::Event::Window(window::Event::Opened { size, .. })
        | event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        _ => None,
    })
}

/// Creates the animation tick subscription, gated on animation activity so an
/// idle page schedules no work.
pub fn create_tick_subscription(animating: bool) -> Subscription<Message> {
    if animating {
        time::every(motion::TICK).map(Message::Tick)
    } else {
        Subscription::none()
    }
}
