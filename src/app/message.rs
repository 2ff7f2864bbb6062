// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::contact;
use crate::ui::header;
use crate::ui::hero;
use crate::ui::notifications;
use crate::ui::sections;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Header(header::Message),
    Hero(hero::Message),
    Pricing(sections::PricingMessage),
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable reported new viewport geometry.
    ScrollChanged {
        offset: f32,
        viewport_height: f32,
    },
    /// The window opened or was resized.
    WindowResized(iced::Size),
    /// Animation frame tick while any animation is active.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional config directory override (for settings.toml).
    pub config_dir: Option<String>,
    /// Disable the decorative particle field regardless of config.
    pub no_particles: bool,
}
