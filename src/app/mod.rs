// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration for the showcase page.
//!
//! The `App` struct is the single controller owning all process-wide state:
//! the reveal trigger, the toast notifier, header and contact form state, the
//! scroll model, and the animation clocks. Every message funnels through
//! `App::update`, so the single-slot toast invariant and the monotonic reveal
//! flags are enforced in one place.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};
pub use update::ScrollModel;

use crate::config::{self, Config};
use crate::page::content;
use crate::page::{layout, TargetId};
use crate::reveal::RevealTrigger;
use crate::ui::contact;
use crate::ui::design_tokens::motion;
use crate::ui::notifications::Notifier;
use crate::ui::theming::ColorScheme;
use crate::ui::widgets::particle_field::{self, Particle, PARTICLE_COUNT};
use iced::{window, Element, Subscription, Task, Theme};
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::time::Instant;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1280;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 960;
pub const MIN_WINDOW_HEIGHT: u32 = 640;

/// Root Iced application state bridging the page components and the
/// persisted preferences.
pub struct App {
    config: Config,
    scheme: ColorScheme,
    menu_open: bool,
    contact: contact::State,
    reveal: RevealTrigger<TargetId>,
    /// When each reveal fired; drives the entrance animations.
    revealed_at: HashMap<TargetId, Instant>,
    notifier: Notifier,
    scroll: ScrollModel,
    hovered_plan: Option<usize>,
    /// Particle trajectories; empty when particles are disabled.
    particles: Vec<Particle>,
    started_at: Instant,
    /// Animation clock, advanced by tick messages.
    now: Instant,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("loaded", &self.scroll.loaded)
            .field("revealed", &self.revealed_at.len())
            .field("toast_active", &self.notifier.has_active())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl Default for App {
    fn default() -> Self {
        let started_at = Instant::now();
        let mut reveal = RevealTrigger::default();
        for (id, bounds) in layout::reveal_targets() {
            reveal.register(id, bounds);
        }

        Self {
            config: Config::default(),
            scheme: ColorScheme::light(),
            menu_open: false,
            contact: contact::State::new(),
            reveal,
            revealed_at: HashMap::new(),
            notifier: Notifier::new(),
            scroll: ScrollModel::default(),
            hovered_plan: None,
            particles: Vec::new(),
            started_at,
            now: started_at,
        }
    }
}

impl App {
    /// Initializes application state from CLI flags and the settings file.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = match flags.config_dir.as_deref() {
            Some(dir) => {
                config::load_from_path(&Path::new(dir).join(config::CONFIG_FILE))
                    .unwrap_or_default()
            }
            None => config::load().unwrap_or_default(),
        };

        let mut app = App {
            scheme: ColorScheme::for_mode(config.theme_mode),
            ..Self::default()
        };

        if config.show_particles && !flags.no_particles {
            app.particles = particle_field::spawn(PARTICLE_COUNT);
        }
        app.config = config;

        (app, Task::none())
    }

    fn title(&self) -> String {
        content::WINDOW_TITLE.to_string()
    }

    fn theme(&self) -> Theme {
        if self.config.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Whether anything on screen is currently animating, gating the tick
    /// subscription.
    fn has_active_animations(&self) -> bool {
        if self.scroll.animation.is_some() {
            return true;
        }
        // Particles animate continuously once the page has geometry.
        if !self.particles.is_empty() && self.scroll.loaded {
            return true;
        }
        // Entrance animations, stagger included.
        if !self.config.reduce_motion {
            let gross = motion::ENTRANCE + motion::STAGGER_STEP * layout::GRID_COLUMNS as u32 * 2;
            if self
                .revealed_at
                .values()
                .any(|fired_at| self.now.saturating_duration_since(*fired_at) < gross)
            {
                return true;
            }
        }
        false
    }

    fn subscription(&self) -> Subscription<Message> {
        let event_sub = subscription::create_event_subscription();
        let tick_sub = subscription::create_tick_subscription(self.has_active_animations());

        Subscription::batch([event_sub, tick_sub])
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            config: &self.config,
            menu_open: &mut self.menu_open,
            contact: &mut self.contact,
            reveal: &mut self.reveal,
            revealed_at: &mut self.revealed_at,
            notifier: &mut self.notifier,
            scroll: &mut self.scroll,
            hovered_plan: &mut self.hovered_plan,
            now: &mut self.now,
        };

        match message {
            Message::Header(header_message) => {
                update::handle_header_message(&mut ctx, header_message)
            }
            Message::Hero(hero_message) => update::handle_hero_message(&mut ctx, hero_message),
            Message::Pricing(pricing_message) => {
                update::handle_pricing_message(&mut ctx, pricing_message)
            }
            Message::Contact(contact_message) => {
                update::handle_contact_message(&mut ctx, contact_message)
            }
            Message::Notification(notification_message) => self
                .notifier
                .handle_message(notification_message)
                .map(Message::Notification),
            Message::ScrollChanged {
                offset,
                viewport_height,
            } => update::handle_scroll_changed(&mut ctx, offset, viewport_height),
            Message::WindowResized(size) => update::handle_window_resized(&mut ctx, size),
            Message::Tick(instant) => update::handle_tick(&mut ctx, instant),
        }
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            scheme: &self.scheme,
            menu_open: self.menu_open,
            contact: &self.contact,
            reveal: &self.reveal,
            revealed_at: &self.revealed_at,
            notifier: &self.notifier,
            scroll: &self.scroll,
            hovered_plan: self.hovered_plan,
            particles: &self.particles,
            elapsed: self.now.saturating_duration_since(self.started_at),
            now: self.now,
            reduce_motion: self.config.reduce_motion,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::SectionId;
    use crate::ui::header;
    use crate::ui::notifications::{Phase, Severity};

    fn booted_app() -> App {
        let mut app = App::default();
        // Report initial geometry the way the window subscription would.
        let _ = app.update(Message::WindowResized(iced::Size::new(1280.0, 800.0)));
        app
    }

    #[test]
    fn first_geometry_report_marks_the_page_loaded() {
        let mut app = App::default();
        assert!(!app.scroll.loaded);

        let _ = app.update(Message::WindowResized(iced::Size::new(1280.0, 800.0)));

        assert!(app.scroll.loaded);
    }

    #[test]
    fn initial_pass_reveals_nothing_above_the_fold() {
        let app = booted_app();

        // The hero fills the initial viewport; every card is below the fold.
        assert!(app.revealed_at.is_empty());
    }

    #[test]
    fn scrolling_to_the_features_reveals_their_cards() {
        let mut app = booted_app();

        let _ = app.update(Message::ScrollChanged {
            offset: layout::section_offset(SectionId::Features),
            viewport_height: 736.0,
        });

        assert!(app.reveal.is_visible(TargetId::Feature(0)));
        assert!(app.revealed_at.contains_key(&TargetId::Feature(0)));
        assert!(!app.reveal.is_visible(TargetId::Pricing(0)));
    }

    #[test]
    fn scrolling_back_up_does_not_re_reveal() {
        let mut app = booted_app();

        let _ = app.update(Message::ScrollChanged {
            offset: layout::section_offset(SectionId::Features),
            viewport_height: 736.0,
        });
        let fired_at = app.revealed_at[&TargetId::Feature(0)];

        let _ = app.update(Message::ScrollChanged {
            offset: 0.0,
            viewport_height: 736.0,
        });
        let _ = app.update(Message::ScrollChanged {
            offset: layout::section_offset(SectionId::Features),
            viewport_height: 736.0,
        });

        assert_eq!(app.revealed_at[&TargetId::Feature(0)], fired_at);
    }

    #[test]
    fn invalid_email_submit_raises_an_error_toast() {
        let mut app = booted_app();

        let _ = app.update(Message::Contact(contact::Message::EmailChanged(
            "nope".into(),
        )));
        let _ = app.update(Message::Contact(contact::Message::Submit));

        let (notification, phase) = app.notifier.active().expect("toast should be staged");
        assert_eq!(notification.severity(), Severity::Error);
        assert_eq!(notification.message(), content::TOAST_INVALID_EMAIL);
        assert_eq!(phase, Phase::Pending);
        assert!(!app.contact.is_submitting());
    }

    #[test]
    fn successful_submission_flow_ends_in_a_success_toast() {
        let mut app = booted_app();

        let _ = app.update(Message::Contact(contact::Message::EmailChanged(
            "user@example.com".into(),
        )));
        let _ = app.update(Message::Contact(contact::Message::Submit));
        assert!(app.contact.is_submitting());

        let _ = app.update(Message::Contact(contact::Message::SubmissionFinished));

        assert!(!app.contact.is_submitting());
        assert_eq!(app.contact.email(), "");
        let (notification, _) = app.notifier.active().expect("toast should be staged");
        assert_eq!(notification.severity(), Severity::Success);
    }

    #[test]
    fn a_second_submit_error_replaces_the_first_toast() {
        let mut app = booted_app();

        let _ = app.update(Message::Contact(contact::Message::EmailChanged(
            "first".into(),
        )));
        let _ = app.update(Message::Contact(contact::Message::Submit));
        let first_id = app.notifier.active().expect("first toast").0.id();

        let _ = app.update(Message::Contact(contact::Message::Submit));
        let second_id = app.notifier.active().expect("second toast").0.id();

        assert_ne!(first_id, second_id);
    }

    #[test]
    fn navigation_starts_a_smooth_scroll_animation() {
        let mut app = booted_app();

        let _ = app.update(Message::Header(header::Message::NavigateTo(
            SectionId::Pricing,
        )));

        let animation = app.scroll.animation.expect("animation should be armed");
        assert_eq!(
            animation.target(),
            layout::section_offset(SectionId::Pricing)
                .min(layout::max_scroll_offset(app.scroll.viewport_height))
        );
        assert!(app.has_active_animations());
    }

    #[test]
    fn reduced_motion_navigation_jumps_without_animating() {
        let mut app = booted_app();
        app.config.reduce_motion = true;
        app.particles.clear();

        let _ = app.update(Message::Header(header::Message::NavigateTo(
            SectionId::Contact,
        )));

        assert!(app.scroll.animation.is_none());
    }

    #[test]
    fn tick_clears_a_finished_scroll_animation() {
        let mut app = booted_app();
        let _ = app.update(Message::Header(header::Message::NavigateTo(
            SectionId::Features,
        )));
        assert!(app.scroll.animation.is_some());

        let _ = app.update(Message::Tick(
            Instant::now() + std::time::Duration::from_secs(5),
        ));

        assert!(app.scroll.animation.is_none());
    }

    #[test]
    fn hamburger_link_closes_the_menu_and_navigates() {
        let mut app = booted_app();
        let _ = app.update(Message::Header(header::Message::ToggleMenu));
        assert!(app.menu_open);

        let _ = app.update(Message::Header(header::Message::NavigateTo(
            SectionId::Contact,
        )));

        assert!(!app.menu_open);
        assert!(app.scroll.animation.is_some());
    }

    #[test]
    fn pricing_hover_tracks_enter_and_exit_order() {
        let mut app = booted_app();

        let _ = app.update(Message::Pricing(sections_msg_entered(1)));
        assert_eq!(app.hovered_plan, Some(1));

        // Enter the neighbor before the stale exit arrives.
        let _ = app.update(Message::Pricing(sections_msg_entered(2)));
        let _ = app.update(Message::Pricing(sections_msg_exited(1)));
        assert_eq!(app.hovered_plan, Some(2));

        let _ = app.update(Message::Pricing(sections_msg_exited(2)));
        assert_eq!(app.hovered_plan, None);
    }

    #[test]
    fn idle_page_without_particles_schedules_no_ticks() {
        let mut app = App::default();
        assert!(!app.has_active_animations());

        let _ = app.update(Message::WindowResized(iced::Size::new(1280.0, 800.0)));
        assert!(!app.has_active_animations());
    }

    #[test]
    fn particles_keep_the_tick_running_once_loaded() {
        let mut app = App::default();
        app.particles = particle_field::spawn(PARTICLE_COUNT);
        assert!(!app.has_active_animations());

        let _ = app.update(Message::WindowResized(iced::Size::new(1280.0, 800.0)));
        assert!(app.has_active_animations());
    }

    fn sections_msg_entered(index: usize) -> crate::ui::sections::PricingMessage {
        crate::ui::sections::PricingMessage::Entered(index)
    }

    fn sections_msg_exited(index: usize) -> crate::ui::sections::PricingMessage {
        crate::ui::sections::PricingMessage::Exited(index)
    }
}
