// SPDX-License-Identifier: MPL-2.0
//! Toast lifecycle management.
//!
//! The `Notifier` holds at most one toast at a time. A new notification
//! replaces whatever is on screen, so the most recent message always wins.
//! Each phase transition is driven by a delayed task carrying the toast id
//! and the phase it was scheduled from; a timer whose id or phase no longer
//! matches the active toast is stale and gets ignored.

use super::notification::{Notification, NotificationId};
use iced::Task;
use std::time::Duration;

/// Grace period before the entrance transition starts.
pub const ENTRANCE_DELAY: Duration = Duration::from_millis(10);

/// How long the toast stays fully visible.
pub const DISPLAY_DURATION: Duration = Duration::from_millis(4000);

/// Length of the exit transition before the toast is dropped.
pub const EXIT_DURATION: Duration = Duration::from_millis(300);

/// Where the active toast currently is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Staged off-screen, waiting for the entrance to start.
    Pending,
    /// Fully visible.
    Showing,
    /// Exit transition running.
    Hiding,
}

/// Messages for toast state changes.
#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// A phase timer fired for the toast `id`, scheduled while it was in `from`.
    Advance { id: NotificationId, from: Phase },
}

#[derive(Debug)]
struct ActiveToast {
    notification: Notification,
    phase: Phase,
}

/// Manages the single visible toast and its phase timers.
#[derive(Debug, Default)]
pub struct Notifier {
    active: Option<ActiveToast>,
}

impl Notifier {
    /// Creates a new empty notifier.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Displays a notification, replacing the current toast if any.
    ///
    /// Timers scheduled for the replaced toast keep running but no longer
    /// match the active id, so they expire without effect.
    pub fn notify(&mut self, notification: Notification) -> Task<Message> {
        let id = notification.id();
        self.active = Some(ActiveToast {
            notification,
            phase: Phase::Pending,
        });

        schedule(id, Phase::Pending, ENTRANCE_DELAY)
    }

    /// Handles a toast message, returning any follow-up timer.
    pub fn handle_message(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Advance { id, from } => self.advance(id, from),
        }
    }

    fn advance(&mut self, id: NotificationId, from: Phase) -> Task<Message> {
        let Some(active) = self.active.as_mut() else {
            return Task::none();
        };

        // Stale timer: it belongs to a replaced toast or an already
        // completed phase.
        if active.notification.id() != id || active.phase != from {
            return Task::none();
        }

        match from {
            Phase::Pending => {
                active.phase = Phase::Showing;
                schedule(id, Phase::Showing, DISPLAY_DURATION)
            }
            Phase::Showing => {
                active.phase = Phase::Hiding;
                schedule(id, Phase::Hiding, EXIT_DURATION)
            }
            Phase::Hiding => {
                self.active = None;
                Task::none()
            }
        }
    }

    /// Returns the active toast and its phase, if one is on screen.
    pub fn active(&self) -> Option<(&Notification, Phase)> {
        self.active
            .as_ref()
            .map(|toast| (&toast.notification, toast.phase))
    }

    /// Returns whether a toast is currently active in any phase.
    #[must_use]
    pub fn has_active(&self) -> bool {
        self.active.is_some()
    }
}

fn schedule(id: NotificationId, from: Phase, delay: Duration) -> Task<Message> {
    Task::perform(
        async move {
            tokio::time::sleep(delay).await;
        },
        move |()| Message::Advance { id, from },
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn active_phase(notifier: &Notifier) -> Option<Phase> {
        notifier.active().map(|(_, phase)| phase)
    }

    #[test]
    fn new_notifier_has_no_toast() {
        let notifier = Notifier::new();
        assert!(!notifier.has_active());
    }

    #[test]
    fn notify_stages_the_toast_for_entrance() {
        let mut notifier = Notifier::new();
        let _ = notifier.notify(Notification::info("hello"));

        assert_eq!(active_phase(&notifier), Some(Phase::Pending));
    }

    #[test]
    fn entrance_timer_promotes_to_showing() {
        let mut notifier = Notifier::new();
        let _ = notifier.notify(Notification::info("hello"));
        let id = notifier.active().unwrap().0.id();

        let _ = notifier.handle_message(Message::Advance {
            id,
            from: Phase::Pending,
        });

        assert_eq!(active_phase(&notifier), Some(Phase::Showing));
    }

    #[test]
    fn display_timer_starts_the_exit() {
        let mut notifier = Notifier::new();
        let _ = notifier.notify(Notification::success("saved"));
        let id = notifier.active().unwrap().0.id();

        let _ = notifier.handle_message(Message::Advance {
            id,
            from: Phase::Pending,
        });
        let _ = notifier.handle_message(Message::Advance {
            id,
            from: Phase::Showing,
        });

        assert_eq!(active_phase(&notifier), Some(Phase::Hiding));
    }

    #[test]
    fn exit_timer_removes_the_toast() {
        let mut notifier = Notifier::new();
        let _ = notifier.notify(Notification::success("saved"));
        let id = notifier.active().unwrap().0.id();

        for from in [Phase::Pending, Phase::Showing, Phase::Hiding] {
            let _ = notifier.handle_message(Message::Advance { id, from });
        }

        assert!(!notifier.has_active());
    }

    #[test]
    fn a_newer_toast_replaces_the_current_one() {
        let mut notifier = Notifier::new();
        let _ = notifier.notify(Notification::error("first"));
        let first_id = notifier.active().unwrap().0.id();

        let _ = notifier.handle_message(Message::Advance {
            id: first_id,
            from: Phase::Pending,
        });
        assert_eq!(active_phase(&notifier), Some(Phase::Showing));

        let _ = notifier.notify(Notification::success("second"));

        let (active, phase) = notifier.active().unwrap();
        assert_eq!(active.message(), "second");
        assert_eq!(phase, Phase::Pending);
    }

    #[test]
    fn timers_from_a_replaced_toast_are_ignored() {
        let mut notifier = Notifier::new();
        let _ = notifier.notify(Notification::error("first"));
        let first_id = notifier.active().unwrap().0.id();

        let _ = notifier.notify(Notification::success("second"));

        // The first toast's display timer fires after the replacement.
        let _ = notifier.handle_message(Message::Advance {
            id: first_id,
            from: Phase::Showing,
        });

        let (active, phase) = notifier.active().unwrap();
        assert_eq!(active.message(), "second");
        assert_eq!(phase, Phase::Pending);
    }

    #[test]
    fn a_timer_for_a_completed_phase_is_ignored() {
        let mut notifier = Notifier::new();
        let _ = notifier.notify(Notification::info("hello"));
        let id = notifier.active().unwrap().0.id();

        // Fires with the wrong phase: the toast is still pending.
        let _ = notifier.handle_message(Message::Advance {
            id,
            from: Phase::Showing,
        });

        assert_eq!(active_phase(&notifier), Some(Phase::Pending));
    }

    #[test]
    fn advance_without_any_toast_is_a_no_op() {
        let mut notifier = Notifier::new();
        let orphan = Notification::info("gone").id();

        let _ = notifier.handle_message(Message::Advance {
            id: orphan,
            from: Phase::Hiding,
        });

        assert!(!notifier.has_active());
    }
}
