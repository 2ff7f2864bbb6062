// SPDX-License-Identifier: MPL-2.0
//! Toast notification system for user feedback.
//!
//! This module provides a non-intrusive notification system following
//! toast/snackbar UX patterns. A single toast appears temporarily to confirm
//! actions (form submission, validation errors) without blocking interaction.
//!
//! # Components
//!
//! - [`notification`] - Core `Notification` struct with severity levels
//! - [`notifier`] - `Notifier` driving the entrance/display/exit lifecycle
//! - [`toast`] - Toast widget component for rendering the active notification
//!
//! # Design Considerations
//!
//! - Single slot: a new notification replaces the one on screen
//! - Lifecycle: 10ms entrance delay, 4s display, 300ms exit
//! - Position: bottom-right corner
//! - Stale timers from replaced toasts are detected and ignored

mod notification;
mod notifier;
mod toast;

pub use notification::{Notification, NotificationId, Severity};
pub use notifier::{Message as NotificationMessage, Notifier, Phase};
pub use toast::Toast;
