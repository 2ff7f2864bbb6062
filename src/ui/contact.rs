// SPDX-License-Identifier: MPL-2.0
//! Contact form state: email input, validation, and the mock submission.
//!
//! Submission is simulated; no network is involved. While a submission is in
//! flight the submit button is disabled and relabeled, so a second submit
//! cannot double-fire. Validation failure surfaces as an error toast via the
//! [`Event`] the parent receives; the field keeps its contents.

use std::time::Duration;

/// How long the pretend submission takes before reporting success.
pub const SUBMIT_DURATION: Duration = Duration::from_millis(1500);

/// Contact form state.
#[derive(Debug, Default, Clone)]
pub struct State {
    email: String,
    submitting: bool,
}

/// Messages for the contact form.
#[derive(Debug, Clone)]
pub enum Message {
    EmailChanged(String),
    Submit,
    SubmissionFinished,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    None,
    /// The address failed validation; show an error toast.
    Invalid,
    /// A submission started; schedule the completion timer.
    SubmissionStarted,
    /// The submission finished; show a success toast.
    Submitted,
}

impl State {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Process a form message and return the event for the parent.
    pub fn update(&mut self, message: Message) -> Event {
        match message {
            Message::EmailChanged(value) => {
                self.email = value;
                Event::None
            }
            Message::Submit => {
                // The button is disabled while submitting, but a queued press
                // from the same frame must still be a no-op.
                if self.submitting {
                    return Event::None;
                }

                if !is_valid_email(self.email.trim()) {
                    return Event::Invalid;
                }

                self.submitting = true;
                Event::SubmissionStarted
            }
            Message::SubmissionFinished => {
                if !self.submitting {
                    return Event::None;
                }

                self.submitting = false;
                self.email.clear();
                Event::Submitted
            }
        }
    }
}

/// Validates an email address.
///
/// Accepts any whitespace-free string with exactly one `@`, a non-empty local
/// part, and a dot somewhere strictly inside the domain.
#[must_use]
pub fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    if value.matches('@').count() != 1 {
        return false;
    }
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }

    let chars: Vec<char> = domain.chars().collect();
    chars
        .iter()
        .enumerate()
        .any(|(i, &c)| c == '.' && i > 0 && i + 1 < chars.len())
}
