// SPDX-License-Identifier: MPL-2.0
//! Time-based animation math shared by entrances and smooth scrolling.

use crate::ui::design_tokens::motion;
use std::time::{Duration, Instant};

/// Cubic ease-out. Fast start, gentle landing.
pub fn ease_out_cubic(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    1.0 - (1.0 - t).powi(3)
}

/// Linear progress through `duration` after an initial `delay`.
///
/// Returns 0.0 while the delay runs, 1.0 once the duration has fully elapsed.
pub fn clamped_progress(elapsed: Duration, delay: Duration, duration: Duration) -> f32 {
    if elapsed <= delay {
        return 0.0;
    }
    let active = elapsed - delay;
    if active >= duration || duration.is_zero() {
        return 1.0;
    }
    active.as_secs_f32() / duration.as_secs_f32()
}

/// Eased entrance progress for a revealed card.
///
/// Cards in the same grid row start `STAGGER_STEP` apart, indexed from the
/// moment the reveal fired.
pub fn entrance_progress(revealed_at: Instant, now: Instant, stagger_index: usize) -> f32 {
    let elapsed = now.saturating_duration_since(revealed_at);
    let delay = motion::STAGGER_STEP * stagger_index as u32;
    ease_out_cubic(clamped_progress(elapsed, delay, motion::ENTRANCE))
}

/// An in-flight programmatic scroll towards a section anchor.
#[derive(Debug, Clone, Copy)]
pub struct ScrollAnimation {
    from: f32,
    to: f32,
    started_at: Instant,
    duration: Duration,
}

impl ScrollAnimation {
    pub fn new(from: f32, to: f32, started_at: Instant) -> Self {
        Self {
            from,
            to,
            started_at,
            duration: motion::SCROLL,
        }
    }

    pub fn target(&self) -> f32 {
        self.to
    }

    /// The offset to apply at `now`, and whether the animation has finished.
    ///
    /// The final frame always lands exactly on the target offset.
    pub fn offset_at(&self, now: Instant) -> (f32, bool) {
        let elapsed = now.saturating_duration_since(self.started_at);
        if elapsed >= self.duration {
            return (self.to, true);
        }

        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        let eased = ease_out_cubic(t);
        (self.from + (self.to - self.from) * eased, false)
    }
}
