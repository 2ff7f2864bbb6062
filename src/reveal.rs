// SPDX-License-Identifier: MPL-2.0
//! Scroll-driven reveal triggering.
//!
//! `RevealTrigger` observes a set of page elements (given as rectangles in
//! page/content coordinates) and flags each one as visible exactly once, the
//! first time enough of it intersects the viewport. The flag is monotonic:
//! once an element has been revealed it stays revealed and is no longer
//! evaluated. Views map the flag to entrance styling.

use iced::Rectangle;
use std::collections::HashMap;
use std::hash::Hash;

/// Fraction of an element's area that must intersect the viewport to trigger.
pub const DEFAULT_THRESHOLD: f32 = 0.1;

/// Inset trimmed from the bottom edge of the viewport before evaluating, so
/// elements only trigger once they are meaningfully on screen.
pub const DEFAULT_BOTTOM_MARGIN: f32 = 50.0;

#[derive(Debug, Clone)]
struct Target {
    bounds: Rectangle,
    visible: bool,
}

/// Tracks observed elements and their one-shot visibility flags.
#[derive(Debug, Clone)]
pub struct RevealTrigger<Id> {
    threshold: f32,
    bottom_margin: f32,
    targets: HashMap<Id, Target>,
}

impl<Id> RevealTrigger<Id>
where
    Id: Copy + Eq + Hash,
{
    /// Creates a trigger with the given threshold (0.0..=1.0) and bottom
    /// viewport inset in page coordinates.
    #[must_use]
    pub fn new(threshold: f32, bottom_margin: f32) -> Self {
        Self {
            threshold,
            bottom_margin,
            targets: HashMap::new(),
        }
    }

    /// Begins observing an element. Re-registering an existing id is a no-op,
    /// so an already-triggered element can never be re-armed.
    pub fn register(&mut self, id: Id, bounds: Rectangle) {
        self.targets.entry(id).or_insert(Target {
            bounds,
            visible: false,
        });
    }

    /// Returns whether the element has been revealed. Unknown ids read as
    /// not visible.
    #[must_use]
    pub fn is_visible(&self, id: Id) -> bool {
        self.targets.get(&id).is_some_and(|target| target.visible)
    }

    /// Number of observed elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Whether any elements are observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Evaluates every still-hidden element against the viewport and flips
    /// the ones whose intersection ratio reaches the threshold. Returns the
    /// ids revealed by this pass (unordered). Elements already revealed are
    /// skipped entirely.
    pub fn evaluate(&mut self, viewport: Rectangle) -> Vec<Id> {
        let effective = self.effective_viewport(viewport);
        let mut revealed = Vec::new();

        for (id, target) in &mut self.targets {
            if target.visible {
                continue;
            }
            if intersection_ratio(target.bounds, effective) >= self.threshold {
                target.visible = true;
                revealed.push(*id);
            }
        }

        revealed
    }

    fn effective_viewport(&self, viewport: Rectangle) -> Rectangle {
        Rectangle {
            height: (viewport.height - self.bottom_margin).max(0.0),
            ..viewport
        }
    }
}

impl<Id> Default for RevealTrigger<Id>
where
    Id: Copy + Eq + Hash,
{
    fn default() -> Self {
        Self::new(DEFAULT_THRESHOLD, DEFAULT_BOTTOM_MARGIN)
    }
}

/// Fraction of `bounds` covered by `viewport`. Zero-area bounds never
/// intersect.
fn intersection_ratio(bounds: Rectangle, viewport: Rectangle) -> f32 {
    let area = bounds.width * bounds.height;
    if area <= 0.0 {
        return 0.0;
    }

    let left = bounds.x.max(viewport.x);
    let right = (bounds.x + bounds.width).min(viewport.x + viewport.width);
    let top = bounds.y.max(viewport.y);
    let bottom = (bounds.y + bounds.height).min(viewport.y + viewport.height);

    let overlap_w = (right - left).max(0.0);
    let overlap_h = (bottom - top).max(0.0);

    (overlap_w * overlap_h) / area
}
