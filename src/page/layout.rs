// SPDX-License-Identifier: MPL-2.0
//! Fixed geometry model of the page in content coordinates.
//!
//! The scrollable renders sections with the same metrics defined here, so
//! reveal evaluation can run against these rectangles instead of querying
//! widget layout. y = 0 is the top of the hero; x spans the content column.

use iced::Rectangle;

use super::content;
use super::{SectionId, TargetId};

pub const CONTENT_WIDTH: f32 = 960.0;
pub const GRID_COLUMNS: usize = 3;
pub const GRID_GAP: f32 = 24.0;
pub const CARD_WIDTH: f32 = (CONTENT_WIDTH - 2.0 * GRID_GAP) / 3.0;

pub const HERO_HEIGHT: f32 = 560.0;
pub const FEATURE_CARD_HEIGHT: f32 = 220.0;
pub const STEP_CARD_HEIGHT: f32 = 200.0;
pub const PLAN_CARD_HEIGHT: f32 = 420.0;
pub const CONTACT_FORM_HEIGHT: f32 = 120.0;
pub const FOOTER_HEIGHT: f32 = 120.0;

/// Vertical padding above and below each section body.
pub const SECTION_PADDING: f32 = 96.0;
/// Title, subtitle, and the gap separating them from the section body.
pub const SECTION_HEADER_BLOCK: f32 = 144.0;

pub fn section_height(section: SectionId) -> f32 {
    match section {
        SectionId::Hero => HERO_HEIGHT,
        SectionId::Features => {
            section_block(2.0 * FEATURE_CARD_HEIGHT + GRID_GAP)
        }
        SectionId::HowItWorks => section_block(STEP_CARD_HEIGHT),
        SectionId::Pricing => section_block(PLAN_CARD_HEIGHT),
        SectionId::Contact => section_block(CONTACT_FORM_HEIGHT),
    }
}

fn section_block(body_height: f32) -> f32 {
    SECTION_PADDING + SECTION_HEADER_BLOCK + body_height + SECTION_PADDING
}

/// Distance from the top of the content to the top of `section`.
pub fn section_offset(section: SectionId) -> f32 {
    SectionId::ALL
        .iter()
        .take_while(|candidate| **candidate != section)
        .map(|candidate| section_height(*candidate))
        .sum()
}

pub fn section_bounds(section: SectionId) -> Rectangle {
    Rectangle {
        x: 0.0,
        y: section_offset(section),
        width: CONTENT_WIDTH,
        height: section_height(section),
    }
}

/// Total scrollable content height, footer included.
pub fn page_height() -> f32 {
    SectionId::ALL
        .iter()
        .map(|section| section_height(*section))
        .sum::<f32>()
        + FOOTER_HEIGHT
}

/// Largest scroll offset the viewport can reach without overshooting the page.
pub fn max_scroll_offset(viewport_height: f32) -> f32 {
    (page_height() - viewport_height).max(0.0)
}

/// The window the viewport cuts out of the content at a given scroll offset.
pub fn viewport_in_content(offset_y: f32, viewport_height: f32) -> Rectangle {
    Rectangle {
        x: 0.0,
        y: offset_y,
        width: CONTENT_WIDTH,
        height: viewport_height,
    }
}

/// Every card that participates in the scroll reveal, with its bounds.
pub fn reveal_targets() -> Vec<(TargetId, Rectangle)> {
    let mut targets =
        Vec::with_capacity(content::FEATURES.len() + content::STEPS.len() + content::PLANS.len());

    let features_top = grid_top(SectionId::Features);
    for index in 0..content::FEATURES.len() {
        let row = index / GRID_COLUMNS;
        let column = index % GRID_COLUMNS;
        let y = features_top + row as f32 * (FEATURE_CARD_HEIGHT + GRID_GAP);
        targets.push((TargetId::Feature(index), card_bounds(column, y, FEATURE_CARD_HEIGHT)));
    }

    let steps_top = grid_top(SectionId::HowItWorks);
    for index in 0..content::STEPS.len() {
        targets.push((TargetId::Step(index), card_bounds(index, steps_top, STEP_CARD_HEIGHT)));
    }

    let plans_top = grid_top(SectionId::Pricing);
    for index in 0..content::PLANS.len() {
        targets.push((TargetId::Pricing(index), card_bounds(index, plans_top, PLAN_CARD_HEIGHT)));
    }

    targets
}

fn grid_top(section: SectionId) -> f32 {
    section_offset(section) + SECTION_PADDING + SECTION_HEADER_BLOCK
}

fn card_bounds(column: usize, y: f32, height: f32) -> Rectangle {
    Rectangle {
        x: column as f32 * (CARD_WIDTH + GRID_GAP),
        y,
        width: CARD_WIDTH,
        height,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sections_tile_the_page_without_gaps() {
        let mut expected_offset = 0.0;
        for section in SectionId::ALL {
            assert_eq!(section_offset(section), expected_offset);
            expected_offset += section_height(section);
        }
        assert_eq!(page_height(), expected_offset + FOOTER_HEIGHT);
    }

    #[test]
    fn reveal_targets_cover_every_card() {
        let targets = reveal_targets();
        assert_eq!(targets.len(), 12);

        for index in 0..content::FEATURES.len() {
            assert!(targets.iter().any(|(id, _)| *id == TargetId::Feature(index)));
        }
        for index in 0..content::STEPS.len() {
            assert!(targets.iter().any(|(id, _)| *id == TargetId::Step(index)));
        }
        for index in 0..content::PLANS.len() {
            assert!(targets.iter().any(|(id, _)| *id == TargetId::Pricing(index)));
        }
    }

    #[test]
    fn feature_grid_wraps_into_two_rows() {
        let targets = reveal_targets();
        let bounds_of = |wanted: TargetId| {
            targets
                .iter()
                .find(|(id, _)| *id == wanted)
                .map(|(_, bounds)| *bounds)
                .unwrap()
        };

        let first = bounds_of(TargetId::Feature(0));
        let third = bounds_of(TargetId::Feature(2));
        let fourth = bounds_of(TargetId::Feature(3));

        assert_eq!(first.y, third.y);
        assert!(fourth.y > first.y);
        assert_eq!(first.x, fourth.x);
    }

    #[test]
    fn targets_stay_inside_their_section() {
        for (id, bounds) in reveal_targets() {
            let section = match id {
                TargetId::Feature(_) => SectionId::Features,
                TargetId::Step(_) => SectionId::HowItWorks,
                TargetId::Pricing(_) => SectionId::Pricing,
            };
            let container = section_bounds(section);

            assert!(bounds.y >= container.y);
            assert!(bounds.y + bounds.height <= container.y + container.height);
            assert!(bounds.x >= 0.0);
            assert!(bounds.x + bounds.width <= CONTENT_WIDTH + 0.5);
        }
    }

    #[test]
    fn grid_spans_the_full_content_width() {
        let last_column = card_bounds(GRID_COLUMNS - 1, 0.0, 1.0);
        let right_edge = last_column.x + last_column.width;
        assert!((right_edge - CONTENT_WIDTH).abs() < 0.5);
    }

    #[test]
    fn max_scroll_offset_is_clamped_at_zero() {
        assert_eq!(max_scroll_offset(page_height() + 500.0), 0.0);
        assert!(max_scroll_offset(600.0) > 0.0);
    }

    #[test]
    fn viewport_tracks_the_scroll_offset() {
        let viewport = viewport_in_content(250.0, 600.0);
        assert_eq!(viewport.y, 250.0);
        assert_eq!(viewport.height, 600.0);
        assert_eq!(viewport.width, CONTENT_WIDTH);
    }
}
