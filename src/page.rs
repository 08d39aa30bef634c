// SPDX-License-Identifier: MPL-2.0
//! Static layout of the landing page and per-section reveal state.
//!
//! The page is a single scrollable column with fixed-height regions, so the
//! vertical span of every observable target (sections, the header sentinel,
//! each feature illustration) is known at startup. The spans computed here
//! are the single source of truth for both rendering and the viewport
//! intersection reporter.

use crate::ui::design_tokens::page as tokens;

/// Number of feature rows (each with one lazily loaded illustration).
pub const FEATURE_COUNT: usize = 4;

/// Landing sections that reveal on first visibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SectionId {
    Features,
    Operations,
    Testimonials,
    SignUp,
}

impl SectionId {
    pub const ALL: [SectionId; 4] = [
        SectionId::Features,
        SectionId::Operations,
        SectionId::Testimonials,
        SectionId::SignUp,
    ];

    fn ordinal(self) -> usize {
        match self {
            SectionId::Features => 0,
            SectionId::Operations => 1,
            SectionId::Testimonials => 2,
            SectionId::SignUp => 3,
        }
    }

    pub fn height(self) -> f32 {
        match self {
            SectionId::Features => tokens::FEATURES_HEIGHT,
            SectionId::Operations => tokens::OPERATIONS_HEIGHT,
            SectionId::Testimonials => tokens::TESTIMONIALS_HEIGHT,
            SectionId::SignUp => tokens::SIGNUP_HEIGHT,
        }
    }
}

/// Vertical extent in page (scroll content) coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Span {
    pub top: f32,
    pub height: f32,
}

impl Span {
    #[must_use]
    pub fn bottom(self) -> f32 {
        self.top + self.height
    }
}

/// Span of the hero/header area, observed as the sticky-nav sentinel.
#[must_use]
pub fn hero_span() -> Span {
    Span {
        top: 0.0,
        height: tokens::HERO_HEIGHT,
    }
}

/// Span of a landing section.
#[must_use]
pub fn section_span(id: SectionId) -> Span {
    let mut top = tokens::HERO_HEIGHT;
    for other in SectionId::ALL {
        if other.ordinal() < id.ordinal() {
            top += other.height();
        }
    }
    Span {
        top,
        height: id.height(),
    }
}

/// Span of the illustration inside feature row `index`.
///
/// Rows stack below the features heading; the illustration is vertically
/// centered within its row.
#[must_use]
pub fn feature_image_span(index: usize) -> Span {
    debug_assert!(index < FEATURE_COUNT);
    let section = section_span(SectionId::Features);
    let row_top =
        section.top + tokens::SECTION_HEADER_HEIGHT + index as f32 * tokens::FEATURE_ROW_HEIGHT;
    let inset = (tokens::FEATURE_ROW_HEIGHT - tokens::FEATURE_IMAGE_HEIGHT) / 2.0;
    Span {
        top: row_top + inset,
        height: tokens::FEATURE_IMAGE_HEIGHT,
    }
}

/// Total height of the scrollable content.
#[must_use]
pub fn content_height() -> f32 {
    let mut height = tokens::HERO_HEIGHT + tokens::FOOTER_HEIGHT;
    for id in SectionId::ALL {
        height += id.height();
    }
    height
}

/// Scroll offset that brings a section's top to the top of the viewport,
/// clamped to the maximum reachable offset.
#[must_use]
pub fn scroll_target(id: SectionId, viewport_height: f32) -> f32 {
    let max = (content_height() - viewport_height).max(0.0);
    section_span(id).top.min(max)
}

/// Tracks which sections have been revealed. Reveals are permanent for the
/// lifetime of the page.
#[derive(Debug, Clone, Default)]
pub struct RevealState {
    revealed: [bool; SectionId::ALL.len()],
}

impl RevealState {
    #[must_use]
    pub fn is_revealed(&self, id: SectionId) -> bool {
        self.revealed[id.ordinal()]
    }

    pub fn reveal(&mut self, id: SectionId) {
        self.revealed[id.ordinal()] = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn sections_tile_the_space_between_hero_and_footer() {
        let mut expected_top = tokens::HERO_HEIGHT;
        for id in SectionId::ALL {
            let span = section_span(id);
            assert_abs_diff_eq!(span.top, expected_top);
            expected_top = span.bottom();
        }
        assert_abs_diff_eq!(expected_top + tokens::FOOTER_HEIGHT, content_height());
    }

    #[test]
    fn feature_images_sit_inside_the_features_section() {
        let section = section_span(SectionId::Features);
        for index in 0..FEATURE_COUNT {
            let image = feature_image_span(index);
            assert!(image.top >= section.top);
            assert!(image.bottom() <= section.bottom());
        }
    }

    #[test]
    fn feature_image_spans_do_not_overlap() {
        for index in 1..FEATURE_COUNT {
            let previous = feature_image_span(index - 1);
            let current = feature_image_span(index);
            assert!(previous.bottom() <= current.top);
        }
    }

    #[test]
    fn scroll_target_is_clamped_to_content() {
        let viewport_height = 700.0;
        let max = content_height() - viewport_height;
        for id in SectionId::ALL {
            let target = scroll_target(id, viewport_height);
            assert!(target <= max);
            assert!(target >= 0.0);
        }
    }

    #[test]
    fn scroll_target_reaches_section_top_when_unclamped() {
        let target = scroll_target(SectionId::Features, 700.0);
        assert_abs_diff_eq!(target, tokens::HERO_HEIGHT);
    }

    #[test]
    fn reveal_state_is_permanent_and_per_section() {
        let mut state = RevealState::default();
        assert!(!state.is_revealed(SectionId::Operations));

        state.reveal(SectionId::Operations);
        assert!(state.is_revealed(SectionId::Operations));
        assert!(!state.is_revealed(SectionId::Features));

        state.reveal(SectionId::Operations);
        assert!(state.is_revealed(SectionId::Operations));
    }
}
