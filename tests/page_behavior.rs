// SPDX-License-Identifier: MPL-2.0
//! Integration tests exercising the page's interaction invariants through
//! the public API.

use iced_landing::page::{self, SectionId};
use iced_landing::ui::operations;
use iced_landing::ui::testimonials;
use iced_landing::viewport::{Target, ViewportReporter, Watch};

const VIEW_HEIGHT: f32 = 700.0;

#[test]
fn carousel_cycles_and_pagination_follow_the_index() {
    let mut carousel = testimonials::State::new(3);

    // next() three times returns to the start.
    carousel.next();
    assert_eq!(carousel.current_slide(), 1);
    carousel.next();
    assert_eq!(carousel.current_slide(), 2);
    carousel.next();
    assert_eq!(carousel.current_slide(), 0);

    // previous() from 0 wraps to the last slide.
    carousel.previous();
    assert_eq!(carousel.current_slide(), 2);

    // A dot press jumps directly and exactly one slide sits at offset 0.
    assert!(carousel.select_slide(1));
    let at_origin: Vec<usize> = (0..carousel.slide_count())
        .filter(|&index| carousel.slide_offset(index) == 0.0)
        .collect();
    assert_eq!(at_origin, vec![1]);
}

#[test]
fn tab_selection_stays_exclusive() {
    let mut tabs = operations::State::default();
    for index in [2, 0, 1] {
        tabs.select(index);
        let active: Vec<usize> = (0..operations::TAB_COUNT)
            .filter(|&tab| tabs.is_active(tab))
            .collect();
        assert_eq!(active, vec![index]);
    }
}

#[test]
fn a_full_page_scroll_reveals_every_section_exactly_once() {
    let mut reporter = ViewportReporter::new();
    for id in SectionId::ALL {
        reporter.observe(Target::Section(id), page::section_span(id), Watch::once(0.15, 0.0));
    }

    let mut revealed = Vec::new();
    let mut top = 0.0;
    while top < page::content_height() {
        for crossing in reporter.report(top, VIEW_HEIGHT) {
            if crossing.intersecting {
                revealed.push(crossing.target);
            }
        }
        top += 100.0;
    }

    assert_eq!(revealed.len(), SectionId::ALL.len());
    assert!(reporter.is_empty(), "every one-shot watch was released");

    // A second sweep reports nothing.
    let mut top = 0.0;
    while top < page::content_height() {
        assert!(reporter.report(top, VIEW_HEIGHT).is_empty());
        top += 100.0;
    }
}

#[test]
fn sticky_state_tracks_the_sentinel_both_ways() {
    let nav_height = 64.0;
    let mut reporter = ViewportReporter::new();
    reporter.observe(
        Target::HeaderSentinel,
        page::hero_span(),
        Watch::continuous(-nav_height),
    );

    // Initial report: intersecting at the top of the page.
    let initial = reporter.report(0.0, VIEW_HEIGHT);
    assert_eq!(initial.len(), 1);
    assert!(initial[0].intersecting);

    let mut sticky = false;
    for (top, expected_sticky) in [
        (page::content_height(), true),
        (0.0, false),
        (page::content_height(), true),
    ] {
        for crossing in reporter.report(top, VIEW_HEIGHT) {
            sticky = !crossing.intersecting;
        }
        assert_eq!(sticky, expected_sticky, "at offset {top}");
    }
}
