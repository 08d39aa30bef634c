// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! Component messages are forwarded to their modules; the events they
//! return are translated here into page-level effects (opening the modal,
//! starting a smooth scroll). Scroll and resize messages feed the viewport
//! reporter, whose crossings drive the reveal, sticky and lazy-load
//! controllers.

use super::{view, App, Message};
use crate::config;
use crate::media::artwork;
use crate::page::{self, SectionId};
use crate::ui::state::scroll::ScrollAnimation;
use crate::ui::{cookie_notice, modal, navbar, operations, signup, testimonials};
use crate::viewport::Target;
use iced::widget::operation;
use iced::widget::scrollable::RelativeOffset;
use iced::Task;
use std::time::{Duration, Instant};

pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => match navbar::update(&mut app.navbar, message) {
            navbar::Event::None => Task::none(),
            navbar::Event::ScrollToSection(id) => scroll_to_section(app, id),
            navbar::Event::OpenModal => {
                app.modal.open();
                Task::none()
            }
        },
        Message::Hero(crate::ui::hero::Message::LearnMorePressed) => {
            scroll_to_section(app, SectionId::Features)
        }
        Message::CookieNotice(message) => {
            cookie_notice::update(&mut app.cookie_notice, message);
            Task::none()
        }
        Message::Modal(message) => {
            // Closed/None events need no page-level follow-up.
            let _event = modal::update(&mut app.modal, message);
            Task::none()
        }
        Message::Operations(message) => {
            operations::update(&mut app.operations, message);
            Task::none()
        }
        Message::Testimonials(message) => {
            testimonials::update(&mut app.testimonials, message);
            Task::none()
        }
        Message::SignUp(signup::Message::OpenAccountPressed) => {
            app.modal.open();
            Task::none()
        }
        Message::EscapePressed => {
            app.modal.handle_escape();
            Task::none()
        }
        Message::PageScrolled(viewport) => {
            app.viewport
                .update(viewport.bounds(), viewport.absolute_offset());
            process_crossings(app)
        }
        Message::WindowResized(size) => {
            app.viewport.invalidate_bounds();
            app.fallback_viewport_height =
                (size.height - crate::ui::design_tokens::page::NAV_HEIGHT).max(0.0);
            process_crossings(app)
        }
        Message::Tick(now) => advance_scroll_animation(app, now),
        Message::FeatureImageLoaded { index, result } => {
            match result {
                Ok(handle) => app.images.complete(index, handle),
                Err(err) => {
                    eprintln!("Failed to render feature illustration {index}: {err}");
                    app.images.abandon(index);
                }
            }
            Task::none()
        }
    }
}

fn viewport_height(app: &App) -> f32 {
    app.viewport.height_or(app.fallback_viewport_height)
}

/// Feeds the reporter the current viewport window and applies the crossings:
/// sticky navigation, one-shot section reveals, one-shot lazy-load requests.
pub(super) fn process_crossings(app: &mut App) -> Task<Message> {
    let crossings = app.reporter.report(app.viewport.top(), viewport_height(app));
    let mut tasks = Vec::new();

    for crossing in crossings {
        match crossing.target {
            Target::HeaderSentinel => app.navbar.set_sticky(!crossing.intersecting),
            Target::Section(id) => {
                if crossing.intersecting {
                    app.revealed.reveal(id);
                }
            }
            Target::FeatureImage(index) => {
                if crossing.intersecting && app.images.request(index) {
                    tasks.push(Task::perform(artwork::load_full(index), move |result| {
                        Message::FeatureImageLoaded { index, result }
                    }));
                }
            }
        }
    }

    Task::batch(tasks)
}

/// Starts (or, with reduced motion, skips) the smooth scroll to a section.
fn scroll_to_section(app: &mut App, id: SectionId) -> Task<Message> {
    let target = page::scroll_target(id, viewport_height(app));

    if app.reduce_motion {
        app.scroll_animation = None;
        return snap_to(app, target);
    }

    app.scroll_animation = Some(ScrollAnimation::new(
        app.viewport.top(),
        target,
        Instant::now(),
        Duration::from_millis(config::SCROLL_ANIMATION_MS),
    ));
    Task::none()
}

fn advance_scroll_animation(app: &mut App, now: Instant) -> Task<Message> {
    let Some(animation) = app.scroll_animation else {
        return Task::none();
    };

    let offset = animation.sample(now);
    if animation.is_complete(now) {
        app.scroll_animation = None;
    }
    snap_to(app, offset)
}

/// Applies an absolute page offset, expressed as the relative offset the
/// scroll operation expects.
fn snap_to(app: &App, offset: f32) -> Task<Message> {
    let max_offset = (page::content_height() - viewport_height(app)).max(0.0);
    let relative_y = if max_offset > 0.0 {
        (offset / max_offset).clamp(0.0, 1.0)
    } else {
        0.0
    };

    operation::snap_to(
        view::page_scroll_id(),
        RelativeOffset {
            x: 0.0,
            y: relative_y,
        },
    )
}
