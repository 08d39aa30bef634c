// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::error::Error;
use crate::ui::{cookie_notice, hero, modal, navbar, operations, signup, testimonials};
use iced::widget::image;
use iced::widget::scrollable;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    CookieNotice(cookie_notice::Message),
    Modal(modal::Message),
    Operations(operations::Message),
    Testimonials(testimonials::Message),
    SignUp(signup::Message),
    /// The page scrollable moved; drives the viewport reporter.
    PageScrolled(scrollable::Viewport),
    /// The window was resized; intersections are re-reported.
    WindowResized(iced::Size),
    /// Escape key anywhere in the window.
    EscapePressed,
    /// Frame tick while a smooth scroll is animating.
    Tick(Instant),
    /// Result of a background feature-illustration render.
    FeatureImageLoaded {
        index: usize,
        result: Result<image::Handle, Error>,
    },
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Disable the smooth-scroll animation (also available in settings.toml).
    pub reduce_motion: bool,
}
