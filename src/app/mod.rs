// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the page components.
//!
//! The `App` struct wires together the page areas (navigation, hero,
//! sections, modal) with the viewport reporter that drives reveal, sticky
//! and lazy-load behavior. All policy decisions about what a visibility
//! crossing means live next to the main update loop so user-facing behavior
//! is easy to audit.

mod message;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::config;
use crate::i18n::fluent::I18n;
use crate::media::LazyImages;
use crate::page::{self, RevealState, SectionId, FEATURE_COUNT};
use crate::ui::design_tokens::page as page_tokens;
use crate::ui::state::scroll::ScrollAnimation;
use crate::ui::state::viewport::ViewportState;
use crate::ui::theming::ThemeMode;
use crate::ui::{cookie_notice, modal, navbar, operations, testimonials};
use crate::viewport::{Target, ViewportReporter, Watch};
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;

pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const MIN_WINDOW_WIDTH: u32 = 720;
pub const MIN_WINDOW_HEIGHT: u32 = 560;

/// Root Iced application state bridging the page components, localization,
/// and the viewport reporter.
pub struct App {
    pub i18n: I18n,
    pub(crate) theme_mode: ThemeMode,
    pub(crate) reduce_motion: bool,
    pub(crate) navbar: navbar::State,
    pub(crate) cookie_notice: cookie_notice::State,
    pub(crate) modal: modal::State,
    pub(crate) operations: operations::State,
    pub(crate) testimonials: testimonials::State,
    pub(crate) revealed: RevealState,
    pub(crate) images: LazyImages,
    pub(crate) reporter: ViewportReporter,
    pub(crate) viewport: ViewportState,
    /// Viewport height to assume before the first scroll event.
    pub(crate) fallback_viewport_height: f32,
    pub(crate) scroll_animation: Option<ScrollAnimation>,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("sticky", &self.navbar.is_sticky())
            .field("modal_open", &self.modal.is_open())
            .field("current_slide", &self.testimonials.current_slide())
            .finish()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state
            .borrow_mut()
            .take()
            .expect("Boot function called more than once");
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Creates the application state and performs the initial visibility
    /// report so above-the-fold content is correct before any scroll.
    pub fn new(flags: Flags) -> (Self, Task<Message>) {
        let config = config::load().unwrap_or_else(|err| {
            eprintln!("Failed to load settings: {err}");
            config::Config::default()
        });

        let i18n = I18n::new(flags.lang, &config);
        let theme_mode = config.theme.unwrap_or_default();
        let reduce_motion =
            flags.reduce_motion || config.reduce_motion.unwrap_or(config::DEFAULT_REDUCE_MOTION);

        let mut app = Self {
            i18n,
            theme_mode,
            reduce_motion,
            navbar: navbar::State::default(),
            cookie_notice: cookie_notice::State::default(),
            modal: modal::State::default(),
            operations: operations::State::default(),
            testimonials: testimonials::State::default(),
            revealed: RevealState::default(),
            images: LazyImages::new(FEATURE_COUNT),
            reporter: observed_page(),
            viewport: ViewportState::default(),
            fallback_viewport_height: WINDOW_DEFAULT_HEIGHT as f32 - page_tokens::NAV_HEIGHT,
            scroll_animation: None,
        };

        let task = update::process_crossings(&mut app);
        (app, task)
    }

    pub fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    pub fn theme(&self) -> Theme {
        if self.theme_mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        update::update(self, message)
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    pub fn subscription(&self) -> Subscription<Message> {
        subscription::subscription(self)
    }
}

/// Registers every observable page region with its watch configuration.
///
/// - The header sentinel is continuous with a negative margin equal to the
///   nav bar height, so the sticky boundary aligns with the nav bar edge.
/// - Sections are one-shot with the reveal threshold.
/// - Feature illustrations are one-shot with the lazy-load margin.
fn observed_page() -> ViewportReporter {
    let mut reporter = ViewportReporter::new();

    reporter.observe(
        Target::HeaderSentinel,
        page::hero_span(),
        Watch::continuous(-page_tokens::NAV_HEIGHT),
    );

    for id in SectionId::ALL {
        reporter.observe(
            Target::Section(id),
            page::section_span(id),
            Watch::once(page_tokens::REVEAL_THRESHOLD, 0.0),
        );
    }

    for index in 0..FEATURE_COUNT {
        reporter.observe(
            Target::FeatureImage(index),
            page::feature_image_span(index),
            Watch::once(0.0, page_tokens::LAZY_LOAD_MARGIN),
        );
    }

    reporter
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn observed_page_watches_every_target() {
        let reporter = observed_page();
        // Sentinel + sections + feature images.
        assert_eq!(reporter.len(), 1 + SectionId::ALL.len() + FEATURE_COUNT);
        assert!(reporter.is_observing(Target::HeaderSentinel));
    }

    #[test]
    fn new_app_reveals_nothing_below_the_fold() {
        let (app, _task) = App::new(Flags::default());
        assert!(!app.revealed.is_revealed(SectionId::Testimonials));
        assert!(!app.revealed.is_revealed(SectionId::SignUp));
    }

    #[test]
    fn new_app_is_not_sticky_at_the_top() {
        let (app, _task) = App::new(Flags::default());
        assert!(!app.navbar.is_sticky());
    }

    #[test]
    fn app_view_renders() {
        let (app, _task) = App::new(Flags::default());
        let _element = app.view();
    }

    #[test]
    fn app_view_renders_with_modal_open() {
        let (mut app, _task) = App::new(Flags::default());
        app.modal.open();
        let _element = app.view();
    }
}
