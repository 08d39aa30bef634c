// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for page-level navigation.
//!
//! The bar shows the logo, one link per landing section, and the
//! "open account" call to action. Hovering a link fades every sibling link
//! and the logo; scrolling past the header switches the bar into its sticky
//! presentation.

use crate::i18n::fluent::I18n;
use crate::page::SectionId;
use crate::ui::design_tokens::{opacity, page, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, text, Container, Row, Space, Text};
use iced::{
    alignment::Vertical,
    widget::text::Style as TextStyle,
    Color, Element, Length, Theme,
};

/// Links shown in the bar, one per landing section.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkId {
    Features,
    Operations,
    Testimonials,
}

impl LinkId {
    pub const ALL: [LinkId; 3] = [LinkId::Features, LinkId::Operations, LinkId::Testimonials];

    /// Section this link scrolls to.
    #[must_use]
    pub fn section(self) -> SectionId {
        match self {
            LinkId::Features => SectionId::Features,
            LinkId::Operations => SectionId::Operations,
            LinkId::Testimonials => SectionId::Testimonials,
        }
    }

    fn label_key(self) -> &'static str {
        match self {
            LinkId::Features => "nav-link-features",
            LinkId::Operations => "nav-link-operations",
            LinkId::Testimonials => "nav-link-testimonials",
        }
    }
}

/// Navigation bar state: sticky presentation and the hover fade.
#[derive(Debug, Clone, Default)]
pub struct State {
    sticky: bool,
    hovered: Option<LinkId>,
}

impl State {
    #[must_use]
    pub fn is_sticky(&self) -> bool {
        self.sticky
    }

    /// Driven by the header sentinel: sticky while the sentinel is not
    /// intersecting. Reversible.
    pub fn set_sticky(&mut self, sticky: bool) {
        self.sticky = sticky;
    }

    #[must_use]
    pub fn hovered(&self) -> Option<LinkId> {
        self.hovered
    }

    /// Opacity for one link given the current hover state: the hovered link
    /// keeps full opacity, its siblings fade.
    #[must_use]
    pub fn link_opacity(&self, link: LinkId) -> f32 {
        match self.hovered {
            Some(hovered) if hovered != link => opacity::NAV_FADED,
            _ => opacity::OPAQUE,
        }
    }

    /// The logo fades whenever any link is hovered.
    #[must_use]
    pub fn logo_opacity(&self) -> f32 {
        if self.hovered.is_some() {
            opacity::NAV_FADED
        } else {
            opacity::OPAQUE
        }
    }
}

/// Messages emitted by the navigation bar.
#[derive(Debug, Clone)]
pub enum Message {
    LinkPressed(LinkId),
    LinkEntered(LinkId),
    LinkExited,
    OpenAccountPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    ScrollToSection(SectionId),
    OpenModal,
}

/// Process a navbar message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::LinkPressed(link) => Event::ScrollToSection(link.section()),
        Message::LinkEntered(link) => {
            state.hovered = Some(link);
            Event::None
        }
        Message::LinkExited => {
            state.hovered = None;
            Event::None
        }
        Message::OpenAccountPressed => Event::OpenModal,
    }
}

/// Contextual data needed to render the bar.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the navigation bar.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let logo_alpha = ctx.state.logo_opacity();
    let logo = text(ctx.i18n.tr("nav-logo"))
        .size(typography::TITLE_SM)
        .style(move |theme: &Theme| TextStyle {
            color: Some(faded(theme, logo_alpha)),
        });

    let mut row = Row::new()
        .spacing(spacing::LG)
        .padding([0.0, spacing::XL])
        .align_y(Vertical::Center)
        .height(Length::Fixed(page::NAV_HEIGHT))
        .push(logo)
        .push(Space::new().width(Length::Fill));

    for link in LinkId::ALL {
        row = row.push(link_view(&ctx, link));
    }

    let open_account = button(Text::new(ctx.i18n.tr("nav-open-account")))
        .on_press(Message::OpenAccountPressed)
        .padding([spacing::XS, spacing::MD])
        .style(styles::button::primary);
    row = row.push(open_account);

    Container::new(row)
        .width(Length::Fill)
        .style(styles::container::navbar(ctx.state.is_sticky()))
        .into()
}

fn link_view<'a>(ctx: &ViewContext<'a>, link: LinkId) -> Element<'a, Message> {
    let alpha = ctx.state.link_opacity(link);
    let label = button(Text::new(ctx.i18n.tr(link.label_key())))
        .on_press(Message::LinkPressed(link))
        .padding([spacing::XS, spacing::XS])
        .style(styles::button::text_link(alpha));

    mouse_area(label)
        .on_enter(Message::LinkEntered(link))
        .on_exit(Message::LinkExited)
        .into()
}

fn faded(theme: &Theme, alpha: f32) -> Color {
    let base = theme.extended_palette().background.base.text;
    Color { a: alpha, ..base }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn hovering_a_link_fades_siblings_and_logo() {
        let mut state = State::default();
        let event = update(&mut state, Message::LinkEntered(LinkId::Operations));
        assert!(matches!(event, Event::None));

        assert_abs_diff_eq!(state.link_opacity(LinkId::Operations), opacity::OPAQUE);
        assert_abs_diff_eq!(state.link_opacity(LinkId::Features), opacity::NAV_FADED);
        assert_abs_diff_eq!(state.link_opacity(LinkId::Testimonials), opacity::NAV_FADED);
        assert_abs_diff_eq!(state.logo_opacity(), opacity::NAV_FADED);
    }

    #[test]
    fn hover_exit_restores_full_opacity() {
        let mut state = State::default();
        update(&mut state, Message::LinkEntered(LinkId::Features));
        update(&mut state, Message::LinkExited);

        for link in LinkId::ALL {
            assert_abs_diff_eq!(state.link_opacity(link), opacity::OPAQUE);
        }
        assert_abs_diff_eq!(state.logo_opacity(), opacity::OPAQUE);
    }

    #[test]
    fn link_press_requests_its_section() {
        let mut state = State::default();
        let event = update(&mut state, Message::LinkPressed(LinkId::Testimonials));
        assert!(matches!(
            event,
            Event::ScrollToSection(SectionId::Testimonials)
        ));
    }

    #[test]
    fn open_account_requests_the_modal_without_scrolling() {
        let mut state = State::default();
        let event = update(&mut state, Message::OpenAccountPressed);
        assert!(matches!(event, Event::OpenModal));
    }

    #[test]
    fn sticky_flag_is_reversible() {
        let mut state = State::default();
        assert!(!state.is_sticky());
        state.set_sticky(true);
        assert!(state.is_sticky());
        state.set_sticky(false);
        assert!(!state.is_sticky());
    }

    #[test]
    fn navbar_view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
