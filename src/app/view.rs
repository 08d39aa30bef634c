// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! Composes the page: the navigation bar above a single scrollable column of
//! fixed-height regions (hero, sections, footer), with the modal stacked on
//! top while it is open. Hidden sections render as blank space of their full
//! height so the scroll geometry never changes.

use super::{App, Message};
use crate::page::SectionId;
use crate::ui::design_tokens::page as tokens;
use crate::ui::{
    cookie_notice, features, footer, hero, modal, navbar, operations, signup, testimonials,
};
use iced::widget::{Column, Container, Id, Scrollable, Space, Stack};
use iced::{Element, Length};

/// Id of the page scrollable, shared with the smooth-scroll task.
pub fn page_scroll_id() -> Id {
    Id::new("landing-page")
}

/// Renders the whole application.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(navbar::ViewContext {
        i18n: &app.i18n,
        state: &app.navbar,
    })
    .map(Message::Navbar);

    let mut page = Column::new().push(hero_view(app));
    for id in SectionId::ALL {
        page = page.push(section_view(app, id));
    }
    page = page.push(
        Container::new(footer::view(footer::ViewContext { i18n: &app.i18n }))
            .width(Length::Fill)
            .height(Length::Fixed(tokens::FOOTER_HEIGHT)),
    );

    let scroll = Scrollable::new(page.width(Length::Fill))
        .id(page_scroll_id())
        .on_scroll(Message::PageScrolled)
        .width(Length::Fill)
        .height(Length::Fill);

    let base = Column::new().push(navbar_view).push(scroll);

    if app.modal.is_open() {
        let overlay = modal::view(modal::ViewContext {
            i18n: &app.i18n,
            state: &app.modal,
        })
        .map(Message::Modal);

        Stack::new().push(base).push(overlay).into()
    } else {
        base.into()
    }
}

/// The hero region, with the cookie notice banner at its top while the
/// notice has not been dismissed.
fn hero_view(app: &App) -> Element<'_, Message> {
    let mut column = Column::new();

    if app.cookie_notice.is_visible() {
        column = column.push(
            cookie_notice::view(cookie_notice::ViewContext { i18n: &app.i18n })
                .map(Message::CookieNotice),
        );
    }

    column = column.push(hero::view(hero::ViewContext { i18n: &app.i18n }).map(Message::Hero));

    Container::new(column)
        .width(Length::Fill)
        .height(Length::Fixed(tokens::HERO_HEIGHT))
        .into()
}

/// A landing section: blank space until revealed, content afterwards.
fn section_view(app: &App, id: SectionId) -> Element<'_, Message> {
    let height = id.height();

    if !app.revealed.is_revealed(id) {
        return Space::new()
            .width(Length::Fill)
            .height(Length::Fixed(height))
            .into();
    }

    let content: Element<'_, Message> = match id {
        SectionId::Features => features::view(features::ViewContext {
            i18n: &app.i18n,
            images: &app.images,
        }),
        SectionId::Operations => operations::view(operations::ViewContext {
            i18n: &app.i18n,
            state: &app.operations,
        })
        .map(Message::Operations),
        SectionId::Testimonials => testimonials::view(testimonials::ViewContext {
            i18n: &app.i18n,
            state: &app.testimonials,
        })
        .map(Message::Testimonials),
        SectionId::SignUp => {
            signup::view(signup::ViewContext { i18n: &app.i18n }).map(Message::SignUp)
        }
    };

    Container::new(
        Container::new(content).max_width(tokens::CONTENT_MAX_WIDTH),
    )
    .center_x(Length::Fill)
    .height(Length::Fixed(height))
    .into()
}
