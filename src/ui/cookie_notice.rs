// SPDX-License-Identifier: MPL-2.0
//! Dismissible cookie notice shown at the top of the header.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Container, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Whether the notice is still part of the page. Dismissal removes it for
/// the rest of the session; nothing is persisted.
#[derive(Debug, Clone)]
pub struct State {
    visible: bool,
}

impl Default for State {
    fn default() -> Self {
        Self { visible: true }
    }
}

impl State {
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn dismiss(&mut self) {
        self.visible = false;
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    Dismissed,
}

pub fn update(state: &mut State, message: Message) {
    match message {
        Message::Dismissed => state.dismiss(),
    }
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the notice banner. Callers skip this entirely once dismissed.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let row = Row::new()
        .spacing(spacing::MD)
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("cookie-message"))
                .size(typography::BODY)
                .width(Length::Fill),
        )
        .push(
            button(Text::new(ctx.i18n.tr("cookie-dismiss")).size(typography::BODY))
                .on_press(Message::Dismissed)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::primary),
        );

    Container::new(row)
        .width(Length::Fill)
        .padding([spacing::SM, spacing::LG])
        .style(styles::container::banner)
        .into()
}
