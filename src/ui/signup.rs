// SPDX-License-Identifier: MPL-2.0
//! Sign-up section: the closing call to action that opens the modal.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Messages emitted by the sign-up section.
#[derive(Debug, Clone)]
pub enum Message {
    OpenAccountPressed,
}

/// Contextual data needed to render the section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the sign-up section content.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    Column::new()
        .spacing(spacing::XL)
        .padding([spacing::XXL, spacing::XL])
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(
            Text::new(ctx.i18n.tr("signup-title"))
                .size(typography::TITLE_LG)
                .align_x(Horizontal::Center),
        )
        .push(
            button(Text::new(ctx.i18n.tr("signup-button")))
                .on_press(Message::OpenAccountPressed)
                .padding([spacing::SM, spacing::XL])
                .style(styles::button::primary),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
