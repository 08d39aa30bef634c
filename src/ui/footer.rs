// SPDX-License-Identifier: MPL-2.0
//! Page footer: tagline and copyright.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use chrono::Datelike;
use iced::widget::{Column, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Contextual data needed to render the footer.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the footer.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let year = chrono::Local::now().year();

    Column::new()
        .spacing(spacing::MD)
        .padding([spacing::XXL, spacing::XL])
        .align_x(Horizontal::Center)
        .width(Length::Fill)
        .push(Text::new(ctx.i18n.tr("footer-tagline")).size(typography::BODY_LG))
        .push(
            Text::new(format!("© {} {}", year, ctx.i18n.tr("footer-copyright")))
                .size(typography::CAPTION),
        )
        .into()
}
