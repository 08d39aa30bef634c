// SPDX-License-Identifier: MPL-2.0
//! Hero area: headline, subtitle, and the "learn more" scroll trigger.

use crate::i18n::fluent::I18n;
use crate::ui::components::brand_art;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Row, Text};
use iced::{alignment::Vertical, Element, Length};

/// Messages emitted by the hero area.
#[derive(Debug, Clone)]
pub enum Message {
    /// The "learn more" button: smooth-scrolls to the features section.
    LearnMorePressed,
}

/// Contextual data needed to render the hero.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
}

/// Render the hero content (the cookie notice banner is stacked above this
/// by the page view while it is still visible).
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let copy = Column::new()
        .spacing(spacing::LG)
        .max_width(520.0)
        .push(Text::new(ctx.i18n.tr("hero-title")).size(typography::DISPLAY))
        .push(Text::new(ctx.i18n.tr("hero-subtitle")).size(typography::TITLE_SM))
        .push(
            button(Text::new(ctx.i18n.tr("hero-learn-more")))
                .on_press(Message::LearnMorePressed)
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::primary),
        );

    Row::new()
        .spacing(spacing::XXL)
        .padding([spacing::XXL, spacing::XL])
        .align_y(Vertical::Center)
        .height(Length::Fill)
        .push(copy)
        .push(brand_art::view())
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hero_view_renders() {
        let i18n = I18n::default();
        let _element = view(ViewContext { i18n: &i18n });
    }
}
