// SPDX-License-Identifier: MPL-2.0
//! Features section: four copy blocks, each beside a lazily loaded
//! illustration.
//!
//! The section itself emits no messages; illustrations progress from their
//! blurred placeholder to the full render as the lazy loader completes.

use crate::i18n::fluent::I18n;
use crate::media::LazyImages;
use crate::page::FEATURE_COUNT;
use crate::ui::design_tokens::{page, spacing, typography};
use iced::widget::{image, Column, Container, Row, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    ContentFit, Element, Length,
};

/// Contextual data needed to render the section.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub images: &'a LazyImages,
}

/// Render the features section content.
pub fn view<'a, Message: 'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Container::new(
        Column::new()
            .spacing(spacing::XS)
            .align_x(Horizontal::Center)
            .push(Text::new(ctx.i18n.tr("features-heading")).size(typography::BODY_LG))
            .push(Text::new(ctx.i18n.tr("features-subheading")).size(typography::TITLE_LG)),
    )
    .height(Length::Fixed(page::SECTION_HEADER_HEIGHT))
    .center_x(Length::Fill);

    let mut column = Column::new().push(heading);
    for index in 0..FEATURE_COUNT {
        column = column.push(row_view(&ctx, index));
    }

    column.into()
}

fn row_view<'a, Message: 'a>(ctx: &ViewContext<'a>, index: usize) -> Element<'a, Message> {
    let feature = index + 1;
    let copy = Column::new()
        .spacing(spacing::MD)
        .push(
            Text::new(ctx.i18n.tr(&format!("feature-{feature}-title")))
                .size(typography::TITLE_MD),
        )
        .push(
            Text::new(ctx.i18n.tr(&format!("feature-{feature}-body")))
                .size(typography::BODY_LG),
        )
        .width(Length::Fill);

    let illustration: Element<'a, Message> = match ctx.images.illustration(index) {
        Some(illustration) => image(illustration.handle)
            .width(Length::Fixed(page::FEATURE_IMAGE_WIDTH))
            .height(Length::Fixed(page::FEATURE_IMAGE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        // Out of range only if the loader was built with fewer images than
        // the page has rows; render the gap rather than panicking.
        None => Container::new(Column::new())
            .width(Length::Fixed(page::FEATURE_IMAGE_WIDTH))
            .height(Length::Fixed(page::FEATURE_IMAGE_HEIGHT))
            .into(),
    };

    // Alternate copy/illustration order per row.
    let mut row = Row::new()
        .spacing(spacing::XXL)
        .padding([0.0, spacing::XL])
        .align_y(Vertical::Center)
        .height(Length::Fixed(page::FEATURE_ROW_HEIGHT));
    if index % 2 == 0 {
        row = row.push(copy).push(illustration);
    } else {
        row = row.push(illustration).push(copy);
    }

    row.into()
}
