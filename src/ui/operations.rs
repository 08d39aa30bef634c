// SPDX-License-Identifier: MPL-2.0
//! Tabbed "operations" panel.
//!
//! A fixed set of tab/content pairs keyed by ordinal. Exactly one pair is
//! active at all times; selecting a tab activates its pair and deactivates
//! every other.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Text};
use iced::{alignment::Horizontal, Element, Length};

/// Number of tab/content pairs.
pub const TAB_COUNT: usize = 3;

/// Tab panel state: the index of the active pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    active_tab: usize,
}

impl Default for State {
    fn default() -> Self {
        // The first pair is active in the initial markup.
        Self { active_tab: 0 }
    }
}

impl State {
    #[must_use]
    pub fn active_tab(&self) -> usize {
        self.active_tab
    }

    /// Activates pair `index`; out-of-range indices are ignored.
    pub fn select(&mut self, index: usize) -> bool {
        if index < TAB_COUNT {
            self.active_tab = index;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn is_active(&self, index: usize) -> bool {
        self.active_tab == index
    }
}

/// Messages emitted by the tab buttons.
#[derive(Debug, Clone)]
pub enum Message {
    TabSelected(usize),
}

/// Process a tab panel message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::TabSelected(index) => {
            state.select(index);
        }
    }
}

/// Contextual data needed to render the panel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the operations section content.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(Text::new(ctx.i18n.tr("operations-heading")).size(typography::BODY_LG))
        .push(Text::new(ctx.i18n.tr("operations-subheading")).size(typography::TITLE_LG));

    let mut tabs = Row::new().spacing(spacing::MD);
    for index in 0..TAB_COUNT {
        let tab = index + 1;
        tabs = tabs.push(
            button(Text::new(ctx.i18n.tr(&format!("operations-tab-{tab}"))))
                .on_press(Message::TabSelected(index))
                .padding([spacing::SM, spacing::LG])
                .style(styles::button::tab(ctx.state.is_active(index))),
        );
    }

    let active = ctx.state.active_tab() + 1;
    let content = Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(
                Text::new(ctx.i18n.tr(&format!("operations-content-{active}-title")))
                    .size(typography::TITLE_MD),
            )
            .push(
                Text::new(ctx.i18n.tr(&format!("operations-content-{active}-body")))
                    .size(typography::BODY_LG),
            ),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .style(styles::container::panel);

    Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(tabs)
        .push(content)
        .into()
}
