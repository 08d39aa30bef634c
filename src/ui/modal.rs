// SPDX-License-Identifier: MPL-2.0
//! Account sign-up modal dialog.
//!
//! The dialog opens from the nav bar and sign-up triggers and closes from
//! its close button, a click on the dimmed backdrop, or the Escape key.
//! Closing never clears the typed form: reopening resumes where the visitor
//! left off.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, mouse_area, text_input, Column, Container, Row, Space, Text};
use iced::{alignment::Vertical, Element, Length};

/// Modal state: open flag plus the sign-up form fields.
#[derive(Debug, Clone, Default)]
pub struct State {
    open: bool,
    first_name: String,
    last_name: String,
    email: String,
}

impl State {
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn open(&mut self) {
        self.open = true;
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Escape only acts while the dialog is open; returns whether the state
    /// changed.
    pub fn handle_escape(&mut self) -> bool {
        if self.open {
            self.open = false;
            true
        } else {
            false
        }
    }
}

/// Messages emitted by the dialog.
#[derive(Debug, Clone)]
pub enum Message {
    CloseRequested,
    BackdropPressed,
    CardPressed,
    FirstNameChanged(String),
    LastNameChanged(String),
    EmailChanged(String),
    SubmitPressed,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    None,
    Closed,
}

/// Process a modal message and return the corresponding event.
pub fn update(state: &mut State, message: Message) -> Event {
    match message {
        Message::CloseRequested | Message::BackdropPressed => {
            state.close();
            Event::Closed
        }
        // Sink so presses on the card never reach the backdrop below it.
        Message::CardPressed => Event::None,
        Message::FirstNameChanged(value) => {
            state.first_name = value;
            Event::None
        }
        Message::LastNameChanged(value) => {
            state.last_name = value;
            Event::None
        }
        Message::EmailChanged(value) => {
            state.email = value;
            Event::None
        }
        // There is no backend to submit to; the dialog just closes.
        Message::SubmitPressed => {
            state.close();
            Event::Closed
        }
    }
}

/// Contextual data needed to render the dialog.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the modal overlay: a dimmed backdrop with the centered card.
/// Callers stack this on top of the page only while the modal is open.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let backdrop = mouse_area(
        Container::new(Space::new())
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop),
    )
    .on_press(Message::BackdropPressed);

    let card = mouse_area(card_view(&ctx)).on_press(Message::CardPressed);

    iced::widget::Stack::new()
        .push(backdrop)
        .push(
            Container::new(card)
                .center_x(Length::Fill)
                .center_y(Length::Fill),
        )
        .into()
}

fn card_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let close = button(Text::new("×").size(typography::TITLE_MD))
        .on_press(Message::CloseRequested)
        .style(styles::button::text_link(1.0));

    let header = Row::new()
        .align_y(Vertical::Center)
        .push(
            Text::new(ctx.i18n.tr("modal-title"))
                .size(typography::TITLE_MD)
                .width(Length::Fill),
        )
        .push(close);

    let first_name = text_input(
        &ctx.i18n.tr("modal-first-name"),
        &ctx.state.first_name,
    )
    .on_input(Message::FirstNameChanged)
    .padding(spacing::SM);
    let last_name = text_input(&ctx.i18n.tr("modal-last-name"), &ctx.state.last_name)
        .on_input(Message::LastNameChanged)
        .padding(spacing::SM);
    let email = text_input(&ctx.i18n.tr("modal-email"), &ctx.state.email)
        .on_input(Message::EmailChanged)
        .padding(spacing::SM);

    let submit = button(Text::new(ctx.i18n.tr("modal-submit")))
        .on_press(Message::SubmitPressed)
        .padding([spacing::SM, spacing::LG])
        .style(styles::button::primary);

    Container::new(
        Column::new()
            .spacing(spacing::LG)
            .push(header)
            .push(first_name)
            .push(last_name)
            .push(email)
            .push(submit),
    )
    .width(Length::Fixed(sizing::MODAL_WIDTH))
    .padding(spacing::XL)
    .style(styles::container::panel)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let state = State::default();
        assert!(!state.is_open());
    }

    #[test]
    fn close_requests_close_the_dialog() {
        let mut state = State::default();
        state.open();

        let event = update(&mut state, Message::CloseRequested);
        assert!(!state.is_open());
        assert!(matches!(event, Event::Closed));
    }

    #[test]
    fn backdrop_press_closes_the_dialog() {
        let mut state = State::default();
        state.open();

        let event = update(&mut state, Message::BackdropPressed);
        assert!(!state.is_open());
        assert!(matches!(event, Event::Closed));
    }

    #[test]
    fn card_press_is_swallowed() {
        let mut state = State::default();
        state.open();

        let event = update(&mut state, Message::CardPressed);
        assert!(state.is_open());
        assert!(matches!(event, Event::None));
    }

    #[test]
    fn escape_closes_only_while_open() {
        let mut state = State::default();
        assert!(!state.handle_escape(), "escape while closed is a no-op");
        assert!(!state.is_open());

        state.open();
        assert!(state.handle_escape());
        assert!(!state.is_open());
    }

    #[test]
    fn form_fields_survive_a_close() {
        let mut state = State::default();
        state.open();
        update(
            &mut state,
            Message::FirstNameChanged("Ada".to_string()),
        );
        update(&mut state, Message::CloseRequested);
        state.open();

        assert_eq!(state.first_name, "Ada");
    }

    #[test]
    fn modal_view_renders() {
        let i18n = I18n::default();
        let mut state = State::default();
        state.open();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
