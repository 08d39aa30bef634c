// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Routes native window and keyboard events into page messages and drives
//! the smooth-scroll animation with a frame tick while one is in flight.

use super::{App, Message};
use crate::ui::state::scroll;
use iced::{event, keyboard, time, window, Subscription};

pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![events()];

    // Only tick while a smooth scroll is animating.
    if app.scroll_animation.is_some() {
        subscriptions.push(time::every(scroll::FRAME).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}

fn events() -> Subscription<Message> {
    event::listen_with(|event, _status, _window| match event {
        event::Event::Window(window::Event::Resized(size)) => {
            Some(Message::WindowResized(size))
        }
        // Escape is handled regardless of focus so the modal closes even
        // while one of its inputs is focused.
        event::Event::Keyboard(keyboard::Event::KeyPressed {
            key: keyboard::Key::Named(keyboard::key::Named::Escape),
            ..
        }) => Some(Message::EscapePressed),
        _ => None,
    })
}
