// SPDX-License-Identifier: MPL-2.0
//! Decorative brand artwork rendered in the hero area.

use crate::ui::design_tokens::palette;
use iced::widget::canvas;
use iced::{mouse, Color, Element, Length, Point, Rectangle, Theme};

const RING_COUNT: usize = 4;
const RING_COLOR: Color = palette::PRIMARY_400;

/// Concentric translucent rings, anchored to the widget's lower right.
#[derive(Debug, Clone, Copy, Default)]
pub struct BrandArt;

impl<Message> canvas::Program<Message> for BrandArt {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &iced::Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<canvas::Geometry> {
        let mut frame = canvas::Frame::new(renderer, bounds.size());

        let center = Point::new(bounds.width * 0.7, bounds.height * 0.6);
        let max_radius = bounds.width.min(bounds.height) / 2.0;

        for ring in 0..RING_COUNT {
            let t = (ring + 1) as f32 / RING_COUNT as f32;
            let circle = canvas::Path::circle(center, max_radius * t);
            frame.fill(
                &circle,
                Color {
                    a: 0.25 * (1.0 - t) + 0.08,
                    ..RING_COLOR
                },
            );
        }

        vec![frame.into_geometry()]
    }
}

/// Helper returning the artwork as a fill-sized element.
pub fn view<'a, Message: 'a>() -> Element<'a, Message> {
    canvas::Canvas::new(BrandArt)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

const _: () = {
    assert!(RING_COUNT > 0);
};
