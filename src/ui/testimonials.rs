// SPDX-License-Identifier: MPL-2.0
//! Testimonials carousel with pagination dots.
//!
//! The carousel keeps a single current-slide index over a fixed number of
//! slides. Every slide has a horizontal offset of `100% × (index − current)`,
//! so exactly one slide sits at offset zero; the pagination dots are derived
//! from the same index at render time and therefore cannot drift from it.

use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{button, Column, Container, Row, Space, Text};
use iced::{
    alignment::{Horizontal, Vertical},
    Element, Length,
};

/// Number of testimonial slides on the page.
pub const SLIDE_COUNT: usize = 3;

/// Carousel state: the current slide over a fixed slide count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct State {
    current_slide: usize,
    slide_count: usize,
}

impl Default for State {
    fn default() -> Self {
        Self::new(SLIDE_COUNT)
    }
}

impl State {
    /// Creates a carousel positioned on slide 0.
    ///
    /// `slide_count` is fixed for the lifetime of the carousel and must be
    /// positive; an empty carousel is never constructed by the page.
    #[must_use]
    pub fn new(slide_count: usize) -> Self {
        debug_assert!(slide_count > 0);
        Self {
            current_slide: 0,
            slide_count: slide_count.max(1),
        }
    }

    #[must_use]
    pub fn current_slide(&self) -> usize {
        self.current_slide
    }

    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Horizontal offset of slide `index`, in percent of the frame width.
    /// The current slide is at 0; its neighbors at ±100.
    #[must_use]
    pub fn slide_offset(&self, index: usize) -> f32 {
        100.0 * (index as f32 - self.current_slide as f32)
    }

    /// Advances to the next slide, wrapping from the last back to the first.
    pub fn next(&mut self) {
        if self.current_slide == self.slide_count - 1 {
            self.current_slide = 0;
        } else {
            self.current_slide += 1;
        }
    }

    /// Goes back one slide, wrapping from the first to the last.
    pub fn previous(&mut self) {
        if self.current_slide == 0 {
            self.current_slide = self.slide_count - 1;
        } else {
            self.current_slide -= 1;
        }
    }

    /// Jumps directly to `index`, as triggered by a pagination dot.
    ///
    /// Dots are generated from the slide list so their recorded index is
    /// always in range, but the jump validates defensively and ignores an
    /// out-of-range index rather than breaking the invariant.
    pub fn select_slide(&mut self, index: usize) -> bool {
        if index < self.slide_count {
            self.current_slide = index;
            true
        } else {
            false
        }
    }
}

/// Messages emitted by the carousel controls.
#[derive(Debug, Clone)]
pub enum Message {
    NextPressed,
    PreviousPressed,
    DotPressed(usize),
}

/// Process a carousel message.
pub fn update(state: &mut State, message: Message) {
    match message {
        Message::NextPressed => state.next(),
        Message::PreviousPressed => state.previous(),
        Message::DotPressed(index) => {
            state.select_slide(index);
        }
    }
}

/// Contextual data needed to render the carousel.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub state: &'a State,
}

/// Render the testimonials section content.
pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let heading = Column::new()
        .spacing(spacing::XS)
        .align_x(Horizontal::Center)
        .push(
            Text::new(ctx.i18n.tr("testimonials-heading")).size(typography::BODY_LG),
        )
        .push(Text::new(ctx.i18n.tr("testimonials-subheading")).size(typography::TITLE_LG));

    let previous = button(Text::new("←").size(typography::TITLE_SM))
        .on_press(Message::PreviousPressed)
        .width(Length::Fixed(sizing::SLIDER_BUTTON_SIZE))
        .height(Length::Fixed(sizing::SLIDER_BUTTON_SIZE))
        .style(styles::button::slider);
    let next = button(Text::new("→").size(typography::TITLE_SM))
        .on_press(Message::NextPressed)
        .width(Length::Fixed(sizing::SLIDER_BUTTON_SIZE))
        .height(Length::Fixed(sizing::SLIDER_BUTTON_SIZE))
        .style(styles::button::slider);

    let frame = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(previous)
        .push(slide_view(&ctx))
        .push(next);

    Column::new()
        .spacing(spacing::XL)
        .align_x(Horizontal::Center)
        .push(heading)
        .push(frame)
        .push(dots_view(ctx.state))
        .into()
}

/// The slide frame shows the slide currently at offset zero.
fn slide_view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let state = ctx.state;
    let index = (0..state.slide_count())
        .find(|&i| state.slide_offset(i) == 0.0)
        .unwrap_or(state.current_slide());
    let slide = index + 1;

    let quote = Text::new(ctx.i18n.tr(&format!("testimonial-{slide}-quote")))
        .size(typography::TITLE_MD);
    let body = Text::new(ctx.i18n.tr(&format!("testimonial-{slide}-body")))
        .size(typography::BODY_LG);
    let author = Text::new(ctx.i18n.tr(&format!("testimonial-{slide}-author")))
        .size(typography::BODY);
    let location = Text::new(ctx.i18n.tr(&format!("testimonial-{slide}-location")))
        .size(typography::CAPTION);

    Container::new(
        Column::new()
            .spacing(spacing::MD)
            .push(quote)
            .push(body)
            .push(Space::new().height(Length::Fixed(spacing::XS)))
            .push(author)
            .push(location),
    )
    .width(Length::Fill)
    .padding(spacing::XL)
    .into()
}

/// One dot per slide, in slide order; the dot matching the current slide is
/// marked active.
fn dots_view(state: &State) -> Element<'_, Message> {
    let mut dots = Row::new().spacing(spacing::SM);

    for index in 0..state.slide_count() {
        let active = index == state.current_slide();
        dots = dots.push(
            button(Space::new())
                .on_press(Message::DotPressed(index))
                .width(Length::Fixed(sizing::DOT_SIZE))
                .height(Length::Fixed(sizing::DOT_SIZE))
                .style(styles::button::dot(active)),
        );
    }

    dots.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    /// Count of indices whose offset is exactly zero.
    fn slides_at_origin(state: &State) -> usize {
        (0..state.slide_count())
            .filter(|&i| state.slide_offset(i) == 0.0)
            .count()
    }

    #[test]
    fn starts_on_the_first_slide() {
        let state = State::new(3);
        assert_eq!(state.current_slide(), 0);
        assert_eq!(state.slide_count(), 3);
    }

    #[test]
    fn exactly_one_slide_sits_at_offset_zero() {
        let mut state = State::new(3);
        for _ in 0..3 {
            assert_eq!(slides_at_origin(&state), 1);
            state.next();
        }
    }

    #[test]
    fn offsets_follow_the_position_formula() {
        let mut state = State::new(3);
        state.select_slide(1);

        assert_abs_diff_eq!(state.slide_offset(0), -100.0);
        assert_abs_diff_eq!(state.slide_offset(1), 0.0);
        assert_abs_diff_eq!(state.slide_offset(2), 100.0);
    }

    #[test]
    fn next_wraps_after_the_last_slide() {
        let mut state = State::new(3);
        state.next();
        assert_eq!(state.current_slide(), 1);
        state.next();
        assert_eq!(state.current_slide(), 2);
        state.next();
        assert_eq!(state.current_slide(), 0);
    }

    #[test]
    fn previous_wraps_from_the_first_slide() {
        let mut state = State::new(3);
        state.previous();
        assert_eq!(state.current_slide(), 2);
    }

    #[test]
    fn next_applied_slide_count_times_is_identity() {
        for start in 0..3 {
            let mut state = State::new(3);
            state.select_slide(start);
            for _ in 0..state.slide_count() {
                state.next();
            }
            assert_eq!(state.current_slide(), start);
        }
    }

    #[test]
    fn previous_is_the_inverse_of_next() {
        for start in 0..5 {
            let mut state = State::new(5);
            state.select_slide(start);
            state.next();
            state.previous();
            assert_eq!(state.current_slide(), start);
        }
    }

    #[test]
    fn dot_press_selects_its_slide() {
        let mut state = State::new(3);
        update(&mut state, Message::DotPressed(2));
        assert_eq!(state.current_slide(), 2);
        assert_eq!(slides_at_origin(&state), 1);
    }

    #[test]
    fn out_of_range_selection_is_rejected() {
        let mut state = State::new(3);
        state.select_slide(1);
        assert!(!state.select_slide(3));
        assert_eq!(state.current_slide(), 1);
    }

    #[test]
    fn single_slide_carousel_never_moves() {
        let mut state = State::new(1);
        state.next();
        assert_eq!(state.current_slide(), 0);
        state.previous();
        assert_eq!(state.current_slide(), 0);
    }

    #[test]
    fn carousel_view_renders() {
        let i18n = I18n::default();
        let state = State::default();
        let _element = view(ViewContext {
            i18n: &i18n,
            state: &state,
        });
    }
}
