// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Generic panel surface used for the modal card and the tab content panel.
///
/// The color is derived from the active Iced `Theme` background, with a slight
/// opacity, so panels stay readable in both light and dark modes without
/// hard-coding colors.
pub fn panel(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.color;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::SURFACE,
        ))),
        border: Border {
            radius: radius::LG.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Navigation bar surface; elevated and opaque once sticky.
pub fn navbar(sticky: bool) -> impl Fn(&Theme) -> container::Style {
    move |theme: &Theme| {
        let palette = theme.extended_palette();
        if sticky {
            container::Style {
                background: Some(Background::Color(palette.background.base.color)),
                shadow: shadow::SM,
                ..Default::default()
            }
        } else {
            container::Style {
                background: Some(Background::Color(palette.background.weak.color)),
                ..Default::default()
            }
        }
    }
}

/// Dimmed backdrop behind the modal dialog.
pub fn backdrop(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();
    let base = palette.background.base.text;

    container::Style {
        background: Some(Background::Color(Color::from_rgba(
            base.r,
            base.g,
            base.b,
            opacity::OVERLAY_MEDIUM,
        ))),
        ..Default::default()
    }
}

/// Banner surface for the cookie notice.
pub fn banner(theme: &Theme) -> container::Style {
    let palette = theme.extended_palette();

    container::Style {
        background: Some(Background::Color(palette.background.strong.color)),
        text_color: Some(palette.background.base.text),
        border: Border {
            radius: radius::SM.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}
