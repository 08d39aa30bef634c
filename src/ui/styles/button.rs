// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    palette::{self, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

/// Style pour bouton primaire (action principale).
pub fn primary(_theme: &Theme, status: button::Status) -> button::Style {
    match status {
        button::Status::Active | button::Status::Pressed => button::Style {
            background: Some(Background::Color(palette::PRIMARY_500)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_600,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::SM,
            snap: true,
        },
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(palette::PRIMARY_400)),
            text_color: WHITE,
            border: Border {
                color: palette::PRIMARY_500,
                width: 1.0,
                radius: radius::FULL.into(),
            },
            shadow: shadow::MD,
            snap: true,
        },
        _ => button::Style::default(),
    }
}

/// Borderless text button, with an adjustable text alpha.
///
/// Used by the nav links so the hover fade can dim every sibling link
/// while the link under the cursor keeps full opacity.
pub fn text_link(alpha: f32) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, _status: button::Status| {
        let base = theme.extended_palette().background.base.text;
        button::Style {
            background: None,
            text_color: Color { a: alpha, ..base },
            border: Border::default(),
            ..Default::default()
        }
    }
}

/// Round slider navigation button (previous/next).
pub fn slider(theme: &Theme, status: button::Status) -> button::Style {
    let palette_ext = theme.extended_palette();
    let background = match status {
        button::Status::Hovered | button::Status::Pressed => palette_ext.background.strong.color,
        _ => palette_ext.background.weak.color,
    };

    button::Style {
        background: Some(Background::Color(background)),
        text_color: palette_ext.background.base.text,
        border: Border {
            radius: radius::FULL.into(),
            ..Default::default()
        },
        shadow: shadow::SM,
        snap: true,
    }
}

/// Pagination dot: filled when active, faint otherwise.
pub fn dot(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();
        let background = if active {
            palette_ext.primary.strong.color
        } else if status == button::Status::Hovered {
            palette_ext.background.strong.color
        } else {
            palette_ext.background.weak.color
        };

        button::Style {
            background: Some(Background::Color(background)),
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}

/// Tab selector button: underlined brand color when active.
pub fn tab(active: bool) -> impl Fn(&Theme, button::Status) -> button::Style {
    move |theme: &Theme, status: button::Status| {
        let palette_ext = theme.extended_palette();
        let (background, text_color) = if active {
            (
                Some(Background::Color(palette_ext.primary.strong.color)),
                palette_ext.primary.strong.text,
            )
        } else if status == button::Status::Hovered {
            (
                Some(Background::Color(palette_ext.background.weak.color)),
                palette_ext.background.base.text,
            )
        } else {
            (None, palette_ext.background.base.text)
        };

        button::Style {
            background,
            text_color,
            border: Border {
                radius: radius::FULL.into(),
                ..Default::default()
            },
            ..Default::default()
        }
    }
}
