// SPDX-License-Identifier: MPL-2.0
//! Appearance of the slider and its value popup.

use crate::ui::design_tokens::{opacity, palette, sizing};
use iced::{Color, Theme};

/// Interaction state used to pick a style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    Active,
    Hovered,
    Dragged,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Style {
    /// Rail left of the thumb.
    pub rail_active: Color,
    /// Rail right of the thumb.
    pub rail_inactive: Color,
    pub rail_width: f32,
    pub thumb: Color,
    pub thumb_border: Color,
    pub thumb_border_width: f32,
    pub bubble_background: Color,
    pub bubble_text: Color,
}

/// A style function, in the shape Iced's built-in widgets use.
pub type StyleFn<'a> = Box<dyn Fn(&Theme, Status) -> Style + 'a>;

/// Theme-derived rail and thumb with a translucent black bubble.
#[must_use]
pub fn default(theme: &Theme, status: Status) -> Style {
    let palette = theme.extended_palette();

    let thumb = match status {
        Status::Active => palette.primary.base.color,
        Status::Hovered => palette.primary.strong.color,
        Status::Dragged => palette.primary.weak.color,
    };

    Style {
        rail_active: palette.primary.base.color,
        rail_inactive: palette.background.strong.color,
        rail_width: sizing::SLIDER_RAIL,
        thumb,
        thumb_border: palette.background.base.color,
        thumb_border_width: 2.0,
        bubble_background: Color {
            a: opacity::POPUP,
            ..palette::BLACK
        },
        bubble_text: palette::WHITE,
    }
}

/// Fixed brand colours, independent of the theme palette.
#[must_use]
pub fn brand(theme: &Theme, status: Status) -> Style {
    let is_light = matches!(theme, Theme::Light);

    let thumb = match status {
        Status::Active => palette::PRIMARY_500,
        Status::Hovered => palette::PRIMARY_400,
        Status::Dragged => palette::PRIMARY_600,
    };

    Style {
        rail_active: palette::PRIMARY_500,
        rail_inactive: if is_light {
            palette::GRAY_200
        } else {
            palette::GRAY_700
        },
        thumb,
        thumb_border: if is_light {
            palette::WHITE
        } else {
            palette::GRAY_900
        },
        ..default(theme, status)
    }
}

impl Style {
    /// Bubble colours with `alpha` applied on top of their own opacity.
    #[must_use]
    pub fn faded_bubble(&self, alpha: f32) -> (Color, Color) {
        let alpha = alpha.clamp(opacity::TRANSPARENT, opacity::OPAQUE);
        (
            Color {
                a: self.bubble_background.a * alpha,
                ..self.bubble_background
            },
            Color {
                a: self.bubble_text.a * alpha,
                ..self.bubble_text
            },
        )
    }
}
