// SPDX-License-Identifier: MPL-2.0
//! Centralized container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface used for slides, skill groups, and the contact form.
pub fn card(theme: &Theme) -> container::Style {
    let bg = theme.extended_palette().background.weak.color;

    container::Style {
        background: Some(Background::Color(bg)),
        border: Border {
            color: Color {
                a: opacity::OVERLAY_SUBTLE,
                ..palette::GRAY_400
            },
            width: 1.0,
            radius: radius::MD.into(),
        },
        shadow: shadow::SM,
        ..Default::default()
    }
}

/// Hero banner: brand-tinted surface behind the headline and particles.
pub fn hero(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::PRIMARY_700)),
        text_color: Some(palette::WHITE),
        ..Default::default()
    }
}

/// Full-window dimmed overlay used by the startup loader.
pub fn overlay(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::OPAQUE,
            ..base
        })),
        ..Default::default()
    }
}

/// Navbar background; gains a shadow once the page is scrolled.
pub fn navbar(theme: &Theme, scrolled: bool) -> container::Style {
    let base = theme.extended_palette().background.base.color;

    container::Style {
        background: Some(Background::Color(Color {
            a: if scrolled {
                opacity::OPAQUE
            } else {
                opacity::OVERLAY_PRESSED
            },
            ..base
        })),
        shadow: if scrolled { shadow::SM } else { shadow::NONE },
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scrolled_navbar_gains_a_shadow() {
        let theme = Theme::Dark;
        let flat = navbar(&theme, false);
        let scrolled = navbar(&theme, true);
        assert_eq!(flat.shadow.blur_radius, 0.0);
        assert!(scrolled.shadow.blur_radius > 0.0);
    }

    #[test]
    fn hero_uses_brand_surface() {
        let style = hero(&Theme::Light);
        assert!(style.background.is_some());
    }
}
