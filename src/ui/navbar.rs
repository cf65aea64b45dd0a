// SPDX-License-Identifier: MPL-2.0
//! Navigation bar module for app-level navigation.
//!
//! The navbar shows one link per page section with the active section
//! highlighted, plus the theme toggle and share buttons on the right. Once
//! the page is scrolled past the threshold, the bar switches to a condensed
//! style with a drop shadow.

use crate::showcase::scroll::Section;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::Vertical,
    widget::{button, Container, Row, Text},
    Element, Length, Theme,
};

/// Contextual data needed to render the navbar.
pub struct ViewContext<'a> {
    /// Name shown as the brand mark on the left.
    pub name: &'a str,
    /// The section currently highlighted.
    pub active_section: Section,
    /// Whether the condensed "scrolled" style applies.
    pub scrolled: bool,
    /// Whether the effective theme is dark (picks the toggle glyph).
    pub is_dark: bool,
}

/// Messages emitted by the navbar.
#[derive(Debug, Clone)]
pub enum Message {
    SectionSelected(Section),
    ToggleTheme,
    ShareProfile,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone)]
pub enum Event {
    JumpTo(Section),
    ToggleTheme,
    ShareProfile,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message) -> Event {
    match message {
        Message::SectionSelected(section) => Event::JumpTo(section),
        Message::ToggleTheme => Event::ToggleTheme,
        Message::ShareProfile => Event::ShareProfile,
    }
}

/// Render the navigation bar.
pub fn view(ctx: &ViewContext<'_>) -> Element<'static, Message> {
    let brand = Text::new(ctx.name.to_string()).size(typography::TITLE_MD);

    let mut links = Row::new().spacing(spacing::MD).align_y(Vertical::Center);
    for section in Section::ALL {
        let active = section == ctx.active_section;
        links = links.push(
            button(Text::new(section.title()).size(typography::BODY))
                .on_press(Message::SectionSelected(section))
                .padding([spacing::XXS, spacing::XS])
                .style(styles::button::link(active)),
        );
    }

    let theme_toggle = button(Text::new(if ctx.is_dark { "☀" } else { "☾" }).size(typography::BODY_LG))
        .on_press(Message::ToggleTheme)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::link(false));

    let share = button(Text::new("⇪").size(typography::BODY_LG))
        .on_press(Message::ShareProfile)
        .padding([spacing::XXS, spacing::XS])
        .style(styles::button::link(false));

    let bar = Row::new()
        .spacing(spacing::LG)
        .align_y(Vertical::Center)
        .push(brand)
        .push(Container::new(links).width(Length::Fill).center_x(Length::Fill))
        .push(theme_toggle)
        .push(share);

    let scrolled = ctx.scrolled;
    Container::new(bar)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
        .padding([spacing::SM, spacing::LG])
        .style(move |theme: &Theme| styles::container::navbar(theme, scrolled))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn section_selection_becomes_a_jump_event() {
        let event = update(Message::SectionSelected(Section::Projects));
        assert!(matches!(event, Event::JumpTo(Section::Projects)));
    }

    #[test]
    fn toggle_and_share_pass_through() {
        assert!(matches!(update(Message::ToggleTheme), Event::ToggleTheme));
        assert!(matches!(update(Message::ShareProfile), Event::ShareProfile));
    }
}
