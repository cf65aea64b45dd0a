// SPDX-License-Identifier: MPL-2.0
//! Gallery rendering for carousels.
//!
//! This is the render side of [`crate::showcase::carousel`]: it draws the
//! active slide, the prev/next arrows, and one indicator dot per slide, and
//! turns raw pointer interaction (enter/leave, press/release, movement) into
//! carousel messages. Exactly one slide and one indicator are marked active;
//! re-rendering the same index is visually idempotent because the whole
//! gallery is rebuilt from the snapshot on every view pass.

use crate::content::Slide;
use crate::showcase::carousel::CarouselInfo;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::styles;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, mouse_area, Column, Container, Row, Text},
    Element, Length, Point, Theme,
};

/// Messages emitted by a gallery.
#[derive(Debug, Clone)]
pub enum Message {
    Next,
    Prev,
    JumpTo(usize),
    PointerEntered,
    PointerExited,
    SwipeBegan,
    SwipeEnded,
    CursorMoved(Point),
}

/// Contextual data needed to render one gallery.
pub struct ViewContext<'a> {
    pub info: CarouselInfo,
    pub slides: &'a [Slide],
}

/// Active flag per indicator dot.
///
/// Kept separate from the widget code so the single-active contract is
/// directly testable: exactly one entry is `true` for any non-empty gallery.
#[must_use]
pub fn indicator_states(info: CarouselInfo) -> Vec<bool> {
    (0..info.slide_count)
        .map(|index| index == info.current_index)
        .collect()
}

/// Render a gallery: slide card, arrows, and indicator dots.
pub fn view<'a>(ctx: &ViewContext<'a>) -> Element<'a, Message> {
    let info = ctx.info;
    let slide = ctx.slides.get(info.current_index);

    let slide_card: Element<'a, Message> = match slide {
        Some(slide) => Column::new()
            .spacing(spacing::SM)
            .align_x(Horizontal::Center)
            .push(Text::new(slide.title.as_str()).size(typography::TITLE_MD))
            .push(
                Text::new(slide.caption.as_str())
                    .size(typography::BODY)
                    .style(|theme: &Theme| iced::widget::text::Style {
                        color: Some(theme.extended_palette().background.weak.text),
                    }),
            )
            .into(),
        None => Text::new("No slides").size(typography::BODY).into(),
    };

    let slide_area = Container::new(slide_card)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::CAROUSEL_HEIGHT))
        .center_x(Length::Fill)
        .center_y(Length::Fixed(sizing::CAROUSEL_HEIGHT))
        .style(|theme: &Theme| styles::container::card(theme));

    // Pointer tracking feeds hover pause and swipe displacement
    let interactive_slide = mouse_area(slide_area)
        .on_enter(Message::PointerEntered)
        .on_exit(Message::PointerExited)
        .on_press(Message::SwipeBegan)
        .on_release(Message::SwipeEnded)
        .on_move(Message::CursorMoved);

    let mut gallery = Column::new().spacing(spacing::SM).align_x(Horizontal::Center);

    if info.slide_count > 1 {
        let arrow = |label: &'static str, message: Message| {
            button(Text::new(label).size(typography::TITLE_MD))
                .on_press(message)
                .padding([spacing::XXS, spacing::SM])
                .style(styles::button::overlay(
                    palette::WHITE,
                    opacity::OVERLAY_MEDIUM,
                    opacity::OVERLAY_HOVER,
                ))
        };

        let strip = Row::new()
            .spacing(spacing::SM)
            .align_y(Vertical::Center)
            .push(arrow("‹", Message::Prev))
            .push(interactive_slide)
            .push(arrow("›", Message::Next));
        gallery = gallery.push(strip);

        let mut dots = Row::new().spacing(spacing::XS);
        for (index, active) in indicator_states(info).into_iter().enumerate() {
            dots = dots.push(
                button(Text::new("").size(1.0))
                    .width(Length::Fixed(sizing::INDICATOR_SIZE))
                    .height(Length::Fixed(sizing::INDICATOR_SIZE))
                    .on_press(Message::JumpTo(index))
                    .style(styles::button::indicator(active)),
            );
        }
        gallery = gallery.push(dots);
    } else {
        // Single-slide and empty galleries render without controls
        gallery = gallery.push(interactive_slide);
    }

    gallery.into()
}
