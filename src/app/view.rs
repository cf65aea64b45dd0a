// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The page is one scrollable column of fixed-height sections under a
//! pinned navbar. Floating layers (back-to-top, toasts, the startup loader)
//! sit on a stack above it.

use super::{page_scroll_id, App, Message};
use crate::showcase::carousel::CarouselInfo;
use crate::ui::carousel_view;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::navbar;
use crate::ui::notifications::Toast;
use crate::ui::styles;
use crate::ui::widgets::ParticleCanvas;
use iced::{
    alignment::{Horizontal, Vertical},
    widget::{button, container, progress_bar, scrollable, Column, Container, Row, Stack, Text},
    Element, Length, Theme,
};

/// Renders the whole window.
pub fn view(app: &App) -> Element<'_, Message> {
    let navbar_view = navbar::view(&navbar::ViewContext {
        name: &app.content.name,
        active_section: app.scroll.active_section(),
        scrolled: app.scroll.navbar_scrolled(),
        is_dark: app.theme_mode.is_dark(),
    })
    .map(Message::Navbar);

    let page = scrollable(
        Column::new()
            .push(hero(app))
            .push(skills(app))
            .push(projects(app))
            .push(certificates(app))
            .push(contact_section(app)),
    )
    .id(page_scroll_id())
    .on_scroll(Message::Scrolled)
    .width(Length::Fill)
    .height(Length::Fill);

    let base = Column::new()
        .push(navbar_view)
        .push(page)
        .width(Length::Fill)
        .height(Length::Fill);

    let mut layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fill)
        .push(base);

    if app.scroll.back_to_top_visible() {
        layers = layers.push(back_to_top());
    }

    layers = layers.push(Toast::view_overlay(&app.notifications).map(Message::Notification));

    if app.loading {
        layers = layers.push(loader(app));
    }

    layers.into()
}

/// Fixed-height wrapper shared by every section; the heights feed the
/// scrollspy boundaries.
fn section_container(height: f32, content: Element<'_, Message>) -> Element<'_, Message> {
    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .center_x(Length::Fill)
        .padding([spacing::XL, spacing::XXL])
        .into()
}

fn section_title(title: &str) -> Element<'static, Message> {
    Text::new(title.to_string())
        .size(typography::TITLE_LG)
        .into()
}

/// Hero banner: particles behind, headline and stats in front.
fn hero(app: &App) -> Element<'_, Message> {
    let headline = Column::new()
        .spacing(spacing::MD)
        .align_x(Horizontal::Center)
        .push(
            Text::new(format!("Hi, I'm {}", app.content.name)).size(typography::DISPLAY),
        )
        .push(
            // Trailing caret stands in for the blinking cursor
            Text::new(format!("{}▌", app.typewriter.visible_text()))
                .size(typography::TITLE_SM)
                .style(|_theme: &Theme| iced::widget::text::Style {
                    color: Some(palette::PRIMARY_200),
                }),
        )
        .push(stats_row(app));

    let centered = Container::new(headline)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill);

    let mut hero_layers = Stack::new()
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SECTION_HERO_HEIGHT));
    if app.particles.is_active() {
        hero_layers = hero_layers.push(ParticleCanvas::new(&app.particles).into_element());
    }
    hero_layers = hero_layers.push(centered);

    Container::new(hero_layers)
        .width(Length::Fill)
        .height(Length::Fixed(sizing::SECTION_HERO_HEIGHT))
        .style(|theme: &Theme| styles::container::hero(theme))
        .into()
}

fn stats_row(app: &App) -> Element<'_, Message> {
    let mut row = Row::new().spacing(spacing::XXL);
    for (stat, counter) in app.content.stats.iter().zip(&app.counters) {
        row = row.push(
            Column::new()
                .align_x(Horizontal::Center)
                .spacing(spacing::XXS)
                .push(Text::new(counter.display()).size(typography::TITLE_LG))
                .push(
                    Text::new(stat.label.as_str())
                        .size(typography::CAPTION)
                        .style(|_theme: &Theme| iced::widget::text::Style {
                            color: Some(palette::PRIMARY_100),
                        }),
                ),
        );
    }
    row.into()
}

/// Skill categories with animated proficiency bars.
fn skills(app: &App) -> Element<'_, Message> {
    let mut cards = Row::new().spacing(spacing::LG);
    let mut fill_index = 0;

    for category in &app.content.skills {
        let mut card = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(category.name.as_str()).size(typography::TITLE_SM));

        for skill in &category.skills {
            let percent = app
                .progress
                .get(fill_index)
                .map_or(0.0, |fill| fill.percent());
            fill_index += 1;

            card = card
                .push(
                    Row::new()
                        .push(Text::new(skill.name.as_str()).size(typography::BODY))
                        .push(
                            Container::new(
                                Text::new(format!("{:.0}%", skill.level))
                                    .size(typography::CAPTION),
                            )
                            .width(Length::Fill)
                            .align_x(Horizontal::Right),
                        ),
                )
                .push(
                    container(progress_bar(0.0..=100.0, percent))
                        .width(Length::Fill)
                        .height(Length::Fixed(6.0)),
                );
        }

        cards = cards.push(
            Container::new(card)
                .width(Length::FillPortion(1))
                .padding(spacing::LG)
                .style(|theme: &Theme| styles::container::card(theme)),
        );
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(section_title("Skills"))
        .push(cards);

    section_container(sizing::SECTION_SKILLS_HEIGHT, content.into())
}

/// Project cards, each with its slide gallery.
fn projects(app: &App) -> Element<'_, Message> {
    let mut cards = Row::new().spacing(spacing::LG);

    for (id, project) in app.content.projects.iter().enumerate() {
        let info = gallery_info(app, id);

        let mut tags = Row::new().spacing(spacing::XS);
        for tag in &project.tags {
            tags = tags.push(
                Text::new(tag.as_str())
                    .size(typography::CAPTION)
                    .style(|_theme: &Theme| iced::widget::text::Style {
                        color: Some(palette::PRIMARY_400),
                    }),
            );
        }

        let card = Column::new()
            .spacing(spacing::SM)
            .push(Text::new(project.title.as_str()).size(typography::TITLE_MD))
            .push(Text::new(project.summary.as_str()).size(typography::BODY))
            .push(tags)
            .push(
                carousel_view::view(&carousel_view::ViewContext {
                    info,
                    slides: &project.slides,
                })
                .map(move |message| Message::Carousel { id, message }),
            );

        cards = cards.push(
            Container::new(card)
                .width(Length::FillPortion(1))
                .padding(spacing::LG)
                .style(|theme: &Theme| styles::container::card(theme)),
        );
    }

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(section_title("Projects"))
        .push(cards);

    section_container(sizing::SECTION_PROJECTS_HEIGHT, content.into())
}

/// Certificate gallery; its carousel sits after the project carousels.
fn certificates(app: &App) -> Element<'_, Message> {
    let id = app.content.projects.len();
    let info = gallery_info(app, id);

    let gallery = carousel_view::view(&carousel_view::ViewContext {
        info,
        slides: &app.content.certificates,
    })
    .map(move |message| Message::Carousel { id, message });

    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(section_title("Certificates"))
        .push(Container::new(gallery).width(Length::Fixed(sizing::CONTENT_WIDTH)));

    section_container(sizing::SECTION_CERTIFICATES_HEIGHT, content.into())
}

fn contact_section(app: &App) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::LG)
        .align_x(Horizontal::Center)
        .push(section_title("Contact"))
        .push(app.contact.view(&app.content.contact).map(Message::Contact));

    section_container(sizing::SECTION_CONTACT_HEIGHT, content.into())
}

fn gallery_info(app: &App, id: usize) -> CarouselInfo {
    app.carousels
        .get(id)
        .map(crate::showcase::Carousel::info)
        .unwrap_or_default()
}

/// Floating back-to-top button, bottom-left so it never overlaps toasts.
fn back_to_top() -> Element<'static, Message> {
    let jump = button(Text::new("↑").size(typography::TITLE_MD))
        .on_press(Message::BackToTop)
        .padding([spacing::XS, spacing::SM])
        .style(styles::button::overlay(
            palette::WHITE,
            opacity::OVERLAY_MEDIUM,
            opacity::OVERLAY_HOVER,
        ));

    Container::new(jump)
        .width(Length::Fill)
        .height(Length::Fill)
        .align_x(Horizontal::Left)
        .align_y(Vertical::Bottom)
        .padding(spacing::MD)
        .into()
}

/// Startup splash overlay; hides shortly after boot.
fn loader(app: &App) -> Element<'_, Message> {
    let content = Column::new()
        .spacing(spacing::SM)
        .align_x(Horizontal::Center)
        .push(Text::new(app.content.name.as_str()).size(typography::TITLE_LG))
        .push(
            Text::new("Loading…")
                .size(typography::BODY)
                .style(|theme: &Theme| iced::widget::text::Style {
                    color: Some(theme.extended_palette().background.weak.text),
                }),
        );

    Container::new(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .center_x(Length::Fill)
        .center_y(Length::Fill)
        .style(|theme: &Theme| styles::container::overlay(theme))
        .into()
}
