// SPDX-License-Identifier: MPL-2.0
//! Update logic and message handlers for the application.
//!
//! This module contains the main `update` function and the specialized
//! handlers for each part of the page. Handlers mutate the behavior state
//! machines and return tasks only for real side effects (scroll jumps,
//! clipboard writes).

use super::{page_scroll_id, App, Message};
use crate::config;
use crate::config::{LOADER_HIDE_DELAY_MS, PARTICLE_FRAME_MS};
use crate::showcase::scroll::Section;
use crate::ui::carousel_view;
use crate::ui::contact;
use crate::ui::navbar;
use crate::ui::notifications::Notification;
use iced::widget::operation::scroll_to;
use iced::widget::scrollable::{self, AbsoluteOffset};
use iced::Task;
use std::time::Duration;

/// Dispatches a top-level message to its handler.
pub fn update(app: &mut App, message: Message) -> Task<Message> {
    match message {
        Message::Navbar(message) => handle_navbar(app, message),
        Message::Carousel { id, message } => {
            handle_carousel(app, id, message);
            Task::none()
        }
        Message::Contact(message) => {
            handle_contact(app, message);
            Task::none()
        }
        Message::Notification(message) => {
            app.notifications.handle_message(&message);
            Task::none()
        }
        Message::Scrolled(viewport) => {
            handle_scroll(app, &viewport);
            Task::none()
        }
        Message::KeyPressed(key) => {
            // Arrow keys act on the gallery under the pointer
            if let Some(id) = app.hovered_carousel {
                if let Some(carousel) = app.carousels.get_mut(id) {
                    carousel.on_key(&key);
                }
            }
            Task::none()
        }
        Message::Tick(_) => {
            handle_ui_tick(app);
            Task::none()
        }
        Message::SlideTick(_) => {
            for carousel in &mut app.carousels {
                carousel.tick();
            }
            Task::none()
        }
        Message::TypeTick(_) => {
            app.typewriter.tick();
            Task::none()
        }
        Message::ParticleTick(_) => {
            app.particles
                .step(Duration::from_millis(PARTICLE_FRAME_MS));
            Task::none()
        }
        Message::BackToTop => scroll_to_offset(0.0),
    }
}

/// Handles navbar events: section jumps, the theme toggle, and sharing.
fn handle_navbar(app: &mut App, message: navbar::Message) -> Task<Message> {
    match navbar::update(message) {
        navbar::Event::JumpTo(section) => scroll_to_offset(app.scroll.anchor_for(section)),
        navbar::Event::ToggleTheme => {
            app.theme_mode = app.theme_mode.toggled();
            save_preferences(app);
            Task::none()
        }
        navbar::Event::ShareProfile => {
            app.notifications
                .push(Notification::info("Portfolio link copied to clipboard!"));
            iced::clipboard::write(app.content.contact.profile_url.clone())
        }
    }
}

/// Routes a gallery message to the carousel it addresses.
fn handle_carousel(app: &mut App, id: usize, message: carousel_view::Message) {
    let Some(carousel) = app.carousels.get_mut(id) else {
        eprintln!("Message for unknown gallery {}", id);
        return;
    };

    match message {
        carousel_view::Message::Next => carousel.advance(),
        carousel_view::Message::Prev => carousel.retreat(),
        carousel_view::Message::JumpTo(index) => carousel.jump_to(index),
        carousel_view::Message::PointerEntered => {
            app.hovered_carousel = Some(id);
            carousel.pause();
        }
        carousel_view::Message::PointerExited => {
            if app.hovered_carousel == Some(id) {
                app.hovered_carousel = None;
            }
            // A drag that leaves the gallery is abandoned, not completed
            carousel.cancel_swipe();
            carousel.resume();
        }
        carousel_view::Message::SwipeBegan => carousel.begin_swipe(app.cursor_x),
        carousel_view::Message::SwipeEnded => carousel.end_swipe(app.cursor_x),
        carousel_view::Message::CursorMoved(position) => app.cursor_x = position.x,
    }
}

/// Handles contact form events, acknowledging submissions with a toast.
fn handle_contact(app: &mut App, message: contact::Message) {
    match app.contact.update(message) {
        contact::Event::None => {}
        contact::Event::Submitted => {
            app.notifications
                .push(Notification::success("Message sent — thank you!"));
        }
        contact::Event::Invalid(reason) => {
            app.notifications.push(Notification::warning(reason));
        }
    }
}

/// Feeds a scroll viewport change into the tracker and fires entrance
/// animations for newly revealed sections.
fn handle_scroll(app: &mut App, viewport: &scrollable::Viewport) {
    let mut fresh = app.scroll.set_offset(viewport.absolute_offset().y);
    fresh.extend(app.scroll.set_viewport_height(viewport.bounds().height));

    for section in fresh {
        on_section_revealed(app, section);
    }
}

/// Starts the entrance animation tied to a section's first appearance.
pub(super) fn on_section_revealed(app: &mut App, section: Section) {
    match section {
        Section::Home => {
            for counter in &mut app.counters {
                counter.start();
            }
        }
        Section::Skills => {
            for fill in &mut app.progress {
                fill.start();
            }
        }
        Section::Projects | Section::Certificates | Section::Contact => {}
    }
}

/// Advances everything driven by the shared UI tick.
fn handle_ui_tick(app: &mut App) {
    app.notifications.tick();

    for counter in &mut app.counters {
        counter.tick();
    }
    for fill in &mut app.progress {
        fill.tick();
    }

    if app.loading
        && app.loader_started.elapsed() >= Duration::from_millis(LOADER_HIDE_DELAY_MS)
    {
        app.loading = false;
    }
}

/// Persists the current preferences, logging instead of failing: losing a
/// preference write must never take the UI down.
fn save_preferences(app: &App) {
    let config = config::Config {
        theme: Some(app.theme_mode),
        reduced_motion: Some(app.reduced_motion),
    };
    if let Err(error) = config::save(&config) {
        eprintln!("Failed to save config: {:?}", error);
    }
}

/// Snap-jumps the page scrollable to a vertical offset.
fn scroll_to_offset(y: f32) -> Task<Message> {
    scroll_to::<Message>(page_scroll_id(), AbsoluteOffset { x: 0.0, y })
}
