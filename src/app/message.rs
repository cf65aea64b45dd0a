// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::ui::carousel_view;
use crate::ui::contact;
use crate::ui::navbar;
use crate::ui::notifications;
use iced::keyboard::Key;
use iced::widget::scrollable;
use std::time::Instant;

/// Top-level messages consumed by the update loop. The variants forward
/// lower-level component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    /// Message from the gallery identified by `id`.
    Carousel {
        id: usize,
        message: carousel_view::Message,
    },
    Contact(contact::Message),
    Notification(notifications::NotificationMessage),
    /// The page scrollable moved.
    Scrolled(scrollable::Viewport),
    /// A key went down anywhere in the window.
    KeyPressed(Key),
    /// Shared UI tick: notification timers, counters, progress, loader.
    Tick(Instant),
    /// Auto-advance tick for all running galleries.
    SlideTick(Instant),
    /// Typewriter cadence tick.
    TypeTick(Instant),
    /// Particle animation frame.
    ParticleTick(Instant),
    /// The floating back-to-top button was pressed.
    BackToTop,
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional path to a TOML content file replacing the built-in
    /// portfolio content.
    pub content: Option<String>,
    /// Optional theme override (`light`, `dark`, or `system`).
    pub theme: Option<String>,
    /// Disable decorative animation regardless of the saved preference.
    pub reduced_motion: bool,
}
