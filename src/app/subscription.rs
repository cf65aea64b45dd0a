// SPDX-License-Identifier: MPL-2.0
//! Event subscriptions for the application.
//!
//! Every timer in the page is a subscription that exists only while the
//! state it drives is active: galleries subscribe to the auto-advance tick
//! only while at least one carousel is running, the UI tick runs only while
//! something (loader, toast, counter) still animates. Stopping a timer is
//! therefore a state change, not an imperative cancel — a tick already in
//! flight finds the flag cleared and does nothing.

use super::{App, Message};
use crate::config::{AUTO_ADVANCE_INTERVAL_MS, PARTICLE_FRAME_MS, UI_TICK_MS};
use crate::showcase::{Carousel, ProgressFill, StatCounter};
use iced::{event, keyboard, time, Event, Subscription};
use std::time::Duration;

/// Builds the full subscription set for the current state.
pub fn subscription(app: &App) -> Subscription<Message> {
    let mut subscriptions = vec![event::listen_with(|event, status, _window| {
        match (event, status) {
            (Event::Keyboard(keyboard::Event::KeyPressed { key, .. }), event::Status::Ignored) => {
                Some(Message::KeyPressed(key))
            }
            _ => None,
        }
    })];

    if app.carousels.iter().any(Carousel::is_running) {
        subscriptions.push(
            time::every(Duration::from_millis(AUTO_ADVANCE_INTERVAL_MS))
                .map(Message::SlideTick),
        );
    }

    if app.typewriter.is_active() && !app.loading {
        // The cadence changes per phase; a new delay is a new subscription
        subscriptions.push(time::every(app.typewriter.current_delay()).map(Message::TypeTick));
    }

    if app.particles.is_active() {
        subscriptions
            .push(time::every(Duration::from_millis(PARTICLE_FRAME_MS)).map(Message::ParticleTick));
    }

    if needs_ui_tick(app) {
        subscriptions.push(time::every(Duration::from_millis(UI_TICK_MS)).map(Message::Tick));
    }

    Subscription::batch(subscriptions)
}

/// Whether anything driven by the shared UI tick is still in flight.
fn needs_ui_tick(app: &App) -> bool {
    app.loading
        || app.notifications.has_notifications()
        || app.counters.iter().any(StatCounter::is_animating)
        || app.progress.iter().any(ProgressFill::is_animating)
}
