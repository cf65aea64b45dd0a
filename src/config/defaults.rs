// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all behavior constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Slideshow**: Auto-advance cadence and swipe detection
//! - **Typewriter**: Headline typing cadence
//! - **Scroll**: Scrollspy and back-to-top thresholds
//! - **Counters**: Stat counter and progress-bar animation
//! - **Particles**: Decorative particle field
//! - **Loader**: Startup splash timing

// ==========================================================================
// Slideshow Defaults
// ==========================================================================

/// Interval between automatic slide advances, in milliseconds.
pub const AUTO_ADVANCE_INTERVAL_MS: u64 = 5000;

/// Minimum horizontal pointer displacement recognized as a swipe, in
/// logical pixels. Smaller deltas are treated as an aborted drag.
pub const SWIPE_THRESHOLD: f32 = 50.0;

// ==========================================================================
// Typewriter Defaults
// ==========================================================================

/// Delay between typed characters, in milliseconds.
pub const TYPE_INTERVAL_MS: u64 = 150;

/// Delay between deleted characters, in milliseconds.
pub const DELETE_INTERVAL_MS: u64 = 100;

/// Hold time on a fully typed phrase before deletion starts, in milliseconds.
pub const HOLD_FULL_MS: u64 = 2000;

/// Hold time on an empty line before the next phrase starts, in milliseconds.
pub const HOLD_EMPTY_MS: u64 = 500;

// ==========================================================================
// Scroll Defaults
// ==========================================================================

/// Scroll offset past which the navbar switches to its condensed style.
pub const NAVBAR_SCROLLED_THRESHOLD: f32 = 100.0;

/// Scroll offset past which the back-to-top button becomes visible.
pub const BACK_TO_TOP_THRESHOLD: f32 = 300.0;

/// Probe offset added to the scroll position when resolving the active
/// section, so a section activates slightly before it reaches the top edge.
pub const SCROLLSPY_PROBE_OFFSET: f32 = 150.0;

/// Offset subtracted from section anchors when jumping, so content is not
/// hidden behind the navbar.
pub const SCROLL_ANCHOR_OFFSET: f32 = 80.0;

/// Margin a section must clear past the viewport bottom before it counts as
/// revealed.
pub const REVEAL_MARGIN: f32 = 50.0;

// ==========================================================================
// Counter / Progress Defaults
// ==========================================================================

/// Number of increments a stat counter takes to reach its target.
pub const COUNTER_STEPS: u32 = 50;

/// Cadence of counter increments, in milliseconds.
pub const COUNTER_TICK_MS: u64 = 40;

/// Progress-bar fill advance per UI tick, in percentage points.
pub const PROGRESS_STEP_PERCENT: f32 = 4.0;

// ==========================================================================
// Particle Defaults
// ==========================================================================

/// Interval between particle spawns, in milliseconds.
pub const PARTICLE_SPAWN_INTERVAL_MS: u64 = 3000;

/// Lifetime of a particle before it is removed, in milliseconds.
pub const PARTICLE_LIFETIME_MS: u64 = 20_000;

/// Number of particles spawned immediately at startup.
pub const PARTICLE_INITIAL_BURST: usize = 5;

/// Minimum particle glyph size, in logical pixels.
pub const PARTICLE_MIN_SIZE: f32 = 10.0;

/// Maximum particle glyph size, in logical pixels.
pub const PARTICLE_MAX_SIZE: f32 = 30.0;

/// Cadence of particle position updates, in milliseconds.
pub const PARTICLE_FRAME_MS: u64 = 50;

// ==========================================================================
// Loader / UI Tick Defaults
// ==========================================================================

/// Delay before the startup splash overlay hides, in milliseconds.
pub const LOADER_HIDE_DELAY_MS: u64 = 1000;

/// Cadence of the shared UI tick (notifications, counters, loader), in
/// milliseconds.
pub const UI_TICK_MS: u64 = 100;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Slideshow validation
    assert!(AUTO_ADVANCE_INTERVAL_MS > 0);
    assert!(SWIPE_THRESHOLD > 0.0);

    // Typewriter validation
    assert!(TYPE_INTERVAL_MS > 0);
    assert!(DELETE_INTERVAL_MS > 0);
    assert!(DELETE_INTERVAL_MS <= TYPE_INTERVAL_MS);
    assert!(HOLD_FULL_MS >= TYPE_INTERVAL_MS);
    assert!(HOLD_EMPTY_MS >= DELETE_INTERVAL_MS);

    // Scroll validation
    assert!(NAVBAR_SCROLLED_THRESHOLD > 0.0);
    assert!(BACK_TO_TOP_THRESHOLD >= NAVBAR_SCROLLED_THRESHOLD);
    assert!(SCROLLSPY_PROBE_OFFSET >= 0.0);
    assert!(SCROLL_ANCHOR_OFFSET >= 0.0);
    assert!(REVEAL_MARGIN >= 0.0);

    // Counter validation
    assert!(COUNTER_STEPS > 0);
    assert!(COUNTER_TICK_MS > 0);
    assert!(PROGRESS_STEP_PERCENT > 0.0);

    // Particle validation
    assert!(PARTICLE_SPAWN_INTERVAL_MS > 0);
    assert!(PARTICLE_LIFETIME_MS > PARTICLE_SPAWN_INTERVAL_MS);
    assert!(PARTICLE_MIN_SIZE > 0.0);
    assert!(PARTICLE_MAX_SIZE >= PARTICLE_MIN_SIZE);
    assert!(PARTICLE_FRAME_MS > 0);

    // Loader validation
    assert!(LOADER_HIDE_DELAY_MS > 0);
    assert!(UI_TICK_MS > 0);
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slideshow_defaults_are_valid() {
        assert_eq!(AUTO_ADVANCE_INTERVAL_MS, 5000);
        assert_eq!(SWIPE_THRESHOLD, 50.0);
    }

    #[test]
    fn typewriter_deletes_faster_than_it_types() {
        assert!(DELETE_INTERVAL_MS < TYPE_INTERVAL_MS);
    }

    #[test]
    fn scroll_thresholds_are_ordered() {
        assert!(NAVBAR_SCROLLED_THRESHOLD < BACK_TO_TOP_THRESHOLD);
    }

    #[test]
    fn counter_defaults_are_valid() {
        assert_eq!(COUNTER_STEPS, 50);
        assert_eq!(COUNTER_TICK_MS, 40);
    }

    #[test]
    fn particle_lifetime_outlasts_spawn_interval() {
        assert!(PARTICLE_LIFETIME_MS > PARTICLE_SPAWN_INTERVAL_MS);
        assert!(PARTICLE_MAX_SIZE > PARTICLE_MIN_SIZE);
    }
}
