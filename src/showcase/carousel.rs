// SPDX-License-Identifier: MPL-2.0
//! Carousel state machine for slide galleries.
//!
//! Each gallery in the page owns one [`Carousel`]. The carousel holds the
//! only mutable navigation state (the current slide index) and translates
//! navigation intents — buttons, indicator clicks, arrow keys, swipes, and
//! auto-advance ticks — into a single deterministic index. Rendering reads
//! the index back through [`Carousel::info`] and marks exactly one slide and
//! one indicator as active.
//!
//! The auto-advance timer itself lives in the application's subscription
//! layer; the carousel only records whether it is running. Pausing gates the
//! effect of a tick without touching the timer, so hovering off a gallery
//! resumes the original schedule instead of restarting the countdown.

use crate::config::SWIPE_THRESHOLD;
use iced::keyboard::key::Named;
use iced::keyboard::Key;

/// Read-only snapshot of a carousel for rendering.
///
/// Contains everything the gallery view needs to draw slides, arrows, and
/// indicator dots without mutable access to the carousel.
#[derive(Debug, Clone, Copy, Default)]
pub struct CarouselInfo {
    /// Index of the active slide.
    pub current_index: usize,
    /// Total number of slides.
    pub slide_count: usize,
    /// Whether the auto-advance timer is running.
    pub auto_running: bool,
    /// Whether ticks are currently suppressed (pointer over the gallery).
    pub paused: bool,
}

/// Cyclic navigation state for one slide gallery.
///
/// The slide count is fixed at construction. The current index always stays
/// in `[0, slide_count)`; navigation wraps at both ends. A carousel with
/// zero or one slide is inert: no operation changes its index and the
/// auto-advance timer never starts.
#[derive(Debug, Clone, PartialEq)]
pub struct Carousel {
    slide_count: usize,
    current: usize,
    running: bool,
    paused: bool,
    /// Horizontal position where an in-flight swipe started.
    swipe_origin: Option<f32>,
}

impl Carousel {
    /// Creates a carousel over `slide_count` slides, starting at index 0.
    #[must_use]
    pub fn new(slide_count: usize) -> Self {
        Self {
            slide_count,
            current: 0,
            running: false,
            paused: false,
            swipe_origin: None,
        }
    }

    /// Returns the index of the active slide.
    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Returns the total number of slides.
    #[must_use]
    pub fn slide_count(&self) -> usize {
        self.slide_count
    }

    /// Whether the auto-advance timer is running.
    #[must_use]
    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Whether ticks are currently suppressed.
    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Whether navigation can change the index at all.
    ///
    /// Galleries with zero or one slide render without controls.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        self.slide_count > 1
    }

    /// Returns a snapshot of the current state for rendering.
    #[must_use]
    pub fn info(&self) -> CarouselInfo {
        CarouselInfo {
            current_index: self.current,
            slide_count: self.slide_count,
            auto_running: self.running,
            paused: self.paused,
        }
    }

    /// Moves to the next slide, wrapping to the first after the last.
    pub fn advance(&mut self) {
        if self.slide_count > 1 {
            self.current = (self.current + 1) % self.slide_count;
        }
    }

    /// Moves to the previous slide, wrapping to the last before the first.
    pub fn retreat(&mut self) {
        if self.slide_count > 1 {
            self.current = (self.current + self.slide_count - 1) % self.slide_count;
        }
    }

    /// Jumps directly to `index` (indicator clicks).
    ///
    /// An out-of-range index is a caller bug; it is clamped to the last
    /// slide and logged rather than propagated, so a stray indicator cannot
    /// take the rest of the page down with it.
    pub fn jump_to(&mut self, index: usize) {
        if self.slide_count == 0 {
            return;
        }
        if index < self.slide_count {
            self.current = index;
        } else {
            let clamped = self.slide_count - 1;
            eprintln!(
                "carousel: slide index {} out of range (0..{}), clamping to {}",
                index, self.slide_count, clamped
            );
            self.current = clamped;
        }
    }

    /// Applies a completed horizontal swipe of `delta_x` logical pixels.
    ///
    /// A leftward swipe past the threshold advances, a rightward one
    /// retreats. Displacements within the threshold are ignored.
    pub fn on_swipe(&mut self, delta_x: f32) {
        if delta_x < -SWIPE_THRESHOLD {
            self.advance();
        } else if delta_x > SWIPE_THRESHOLD {
            self.retreat();
        }
    }

    /// Records the horizontal position where a pointer press started.
    pub fn begin_swipe(&mut self, x: f32) {
        self.swipe_origin = Some(x);
    }

    /// Completes an in-flight swipe at horizontal position `x`.
    ///
    /// No-op when no swipe was started (e.g. the press landed on a button
    /// that captured the event).
    pub fn end_swipe(&mut self, x: f32) {
        if let Some(origin) = self.swipe_origin.take() {
            self.on_swipe(x - origin);
        }
    }

    /// Abandons an in-flight swipe without navigating.
    pub fn cancel_swipe(&mut self) {
        self.swipe_origin = None;
    }

    /// Maps a navigation key to a slide transition.
    ///
    /// Returns `true` when the key was handled. Keys other than the
    /// horizontal arrows are ignored.
    pub fn on_key(&mut self, key: &Key) -> bool {
        match key {
            Key::Named(Named::ArrowLeft) => {
                self.retreat();
                true
            }
            Key::Named(Named::ArrowRight) => {
                self.advance();
                true
            }
            _ => false,
        }
    }

    /// Suppresses auto-advance ticks while the pointer is over the gallery.
    ///
    /// Manual navigation keeps working while paused.
    pub fn pause(&mut self) {
        self.paused = true;
    }

    /// Lifts tick suppression. The timer schedule is untouched, so the next
    /// tick fires on the original cadence.
    pub fn resume(&mut self) {
        self.paused = false;
    }

    /// Starts the auto-advance timer.
    ///
    /// No-op for inert galleries and when already running, so repeated calls
    /// never produce a second timer.
    pub fn start(&mut self) {
        if self.slide_count > 1 {
            self.running = true;
        }
    }

    /// Stops the auto-advance timer. Idempotent.
    ///
    /// Ticks are delivered as messages on the event loop; any tick already
    /// queued when this returns finds `running == false` and has no effect.
    pub fn stop(&mut self) {
        self.running = false;
    }

    /// Processes one auto-advance tick.
    pub fn tick(&mut self) {
        if self.running && !self.paused {
            self.advance();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_carousel_starts_at_first_slide() {
        let carousel = Carousel::new(4);
        assert_eq!(carousel.current_index(), 0);
        assert_eq!(carousel.slide_count(), 4);
        assert!(!carousel.is_running());
        assert!(!carousel.is_paused());
    }

    #[test]
    fn advance_wraps_after_last_slide() {
        let mut carousel = Carousel::new(3);
        carousel.advance();
        carousel.advance();
        assert_eq!(carousel.current_index(), 2);
        carousel.advance();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn retreat_wraps_before_first_slide() {
        let mut carousel = Carousel::new(3);
        carousel.retreat();
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn advancing_slide_count_times_returns_to_start() {
        for start in 0..5 {
            let mut carousel = Carousel::new(5);
            carousel.jump_to(start);
            for _ in 0..5 {
                carousel.advance();
            }
            assert_eq!(carousel.current_index(), start);
        }
    }

    #[test]
    fn advance_then_retreat_restores_index() {
        let mut carousel = Carousel::new(4);
        carousel.jump_to(2);
        carousel.advance();
        carousel.retreat();
        assert_eq!(carousel.current_index(), 2);

        carousel.retreat();
        carousel.advance();
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn index_stays_in_range_under_mixed_operations() {
        let mut carousel = Carousel::new(3);
        carousel.start();
        for step in 0..50 {
            match step % 4 {
                0 => carousel.advance(),
                1 => carousel.retreat(),
                2 => carousel.tick(),
                _ => carousel.jump_to(step % 3),
            }
            assert!(carousel.current_index() < carousel.slide_count());
        }
    }

    #[test]
    fn jump_to_sets_index_directly() {
        let mut carousel = Carousel::new(4);
        carousel.jump_to(2);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn jump_to_out_of_range_clamps_to_last_slide() {
        let mut carousel = Carousel::new(5);
        carousel.jump_to(10);
        assert_eq!(carousel.current_index(), 4);
    }

    #[test]
    fn jump_scenario_with_wrap() {
        let mut carousel = Carousel::new(4);
        carousel.jump_to(2);
        assert_eq!(carousel.current_index(), 2);
        carousel.advance();
        assert_eq!(carousel.current_index(), 3);
        carousel.advance();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn empty_carousel_is_inert() {
        let mut carousel = Carousel::new(0);
        carousel.advance();
        carousel.retreat();
        carousel.jump_to(3);
        carousel.start();
        carousel.tick();
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_running());
        assert!(!carousel.is_interactive());
    }

    #[test]
    fn single_slide_carousel_is_inert() {
        let mut carousel = Carousel::new(1);
        carousel.advance();
        carousel.retreat();
        carousel.start();
        carousel.tick();
        carousel.tick();
        assert_eq!(carousel.current_index(), 0);
        assert!(!carousel.is_running());
        assert!(!carousel.is_interactive());
    }

    #[test]
    fn swipe_below_threshold_is_ignored() {
        let mut carousel = Carousel::new(3);
        carousel.on_swipe(-49.0);
        assert_eq!(carousel.current_index(), 0);
        carousel.on_swipe(49.0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn swipe_left_past_threshold_advances_once() {
        let mut carousel = Carousel::new(3);
        carousel.on_swipe(-51.0);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn swipe_right_past_threshold_retreats_once() {
        let mut carousel = Carousel::new(3);
        carousel.on_swipe(51.0);
        assert_eq!(carousel.current_index(), 2);
    }

    #[test]
    fn begin_and_end_swipe_use_the_displacement() {
        let mut carousel = Carousel::new(3);
        carousel.begin_swipe(200.0);
        carousel.end_swipe(120.0); // moved 80px left
        assert_eq!(carousel.current_index(), 1);

        // A short drag does not navigate
        carousel.begin_swipe(200.0);
        carousel.end_swipe(190.0);
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn end_swipe_without_begin_is_a_no_op() {
        let mut carousel = Carousel::new(3);
        carousel.end_swipe(500.0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn cancel_swipe_discards_the_origin() {
        let mut carousel = Carousel::new(3);
        carousel.begin_swipe(200.0);
        carousel.cancel_swipe();
        carousel.end_swipe(0.0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn arrow_keys_navigate() {
        let mut carousel = Carousel::new(3);
        assert!(carousel.on_key(&Key::Named(Named::ArrowRight)));
        assert_eq!(carousel.current_index(), 1);
        assert!(carousel.on_key(&Key::Named(Named::ArrowLeft)));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut carousel = Carousel::new(3);
        assert!(!carousel.on_key(&Key::Named(Named::Enter)));
        assert!(!carousel.on_key(&Key::Character("a".into())));
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn tick_advances_when_running() {
        let mut carousel = Carousel::new(3);
        carousel.start();
        carousel.tick();
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn tick_is_ignored_when_stopped() {
        let mut carousel = Carousel::new(3);
        carousel.tick();
        assert_eq!(carousel.current_index(), 0);

        carousel.start();
        carousel.stop();
        carousel.tick();
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn pause_suppresses_ticks_until_resume() {
        let mut carousel = Carousel::new(3);
        carousel.start();
        carousel.pause();
        carousel.tick();
        carousel.tick();
        carousel.tick();
        assert_eq!(carousel.current_index(), 0);

        carousel.resume();
        carousel.tick();
        assert_eq!(carousel.current_index(), 1);
    }

    #[test]
    fn manual_navigation_works_while_paused() {
        let mut carousel = Carousel::new(3);
        carousel.start();
        carousel.pause();
        carousel.advance();
        assert_eq!(carousel.current_index(), 1);
        carousel.on_swipe(51.0);
        assert_eq!(carousel.current_index(), 0);
    }

    #[test]
    fn start_twice_keeps_a_single_timer() {
        let mut carousel = Carousel::new(3);
        carousel.start();
        carousel.start();
        assert!(carousel.is_running());

        // One stop is enough to cancel it
        carousel.stop();
        assert!(!carousel.is_running());
    }

    #[test]
    fn stop_is_idempotent() {
        let mut carousel = Carousel::new(3);
        carousel.stop();
        carousel.stop();
        assert!(!carousel.is_running());
    }

    #[test]
    fn info_snapshot_matches_state() {
        let mut carousel = Carousel::new(4);
        carousel.start();
        carousel.pause();
        carousel.jump_to(3);

        let info = carousel.info();
        assert_eq!(info.current_index, 3);
        assert_eq!(info.slide_count, 4);
        assert!(info.auto_running);
        assert!(info.paused);
    }
}
