// SPDX-License-Identifier: MPL-2.0
//! Scroll position tracking for the single-page layout.
//!
//! The page is one tall scrollable; this module derives everything that
//! depends on its offset: the active navigation link, the condensed navbar
//! style, back-to-top visibility, and the one-shot reveal set that triggers
//! entrance animations (stat counters, progress bars) the first time a
//! section scrolls into view.

use crate::config::{
    BACK_TO_TOP_THRESHOLD, NAVBAR_SCROLLED_THRESHOLD, REVEAL_MARGIN, SCROLLSPY_PROBE_OFFSET,
    SCROLL_ANCHOR_OFFSET,
};
use std::collections::HashSet;

/// Sections of the portfolio page, in layout order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Home,
    Skills,
    Projects,
    Certificates,
    Contact,
}

impl Section {
    /// All sections in layout order.
    pub const ALL: [Section; 5] = [
        Section::Home,
        Section::Skills,
        Section::Projects,
        Section::Certificates,
        Section::Contact,
    ];

    /// Navigation label for this section.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::Skills => "Skills",
            Section::Projects => "Projects",
            Section::Certificates => "Certificates",
            Section::Contact => "Contact",
        }
    }
}

/// Tracks the scroll offset and derives scroll-dependent UI state.
///
/// Section boundaries are registered once at construction (the layout uses
/// fixed section heights) as `(section, start_offset)` pairs in ascending
/// order.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    offset: f32,
    viewport_height: f32,
    bounds: Vec<(Section, f32)>,
    revealed: HashSet<Section>,
}

impl ScrollTracker {
    /// Creates a tracker over the given section boundaries.
    #[must_use]
    pub fn new(bounds: Vec<(Section, f32)>, viewport_height: f32) -> Self {
        let mut tracker = Self {
            offset: 0.0,
            viewport_height,
            bounds,
            revealed: HashSet::new(),
        };
        // Sections visible without scrolling reveal immediately
        tracker.collect_reveals();
        tracker
    }

    /// Current scroll offset.
    #[must_use]
    pub fn offset(&self) -> f32 {
        self.offset
    }

    /// Records a new scroll offset and returns the sections that just
    /// became revealed, in layout order. Reveals are one-shot: a section
    /// never returns to the unrevealed state.
    pub fn set_offset(&mut self, offset: f32) -> Vec<Section> {
        self.offset = offset.max(0.0);
        self.collect_reveals()
    }

    /// Records a viewport resize and returns any sections the larger
    /// viewport just revealed.
    pub fn set_viewport_height(&mut self, height: f32) -> Vec<Section> {
        self.viewport_height = height.max(0.0);
        self.collect_reveals()
    }

    /// The section the viewer is currently reading.
    ///
    /// The probe sits slightly below the top edge so a section activates
    /// just before it reaches the top of the window.
    #[must_use]
    pub fn active_section(&self) -> Section {
        let probe = self.offset + SCROLLSPY_PROBE_OFFSET;
        let mut active = Section::Home;
        for &(section, start) in &self.bounds {
            if start <= probe {
                active = section;
            } else {
                break;
            }
        }
        active
    }

    /// Whether the navbar should use its condensed "scrolled" style.
    #[must_use]
    pub fn navbar_scrolled(&self) -> bool {
        self.offset > NAVBAR_SCROLLED_THRESHOLD
    }

    /// Whether the back-to-top button is visible.
    #[must_use]
    pub fn back_to_top_visible(&self) -> bool {
        self.offset > BACK_TO_TOP_THRESHOLD
    }

    /// Scroll anchor for jumping to `section`, leaving headroom for the
    /// navbar.
    #[must_use]
    pub fn anchor_for(&self, section: Section) -> f32 {
        self.bounds
            .iter()
            .find(|(s, _)| *s == section)
            .map_or(0.0, |&(_, start)| (start - SCROLL_ANCHOR_OFFSET).max(0.0))
    }

    /// Whether `section` has ever been scrolled into view.
    #[must_use]
    pub fn is_revealed(&self, section: Section) -> bool {
        self.revealed.contains(&section)
    }

    /// Marks newly visible sections as revealed and returns them in layout
    /// order.
    fn collect_reveals(&mut self) -> Vec<Section> {
        let visible_bottom = self.offset + self.viewport_height - REVEAL_MARGIN;
        let mut fresh = Vec::new();
        for &(section, start) in &self.bounds {
            if start < visible_bottom && self.revealed.insert(section) {
                fresh.push(section);
            }
        }
        fresh
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> ScrollTracker {
        ScrollTracker::new(
            vec![
                (Section::Home, 0.0),
                (Section::Skills, 700.0),
                (Section::Projects, 1400.0),
                (Section::Certificates, 2100.0),
                (Section::Contact, 2800.0),
            ],
            600.0,
        )
    }

    #[test]
    fn home_is_active_at_the_top() {
        let t = tracker();
        assert_eq!(t.active_section(), Section::Home);
    }

    #[test]
    fn active_section_follows_the_offset() {
        let mut t = tracker();
        t.set_offset(700.0);
        assert_eq!(t.active_section(), Section::Skills);
        t.set_offset(2790.0); // probe offset reaches into Contact
        assert_eq!(t.active_section(), Section::Contact);
    }

    #[test]
    fn probe_activates_a_section_slightly_early() {
        let mut t = tracker();
        t.set_offset(560.0); // 560 + 150 probe >= 700
        assert_eq!(t.active_section(), Section::Skills);
        t.set_offset(540.0);
        assert_eq!(t.active_section(), Section::Home);
    }

    #[test]
    fn navbar_and_back_to_top_thresholds() {
        let mut t = tracker();
        assert!(!t.navbar_scrolled());
        assert!(!t.back_to_top_visible());

        t.set_offset(150.0);
        assert!(t.navbar_scrolled());
        assert!(!t.back_to_top_visible());

        t.set_offset(350.0);
        assert!(t.back_to_top_visible());
    }

    #[test]
    fn anchor_leaves_navbar_headroom() {
        let t = tracker();
        assert_eq!(t.anchor_for(Section::Skills), 620.0);
        // Never negative, even for the first section
        assert_eq!(t.anchor_for(Section::Home), 0.0);
    }

    #[test]
    fn sections_above_the_fold_reveal_immediately() {
        let t = tracker();
        assert!(t.is_revealed(Section::Home));
        assert!(!t.is_revealed(Section::Skills));
    }

    #[test]
    fn scrolling_reveals_sections_once() {
        let mut t = tracker();
        let fresh = t.set_offset(200.0);
        assert_eq!(fresh, vec![Section::Skills]);

        // Scrolling back up does not un-reveal, scrolling down again does
        // not re-reveal
        t.set_offset(0.0);
        assert!(t.is_revealed(Section::Skills));
        assert!(t.set_offset(200.0).is_empty());
    }

    #[test]
    fn growing_the_viewport_can_reveal() {
        let mut t = tracker();
        let fresh = t.set_viewport_height(800.0);
        assert_eq!(fresh, vec![Section::Skills]);
    }
}
