// SPDX-License-Identifier: MPL-2.0
//! Typewriter effect for the hero headline.
//!
//! Cycles through a fixed list of phrases: each phrase is typed out one
//! character at a time, held, deleted, and replaced by the next one, wrapping
//! around the list forever. The cadence differs per phase (deleting is faster
//! than typing, holds are long), so the driving subscription asks
//! [`Typewriter::current_delay`] after every tick.

use crate::config::{DELETE_INTERVAL_MS, HOLD_EMPTY_MS, HOLD_FULL_MS, TYPE_INTERVAL_MS};
use std::time::Duration;

/// Phase of the type/hold/delete/hold loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    /// Adding one character per tick.
    Typing,
    /// Full phrase on screen, waiting before deletion.
    HoldingFull,
    /// Removing one character per tick.
    Deleting,
    /// Empty line, waiting before the next phrase.
    HoldingEmpty,
}

/// Cyclic typewriter animation over a list of phrases.
///
/// A typewriter constructed with no phrases is inert: ticks do nothing and
/// the visible text stays empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Typewriter {
    phrases: Vec<String>,
    phrase_index: usize,
    /// Number of characters of the current phrase on screen.
    char_count: usize,
    phase: Phase,
}

impl Typewriter {
    /// Creates a typewriter over `phrases`, starting empty on the first one.
    #[must_use]
    pub fn new(phrases: Vec<String>) -> Self {
        Self {
            phrases,
            phrase_index: 0,
            char_count: 0,
            phase: Phase::Typing,
        }
    }

    /// Whether the animation has anything to show.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.phrases.is_empty()
    }

    /// Index of the phrase currently being typed or deleted.
    #[must_use]
    pub fn phrase_index(&self) -> usize {
        self.phrase_index
    }

    /// The currently visible prefix of the current phrase.
    #[must_use]
    pub fn visible_text(&self) -> &str {
        match self.phrases.get(self.phrase_index) {
            Some(phrase) => {
                // char_count counts characters, not bytes
                match phrase.char_indices().nth(self.char_count) {
                    Some((byte_index, _)) => &phrase[..byte_index],
                    None => phrase,
                }
            }
            None => "",
        }
    }

    /// Delay until the next tick, depending on the current phase.
    #[must_use]
    pub fn current_delay(&self) -> Duration {
        let millis = match self.phase {
            Phase::Typing => TYPE_INTERVAL_MS,
            Phase::HoldingFull => HOLD_FULL_MS,
            Phase::Deleting => DELETE_INTERVAL_MS,
            Phase::HoldingEmpty => HOLD_EMPTY_MS,
        };
        Duration::from_millis(millis)
    }

    /// Advances the animation by one step.
    pub fn tick(&mut self) {
        let Some(phrase) = self.phrases.get(self.phrase_index) else {
            return;
        };
        let phrase_len = phrase.chars().count();

        match self.phase {
            Phase::Typing => {
                if self.char_count < phrase_len {
                    self.char_count += 1;
                }
                if self.char_count >= phrase_len {
                    self.phase = Phase::HoldingFull;
                }
            }
            Phase::HoldingFull => {
                self.phase = Phase::Deleting;
            }
            Phase::Deleting => {
                if self.char_count > 0 {
                    self.char_count -= 1;
                }
                if self.char_count == 0 {
                    self.phase = Phase::HoldingEmpty;
                }
            }
            Phase::HoldingEmpty => {
                self.phrase_index = (self.phrase_index + 1) % self.phrases.len();
                self.char_count = 0;
                self.phase = Phase::Typing;
            }
        }
    }
}
