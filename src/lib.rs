// SPDX-License-Identifier: MPL-2.0
//! `folio` is a personal portfolio showcase built with the Iced GUI framework.
//!
//! It renders a single scrollable page — hero, skills, projects,
//! certificates, contact — and demonstrates timer-driven UI state machines:
//! slide carousels with auto-advance and swipe, a typewriter headline,
//! scroll-triggered entrance animations, and a decorative particle field.

#![doc(html_root_url = "https://docs.rs/folio/0.1.0")]

pub mod app;
pub mod config;
pub mod content;
pub mod error;
pub mod showcase;
pub mod ui;
