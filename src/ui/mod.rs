// SPDX-License-Identifier: MPL-2.0
//! User interface components and state management.
//!
//! This module organizes all UI-related code following a component-based architecture
//! with the Elm-style "state down, messages up" pattern.
//!
//! # Components
//!
//! - [`navbar`] - Navigation bar with section links and theme toggle
//! - [`carousel_view`] - Gallery rendering (slides, arrows, indicator dots)
//! - [`contact`] - Contact form stub with local validation
//! - [`notifications`] - Toast notification system for user feedback
//!
//! # Shared Infrastructure
//!
//! - [`widgets`] - Custom Iced widgets (particle canvas)
//! - [`styles`] - Centralized styling (buttons, containers)
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod carousel_view;
pub mod contact;
pub mod design_tokens;
pub mod navbar;
pub mod notifications;
pub mod styles;
pub mod theming;
pub mod widgets;
