// SPDX-License-Identifier: MPL-2.0
//! Behavior state machines for the portfolio page.
//!
//! Everything here is plain state: no widgets, no subscriptions. The app
//! layer forwards input events and timer ticks into these types and the view
//! layer reads them back out.

pub mod carousel;
pub mod counters;
pub mod particles;
pub mod scroll;
pub mod typewriter;

pub use carousel::{Carousel, CarouselInfo};
pub use counters::{ProgressFill, StatCounter};
pub use particles::ParticleField;
pub use scroll::{ScrollTracker, Section};
pub use typewriter::Typewriter;
