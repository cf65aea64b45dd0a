// SPDX-License-Identifier: MPL-2.0
//! Decorative particle field for the hero background.
//!
//! Small data-themed glyphs rise from the bottom of the hero section,
//! drifting sideways and fading in and out over a fixed lifetime. The field
//! is purely decorative: it is skipped entirely when reduced motion is
//! enabled, and nothing else observes its state.

use crate::config::{
    PARTICLE_INITIAL_BURST, PARTICLE_LIFETIME_MS, PARTICLE_MAX_SIZE, PARTICLE_MIN_SIZE,
    PARTICLE_SPAWN_INTERVAL_MS,
};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Glyph drawn for a particle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Glyph {
    ChartBar,
    ChartLine,
    ChartPie,
    Database,
    Table,
    Calculator,
}

impl Glyph {
    const ALL: [Glyph; 6] = [
        Glyph::ChartBar,
        Glyph::ChartLine,
        Glyph::ChartPie,
        Glyph::Database,
        Glyph::Table,
        Glyph::Calculator,
    ];

    /// Character rendered on the canvas for this glyph.
    #[must_use]
    pub fn symbol(self) -> char {
        match self {
            Glyph::ChartBar => '▮',
            Glyph::ChartLine => '╱',
            Glyph::ChartPie => '◔',
            Glyph::Database => '⛁',
            Glyph::Table => '▦',
            Glyph::Calculator => '∑',
        }
    }
}

/// One floating glyph.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    glyph: Glyph,
    /// Horizontal spawn position as a fraction of the field width.
    x_frac: f32,
    /// Total sideways drift over a full lifetime, as a width fraction.
    drift_frac: f32,
    /// Glyph size in logical pixels.
    size: f32,
    /// Elapsed lifetime in milliseconds.
    age_ms: f32,
}

impl Particle {
    /// Fraction of the lifetime elapsed, in `[0, 1]`.
    #[must_use]
    pub fn progress(&self) -> f32 {
        (self.age_ms / PARTICLE_LIFETIME_MS as f32).clamp(0.0, 1.0)
    }

    /// Horizontal position as a width fraction, including drift.
    #[must_use]
    pub fn x_frac(&self) -> f32 {
        self.x_frac + self.drift_frac * self.progress()
    }

    /// Vertical position as a height fraction: 1.0 at the bottom edge,
    /// 0.0 at the top.
    #[must_use]
    pub fn y_frac(&self) -> f32 {
        1.0 - self.progress()
    }

    /// Opacity ramp: fade in over the first tenth of the lifetime, fade
    /// out over the last tenth.
    #[must_use]
    pub fn opacity(&self) -> f32 {
        let p = self.progress();
        if p < 0.1 {
            p * 10.0
        } else if p > 0.9 {
            (1.0 - p) * 10.0
        } else {
            1.0
        }
    }

    #[must_use]
    pub fn glyph(&self) -> Glyph {
        self.glyph
    }

    #[must_use]
    pub fn size(&self) -> f32 {
        self.size
    }

    fn is_expired(&self) -> bool {
        self.age_ms >= PARTICLE_LIFETIME_MS as f32
    }
}

/// The set of live particles plus the spawn timer.
#[derive(Debug)]
pub struct ParticleField {
    particles: Vec<Particle>,
    rng: StdRng,
    since_spawn_ms: f32,
    enabled: bool,
}

impl ParticleField {
    /// Creates a field, spawning the initial burst when enabled.
    #[must_use]
    pub fn new(enabled: bool) -> Self {
        Self::with_rng(enabled, StdRng::from_os_rng())
    }

    /// Creates a field with a deterministic generator (tests, demos).
    #[must_use]
    pub fn seeded(enabled: bool, seed: u64) -> Self {
        Self::with_rng(enabled, StdRng::seed_from_u64(seed))
    }

    fn with_rng(enabled: bool, rng: StdRng) -> Self {
        let mut field = Self {
            particles: Vec::new(),
            rng,
            since_spawn_ms: 0.0,
            enabled,
        };
        if enabled {
            for _ in 0..PARTICLE_INITIAL_BURST {
                // Stagger the burst by pre-aging each particle a little
                let mut particle = field.make_particle();
                particle.age_ms = field.rng.random_range(0.0..PARTICLE_LIFETIME_MS as f32 * 0.3);
                field.particles.push(particle);
            }
        }
        field
    }

    /// Whether the field animates at all.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.enabled
    }

    /// Live particles, oldest first.
    #[must_use]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Ages every particle by `delta`, removes expired ones, and spawns a
    /// new particle for every full spawn interval that elapsed.
    pub fn step(&mut self, delta: Duration) {
        if !self.enabled {
            return;
        }
        let delta_ms = delta.as_secs_f32() * 1000.0;

        for particle in &mut self.particles {
            particle.age_ms += delta_ms;
        }
        self.particles.retain(|p| !p.is_expired());

        self.since_spawn_ms += delta_ms;
        while self.since_spawn_ms >= PARTICLE_SPAWN_INTERVAL_MS as f32 {
            self.since_spawn_ms -= PARTICLE_SPAWN_INTERVAL_MS as f32;
            let particle = self.make_particle();
            self.particles.push(particle);
        }
    }

    fn make_particle(&mut self) -> Particle {
        let glyph = Glyph::ALL[self.rng.random_range(0..Glyph::ALL.len())];
        Particle {
            glyph,
            x_frac: self.rng.random_range(0.0..1.0),
            drift_frac: self.rng.random_range(-0.15..0.15),
            size: self.rng.random_range(PARTICLE_MIN_SIZE..PARTICLE_MAX_SIZE),
            age_ms: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn disabled_field_never_spawns() {
        let mut field = ParticleField::seeded(false, 7);
        assert!(field.particles().is_empty());
        field.step(Duration::from_secs(60));
        assert!(field.particles().is_empty());
        assert!(!field.is_active());
    }

    #[test]
    fn enabled_field_starts_with_the_initial_burst() {
        let field = ParticleField::seeded(true, 7);
        assert_eq!(field.particles().len(), PARTICLE_INITIAL_BURST);
    }

    #[test]
    fn spawns_once_per_interval() {
        let mut field = ParticleField::seeded(true, 7);
        let before = field.particles().len();
        field.step(Duration::from_millis(PARTICLE_SPAWN_INTERVAL_MS));
        assert_eq!(field.particles().len(), before + 1);
    }

    #[test]
    fn a_long_step_spawns_multiple_particles() {
        let mut field = ParticleField::seeded(true, 7);
        let before = field.particles().len();
        field.step(Duration::from_millis(PARTICLE_SPAWN_INTERVAL_MS * 3));
        assert_eq!(field.particles().len(), before + 3);
    }

    #[test]
    fn particles_expire_after_their_lifetime() {
        let mut field = ParticleField::seeded(true, 7);
        field.step(Duration::from_millis(PARTICLE_LIFETIME_MS * 2));
        // The burst is gone; only particles spawned during the step and
        // still young enough remain
        assert!(field
            .particles()
            .iter()
            .all(|p| p.age_ms < PARTICLE_LIFETIME_MS as f32));
    }

    #[test]
    fn particles_rise_and_fade() {
        let mut field = ParticleField::seeded(true, 7);
        field.step(Duration::from_millis(PARTICLE_SPAWN_INTERVAL_MS));
        let particle = field.particles().last().expect("just spawned");
        assert_eq!(particle.progress(), 0.0);
        assert_eq!(particle.y_frac(), 1.0);
        assert_eq!(particle.opacity(), 0.0);

        let mut aged = particle.clone();
        aged.age_ms = PARTICLE_LIFETIME_MS as f32 / 2.0;
        assert_eq!(aged.progress(), 0.5);
        assert_eq!(aged.y_frac(), 0.5);
        assert_eq!(aged.opacity(), 1.0);
    }

    #[test]
    fn particle_sizes_stay_in_bounds() {
        let mut field = ParticleField::seeded(true, 42);
        field.step(Duration::from_millis(PARTICLE_SPAWN_INTERVAL_MS * 10));
        for particle in field.particles() {
            assert!(particle.size() >= PARTICLE_MIN_SIZE);
            assert!(particle.size() < PARTICLE_MAX_SIZE);
        }
    }
}
