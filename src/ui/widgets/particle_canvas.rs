// SPDX-License-Identifier: MPL-2.0
//! Canvas renderer for the decorative particle field.

use crate::showcase::particles::ParticleField;
use crate::ui::design_tokens::{opacity, palette};
use iced::widget::canvas::{self, Canvas, Frame, Geometry, Text};
use iced::{mouse, Color, Length, Point, Rectangle, Renderer, Theme};

/// Draws the particle field behind the hero content.
///
/// No geometry cache: every frame moves every particle, so there is nothing
/// to reuse between draws.
pub struct ParticleCanvas<'a> {
    field: &'a ParticleField,
}

impl<'a> ParticleCanvas<'a> {
    /// Creates a canvas over the given field.
    #[must_use]
    pub fn new(field: &'a ParticleField) -> Self {
        Self { field }
    }

    /// Creates a Canvas widget from this renderer.
    pub fn into_element<Message: 'static>(self) -> iced::Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<Message> canvas::Program<Message> for ParticleCanvas<'_> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());

        for particle in self.field.particles() {
            let position = Point::new(
                particle.x_frac() * frame.width(),
                particle.y_frac() * frame.height(),
            );
            let color = Color {
                a: particle.opacity() * opacity::PARTICLE,
                ..palette::WHITE
            };

            frame.fill_text(Text {
                content: particle.glyph().symbol().to_string(),
                position,
                color,
                size: particle.size().into(),
                ..Text::default()
            });
        }

        vec![frame.into_geometry()]
    }
}
