// SPDX-License-Identifier: MPL-2.0
//! Floating particle backdrop for the hero, drawn on a Canvas.
//!
//! Each particle loops upward through the hero on its own schedule, fading
//! in at the start of a cycle and out near the end so the wrap-around is
//! never visible.

use crate::ui::design_tokens::opacity;
use iced::widget::canvas::{self, Cache, Canvas, Frame, Geometry, Path};
use iced::{mouse, Color, Element, Length, Point, Rectangle, Renderer, Theme};
use rand::Rng;
use std::time::Duration;

/// Number of particles floating over the hero.
pub const PARTICLE_COUNT: usize = 30;

const DOT_RADIUS: f32 = 3.0;

/// One particle's fixed trajectory parameters.
#[derive(Debug, Clone, Copy)]
pub struct Particle {
    /// Horizontal position as a fraction of the field width.
    pub x: f32,
    /// Starting vertical position as a fraction of the field height.
    pub y: f32,
    /// Offset before the first cycle starts.
    pub delay: Duration,
    /// Length of one full rise cycle.
    pub duration: Duration,
}

/// Randomizes a fresh set of particles.
pub fn spawn(count: usize) -> Vec<Particle> {
    let mut rng = rand::thread_rng();

    (0..count)
        .map(|_| Particle {
            x: rng.gen::<f32>(),
            y: rng.gen::<f32>(),
            delay: Duration::from_secs_f32(rng.gen::<f32>() * 3.0),
            duration: Duration::from_secs_f32(3.0 + rng.gen::<f32>() * 4.0),
        })
        .collect()
}

/// Canvas program rendering a set of particles at a moment in time.
pub struct ParticleField<'a> {
    cache: Cache,
    particles: &'a [Particle],
    elapsed: Duration,
    color: Color,
}

impl<'a> ParticleField<'a> {
    #[must_use]
    pub fn new(particles: &'a [Particle], elapsed: Duration, color: Color) -> Self {
        Self {
            cache: Cache::default(),
            particles,
            elapsed,
            color,
        }
    }

    /// Creates a Canvas widget that fills the hero behind its content.
    pub fn into_element<Message: 'a>(self) -> Element<'a, Message> {
        Canvas::new(self)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}

impl<'a, Message> canvas::Program<Message> for ParticleField<'a> {
    type State = ();

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let geometry = self
            .cache
            .draw(renderer, bounds.size(), |frame: &mut Frame| {
                let elapsed = self.elapsed.as_secs_f32();

                for particle in self.particles {
                    let local = elapsed - particle.delay.as_secs_f32();
                    if local < 0.0 {
                        continue;
                    }

                    let t = (local / particle.duration.as_secs_f32()).fract();
                    let x = particle.x * frame.width();
                    let y = (particle.y * frame.height() - t * frame.height())
                        .rem_euclid(frame.height());

                    let dot = Path::circle(Point::new(x, y), DOT_RADIUS);
                    frame.fill(
                        &dot,
                        Color {
                            a: fade(t) * opacity::PARTICLE,
                            ..self.color
                        },
                    );
                }
            });

        vec![geometry]
    }
}

/// Opacity over one cycle: ramp in over the first 10%, out over the last 10%.
fn fade(t: f32) -> f32 {
    if t < 0.1 {
        t / 0.1
    } else if t > 0.9 {
        (1.0 - t) / 0.1
    } else {
        1.0
    }
}
