//! Falling weather particles: rain streaks, rotating snowflakes, and hailstones.
//!
//! Every per-particle parameter is drawn once at spawn from the kind's range
//! (see [`crate::constants`]); afterwards only the position, and for snow the
//! rotation, change.

use crate::constants::*;
use crate::render::{Rgb, Shape, HAIL_COLOR, HAIL_CORE_COLOR, RAIN_COLOR, SNOW_COLOR};
use bevy::math::Vec2;
use rand::Rng;
use std::f32::consts::PI;

/// Particle type.  Fixed for the particle's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParticleKind {
    Rain,
    Snow,
    Hail,
}

/// Kind-specific extra state.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParticleExtra {
    None,
    Spin { rotation: f32, rate: f32 },
    /// Reserved: drawn at spawn, no bounce physics reads it.
    Bounce { height: u32 },
}

/// One weather particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    kind: ParticleKind,
    /// Screen-space position (top-left origin, +y down).
    pub position: Vec2,
    speed: f32,
    size: u32,
    color: Rgb,
    drift: f32,
    extra: ParticleExtra,
}

impl Particle {
    /// Create a particle at `(x, y)` with all parameters drawn from the
    /// kind's ranges.
    pub fn spawn(kind: ParticleKind, x: f32, y: f32, rng: &mut impl Rng) -> Self {
        let (speed, size, color, drift, extra) = match kind {
            ParticleKind::Rain => (
                rng.gen_range(RAIN_SPEED_MIN..=RAIN_SPEED_MAX),
                rng.gen_range(RAIN_SIZE_MIN..=RAIN_SIZE_MAX),
                RAIN_COLOR,
                rng.gen_range(-RAIN_DRIFT_RANGE..=RAIN_DRIFT_RANGE),
                ParticleExtra::None,
            ),
            ParticleKind::Snow => (
                rng.gen_range(SNOW_SPEED_MIN..=SNOW_SPEED_MAX),
                rng.gen_range(SNOW_SIZE_MIN..=SNOW_SIZE_MAX),
                SNOW_COLOR,
                rng.gen_range(-SNOW_DRIFT_RANGE..=SNOW_DRIFT_RANGE),
                ParticleExtra::Spin {
                    rotation: 0.0,
                    rate: rng.gen_range(-SNOW_ROTATION_RATE_RANGE..=SNOW_ROTATION_RATE_RANGE),
                },
            ),
            ParticleKind::Hail => (
                rng.gen_range(HAIL_SPEED_MIN..=HAIL_SPEED_MAX),
                rng.gen_range(HAIL_SIZE_MIN..=HAIL_SIZE_MAX),
                HAIL_COLOR,
                rng.gen_range(-HAIL_DRIFT_RANGE..=HAIL_DRIFT_RANGE),
                ParticleExtra::Bounce {
                    height: rng.gen_range(HAIL_BOUNCE_MIN..=HAIL_BOUNCE_MAX),
                },
            ),
        };

        Self {
            kind,
            position: Vec2::new(x, y),
            speed,
            size,
            color,
            drift,
            extra,
        }
    }

    pub fn kind(&self) -> ParticleKind {
        self.kind
    }

    /// Downward distance covered per tick.
    pub fn speed(&self) -> f32 {
        self.speed
    }

    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Fixed horizontal bias added to the shared wind every tick.
    pub fn drift(&self) -> f32 {
        self.drift
    }

    pub fn extra(&self) -> ParticleExtra {
        self.extra
    }

    /// Current snowflake rotation (radians); zero for other kinds.
    pub fn rotation(&self) -> f32 {
        match self.extra {
            ParticleExtra::Spin { rotation, .. } => rotation,
            _ => 0.0,
        }
    }

    /// Move one tick: fall by `speed`, slide by `drift + wind`.  Snow also
    /// spins and sways with `sin(y * 0.01) * 0.5`, sampled after the fall.
    pub fn advance(&mut self, wind: f32) {
        self.position.y += self.speed;
        self.position.x += self.drift + wind;

        if let ParticleExtra::Spin { rotation, rate } = &mut self.extra {
            *rotation += *rate;
            self.position.x += (self.position.y * SNOW_WAVE_FREQUENCY).sin() * SNOW_WAVE_AMPLITUDE;
        }

        debug_assert!(
            self.position.is_finite(),
            "particle position became non-finite: {:?}",
            self.position
        );
    }

    /// True once the particle has left the viewport by more than the cull margins.
    pub fn is_offscreen(&self, width: f32, height: f32) -> bool {
        self.position.y > height + CULL_BOTTOM_MARGIN
            || self.position.x < -CULL_SIDE_MARGIN
            || self.position.x > width + CULL_SIDE_MARGIN
    }

    /// Shapes describing this particle.
    ///
    /// - Rain: a streak to `(x + drift, y + 3·size)`, stroke width = size.
    /// - Snow: a disc of radius = size; flakes larger than 3 add six spokes of
    ///   length = size at the current rotation.
    /// - Hail: an outer disc plus a white core of radius `size / 2` (integer).
    pub fn render_spec(&self) -> Vec<Shape> {
        let pos = self.position;
        let size = self.size as f32;
        match self.kind {
            ParticleKind::Rain => vec![Shape::Line {
                from: pos,
                to: Vec2::new(pos.x + self.drift, pos.y + size * RAIN_STREAK_FACTOR),
                width: size,
                color: self.color,
            }],
            ParticleKind::Snow => {
                let mut shapes = vec![Shape::Circle {
                    center: pos,
                    radius: size,
                    color: self.color,
                }];
                if self.size > SNOW_SPOKE_MIN_SIZE {
                    let rotation = self.rotation();
                    shapes.extend((0..SNOW_SPOKE_COUNT).map(|i| {
                        let angle = i as f32 * PI / 3.0 + rotation;
                        Shape::Line {
                            from: pos,
                            to: pos + Vec2::new(angle.cos(), angle.sin()) * size,
                            width: 1.0,
                            color: self.color,
                        }
                    }));
                }
                shapes
            }
            ParticleKind::Hail => vec![
                Shape::Circle {
                    center: pos,
                    radius: size,
                    color: self.color,
                },
                Shape::Circle {
                    center: pos,
                    radius: (self.size / 2) as f32,
                    color: HAIL_CORE_COLOR,
                },
            ],
        }
    }
}
