//! Drifting clouds built from a fixed cluster of overlapping discs.

use crate::constants::*;
use crate::render::{Rgb, Shape};
use bevy::math::Vec2;
use rand::Rng;

/// One disc of a cloud, relative to the cloud centre.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Puff {
    pub offset: Vec2,
    pub radius: f32,
}

/// A cloud.  Only `position` changes after spawn.
#[derive(Debug, Clone, PartialEq)]
pub struct Cloud {
    pub position: Vec2,
    darkness: f32,
    puffs: Vec<Puff>,
}

impl Cloud {
    /// Cluster of 5–12 integer-offset puffs with a random darkness.
    pub fn spawn(x: f32, y: f32, rng: &mut impl Rng) -> Self {
        let count = rng.gen_range(CLOUD_CIRCLES_MIN..=CLOUD_CIRCLES_MAX);
        let puffs = (0..count)
            .map(|_| Puff {
                offset: Vec2::new(
                    rng.gen_range(-CLOUD_OFFSET_X..=CLOUD_OFFSET_X) as f32,
                    rng.gen_range(-CLOUD_OFFSET_Y..=CLOUD_OFFSET_Y) as f32,
                ),
                radius: rng.gen_range(CLOUD_RADIUS_MIN..=CLOUD_RADIUS_MAX) as f32,
            })
            .collect();
        let darkness = rng.gen_range(CLOUD_DARKNESS_MIN..=CLOUD_DARKNESS_MAX);

        Self {
            position: Vec2::new(x, y),
            darkness,
            puffs,
        }
    }

    pub fn darkness(&self) -> f32 {
        self.darkness
    }

    pub fn puffs(&self) -> &[Puff] {
        &self.puffs
    }

    /// Drift at a tenth of the wind.
    pub fn advance(&mut self, wind: f32) {
        self.position.x += wind * CLOUD_DRIFT_FACTOR;
    }

    /// Grey level `255 * (1 - darkness)`, truncated.
    pub fn shade(&self) -> Rgb {
        Rgb::gray((255.0 * (1.0 - self.darkness)) as u8)
    }

    pub fn render_spec(&self) -> Vec<Shape> {
        let color = self.shade();
        self.puffs
            .iter()
            .map(|puff| Shape::Circle {
                center: self.position + puff.offset,
                radius: puff.radius,
                color,
            })
            .collect()
    }
}
