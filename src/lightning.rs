//! Procedural lightning: a jagged trunk with probabilistic forks.
//!
//! A strike rebuilds the branch list and arms a countdown of
//! [`LIGHTNING_DURATION`] ticks.  While it runs the bolt renders a fading
//! full-screen flash plus three layered strokes per branch.
//!
//! Branch generation is a bounded loop rather than recursion: each branch
//! forks at most one child, so the "tree" is a chain whose length is capped
//! by `max_depth` regardless of what the RNG produces.

use crate::constants::*;
use crate::render::{BoltStroke, LightningSpec, LIGHTNING_STROKES};
use bevy::math::Vec2;
use rand::seq::SliceRandom;
use rand::Rng;

/// One polyline of the bolt and the fork depth it was generated at.
#[derive(Debug, Clone, PartialEq)]
pub struct Branch {
    pub points: Vec<Vec2>,
    pub depth: u32,
}

#[derive(Debug, Clone)]
pub struct LightningBolt {
    width: f32,
    height: f32,
    active: bool,
    duration: u32,
    max_duration: u32,
    max_depth: u32,
    branches: Vec<Branch>,
}

impl LightningBolt {
    /// Idle bolt with no branches.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            active: false,
            duration: 0,
            max_duration: LIGHTNING_DURATION,
            max_depth: LIGHTNING_MAX_DEPTH,
            branches: Vec::new(),
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Ticks left before the bolt goes idle.
    pub fn duration(&self) -> u32 {
        self.duration
    }

    pub fn branches(&self) -> &[Branch] {
        &self.branches
    }

    /// Deepest fork generated by the last strike.
    pub fn deepest_branch(&self) -> Option<u32> {
        self.branches.iter().map(|b| b.depth).max()
    }

    /// Replace the branch tree with a new strike and restart the countdown.
    ///
    /// The trunk starts at a random x within the edge margins on the top edge
    /// and ends ±50 px sideways on the bottom edge.
    pub fn strike(&mut self, rng: &mut impl Rng) {
        self.active = true;
        self.duration = self.max_duration;
        self.branches.clear();

        let max_x = (self.width as i32 - LIGHTNING_EDGE_MARGIN).max(LIGHTNING_EDGE_MARGIN);
        let start_x = rng.gen_range(LIGHTNING_EDGE_MARGIN..=max_x);
        let end_x = start_x + rng.gen_range(-LIGHTNING_TRUNK_SWAY..=LIGHTNING_TRUNK_SWAY);

        self.build(
            Vec2::new(start_x as f32, 0.0),
            Vec2::new(end_x as f32, self.height),
            0,
            self.max_depth,
            rng,
        );
    }

    /// Generate the branch from `from` to `to` at `depth`, then follow any
    /// fork it spawns.  Stops once `depth > max_depth`; forks are only
    /// considered while `depth < max_depth - 2`.
    fn build(&mut self, from: Vec2, to: Vec2, depth: u32, max_depth: u32, rng: &mut impl Rng) {
        let mut pending = Some((from, to, depth));

        while let Some((from, to, depth)) = pending.take() {
            if depth > max_depth {
                break;
            }

            let segments = rng.gen_range(LIGHTNING_SEGMENTS_MIN..=LIGHTNING_SEGMENTS_MAX);
            let mut points = Vec::with_capacity(segments as usize + 1);
            points.push(from);
            for i in 1..segments {
                let progress = i as f32 / segments as f32;
                let jitter = rng.gen_range(-LIGHTNING_JITTER..=LIGHTNING_JITTER) as f32;
                points.push(Vec2::new(
                    from.x + (to.x - from.x) * progress + jitter,
                    from.y + (to.y - from.y) * progress,
                ));
            }
            points.push(to);

            if depth + 2 < max_depth && rng.gen_bool(LIGHTNING_FORK_CHANCE) {
                if let Some(&fork) = points[1..points.len() - 1].choose(rng) {
                    let end_x = fork.x
                        + rng.gen_range(-LIGHTNING_FORK_SPREAD..=LIGHTNING_FORK_SPREAD) as f32;
                    let end_y = fork.y
                        + rng.gen_range(LIGHTNING_FORK_DROP_MIN..=LIGHTNING_FORK_DROP_MAX) as f32;
                    pending = Some((fork, Vec2::new(end_x, end_y.min(self.height)), depth + 1));
                }
            }

            self.branches.push(Branch { points, depth });
        }
    }

    /// Count down one tick; goes idle when the countdown reaches zero.
    pub fn advance(&mut self) {
        if self.active {
            self.duration = self.duration.saturating_sub(1);
            if self.duration == 0 {
                self.active = false;
            }
        }
    }

    /// Flash opacity (`duration / max_duration * 0.3`) and layered bolt
    /// strokes, or `None` while idle.
    pub fn render_spec(&self) -> Option<LightningSpec> {
        if !self.active {
            return None;
        }

        let flash_alpha =
            self.duration as f32 / self.max_duration as f32 * LIGHTNING_FLASH_ALPHA;
        let strokes = self
            .branches
            .iter()
            .filter(|b| b.points.len() > 1)
            .flat_map(|b| {
                LIGHTNING_STROKES.iter().map(|&(width, color)| BoltStroke {
                    points: b.points.clone(),
                    width,
                    color,
                })
            })
            .collect();

        Some(LightningSpec {
            flash_alpha,
            strokes,
        })
    }
}
