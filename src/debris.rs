//! Drifting debris field with seedable random placement.

use crate::config::ArenaConfig;
use crate::geom::Vec2;
use anyhow::{Context, Result};
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;
use rand_distr::Uniform;

/// A single drifting debris item. Its identity is its index in the field.
#[derive(Debug, Clone, Copy)]
pub struct Debris {
    pub pos: Vec2,
}

/// The set of active debris items in the arena.
///
/// Placement is uniform within the arena minus the spawn margin, drawn
/// from an injected [`ChaCha12Rng`] so runs are reproducible for a seed.
pub struct DebrisField {
    items: Vec<Debris>,
    rng: ChaCha12Rng,
    x_dist: Uniform<f64>,
    y_dist: Uniform<f64>,
    initial_count: usize,
}

impl DebrisField {
    /// Create a field and populate it with `initial_count` items.
    pub fn new(arena: &ArenaConfig, initial_count: usize, rng: ChaCha12Rng) -> Result<Self> {
        let margin = arena.spawn_margin_px;
        let x_dist = Uniform::new(margin, arena.width_px - margin)
            .context("failed to construct x placement distribution")?;
        let y_dist = Uniform::new(margin, arena.height_px - margin)
            .context("failed to construct y placement distribution")?;

        let mut field = Self {
            items: Vec::with_capacity(initial_count),
            rng,
            x_dist,
            y_dist,
            initial_count,
        };
        field.repopulate();

        Ok(field)
    }

    pub fn items(&self) -> &[Debris] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the item closest to `point`, or `None` if the field is empty.
    pub fn nearest_to(&self, point: Vec2) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .map(|(idx, item)| (idx, item.pos.distance_to(point)))
            .min_by(|(_, a), (_, b)| a.total_cmp(b))
            .map(|(idx, _)| idx)
    }

    /// Remove the item at `idx`.
    pub fn remove(&mut self, idx: usize) -> Debris {
        self.items.remove(idx)
    }

    /// Place one item at an explicit position, bypassing random placement.
    pub fn insert(&mut self, pos: Vec2) {
        self.items.push(Debris { pos });
    }

    /// Spawn one item uniformly at random inside the margins.
    pub fn spawn_one(&mut self) {
        let pos = Vec2::new(
            self.x_dist.sample(&mut self.rng),
            self.y_dist.sample(&mut self.rng),
        );
        self.items.push(Debris { pos });
    }

    /// Discard all items and spawn a fresh initial set.
    pub fn repopulate(&mut self) {
        self.items.clear();
        for _ in 0..self.initial_count {
            self.spawn_one();
        }
    }
}
