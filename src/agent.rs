//! Vessel targeting, motion and collection policy.

use crate::config::VesselConfig;
use crate::debris::DebrisField;
use crate::geom::Vec2;

/// Distance to the target below which the vessel stops steering.
const ARRIVAL_EPSILON_PX: f64 = 1.0;

/// The autonomous cleanup vessel.
pub struct Agent {
    pos: Vec2,
    speed_px_s: f64,
    sensor_range_px: f64,
    capture_radius_px: f64,
    carried: usize,
    max_capacity: usize,
}

/// What happened during one agent tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickOutcome {
    /// Linear distance moved this tick, in pixels.
    pub distance_px: f64,
    /// A debris item was collected this tick.
    pub collected: bool,
    /// The collection brought the vessel to full capacity.
    pub reached_capacity: bool,
}

impl TickOutcome {
    fn idle() -> Self {
        Self {
            distance_px: 0.0,
            collected: false,
            reached_capacity: false,
        }
    }
}

impl Agent {
    pub fn new(start: Vec2, cfg: &VesselConfig) -> Self {
        Self {
            pos: start,
            speed_px_s: cfg.speed_px_s,
            sensor_range_px: cfg.sensor_range_px,
            capture_radius_px: cfg.capture_radius_px,
            carried: 0,
            max_capacity: cfg.max_capacity,
        }
    }

    pub fn pos(&self) -> Vec2 {
        self.pos
    }

    pub fn carried(&self) -> usize {
        self.carried
    }

    pub fn max_capacity(&self) -> usize {
        self.max_capacity
    }

    pub fn sensor_range_px(&self) -> f64 {
        self.sensor_range_px
    }

    pub fn at_capacity(&self) -> bool {
        self.carried >= self.max_capacity
    }

    /// Fraction of the hold currently filled, in `[0, 1]`.
    pub fn capacity_fraction(&self) -> f64 {
        self.carried as f64 / self.max_capacity as f64
    }

    /// Return to the given position with an empty hold.
    pub fn reset(&mut self, start: Vec2) {
        self.pos = start;
        self.carried = 0;
    }

    /// Advance the vessel by one tick.
    ///
    /// Seeks the nearest debris item and pursues it in a straight line at
    /// cruise speed. Every degenerate situation is an idle no-op: empty
    /// battery (stop in place), full hold (no return-to-base, the vessel
    /// drifts until the next day), empty field.
    ///
    /// A target closer than the capture radius is consumed: it is removed
    /// from the field and, while the hold still has room afterwards, a
    /// replacement is spawned immediately.
    pub fn tick(&mut self, dt: f64, battery_empty: bool, field: &mut DebrisField) -> TickOutcome {
        if battery_empty || self.at_capacity() {
            return TickOutcome::idle();
        }
        let Some(target_idx) = field.nearest_to(self.pos) else {
            return TickOutcome::idle();
        };

        let prev_pos = self.pos;
        let target = field.items()[target_idx].pos;

        if self.pos.distance_to(target) > ARRIVAL_EPSILON_PX {
            let direction = (target - self.pos).normalized();
            self.pos = self.pos + direction * (self.speed_px_s * dt);
        }

        let mut collected = false;
        let mut reached_capacity = false;
        if self.pos.distance_to(target) < self.capture_radius_px {
            field.remove(target_idx);
            self.carried += 1;
            collected = true;
            reached_capacity = self.carried == self.max_capacity;

            if self.carried < self.max_capacity {
                field.spawn_one();
            }
        }

        TickOutcome {
            distance_px: prev_pos.distance_to(self.pos),
            collected,
            reached_capacity,
        }
    }
}
