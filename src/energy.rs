//! Battery bookkeeping: solar charge in, propulsion discharge out.

use crate::config::BatteryConfig;

/// Illumination below this produces no usable solar power.
const ILLUMINATION_CUTOFF: f64 = 0.05;

/// Battery state of charge.
///
/// The level is clamped into `[0, capacity]` by every mutation; callers
/// never observe a negative or overfull battery.
#[derive(Debug, Clone, Copy)]
pub struct Battery {
    level_kwh: f64,
    capacity_kwh: f64,
}

impl Battery {
    /// A battery starting at full charge.
    pub fn full(capacity_kwh: f64) -> Self {
        Self {
            level_kwh: capacity_kwh,
            capacity_kwh,
        }
    }

    pub fn level_kwh(&self) -> f64 {
        self.level_kwh
    }

    pub fn capacity_kwh(&self) -> f64 {
        self.capacity_kwh
    }

    /// Add energy, clamped at capacity. Returns the amount actually stored.
    fn store(&mut self, energy_kwh: f64) -> f64 {
        let before = self.level_kwh;
        self.level_kwh = (self.level_kwh + energy_kwh).min(self.capacity_kwh);
        self.level_kwh - before
    }

    /// Draw energy, clamped at empty. Returns the amount actually drawn.
    fn draw(&mut self, energy_kwh: f64) -> f64 {
        let before = self.level_kwh;
        self.level_kwh = (self.level_kwh - energy_kwh).max(0.0);
        before - self.level_kwh
    }
}

/// Energy model of the vessel: owns the battery and converts illumination
/// and traveled distance into charge and discharge deltas.
#[derive(Debug)]
pub struct EnergyModel {
    battery: Battery,
    solar_max_power_kw: f64,
    energy_per_km_kwh: f64,
    meters_per_pixel: f64,
}

impl EnergyModel {
    pub fn new(cfg: &BatteryConfig, meters_per_pixel: f64) -> Self {
        Self {
            battery: Battery::full(cfg.capacity_kwh),
            solar_max_power_kw: cfg.solar_max_power_kw,
            energy_per_km_kwh: cfg.energy_per_km_kwh,
            meters_per_pixel,
        }
    }

    /// Charge the battery from the solar array over `dt` seconds.
    ///
    /// Instantaneous power scales linearly with the illumination factor;
    /// below [`ILLUMINATION_CUTOFF`] the array produces nothing. Returns
    /// the energy the array produced; the battery absorbs it clamped at
    /// capacity, so a full battery still reports production.
    pub fn charge(&mut self, dt: f64, illumination: f64) -> f64 {
        if illumination <= ILLUMINATION_CUTOFF {
            return 0.0;
        }
        let produced_kwh = self.solar_max_power_kw * illumination * dt / 3600.0;
        self.battery.store(produced_kwh);
        produced_kwh
    }

    /// Discharge the battery for a traveled distance in pixels.
    ///
    /// Returns the energy actually drawn after clamping at empty.
    pub fn discharge(&mut self, distance_px: f64) -> f64 {
        let distance_km = distance_px * self.meters_per_pixel / 1000.0;
        self.battery.draw(distance_km * self.energy_per_km_kwh)
    }

    pub fn battery(&self) -> &Battery {
        &self.battery
    }

    pub fn is_depleted(&self) -> bool {
        self.battery.level_kwh <= 0.0
    }

    /// Battery level as a fraction of capacity, in `[0, 1]`.
    pub fn state_of_charge(&self) -> f64 {
        self.battery.level_kwh / self.battery.capacity_kwh
    }

    /// Kilometers the current charge can sustain, 0 when propulsion is free.
    pub fn estimated_range_km(&self) -> f64 {
        if self.energy_per_km_kwh > 0.0 {
            self.battery.level_kwh / self.energy_per_km_kwh
        } else {
            0.0
        }
    }
}
