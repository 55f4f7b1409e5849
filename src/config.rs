use crate::geom::Vec2;
use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::{fmt::Debug, fs, ops::RangeBounds, path::Path};

/// Simulation configuration parameters.
///
/// Loaded from a TOML file and validated before use; every section falls
/// back to the built-in defaults when omitted. See [`Config::from_file`].
#[derive(Debug, PartialEq, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub arena: ArenaConfig,
    pub vessel: VesselConfig,
    pub battery: BatteryConfig,
    pub cycle: CycleConfig,
    pub debris: DebrisConfig,

    /// Seed for debris placement. Drawn from the OS when absent.
    pub seed: Option<u64>,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    /// Arena width in pixels.
    pub width_px: f64,
    /// Arena height in pixels.
    pub height_px: f64,
    /// Debris never spawns closer than this to an arena edge.
    pub spawn_margin_px: f64,
    /// World scale used to convert traveled pixels into kilometers.
    pub meters_per_pixel: f64,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct VesselConfig {
    /// Cruise speed in pixels per second.
    pub speed_px_s: f64,
    /// Radius of the sensor ring drawn around the vessel.
    pub sensor_range_px: f64,
    /// Debris closer than this is considered collected.
    pub capture_radius_px: f64,
    /// Maximum number of debris items carried before the vessel idles.
    pub max_capacity: usize,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct BatteryConfig {
    /// Battery capacity in kWh.
    pub capacity_kwh: f64,
    /// Energy drawn by propulsion per kilometer traveled.
    pub energy_per_km_kwh: f64,
    /// Peak output of the solar array at full illumination.
    pub solar_max_power_kw: f64,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CycleConfig {
    /// Length of one simulated day in wall-clock seconds.
    pub day_duration_s: f64,
    /// Frame-rate cap for the simulation loop.
    pub max_fps: f64,
}

#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DebrisConfig {
    /// Number of debris items present at the start of each day.
    pub initial_count: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width_px: 800.0,
            height_px: 600.0,
            spawn_margin_px: 50.0,
            meters_per_pixel: 10.0,
        }
    }
}

impl Default for VesselConfig {
    fn default() -> Self {
        Self {
            speed_px_s: 80.0,
            sensor_range_px: 100.0,
            capture_radius_px: 10.0,
            max_capacity: 5,
        }
    }
}

impl Default for BatteryConfig {
    fn default() -> Self {
        Self {
            capacity_kwh: 40.0,
            energy_per_km_kwh: 0.5,
            solar_max_power_kw: 3.0,
        }
    }
}

impl Default for CycleConfig {
    fn default() -> Self {
        Self {
            day_duration_s: 12.0,
            max_fps: 60.0,
        }
    }
}

impl Default for DebrisConfig {
    fn default() -> Self {
        Self { initial_count: 5 }
    }
}

impl Config {
    /// Load a [`Config`] from a TOML file.
    ///
    /// Performs validation on all parameters before returning.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read, deserialized,
    /// or if the configuration values are invalid.
    pub fn from_file<P: AsRef<Path>>(file: P) -> Result<Self> {
        let file = file.as_ref();
        let contents =
            fs::read_to_string(file).with_context(|| format!("failed to read {file:?}"))?;

        let config: Config = toml::from_str(&contents).context("failed to deserialize config")?;

        config.validate().context("failed to validate config")?;

        Ok(config)
    }

    /// Reject degenerate setups once at startup rather than per tick.
    pub fn validate(&self) -> Result<()> {
        check_num(self.arena.width_px, 1.0..1e6).context("invalid arena width")?;
        check_num(self.arena.height_px, 1.0..1e6).context("invalid arena height")?;
        check_num(self.arena.spawn_margin_px, 0.0..1e6).context("invalid spawn margin")?;
        check_num(self.arena.meters_per_pixel, 1e-6..1e6).context("invalid world scale")?;

        let min_dim = self.arena.width_px.min(self.arena.height_px);
        if 2.0 * self.arena.spawn_margin_px >= min_dim {
            bail!("spawn margin leaves no room for debris inside the arena");
        }

        check_num(self.vessel.speed_px_s, 0.0..1e6).context("invalid vessel speed")?;
        check_num(self.vessel.sensor_range_px, 0.0..1e6).context("invalid sensor range")?;
        check_num(self.vessel.capture_radius_px, 1e-6..1e6).context("invalid capture radius")?;
        check_num(self.vessel.max_capacity, 1..100_000).context("invalid vessel capacity")?;

        check_num(self.battery.capacity_kwh, 1e-6..1e9).context("invalid battery capacity")?;
        check_num(self.battery.energy_per_km_kwh, 0.0..1e9)
            .context("invalid energy consumption rate")?;
        check_num(self.battery.solar_max_power_kw, 0.0..1e9).context("invalid solar peak power")?;

        check_num(self.cycle.day_duration_s, 1e-6..1e9).context("invalid day duration")?;
        check_num(self.cycle.max_fps, 1.0..10_000.0).context("invalid frame-rate cap")?;

        check_num(self.debris.initial_count, 1..100_000).context("invalid debris count")?;

        Ok(())
    }

    /// Center of the arena, where the vessel starts each day.
    pub fn arena_center(&self) -> Vec2 {
        Vec2::new(self.arena.width_px / 2.0, self.arena.height_px / 2.0)
    }
}

fn check_num<T, R>(num: T, range: R) -> Result<()>
where
    T: PartialOrd + Debug,
    R: RangeBounds<T> + Debug,
{
    if !range.contains(&num) {
        bail!("number must be in the range {range:?}, but is {num:?}");
    }
    Ok(())
}
