//! Per-day accumulators, the day summary, and the loop phase.

use crate::energy::EnergyModel;

/// Phase of the simulation loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Ticks advance the simulation.
    Running,
    /// The day is over; the summary is frozen until acknowledged.
    DayComplete,
    /// Terminal. No further ticks are processed.
    Stopped,
}

/// Statistics accumulated over the current day.
///
/// Everything except the day counter is reset at the day boundary. The
/// battery deliberately lives outside this struct: its charge persists
/// across days.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySession {
    day: u32,
    time_in_day_s: f64,
    distance_px: f64,
    solar_kwh: f64,
    consumed_kwh: f64,
    time_to_capacity_s: Option<f64>,
}

/// End-of-day report, frozen while the loop waits for acknowledgment.
#[derive(Debug, Clone, PartialEq)]
pub struct DaySummary {
    pub day: u32,
    pub distance_km: f64,
    pub solar_kwh: f64,
    pub consumed_kwh: f64,
    pub battery_percent: f64,
    pub range_km: f64,
    /// In-day time of the first full-hold event, as a fraction of the day.
    pub days_to_capacity: Option<f64>,
}

impl DaySession {
    pub fn new() -> Self {
        Self {
            day: 1,
            time_in_day_s: 0.0,
            distance_px: 0.0,
            solar_kwh: 0.0,
            consumed_kwh: 0.0,
            time_to_capacity_s: None,
        }
    }

    pub fn day(&self) -> u32 {
        self.day
    }

    pub fn time_in_day_s(&self) -> f64 {
        self.time_in_day_s
    }

    pub fn solar_kwh(&self) -> f64 {
        self.solar_kwh
    }

    pub fn consumed_kwh(&self) -> f64 {
        self.consumed_kwh
    }

    pub fn time_to_capacity_s(&self) -> Option<f64> {
        self.time_to_capacity_s
    }

    /// Distance traveled today, converted to kilometers.
    pub fn distance_km(&self, meters_per_pixel: f64) -> f64 {
        self.distance_px * meters_per_pixel / 1000.0
    }

    /// Fold one tick's results into today's totals.
    ///
    /// The capacity marker is written at most once per day; later
    /// `reached_capacity` signals within the same day are ignored.
    pub fn accumulate(
        &mut self,
        dt: f64,
        distance_px: f64,
        solar_kwh: f64,
        consumed_kwh: f64,
        reached_capacity: bool,
    ) {
        self.time_in_day_s += dt;
        self.distance_px += distance_px;
        self.solar_kwh += solar_kwh;
        self.consumed_kwh += consumed_kwh;

        if reached_capacity && self.time_to_capacity_s.is_none() {
            self.time_to_capacity_s = Some(self.time_in_day_s);
        }
    }

    pub fn day_finished(&self, day_duration_s: f64) -> bool {
        self.time_in_day_s >= day_duration_s
    }

    /// Snapshot today's totals together with the current battery state.
    pub fn summary(
        &self,
        energy: &EnergyModel,
        day_duration_s: f64,
        meters_per_pixel: f64,
    ) -> DaySummary {
        DaySummary {
            day: self.day,
            distance_km: self.distance_km(meters_per_pixel),
            solar_kwh: self.solar_kwh,
            consumed_kwh: self.consumed_kwh,
            battery_percent: energy.state_of_charge() * 100.0,
            range_km: energy.estimated_range_km(),
            days_to_capacity: self.time_to_capacity_s.map(|t| t / day_duration_s),
        }
    }

    /// Advance the day counter and clear every per-day accumulator.
    pub fn start_next_day(&mut self) {
        self.day += 1;
        self.time_in_day_s = 0.0;
        self.distance_px = 0.0;
        self.solar_kwh = 0.0;
        self.consumed_kwh = 0.0;
        self.time_to_capacity_s = None;
    }
}

impl Default for DaySession {
    fn default() -> Self {
        Self::new()
    }
}

impl DaySummary {
    /// Report lines shown on the day-end screen and in the headless log.
    pub fn report_lines(&self) -> Vec<String> {
        let capacity_line = match self.days_to_capacity {
            Some(days) => format!("Time to full collection: {days:.2} days"),
            None => "Time to full collection: Not reached today".to_string(),
        };

        vec![
            format!("End of Day {}", self.day),
            format!("Distance travelled: {:.2} km", self.distance_km),
            format!("Solar energy generated: {:.2} kWh", self.solar_kwh),
            format!("Energy consumed (movement): {:.2} kWh", self.consumed_kwh),
            format!("Battery remaining: {:.1}%", self.battery_percent),
            format!("Estimated remaining range: {:.1} km", self.range_km),
            capacity_line,
        ]
    }
}
