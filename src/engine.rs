use crate::agent::Agent;
use crate::config::Config;
use crate::daycycle::{self, Rgb};
use crate::debris::DebrisField;
use crate::energy::EnergyModel;
use crate::session::{DaySession, DaySummary, Phase};
use anyhow::{Context, Result};
use rand::prelude::*;
use rand_chacha::ChaCha12Rng;

/// Simulation engine.
///
/// Owns every piece of simulation state and advances it one tick at a
/// time. Each tick runs the day cycle, solar charging, vessel motion and
/// collection, propulsion discharge and the day accumulators, in that
/// order. The frontend only reads state and delivers events.
pub struct Engine {
    cfg: Config,
    agent: Agent,
    energy: EnergyModel,
    field: DebrisField,
    session: DaySession,
    phase: Phase,
    summary: Option<DaySummary>,
}

impl Engine {
    /// Create an engine with a full battery, the vessel at the arena
    /// center, and a freshly populated debris field.
    ///
    /// `seed` fixes the debris placement; when absent, one is drawn from
    /// the OS.
    pub fn new(cfg: Config, seed: Option<u64>) -> Result<Self> {
        let rng = match seed {
            Some(seed) => ChaCha12Rng::seed_from_u64(seed),
            None => ChaCha12Rng::try_from_os_rng()?,
        };

        let agent = Agent::new(cfg.arena_center(), &cfg.vessel);
        let energy = EnergyModel::new(&cfg.battery, cfg.arena.meters_per_pixel);
        let field = DebrisField::new(&cfg.arena, cfg.debris.initial_count, rng)
            .context("failed to construct debris field")?;

        Ok(Self {
            cfg,
            agent,
            energy,
            field,
            session: DaySession::new(),
            phase: Phase::Running,
            summary: None,
        })
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// A no-op unless the engine is in [`Phase::Running`]. Crossing the
    /// day boundary freezes the simulation in [`Phase::DayComplete`] with
    /// the day summary cached until [`Engine::acknowledge`].
    pub fn step(&mut self, dt: f64) {
        if self.phase != Phase::Running {
            return;
        }

        let illumination = self.illumination();
        let solar_kwh = self.energy.charge(dt, illumination);

        let outcome = self
            .agent
            .tick(dt, self.energy.is_depleted(), &mut self.field);
        let consumed_kwh = self.energy.discharge(outcome.distance_px);

        if outcome.collected {
            log::debug!(
                "collected debris ({}/{})",
                self.agent.carried(),
                self.agent.max_capacity()
            );
        }

        self.session.accumulate(
            dt,
            outcome.distance_px,
            solar_kwh,
            consumed_kwh,
            outcome.reached_capacity,
        );

        if self.session.day_finished(self.cfg.cycle.day_duration_s) {
            self.summary = Some(self.session.summary(
                &self.energy,
                self.cfg.cycle.day_duration_s,
                self.cfg.arena.meters_per_pixel,
            ));
            self.phase = Phase::DayComplete;
        }
    }

    /// Acknowledge the day-end report and start the next day.
    ///
    /// Resets the per-day accumulators, recenters the vessel with an empty
    /// hold and repopulates the debris field. The battery charge carries
    /// over unchanged.
    pub fn acknowledge(&mut self) {
        if self.phase != Phase::DayComplete {
            return;
        }

        self.session.start_next_day();
        self.agent.reset(self.cfg.arena_center());
        self.field.repopulate();
        self.summary = None;
        self.phase = Phase::Running;

        log::debug!("day {} started", self.session.day());
    }

    /// Stop the simulation for good. Valid in any phase.
    pub fn quit(&mut self) {
        self.phase = Phase::Stopped;
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Current illumination factor, in `[0, 1]`.
    pub fn illumination(&self) -> f64 {
        daycycle::illumination(self.session.time_in_day_s(), self.cfg.cycle.day_duration_s)
    }

    /// Sky color for the current moment of the day.
    pub fn background(&self) -> Rgb {
        daycycle::background_color(self.illumination())
    }

    pub fn cfg(&self) -> &Config {
        &self.cfg
    }

    pub fn agent(&self) -> &Agent {
        &self.agent
    }

    pub fn energy(&self) -> &EnergyModel {
        &self.energy
    }

    pub fn field(&self) -> &DebrisField {
        &self.field
    }

    pub fn session(&self) -> &DaySession {
        &self.session
    }

    /// The frozen day summary, present while in [`Phase::DayComplete`].
    pub fn summary(&self) -> Option<&DaySummary> {
        self.summary.as_ref()
    }
}
