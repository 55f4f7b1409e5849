use oceansweep::agent::Agent;
use oceansweep::config::{ArenaConfig, BatteryConfig, Config, VesselConfig};
use oceansweep::daycycle::{self, Rgb};
use oceansweep::debris::DebrisField;
use oceansweep::energy::EnergyModel;
use oceansweep::engine::Engine;
use oceansweep::geom::Vec2;
use oceansweep::session::{DaySession, Phase};
use rand::SeedableRng;
use rand_chacha::ChaCha12Rng;

const TOL: f64 = 1e-9;

fn empty_field() -> DebrisField {
    DebrisField::new(&ArenaConfig::default(), 0, ChaCha12Rng::seed_from_u64(1))
        .expect("failed to construct field")
}

#[test]
fn illumination_stays_normalized() {
    let day = 12.0;
    for i in 0..1000 {
        let t = day * i as f64 / 1000.0;
        let factor = daycycle::illumination(t, day);
        assert!((0.0..=1.0).contains(&factor), "factor {factor} at t {t}");
    }

    assert!(daycycle::illumination(0.0, day).abs() < TOL);
    assert!((daycycle::illumination(day / 2.0, day) - 1.0).abs() < TOL);
    assert!(daycycle::illumination(day, day).abs() < TOL);
}

#[test]
fn background_blends_night_to_day() {
    assert_eq!(daycycle::background_color(0.0), daycycle::NIGHT_COLOR);
    assert_eq!(daycycle::background_color(1.0), daycycle::DAY_COLOR);

    let half = daycycle::background_color(0.5);
    assert!(half.r > daycycle::NIGHT_COLOR.r && half.r < daycycle::DAY_COLOR.r);

    // Fractional channels truncate: 10 + 90 * 0.55 = 59.5 -> 59, not 60.
    let dusk = daycycle::background_color(0.55);
    assert_eq!(
        dusk,
        Rgb {
            r: 59,
            g: 86,
            b: 152
        }
    );
}

#[test]
fn battery_level_stays_clamped() {
    let mut energy = EnergyModel::new(&BatteryConfig::default(), 10.0);

    // Full battery absorbs nothing further.
    energy.charge(1e9, 1.0);
    assert!((energy.battery().level_kwh() - 40.0).abs() < TOL);

    // Draining far past empty stops at zero.
    energy.discharge(1e12);
    assert!(energy.battery().level_kwh().abs() < TOL);
    assert!(energy.is_depleted());

    // Overcharging from empty stops at capacity.
    energy.charge(1e12, 1.0);
    assert!((energy.battery().level_kwh() - 40.0).abs() < TOL);
}

#[test]
fn charge_and_discharge_zero_inputs() {
    let mut energy = EnergyModel::new(&BatteryConfig::default(), 10.0);

    assert!(energy.discharge(0.0).abs() < TOL);
    assert!(energy.charge(3600.0, 0.0).abs() < TOL);
    // At the dawn/dusk cutoff the array still produces nothing.
    assert!(energy.charge(3600.0, 0.05).abs() < TOL);
}

#[test]
fn one_hour_of_full_sun_charges_three_kwh() {
    let mut energy = EnergyModel::new(&BatteryConfig::default(), 10.0);

    // 2000 px at 10 m/px is 20 km, which drains 10 kWh at 0.5 kWh/km.
    assert!((energy.discharge(2000.0) - 10.0).abs() < TOL);
    assert!((energy.battery().level_kwh() - 30.0).abs() < TOL);

    let gained = energy.charge(3600.0, 1.0);
    assert!((gained - 3.0).abs() < TOL);
    assert!((energy.battery().level_kwh() - 33.0).abs() < TOL);
}

#[test]
fn full_battery_still_reports_solar_production() {
    let mut energy = EnergyModel::new(&BatteryConfig::default(), 10.0);

    // The array produces 3 kWh over the hour even though the full battery
    // absorbs none of it; the daily solar statistic counts production.
    let produced = energy.charge(3600.0, 1.0);
    assert!((produced - 3.0).abs() < TOL);
    assert!((energy.battery().level_kwh() - 40.0).abs() < TOL);
}

#[test]
fn estimated_range_guards_against_free_propulsion() {
    let cfg = BatteryConfig {
        energy_per_km_kwh: 0.0,
        ..BatteryConfig::default()
    };
    let energy = EnergyModel::new(&cfg, 10.0);
    assert!(energy.estimated_range_km().abs() < TOL);

    let energy = EnergyModel::new(&BatteryConfig::default(), 10.0);
    assert!((energy.estimated_range_km() - 80.0).abs() < TOL);
}

#[test]
fn agent_pursues_nearest_target_in_a_straight_line() {
    let mut field = empty_field();
    field.insert(Vec2::new(100.0, 0.0));

    let mut agent = Agent::new(Vec2::new(0.0, 0.0), &VesselConfig::default());
    let outcome = agent.tick(1.0, false, &mut field);

    assert!((agent.pos().x - 80.0).abs() < TOL);
    assert!(agent.pos().y.abs() < TOL);
    assert!((outcome.distance_px - 80.0).abs() < TOL);
    // 20 px short of the target, outside the 10 px capture radius.
    assert!(!outcome.collected);
    assert_eq!(field.len(), 1);
}

#[test]
fn collection_below_capacity_spawns_a_replacement() {
    let mut field = empty_field();
    field.insert(Vec2::new(5.0, 0.0));

    let mut agent = Agent::new(Vec2::new(0.0, 0.0), &VesselConfig::default());
    let outcome = agent.tick(0.01, false, &mut field);

    assert!(outcome.collected);
    assert!(!outcome.reached_capacity);
    assert_eq!(agent.carried(), 1);

    // The replacement spawned inside the arena margins.
    assert_eq!(field.len(), 1);
    let arena = ArenaConfig::default();
    let pos = field.items()[0].pos;
    assert!(pos.x >= arena.spawn_margin_px && pos.x <= arena.width_px - arena.spawn_margin_px);
    assert!(pos.y >= arena.spawn_margin_px && pos.y <= arena.height_px - arena.spawn_margin_px);
}

#[test]
fn final_collection_fills_the_hold_without_a_replacement() {
    let cfg = VesselConfig {
        max_capacity: 1,
        ..VesselConfig::default()
    };

    let mut field = empty_field();
    field.insert(Vec2::new(5.0, 0.0));

    let mut agent = Agent::new(Vec2::new(0.0, 0.0), &cfg);
    let outcome = agent.tick(0.01, false, &mut field);

    assert!(outcome.collected);
    assert!(outcome.reached_capacity);
    assert!(agent.at_capacity());
    assert!(field.is_empty());
}

#[test]
fn full_hold_idles_until_day_reset() {
    let cfg = VesselConfig {
        max_capacity: 1,
        ..VesselConfig::default()
    };

    let mut field = empty_field();
    field.insert(Vec2::new(5.0, 0.0));

    let mut agent = Agent::new(Vec2::new(0.0, 0.0), &cfg);
    agent.tick(0.01, false, &mut field);
    assert!(agent.at_capacity());

    // Fresh targets appear, but the full vessel stays put.
    field.insert(Vec2::new(100.0, 100.0));
    let pos_before = agent.pos();
    let outcome = agent.tick(1.0, false, &mut field);

    assert!(outcome.distance_px.abs() < TOL);
    assert_eq!(agent.pos(), pos_before);
    assert_eq!(agent.carried(), 1);
}

#[test]
fn empty_battery_stops_the_vessel() {
    let mut field = empty_field();
    field.insert(Vec2::new(100.0, 0.0));

    let mut agent = Agent::new(Vec2::new(0.0, 0.0), &VesselConfig::default());
    let outcome = agent.tick(1.0, true, &mut field);

    assert!(outcome.distance_px.abs() < TOL);
    assert_eq!(agent.pos(), Vec2::new(0.0, 0.0));
    assert_eq!(field.len(), 1);
}

#[test]
fn empty_field_is_an_idle_no_op() {
    let mut field = empty_field();
    let mut agent = Agent::new(Vec2::new(0.0, 0.0), &VesselConfig::default());

    let outcome = agent.tick(1.0, false, &mut field);
    assert!(outcome.distance_px.abs() < TOL);
    assert!(!outcome.collected);
}

#[test]
fn capacity_marker_is_written_at_most_once_per_day() {
    let mut session = DaySession::new();

    session.accumulate(3.0, 0.0, 0.0, 0.0, true);
    assert_eq!(session.time_to_capacity_s(), Some(3.0));

    session.accumulate(4.0, 0.0, 0.0, 0.0, true);
    assert_eq!(session.time_to_capacity_s(), Some(3.0));

    let energy = EnergyModel::new(&BatteryConfig::default(), 10.0);
    let summary = session.summary(&energy, 12.0, 10.0);
    assert_eq!(summary.days_to_capacity, Some(0.25));
}

#[test]
fn day_boundary_freezes_and_reset_preserves_battery() {
    let mut engine = Engine::new(Config::default(), Some(42)).expect("failed to construct engine");

    // Default day is 12 s; fixed half-second ticks cross it in 24 steps.
    while engine.phase() == Phase::Running {
        engine.step(0.5);
    }
    assert_eq!(engine.phase(), Phase::DayComplete);

    let summary = engine.summary().expect("missing day summary").clone();
    assert_eq!(summary.day, 1);
    assert!(summary.solar_kwh > 0.0);

    let level_before = engine.energy().battery().level_kwh();
    engine.acknowledge();

    assert_eq!(engine.phase(), Phase::Running);
    assert_eq!(engine.session().day(), 2);
    assert!(engine.session().time_in_day_s().abs() < TOL);
    assert!(engine.session().solar_kwh().abs() < TOL);
    assert!(engine.session().consumed_kwh().abs() < TOL);
    assert_eq!(engine.session().time_to_capacity_s(), None);
    assert!(engine.summary().is_none());

    // Battery charge carries over across the boundary.
    assert_eq!(engine.energy().battery().level_kwh(), level_before);

    // Vessel recentered with an empty hold, field repopulated in bounds.
    let cfg = engine.cfg().clone();
    assert_eq!(engine.agent().pos(), cfg.arena_center());
    assert_eq!(engine.agent().carried(), 0);
    assert_eq!(engine.field().len(), cfg.debris.initial_count);
    for debris in engine.field().items() {
        let margin = cfg.arena.spawn_margin_px;
        assert!(debris.pos.x >= margin && debris.pos.x <= cfg.arena.width_px - margin);
        assert!(debris.pos.y >= margin && debris.pos.y <= cfg.arena.height_px - margin);
    }
}

#[test]
fn seeded_runs_place_debris_identically() {
    let one = Engine::new(Config::default(), Some(7)).expect("failed to construct engine");
    let two = Engine::new(Config::default(), Some(7)).expect("failed to construct engine");

    assert_eq!(one.field().len(), two.field().len());
    for (a, b) in one.field().items().iter().zip(two.field().items()) {
        assert_eq!(a.pos, b.pos);
    }
}

#[test]
fn quit_is_terminal_in_either_phase() {
    let mut engine = Engine::new(Config::default(), Some(3)).expect("failed to construct engine");

    engine.step(0.5);
    let time = engine.session().time_in_day_s();

    engine.quit();
    assert_eq!(engine.phase(), Phase::Stopped);

    // Further ticks and acknowledgments are ignored.
    engine.step(0.5);
    engine.acknowledge();
    assert_eq!(engine.phase(), Phase::Stopped);
    assert_eq!(engine.session().time_in_day_s(), time);
}

#[test]
fn degenerate_configs_are_rejected() {
    let mut cfg = Config::default();
    cfg.arena.spawn_margin_px = 400.0;
    assert!(cfg.validate().is_err());

    let mut cfg = Config::default();
    cfg.vessel.max_capacity = 0;
    assert!(cfg.validate().is_err());

    let mut cfg = Config::default();
    cfg.battery.capacity_kwh = 0.0;
    assert!(cfg.validate().is_err());

    let mut cfg = Config::default();
    cfg.cycle.day_duration_s = 0.0;
    assert!(cfg.validate().is_err());

    assert!(Config::default().validate().is_ok());
}
