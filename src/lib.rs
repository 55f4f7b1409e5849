//! Real-time simulation of a solar-powered autonomous ocean-cleanup
//! vessel.
//!
//! A single vessel seeks and collects drifting debris in a bounded arena
//! while a day/night cycle drives solar charging and propulsion drains the
//! battery. The simulation core lives here; the windowed frontend lives in
//! the binary.

pub mod agent;
pub mod clock;
pub mod config;
pub mod daycycle;
pub mod debris;
pub mod energy;
pub mod engine;
pub mod geom;
pub mod session;
