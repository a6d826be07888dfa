//! Skyroute library entry points.
//!
//! This crate parses drone flight scenarios (a rooftop elevation grid,
//! battery limits, and charging stations), runs the minimum-time path search
//! over the full (position, battery, altitude) state space, and encodes the
//! resulting flight. Higher-level consumers (the CLI) should only depend on
//! the functions exported here instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod error;
pub mod flight;
pub mod grid;
pub mod output;
pub mod planner;
pub mod scenario;
pub mod search;

pub use error::{Error, Result};
pub use flight::FlightState;
pub use grid::{Cell, Grid};
pub use output::{FlightStep, FlightSummary, RenderMode, SimulationResult, UNREACHABLE_SENTINEL};
pub use planner::{plan_flight, run_simulation};
pub use scenario::Scenario;
pub use search::{shortest_flight, FlightPlan, FlightPoint};
