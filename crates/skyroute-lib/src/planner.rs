//! Simulation entry points tying parsing, search, and encoding together.
//!
//! One invocation is a single, non-preemptible computation: the frontier and
//! distance/predecessor maps live for one call and are released when it
//! returns, and the scenario is only borrowed. Multiple invocations are
//! fully independent; callers wanting bounded latency or throughput impose
//! timeouts and concurrency limits outside the library.

use tracing::debug;

use crate::error::Result;
use crate::output::{FlightSummary, SimulationResult};
use crate::scenario::Scenario;
use crate::search::shortest_flight;

/// Run the search for an already parsed scenario.
pub fn plan_flight(scenario: &Scenario) -> Result<SimulationResult> {
    match shortest_flight(scenario) {
        Some(plan) => Ok(SimulationResult::Reached(FlightSummary::from_plan(&plan)?)),
        None => {
            debug!("reporting unreachable delivery cell");
            Ok(SimulationResult::Unreachable)
        }
    }
}

/// Parse the scenario grammar and run the search: the library's single
/// input-to-output operation.
pub fn run_simulation(input: &str) -> Result<SimulationResult> {
    let scenario = Scenario::parse(input)?;
    plan_flight(&scenario)
}
