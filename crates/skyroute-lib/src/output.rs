use std::fmt::Write;

use serde::Serialize;

use crate::error::{Error, Result};
use crate::search::FlightPlan;

/// Sentinel emitted when the delivery cell cannot be reached.
pub const UNREACHABLE_SENTINEL: &str = "-1";

/// Presentation style for turning a [`SimulationResult`] into text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    /// The wire format consumed by embedding layers.
    Json,
    /// Human-readable step listing for terminal use.
    PlainText,
}

/// One step of the encoded flight path.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct FlightStep {
    pub row: usize,
    pub col: usize,
    pub battery: u64,
    pub altitude: u64,
    pub time: u64,
}

/// Serializable summary of a completed flight.
///
/// `path[0]` is the launch state and the last element is a delivery-cell
/// state; `time` equals the last element's cumulative time.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FlightSummary {
    pub time: u64,
    pub path: Vec<FlightStep>,
}

impl FlightSummary {
    /// Convert a reconstructed [`FlightPlan`] into its encoded summary.
    pub fn from_plan(plan: &FlightPlan) -> Result<Self> {
        if plan.points.is_empty() {
            return Err(Error::EmptyFlightPlan);
        }

        let path = plan
            .points
            .iter()
            .map(|point| FlightStep {
                row: point.state.row,
                col: point.state.col,
                battery: point.state.battery,
                altitude: point.state.altitude,
                time: point.time,
            })
            .collect();

        Ok(Self {
            time: plan.total_time,
            path,
        })
    }
}

/// Outcome of one simulation: a completed flight or the unreachable sentinel.
///
/// Unreachable is a defined, successful outcome, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimulationResult {
    Reached(FlightSummary),
    Unreachable,
}

impl SimulationResult {
    /// Render the result using the requested mode.
    pub fn render(&self, mode: RenderMode) -> Result<String> {
        match mode {
            RenderMode::Json => self.to_json(),
            RenderMode::PlainText => Ok(self.render_plain()),
        }
    }

    /// Encode as the wire format: a JSON object for a completed flight, the
    /// bare sentinel otherwise.
    pub fn to_json(&self) -> Result<String> {
        match self {
            SimulationResult::Reached(summary) => Ok(serde_json::to_string_pretty(summary)?),
            SimulationResult::Unreachable => Ok(UNREACHABLE_SENTINEL.to_string()),
        }
    }

    fn render_plain(&self) -> String {
        let mut buffer = String::new();
        match self {
            SimulationResult::Unreachable => {
                let _ = writeln!(buffer, "Unreachable: no flight stays within the battery limit");
            }
            SimulationResult::Reached(summary) => {
                if let (Some(first), Some(last)) = (summary.path.first(), summary.path.last()) {
                    let _ = writeln!(
                        buffer,
                        "Flight: ({}, {}) -> ({}, {}) ({} seconds, {} steps)",
                        first.row,
                        first.col,
                        last.row,
                        last.col,
                        summary.time,
                        summary.path.len().saturating_sub(1)
                    );
                }
                for (index, step) in summary.path.iter().enumerate() {
                    let _ = writeln!(
                        buffer,
                        "{:>3}: ({}, {}) battery={} altitude={} t={}",
                        index, step.row, step.col, step.battery, step.altitude, step.time
                    );
                }
            }
        }
        buffer
    }
}
