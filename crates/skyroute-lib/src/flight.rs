use crate::grid::Cell;
use crate::scenario::Scenario;

/// The four axis-aligned directions a drone may move in.
pub const DIRECTIONS: [(isize, isize); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// The unit of search identity: where the drone is, how much battery
/// remains, and how high it is currently flying.
///
/// Altitude tracks the tallest rooftop crossed so far and never decreases
/// along a route, so the same cell can legitimately appear many times with
/// different battery/altitude combinations; each unlocks a different set of
/// future moves and must be explored independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlightState {
    pub row: usize,
    pub col: usize,
    pub battery: u64,
    pub altitude: u64,
}

impl FlightState {
    /// The launch state: top-left cell, full battery, level with the launch
    /// rooftop. No climb is ever charged for the starting cell itself.
    pub fn launch(scenario: &Scenario) -> Self {
        Self {
            row: 0,
            col: 0,
            battery: scenario.battery_capacity,
            altitude: scenario.grid.elevation(scenario.grid.origin()),
        }
    }

    /// Grid cell this state occupies.
    pub fn cell(&self) -> Cell {
        (self.row, self.col)
    }
}

/// A legal single move: the state after it and the time it costs.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub state: FlightState,
    pub cost: u64,
}

/// Evaluate one direction from `state`.
///
/// Every move costs one second and one unit of battery. Entering a rooftop
/// taller than the current altitude additionally costs the climb in both
/// time and battery and raises the altitude to the new rooftop; lower or
/// equal rooftops are overflown at the current altitude with no extra cost
/// and no refund. Moves that would leave the grid or drain the battery below
/// zero return `None`. Arriving at a charging station restores the charge
/// amount, capped at capacity, on every visit.
pub fn advance(scenario: &Scenario, state: &FlightState, direction: (isize, isize)) -> Option<Move> {
    let row = state.row.checked_add_signed(direction.0)?;
    let col = state.col.checked_add_signed(direction.1)?;
    if !scenario.grid.contains((row, col)) {
        return None;
    }

    let elevation = scenario.grid.elevation((row, col));
    let climb = elevation.saturating_sub(state.altitude);
    let cost = 1 + climb;
    let battery = state.battery.checked_sub(cost)?;
    let altitude = state.altitude.max(elevation);

    let battery = if scenario.is_station((row, col)) {
        scenario
            .battery_capacity
            .min(battery.saturating_add(scenario.charge_amount))
    } else {
        battery
    };

    Some(Move {
        state: FlightState {
            row,
            col,
            battery,
            altitude,
        },
        cost,
    })
}
