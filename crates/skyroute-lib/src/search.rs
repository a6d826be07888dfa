use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

use tracing::debug;

use crate::flight::{advance, FlightState, DIRECTIONS};
use crate::scenario::Scenario;

/// One reconstructed waypoint: a state plus the cumulative time to reach it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlightPoint {
    pub state: FlightState,
    pub time: u64,
}

/// Minimum-time flight from the launch cell to the delivery cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlightPlan {
    /// Arrival time at the delivery cell.
    pub total_time: u64,
    /// Launch-to-delivery sequence of waypoints.
    pub points: Vec<FlightPoint>,
}

/// Find the minimum-time flight to the bottom-right delivery cell.
///
/// Runs Dijkstra's algorithm over the full flight state rather than grid
/// position alone: reachability and cost depend on battery and altitude
/// history, so distances and predecessor links are keyed by the complete
/// (row, col, battery, altitude) tuple in sparse maps.
///
/// Frontier entries are never removed when a state improves; a popped entry
/// worse than the recorded best for its exact state is discarded as stale.
/// Because move costs are non-negative, the first non-stale pop of a
/// delivery-cell state carries the global minimum arrival time, and the
/// search returns there. Returns `None` when the frontier drains without
/// reaching the delivery cell.
pub fn shortest_flight(scenario: &Scenario) -> Option<FlightPlan> {
    let launch = FlightState::launch(scenario);
    let destination = scenario.grid.destination();

    let mut best_times: HashMap<FlightState, u64> = HashMap::new();
    let mut predecessors: HashMap<FlightState, FlightState> = HashMap::new();
    let mut frontier = BinaryHeap::new();

    best_times.insert(launch, 0);
    frontier.push(FrontierEntry {
        time: 0,
        state: launch,
    });

    while let Some(entry) = frontier.pop() {
        if let Some(&best) = best_times.get(&entry.state) {
            if best < entry.time {
                continue;
            }
        }

        if entry.state.cell() == destination {
            debug!(
                "delivery cell reached in {}s after settling {} states",
                entry.time,
                best_times.len()
            );
            return Some(reconstruct(&best_times, &predecessors, entry.state, entry.time));
        }

        for direction in DIRECTIONS {
            let Some(step) = advance(scenario, &entry.state, direction) else {
                continue;
            };
            let time = entry.time + step.cost;
            if time < best_times.get(&step.state).copied().unwrap_or(u64::MAX) {
                best_times.insert(step.state, time);
                predecessors.insert(step.state, entry.state);
                frontier.push(FrontierEntry {
                    time,
                    state: step.state,
                });
            }
        }
    }

    debug!(
        "frontier drained after {} states; delivery cell unreachable",
        best_times.len()
    );
    None
}

/// Walk predecessor links back from the delivery state to the launch state
/// and reverse into launch-to-delivery order.
///
/// The walk is bounded: a state's predecessor is always strictly earlier in
/// time, so the chain terminates at the launch state, which has no link.
fn reconstruct(
    best_times: &HashMap<FlightState, u64>,
    predecessors: &HashMap<FlightState, FlightState>,
    terminal: FlightState,
    total_time: u64,
) -> FlightPlan {
    let mut points = Vec::new();
    let mut current = terminal;
    let mut time = total_time;

    loop {
        points.push(FlightPoint {
            state: current,
            time,
        });
        match predecessors.get(&current) {
            Some(&previous) => {
                current = previous;
                time = best_times
                    .get(&previous)
                    .copied()
                    .expect("predecessor chain states carry recorded times");
            }
            None => break,
        }
    }

    points.reverse();
    FlightPlan { total_time, points }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct FrontierEntry {
    time: u64,
    state: FlightState,
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse time ordering so BinaryHeap becomes a min-heap. Ties prefer
        // the entry with more battery left, then fall back to state ordering
        // so results never depend on insertion sequence.
        other
            .time
            .cmp(&self.time)
            .then_with(|| self.state.battery.cmp(&other.state.battery))
            .then_with(|| other.state.cmp(&self.state))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frontier_orders_by_smallest_time_first() {
        let state = |battery| FlightState {
            row: 0,
            col: 0,
            battery,
            altitude: 0,
        };

        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            time: 5,
            state: state(1),
        });
        frontier.push(FrontierEntry {
            time: 2,
            state: state(1),
        });
        frontier.push(FrontierEntry {
            time: 9,
            state: state(1),
        });

        assert_eq!(frontier.pop().map(|e| e.time), Some(2));
        assert_eq!(frontier.pop().map(|e| e.time), Some(5));
        assert_eq!(frontier.pop().map(|e| e.time), Some(9));
    }

    #[test]
    fn equal_times_prefer_more_battery() {
        let state = |battery| FlightState {
            row: 0,
            col: 0,
            battery,
            altitude: 0,
        };

        let mut frontier = BinaryHeap::new();
        frontier.push(FrontierEntry {
            time: 4,
            state: state(2),
        });
        frontier.push(FrontierEntry {
            time: 4,
            state: state(7),
        });

        assert_eq!(frontier.pop().map(|e| e.state.battery), Some(7));
    }

    #[test]
    fn single_cell_grid_solves_in_zero_time() {
        let scenario = Scenario::parse("1 1 5 2\n3\n0\n").expect("valid scenario");
        let plan = shortest_flight(&scenario).expect("reachable");

        assert_eq!(plan.total_time, 0);
        assert_eq!(plan.points.len(), 1);
        assert_eq!(plan.points[0].state.cell(), (0, 0));
        assert_eq!(plan.points[0].state.battery, 5);
        assert_eq!(plan.points[0].state.altitude, 3);
    }

    #[test]
    fn flat_two_by_two_takes_two_moves() {
        let scenario = Scenario::parse("2 2 2 0\n0 0\n0 0\n0\n").expect("valid scenario");
        let plan = shortest_flight(&scenario).expect("reachable");

        assert_eq!(plan.total_time, 2);
        assert_eq!(plan.points.len(), 3);
        assert_eq!(plan.points.last().map(|p| p.state.cell()), Some((1, 1)));
    }

    #[test]
    fn battery_wall_makes_delivery_unreachable() {
        let scenario = Scenario::parse("2 2 5 0\n0 100\n100 100\n0\n").expect("valid scenario");
        assert_eq!(shortest_flight(&scenario), None);
    }
}
