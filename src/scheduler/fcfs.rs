//! First-Come-First-Served.
//!
//! # Algorithm
//!
//! 1. Stable-sort processes by arrival time (ties keep input order).
//! 2. Run each to completion in that order, starting at
//!    `max(clock, arrival_time)`; a later arrival leaves the CPU idle.
//!
//! # Complexity
//! O(n log n) for the sort, O(n) for the run.

use super::state::RunState;
use crate::error::SimulationError;

pub(crate) fn run(state: &mut RunState<'_>) -> Result<(), SimulationError> {
    let order = state.order().to_vec();
    for index in order {
        let process = state.process(index);
        if process.arrival_time > state.now() {
            state.idle_until(process.arrival_time)?;
        }
        state.execute(index, process.burst_time, false)?;
    }
    Ok(())
}
