//! Round Robin.
//!
//! # Algorithm
//!
//! 1. Admit every process with `arrival_time <= clock` to the back of a FIFO
//!    queue, in arrival order.
//! 2. Empty queue: jump the clock to the next arrival.
//! 3. Dispatch the queue front for `min(remaining, quantum)`.
//! 4. Admit arrivals up to the new clock value, **then** re-append the
//!    dispatched process if it still has work. A process arriving exactly when
//!    a slice ends is therefore queued ahead of the preempted one.
//!
//! Every dispatch is its own segment, even when the same process is
//! dispatched twice in a row.
//!
//! # Complexity
//! O(n + Σ burst / quantum).

use std::collections::VecDeque;

use super::state::RunState;
use crate::error::SimulationError;
use crate::models::Time;

pub(crate) fn run(state: &mut RunState<'_>, quantum: Time) -> Result<(), SimulationError> {
    debug_assert!(quantum > 0, "quantum must be validated before simulation");
    let order = state.order().to_vec();
    let mut queue: VecDeque<usize> = VecDeque::with_capacity(order.len());
    let mut next_admission = 0;

    while !state.is_finished() {
        admit(state, &order, &mut next_admission, &mut queue);

        let Some(index) = queue.pop_front() else {
            match state.next_arrival() {
                Some(time) => {
                    state.idle_until(time)?;
                    continue;
                }
                None => break,
            }
        };

        let slice = state.remaining(index).min(quantum);
        state.execute(index, slice, false)?;

        admit(state, &order, &mut next_admission, &mut queue);
        if state.remaining(index) > 0 {
            queue.push_back(index);
        }
    }
    Ok(())
}

/// Queues every not-yet-admitted process that has arrived by now.
fn admit(
    state: &RunState<'_>,
    order: &[usize],
    next_admission: &mut usize,
    queue: &mut VecDeque<usize>,
) {
    while let Some(&index) = order.get(*next_admission) {
        if !state.process(index).has_arrived(state.now()) {
            break;
        }
        queue.push_back(index);
        *next_admission += 1;
    }
}
