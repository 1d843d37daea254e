//! Ready-set selection loop shared by SJF and Priority.
//!
//! # Algorithm
//!
//! 1. Ready set = arrived processes with remaining work, in arrival order.
//! 2. Empty ready set: jump the clock to the next arrival (no segment).
//! 3. Pick the minimum-key entry via [`select_next`] (ties: earliest in
//!    arrival order).
//! 4. Non-preemptive: run the pick to completion.
//!    Preemptive: run it until it completes or the next arrival, whichever
//!    is first, then re-select. Keys of waiting processes never change
//!    between arrivals, so this is equivalent to re-selecting every tick.
//!
//! # Complexity
//! O(n) decisions per arrival or completion, O(n²) overall.

use super::state::RunState;
use crate::dispatching::{select_next, SelectionRule};
use crate::error::SimulationError;

pub(crate) fn run<R: SelectionRule + ?Sized>(
    state: &mut RunState<'_>,
    rule: &R,
    preemptive: bool,
    priorities: &[i32],
) -> Result<(), SimulationError> {
    while !state.is_finished() {
        let ready = state.ready_entries(priorities);
        let picked = select_next(rule, &ready).map(|i| ready[i].rank);

        let Some(rank) = picked else {
            match state.next_arrival() {
                Some(time) => {
                    state.idle_until(time)?;
                    continue;
                }
                None => break,
            }
        };

        let index = state.index_at_rank(rank);
        let remaining = state.remaining(index);
        let slice = if preemptive {
            state
                .next_arrival()
                .map_or(remaining, |t| remaining.min(t - state.now()))
        } else {
            remaining
        };
        state.execute(index, slice, preemptive)?;
    }
    debug_assert!(state.is_finished(), "{} stopped with work left", rule.name());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dispatching::rules::{HighestPriority, ShortestBurst, ShortestRemaining};
    use crate::models::{ExecutionSegment, Process};

    fn priorities_of(processes: &[Process]) -> Vec<i32> {
        processes.iter().map(|p| p.priority.unwrap_or(0)).collect()
    }

    fn run_rule<R: SelectionRule>(
        processes: &[Process],
        rule: R,
        preemptive: bool,
    ) -> Vec<ExecutionSegment> {
        let mut state = RunState::new(processes, None);
        run(&mut state, &rule, preemptive, &priorities_of(processes)).unwrap();
        assert!(state.is_finished());
        state.into_timeline().segments().to_vec()
    }

    #[test]
    fn test_sjf_non_preemptive_picks_shortest_ready() {
        let processes = vec![
            Process::new(1, 0, 7),
            Process::new(2, 2, 4),
            Process::new(3, 4, 1),
            Process::new(4, 5, 4),
        ];
        assert_eq!(
            run_rule(&processes, ShortestBurst, false),
            vec![
                ExecutionSegment::new(1, 0, 7),
                ExecutionSegment::new(3, 7, 1),
                ExecutionSegment::new(2, 8, 4),
                ExecutionSegment::new(4, 12, 4),
            ]
        );
    }

    #[test]
    fn test_srtf_preempts_on_shorter_arrival() {
        let processes = vec![
            Process::new(1, 0, 7),
            Process::new(2, 2, 4),
            Process::new(3, 4, 1),
            Process::new(4, 5, 4),
        ];
        assert_eq!(
            run_rule(&processes, ShortestRemaining, true),
            vec![
                ExecutionSegment::new(1, 0, 2),
                ExecutionSegment::new(2, 2, 2),
                ExecutionSegment::new(3, 4, 1),
                ExecutionSegment::new(2, 5, 2),
                ExecutionSegment::new(4, 7, 4),
                ExecutionSegment::new(1, 11, 5),
            ]
        );
    }

    #[test]
    fn test_srtf_equal_remaining_does_not_preempt() {
        // P2 arrives with the same remaining time as P1: P1 keeps the CPU.
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 3)];
        assert_eq!(
            run_rule(&processes, ShortestRemaining, true),
            vec![ExecutionSegment::new(1, 0, 4), ExecutionSegment::new(2, 4, 3)]
        );
    }

    #[test]
    fn test_tie_break_uses_arrival_order_not_id() {
        let processes = vec![
            Process::new(9, 0, 1),
            Process::new(5, 1, 3),
            Process::new(2, 1, 3),
        ];
        let ids: Vec<u32> = run_rule(&processes, ShortestBurst, false)
            .iter()
            .map(|s| s.process_id)
            .collect();
        assert_eq!(ids, vec![9, 5, 2]);
    }

    #[test]
    fn test_priority_preemptive() {
        let processes = vec![
            Process::new(1, 0, 4).with_priority(2),
            Process::new(2, 1, 3).with_priority(1),
        ];
        assert_eq!(
            run_rule(&processes, HighestPriority, true),
            vec![
                ExecutionSegment::new(1, 0, 1),
                ExecutionSegment::new(2, 1, 3),
                ExecutionSegment::new(1, 4, 3),
            ]
        );
    }

    #[test]
    fn test_priority_non_preemptive_waits_for_running() {
        let processes = vec![
            Process::new(1, 0, 4).with_priority(2),
            Process::new(2, 1, 3).with_priority(1),
            Process::new(3, 1, 1).with_priority(3),
        ];
        let ids: Vec<u32> = run_rule(&processes, HighestPriority, false)
            .iter()
            .map(|s| s.process_id)
            .collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn test_idle_gap_before_first_arrival() {
        let processes = vec![Process::new(1, 3, 2), Process::new(2, 10, 1)];
        assert_eq!(
            run_rule(&processes, ShortestRemaining, true),
            vec![ExecutionSegment::new(1, 3, 2), ExecutionSegment::new(2, 10, 1)]
        );
    }

    #[test]
    fn test_preemptive_keeps_running_process_in_one_segment() {
        // Arrivals of longer jobs split the run internally, but the timeline
        // shows one uninterrupted slice.
        let processes = vec![
            Process::new(1, 0, 5),
            Process::new(2, 1, 9),
            Process::new(3, 2, 9),
        ];
        let segments = run_rule(&processes, ShortestRemaining, true);
        assert_eq!(segments[0], ExecutionSegment::new(1, 0, 5));
        assert_eq!(segments.len(), 3);
    }
}
