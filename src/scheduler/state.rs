//! Shared simulation state: virtual clock, remaining work, timeline.
//!
//! Every discipline drives the same [`RunState`]; they differ only in how
//! they pick the next process and how long they let it run.

use tracing::{trace, warn};

use crate::dispatching::ReadyEntry;
use crate::error::SimulationError;
use crate::models::{arrival_order, ExecutionSegment, Process, Time, Timeline};

pub(crate) struct RunState<'a> {
    processes: &'a [Process],
    /// Input indices in arrival order; position = tie-break rank.
    order: Vec<usize>,
    /// Remaining work per input index.
    remaining: Vec<Time>,
    completed: usize,
    now: Time,
    limit: Time,
    timeline: Timeline,
}

impl<'a> RunState<'a> {
    pub(crate) fn new(processes: &'a [Process], time_limit: Option<Time>) -> Self {
        let limit = time_limit.unwrap_or_else(|| default_time_limit(processes));
        Self {
            processes,
            order: arrival_order(processes),
            remaining: processes.iter().map(|p| p.burst_time).collect(),
            completed: 0,
            now: 0,
            limit,
            timeline: Timeline::new(),
        }
    }

    pub(crate) fn now(&self) -> Time {
        self.now
    }

    pub(crate) fn process(&self, index: usize) -> &'a Process {
        &self.processes[index]
    }

    pub(crate) fn remaining(&self, index: usize) -> Time {
        self.remaining[index]
    }

    /// Input indices in arrival order.
    pub(crate) fn order(&self) -> &[usize] {
        &self.order
    }

    pub(crate) fn is_finished(&self) -> bool {
        self.completed == self.processes.len()
    }

    /// Arrived, unfinished processes in rank order.
    pub(crate) fn ready_entries(&self, priorities: &[i32]) -> Vec<ReadyEntry<'a>> {
        let processes = self.processes;
        self.order
            .iter()
            .enumerate()
            .filter(|&(_, &i)| processes[i].has_arrived(self.now) && self.remaining[i] > 0)
            .map(move |(rank, &i)| {
                ReadyEntry::new(&processes[i], rank, self.remaining[i], priorities[i])
            })
            .collect()
    }

    /// Input index of the process at `rank` in arrival order.
    pub(crate) fn index_at_rank(&self, rank: usize) -> usize {
        self.order[rank]
    }

    /// Earliest arrival strictly after the current time.
    pub(crate) fn next_arrival(&self) -> Option<Time> {
        self.order
            .iter()
            .map(|&i| self.processes[i].arrival_time)
            .find(|&t| t > self.now)
    }

    /// Moves the clock forward over idle time.
    pub(crate) fn idle_until(&mut self, time: Time) -> Result<(), SimulationError> {
        debug_assert!(time >= self.now, "clock cannot move backwards");
        trace!(from = self.now, to = time, "cpu idle");
        self.now = time;
        self.check_limit()
    }

    /// Runs process `index` for `duration` ticks starting now.
    ///
    /// With `coalesce`, the slice is merged into the previous segment when the
    /// same process was already running.
    pub(crate) fn execute(
        &mut self,
        index: usize,
        duration: Time,
        coalesce: bool,
    ) -> Result<(), SimulationError> {
        debug_assert!(duration > 0 && duration <= self.remaining[index]);
        let id = self.processes[index].id;
        trace!(process = id, start = self.now, duration, "dispatch");
        let Some(end) = self.now.checked_add(duration) else {
            warn!(start = self.now, duration, "simulation clock overflow");
            return Err(SimulationError::TimeLimitExceeded {
                limit: self.limit,
                at: Time::MAX,
            });
        };

        if coalesce {
            self.timeline.extend(id, self.now, duration);
        } else {
            self.timeline
                .push(ExecutionSegment::new(id, self.now, duration));
        }

        self.now = end;
        self.remaining[index] -= duration;
        if self.remaining[index] == 0 {
            self.completed += 1;
            trace!(process = id, at = self.now, "completed");
        }
        self.check_limit()
    }

    pub(crate) fn into_timeline(self) -> Timeline {
        self.timeline
    }

    fn check_limit(&self) -> Result<(), SimulationError> {
        if self.now > self.limit {
            warn!(limit = self.limit, at = self.now, "simulation time limit exceeded");
            return Err(SimulationError::TimeLimitExceeded {
                limit: self.limit,
                at: self.now,
            });
        }
        Ok(())
    }
}

/// Latest arrival plus total burst: no valid run can end later.
pub(crate) fn default_time_limit(processes: &[Process]) -> Time {
    let last_arrival = processes.iter().map(|p| p.arrival_time).max().unwrap_or(0);
    processes
        .iter()
        .fold(last_arrival, |acc, p| acc.saturating_add(p.burst_time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Process> {
        vec![
            Process::new(1, 3, 2),
            Process::new(2, 0, 4),
            Process::new(3, 3, 1),
        ]
    }

    #[test]
    fn test_default_time_limit() {
        assert_eq!(default_time_limit(&sample()), 3 + 7);
        assert_eq!(default_time_limit(&[]), 0);
    }

    #[test]
    fn test_ready_entries_follow_arrival_rank() {
        let processes = sample();
        let mut state = RunState::new(&processes, None);
        assert_eq!(state.ready_entries(&[0, 0, 0]).len(), 1);

        state.idle_until(3).unwrap();
        let ready = state.ready_entries(&[0, 0, 0]);
        let ids: Vec<u32> = ready.iter().map(|e| e.process.id).collect();
        assert_eq!(ids, vec![2, 1, 3]);
        assert_eq!(ready[1].rank, 1);
        assert_eq!(state.index_at_rank(1), 0);
    }

    #[test]
    fn test_next_arrival() {
        let processes = sample();
        let mut state = RunState::new(&processes, None);
        assert_eq!(state.next_arrival(), Some(3));
        state.idle_until(3).unwrap();
        assert_eq!(state.next_arrival(), None);
    }

    #[test]
    fn test_execute_tracks_completion() {
        let processes = sample();
        let mut state = RunState::new(&processes, None);
        state.execute(1, 3, true).unwrap();
        state.execute(1, 1, true).unwrap();
        assert_eq!(state.remaining(1), 0);
        assert!(!state.is_finished());
        assert_eq!(state.now(), 4);

        let timeline = state.into_timeline();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.service_time(2), 4);
    }

    #[test]
    fn test_time_limit_trips() {
        let processes = sample();
        let mut state = RunState::new(&processes, Some(2));
        let err = state.execute(1, 3, false).unwrap_err();
        assert_eq!(err, SimulationError::TimeLimitExceeded { limit: 2, at: 3 });
    }

    #[test]
    fn test_clock_overflow_is_an_error() {
        let processes = vec![Process::new(1, Time::MAX - 1, 5)];
        let mut state = RunState::new(&processes, None);
        state.idle_until(Time::MAX - 1).unwrap();
        let err = state.execute(0, 5, false).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::TimeLimitExceeded { at: Time::MAX, .. }
        ));
        assert!(state.into_timeline().is_empty());
    }
}
