//! Per-process timing results.

use serde::{Deserialize, Serialize};

use super::{Process, ProcessId, Time};

/// Timing metrics for one fully serviced process.
///
/// A fresh record is built per run; the input [`Process`] is copied in,
/// never modified.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProcessResult {
    /// The input descriptor.
    pub process: Process,
    /// Time of first execution.
    pub start_time: Time,
    /// End of the last execution slice.
    pub completion_time: Time,
    /// `completion_time - arrival_time`.
    pub turnaround_time: Time,
    /// `turnaround_time - burst_time`.
    pub waiting_time: Time,
    /// `start_time - arrival_time`.
    pub response_time: Time,
}

impl ProcessResult {
    /// Derives all metrics from the first start and last completion.
    pub fn new(process: Process, start_time: Time, completion_time: Time) -> Self {
        let turnaround_time = completion_time - process.arrival_time;
        let waiting_time = turnaround_time - process.burst_time;
        let response_time = start_time - process.arrival_time;
        Self {
            process,
            start_time,
            completion_time,
            turnaround_time,
            waiting_time,
            response_time,
        }
    }

    /// Process identifier.
    #[inline]
    pub fn id(&self) -> ProcessId {
        self.process.id
    }

    /// Whether the process ran without ever being preempted.
    pub fn ran_uninterrupted(&self) -> bool {
        self.completion_time - self.start_time == self.process.burst_time
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_derivation() {
        let r = ProcessResult::new(Process::new(2, 1, 3), 5, 8);
        assert_eq!(r.id(), 2);
        assert_eq!(r.turnaround_time, 7);
        assert_eq!(r.waiting_time, 4);
        assert_eq!(r.response_time, 4);
        assert!(r.ran_uninterrupted());
    }

    #[test]
    fn test_result_preempted() {
        // Arrived 0, ran [0,1) then [4,7)
        let r = ProcessResult::new(Process::new(1, 0, 4), 0, 7);
        assert_eq!(r.waiting_time, 3);
        assert_eq!(r.response_time, 0);
        assert!(!r.ran_uninterrupted());
    }
}
