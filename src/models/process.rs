//! Process (input) model.
//!
//! A process is an immutable request for CPU time: it becomes eligible at
//! its arrival time and needs exactly its burst time of service.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5

use serde::{Deserialize, Serialize};

use super::{ProcessId, Time};

/// A process to be scheduled.
///
/// # Time Representation
/// All times are abstract integer ticks relative to the simulation epoch (t=0).
///
/// # Priority
/// Lower numeric value = more urgent. Only consulted by the Priority algorithm.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Process {
    /// Unique process identifier (> 0).
    pub id: ProcessId,
    /// Instant at which the process becomes eligible to run.
    pub arrival_time: Time,
    /// Total CPU time needed to run to completion.
    pub burst_time: Time,
    /// Scheduling priority (lower = more urgent). `None` = not supplied.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
}

impl Process {
    /// Creates a process without a priority.
    pub fn new(id: ProcessId, arrival_time: Time, burst_time: Time) -> Self {
        Self {
            id,
            arrival_time,
            burst_time,
            priority: None,
        }
    }

    /// Sets the scheduling priority.
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Whether the process has arrived by `time`.
    #[inline]
    pub fn has_arrived(&self, time: Time) -> bool {
        self.arrival_time <= time
    }
}

/// Returns process indices ordered by arrival time.
///
/// The sort is stable: processes arriving at the same instant keep their
/// input order. Every selection rule breaks ties by position in this order.
pub(crate) fn arrival_order(processes: &[Process]) -> Vec<usize> {
    let mut indices: Vec<usize> = (0..processes.len()).collect();
    indices.sort_by_key(|&i| processes[i].arrival_time);
    indices
}
