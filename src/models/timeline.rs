//! Execution timeline (Gantt) model.
//!
//! A timeline is the ordered sequence of CPU slices produced by one
//! simulation run. Idle time is never covered by a segment.
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3

use serde::{Deserialize, Serialize};

use super::{ProcessId, Time};

/// One contiguous slice of CPU time given to one process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionSegment {
    /// Process that held the CPU.
    pub process_id: ProcessId,
    /// Slice start.
    pub start_time: Time,
    /// Slice length (> 0).
    pub duration: Time,
}

impl ExecutionSegment {
    /// Creates a new segment.
    pub fn new(process_id: ProcessId, start_time: Time, duration: Time) -> Self {
        Self {
            process_id,
            start_time,
            duration,
        }
    }

    /// Exclusive end of the slice.
    #[inline]
    pub fn end_time(&self) -> Time {
        self.start_time + self.duration
    }
}

/// Append-only, start-ordered sequence of execution segments.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    segments: Vec<ExecutionSegment>,
}

impl Timeline {
    /// Creates an empty timeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a segment as a separate dispatch.
    pub fn push(&mut self, segment: ExecutionSegment) {
        debug_assert!(segment.duration > 0, "empty segment for P{}", segment.process_id);
        debug_assert!(
            self.segments
                .last()
                .map_or(true, |last| last.end_time() <= segment.start_time),
            "segment for P{} overlaps its predecessor",
            segment.process_id
        );
        self.segments.push(segment);
    }

    /// Appends CPU time, merging it into the last segment when the same
    /// process simply kept running.
    pub fn extend(&mut self, process_id: ProcessId, start_time: Time, duration: Time) {
        if let Some(last) = self.segments.last_mut() {
            if last.process_id == process_id && last.end_time() == start_time {
                last.duration += duration;
                return;
            }
        }
        self.push(ExecutionSegment::new(process_id, start_time, duration));
    }

    /// All segments in start order.
    pub fn segments(&self) -> &[ExecutionSegment] {
        &self.segments
    }

    /// Segments belonging to one process.
    pub fn segments_for(&self, process_id: ProcessId) -> Vec<&ExecutionSegment> {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .collect()
    }

    /// Total CPU time allocated to one process.
    pub fn service_time(&self, process_id: ProcessId) -> Time {
        self.segments
            .iter()
            .filter(|s| s.process_id == process_id)
            .map(|s| s.duration)
            .sum()
    }

    /// Latest segment end (0 for an empty timeline).
    pub fn makespan(&self) -> Time {
        self.segments.last().map_or(0, |s| s.end_time())
    }

    /// Total time the CPU was busy.
    pub fn busy_time(&self) -> Time {
        self.segments.iter().map(|s| s.duration).sum()
    }

    /// Time within `[0, makespan)` not covered by any segment.
    pub fn idle_time(&self) -> Time {
        self.makespan() - self.busy_time()
    }

    /// Number of switches between different processes.
    pub fn context_switches(&self) -> usize {
        self.segments
            .windows(2)
            .filter(|w| w[0].process_id != w[1].process_id)
            .count()
    }

    /// Number of segments.
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    /// Whether no segment was recorded.
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

impl<'a> IntoIterator for &'a Timeline {
    type Item = &'a ExecutionSegment;
    type IntoIter = std::slice::Iter<'a, ExecutionSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}
