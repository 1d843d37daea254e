//! Aggregate performance indicators for a simulation run.
//!
//! # Metrics
//!
//! | Metric | Definition |
//! |--------|-----------|
//! | Makespan | End of the last segment |
//! | CPU Utilization | Busy time / makespan |
//! | Throughput | Completed processes / makespan |
//! | Context Switches | Adjacent segments of different processes |
//! | Avg Waiting | Mean(turnaround - burst) |
//! | Avg Turnaround | Mean(completion - arrival) |
//! | Avg Response | Mean(first run - arrival) |
//!
//! # Reference
//! Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.2: Scheduling Criteria

use serde::{Deserialize, Serialize};

use super::SimulationReport;
use crate::models::Time;

/// Scheduling performance indicators.
///
/// All time values are in simulation ticks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationKpi {
    /// Latest completion time.
    pub makespan: Time,
    /// Total CPU busy time.
    pub busy_time: Time,
    /// Idle time before the makespan.
    pub idle_time: Time,
    /// Fraction of the makespan the CPU was busy (0.0..1.0).
    pub cpu_utilization: f64,
    /// Processes completed per tick.
    pub throughput: f64,
    /// Switches between different processes.
    pub context_switches: usize,
    /// Mean waiting time.
    pub avg_waiting_time: f64,
    /// Mean turnaround time.
    pub avg_turnaround_time: f64,
    /// Mean response time.
    pub avg_response_time: f64,
    /// Longest waiting time of any single process.
    pub max_waiting_time: Time,
}

impl SimulationKpi {
    /// Computes KPIs from a finished run.
    pub fn calculate(report: &SimulationReport) -> Self {
        let timeline = &report.timeline;
        let makespan = timeline.makespan();
        let busy_time = timeline.busy_time();

        let (cpu_utilization, throughput) = if makespan == 0 {
            (0.0, 0.0)
        } else {
            (
                busy_time as f64 / makespan as f64,
                report.results.len() as f64 / makespan as f64,
            )
        };

        let max_waiting_time = report
            .results
            .values()
            .map(|r| r.waiting_time)
            .max()
            .unwrap_or(0);

        Self {
            makespan,
            busy_time,
            idle_time: timeline.idle_time(),
            cpu_utilization,
            throughput,
            context_switches: timeline.context_switches(),
            avg_waiting_time: report.average_waiting_time(),
            avg_turnaround_time: report.average_turnaround_time(),
            avg_response_time: report.average_response_time(),
            max_waiting_time,
        }
    }

    /// Whether the run meets the given quality thresholds.
    pub fn meets_thresholds(&self, max_avg_waiting: f64, min_utilization: f64) -> bool {
        self.avg_waiting_time <= max_avg_waiting && self.cpu_utilization >= min_utilization
    }
}
