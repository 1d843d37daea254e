//! Simulation output: timeline plus per-process results.
//!
//! Results are reduced from the timeline after the run, so every discipline
//! shares one derivation of start, completion, turnaround and waiting time.

use std::collections::{BTreeMap, HashMap};

use serde::{Deserialize, Serialize};

use super::{SimulationConfig, SimulationKpi};
use crate::models::{Process, ProcessId, ProcessResult, Time, Timeline};

/// Output of one simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    /// Configuration the run used.
    pub config: SimulationConfig,
    /// Execution segments in start order.
    pub timeline: Timeline,
    /// Results keyed by process ID.
    pub results: BTreeMap<ProcessId, ProcessResult>,
}

impl SimulationReport {
    /// Builds a report by reducing `timeline` against the input processes.
    pub fn from_timeline(
        config: SimulationConfig,
        processes: &[Process],
        timeline: Timeline,
    ) -> Self {
        let results = reduce_results(processes, &timeline);
        Self {
            config,
            timeline,
            results,
        }
    }

    /// Result for one process.
    pub fn result(&self, id: ProcessId) -> Option<&ProcessResult> {
        self.results.get(&id)
    }

    /// Mean waiting time across all processes.
    pub fn average_waiting_time(&self) -> f64 {
        self.mean_of(|r| r.waiting_time)
    }

    /// Mean turnaround time across all processes.
    pub fn average_turnaround_time(&self) -> f64 {
        self.mean_of(|r| r.turnaround_time)
    }

    /// Mean response time (first run minus arrival).
    pub fn average_response_time(&self) -> f64 {
        self.mean_of(|r| r.response_time)
    }

    /// Aggregate performance indicators.
    pub fn kpi(&self) -> SimulationKpi {
        SimulationKpi::calculate(self)
    }

    fn mean_of(&self, metric: impl Fn(&ProcessResult) -> Time) -> f64 {
        if self.results.is_empty() {
            return 0.0;
        }
        let total: Time = self.results.values().map(metric).sum();
        total as f64 / self.results.len() as f64
    }
}

/// Reduces segments to first start and last end per process.
fn reduce_results(
    processes: &[Process],
    timeline: &Timeline,
) -> BTreeMap<ProcessId, ProcessResult> {
    let mut spans: HashMap<ProcessId, (Time, Time)> = HashMap::new();
    for segment in timeline {
        spans
            .entry(segment.process_id)
            .and_modify(|(_, end)| *end = (*end).max(segment.end_time()))
            .or_insert((segment.start_time, segment.end_time()));
    }

    processes
        .iter()
        .filter_map(|p| {
            spans
                .get(&p.id)
                .map(|&(start, end)| (p.id, ProcessResult::new(p.clone(), start, end)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ExecutionSegment;

    fn sample() -> (Vec<Process>, Timeline) {
        let processes = vec![Process::new(1, 0, 4), Process::new(2, 1, 3)];
        let mut timeline = Timeline::new();
        timeline.push(ExecutionSegment::new(1, 0, 1));
        timeline.push(ExecutionSegment::new(2, 1, 3));
        timeline.push(ExecutionSegment::new(1, 4, 3));
        (processes, timeline)
    }

    fn sample_report() -> SimulationReport {
        let (processes, timeline) = sample();
        SimulationReport::from_timeline(SimulationConfig::priority(true), &processes, timeline)
    }

    #[test]
    fn test_reduce_first_start_last_end() {
        let report = sample_report();

        let p1 = report.result(1).unwrap();
        assert_eq!(p1.start_time, 0);
        assert_eq!(p1.completion_time, 7);
        assert_eq!(p1.waiting_time, 3);

        let p2 = report.result(2).unwrap();
        assert_eq!(p2.start_time, 1);
        assert_eq!(p2.completion_time, 4);
        assert_eq!(p2.waiting_time, 0);
    }

    #[test]
    fn test_averages() {
        let report = sample_report();
        assert!((report.average_waiting_time() - 1.5).abs() < 1e-10);
        // Turnaround: P1 7, P2 3
        assert!((report.average_turnaround_time() - 5.0).abs() < 1e-10);
        assert!((report.average_response_time() - 0.0).abs() < 1e-10);
    }

    #[test]
    fn test_input_processes_untouched() {
        let (processes, timeline) = sample();
        let before = processes.clone();
        let _ = SimulationReport::from_timeline(SimulationConfig::fcfs(), &processes, timeline);
        assert_eq!(processes, before);
    }

    #[test]
    fn test_empty_report_averages() {
        let report =
            SimulationReport::from_timeline(SimulationConfig::fcfs(), &[], Timeline::new());
        assert!(report.results.is_empty());
        assert_eq!(report.average_waiting_time(), 0.0);
    }

    #[test]
    fn test_report_json() {
        let report = sample_report();
        let json = serde_json::to_string(&report).unwrap();
        let back: SimulationReport = serde_json::from_str(&json).unwrap();
        assert_eq!(back, report);
    }
}
