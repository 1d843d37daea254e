//! Scheduling simulation engine.
//!
//! Runs one of four classic CPU scheduling disciplines over a fixed set of
//! processes and returns the execution timeline with per-process metrics.
//!
//! # Algorithms
//!
//! | Algorithm | Selection | Slice |
//! |-----------|-----------|-------|
//! | FCFS | Arrival order | Full burst |
//! | SJF | Shortest burst / shortest remaining | Full burst / until next arrival |
//! | Priority | Lowest priority value | Full burst / until next arrival |
//! | Round Robin | FIFO queue, requeue at back | `min(remaining, quantum)` |
//!
//! Ties always go to the process that comes first in the arrival-sorted
//! input order (stable sort on arrival time).
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::models::Process;
//! use cpu_sched_sim::scheduler::{simulate, SimulationConfig};
//!
//! let processes = vec![
//!     Process::new(1, 0, 5),
//!     Process::new(2, 1, 3),
//!     Process::new(3, 2, 8),
//! ];
//! let report = simulate(&processes, &SimulationConfig::fcfs()).unwrap();
//! assert_eq!(report.result(3).unwrap().completion_time, 16);
//! assert!((report.average_waiting_time() - 10.0 / 3.0).abs() < 1e-9);
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

mod config;
mod fcfs;
mod kpi;
mod report;
mod round_robin;
mod selective;
mod state;

pub use config::{Algorithm, ParseAlgorithmError, SimulationConfig};
pub use kpi::SimulationKpi;
pub use report::SimulationReport;

use tracing::debug;

use crate::dispatching::rules::{HighestPriority, ShortestBurst, ShortestRemaining};
use crate::dispatching::SelectionRule;
use crate::error::SimulationError;
use crate::models::Process;
use crate::validation::{validate_input, ValidationError, ValidationErrorKind};
use state::RunState;

/// Simulates one scheduling run.
///
/// Validates the input first; nothing is simulated if any check fails.
/// The input slice is never modified, and identical inputs always produce
/// identical reports.
///
/// # Errors
/// - [`SimulationError::InvalidInput`] with every validation problem found.
/// - [`SimulationError::TimeLimitExceeded`] if the clock passes its bound.
#[tracing::instrument(
    level = "debug",
    skip_all,
    fields(algorithm = %config.label(), processes = processes.len())
)]
pub fn simulate(
    processes: &[Process],
    config: &SimulationConfig,
) -> Result<SimulationReport, SimulationError> {
    validate_input(processes, config)?;

    if config.preemptive && !config.algorithm.supports_preemption() {
        debug!(algorithm = %config.algorithm, "preemptive flag ignored");
    }

    let mut state = RunState::new(processes, config.time_limit);
    let preemptive = config.is_preemptive();

    match config.algorithm {
        Algorithm::Fcfs => fcfs::run(&mut state)?,
        Algorithm::Sjf => {
            let rule: &dyn SelectionRule = if preemptive {
                &ShortestRemaining
            } else {
                &ShortestBurst
            };
            selective::run(&mut state, rule, preemptive, &vec![0; processes.len()])?;
        }
        Algorithm::Priority => {
            let fallback = config.default_priority.unwrap_or(0);
            let priorities: Vec<i32> = processes
                .iter()
                .map(|p| p.priority.unwrap_or(fallback))
                .collect();
            selective::run(&mut state, &HighestPriority, preemptive, &priorities)?;
        }
        Algorithm::RoundRobin => {
            let quantum = match config.time_quantum {
                Some(q) if q > 0 => q,
                _ => {
                    return Err(SimulationError::InvalidInput(vec![ValidationError::new(
                        ValidationErrorKind::InvalidQuantum,
                        "Round Robin requires a positive time quantum",
                    )]))
                }
            };
            round_robin::run(&mut state, quantum)?;
        }
    }

    let timeline = state.into_timeline();
    let report = SimulationReport::from_timeline(config.clone(), processes, timeline);
    debug!(
        segments = report.timeline.len(),
        makespan = report.timeline.makespan(),
        avg_waiting = report.average_waiting_time(),
        "simulation finished"
    );
    Ok(report)
}

/// Runs several configurations over the same processes.
///
/// Runs are independent; results are returned in `configs` order.
pub fn compare(
    processes: &[Process],
    configs: &[SimulationConfig],
) -> Vec<Result<SimulationReport, SimulationError>> {
    configs
        .iter()
        .map(|config| simulate(processes, config))
        .collect()
}
