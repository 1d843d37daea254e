//! Run configuration: algorithm selection and its parameters.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::models::Time;

/// Scheduling discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Algorithm {
    /// First-Come-First-Served.
    Fcfs,
    /// Shortest Job First (preemptive = Shortest Remaining Time First).
    Sjf,
    /// Static priority, lower value first.
    Priority,
    /// Round Robin with a fixed time quantum.
    RoundRobin,
}

impl Algorithm {
    /// All disciplines, in presentation order.
    pub const ALL: [Algorithm; 4] = [
        Algorithm::Fcfs,
        Algorithm::Sjf,
        Algorithm::Priority,
        Algorithm::RoundRobin,
    ];

    /// Whether the preemptive flag changes behavior for this discipline.
    pub fn supports_preemption(self) -> bool {
        matches!(self, Algorithm::Sjf | Algorithm::Priority)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Algorithm::Fcfs => "FCFS",
            Algorithm::Sjf => "SJF",
            Algorithm::Priority => "Priority",
            Algorithm::RoundRobin => "Round Robin",
        };
        f.write_str(name)
    }
}

/// Error returned when parsing an unknown algorithm name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown scheduling algorithm: {0:?}")]
pub struct ParseAlgorithmError(String);

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .collect::<String>()
            .to_ascii_lowercase();
        match normalized.as_str() {
            "fcfs" | "fifo" => Ok(Algorithm::Fcfs),
            "sjf" => Ok(Algorithm::Sjf),
            "priority" => Ok(Algorithm::Priority),
            "rr" | "roundrobin" => Ok(Algorithm::RoundRobin),
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}

/// Configuration of one simulation run.
///
/// # Example
///
/// ```
/// use cpu_sched_sim::scheduler::{Algorithm, SimulationConfig};
///
/// let config = SimulationConfig::round_robin(4).with_time_limit(1_000);
/// assert_eq!(config.algorithm, Algorithm::RoundRobin);
/// assert_eq!(config.time_quantum, Some(4));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Scheduling discipline.
    pub algorithm: Algorithm,
    /// Preemptive mode for SJF and Priority. Ignored otherwise.
    #[serde(default)]
    pub preemptive: bool,
    /// Round Robin time slice. Required for Round Robin, ignored otherwise.
    #[serde(default)]
    pub time_quantum: Option<Time>,
    /// Priority used for processes that carry none (Priority algorithm only).
    /// `None` = reject such processes.
    #[serde(default)]
    pub default_priority: Option<i32>,
    /// Upper bound for the virtual clock.
    /// `None` = latest arrival plus total burst time.
    #[serde(default)]
    pub time_limit: Option<Time>,
}

impl SimulationConfig {
    /// Creates a configuration for the given algorithm.
    pub fn new(algorithm: Algorithm) -> Self {
        Self {
            algorithm,
            preemptive: false,
            time_quantum: None,
            default_priority: None,
            time_limit: None,
        }
    }

    /// First-Come-First-Served.
    pub fn fcfs() -> Self {
        Self::new(Algorithm::Fcfs)
    }

    /// Shortest Job First.
    pub fn sjf(preemptive: bool) -> Self {
        Self::new(Algorithm::Sjf).with_preemptive(preemptive)
    }

    /// Priority scheduling.
    pub fn priority(preemptive: bool) -> Self {
        Self::new(Algorithm::Priority).with_preemptive(preemptive)
    }

    /// Round Robin with the given quantum.
    pub fn round_robin(time_quantum: Time) -> Self {
        Self::new(Algorithm::RoundRobin).with_time_quantum(time_quantum)
    }

    /// Sets preemptive mode.
    pub fn with_preemptive(mut self, preemptive: bool) -> Self {
        self.preemptive = preemptive;
        self
    }

    /// Sets the Round Robin time quantum.
    pub fn with_time_quantum(mut self, time_quantum: Time) -> Self {
        self.time_quantum = Some(time_quantum);
        self
    }

    /// Sets the priority assumed for processes without one.
    pub fn with_default_priority(mut self, priority: i32) -> Self {
        self.default_priority = Some(priority);
        self
    }

    /// Sets an explicit bound for the virtual clock.
    pub fn with_time_limit(mut self, limit: Time) -> Self {
        self.time_limit = Some(limit);
        self
    }

    /// Whether the run actually preempts.
    ///
    /// FCFS and Round Robin have fixed semantics, so the flag is ignored there.
    pub fn is_preemptive(&self) -> bool {
        self.preemptive && self.algorithm.supports_preemption()
    }

    /// Display label, e.g. `"SJF (preemptive)"` or `"Round Robin (q=2)"`.
    pub fn label(&self) -> String {
        match self.algorithm {
            Algorithm::Fcfs => self.algorithm.to_string(),
            Algorithm::Sjf | Algorithm::Priority => {
                let mode = if self.preemptive {
                    "preemptive"
                } else {
                    "non-preemptive"
                };
                format!("{} ({mode})", self.algorithm)
            }
            Algorithm::RoundRobin => match self.time_quantum {
                Some(q) => format!("{} (q={q})", self.algorithm),
                None => self.algorithm.to_string(),
            },
        }
    }
}
