//! Input validation for simulation runs.
//!
//! Checks process descriptors and the run configuration before any
//! simulation is attempted. Detects:
//! - Empty input
//! - Non-positive or duplicate IDs
//! - Negative arrival times, non-positive burst times
//! - Missing priorities under the Priority algorithm
//! - Missing or non-positive Round Robin quantum
//! - Workloads whose latest arrival plus total burst does not fit in `Time`

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::models::{Process, Time};
use crate::scheduler::{Algorithm, SimulationConfig};

/// Validation result.
pub type ValidationResult = Result<(), Vec<ValidationError>>;

/// A validation error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationError {
    /// Error category.
    pub kind: ValidationErrorKind,
    /// Human-readable description.
    pub message: String,
}

/// Categories of validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ValidationErrorKind {
    /// No processes were supplied.
    EmptyInput,
    /// A process ID is zero.
    InvalidId,
    /// Two processes share the same ID.
    DuplicateId,
    /// Arrival time is negative.
    InvalidArrival,
    /// Burst time is zero or negative.
    InvalidBurst,
    /// Priority algorithm without a priority and no configured default.
    MissingPriority,
    /// Round Robin without a positive time quantum.
    InvalidQuantum,
    /// Latest arrival plus total burst time overflows the clock.
    TimeOverflow,
}

impl ValidationError {
    pub(crate) fn new(kind: ValidationErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// Validates the processes and configuration of a simulation run.
///
/// Checks:
/// 1. At least one process
/// 2. Every ID is positive and unique
/// 3. Every arrival time is non-negative
/// 4. Every burst time is positive
/// 5. Priority algorithm: every process has a priority, unless a default is configured
/// 6. Round Robin: a positive time quantum is configured
/// 7. The run fits on the clock: `max(arrival) + Σ burst` is representable
///
/// # Returns
/// `Ok(())` if all checks pass, `Err(errors)` with all detected issues.
pub fn validate_input(processes: &[Process], config: &SimulationConfig) -> ValidationResult {
    let mut errors = Vec::new();

    if processes.is_empty() {
        errors.push(ValidationError::new(
            ValidationErrorKind::EmptyInput,
            "No processes to schedule",
        ));
    }

    let mut ids = HashSet::new();
    for p in processes {
        if p.id == 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidId,
                "Process ID must be positive, got 0",
            ));
        } else if !ids.insert(p.id) {
            errors.push(ValidationError::new(
                ValidationErrorKind::DuplicateId,
                format!("Duplicate process ID: {}", p.id),
            ));
        }

        if p.arrival_time < 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidArrival,
                format!("Process {} has negative arrival time {}", p.id, p.arrival_time),
            ));
        }

        if p.burst_time <= 0 {
            errors.push(ValidationError::new(
                ValidationErrorKind::InvalidBurst,
                format!("Process {} has non-positive burst time {}", p.id, p.burst_time),
            ));
        }

        if config.algorithm == Algorithm::Priority
            && p.priority.is_none()
            && config.default_priority.is_none()
        {
            errors.push(ValidationError::new(
                ValidationErrorKind::MissingPriority,
                format!("Process {} has no priority", p.id),
            ));
        }
    }

    if config.algorithm == Algorithm::RoundRobin {
        match config.time_quantum {
            Some(q) if q > 0 => {}
            Some(q) => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                format!("Time quantum must be positive, got {q}"),
            )),
            None => errors.push(ValidationError::new(
                ValidationErrorKind::InvalidQuantum,
                "Round Robin requires a time quantum",
            )),
        }
    }

    if horizon(processes).is_none() {
        errors.push(ValidationError::new(
            ValidationErrorKind::TimeOverflow,
            "Latest arrival plus total burst time exceeds the time range",
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Latest possible completion time, `None` on overflow.
///
/// Negative times are skipped; they are reported separately.
fn horizon(processes: &[Process]) -> Option<Time> {
    let last_arrival = processes
        .iter()
        .map(|p| p.arrival_time)
        .max()
        .unwrap_or(0)
        .max(0);
    processes
        .iter()
        .filter(|p| p.burst_time > 0)
        .try_fold(last_arrival, |acc, p| acc.checked_add(p.burst_time))
}
