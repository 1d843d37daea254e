//! Simulation error types.

use thiserror::Error;

use crate::models::Time;
use crate::validation::ValidationError;

/// Errors returned by [`simulate`](crate::scheduler::simulate).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SimulationError {
    /// The input failed validation; no simulation was attempted.
    #[error("invalid input: {}", join_messages(.0))]
    InvalidInput(Vec<ValidationError>),

    /// The virtual clock passed its bound before every process finished.
    #[error("time limit {limit} exceeded at t={at}")]
    TimeLimitExceeded {
        /// Configured or derived clock bound.
        limit: Time,
        /// Clock value that tripped the bound.
        at: Time,
    },
}

impl SimulationError {
    /// Validation errors carried by an `InvalidInput` error.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            Self::InvalidInput(errors) => errors,
            _ => &[],
        }
    }
}

impl From<Vec<ValidationError>> for SimulationError {
    fn from(errors: Vec<ValidationError>) -> Self {
        Self::InvalidInput(errors)
    }
}

fn join_messages(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join("; ")
}
