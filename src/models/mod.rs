//! Simulation domain models.
//!
//! Provides the input and output data types shared by every scheduling
//! discipline.
//!
//! # Domain Mappings
//!
//! | cpu-sched-sim | Meaning |
//! |---------------|---------|
//! | Process | Request for CPU time (input) |
//! | ExecutionSegment | One uninterrupted CPU slice |
//! | Timeline | Gantt chart of a run |
//! | ProcessResult | Start/completion/turnaround/waiting per process |

mod process;
mod result;
mod timeline;

pub(crate) use process::arrival_order;
pub use process::Process;
pub use result::ProcessResult;
pub use timeline::{ExecutionSegment, Timeline};

/// Process identifier.
pub type ProcessId = u32;

/// Abstract integer time (ticks).
pub type Time = i64;
