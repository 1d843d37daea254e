//! CPU scheduling simulator.
//!
//! Simulates a single CPU under classic scheduling disciplines and reports
//! the execution timeline (Gantt chart) together with per-process timing
//! metrics. The simulation runs on an abstract integer time axis with all
//! arrivals known up front.
//!
//! # Modules
//!
//! - **`models`**: Domain types: `Process`, `ExecutionSegment`, `Timeline`,
//!   `ProcessResult`
//! - **`dispatching`**: Ready-set selection rules with a stable tie-break
//! - **`scheduler`**: `simulate`, `compare`, FCFS/SJF/Priority/Round Robin loops,
//!   reports and KPIs
//! - **`validation`**: Input checks (IDs, times, priorities, quantum)
//! - **`workload`**: Seeded random process sets
//!
//! # Architecture
//!
//! Every run is a pure function of its inputs: processes are never mutated,
//! no state is shared between runs, and results are reduced from the
//! timeline after the run completes.
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5
//! - Tanenbaum & Bos (2014), "Modern Operating Systems", Ch. 2.4

pub mod dispatching;
pub mod error;
pub mod models;
pub mod scheduler;
pub mod validation;
pub mod workload;

pub use error::SimulationError;
pub use scheduler::{simulate, Algorithm, SimulationConfig, SimulationReport};
