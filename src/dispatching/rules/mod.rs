//! Built-in selection rules.
//!
//! # Categories
//!
//! - **Time-based**: SJF (total burst), SRTF (remaining burst)
//! - **Priority**: PRIORITY (lower value first)
//!
//! # Key Convention
//! All rules return lower keys for processes that should run first.
//!
//! # References
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3.2-5.3.4

use super::{ReadyEntry, RuleKey, SelectionRule};

// ======================== Time-based rules ========================

/// Shortest Job First.
///
/// Ranks by total burst time. Used by non-preemptive SJF, where a process
/// that has been picked always runs to completion.
#[derive(Debug, Clone, Copy)]
pub struct ShortestBurst;

impl SelectionRule for ShortestBurst {
    fn name(&self) -> &'static str {
        "SJF"
    }

    fn key(&self, entry: &ReadyEntry<'_>) -> RuleKey {
        entry.process.burst_time
    }
}

/// Shortest Remaining Time First.
///
/// Ranks by work still owed. Used by preemptive SJF.
#[derive(Debug, Clone, Copy)]
pub struct ShortestRemaining;

impl SelectionRule for ShortestRemaining {
    fn name(&self) -> &'static str {
        "SRTF"
    }

    fn key(&self, entry: &ReadyEntry<'_>) -> RuleKey {
        entry.remaining
    }
}

// ======================== Priority-based rule ========================

/// Static priority rule.
///
/// Lower numeric priority runs first.
#[derive(Debug, Clone, Copy)]
pub struct HighestPriority;

impl SelectionRule for HighestPriority {
    fn name(&self) -> &'static str {
        "PRIORITY"
    }

    fn key(&self, entry: &ReadyEntry<'_>) -> RuleKey {
        RuleKey::from(entry.priority)
    }
}
