//! Selection rules for picking the next process from the ready set.
//!
//! Provides key-based rules (shortest burst, shortest remaining time,
//! highest priority) and a selector with an explicit, stable tie-break.
//!
//! # Usage
//!
//! ```
//! use cpu_sched_sim::dispatching::{rules, select_next, ReadyEntry};
//! use cpu_sched_sim::models::Process;
//!
//! let a = Process::new(1, 0, 8);
//! let b = Process::new(2, 0, 3);
//! let ready = [ReadyEntry::new(&a, 0, 8, 0), ReadyEntry::new(&b, 1, 3, 0)];
//!
//! assert_eq!(select_next(&rules::ShortestBurst, &ready), Some(1));
//! ```
//!
//! # References
//!
//! - Silberschatz et al. (2018), "Operating System Concepts", Ch. 5.3
//! - Pinedo (2016), "Scheduling: Theory, Algorithms, and Systems", Ch. 4

pub mod rules;

use std::fmt::Debug;

use crate::models::{Process, Time};

/// Key returned by a selection rule.
///
/// Lower key = picked first.
pub type RuleKey = i64;

/// A process in the ready set together with its simulation state.
#[derive(Debug, Clone, Copy)]
pub struct ReadyEntry<'a> {
    /// The input descriptor.
    pub process: &'a Process,
    /// Position in the arrival-sorted order (tie-break rank).
    pub rank: usize,
    /// Work still owed to the process.
    pub remaining: Time,
    /// Effective priority (input priority or the configured default).
    pub priority: i32,
}

impl<'a> ReadyEntry<'a> {
    /// Creates a ready-set entry.
    pub fn new(process: &'a Process, rank: usize, remaining: Time, priority: i32) -> Self {
        Self {
            process,
            rank,
            remaining,
            priority,
        }
    }
}

/// A rule that ranks ready processes.
///
/// # Key Convention
/// **Lower key = selected first.** Ties are resolved by [`select_next`],
/// never by the rule itself.
pub trait SelectionRule: Send + Sync + Debug {
    /// Rule name (e.g., "SJF", "SRTF").
    fn name(&self) -> &'static str;

    /// Ranks one ready entry.
    fn key(&self, entry: &ReadyEntry<'_>) -> RuleKey;
}

/// Picks the entry with the smallest key.
///
/// Among equal keys the entry with the lowest `rank` wins, i.e. the process
/// that comes first in the arrival-sorted input order. Returns the index into
/// `ready`, or `None` if the ready set is empty.
pub fn select_next<R: SelectionRule + ?Sized>(rule: &R, ready: &[ReadyEntry<'_>]) -> Option<usize> {
    let mut best: Option<(usize, RuleKey, usize)> = None;
    for (i, entry) in ready.iter().enumerate() {
        let key = rule.key(entry);
        let better = match best {
            None => true,
            Some((_, best_key, best_rank)) => {
                key < best_key || (key == best_key && entry.rank < best_rank)
            }
        };
        if better {
            best = Some((i, key, entry.rank));
        }
    }
    best.map(|(i, _, _)| i)
}
