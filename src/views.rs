//! Derived views over a task snapshot.
//!
//! Pure functions only: every call recomputes from the slice it is given.
//! The expected list sizes are small, so there is no caching or incremental
//! maintenance, and callers get the same answer for the same inputs every
//! time.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::task::{Filter, Priority, Task};

/// Aggregate counters over a task list at a point in time.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub active: usize,
    pub high_priority_active: usize,
    pub overdue: usize,
    pub due_soon: usize,
    /// completed / total as a rounded percentage; 0 for an empty list.
    pub completion_rate: u8,
}

/// Ordered subsequence of `tasks` passing `filter`.
pub fn filter_by_status(tasks: &[Task], filter: Filter) -> Vec<Task> {
    tasks
        .iter()
        .filter(|task| match filter {
            Filter::All => true,
            Filter::Active => !task.completed,
            Filter::Completed => task.completed,
        })
        .cloned()
        .collect()
}

/// Count of tasks not yet completed.
pub fn count_active(tasks: &[Task]) -> usize {
    tasks.iter().filter(|task| !task.completed).count()
}

/// Compute aggregate stats for `tasks` as of `now`.
pub fn compute_stats(tasks: &[Task], now: DateTime<Utc>) -> TaskStats {
    let total = tasks.len();
    let completed = tasks.iter().filter(|task| task.completed).count();
    let active = total - completed;
    let high_priority_active = tasks
        .iter()
        .filter(|task| task.priority == Priority::High && !task.completed)
        .count();
    let overdue = tasks.iter().filter(|task| task.is_overdue(now)).count();
    let due_soon = tasks.iter().filter(|task| task.is_due_soon(now)).count();
    let completion_rate = if total == 0 {
        0
    } else {
        ((completed as f64 / total as f64) * 100.0).round() as u8
    };

    TaskStats {
        total,
        completed,
        active,
        high_priority_active,
        overdue,
        due_soon,
        completion_rate,
    }
}
