//! Task records and pure store-state transitions.
//!
//! `StoreState` holds the canonical task list plus the active filter and
//! exposes the mutation operations as pure in-memory transitions. Persistence
//! is layered on top by `TaskStore` so the transitions stay testable on
//! their own.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ulid::Ulid;

use crate::error::{Error, Result};

pub const PRIORITIES: [&str; 3] = ["low", "medium", "high"];
pub const FILTERS: [&str; 3] = ["all", "active", "completed"];

/// Task priority, ordered from least to most urgent.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Priority::Low),
            "medium" => Ok(Priority::Medium),
            "high" => Ok(Priority::High),
            other => Err(Error::InvalidArgument(format!(
                "unknown priority '{}' (expected {})",
                other,
                PRIORITIES.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Low => "low",
            Priority::Medium => "medium",
            Priority::High => "high",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// View selector over the task list.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Filter {
    #[default]
    All,
    Active,
    Completed,
}

impl Filter {
    pub fn parse(value: &str) -> Result<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "all" => Ok(Filter::All),
            "active" => Ok(Filter::Active),
            "completed" => Ok(Filter::Completed),
            other => Err(Error::InvalidArgument(format!(
                "unknown filter '{}' (expected {})",
                other,
                FILTERS.join(", ")
            ))),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Filter::All => "all",
            Filter::Active => "active",
            Filter::Completed => "completed",
        }
    }
}

impl std::fmt::Display for Filter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single to-do item.
///
/// `id` and `created_at` are assigned at creation and never change.
/// Timestamps serialize as epoch milliseconds in the state file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default)]
    pub completed: bool,
    #[serde(default)]
    pub priority: Priority,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "chrono::serde::ts_milliseconds_option"
    )]
    pub due_date: Option<DateTime<Utc>>,
    #[serde(with = "chrono::serde::ts_milliseconds")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn is_overdue(&self, now: DateTime<Utc>) -> bool {
        !self.completed && self.due_date.map(|due| due < now).unwrap_or(false)
    }

    pub fn is_due_soon(&self, now: DateTime<Utc>) -> bool {
        !self.completed
            && self
                .due_date
                .map(|due| due >= now && due <= now + chrono::Duration::hours(24))
                .unwrap_or(false)
    }
}

/// Input for creating a task.
#[derive(Debug, Clone, Default)]
pub struct NewTask {
    pub title: String,
    pub description: Option<String>,
    pub due_date: Option<DateTime<Utc>>,
    pub priority: Priority,
}

/// Partial update for an existing task. `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<Option<String>>,
    pub due_date: Option<Option<DateTime<Utc>>>,
    pub priority: Option<Priority>,
}

impl TaskPatch {
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.due_date.is_none()
            && self.priority.is_none()
    }
}

/// The store's canonical state: tasks in insertion order plus the active
/// filter. All transitions are synchronous in-memory updates; callers that
/// need durability persist the whole state afterwards.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct StoreState {
    #[serde(default)]
    pub tasks: Vec<Task>,
    #[serde(default)]
    pub filter: Filter,
}

/// Clamp a timestamp to the millisecond precision of the state file, so a
/// persisted-then-reloaded state compares equal to the in-memory one.
fn truncate_to_millis(ts: DateTime<Utc>) -> DateTime<Utc> {
    DateTime::from_timestamp_millis(ts.timestamp_millis()).unwrap_or(ts)
}

impl StoreState {
    /// Append a new task. Rejects empty or whitespace-only titles without
    /// touching the state.
    pub fn add(&mut self, input: NewTask, now: DateTime<Utc>) -> Result<String> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(Error::EmptyTitle);
        }

        let id = Ulid::new().to_string();
        self.tasks.push(Task {
            id: id.clone(),
            title: title.to_string(),
            description: input.description,
            completed: false,
            priority: input.priority,
            due_date: input.due_date.map(truncate_to_millis),
            created_at: truncate_to_millis(now),
        });
        Ok(id)
    }

    /// Flip `completed` on the matching task. Returns false (no-op) when
    /// the id is unknown.
    pub fn toggle(&mut self, id: &str) -> bool {
        match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => {
                task.completed = !task.completed;
                true
            }
            None => false,
        }
    }

    /// Apply a partial update to the matching task. Returns false (no-op)
    /// when the id is unknown. A patch that would blank the title is
    /// rejected before anything is applied.
    pub fn update(&mut self, id: &str, patch: TaskPatch) -> Result<bool> {
        if let Some(title) = patch.title.as_deref() {
            if title.trim().is_empty() {
                return Err(Error::EmptyTitle);
            }
        }

        let task = match self.tasks.iter_mut().find(|task| task.id == id) {
            Some(task) => task,
            None => return Ok(false),
        };

        if let Some(title) = patch.title {
            task.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            task.description = description;
        }
        if let Some(due_date) = patch.due_date {
            task.due_date = due_date.map(truncate_to_millis);
        }
        if let Some(priority) = patch.priority {
            task.priority = priority;
        }
        Ok(true)
    }

    /// Remove the matching task. Returns false (no-op) when the id is
    /// unknown.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != id);
        self.tasks.len() != before
    }

    pub fn set_filter(&mut self, filter: Filter) {
        self.filter = filter;
    }

    /// Drop every completed task, preserving the relative order of the
    /// rest. Returns the number of tasks removed.
    pub fn clear_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|task| !task.completed);
        before - self.tasks.len()
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.tasks.iter().find(|task| task.id == id)
    }
}
