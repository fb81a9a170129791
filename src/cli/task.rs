//! tick task command implementations.

use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;

use crate::cli::load_store;
use crate::config::Config;
use crate::error::{Error, Result};
use crate::output::{emit_success, HumanOutput, OutputOptions};
use crate::task::{Filter, NewTask, Priority, Task, TaskPatch};
use crate::views;

pub struct AddOptions {
    pub title: String,
    pub description: Option<String>,
    pub due: Option<String>,
    pub priority: Option<String>,
    pub store: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ListOptions {
    pub filter: Option<String>,
    pub priority: Option<String>,
    pub store: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct DoneOptions {
    pub id: String,
    pub store: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct EditOptions {
    pub id: String,
    pub title: Option<String>,
    pub description: Option<String>,
    pub due: Option<String>,
    pub priority: Option<String>,
    pub store: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct DeleteOptions {
    pub id: String,
    pub store: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct FilterOptions {
    pub value: String,
    pub store: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

pub struct ClearOptions {
    pub store: Option<PathBuf>,
    pub json: bool,
    pub quiet: bool,
}

#[derive(Serialize)]
struct TaskCreatedOutput {
    id: String,
    title: String,
    priority: Priority,
}

#[derive(Serialize)]
struct TaskListOutput {
    total: usize,
    filter: Filter,
    tasks: Vec<Task>,
}

#[derive(Serialize)]
struct TaskToggleOutput {
    id: String,
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    completed: Option<bool>,
}

#[derive(Serialize)]
struct TaskEditOutput {
    id: String,
    found: bool,
}

#[derive(Serialize)]
struct TaskDeleteOutput {
    id: String,
    found: bool,
}

#[derive(Serialize)]
struct FilterOutput {
    filter: Filter,
}

#[derive(Serialize)]
struct ClearOutput {
    removed: usize,
    remaining: usize,
}

pub fn run_add(options: AddOptions) -> Result<()> {
    let mut store = load_store(options.store)?;

    let priority = match options.priority.as_deref() {
        Some(value) => Priority::parse(value)?,
        None => {
            let cwd = std::env::current_dir()?;
            Config::load_from_dir(&cwd).default_priority()?
        }
    };
    let due_date = options.due.as_deref().map(parse_due_date).transpose()?;

    let id = store.add(NewTask {
        title: options.title.clone(),
        description: options.description,
        due_date,
        priority,
    })?;

    let output = TaskCreatedOutput {
        id: id.clone(),
        title: options.title.trim().to_string(),
        priority,
    };

    let mut human = HumanOutput::new("Task added");
    human.push_summary("ID", id);
    human.push_summary("Title", output.title.clone());
    human.push_summary("Priority", priority.to_string());
    if let Some(due) = due_date {
        human.push_summary("Due", due.to_rfc3339());
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "add",
        &output,
        Some(&human),
    )
}

pub fn run_list(options: ListOptions) -> Result<()> {
    let store = load_store(options.store)?;
    let snapshot = store.snapshot();

    let filter = match options.filter.as_deref() {
        Some(value) => Filter::parse(value)?,
        None => snapshot.filter,
    };

    let mut tasks = views::filter_by_status(&snapshot.tasks, filter);
    if let Some(priority) = options.priority.as_deref() {
        let priority = Priority::parse(priority)?;
        tasks.retain(|task| task.priority == priority);
    }

    let output = TaskListOutput {
        total: tasks.len(),
        filter,
        tasks: tasks.clone(),
    };

    let now = Utc::now();
    let mut human = HumanOutput::new("Tasks");
    human.push_summary("Total", tasks.len().to_string());
    human.push_summary("Filter", filter.to_string());
    for task in &tasks {
        let marker = if task.completed { "x" } else { " " };
        let mut line = format!("[{}][{}] {} {}", marker, task.priority, task.id, task.title);
        if task.is_overdue(now) {
            line.push_str(" (overdue)");
        } else if task.is_due_soon(now) {
            line.push_str(" (due soon)");
        }
        human.push_detail(line);
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "list",
        &output,
        Some(&human),
    )
}

pub fn run_done(options: DoneOptions) -> Result<()> {
    let mut store = load_store(options.store)?;
    let found = store.toggle(&options.id)?;
    let completed = store
        .snapshot()
        .get(&options.id)
        .map(|task| task.completed);

    let output = TaskToggleOutput {
        id: options.id.clone(),
        found,
        completed,
    };

    let mut human = if found {
        let mut human = HumanOutput::new("Task toggled");
        human.push_summary("ID", options.id);
        human.push_summary(
            "Completed",
            completed.map(|c| c.to_string()).unwrap_or_default(),
        );
        human
    } else {
        HumanOutput::new("No change")
    };
    if !found {
        human.push_warning(format!("no task with id {}", output.id));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "done",
        &output,
        Some(&human),
    )
}

pub fn run_edit(options: EditOptions) -> Result<()> {
    let mut store = load_store(options.store)?;

    let patch = TaskPatch {
        title: options.title,
        description: options.description.map(blank_to_none),
        due_date: options
            .due
            .as_deref()
            .map(|value| {
                if value.trim().is_empty() {
                    Ok(None)
                } else {
                    parse_due_date(value).map(Some)
                }
            })
            .transpose()?,
        priority: options
            .priority
            .as_deref()
            .map(Priority::parse)
            .transpose()?,
    };
    if patch.is_empty() {
        return Err(Error::InvalidArgument(
            "edit requires --title, --description, --due, or --priority".to_string(),
        ));
    }

    let found = store.update(&options.id, patch)?;

    let output = TaskEditOutput {
        id: options.id.clone(),
        found,
    };

    let mut human = if found {
        let mut human = HumanOutput::new("Task updated");
        human.push_summary("ID", options.id);
        human
    } else {
        HumanOutput::new("No change")
    };
    if !found {
        human.push_warning(format!("no task with id {}", output.id));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "edit",
        &output,
        Some(&human),
    )
}

pub fn run_delete(options: DeleteOptions) -> Result<()> {
    let mut store = load_store(options.store)?;
    let found = store.delete(&options.id)?;

    let output = TaskDeleteOutput {
        id: options.id.clone(),
        found,
    };

    let mut human = if found {
        let mut human = HumanOutput::new("Task deleted");
        human.push_summary("ID", options.id);
        human
    } else {
        HumanOutput::new("No change")
    };
    if !found {
        human.push_warning(format!("no task with id {}", output.id));
    }

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "rm",
        &output,
        Some(&human),
    )
}

pub fn run_filter(options: FilterOptions) -> Result<()> {
    let mut store = load_store(options.store)?;
    let filter = Filter::parse(&options.value)?;
    store.set_filter(filter)?;

    let output = FilterOutput { filter };

    let mut human = HumanOutput::new("Filter updated");
    human.push_summary("Filter", filter.to_string());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "filter",
        &output,
        Some(&human),
    )
}

pub fn run_clear(options: ClearOptions) -> Result<()> {
    let mut store = load_store(options.store)?;
    let removed = store.clear_completed()?;
    let remaining = store.snapshot().tasks.len();

    let output = ClearOutput { removed, remaining };

    let mut human = HumanOutput::new("Completed tasks cleared");
    human.push_summary("Removed", removed.to_string());
    human.push_summary("Remaining", remaining.to_string());

    emit_success(
        OutputOptions {
            json: options.json,
            quiet: options.quiet,
        },
        "clear",
        &output,
        Some(&human),
    )
}

/// Parse a due date given as RFC 3339 or as a plain date (midnight UTC).
fn parse_due_date(value: &str) -> Result<DateTime<Utc>> {
    let trimmed = value.trim();
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.with_timezone(&Utc));
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        let midnight = date.and_hms_opt(0, 0, 0).ok_or_else(|| {
            Error::InvalidArgument(format!("invalid due date: {trimmed}"))
        })?;
        return Ok(DateTime::from_naive_utc_and_offset(midnight, Utc));
    }
    Err(Error::InvalidArgument(format!(
        "invalid due date '{trimmed}' (expected RFC 3339 or YYYY-MM-DD)"
    )))
}

fn blank_to_none(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}
