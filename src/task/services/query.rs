//! Filtering, sorting and summary rules for task listings.

use chrono::{DateTime, Utc};
use std::cmp::Ordering;

use crate::task::domain::{SortOrder, Task, TaskFilters, TaskSortField, TaskStats, TaskStatus};

/// Applies `filters` to a collection given in storage order.
///
/// The collection is first reversed so unsorted listings show the newest
/// task first. Status, priority and text filters are then applied in that
/// order, followed by a stable sort when a sort field is set.
#[must_use]
pub fn apply_filters(mut tasks: Vec<Task>, filters: &TaskFilters) -> Vec<Task> {
    tasks.reverse();

    if let Some(status) = filters.status {
        tasks.retain(|task| task.status() == status);
    }

    if let Some(priority) = filters.priority {
        tasks.retain(|task| task.priority() == priority);
    }

    if let Some(search) = filters.search.as_deref().filter(|search| !search.is_empty()) {
        let needle = search.to_lowercase();
        tasks.retain(|task| matches_search(task, &needle));
    }

    if let Some(field) = filters.sort_by {
        tasks.sort_by(|a, b| compare(a, b, field, filters.sort_order));
    }

    tasks
}

/// Computes summary counts; overdue tasks are open with a due date before `now`.
#[must_use]
pub fn summarize(tasks: &[Task], now: DateTime<Utc>) -> TaskStats {
    tasks.iter().fold(
        TaskStats {
            total: tasks.len(),
            ..TaskStats::default()
        },
        |mut stats, task| {
            match task.status() {
                TaskStatus::Open => stats.open += 1,
                TaskStatus::Completed => stats.completed += 1,
            }
            if task.is_overdue(now) {
                stats.overdue += 1;
            }
            stats
        },
    )
}

fn matches_search(task: &Task, needle: &str) -> bool {
    task.title().to_lowercase().contains(needle)
        || task
            .description()
            .is_some_and(|description| description.to_lowercase().contains(needle))
}

fn compare(a: &Task, b: &Task, field: TaskSortField, order: SortOrder) -> Ordering {
    match field {
        TaskSortField::CreatedAt => directed(a.created_at().cmp(&b.created_at()), order),
        TaskSortField::Priority => directed(a.priority().cmp(&b.priority()), order),
        // Undated tasks stay last whichever direction is requested.
        TaskSortField::DueDate => match (a.due_date(), b.due_date()) {
            (Some(left), Some(right)) => directed(left.cmp(&right), order),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        },
    }
}

const fn directed(ordering: Ordering, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Ascending => ordering,
        SortOrder::Descending => ordering.reverse(),
    }
}
