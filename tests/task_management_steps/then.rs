//! Then steps for task management BDD scenarios.

use super::world::{TaskManagementWorld, run_async};
use flowtask::task::{
    domain::{TaskDomainError, TaskFilters, TaskStatus},
    services::TaskServiceError,
};
use rstest_bdd_macros::then;

#[then(r#"the task is open with "{priority}" priority"#)]
fn task_open_with_priority(
    world: &TaskManagementWorld,
    priority: String,
) -> Result<(), eyre::Report> {
    let task = world.current()?;
    eyre::ensure!(
        task.status() == TaskStatus::Open,
        "expected open task, found {}",
        task.status().as_str()
    );
    eyre::ensure!(
        task.priority().as_str() == priority,
        "expected {priority} priority, found {}",
        task.priority().as_str()
    );
    Ok(())
}

#[then("the task creation and update timestamps match")]
fn timestamps_match(world: &TaskManagementWorld) -> Result<(), eyre::Report> {
    let task = world.current()?;
    eyre::ensure!(
        task.created_at() == task.updated_at(),
        "expected matching timestamps at creation"
    );
    Ok(())
}

#[then("the task update timestamp has advanced")]
fn update_timestamp_advanced(world: &TaskManagementWorld) -> Result<(), eyre::Report> {
    let original = world
        .original_task
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing original task in scenario world"))?;
    let current = world.current()?;
    eyre::ensure!(
        current.updated_at() > original.updated_at(),
        "expected updated_at to advance"
    );
    eyre::ensure!(
        current.created_at() == original.created_at(),
        "created_at must not change"
    );
    Ok(())
}

#[then("task creation fails because the title is empty")]
fn creation_fails_with_empty_title(world: &TaskManagementWorld) -> Result<(), eyre::Report> {
    let result = world
        .last_create_result
        .as_ref()
        .ok_or_else(|| eyre::eyre!("missing create result in scenario world"))?;
    match result {
        Err(TaskServiceError::Validation(TaskDomainError::EmptyTitle)) => Ok(()),
        other => Err(eyre::eyre!("expected empty title error, got {other:?}")),
    }
}

#[then("the task list holds {count:usize} tasks")]
fn task_list_holds(world: &mut TaskManagementWorld, count: usize) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.get_all_tasks(&TaskFilters::default()));
    eyre::ensure!(
        tasks.len() == count,
        "expected {count} tasks, found {}",
        tasks.len()
    );
    Ok(())
}

#[then(
    "the statistics report {total:usize} total, {completed:usize} completed and {overdue:usize} overdue"
)]
fn statistics_report(
    world: &TaskManagementWorld,
    total: usize,
    completed: usize,
    overdue: usize,
) -> Result<(), eyre::Report> {
    let stats = world
        .stats
        .ok_or_else(|| eyre::eyre!("missing statistics in scenario world"))?;
    eyre::ensure!(stats.total == total, "expected {total} total, got {}", stats.total);
    eyre::ensure!(
        stats.completed == completed,
        "expected {completed} completed, got {}",
        stats.completed
    );
    eyre::ensure!(
        stats.overdue == overdue,
        "expected {overdue} overdue, got {}",
        stats.overdue
    );
    eyre::ensure!(
        stats.open + stats.completed == stats.total,
        "open and completed must add up to total"
    );
    Ok(())
}

#[then(r#"only the task titled "{title}" is listed"#)]
fn only_task_listed(world: &TaskManagementWorld, title: String) -> Result<(), eyre::Report> {
    let titles: Vec<&str> = world.listed.iter().map(|task| task.title()).collect();
    eyre::ensure!(titles == [title.as_str()], "unexpected listing: {titles:?}");
    Ok(())
}
