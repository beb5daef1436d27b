//! Given steps for task management BDD scenarios.

use super::world::{TaskManagementWorld, run_async};
use chrono::TimeDelta;
use eyre::WrapErr;
use flowtask::task::domain::{CreateTaskData, TaskFilters};
use flowtask::test_support::fixture_timestamp;
use rstest_bdd_macros::given;

#[given("an empty task list")]
fn empty_task_list(world: &mut TaskManagementWorld) -> Result<(), eyre::Report> {
    let tasks = run_async(world.service.get_all_tasks(&TaskFilters::default()));
    eyre::ensure!(tasks.is_empty(), "expected no stored tasks");
    Ok(())
}

#[given(r#"a task titled "{title}" exists"#)]
fn task_exists(world: &mut TaskManagementWorld, title: String) -> Result<(), eyre::Report> {
    let created = run_async(world.service.create_task(CreateTaskData::new(title)))
        .wrap_err("create task for scenario")?;
    world.original_task = Some(created.clone());
    world.current_task = Some(created);
    Ok(())
}

#[given(r#"an open task titled "{title}" that was due yesterday"#)]
fn open_task_due_yesterday(
    world: &mut TaskManagementWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let data = CreateTaskData::new(title).with_due_date(fixture_timestamp() - TimeDelta::days(1));
    run_async(world.service.create_task(data)).wrap_err("create overdue task")?;
    Ok(())
}

#[given(r#"a completed task titled "{title}" that was due yesterday"#)]
fn completed_task_due_yesterday(
    world: &mut TaskManagementWorld,
    title: String,
) -> Result<(), eyre::Report> {
    let data = CreateTaskData::new(title).with_due_date(fixture_timestamp() - TimeDelta::days(1));
    let created = run_async(world.service.create_task(data)).wrap_err("create task")?;
    run_async(world.service.toggle_task_status(created.id())).wrap_err("complete task")?;
    Ok(())
}
