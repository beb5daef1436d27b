//! When steps for task management BDD scenarios.

use super::world::{TaskManagementWorld, run_async};
use eyre::WrapErr;
use flowtask::task::domain::{CreateTaskData, TaskFilters};
use rstest_bdd_macros::when;

#[when(r#"a task titled "{title}" is created"#)]
fn create_task(world: &mut TaskManagementWorld, title: String) {
    let result = run_async(world.service.create_task(CreateTaskData::new(title)));
    if let Ok(ref created) = result {
        world.original_task = Some(created.clone());
        world.current_task = Some(created.clone());
    }
    world.last_create_result = Some(result);
}

#[when("the task completion is toggled {times:usize} times")]
fn toggle_completion(world: &mut TaskManagementWorld, times: usize) -> Result<(), eyre::Report> {
    for _ in 0..times {
        let id = world.current()?.id();
        let toggled =
            run_async(world.service.toggle_task_status(id)).wrap_err("toggle task status")?;
        world.current_task = Some(toggled);
    }
    Ok(())
}

#[when("the task statistics are requested")]
fn request_statistics(world: &mut TaskManagementWorld) {
    world.stats = Some(run_async(world.service.get_task_stats()));
}

#[when(r#"tasks are searched for "{search}""#)]
fn search_tasks(world: &mut TaskManagementWorld, search: String) {
    world.listed = run_async(
        world
            .service
            .get_all_tasks(&TaskFilters::new().with_search(search)),
    );
}
