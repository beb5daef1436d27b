//! End-to-end task workflows over the in-memory store.

use super::helpers::{Harness, harness};
use chrono::TimeDelta;
use flowtask::storage::ports::KeyValueStore;
use flowtask::task::{
    adapters::keyvalue::DEFAULT_TASK_COLLECTION_KEY,
    domain::{
        CreateTaskData, SortOrder, TaskFilters, TaskPriority, TaskSortField, TaskStatus,
        UpdateTaskData,
    },
};
use flowtask::test_support::fixture_timestamp;
use rstest::{fixture, rstest};

#[fixture]
fn h() -> Harness {
    harness()
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn planning_a_week_end_to_end(h: Harness) -> Result<(), eyre::Report> {
    let groceries = h
        .tasks
        .create_task(
            CreateTaskData::new("Buy groceries")
                .with_description("Milk, eggs, bread")
                .with_priority(TaskPriority::Low),
        )
        .await?;
    let report = h
        .tasks
        .create_task(
            CreateTaskData::new("Send report")
                .with_priority(TaskPriority::High)
                .with_due_date(fixture_timestamp() - TimeDelta::days(1)),
        )
        .await?;
    let dentist = h
        .tasks
        .create_task(
            CreateTaskData::new("Book dentist")
                .with_due_date(fixture_timestamp() + TimeDelta::days(7)),
        )
        .await?;

    h.tasks.toggle_task_status(groceries.id()).await?;
    h.tasks
        .update_task(
            dentist.id(),
            UpdateTaskData::new().with_description("Ask about cleaning"),
        )
        .await?;

    let by_priority = h
        .tasks
        .get_all_tasks(
            &TaskFilters::new()
                .with_status(TaskStatus::Open)
                .sorted_by(TaskSortField::Priority, SortOrder::Descending),
        )
        .await;
    let ids: Vec<_> = by_priority.iter().map(|task| task.id()).collect();
    eyre::ensure!(
        ids == vec![report.id(), dentist.id()],
        "unexpected open task order: {ids:?}"
    );

    let stats = h.tasks.get_task_stats().await;
    eyre::ensure!(stats.total == 3, "expected 3 tasks, found {}", stats.total);
    eyre::ensure!(stats.completed == 1, "expected 1 completed task");
    eyre::ensure!(stats.overdue == 1, "expected 1 overdue task");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn search_finds_text_in_descriptions(h: Harness) -> Result<(), eyre::Report> {
    h.tasks
        .create_task(CreateTaskData::new("Errands").with_description("Pick up PARCEL"))
        .await?;
    h.tasks.create_task(CreateTaskData::new("Gym")).await?;

    let found = h
        .tasks
        .get_all_tasks(&TaskFilters::new().with_search("parcel"))
        .await;

    eyre::ensure!(found.len() == 1, "expected one match, found {}", found.len());
    eyre::ensure!(found[0].title() == "Errands", "wrong task matched");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_and_session_share_one_store(h: Harness) -> Result<(), eyre::Report> {
    h.auth.sign_in_with_google().await?;
    h.tasks.create_task(CreateTaskData::new("Inbox zero")).await?;

    let tasks_doc = h.store.get(DEFAULT_TASK_COLLECTION_KEY).await?;
    eyre::ensure!(tasks_doc.is_some(), "task collection should be stored");

    h.auth.sign_out().await?;
    let remaining = h.tasks.get_all_tasks(&TaskFilters::default()).await;
    eyre::ensure!(remaining.len() == 1, "sign-out must not touch tasks");
    Ok(())
}
