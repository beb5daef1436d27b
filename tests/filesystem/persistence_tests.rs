//! Durability tests for the filesystem-backed application wiring.

use camino::Utf8PathBuf;
use flowtask::app::Flowtask;
use flowtask::config::{AuthConfig, FlowtaskConfig, StorageConfig};
use flowtask::storage::{
    adapters::FileKeyValueStore,
    ports::{KeyValueStore, StorageError},
};
use flowtask::task::domain::{CreateTaskData, TaskFilters, TaskPriority, UpdateTaskData};
use rstest::{fixture, rstest};
use tempfile::TempDir;

struct DataDir {
    _temp: TempDir,
    path: Utf8PathBuf,
}

#[fixture]
fn data_dir() -> DataDir {
    let temp = tempfile::tempdir().expect("create temp dir");
    let path = Utf8PathBuf::from_path_buf(temp.path().join("flowtask"))
        .expect("temp path should be UTF-8");
    DataDir { _temp: temp, path }
}

fn config_for(dir: &DataDir) -> FlowtaskConfig {
    FlowtaskConfig {
        storage: StorageConfig {
            data_dir: Some(dir.path.clone()),
            ..StorageConfig::default()
        },
        auth: AuthConfig::instant(),
        ..FlowtaskConfig::default()
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn tasks_survive_reopening(data_dir: DataDir) -> Result<(), eyre::Report> {
    let config = config_for(&data_dir);
    let created = {
        let app = Flowtask::open(&config)?;
        let created = app
            .tasks()
            .create_task(CreateTaskData::new("Renew passport").with_priority(TaskPriority::High))
            .await?;
        app.tasks()
            .update_task(
                created.id(),
                UpdateTaskData::new().with_description("Photos first"),
            )
            .await?
    };

    let reopened = Flowtask::open(&config)?;
    let loaded = reopened.tasks().get_task_by_id(created.id()).await;

    eyre::ensure!(loaded == Some(created), "reloaded task differs: {loaded:?}");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn session_survives_reopening(data_dir: DataDir) -> Result<(), eyre::Report> {
    let config = config_for(&data_dir);
    let user = Flowtask::open(&config)?.auth().sign_in_with_google().await?;

    let reopened = Flowtask::open(&config)?;
    eyre::ensure!(
        reopened.auth().get_current_user().await == Some(user),
        "session should persist across instances"
    );

    reopened.auth().sign_out().await?;
    eyre::ensure!(
        !Flowtask::open(&config)?.auth().is_authenticated().await,
        "sign-out should persist"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn documents_are_named_after_keys(data_dir: DataDir) -> Result<(), eyre::Report> {
    let config = config_for(&data_dir);
    let app = Flowtask::open(&config)?;
    app.tasks().create_task(CreateTaskData::new("Visible")).await?;
    app.auth().sign_in_with_google().await?;

    let task_doc = data_dir.path.join("task-collection.json");
    let session_doc = data_dir.path.join("current-session.json");
    eyre::ensure!(task_doc.is_file(), "missing {task_doc}");
    eyre::ensure!(session_doc.is_file(), "missing {session_doc}");

    let leftovers: Vec<_> = std::fs::read_dir(&data_dir.path)?
        .filter_map(Result::ok)
        .filter(|entry| entry.file_name().to_string_lossy().ends_with(".tmp"))
        .collect();
    eyre::ensure!(leftovers.is_empty(), "staging files left behind");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn corrupted_document_reads_as_empty(data_dir: DataDir) -> Result<(), eyre::Report> {
    let config = config_for(&data_dir);
    let app = Flowtask::open(&config)?;
    app.tasks().create_task(CreateTaskData::new("Doomed")).await?;
    std::fs::write(data_dir.path.join("task-collection.json"), "{{{ not json")?;

    let listed = app.tasks().get_all_tasks(&TaskFilters::default()).await;
    eyre::ensure!(listed.is_empty(), "corrupted collection should read as empty");

    app.tasks().create_task(CreateTaskData::new("Fresh start")).await?;
    let listed = app.tasks().get_all_tasks(&TaskFilters::default()).await;
    eyre::ensure!(listed.len() == 1, "new writes should replace corrupt data");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn store_round_trips_and_removes(data_dir: DataDir) -> Result<(), eyre::Report> {
    let store = FileKeyValueStore::open(&data_dir.path)?;
    eyre::ensure!(store.root() == data_dir.path.as_path(), "root should match");

    eyre::ensure!(store.get("notes").await?.is_none(), "absent key reads as None");
    store.set("notes", "[1,2,3]").await?;
    store.set("notes", "[4]").await?;
    eyre::ensure!(
        store.get("notes").await?.as_deref() == Some("[4]"),
        "last write wins"
    );

    store.remove("notes").await?;
    store.remove("notes").await?;
    eyre::ensure!(store.get("notes").await?.is_none(), "removed key reads as None");
    Ok(())
}

#[rstest]
#[case("")]
#[case("../escape")]
#[case(".hidden")]
#[case("with/slash")]
#[tokio::test(flavor = "multi_thread")]
async fn store_rejects_unsafe_keys(data_dir: DataDir, #[case] key: &str) {
    let store = FileKeyValueStore::open(&data_dir.path).expect("open store");

    let result = store.set(key, "{}").await;

    assert!(matches!(result, Err(StorageError::InvalidKey(rejected)) if rejected == key));
}
