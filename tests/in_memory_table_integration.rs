//! In-memory integration tests for the gated task table.

use std::collections::BTreeSet;
use std::sync::Arc;

use ganttboard::{
    board::{
        adapters::{
            access::{SessionGate, SharedSecretGate},
            memory::InMemoryTaskTable,
        },
        domain::{Credential, RowSelection, TaskKey},
        seed::example_rows,
        services::{NewTaskRequest, TaskTableService},
    },
    chart::project,
};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestService = TaskTableService<InMemoryTaskTable, SessionGate, DefaultClock>;

const SECRET: &str = "rabbit1";

#[fixture]
fn seeded() -> Arc<TestService> {
    let rows = example_rows(&DefaultClock).expect("seed rows should be valid");
    Arc::new(TaskTableService::new(
        Arc::new(InMemoryTaskTable::with_rows(rows)),
        Arc::new(SessionGate::new(SharedSecretGate::new(SECRET))),
        Arc::new(DefaultClock),
    ))
}

fn request(topic: &str) -> NewTaskRequest {
    NewTaskRequest::new("Process Gas", "2024-04-01", "2024-04-20", topic).with_progress(5)
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn concurrent_adds_receive_distinct_consecutive_keys(
    seeded: Arc<TestService>,
) -> Result<(), eyre::Report> {
    let handles: Vec<_> = (0..20)
        .map(|index| {
            let service = Arc::clone(&seeded);
            tokio::spawn(async move {
                service
                    .add_task(
                        request(&format!("Parallel {index}")),
                        &Credential::password(SECRET),
                    )
                    .await
            })
        })
        .collect();

    let mut keys = BTreeSet::new();
    for handle in handles {
        let record = handle.await??;
        keys.insert(record.key().value());
    }

    eyre::ensure!(keys == (11..=30).collect::<BTreeSet<u64>>(), "unexpected keys {keys:?}");
    eyre::ensure!(seeded.list().await?.len() == 30, "expected 30 rows");
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn chart_follows_every_mutation(seeded: Arc<TestService>) -> Result<(), eyre::Report> {
    let password = Credential::password(SECRET);
    let before = project(&seeded.list().await?);

    let added = seeded.add_task(request("Project K"), &password).await?;
    let after_add = project(&seeded.list().await?);
    seeded.delete_task(TaskKey::new(2)?, &password).await?;
    let after_delete = project(&seeded.list().await?);

    eyre::ensure!(before.interval_count() == 10, "seed chart should have 10 bars");
    eyre::ensure!(after_add.interval_count() == 11, "add should add one bar");
    eyre::ensure!(
        after_add
            .bars()
            .any(|(bar, _)| bar.key == added.key() && bar.topic == "Project K"),
        "new bar missing"
    );
    eyre::ensure!(after_delete.interval_count() == 10, "delete should drop one bar");
    eyre::ensure!(
        after_delete.bars().all(|(bar, _)| bar.topic != "Project B"),
        "deleted row still charted"
    );
    Ok(())
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn nested_subtasks_chain_topics(seeded: Arc<TestService>) -> Result<(), eyre::Report> {
    let password = Credential::password(SECRET);

    let child = seeded
        .add_subtask(request("Design"), &password, &RowSelection::one(TaskKey::new(1)?))
        .await?;
    let grandchild = seeded
        .add_subtask(request("Review"), &password, &RowSelection::one(child.key()))
        .await?;

    eyre::ensure!(child.topic() == "Project A - Design", "child topic");
    eyre::ensure!(
        grandchild.topic() == "Project A - Design - Review",
        "grandchild topic was {}",
        grandchild.topic()
    );
    eyre::ensure!(grandchild.parent() == Some(child.key()), "grandchild parent");
    Ok(())
}
