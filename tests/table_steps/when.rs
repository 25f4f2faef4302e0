//! When steps for project table scenarios.

use super::world::{TableWorld, run_async};
use ganttboard::{
    board::{
        domain::{Credential, RowSelection, TaskKey, TaskRecord},
        services::{NewTaskRequest, TaskTableResult},
    },
    chart::project,
};
use rstest_bdd_macros::when;

fn request(topic: String, area: String) -> NewTaskRequest {
    NewTaskRequest::new(area, "2024-03-01", "2024-03-31", topic).with_progress(25)
}

fn record_outcome(world: &mut TableWorld, outcome: TaskTableResult<TaskRecord>) {
    match outcome {
        Ok(record) => {
            world.last_added = Some(record);
            world.last_error = None;
        }
        Err(error) => world.last_error = Some(error),
    }
}

#[when(r#"a task "{topic}" in area "{area}" is added with password "{password}""#)]
fn add_task(world: &mut TableWorld, topic: String, area: String, password: String) {
    let outcome = run_async(
        world
            .service
            .add_task(request(topic, area), &Credential::password(password)),
    );
    record_outcome(world, outcome);
}

#[when(r#"a subtask "{topic}" is added under row {parent:u64} with password "{password}""#)]
fn add_subtask(
    world: &mut TableWorld,
    topic: String,
    parent: u64,
    password: String,
) -> Result<(), eyre::Report> {
    let selection = RowSelection::one(TaskKey::new(parent)?);
    let outcome = run_async(world.service.add_subtask(
        request(topic, "Slurry".to_owned()),
        &Credential::password(password),
        &selection,
    ));
    record_outcome(world, outcome);
    Ok(())
}

#[when(r#"the row with key {key:u64} is deleted with password "{password}""#)]
fn delete_row(world: &mut TableWorld, key: u64, password: String) -> Result<(), eyre::Report> {
    let task_key = TaskKey::new(key)?;
    let outcome = run_async(
        world
            .service
            .delete_task(task_key, &Credential::password(password)),
    );
    if let Err(error) = outcome {
        world.last_error = Some(error);
    }
    Ok(())
}

#[when("the chart is projected")]
fn chart_is_projected(world: &mut TableWorld) -> Result<(), eyre::Report> {
    let rows = run_async(world.service.list())?;
    world.chart = Some(project(&rows));
    Ok(())
}
