//! Then steps for project table scenarios.

use super::world::{TableWorld, run_async};
use ganttboard::board::services::TaskTableError;
use rstest_bdd_macros::then;

#[then("the table holds {count:u64} rows")]
fn table_holds(world: &TableWorld, count: u64) -> Result<(), eyre::Report> {
    let rows = run_async(world.service.list())?;
    let found = u64::try_from(rows.len())?;
    eyre::ensure!(found == count, "expected {count} rows, found {found}");
    Ok(())
}

#[then("the last added row has key {key:u64}")]
fn last_added_key(world: &TableWorld, key: u64) -> Result<(), eyre::Report> {
    let record = world
        .last_added
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no row was added in this scenario"))?;
    eyre::ensure!(
        record.key().value() == key,
        "expected key {key}, found {}",
        record.key()
    );
    Ok(())
}

#[then(r#"the last added row has topic "{topic}""#)]
fn last_added_topic(world: &TableWorld, topic: String) -> Result<(), eyre::Report> {
    let record = world
        .last_added
        .as_ref()
        .ok_or_else(|| eyre::eyre!("no row was added in this scenario"))?;
    eyre::ensure!(
        record.topic() == topic,
        "expected topic {topic:?}, found {:?}",
        record.topic()
    );
    Ok(())
}

#[then("the mutation is rejected as unauthorized")]
fn mutation_unauthorized(world: &TableWorld) -> Result<(), eyre::Report> {
    eyre::ensure!(
        matches!(world.last_error, Some(TaskTableError::Unauthorized(_))),
        "expected an unauthorized error, got {:?}",
        world.last_error
    );
    Ok(())
}

#[then("the chart has {bars:u64} bars in {series:u64} series")]
fn chart_shape(world: &TableWorld, bars: u64, series: u64) -> Result<(), eyre::Report> {
    let chart = world
        .chart
        .as_ref()
        .ok_or_else(|| eyre::eyre!("the chart was not projected"))?;
    let bar_count = u64::try_from(chart.interval_count())?;
    let series_count = u64::try_from(chart.series().len())?;
    eyre::ensure!(bar_count == bars, "expected {bars} bars, found {bar_count}");
    eyre::ensure!(
        series_count == series,
        "expected {series} series, found {series_count}"
    );
    Ok(())
}
