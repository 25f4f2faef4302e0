//! Given steps for project table scenarios.

use super::world::TableWorld;
use eyre::WrapErr;
use ganttboard::board::seed::example_rows;
use mockable::DefaultClock;
use rstest_bdd_macros::given;

#[given("the example project table")]
fn example_project_table(world: &mut TableWorld) -> Result<(), eyre::Report> {
    let rows = example_rows(&DefaultClock).wrap_err("build example rows")?;
    *world = TableWorld::with_rows(rows);
    Ok(())
}

#[given("an empty project table")]
fn empty_project_table(world: &mut TableWorld) {
    *world = TableWorld::default();
}
