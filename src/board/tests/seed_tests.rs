//! Tests for the example rows.

use crate::board::{domain::Area, seed::example_rows};
use chrono::NaiveDate;
use mockable::DefaultClock;
use rstest::rstest;

#[rstest]
fn example_rows_are_keyed_one_to_ten() {
    let rows = example_rows(&DefaultClock).expect("seed rows should be valid");
    let keys: Vec<u64> = rows.iter().map(|row| row.key().value()).collect();

    assert_eq!(keys, (1..=10).collect::<Vec<_>>());
}

#[rstest]
fn example_rows_follow_seed_schedule() {
    let rows = example_rows(&DefaultClock).expect("seed rows should be valid");
    let third = rows.get(2).expect("third row");

    assert_eq!(third.topic(), "Project C");
    assert_eq!(third.area(), &Area::Slurry);
    assert_eq!(
        third.schedule().start(),
        NaiveDate::from_ymd_opt(2024, 1, 21).expect("date")
    );
    assert_eq!(third.schedule().duration_days(), 30);
    assert_eq!(third.progress().value(), 20);
    assert_eq!(third.leader(), "Leader C");
    assert_eq!(third.member(), "Member C");
}

#[rstest]
fn example_rows_cycle_through_areas() {
    let rows = example_rows(&DefaultClock).expect("seed rows should be valid");
    let areas: Vec<&str> = rows.iter().map(|row| row.area().label()).collect();

    assert_eq!(
        areas,
        vec![
            "Photo Resist",
            "Chemicals",
            "Slurry",
            "Bulk Gas",
            "Process Gas",
            "Wafer",
            "Photo Resist",
            "Chemicals",
            "Slurry",
            "Bulk Gas",
        ]
    );
}
