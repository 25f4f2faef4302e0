//! Projection tests: bar counts, grouping, colours and category order.

use super::record;
use crate::board::domain::FALLBACK_COLOR;
use crate::chart::project;
use chrono::NaiveDate;
use rstest::rstest;

#[rstest]
fn empty_table_projects_to_empty_chart() {
    let chart = project(&[]);

    assert!(chart.is_empty());
    assert_eq!(chart.interval_count(), 0);
    assert!(chart.categories().is_empty());
    assert_eq!(chart.range(), None);
}

#[rstest]
#[case(1)]
#[case(3)]
#[case(10)]
fn every_row_yields_one_interval(#[case] rows: u64) {
    let table: Vec<_> = (1..=rows)
        .map(|key| record(key, "Wafer", &format!("Project {key}"), (1, 1), (1, 20)))
        .collect();

    let chart = project(&table);

    assert_eq!(chart.interval_count(), table.len());
}

#[rstest]
fn bars_group_by_area_in_first_appearance_order() {
    let table = vec![
        record(1, "Slurry", "Polish", (1, 1), (1, 10)),
        record(2, "Chemicals", "Etch", (1, 5), (1, 15)),
        record(3, "Slurry", "Rinse", (1, 8), (1, 12)),
    ];

    let chart = project(&table);
    let areas: Vec<&str> = chart.series().iter().map(|s| s.area.as_str()).collect();

    assert_eq!(areas, vec!["Slurry", "Chemicals"]);
    let slurry = chart.series().first().expect("slurry series");
    assert_eq!(slurry.color, "#2ca02c");
    assert_eq!(slurry.bars.len(), 2);
}

#[rstest]
fn unknown_area_uses_fallback_color() {
    let chart = project(&[record(1, "Metrology", "Calibrate", (2, 1), (2, 3))]);

    let series = chart.series().first().expect("one series");
    assert_eq!(series.area, "Metrology");
    assert_eq!(series.color, FALLBACK_COLOR);
}

#[rstest]
fn categories_order_by_total_duration_ascending() {
    let table = vec![
        record(1, "Wafer", "Long", (1, 1), (3, 1)),
        record(2, "Wafer", "Short", (1, 1), (1, 3)),
        record(3, "Wafer", "Medium", (1, 1), (1, 20)),
    ];

    let chart = project(&table);

    assert_eq!(chart.categories(), ["Short", "Medium", "Long"]);
}

#[rstest]
fn repeated_topics_accumulate_into_one_category() {
    let table = vec![
        record(1, "Wafer", "Shared", (1, 1), (1, 6)),
        record(2, "Bulk Gas", "Single", (1, 1), (1, 8)),
        record(3, "Slurry", "Shared", (2, 1), (2, 6)),
    ];

    let chart = project(&table);

    assert_eq!(chart.interval_count(), 3);
    assert_eq!(chart.categories(), ["Single", "Shared"]);
}

#[rstest]
fn ties_prefer_fewer_intervals_then_first_seen() {
    let table = vec![
        record(1, "Wafer", "Split", (1, 1), (1, 3)),
        record(2, "Wafer", "Split", (1, 5), (1, 7)),
        record(3, "Wafer", "Whole", (1, 1), (1, 5)),
        record(4, "Wafer", "Later", (2, 1), (2, 5)),
    ];

    let chart = project(&table);

    assert_eq!(chart.categories(), ["Whole", "Later", "Split"]);
}

#[rstest]
fn range_spans_earliest_start_to_latest_end() {
    let table = vec![
        record(1, "Wafer", "A", (3, 1), (3, 10)),
        record(2, "Wafer", "B", (1, 15), (2, 1)),
    ];

    let range = project(&table).range().expect("non-empty range");

    assert_eq!(range.start, NaiveDate::from_ymd_opt(2024, 1, 15).expect("date"));
    assert_eq!(range.end, NaiveDate::from_ymd_opt(2024, 3, 10).expect("date"));
}
