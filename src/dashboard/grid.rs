//! Client-side style filtering and sorting of grid rows.
//!
//! The table itself keeps insertion order; the grid view sorts and filters a
//! borrowed copy without touching the store.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

use crate::board::domain::TaskRecord;

/// Column the grid is sorted by.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortColumn {
    /// Table order.
    #[default]
    Key,
    /// Area label.
    Area,
    /// Start date.
    Start,
    /// End date.
    End,
    /// Topic.
    Topic,
    /// Completion percentage.
    Progress,
    /// Project leader.
    Leader,
    /// Project member.
    Member,
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortDirection {
    /// Smallest first.
    #[default]
    Asc,
    /// Largest first.
    Desc,
}

/// Filter and sort applied to the grid view.
///
/// Read from the page query string and echoed back by every form, so a
/// mutation re-renders the grid the way the user left it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GridQuery {
    /// Case-insensitive substring matched against topic, area, leader and
    /// member.
    pub filter: Option<String>,
    /// Sort column.
    pub sort: SortColumn,
    /// Sort direction.
    #[serde(rename = "dir")]
    pub direction: SortDirection,
}

impl GridQuery {
    /// Returns the rows that pass the filter, in the requested order.
    ///
    /// Ties keep table order.
    #[must_use]
    pub fn apply<'a>(&self, rows: &'a [TaskRecord]) -> Vec<&'a TaskRecord> {
        let needle = self
            .filter
            .as_deref()
            .map(str::trim)
            .filter(|text| !text.is_empty())
            .map(str::to_lowercase);

        let mut visible: Vec<&TaskRecord> = rows
            .iter()
            .filter(|row| needle.as_deref().is_none_or(|text| matches(row, text)))
            .collect();
        visible.sort_by(|left, right| {
            let ordering = compare(self.sort, left, right);
            match self.direction {
                SortDirection::Asc => ordering,
                SortDirection::Desc => ordering.reverse(),
            }
        });
        visible
    }
}

fn matches(row: &TaskRecord, needle: &str) -> bool {
    [row.topic(), row.area().label(), row.leader(), row.member()]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

fn compare(column: SortColumn, left: &TaskRecord, right: &TaskRecord) -> Ordering {
    match column {
        SortColumn::Key => left.key().cmp(&right.key()),
        SortColumn::Area => left.area().label().cmp(right.area().label()),
        SortColumn::Start => left.schedule().start().cmp(&right.schedule().start()),
        SortColumn::End => left.schedule().end().cmp(&right.schedule().end()),
        SortColumn::Topic => left.topic().cmp(right.topic()),
        SortColumn::Progress => left.progress().cmp(&right.progress()),
        SortColumn::Leader => left.leader().cmp(right.leader()),
        SortColumn::Member => left.member().cmp(right.member()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::seed::example_rows;
    use mockable::DefaultClock;
    use rstest::{fixture, rstest};

    #[fixture]
    fn rows() -> Vec<TaskRecord> {
        example_rows(&DefaultClock).expect("seed rows should be valid")
    }

    fn keys(view: &[&TaskRecord]) -> Vec<u64> {
        view.iter().map(|row| row.key().value()).collect()
    }

    #[rstest]
    fn default_query_keeps_table_order(rows: Vec<TaskRecord>) {
        let view = GridQuery::default().apply(&rows);
        assert_eq!(keys(&view), (1..=10).collect::<Vec<_>>());
    }

    #[rstest]
    fn filter_matches_area_case_insensitively(rows: Vec<TaskRecord>) {
        let query = GridQuery {
            filter: Some("  bulk GAS ".to_owned()),
            ..GridQuery::default()
        };
        assert_eq!(keys(&query.apply(&rows)), vec![4, 10]);
    }

    #[rstest]
    fn blank_filter_shows_everything(rows: Vec<TaskRecord>) {
        let query = GridQuery {
            filter: Some("   ".to_owned()),
            ..GridQuery::default()
        };
        assert_eq!(query.apply(&rows).len(), 10);
    }

    #[rstest]
    fn descending_progress_sort(rows: Vec<TaskRecord>) {
        let query = GridQuery {
            sort: SortColumn::Progress,
            direction: SortDirection::Desc,
            ..GridQuery::default()
        };
        assert_eq!(keys(&query.apply(&rows)), (1..=10).rev().collect::<Vec<_>>());
    }

    #[rstest]
    fn area_sort_is_stable(rows: Vec<TaskRecord>) {
        let query = GridQuery {
            sort: SortColumn::Area,
            ..GridQuery::default()
        };
        assert_eq!(
            keys(&query.apply(&rows)),
            vec![4, 10, 2, 8, 1, 7, 5, 3, 9, 6]
        );
    }
}
