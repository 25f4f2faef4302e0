//! Projection of table rows onto timeline intervals.

use chrono::NaiveDate;
use serde::Serialize;
use std::collections::HashMap;

use crate::board::domain::{Progress, TaskKey, TaskRecord};

/// One interval on the timeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimelineBar {
    /// Key of the row this bar was projected from.
    pub key: TaskKey,
    /// Vertical-axis label.
    pub topic: String,
    /// First day of the interval.
    pub start: NaiveDate,
    /// Last day of the interval.
    pub end: NaiveDate,
    /// Completion percentage.
    pub progress: Progress,
}

/// Bars sharing one area, drawn in one colour.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChartSeries {
    /// Area label.
    pub area: String,
    /// Fill colour as `#rrggbb`.
    pub color: &'static str,
    /// Bars in table order.
    pub bars: Vec<TimelineBar>,
}

/// Earliest start and latest end across all bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct DateRange {
    /// Earliest start date.
    pub start: NaiveDate,
    /// Latest end date.
    pub end: NaiveDate,
}

impl DateRange {
    /// Returns the span in days, at least one.
    #[must_use]
    pub fn span_days(&self) -> i64 {
        self.end
            .signed_duration_since(self.start)
            .num_days()
            .max(1)
    }
}

/// Projected chart: series per area and ordered vertical-axis categories.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct TimelineChart {
    series: Vec<ChartSeries>,
    categories: Vec<String>,
    range: Option<DateRange>,
}

impl TimelineChart {
    /// Returns the series in first-appearance order of their area.
    #[must_use]
    pub fn series(&self) -> &[ChartSeries] {
        &self.series
    }

    /// Returns the topic categories, bottom of the axis first.
    ///
    /// Topics are sorted by total scheduled days ascending; ties go to the
    /// topic with fewer bars, then to the one seen first.
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    /// Returns the overall date range, or `None` for an empty chart.
    #[must_use]
    pub const fn range(&self) -> Option<DateRange> {
        self.range
    }

    /// Returns the number of bars across all series.
    #[must_use]
    pub fn interval_count(&self) -> usize {
        self.series.iter().map(|series| series.bars.len()).sum()
    }

    /// Returns `true` when there is nothing to draw.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.series.is_empty()
    }

    /// Iterates over every bar together with its series colour.
    pub fn bars(&self) -> impl Iterator<Item = (&TimelineBar, &'static str)> {
        self.series
            .iter()
            .flat_map(|series| series.bars.iter().map(move |bar| (bar, series.color)))
    }
}

#[derive(Debug)]
struct CategoryTotals {
    total_days: i64,
    bars: usize,
    first_seen: usize,
}

/// Projects table rows onto a timeline chart.
///
/// Every row yields exactly one bar; an empty table yields an empty chart.
#[must_use]
pub fn project(rows: &[TaskRecord]) -> TimelineChart {
    let mut series: Vec<ChartSeries> = Vec::new();
    let mut totals: HashMap<&str, CategoryTotals> = HashMap::new();
    let mut range: Option<DateRange> = None;

    for (index, row) in rows.iter().enumerate() {
        let schedule = row.schedule();
        let bar = TimelineBar {
            key: row.key(),
            topic: row.topic().to_owned(),
            start: schedule.start(),
            end: schedule.end(),
            progress: row.progress(),
        };

        let area = row.area().label();
        match series.iter_mut().find(|existing| existing.area == area) {
            Some(existing) => existing.bars.push(bar),
            None => series.push(ChartSeries {
                area: area.to_owned(),
                color: row.area().color(),
                bars: vec![bar],
            }),
        }

        let entry = totals.entry(row.topic()).or_insert(CategoryTotals {
            total_days: 0,
            bars: 0,
            first_seen: index,
        });
        entry.total_days = entry.total_days.saturating_add(schedule.duration_days());
        entry.bars += 1;

        range = Some(range.map_or(
            DateRange {
                start: schedule.start(),
                end: schedule.end(),
            },
            |current| DateRange {
                start: current.start.min(schedule.start()),
                end: current.end.max(schedule.end()),
            },
        ));
    }

    let mut ordered: Vec<(&str, CategoryTotals)> = totals.into_iter().collect();
    ordered.sort_by_key(|(_, category)| (category.total_days, category.bars, category.first_seen));
    let categories = ordered
        .into_iter()
        .map(|(topic, _)| topic.to_owned())
        .collect();

    TimelineChart {
        series,
        categories,
        range,
    }
}
