//! Unit tests for timeline projection and rendering.

mod projector_tests;

use crate::board::domain::{
    Area, PersistedTaskRecord, Progress, Schedule, TaskDraft, TaskKey, TaskRecord,
};
use chrono::{DateTime, NaiveDate, Utc};

/// Builds a stored record for projection tests.
pub(super) fn record(
    key: u64,
    area: &str,
    topic: &str,
    start: (u32, u32),
    end: (u32, u32),
) -> TaskRecord {
    let start_date = NaiveDate::from_ymd_opt(2024, start.0, start.1).expect("valid start date");
    let end_date = NaiveDate::from_ymd_opt(2024, end.0, end.1).expect("valid end date");
    let draft = TaskDraft::new(
        Area::parse(area).expect("valid area"),
        Schedule::new(start_date, end_date).expect("valid schedule"),
        topic,
        Progress::new(40).expect("valid progress"),
    )
    .expect("valid draft");

    TaskRecord::from_persisted(PersistedTaskRecord {
        key: TaskKey::new(key).expect("valid key"),
        parent: None,
        draft,
        created_at: DateTime::<Utc>::UNIX_EPOCH,
    })
}
