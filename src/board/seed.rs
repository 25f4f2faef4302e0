//! Example rows the dashboard starts with.

use chrono::{Days, NaiveDate};
use mockable::Clock;

use crate::board::domain::{
    Area, BoardDomainError, PersistedTaskRecord, Progress, Schedule, TaskDraft, TaskKey, TaskRecord,
};

const SEED_AREAS: [Area; 10] = [
    Area::PhotoResist,
    Area::Chemicals,
    Area::Slurry,
    Area::BulkGas,
    Area::ProcessGas,
    Area::Wafer,
    Area::PhotoResist,
    Area::Chemicals,
    Area::Slurry,
    Area::BulkGas,
];

const SEED_LETTERS: [char; 10] = ['A', 'B', 'C', 'D', 'E', 'F', 'G', 'H', 'I', 'J'];
const SEED_SPACING_DAYS: u64 = 10;
const SEED_LENGTH_DAYS: u64 = 30;

/// Builds the ten example rows, keyed 1 to 10.
///
/// Row `i` (from zero) starts `10 * i` days after 2024-01-01, runs for 30
/// days, is `10 * i` percent complete and is titled `Project <letter>`.
///
/// # Errors
///
/// Returns [`BoardDomainError`] if a seed value fails validation.
pub fn example_rows(clock: &impl Clock) -> Result<Vec<TaskRecord>, BoardDomainError> {
    let origin = NaiveDate::from_ymd_opt(2024, 1, 1)
        .ok_or_else(|| BoardDomainError::InvalidDate("2024-01-01".to_owned()))?;
    let created_at = clock.utc();

    SEED_AREAS
        .into_iter()
        .zip(SEED_LETTERS)
        .zip(0_u64..)
        .map(|((area, letter), index)| {
            let start = shift(origin, index * SEED_SPACING_DAYS)?;
            let end = shift(start, SEED_LENGTH_DAYS)?;
            let percent = i64::try_from(index * 10)
                .map_err(|_| BoardDomainError::InvalidProgress(i64::MAX))?;
            let draft = TaskDraft::new(
                area,
                Schedule::new(start, end)?,
                format!("Project {letter}"),
                Progress::new(percent)?,
            )?
            .with_leader(format!("Leader {letter}"))
            .with_member(format!("Member {letter}"));

            Ok(TaskRecord::from_persisted(PersistedTaskRecord {
                key: TaskKey::new(index + 1)?,
                parent: None,
                draft,
                created_at,
            }))
        })
        .collect()
}

fn shift(date: NaiveDate, days: u64) -> Result<NaiveDate, BoardDomainError> {
    date.checked_add_days(Days::new(days))
        .ok_or_else(|| BoardDomainError::InvalidDate(format!("{date} + {days} days")))
}
