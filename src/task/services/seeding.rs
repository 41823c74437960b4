//! Turns a remote seed payload into tasks ready for the store.

use crate::task::domain::{PersistedTaskData, SeedPayload, Task, TaskDomainError, TaskId};
use chrono::{DateTime, Datelike, Months, NaiveTime, Utc};
use mockable::Clock;
use rand::Rng;
use thiserror::Error;
use tracing::info;

/// Errors raised while preparing seed data.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SeedError {
    /// The seed endpoint reported that no data is available.
    #[error("seed data unavailable")]
    Unavailable,

    /// The current month cannot be represented.
    #[error("current month is outside the supported calendar range")]
    CalendarOutOfRange,

    /// Identifier synthesis failed.
    #[error(transparent)]
    Domain(#[from] TaskDomainError),
}

/// Prepares seed tasks for the store.
///
/// Tasks keep the identifiers they arrive with. Tasks without one are
/// numbered after the highest identifier in the payload, in delivery
/// order. Tasks without a creation time get a random instant within the
/// current UTC month.
///
/// # Errors
///
/// Returns [`SeedError::Unavailable`] when the payload reports no data,
/// and the other [`SeedError`] variants when identity or time synthesis
/// is impossible.
pub fn prepare_seed<C, R>(
    payload: SeedPayload,
    clock: &C,
    rng: &mut R,
) -> Result<Vec<Task>, SeedError>
where
    C: Clock + ?Sized,
    R: Rng,
{
    if !payload.response {
        return Err(SeedError::Unavailable);
    }

    let now = clock.utc();
    let mut next_id = TaskId::next_after(payload.data.iter().filter_map(|seed| seed.id));
    let mut allocate = || -> Result<TaskId, SeedError> {
        let id = next_id.clone()?;
        next_id = id.next();
        Ok(id)
    };

    let mut synthesized = 0_usize;
    let mut tasks = Vec::with_capacity(payload.data.len());
    for seed in payload.data {
        if seed.id.is_none() || seed.created_at.is_none() {
            synthesized = synthesized.saturating_add(1);
        }
        let id = seed.id.map_or_else(&mut allocate, Ok)?;
        let created_at = match seed.created_at {
            Some(created_at) => created_at,
            None => random_instant_in_month(now, rng)?,
        };
        tasks.push(Task::from_persisted(PersistedTaskData {
            id,
            draft: seed.to_draft(),
            created_at,
        }));
    }

    info!(tasks = tasks.len(), synthesized, "prepared seed tasks");
    Ok(tasks)
}

/// Returns a uniformly random instant within the UTC calendar month
/// containing `now`.
///
/// # Errors
///
/// Returns [`SeedError::CalendarOutOfRange`] when the month boundaries
/// cannot be represented.
pub fn random_instant_in_month<R>(
    now: DateTime<Utc>,
    rng: &mut R,
) -> Result<DateTime<Utc>, SeedError>
where
    R: Rng,
{
    let (start, end) = month_bounds(now)?;
    let millis = rng.gen_range(start.timestamp_millis()..end.timestamp_millis());
    DateTime::from_timestamp_millis(millis).ok_or(SeedError::CalendarOutOfRange)
}

/// Returns the first instant of the month containing `now` and the first
/// instant of the following month.
pub(crate) fn month_bounds(
    now: DateTime<Utc>,
) -> Result<(DateTime<Utc>, DateTime<Utc>), SeedError> {
    let first_day = now
        .date_naive()
        .with_day(1)
        .ok_or(SeedError::CalendarOutOfRange)?;
    let next_first_day = first_day
        .checked_add_months(Months::new(1))
        .ok_or(SeedError::CalendarOutOfRange)?;
    Ok((
        first_day.and_time(NaiveTime::MIN).and_utc(),
        next_first_day.and_time(NaiveTime::MIN).and_utc(),
    ))
}
