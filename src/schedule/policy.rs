use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::EntryError;

/// Recurrence configuration of a financial obligation, one variant per policy
/// with the fields that policy requires.
///
/// `due_day` may name a day the target month does not have (31 in April); the
/// engine resolves such dates by rolling over into the next month, see
/// [`engine::resolve_due_date`](super::engine::resolve_due_date).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase", tag = "recurrence")]
pub enum Schedule {
    /// A single occurrence on a fixed calendar date.
    Once { due_date: NaiveDate },
    /// Recurs every month on `due_day`.
    Monthly { due_day: u32 },
    /// Recurs on `due_day` in each of the listed calendar months.
    Quarterly { due_day: u32, due_months: Vec<u32> },
    /// Recurs on `due_day` of `due_month` every year.
    Yearly { due_day: u32, due_month: u32 },
}

impl Schedule {
    pub fn once(due_date: NaiveDate) -> Schedule {
        Schedule::Once { due_date }
    }

    pub fn monthly(due_day: u32) -> Result<Schedule, EntryError> {
        check_due_day(due_day)?;
        Ok(Schedule::Monthly { due_day })
    }

    /// Builds a quarterly schedule. `due_months` is accepted in any order and
    /// stored sorted ascending without duplicates.
    pub fn quarterly(due_day: u32, due_months: Vec<u32>) -> Result<Schedule, EntryError> {
        check_due_day(due_day)?;
        if due_months.is_empty() {
            return Err(EntryError::EmptyDueMonths);
        }
        let mut months = due_months;
        for &month in &months {
            check_due_month(month)?;
        }
        months.sort_unstable();
        months.dedup();
        Ok(Schedule::Quarterly {
            due_day,
            due_months: months,
        })
    }

    pub fn yearly(due_day: u32, due_month: u32) -> Result<Schedule, EntryError> {
        check_due_day(due_day)?;
        check_due_month(due_month)?;
        Ok(Schedule::Yearly { due_day, due_month })
    }
}

fn check_due_day(due_day: u32) -> Result<(), EntryError> {
    if !(1..=31).contains(&due_day) {
        return Err(EntryError::DueDayOutOfRange(due_day));
    }
    Ok(())
}

fn check_due_month(due_month: u32) -> Result<(), EntryError> {
    if !(1..=12).contains(&due_month) {
        return Err(EntryError::DueMonthOutOfRange(due_month));
    }
    Ok(())
}

/// A schedulable obligation: a recurrence configuration plus the date of the
/// most recent recorded payment, if any.
///
/// Read-only input to the engine. `last_paid_date` is written by the payment
/// recorder upstream, never by this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Obligation {
    #[serde(flatten)]
    pub schedule: Schedule,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_paid_date: Option<NaiveDate>,
}

impl Obligation {
    pub fn new(schedule: Schedule) -> Obligation {
        Obligation {
            schedule,
            last_paid_date: None,
        }
    }

    pub fn with_last_paid(mut self, last_paid_date: NaiveDate) -> Obligation {
        self.last_paid_date = Some(last_paid_date);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarterly_sorts_and_dedups_due_months() {
        let schedule = Schedule::quarterly(5, vec![10, 1, 7, 4, 7]).unwrap();
        match schedule {
            Schedule::Quarterly { due_months, .. } => {
                assert_eq!(due_months, vec![1, 4, 7, 10]);
            }
            other => panic!("unexpected schedule: {other:?}"),
        }
    }

    #[test]
    fn constructors_reject_out_of_range_fields() {
        assert!(matches!(
            Schedule::monthly(0),
            Err(EntryError::DueDayOutOfRange(0))
        ));
        assert!(matches!(
            Schedule::monthly(32),
            Err(EntryError::DueDayOutOfRange(32))
        ));
        assert!(matches!(
            Schedule::yearly(10, 13),
            Err(EntryError::DueMonthOutOfRange(13))
        ));
        assert!(matches!(
            Schedule::quarterly(10, vec![]),
            Err(EntryError::EmptyDueMonths)
        ));
    }
}
