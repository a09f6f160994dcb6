use chrono::{Datelike, Duration, NaiveDate};

use super::policy::{Obligation, Schedule};

/// Resolves `(year, month, day)` to a concrete date using native
/// date-construction overflow semantics: a `month` outside 1..=12 carries into
/// the adjacent year, and a `day` past the end of the month rolls over into
/// the following month (day 31 of April resolves to May 1).
///
/// A bill configured for the 31st therefore lands on the 1st of the next
/// month in short months. Known quirk, kept deliberately.
pub fn resolve_due_date(year: i32, month: i32, day: u32) -> Option<NaiveDate> {
    let carry = (month - 1).div_euclid(12);
    let month = (month - 1).rem_euclid(12) as u32 + 1;
    let first = NaiveDate::from_ymd_opt(year + carry, month, 1)?;
    first.checked_add_signed(Duration::days(i64::from(day) - 1))
}

fn sorted_months(due_months: &[u32]) -> Vec<u32> {
    let mut months = due_months.to_vec();
    months.sort_unstable();
    months.dedup();
    months
}

impl Schedule {
    /// Returns the single occurrence falling inside the given calendar month,
    /// or `None` when this schedule has no occurrence that month.
    pub fn due_date_in_period(&self, year: i32, month: u32) -> Option<NaiveDate> {
        match self {
            Schedule::Once { due_date } => {
                (due_date.year() == year && due_date.month() == month).then_some(*due_date)
            }
            Schedule::Monthly { due_day } => resolve_due_date(year, month as i32, *due_day),
            Schedule::Quarterly {
                due_day,
                due_months,
            } => {
                if !due_months.contains(&month) {
                    return None;
                }
                resolve_due_date(year, month as i32, *due_day)
            }
            Schedule::Yearly { due_day, due_month } => {
                if *due_month != month {
                    return None;
                }
                resolve_due_date(year, month as i32, *due_day)
            }
        }
    }

    /// Returns the earliest occurrence on or after `reference`.
    ///
    /// One-time schedules return their stored date unconditionally, even when
    /// it lies in the past; the caller decides how to treat an overdue
    /// one-time obligation.
    pub fn next_due_date(&self, reference: NaiveDate) -> Option<NaiveDate> {
        let year = reference.year();
        let month = reference.month() as i32;
        match self {
            Schedule::Once { due_date } => Some(*due_date),
            Schedule::Monthly { due_day } => {
                let this_month = resolve_due_date(year, month, *due_day)?;
                if this_month >= reference {
                    Some(this_month)
                } else {
                    resolve_due_date(year, month + 1, *due_day)
                }
            }
            Schedule::Quarterly {
                due_day,
                due_months,
            } => {
                let months = sorted_months(due_months);
                let first = *months.first()?;
                for &candidate_month in &months {
                    let candidate = resolve_due_date(year, candidate_month as i32, *due_day)?;
                    if candidate >= reference {
                        return Some(candidate);
                    }
                }
                resolve_due_date(year + 1, first as i32, *due_day)
            }
            Schedule::Yearly { due_day, due_month } => {
                let this_year = resolve_due_date(year, *due_month as i32, *due_day)?;
                if this_year >= reference {
                    Some(this_year)
                } else {
                    resolve_due_date(year + 1, *due_month as i32, *due_day)
                }
            }
        }
    }

    /// Enumerates every occurrence within `[start, end]`, both ends inclusive,
    /// ascending. A degraded configuration yields an empty vector.
    pub fn occurrences_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        let mut dates = Vec::new();
        if end < start {
            return dates;
        }
        match self {
            Schedule::Once { due_date } => {
                if *due_date >= start && *due_date <= end {
                    dates.push(*due_date);
                }
            }
            Schedule::Monthly { due_day } => {
                let mut year = start.year();
                let mut month = start.month() as i32;
                loop {
                    let Some(candidate) = resolve_due_date(year, month, *due_day) else {
                        break;
                    };
                    if candidate > end {
                        break;
                    }
                    if candidate >= start {
                        dates.push(candidate);
                    }
                    month += 1;
                    if month > 12 {
                        month = 1;
                        year += 1;
                    }
                }
            }
            Schedule::Quarterly {
                due_day,
                due_months,
            } => {
                // Rollover can push a December occurrence into the next year,
                // so bracket the scan one year out on both sides and sort.
                let months = sorted_months(due_months);
                for year in (start.year() - 1)..=(end.year() + 1) {
                    for &candidate_month in &months {
                        let Some(candidate) =
                            resolve_due_date(year, candidate_month as i32, *due_day)
                        else {
                            continue;
                        };
                        if candidate < start || candidate > end {
                            continue;
                        }
                        dates.push(candidate);
                    }
                }
                dates.sort_unstable();
            }
            Schedule::Yearly { due_day, due_month } => {
                for year in start.year()..=(end.year() + 1) {
                    let Some(candidate) = resolve_due_date(year, *due_month as i32, *due_day)
                    else {
                        continue;
                    };
                    if candidate > end {
                        break;
                    }
                    if candidate >= start {
                        dates.push(candidate);
                    }
                }
            }
        }
        dates
    }
}

impl Obligation {
    /// See [`Schedule::due_date_in_period`].
    pub fn due_date_in_period(&self, year: i32, month: u32) -> Option<NaiveDate> {
        self.schedule.due_date_in_period(year, month)
    }

    /// See [`Schedule::next_due_date`].
    pub fn next_due_date(&self, reference: NaiveDate) -> Option<NaiveDate> {
        self.schedule.next_due_date(reference)
    }

    /// See [`Schedule::occurrences_in_range`].
    pub fn occurrences_in_range(&self, start: NaiveDate, end: NaiveDate) -> Vec<NaiveDate> {
        self.schedule.occurrences_in_range(start, end)
    }

    /// Whether the current due cycle has already been paid.
    ///
    /// A one-time obligation is satisfied by any recorded payment. For
    /// recurring obligations the cycle is satisfied when the next occurrence
    /// after the payment is still strictly in the future. When that next
    /// occurrence cannot be determined the obligation is treated as satisfied
    /// rather than nagging over incomplete data.
    pub fn is_satisfied_for_current_cycle(&self, reference: NaiveDate) -> bool {
        let Some(last_paid) = self.last_paid_date else {
            return false;
        };
        if let Schedule::Once { .. } = self.schedule {
            return true;
        }
        match self.schedule.next_due_date(last_paid + Duration::days(1)) {
            Some(next_due) => next_due > reference,
            None => true,
        }
    }
}
