use chrono::{Datelike, NaiveDate};

use super::policy::Schedule;

pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Short recurrence badge shown next to an entry in list views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecurrenceBadge {
    pub label: String,
    pub overdue: bool,
}

/// Ordinal day suffix: 1st, 2nd, 3rd, 4th, ... with 11th-13th as special cases.
pub fn ordinal(day: u32) -> String {
    let suffix = match day % 100 {
        11..=13 => "th",
        _ => match day % 10 {
            1 => "st",
            2 => "nd",
            3 => "rd",
            _ => "th",
        },
    };
    format!("{day}{suffix}")
}

/// "Mon YYYY" grouping label for report sections.
pub fn month_label(date: NaiveDate) -> String {
    format!("{} {}", MONTH_NAMES[date.month0() as usize], date.year())
}

impl Schedule {
    /// Derives the list-display badge for this schedule. One-time entries are
    /// flagged overdue once their date is behind the reference date; recurring
    /// entries are never overdue here since their next cycle is always ahead.
    pub fn badge(&self, reference: NaiveDate) -> RecurrenceBadge {
        match self {
            Schedule::Once { due_date } => {
                let overdue = *due_date < reference;
                let when = format!(
                    "{} {} {}",
                    MONTH_NAMES[due_date.month0() as usize],
                    ordinal(due_date.day()),
                    due_date.year()
                );
                let label = if overdue {
                    format!("Overdue · {when}")
                } else {
                    format!("Due {when}")
                };
                RecurrenceBadge { label, overdue }
            }
            Schedule::Monthly { due_day } => RecurrenceBadge {
                label: format!("Due {}", ordinal(*due_day)),
                overdue: false,
            },
            Schedule::Quarterly { due_day, .. } => RecurrenceBadge {
                label: format!("Quarterly · {}", ordinal(*due_day)),
                overdue: false,
            },
            Schedule::Yearly { due_day, due_month } => {
                // loose rows can carry a month outside 1..=12; degrade the
                // label instead of panicking
                let month_name = due_month
                    .checked_sub(1)
                    .and_then(|index| MONTH_NAMES.get(index as usize))
                    .unwrap_or(&"?");
                RecurrenceBadge {
                    label: format!("Yearly · {} {}", month_name, ordinal(*due_day)),
                    overdue: false,
                }
            }
        }
    }
}
