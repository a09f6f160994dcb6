use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::entry::{Category, Entry};

/// A bill line inside a reminder digest.
#[derive(Debug, Clone, PartialEq)]
pub struct DueBill {
    pub name: String,
    pub amount: f64,
}

/// Bills falling due on a given day for one user. The delivery channel
/// (email job) consumes these; building them is pure.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderDigest {
    pub user_id: Uuid,
    pub bills: Vec<DueBill>,
}

/// Collects every bill with an occurrence exactly on `today` whose current
/// cycle is still unpaid, grouped per user in encounter order.
pub fn reminder_digests(entries: &[Entry], today: NaiveDate) -> Vec<ReminderDigest> {
    let mut digests: Vec<ReminderDigest> = Vec::new();

    for entry in entries.iter().filter(|e| e.category == Category::Bill) {
        let Some(obligation) = entry.obligation() else {
            continue;
        };
        if obligation.due_date_in_period(today.year(), today.month()) != Some(today) {
            continue;
        }
        if obligation.is_satisfied_for_current_cycle(today) {
            continue;
        }
        let line = DueBill {
            name: entry.name.clone(),
            amount: entry.amount,
        };
        match digests.iter_mut().find(|d| d.user_id == entry.user_id) {
            Some(digest) => digest.bills.push(line),
            None => digests.push(ReminderDigest {
                user_id: entry.user_id,
                bills: vec![line],
            }),
        }
    }

    tracing::debug!(users = digests.len(), %today, "collected bill reminders");
    digests
}
