use chrono::{Duration, NaiveDate};
use uuid::Uuid;

use crate::entry::{Category, Entry};
use crate::schedule::month_label;

/// Horizon of the standard look-ahead report.
pub const LOOKAHEAD_DAYS: i64 = 90;

/// One projected bill occurrence inside the look-ahead window.
#[derive(Debug, Clone, PartialEq)]
pub struct UpcomingBill {
    pub entry_id: Uuid,
    pub name: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub paid: bool,
}

/// Occurrences of one calendar month, labelled "Mon YYYY".
#[derive(Debug, Clone, PartialEq)]
pub struct MonthGroup {
    pub label: String,
    pub bills: Vec<UpcomingBill>,
}

/// Expands every bill's occurrences over `[today, today + horizon_days]` and
/// groups them by calendar month in chronological order.
///
/// Only the occurrence matching the bill's next due date can be marked paid,
/// and only when the current cycle is satisfied; later occurrences in the
/// window are always unpaid.
pub fn upcoming_bills(entries: &[Entry], today: NaiveDate, horizon_days: i64) -> Vec<MonthGroup> {
    let end = today + Duration::days(horizon_days);
    let mut upcoming = Vec::new();

    for entry in entries.iter().filter(|e| e.category == Category::Bill) {
        let Some(obligation) = entry.obligation() else {
            continue;
        };
        let next_due = obligation.next_due_date(today);
        let cycle_paid = obligation.is_satisfied_for_current_cycle(today);
        for due_date in obligation.occurrences_in_range(today, end) {
            let paid = next_due == Some(due_date) && cycle_paid;
            upcoming.push(UpcomingBill {
                entry_id: entry.id,
                name: entry.name.clone(),
                amount: entry.amount,
                due_date,
                paid,
            });
        }
    }

    upcoming.sort_by_key(|bill| bill.due_date);

    let mut groups: Vec<MonthGroup> = Vec::new();
    for bill in upcoming {
        let label = month_label(bill.due_date);
        match groups.last_mut() {
            Some(group) if group.label == label => group.bills.push(bill),
            _ => groups.push(MonthGroup {
                label,
                bills: vec![bill],
            }),
        }
    }
    tracing::debug!(groups = groups.len(), horizon_days, "built upcoming bill report");
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::RecurrenceKind;

    fn monthly_bill(name: &str, due_day: u32) -> Entry {
        let mut entry = Entry::new(Uuid::new_v4(), Category::Bill, name, 1_000.0);
        entry.recurrence = Some(RecurrenceKind::Monthly);
        entry.due_day = Some(due_day);
        entry
    }

    #[test]
    fn groups_follow_calendar_months() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 20).unwrap();
        let groups = upcoming_bills(&[monthly_bill("Rent", 25)], today, LOOKAHEAD_DAYS);

        // window ends Sep 18, so the Sep 25 occurrence stays out
        let labels: Vec<&str> = groups.iter().map(|g| g.label.as_str()).collect();
        assert_eq!(labels, vec!["Jun 2024", "Jul 2024", "Aug 2024"]);
        assert!(groups.iter().all(|g| g.bills.len() == 1));
    }

    #[test]
    fn only_next_due_occurrence_can_be_paid() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
        let mut bill = monthly_bill("Internet", 10);
        bill.last_paid_date = Some(NaiveDate::from_ymd_opt(2024, 6, 10).unwrap());

        let groups = upcoming_bills(&[bill], today, LOOKAHEAD_DAYS);
        let flat: Vec<&UpcomingBill> = groups.iter().flat_map(|g| g.bills.iter()).collect();
        assert_eq!(flat.len(), 3);
        assert!(flat[0].paid, "June 10 cycle was already paid");
        assert!(!flat[1].paid);
        assert!(!flat[2].paid);
    }
}
