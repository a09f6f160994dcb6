//! Aggregations consumed by the dashboard and report views. All functions are
//! pure over entry/asset slices and an explicit reference date.

pub mod costs;
pub mod dashboard;
pub mod reminders;
pub mod upcoming;

pub use costs::{bill_costs, BillCost, BillCostReport};
pub use dashboard::{
    category_totals, month_bills, net_worth, CategoryTotals, MonthBill, NetWorthSummary,
};
pub use reminders::{reminder_digests, DueBill, ReminderDigest};
pub use upcoming::{upcoming_bills, MonthGroup, UpcomingBill, LOOKAHEAD_DAYS};

/// Percentage share of `part` in `whole`, rounded to one decimal. `None` when
/// `whole` is not positive.
pub(crate) fn percent_share(part: f64, whole: f64) -> Option<f64> {
    if whole > 0.0 {
        Some((part / whole * 1000.0).round() / 10.0)
    } else {
        None
    }
}
