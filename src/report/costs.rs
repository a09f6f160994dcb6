use uuid::Uuid;

use super::percent_share;
use crate::entry::{Category, Entry, RecurrenceKind};

/// One bill normalized to monthly and annual cost. One-time bills carry no
/// normalized figures.
#[derive(Debug, Clone, PartialEq)]
pub struct BillCost {
    pub entry_id: Uuid,
    pub name: String,
    pub cadence: RecurrenceKind,
    pub amount: f64,
    pub monthly_equivalent: Option<f64>,
    pub annual_cost: Option<f64>,
}

/// Cost-analyzer report over all bill entries.
#[derive(Debug, Clone, PartialEq)]
pub struct BillCostReport {
    pub rows: Vec<BillCost>,
    pub total_monthly: f64,
    pub total_annual: f64,
    /// Bills as a percentage of total income, one decimal; `None` when there
    /// is no recorded income.
    pub share_of_income: Option<f64>,
}

pub fn bill_costs(entries: &[Entry]) -> BillCostReport {
    let income: f64 = entries
        .iter()
        .filter(|e| e.category == Category::Income)
        .map(|e| e.amount)
        .sum();

    let rows: Vec<BillCost> = entries
        .iter()
        .filter(|e| e.category == Category::Bill)
        .map(|entry| {
            let cadence = entry.recurrence_kind();
            let (monthly_equivalent, annual_cost) = match cadence {
                RecurrenceKind::Monthly => (Some(entry.amount), Some(entry.amount * 12.0)),
                RecurrenceKind::Quarterly => (Some(entry.amount / 3.0), Some(entry.amount * 4.0)),
                RecurrenceKind::Yearly => (Some(entry.amount / 12.0), Some(entry.amount)),
                RecurrenceKind::Once => (None, None),
            };
            BillCost {
                entry_id: entry.id,
                name: entry.name.clone(),
                cadence,
                amount: entry.amount,
                monthly_equivalent,
                annual_cost,
            }
        })
        .collect();

    let total_monthly = rows.iter().filter_map(|r| r.monthly_equivalent).sum();
    let total_annual = rows.iter().filter_map(|r| r.annual_cost).sum();
    let share_of_income = percent_share(total_monthly, income);

    BillCostReport {
        rows,
        total_monthly,
        total_annual,
        share_of_income,
    }
}
