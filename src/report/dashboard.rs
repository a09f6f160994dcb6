use chrono::{Datelike, NaiveDate};
use uuid::Uuid;

use crate::entry::{Asset, AssetType, Category, Entry};

/// Current-period totals per entry category.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CategoryTotals {
    pub income: f64,
    pub bills: f64,
    pub savings: f64,
    pub expenses: f64,
    pub leftover: f64,
}

pub fn category_totals(entries: &[Entry]) -> CategoryTotals {
    let mut totals = CategoryTotals::default();
    for entry in entries {
        match entry.category {
            Category::Income => totals.income += entry.amount,
            Category::Bill => totals.bills += entry.amount,
            Category::Saving => totals.savings += entry.amount,
            Category::Expense => totals.expenses += entry.amount,
        }
    }
    totals.leftover = totals.income - totals.bills - totals.savings - totals.expenses;
    totals
}

/// Net worth position built from asset rows. Mortgages count against net
/// worth alongside plain liabilities.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct NetWorthSummary {
    pub assets: f64,
    pub investments: f64,
    pub liabilities: f64,
    pub net_worth: f64,
}

pub fn net_worth(assets: &[Asset]) -> NetWorthSummary {
    let mut summary = NetWorthSummary::default();
    for asset in assets {
        match asset.kind {
            AssetType::Asset => summary.assets += asset.value,
            AssetType::Investment => summary.investments += asset.value,
            AssetType::Liability | AssetType::Mortgage => summary.liabilities += asset.value,
        }
    }
    summary.net_worth = summary.assets + summary.investments - summary.liabilities;
    summary
}

/// One row of the dashboard's "bills due this month" table.
#[derive(Debug, Clone, PartialEq)]
pub struct MonthBill {
    pub entry_id: Uuid,
    pub name: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub days_left: i64,
    pub paid: bool,
    pub last_paid: Option<NaiveDate>,
    pub variable_amount: bool,
}

/// All bills with an occurrence in the reference date's calendar month,
/// unpaid rows first ordered by days remaining, paid rows last. Entries
/// without a derivable schedule or without an occurrence this month are
/// skipped.
pub fn month_bills(entries: &[Entry], today: NaiveDate) -> Vec<MonthBill> {
    let mut rows: Vec<MonthBill> = entries
        .iter()
        .filter(|entry| entry.category == Category::Bill)
        .filter_map(|entry| {
            let obligation = entry.obligation()?;
            let due_date = obligation.due_date_in_period(today.year(), today.month())?;
            Some(MonthBill {
                entry_id: entry.id,
                name: entry.name.clone(),
                amount: entry.amount,
                due_date,
                days_left: (due_date - today).num_days(),
                paid: obligation.is_satisfied_for_current_cycle(today),
                last_paid: entry.last_paid_date,
                variable_amount: entry.is_variable_amount(),
            })
        })
        .collect();
    rows.sort_by_key(|row| (row.paid, row.days_left));
    tracing::debug!(rows = rows.len(), month = today.month(), "built month bill table");
    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entry::RecurrenceKind;
    use uuid::Uuid;

    fn bill(name: &str, amount: f64, due_day: u32) -> Entry {
        let mut entry = Entry::new(Uuid::new_v4(), Category::Bill, name, amount);
        entry.recurrence = Some(RecurrenceKind::Monthly);
        entry.due_day = Some(due_day);
        entry
    }

    #[test]
    fn totals_cover_all_categories() {
        let user = Uuid::new_v4();
        let entries = vec![
            Entry::new(user, Category::Income, "Salary", 50_000.0),
            Entry::new(user, Category::Bill, "Rent", 18_000.0),
            Entry::new(user, Category::Saving, "Emergency fund", 5_000.0),
            Entry::new(user, Category::Expense, "Groceries", 8_000.0),
        ];
        let totals = category_totals(&entries);
        assert_eq!(totals.income, 50_000.0);
        assert_eq!(totals.bills, 18_000.0);
        assert_eq!(totals.savings, 5_000.0);
        assert_eq!(totals.expenses, 8_000.0);
        assert_eq!(totals.leftover, 19_000.0);
    }

    #[test]
    fn net_worth_counts_mortgage_as_liability() {
        let user = Uuid::new_v4();
        let assets = vec![
            Asset::new(user, "House", AssetType::Asset, 3_000_000.0),
            Asset::new(user, "Index fund", AssetType::Investment, 250_000.0),
            Asset::new(user, "Car loan", AssetType::Liability, 400_000.0),
            Asset::new(user, "Home loan", AssetType::Mortgage, 1_500_000.0),
        ];
        let summary = net_worth(&assets);
        assert_eq!(summary.assets, 3_000_000.0);
        assert_eq!(summary.investments, 250_000.0);
        assert_eq!(summary.liabilities, 1_900_000.0);
        assert_eq!(summary.net_worth, 1_350_000.0);
    }

    #[test]
    fn month_bills_sorts_unpaid_first_by_days_left() {
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        let mut paid = bill("Internet", 1_800.0, 5);
        paid.last_paid_date = Some(NaiveDate::from_ymd_opt(2024, 6, 5).unwrap());
        let later = bill("Rent", 18_000.0, 28);
        let sooner = bill("Power", 3_200.0, 12);

        let rows = month_bills(&[paid, later, sooner], today);
        let names: Vec<&str> = rows.iter().map(|row| row.name.as_str()).collect();
        assert_eq!(names, vec!["Power", "Rent", "Internet"]);
        assert!(!rows[0].paid);
        assert_eq!(rows[0].days_left, 2);
        assert!(rows[2].paid);
        assert_eq!(rows[2].days_left, -5);
    }

    #[test]
    fn unscheduled_bills_are_skipped() {
        let user = Uuid::new_v4();
        let unscheduled = Entry::new(user, Category::Bill, "No due day", 100.0);
        let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
        assert!(month_bills(&[unscheduled], today).is_empty());
    }
}
