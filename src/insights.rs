//! Numeric aggregation handed to the AI insight collaborator, and the seam
//! the collaborator implements. Prompting and text generation live outside
//! this crate.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::entry::{Asset, AssetType, Category, Entry, RecurrenceKind};
use crate::errors::EntryError;
use crate::report::percent_share;

/// Cached insight payloads older than this are regenerated.
pub const CACHE_MAX_AGE_HOURS: i64 = 24;

/// Tone of one generated insight snippet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum InsightKind {
    Positive,
    Warning,
    Tip,
    Info,
}

/// One categorized insight snippet as returned by the collaborator.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Insight {
    #[serde(rename = "type")]
    pub kind: InsightKind,
    pub title: String,
    pub body: String,
}

/// A name/amount line item fed into the insight prompt.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetLine {
    pub name: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence: Option<RecurrenceKind>,
}

/// Aggregated numbers the collaborator analyzes.
///
/// `leftover` here is income minus bills minus savings, and `net_worth`
/// excludes investment positions; the insight endpoint has always computed
/// both this way, differing from the dashboard's formulas.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct BudgetSnapshot {
    pub income: f64,
    pub bills: f64,
    pub savings: f64,
    pub leftover: f64,
    pub net_worth: f64,
    /// Savings as a percentage of income, one decimal, 0 without income.
    pub savings_rate: f64,
    /// Bills as a percentage of income, one decimal, 0 without income.
    pub bill_rate: f64,
    pub income_lines: Vec<BudgetLine>,
    pub bill_lines: Vec<BudgetLine>,
    pub savings_lines: Vec<BudgetLine>,
}

pub fn budget_snapshot(entries: &[Entry], assets: &[Asset]) -> BudgetSnapshot {
    let sum = |category: Category| -> f64 {
        entries
            .iter()
            .filter(|e| e.category == category)
            .map(|e| e.amount)
            .sum()
    };
    let lines = |category: Category, with_cadence: bool| -> Vec<BudgetLine> {
        entries
            .iter()
            .filter(|e| e.category == category)
            .map(|e| BudgetLine {
                name: e.name.clone(),
                amount: e.amount,
                cadence: with_cadence.then(|| e.recurrence_kind()),
            })
            .collect()
    };

    let income = sum(Category::Income);
    let bills = sum(Category::Bill);
    let savings = sum(Category::Saving);
    let total_assets: f64 = assets
        .iter()
        .filter(|a| a.kind == AssetType::Asset)
        .map(|a| a.value)
        .sum();
    let total_liabilities: f64 = assets
        .iter()
        .filter(|a| matches!(a.kind, AssetType::Liability | AssetType::Mortgage))
        .map(|a| a.value)
        .sum();

    BudgetSnapshot {
        income,
        bills,
        savings,
        leftover: income - bills - savings,
        net_worth: total_assets - total_liabilities,
        savings_rate: percent_share(savings, income).unwrap_or(0.0),
        bill_rate: percent_share(bills, income).unwrap_or(0.0),
        income_lines: lines(Category::Income, false),
        bill_lines: lines(Category::Bill, true),
        savings_lines: lines(Category::Saving, false),
    }
}

/// External collaborator turning a snapshot into exactly four categorized
/// snippets (positive, warning, tip, info).
pub trait InsightProvider {
    fn generate(&self, snapshot: &BudgetSnapshot) -> Result<Vec<Insight>, EntryError>;
}

/// A previously generated insight set with its creation time, as stored by
/// the caller's cache.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CachedInsights {
    pub insights: Vec<Insight>,
    pub created_at: DateTime<Utc>,
}

impl CachedInsights {
    /// Whether this cache entry may still be served instead of regenerating.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        now - self.created_at < Duration::hours(CACHE_MAX_AGE_HOURS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn entry(category: Category, name: &str, amount: f64) -> Entry {
        Entry::new(Uuid::new_v4(), category, name, amount)
    }

    #[test]
    fn snapshot_rates_and_leftover() {
        let entries = vec![
            entry(Category::Income, "Salary", 60_000.0),
            entry(Category::Bill, "Rent", 18_000.0),
            entry(Category::Saving, "Emergency fund", 9_000.0),
            entry(Category::Expense, "Groceries", 5_000.0),
        ];
        let snapshot = budget_snapshot(&entries, &[]);

        assert_eq!(snapshot.income, 60_000.0);
        // the insight endpoint ignores expenses in its leftover
        assert_eq!(snapshot.leftover, 33_000.0);
        assert_eq!(snapshot.bill_rate, 30.0);
        assert_eq!(snapshot.savings_rate, 15.0);
        assert_eq!(snapshot.income_lines.len(), 1);
        assert_eq!(snapshot.bill_lines[0].cadence, Some(RecurrenceKind::Monthly));
        assert_eq!(snapshot.savings_lines[0].cadence, None);
    }

    #[test]
    fn snapshot_rates_zero_without_income() {
        let entries = vec![entry(Category::Bill, "Rent", 18_000.0)];
        let snapshot = budget_snapshot(&entries, &[]);
        assert_eq!(snapshot.bill_rate, 0.0);
        assert_eq!(snapshot.savings_rate, 0.0);
    }

    #[test]
    fn snapshot_net_worth_skips_investments() {
        let user = Uuid::new_v4();
        let assets = vec![
            Asset::new(user, "House", AssetType::Asset, 2_000_000.0),
            Asset::new(user, "Index fund", AssetType::Investment, 500_000.0),
            Asset::new(user, "Home loan", AssetType::Mortgage, 1_200_000.0),
        ];
        let snapshot = budget_snapshot(&[], &assets);
        assert_eq!(snapshot.net_worth, 800_000.0);
    }

    #[test]
    fn cache_expires_after_a_day() {
        let created_at = Utc::now();
        let cached = CachedInsights {
            insights: vec![Insight {
                kind: InsightKind::Tip,
                title: "Automate savings".into(),
                body: "Schedule a transfer on payday.".into(),
            }],
            created_at,
        };
        assert!(cached.is_fresh(created_at + Duration::hours(23)));
        assert!(!cached.is_fresh(created_at + Duration::hours(25)));
    }

    #[test]
    fn insight_payload_shape_matches_backend() {
        let json = r#"{"insights":[{"type":"positive","title":"Healthy rate","body":"..."}],"created_at":"2024-06-01T00:00:00Z"}"#;
        let cached: CachedInsights = serde_json::from_str(json).unwrap();
        assert_eq!(cached.insights[0].kind, InsightKind::Positive);
    }
}
