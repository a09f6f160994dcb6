use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::EntryError;
use crate::schedule::{Obligation, Schedule};

/// Budget category of an entry.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Income,
    Bill,
    Saving,
    Expense,
}

/// Raw recurrence column of an entry row. Absent means monthly; every
/// consumer treats a missing recurrence that way.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum RecurrenceKind {
    Monthly,
    Quarterly,
    Yearly,
    Once,
}

/// A household finance entry as persisted by the backend: income, bill,
/// saving, or expense. The recurrence columns are loose by design (the form
/// layer validates them); [`Entry::obligation`] derives the typed schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Entry {
    pub id: Uuid,
    pub user_id: Uuid,
    pub category: Category,
    pub name: String,
    pub amount: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bank_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub recurrence: Option<RecurrenceKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_day: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_month: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_months: Option<Vec<u32>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_paid_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable_amount: Option<bool>,
    pub created_at: DateTime<Utc>,
}

impl Entry {
    pub fn new(user_id: Uuid, category: Category, name: impl Into<String>, amount: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            category,
            name: name.into(),
            amount,
            bank_name: None,
            recurrence: None,
            due_day: None,
            due_month: None,
            due_months: None,
            due_date: None,
            last_paid_date: None,
            variable_amount: None,
            created_at: Utc::now(),
        }
    }

    pub fn recurrence_kind(&self) -> RecurrenceKind {
        self.recurrence.unwrap_or(RecurrenceKind::Monthly)
    }

    pub fn is_variable_amount(&self) -> bool {
        self.variable_amount.unwrap_or(false)
    }

    /// Derives the typed schedule from the raw recurrence columns. Lenient:
    /// a row missing the fields its policy requires is simply unscheduled.
    pub fn schedule(&self) -> Option<Schedule> {
        match self.recurrence_kind() {
            RecurrenceKind::Once => self.due_date.map(Schedule::once),
            RecurrenceKind::Monthly => self.due_day.map(|due_day| Schedule::Monthly { due_day }),
            RecurrenceKind::Quarterly => {
                let due_day = self.due_day?;
                let due_months = self.due_months.clone()?;
                if due_months.is_empty() {
                    return None;
                }
                Some(Schedule::Quarterly {
                    due_day,
                    due_months,
                })
            }
            RecurrenceKind::Yearly => Some(Schedule::Yearly {
                due_day: self.due_day?,
                due_month: self.due_month?,
            }),
        }
    }

    /// The schedulable view of this entry, or `None` when it is unscheduled.
    pub fn obligation(&self) -> Option<Obligation> {
        let schedule = self.schedule()?;
        Some(Obligation {
            schedule,
            last_paid_date: self.last_paid_date,
        })
    }

    pub fn from_json(data: &str) -> Result<Entry, EntryError> {
        Ok(serde_json::from_str(data)?)
    }

    pub fn to_json(&self) -> Result<String, EntryError> {
        Ok(serde_json::to_string(self)?)
    }
}

/// Kind of a tracked asset row.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum AssetType {
    Asset,
    Liability,
    Mortgage,
    Investment,
}

/// An asset or liability position contributing to net worth.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Asset {
    pub id: Uuid,
    pub user_id: Uuid,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: AssetType,
    pub value: f64,
    #[serde(default)]
    pub conjugal: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Asset {
    pub fn new(user_id: Uuid, name: impl Into<String>, kind: AssetType, value: f64) -> Self {
        Self {
            id: Uuid::new_v4(),
            user_id,
            name: name.into(),
            kind,
            value,
            conjugal: false,
            notes: None,
            created_at: Utc::now(),
        }
    }
}
