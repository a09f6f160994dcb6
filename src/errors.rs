use thiserror::Error;

/// Error type that captures entry configuration and serialization failures.
///
/// Engine queries never produce these: a degraded recurrence configuration
/// yields `None` or an empty sequence instead. Errors surface only from the
/// validated schedule constructors used by entry-creation flows and from
/// (de)serializing backend rows.
#[derive(Debug, Error)]
pub enum EntryError {
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Due day {0} is outside 1..=31")]
    DueDayOutOfRange(u32),
    #[error("Due month {0} is outside 1..=12")]
    DueMonthOutOfRange(u32),
    #[error("Quarterly schedule requires at least one due month")]
    EmptyDueMonths,
    #[error("Insight provider failed: {0}")]
    InsightProvider(String),
}
