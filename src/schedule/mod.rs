//! Recurring-obligation due-date engine: schedule variants, due-date queries,
//! and the presentational recurrence badge.

pub mod engine;
pub mod label;
pub mod policy;

pub use label::{month_label, ordinal, RecurrenceBadge};
pub use policy::{Obligation, Schedule};
