#![doc(test(attr(deny(warnings))))]

//! Ledgerly Core offers the household finance primitives behind the Ledgerly
//! tracker: entry and asset records, the recurring-obligation due-date engine,
//! and the dashboard/report aggregations built on top of it.

pub mod entry;
pub mod errors;
pub mod insights;
pub mod report;
pub mod schedule;
pub mod utils;

use std::sync::Once;

static INIT_TRACING: Once = Once::new();

/// Initializes global tracing and emits a startup info log.
pub fn init() {
    INIT_TRACING.call_once(|| {
        utils::init_tracing();
        tracing::info!("Ledgerly Core tracing initialized.");
    });
}

#[cfg(test)]
mod tests {
    #[test]
    fn init_does_not_panic() {
        super::init();
    }
}
