use chrono::{DateTime, Duration, NaiveDate, Utc};

/// The household runs on Philippine time, pinned as a fixed UTC+8 offset.
/// No timezone database lookup is involved.
pub const HOUSEHOLD_UTC_OFFSET_HOURS: i64 = 8;

/// Household-local calendar date for an injected UTC instant. Every due-date
/// query takes the result as its explicit reference date; nothing in this
/// crate reads the system clock.
pub fn household_today(now: DateTime<Utc>) -> NaiveDate {
    (now + Duration::hours(HOUSEHOLD_UTC_OFFSET_HOURS)).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn today_shifts_across_utc_midnight() {
        let late_utc = Utc.with_ymd_and_hms(2024, 6, 1, 17, 30, 0).unwrap();
        assert_eq!(
            household_today(late_utc),
            NaiveDate::from_ymd_opt(2024, 6, 2).unwrap()
        );

        let morning_utc = Utc.with_ymd_and_hms(2024, 6, 1, 3, 0, 0).unwrap();
        assert_eq!(
            household_today(morning_utc),
            NaiveDate::from_ymd_opt(2024, 6, 1).unwrap()
        );
    }
}
