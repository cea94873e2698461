//! Daily reminder scheduling arithmetic.
//!
//! The core only computes when the next reminder should fire; actually
//! delivering a notification belongs to whatever platform layer sits on
//! top. Nothing here depends on the goal store.

use chrono::{DateTime, Duration, Utc};

/// Next occurrence of the wall time `hour:minute` strictly after `after`.
///
/// Returns `None` if `hour`/`minute` do not name a valid time of day.
pub fn next_occurrence(after: DateTime<Utc>, hour: u32, minute: u32) -> Option<DateTime<Utc>> {
    let today = after.date_naive().and_hms_opt(hour, minute, 0)?;
    let candidate = today.and_utc();
    if candidate > after {
        Some(candidate)
    } else {
        Some(candidate + Duration::days(1))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn later_today_when_time_not_yet_reached() {
        let after = Utc.with_ymd_and_hms(2025, 8, 1, 6, 30, 0).unwrap();
        let next = next_occurrence(after, 9, 0).unwrap();
        assert_eq!(next, Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn tomorrow_when_time_already_passed() {
        let after = Utc.with_ymd_and_hms(2025, 8, 1, 10, 0, 0).unwrap();
        let next = next_occurrence(after, 9, 0).unwrap();
        assert_eq!(next, Utc.with_ymd_and_hms(2025, 8, 2, 9, 0, 0).unwrap());
    }

    #[test]
    fn exact_boundary_rolls_to_tomorrow() {
        let after = Utc.with_ymd_and_hms(2025, 8, 1, 9, 0, 0).unwrap();
        let next = next_occurrence(after, 9, 0).unwrap();
        assert_eq!(next, Utc.with_ymd_and_hms(2025, 8, 2, 9, 0, 0).unwrap());
    }

    #[test]
    fn wraps_across_month_end() {
        let after = Utc.with_ymd_and_hms(2025, 8, 31, 23, 30, 0).unwrap();
        let next = next_occurrence(after, 9, 0).unwrap();
        assert_eq!(next, Utc.with_ymd_and_hms(2025, 9, 1, 9, 0, 0).unwrap());
    }

    #[test]
    fn rejects_invalid_time() {
        let after = Utc.with_ymd_and_hms(2025, 8, 1, 0, 0, 0).unwrap();
        assert!(next_occurrence(after, 24, 0).is_none());
        assert!(next_occurrence(after, 9, 60).is_none());
    }
}
