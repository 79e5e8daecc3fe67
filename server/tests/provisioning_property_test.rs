//! Property-based tests for the provisioning schedule and capacity rules.

#![allow(clippy::unwrap_used)] // Test code

use chrono::{DateTime, NaiveDate, NaiveTime, TimeDelta};
use formation_server::provisioning::{
    DEFAULT_CAPACITY, EVENT_DURATION_HOURS, EventDraft, event_schedule,
};
use proptest::prelude::*;

proptest! {
    /// For every valid wall-clock input the schedule either rejects the
    /// time (DST gap) or yields end = start + 4 hours, with both instants
    /// expressed in UTC.
    #[test]
    fn end_is_always_start_plus_four_hours(
        year in 2024i32..2031,
        month in 1u32..13,
        day in 1u32..29,
        hour in 0u32..24,
        minute in 0u32..60,
    ) {
        let date = NaiveDate::from_ymd_opt(year, month, day).unwrap();
        let time = NaiveTime::from_hms_opt(hour, minute, 0).unwrap();

        if let Ok((start, end)) = event_schedule(date, time) {
            prop_assert_eq!(&start.timezone, "Europe/Paris");

            let start = DateTime::parse_from_rfc3339(&start.utc).unwrap();
            let end = DateTime::parse_from_rfc3339(&end.utc).unwrap();

            prop_assert_eq!(end - start, TimeDelta::hours(EVENT_DURATION_HOURS));
            prop_assert_eq!(start.offset().local_minus_utc(), 0);
        }
    }

    /// Capacity falls back to 100 exactly when the draft carries no
    /// positive value.
    #[test]
    fn capacity_defaults_apply(capacity in proptest::option::of(0u32..1000)) {
        let draft = EventDraft {
            title: "Formation".to_string(),
            description_html: "<p>Session</p>".to_string(),
            date: NaiveDate::from_ymd_opt(2025, 9, 6).unwrap(),
            time: NaiveTime::from_hms_opt(8, 0, 0).unwrap(),
            capacity,
        };

        let expected = match capacity {
            Some(c) if c > 0 => c,
            _ => DEFAULT_CAPACITY,
        };

        prop_assert_eq!(draft.capacity_or_default(), expected);
    }
}
