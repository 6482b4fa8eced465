#[cfg(test)]
mod tests {
    use crate::time::{end_time_for, resolve_start, HourBucket, TimeSettings};
    use chrono::{Duration, Timelike};
    use chrono_tz::Tz;
    use proptest::prelude::*;

    fn settings() -> TimeSettings {
        TimeSettings::new(Tz::Asia__Tokyo)
    }

    proptest! {
        #[test]
        fn end_is_always_one_hour_after_start(
            day in 1u32..=28,
            month in 1u32..=12,
            hour in 0u32..24,
            minute in 0u32..60,
        ) {
            let date = format!("2024-{:02}-{:02}", month, day);
            let time = format!("{:02}:{:02}", hour, minute);
            let start = resolve_start(&time, Some(&date), &settings()).unwrap();
            let end = end_time_for(&start);
            prop_assert_eq!(end - start, Duration::seconds(3600));
            prop_assert_eq!(start.nanosecond(), 0);
        }

        #[test]
        fn minutes_of_one_hour_share_a_bucket(
            hour in 0u32..24,
            first in 0u32..60,
            second in 0u32..60,
        ) {
            let zone = Tz::Asia__Tokyo;
            let a = resolve_start(&format!("{:02}:{:02}", hour, first), Some("2024-06-01"), &settings()).unwrap();
            let b = resolve_start(&format!("{:02}:{:02}", hour, second), Some("2024-06-01"), &settings()).unwrap();
            prop_assert_eq!(HourBucket::of(&a, zone), HourBucket::of(&b, zone));
            prop_assert_ne!(HourBucket::of(&a, zone), HourBucket::of(&(a + Duration::hours(1)), zone));
        }

        #[test]
        fn full_and_split_forms_agree(
            hour in 0u32..24,
            minute in 0u32..60,
        ) {
            let split = resolve_start(&format!("{:02}:{:02}", hour, minute), Some("2024-06-01"), &settings()).unwrap();
            let full = resolve_start(&format!("2024-06-01T{:02}:{:02}", hour, minute), None, &settings()).unwrap();
            prop_assert_eq!(split, full);
        }
    }
}
