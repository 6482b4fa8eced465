#[cfg(test)]
mod tests {
    use crate::error::ReservationError;
    use crate::time::{
        end_time_for, parse_client_time, resolve_start, HourBucket, SerialEpoch, TimeSettings,
    };
    use chrono::{Duration, NaiveDate, Offset, TimeZone, Timelike};
    use chrono_tz::Tz;
    use reservify_config::ReservationsConfig;

    fn tokyo() -> TimeSettings {
        TimeSettings::new(Tz::Asia__Tokyo)
    }

    fn new_york() -> TimeSettings {
        TimeSettings::new(Tz::America__New_York)
    }

    #[test]
    fn test_naive_forms_are_local_wall_clock() {
        let settings = tokyo();
        let expected = Tz::Asia__Tokyo
            .with_ymd_and_hms(2024, 6, 1, 10, 0, 0)
            .unwrap();
        for input in [
            "2024-06-01T10:00",
            "2024-06-01T10:00:00",
            "2024-06-01 10:00",
            "2024/06/01 10:00:00",
            "  2024-06-01T10:00  ",
        ] {
            assert_eq!(parse_client_time(input, &settings).unwrap(), expected, "{}", input);
        }
    }

    #[test]
    fn test_offset_timestamps_are_converted_to_the_zone() {
        let at = parse_client_time("2024-06-01T01:00:00Z", &tokyo()).unwrap();
        assert_eq!(at.hour(), 10);
        assert_eq!(at.offset().fix().local_minus_utc(), 9 * 3600);
    }

    #[test]
    fn test_subseconds_are_truncated() {
        let at = parse_client_time("2024-06-01T10:00:59.987+09:00", &tokyo()).unwrap();
        assert_eq!(at.second(), 59);
        assert_eq!(at.nanosecond(), 0);
    }

    #[test]
    fn test_garbage_is_rejected() {
        for input in ["", "   ", "tomorrow", "2024-13-01T10:00", "10 o'clock"] {
            assert!(
                matches!(
                    parse_client_time(input, &tokyo()),
                    Err(ReservationError::InvalidTimeFormat(_))
                ),
                "{:?}",
                input
            );
        }
    }

    #[test]
    fn test_bare_time_is_combined_with_the_date() {
        let at = resolve_start("10:15", Some("2024-06-01"), &tokyo()).unwrap();
        assert_eq!(
            at,
            Tz::Asia__Tokyo
                .with_ymd_and_hms(2024, 6, 1, 10, 15, 0)
                .unwrap()
        );
        let slashed = resolve_start("10:15:30", Some("2024/06/01"), &tokyo()).unwrap();
        assert_eq!(slashed.second(), 30);
    }

    #[test]
    fn test_full_timestamp_ignores_the_date_field() {
        let at = resolve_start("2024-06-01T14:00", Some("1999-01-01"), &tokyo()).unwrap();
        assert_eq!(at.date_naive(), NaiveDate::from_ymd_opt(2024, 6, 1).unwrap());
    }

    #[test]
    fn test_bare_time_without_date_fails() {
        assert!(matches!(
            resolve_start("10:00", None, &tokyo()),
            Err(ReservationError::InvalidTimeFormat(_))
        ));
        assert!(matches!(
            resolve_start("10:00", Some("  "), &tokyo()),
            Err(ReservationError::InvalidTimeFormat(_))
        ));
        assert!(matches!(
            resolve_start("10:00", Some("June first"), &tokyo()),
            Err(ReservationError::InvalidTimeFormat(_))
        ));
    }

    #[test]
    fn test_time_in_dst_gap_is_rejected() {
        let err = resolve_start("02:30", Some("2024-03-10"), &new_york()).unwrap_err();
        assert!(matches!(err, ReservationError::InvalidTimeFormat(_)));
        assert!(matches!(
            parse_client_time("2024-03-10T02:30", &new_york()),
            Err(ReservationError::InvalidTimeFormat(_))
        ));
    }

    #[test]
    fn test_ambiguous_time_takes_the_earlier_instant() {
        let at = parse_client_time("2024-11-03T01:30", &new_york()).unwrap();
        assert_eq!(at.offset().fix().local_minus_utc(), -4 * 3600);
    }

    #[test]
    fn test_end_is_one_hour_later() {
        let start = resolve_start("14:00", Some("2024-06-01"), &tokyo()).unwrap();
        let end = end_time_for(&start);
        assert_eq!(end - start, Duration::hours(1));
        assert_eq!(end.hour(), 15);
    }

    #[test]
    fn test_hour_bucket_edges() {
        let zone = Tz::Asia__Tokyo;
        let at = |h, m, s| zone.with_ymd_and_hms(2024, 6, 1, h, m, s).unwrap();
        assert_eq!(HourBucket::of(&at(10, 0, 0), zone), HourBucket::of(&at(10, 45, 0), zone));
        assert_eq!(HourBucket::of(&at(10, 0, 0), zone), HourBucket::of(&at(10, 59, 59), zone));
        assert_ne!(HourBucket::of(&at(10, 59, 59), zone), HourBucket::of(&at(11, 0, 0), zone));
        assert_eq!(HourBucket::of(&at(9, 5, 0), zone).to_string(), "2024-06-01 09:00");
    }

    #[test]
    fn test_hour_bucket_uses_the_deployment_zone() {
        let utc = chrono::Utc.with_ymd_and_hms(2024, 6, 1, 1, 30, 0).unwrap();
        let bucket = HourBucket::of(&utc, Tz::Asia__Tokyo);
        assert_eq!(bucket.hour, 10);
    }

    #[test]
    fn test_settings_from_config() {
        let config = ReservationsConfig::default();
        let settings = TimeSettings::from_config(&config).unwrap();
        assert_eq!(settings.zone, Tz::Asia__Tokyo);
        assert_eq!(settings.serial_epoch, SerialEpoch::Standard);

        let us = ReservationsConfig {
            time_zone: "America/New_York".to_string(),
            sheet_locale: Some("en_US".to_string()),
            ..ReservationsConfig::default()
        };
        let settings = TimeSettings::from_config(&us).unwrap();
        assert_eq!(settings.serial_epoch, SerialEpoch::EnUs);
    }

    #[test]
    fn test_unknown_zone_is_a_config_error() {
        let config = ReservationsConfig {
            time_zone: "Mars/Olympus".to_string(),
            ..ReservationsConfig::default()
        };
        let err = TimeSettings::from_config(&config).unwrap_err();
        assert!(err.to_string().contains("Mars/Olympus"));
    }

    #[test]
    fn test_serial_epochs() {
        assert_eq!(
            SerialEpoch::Standard.date(),
            NaiveDate::from_ymd_opt(1899, 12, 30).unwrap()
        );
        assert_eq!(
            SerialEpoch::EnUs.date(),
            NaiveDate::from_ymd_opt(1899, 12, 31).unwrap()
        );
        assert_eq!(SerialEpoch::for_locale(Some("ja_JP")), SerialEpoch::Standard);
        assert_eq!(SerialEpoch::for_locale(None), SerialEpoch::Standard);
    }
}
