#[cfg(test)]
mod tests {
    use crate::models::ActivityRecord;
    use crate::services::analytics::{
        aggregate, bucket_by_hour, bucket_by_weekday, format_mean, hour_label, peak_label,
        AnalyticsError, NO_PEAK, WEEKDAYS,
    };

    fn create_test_record(
        date: &str,
        start: Option<&str>,
        effectiveness: i64,
        distractions: u32,
    ) -> ActivityRecord {
        ActivityRecord {
            date: date.to_string(),
            activity: Some("Deep work".to_string()),
            start_time: start.map(str::to_string),
            end_time: None,
            duration_minutes: None,
            effectiveness,
            distractions,
        }
    }

    #[test]
    fn test_hour_label() {
        assert_eq!(hour_label(0), "12 AM");
        assert_eq!(hour_label(5), "5 AM");
        assert_eq!(hour_label(9), "9 AM");
        assert_eq!(hour_label(12), "12 PM");
        assert_eq!(hour_label(13), "1 PM");
        assert_eq!(hour_label(23), "11 PM");
    }

    #[test]
    fn test_aggregate_empty() {
        let result = aggregate(&[]).unwrap();

        assert!(result.activities_by_date.is_empty());
        assert!(result.hourly_data.is_empty());
        assert_eq!(result.weekly_data.len(), 7);
        for (point, day) in result.weekly_data.iter().zip(WEEKDAYS) {
            assert_eq!(point.day, day);
            assert_eq!(point.effectiveness, 0);
        }
        assert_eq!(result.summary_stats.peak_time_label, NO_PEAK);
        assert_eq!(result.summary_stats.peak_day_label, NO_PEAK);
        assert_eq!(result.summary_stats.average_effectiveness, "0.0");
        assert_eq!(result.summary_stats.average_distractions, "0.0");
    }

    #[test]
    fn test_aggregate_same_hour_bucket() {
        let records = vec![
            create_test_record("2025-12-09", Some("09:00"), 9, 1),
            create_test_record("2025-12-09", Some("09:15"), 7, 3),
        ];
        let result = aggregate(&records).unwrap();

        assert_eq!(result.hourly_data.len(), 1);
        assert_eq!(result.hourly_data[0].hour, "9 AM");
        assert_eq!(result.hourly_data[0].effectiveness, 8);
        assert_eq!(result.summary_stats.average_effectiveness, "8.0");
        assert_eq!(result.summary_stats.average_distractions, "2.0");
        assert_eq!(result.summary_stats.peak_time_label, "9 AM");
        // 2025-12-09 is a Tuesday
        assert_eq!(result.weekly_data[1].day, "Tue");
        assert_eq!(result.weekly_data[1].effectiveness, 8);
        assert_eq!(result.summary_stats.peak_day_label, "Tue");
    }

    #[test]
    fn test_midnight_record_not_charted() {
        let records = vec![create_test_record("2025-12-09", Some("00:30"), 6, 2)];
        let result = aggregate(&records).unwrap();

        assert!(result.hourly_data.is_empty());
        assert_eq!(result.summary_stats.peak_time_label, NO_PEAK);
        assert_eq!(result.summary_stats.average_effectiveness, "6.0");
        assert_eq!(result.summary_stats.average_distractions, "2.0");
    }

    #[test]
    fn test_hourly_data_in_canonical_order() {
        let records = vec![
            create_test_record("2025-12-09", Some("23:10"), 4, 0),
            create_test_record("2025-12-09", Some("12:00"), 6, 0),
            create_test_record("2025-12-09", Some("06:59"), 8, 0),
            create_test_record("2025-12-09", Some("05:59"), 10, 0),
        ];
        let result = aggregate(&records).unwrap();

        let labels: Vec<&str> = result.hourly_data.iter().map(|p| p.hour.as_str()).collect();
        assert_eq!(labels, vec!["6 AM", "12 PM", "11 PM"]);
        assert_eq!(result.summary_stats.peak_time_label, "6 AM");
    }

    #[test]
    fn test_missing_start_time_skips_hourly_only() {
        let records = vec![
            create_test_record("2025-12-08", None, 4, 1),
            create_test_record("2025-12-08", Some("10:00"), 8, 1),
        ];
        let result = aggregate(&records).unwrap();

        assert_eq!(result.hourly_data.len(), 1);
        assert_eq!(result.hourly_data[0].effectiveness, 8);
        // Monday average includes the record without a start time
        assert_eq!(result.weekly_data[0].effectiveness, 6);
        assert_eq!(result.summary_stats.average_effectiveness, "6.0");
    }

    #[test]
    fn test_hourly_rounding() {
        let records = vec![
            create_test_record("2025-12-09", Some("14:00"), 7, 0),
            create_test_record("2025-12-09", Some("14:30"), 8, 0),
            create_test_record("2025-12-09", Some("15:00"), 7, 0),
            create_test_record("2025-12-09", Some("15:00"), 7, 0),
            create_test_record("2025-12-09", Some("15:00"), 8, 0),
        ];
        let result = aggregate(&records).unwrap();

        assert_eq!(result.hourly_data[0].hour, "2 PM");
        assert_eq!(result.hourly_data[0].effectiveness, 8); // 7.5 rounds up
        assert_eq!(result.hourly_data[1].hour, "3 PM");
        assert_eq!(result.hourly_data[1].effectiveness, 7); // 7.33
    }

    #[test]
    fn test_peak_ties_keep_first() {
        let records = vec![
            create_test_record("2025-12-08", Some("08:00"), 9, 0), // Mon
            create_test_record("2025-12-10", Some("16:00"), 9, 0), // Wed
        ];
        let result = aggregate(&records).unwrap();

        assert_eq!(result.summary_stats.peak_time_label, "8 AM");
        assert_eq!(result.summary_stats.peak_day_label, "Mon");
    }

    #[test]
    fn test_zero_effectiveness_day_is_no_peak() {
        let records = vec![create_test_record("2025-12-13", Some("10:00"), 0, 4)];
        let result = aggregate(&records).unwrap();

        assert_eq!(result.weekly_data[5].day, "Sat");
        assert_eq!(result.weekly_data[5].effectiveness, 0);
        assert_eq!(result.summary_stats.peak_day_label, NO_PEAK);
        // The hourly scan has no floor
        assert_eq!(result.summary_stats.peak_time_label, "10 AM");
    }

    #[test]
    fn test_activities_by_date_keeps_input_order() {
        let records = vec![
            create_test_record("2025-12-10", Some("09:00"), 1, 0),
            create_test_record("2025-12-09", Some("09:00"), 2, 0),
            create_test_record("2025-12-10", Some("08:00"), 3, 0),
        ];
        let result = aggregate(&records).unwrap();

        assert_eq!(result.activities_by_date.len(), 2);
        let dec10: Vec<i64> = result.activities_by_date["2025-12-10"]
            .iter()
            .map(|r| r.effectiveness)
            .collect();
        assert_eq!(dec10, vec![1, 3]);
        assert_eq!(result.activities_by_date["2025-12-09"].len(), 1);
    }

    #[test]
    fn test_out_of_range_effectiveness_averaged_as_is() {
        let records = vec![
            create_test_record("2025-12-09", Some("09:00"), 20, 0),
            create_test_record("2025-12-09", Some("09:00"), -4, 0),
        ];
        let result = aggregate(&records).unwrap();

        assert_eq!(result.hourly_data[0].effectiveness, 8);
        assert_eq!(result.summary_stats.average_effectiveness, "8.0");
    }

    #[test]
    fn test_extreme_effectiveness_does_not_overflow() {
        let records = vec![
            create_test_record("2025-12-09", Some("09:00"), i64::MAX, 0),
            create_test_record("2025-12-09", Some("09:30"), i64::MAX, 0),
        ];
        let result = aggregate(&records).unwrap();

        assert_eq!(result.hourly_data[0].effectiveness, i64::MAX);
        assert_eq!(result.weekly_data[1].effectiveness, i64::MAX);
        assert_eq!(result.summary_stats.peak_day_label, "Tue");
        assert!(result
            .summary_stats
            .average_effectiveness
            .starts_with("922337203685477"));

        let buckets = bucket_by_hour(&records).unwrap();
        assert_eq!(buckets[&9].sum, 2 * i128::from(i64::MAX));

        let low = vec![
            create_test_record("2025-12-09", Some("09:00"), i64::MIN, 0),
            create_test_record("2025-12-09", Some("09:00"), i64::MIN, 0),
        ];
        assert_eq!(aggregate(&low).unwrap().hourly_data[0].effectiveness, i64::MIN);
    }

    #[test]
    fn test_blank_start_time_is_absent() {
        let records = vec![
            create_test_record("2025-12-09", Some(""), 5, 0),
            create_test_record("2025-12-09", Some("  "), 3, 0),
        ];
        let result = aggregate(&records).unwrap();

        assert!(result.hourly_data.is_empty());
        assert_eq!(result.summary_stats.peak_time_label, NO_PEAK);
        assert_eq!(result.weekly_data[1].effectiveness, 4);
        assert_eq!(result.summary_stats.average_effectiveness, "4.0");
    }

    #[test]
    fn test_invalid_date_fails() {
        let records = vec![
            create_test_record("2025-12-09", Some("09:00"), 5, 0),
            create_test_record("not-a-date", Some("09:00"), 5, 0),
        ];
        let err = aggregate(&records).unwrap_err();

        assert_eq!(
            err,
            AnalyticsError::InvalidDate {
                index: 1,
                value: "not-a-date".to_string()
            }
        );
        assert!(err.to_string().contains("not-a-date"));
    }

    #[test]
    fn test_invalid_start_time_fails() {
        let records = vec![create_test_record("2025-12-09", Some("9 o'clock"), 5, 0)];
        let err = aggregate(&records).unwrap_err();

        assert!(matches!(err, AnalyticsError::InvalidStartTime { index: 0, .. }));
    }

    #[test]
    fn test_bucket_by_hour_counts() {
        let records = vec![
            create_test_record("2025-12-09", Some("01:00"), 3, 0),
            create_test_record("2025-12-09", Some("01:45"), 5, 0),
        ];
        let buckets = bucket_by_hour(&records).unwrap();

        assert_eq!(buckets.len(), 1);
        assert_eq!(buckets[&1].sum, 8);
        assert_eq!(buckets[&1].count, 2);
    }

    #[test]
    fn test_bucket_by_weekday_sunday_last() {
        let records = vec![create_test_record("2025-12-14", None, 7, 0)];
        let buckets = bucket_by_weekday(&records).unwrap();

        assert_eq!(buckets[6].count, 1);
        assert_eq!(buckets[6].sum, 7);
        assert!(buckets[..6].iter().all(|b| b.count == 0));
    }

    #[test]
    fn test_peak_label_floor() {
        assert_eq!(peak_label(vec![("a", 0), ("b", 0)], Some(0)), NO_PEAK);
        assert_eq!(peak_label(vec![("a", 0), ("b", 0)], None), "a");
        assert_eq!(peak_label(vec![("a", 1), ("b", 3), ("c", 3)], Some(0)), "b");
        assert_eq!(peak_label(Vec::<(&str, i64)>::new(), None), NO_PEAK);
    }

    #[test]
    fn test_format_mean() {
        assert_eq!(format_mean(0.0, 0), "0.0");
        assert_eq!(format_mean(16.0, 2), "8.0");
        assert_eq!(format_mean(10.0, 3), "3.3");
        assert_eq!(format_mean(20.0, 3), "6.7");
        assert_eq!(format_mean(-0.1, 3), "0.0");
    }

    #[test]
    fn test_aggregate_is_deterministic() {
        let records = vec![
            create_test_record("2025-12-09", Some("09:00"), 9, 1),
            create_test_record("2025-12-11", Some("18:20"), 4, 6),
            create_test_record("2025-12-07", Some("07:05"), 6, 0),
        ];
        let first = serde_json::to_string(&aggregate(&records).unwrap()).unwrap();
        let second = serde_json::to_string(&aggregate(&records).unwrap()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_result_serializes_camel_case() {
        let records = vec![create_test_record("2025-12-09", Some("09:00"), 9, 1)];
        let json = serde_json::to_value(aggregate(&records).unwrap()).unwrap();

        assert!(json["activitiesByDate"]["2025-12-09"].is_array());
        assert_eq!(json["hourlyData"][0]["hour"], "9 AM");
        assert_eq!(json["weeklyData"][1]["day"], "Tue");
        assert_eq!(json["summaryStats"]["averageEffectiveness"], "9.0");
        assert_eq!(json["summaryStats"]["peakTimeLabel"], "9 AM");
    }
}
