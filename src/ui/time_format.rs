use chrono::{DateTime, Duration, Local, TimeZone};
use chrono_humanize::HumanTime;

/// Format a post or comment timestamp.
/// - relative mode: humanized ("2 hours ago", "a day ago")
/// - absolute mode: "9:39 PM" today, "Yesterday, 9:39 PM", else "6/16/25, 8:30 AM"
pub fn format_timestamp(ts: i64, now: DateTime<Local>, relative: bool) -> String {
    let dt = Local.timestamp_opt(ts, 0).single();
    if let Some(dt) = dt {
        if relative {
            HumanTime::from(dt).to_string()
        } else if dt.date_naive() == now.date_naive() {
            dt.format("%-I:%M %p").to_string()
        } else if dt.date_naive() == (now - Duration::days(1)).date_naive() {
            format!("Yesterday, {}", dt.format("%-I:%M %p"))
        } else {
            dt.format("%-m/%-d/%y, %-I:%M %p").to_string()
        }
    } else {
        "?".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_day_absolute_uses_clock_time_only(){
        let now = Local.with_ymd_and_hms(2025, 6, 16, 21, 0, 0).unwrap();
        let ts = Local.with_ymd_and_hms(2025, 6, 16, 9, 39, 0).unwrap().timestamp();
        assert_eq!(format_timestamp(ts, now, false), "9:39 AM");
    }

    #[test]
    fn yesterday_is_labelled() {
        let now = Local.with_ymd_and_hms(2025, 6, 16, 8, 0, 0).unwrap();
        let ts = Local.with_ymd_and_hms(2025, 6, 15, 21, 39, 0).unwrap().timestamp();
        assert_eq!(format_timestamp(ts, now, false), "Yesterday, 9:39 PM");
    }

    #[test]
    fn invalid_timestamps_degrade_to_a_placeholder() {
        let now = Local::now();
        assert_eq!(format_timestamp(i64::MAX, now, true), "?");
    }
}
