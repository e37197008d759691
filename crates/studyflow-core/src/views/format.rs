//! Display formatting for minutes and dates.

use chrono::{Duration, NaiveDate};

/// `45m`, `1h`, `1h 30m`
pub fn format_minutes(minutes: u32) -> String {
    if minutes < 60 {
        return format!("{}m", minutes);
    }
    let hours = minutes / 60;
    let rest = minutes % 60;
    if rest > 0 {
        format!("{}h {}m", hours, rest)
    } else {
        format!("{}h", hours)
    }
}

/// `Today`, `Tomorrow`, otherwise a short date like `Sat, Oct 17`
pub fn describe_date(date: NaiveDate, today: NaiveDate) -> String {
    if date == today {
        return "Today".to_string();
    }
    if date == today + Duration::days(1) {
        return "Tomorrow".to_string();
    }
    date.format("%a, %b %-d").to_string()
}

/// `Friday, October 16`
pub fn header_date(today: NaiveDate) -> String {
    today.format("%A, %B %-d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    #[test]
    fn test_format_minutes() {
        assert_eq!(format_minutes(0), "0m");
        assert_eq!(format_minutes(45), "45m");
        assert_eq!(format_minutes(60), "1h");
        assert_eq!(format_minutes(150), "2h 30m");
    }

    #[test]
    fn test_describe_date() {
        assert_eq!(describe_date(day(16), day(16)), "Today");
        assert_eq!(describe_date(day(17), day(16)), "Tomorrow");
        assert_eq!(describe_date(day(20), day(16)), "Tue, Oct 20");
        assert_eq!(describe_date(day(15), day(16)), "Thu, Oct 15");
    }

    #[test]
    fn test_header_date() {
        assert_eq!(header_date(day(16)), "Friday, October 16");
    }
}
