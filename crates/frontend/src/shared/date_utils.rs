/// Utilities for date and time formatting
///
/// Backend timestamps are UTC; the console shows them in Vietnam time (UTC+7).
use chrono::{DateTime, FixedOffset, NaiveDate, Utc};

const VN_OFFSET_SECS: i32 = 7 * 3600;

fn to_local(dt: &DateTime<Utc>) -> DateTime<FixedOffset> {
    match FixedOffset::east_opt(VN_OFFSET_SECS) {
        Some(tz) => dt.with_timezone(&tz),
        None => dt.fixed_offset(),
    }
}

/// Example: 2024-03-15T07:02:26Z -> "15.03.2024 14:02"
pub fn format_datetime(dt: &DateTime<Utc>) -> String {
    to_local(dt).format("%d.%m.%Y %H:%M").to_string()
}

/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%d.%m.%Y").to_string()
}

pub fn format_opt_date(date: Option<NaiveDate>) -> String {
    date.as_ref().map(format_date).unwrap_or_else(|| "—".to_string())
}

pub fn format_opt_datetime(dt: Option<DateTime<Utc>>) -> String {
    dt.as_ref().map(format_datetime).unwrap_or_else(|| "—".to_string())
}

/// Coverage window as shown in policy tables: "01.04.2024 – 30.09.2024"
pub fn format_period(from: Option<NaiveDate>, to: Option<NaiveDate>) -> String {
    match (from, to) {
        (None, None) => "—".to_string(),
        (from, to) => format!("{} – {}", format_opt_date(from), format_opt_date(to)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_datetime_shifts_to_vietnam_time() {
        let dt = Utc.with_ymd_and_hms(2024, 3, 15, 7, 2, 26).unwrap();
        assert_eq!(format_datetime(&dt), "15.03.2024 14:02");

        let late = Utc.with_ymd_and_hms(2024, 12, 31, 20, 0, 0).unwrap();
        assert_eq!(format_datetime(&late), "01.01.2025 03:00");
    }

    #[test]
    fn test_format_date() {
        let d = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_date(&d), "05.03.2024");
        assert_eq!(format_opt_date(None), "—");
    }

    #[test]
    fn test_format_period() {
        let from = NaiveDate::from_ymd_opt(2024, 4, 1);
        let to = NaiveDate::from_ymd_opt(2024, 9, 30);
        assert_eq!(format_period(from, to), "01.04.2024 – 30.09.2024");
        assert_eq!(format_period(None, None), "—");
        assert_eq!(format_period(from, None), "01.04.2024 – —");
    }
}
