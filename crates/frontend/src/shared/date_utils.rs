//! Utilities for date formatting
//!
//! Provides consistent date formatting across the application

use chrono::{Datelike, NaiveDate};

/// Current day, used for "today" stats, default form dates and demo
/// filters.
pub fn today() -> NaiveDate {
    chrono::Utc::now().date_naive()
}

/// ISO date string for the form inputs and export file names.
pub fn today_iso() -> String {
    today().to_string()
}

/// Current month in `YYYY-MM` format (performance report default).
pub fn current_month() -> String {
    let now = today();
    format!("{:04}-{:02}", now.year(), now.month())
}

/// Format a date as DD.MM.YYYY for table cells.
/// Example: 2024-03-15 -> "15.03.2024"
pub fn format_date(date: NaiveDate) -> String {
    format!("{:02}.{:02}.{}", date.day(), date.month(), date.year())
}

/// Format a `YYYY-MM` month key as "Jan 2024".
/// Falls back to the raw string when the key does not parse.
pub fn format_month(month: &str) -> String {
    let Some((year, month_no)) = month.split_once('-') else {
        return month.to_string();
    };
    let name = match month_no {
        "01" => "Jan",
        "02" => "Feb",
        "03" => "Mar",
        "04" => "Apr",
        "05" => "May",
        "06" => "Jun",
        "07" => "Jul",
        "08" => "Aug",
        "09" => "Sep",
        "10" => "Oct",
        "11" => "Nov",
        "12" => "Dec",
        _ => return month.to_string(),
    };
    format!("{} {}", name, year)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 15).unwrap();
        assert_eq!(format_date(date), "15.03.2024");
        let date = NaiveDate::from_ymd_opt(2024, 12, 1).unwrap();
        assert_eq!(format_date(date), "01.12.2024");
    }

    #[test]
    fn test_format_month() {
        assert_eq!(format_month("2024-01"), "Jan 2024");
        assert_eq!(format_month("2023-12"), "Dec 2023");
    }

    #[test]
    fn test_invalid_month_passes_through() {
        assert_eq!(format_month("2024-13"), "2024-13");
        assert_eq!(format_month("invalid"), "invalid");
    }
}
