//! Template rendering plus the Indonesian formatting helpers shared by pages
//! and generated letters.

pub mod engine;

pub use engine::{render_template, TemplateError};

use chrono::{Datelike, NaiveDate, Weekday};

/// Convert weekday to Indonesian day name
pub fn weekday_to_indonesian(weekday: Weekday) -> &'static str {
    match weekday {
        Weekday::Mon => "Senin",
        Weekday::Tue => "Selasa",
        Weekday::Wed => "Rabu",
        Weekday::Thu => "Kamis",
        Weekday::Fri => "Jumat",
        Weekday::Sat => "Sabtu",
        Weekday::Sun => "Minggu",
    }
}

/// Convert month number (1-12) to Indonesian month name
pub fn month_to_indonesian(month: u32) -> &'static str {
    match month {
        1 => "Januari",
        2 => "Februari",
        3 => "Maret",
        4 => "April",
        5 => "Mei",
        6 => "Juni",
        7 => "Juli",
        8 => "Agustus",
        9 => "September",
        10 => "Oktober",
        11 => "November",
        _ => "Desember",
    }
}

/// Long date as written in official letters, e.g. "18 Oktober 2026"
pub fn indonesian_long_date(date: NaiveDate) -> String {
    format!(
        "{:02} {} {}",
        date.day(),
        month_to_indonesian(date.month()),
        date.year()
    )
}

/// Same as [`indonesian_long_date`] for an ISO `YYYY-MM-DD` string
pub fn indonesian_long_date_str(date: &str) -> Option<String> {
    NaiveDate::parse_from_str(date, "%Y-%m-%d")
        .ok()
        .map(indonesian_long_date)
}

/// Format an amount with comma thousands separators, e.g. 2500000 -> "2,500,000"
pub fn format_thousands(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3 + 1);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if amount < 0 {
        format!("-{}", grouped)
    } else {
        grouped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1000), "1,000");
        assert_eq!(format_thousands(2_500_000), "2,500,000");
        assert_eq!(format_thousands(123_456_789), "123,456,789");
        assert_eq!(format_thousands(-45_000), "-45,000");
    }

    #[test]
    fn test_indonesian_long_date() {
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
        assert_eq!(indonesian_long_date(date), "18 Oktober 2026");

        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(indonesian_long_date(date), "05 Maret 2024");
    }

    #[test]
    fn test_indonesian_long_date_str() {
        assert_eq!(
            indonesian_long_date_str("2024-08-17").as_deref(),
            Some("17 Agustus 2024")
        );
        assert_eq!(indonesian_long_date_str("kemarin"), None);
    }

    #[test]
    fn test_weekday_to_indonesian() {
        assert_eq!(weekday_to_indonesian(Weekday::Fri), "Jumat");
    }
}
