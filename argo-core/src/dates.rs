//! Date helpers shared across the ARGO crates.

use chrono::NaiveDate;

/// Format a NaiveDate as "YYYY-MM-DD"
pub fn format_date(date: &NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a date string in "YYYY-MM-DD" format
pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
    Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_and_parse() {
        let date = NaiveDate::from_ymd_opt(2026, 4, 9).unwrap();
        let formatted = format_date(&date);
        assert_eq!(formatted, "2026-04-09");
        let parsed = parse_date(&formatted).unwrap();
        assert_eq!(parsed, date);
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert!(parse_date("20260409").is_err());
        assert!(parse_date("not a date").is_err());
    }
}
