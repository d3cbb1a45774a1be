/// Utilities for date and time formatting
///
/// Provides consistent date/time formatting across the application. The
/// backend sends structure timestamps as "YYYY-MM-DD HH:MM:SS" and record
/// timestamps in ISO form with a 'T' separator; both are handled here.

/// Format a backend datetime string to DD.MM.YYYY HH:MM:SS
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02:26"
/// Example: "2024-03-15 14:02:26" -> "15.03.2024 14:02:26"
pub fn format_datetime(datetime_str: &str) -> String {
    let split = datetime_str
        .split_once('T')
        .or_else(|| datetime_str.split_once(' '));
    if let Some((date_part, time_part)) = split {
        if let Some((year, rest)) = date_part.split_once('-') {
            if let Some((month, day)) = rest.split_once('-') {
                let time = time_part.split('.').next().unwrap_or(time_part);
                return format!("{}.{}.{} {}", day, month, year, time);
            }
        }
    }
    datetime_str.to_string()
}

/// Format an ISO date string to DD.MM.YYYY
/// Example: "2024-03-15" or "2024-03-15T14:02:26Z" -> "15.03.2024"
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split(['T', ' ']).next().unwrap_or(date_str);
    if let Some((year, rest)) = date_part.split_once('-') {
        if let Some((month, day)) = rest.split_once('-') {
            return format!("{}.{}.{}", day, month, year);
        }
    }
    date_str.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2024-03-15T14:02:26.123Z"),
            "15.03.2024 14:02:26"
        );
        assert_eq!(format_datetime("2024-03-15 14:02:26"), "15.03.2024 14:02:26");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15 14:02:26"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26.123Z"), "15.03.2024");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("invalid"), "invalid");
        assert_eq!(format_date("invalid"), "invalid");
    }
}
