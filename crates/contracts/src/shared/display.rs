//! Text formatting of values shown in tables and modals.

use chrono::NaiveDate;

/// ISO datetime → `DD.MM.YYYY HH:MM`.
/// Example: "2024-03-15T14:02:26.123Z" -> "15.03.2024 14:02"
pub fn format_datetime(datetime_str: &str) -> String {
    match datetime_str.split_once('T') {
        Some((date_part, time_part)) => {
            let time: String = time_part.chars().take(5).collect();
            format!("{} {}", format_date(date_part), time)
        }
        None => format_date(datetime_str),
    }
}

/// ISO date (or datetime) → `DD.MM.YYYY`; anything else is returned as is.
pub fn format_date(date_str: &str) -> String {
    let date_part = date_str.split('T').next().unwrap_or(date_str);
    let mut parts = date_part.splitn(3, '-');
    match (parts.next(), parts.next(), parts.next()) {
        (Some(year), Some(month), Some(day)) if year.len() == 4 => {
            format!("{}.{}.{}", day, month, year)
        }
        _ => date_str.to_string(),
    }
}

/// Optional typed date; a missing one renders as a dash.
pub fn format_day(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%d.%m.%Y").to_string())
        .unwrap_or_else(|| "—".to_string())
}

/// Number without a trailing `.0`, at most 4 decimals.
pub fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        let text = format!("{:.4}", value);
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    }
}

/// Amount in EUR with two decimals.
pub fn format_eur(value: f64) -> String {
    format!("{:.2} €", value)
}

pub fn yes_no(value: bool) -> &'static str {
    if value {
        "Да"
    } else {
        "Нет"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dates() {
        assert_eq!(format_datetime("2024-03-15T14:02:26.123Z"), "15.03.2024 14:02");
        assert_eq!(format_date("2024-03-15"), "15.03.2024");
        assert_eq!(format_date("2024-03-15T14:02:26"), "15.03.2024");
        assert_eq!(format_date("invalid"), "invalid");
        assert_eq!(format_day(NaiveDate::from_ymd_opt(2024, 3, 5)), "05.03.2024");
        assert_eq!(format_day(None), "—");
        assert_eq!(format_datetime("invalid"), "invalid");
    }

    #[test]
    fn numbers() {
        assert_eq!(format_number(12.0), "12");
        assert_eq!(format_number(12.5), "12.5");
        assert_eq!(format_number(0.123456), "0.1235");
        assert_eq!(format_eur(3.456), "3.46 €");
    }
}
