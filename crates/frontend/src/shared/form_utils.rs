//! Parsing of plain text inputs on forms not built from a field schema.

use chrono::NaiveDate;

/// Decimal quantity; a comma is accepted as the separator.
pub fn parse_quantity(text: &str) -> Result<f64, String> {
    text.trim()
        .replace(',', ".")
        .parse()
        .map_err(|_| "Количество должно быть числом".to_string())
}

/// `YYYY-MM-DD` as produced by a date input.
pub fn parse_date(text: &str) -> Result<NaiveDate, String> {
    NaiveDate::parse_from_str(text.trim(), "%Y-%m-%d").map_err(|_| "Укажите дату".to_string())
}

/// Empty input stays unset.
pub fn optional_date(text: &str) -> Result<Option<NaiveDate>, String> {
    if text.trim().is_empty() {
        Ok(None)
    } else {
        parse_date(text).map(Some)
    }
}

pub fn non_empty(text: String) -> Option<String> {
    let text = text.trim();
    (!text.is_empty()).then(|| text.to_string())
}

/// Today's date formatted for a date input.
pub fn today() -> String {
    chrono::Local::now().date_naive().format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantity_accepts_comma() {
        assert_eq!(parse_quantity(" 12,5 "), Ok(12.5));
        assert!(parse_quantity("abc").is_err());
    }

    #[test]
    fn dates() {
        assert_eq!(
            parse_date("2024-05-01"),
            Ok(NaiveDate::from_ymd_opt(2024, 5, 1).unwrap())
        );
        assert!(parse_date("").is_err());
        assert_eq!(optional_date("  "), Ok(None));
    }

    #[test]
    fn blank_text_is_none() {
        assert_eq!(non_empty("  ".to_string()), None);
        assert_eq!(non_empty(" AB 12 ".to_string()), Some("AB 12".to_string()));
    }
}
