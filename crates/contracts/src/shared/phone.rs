//! Phone number normalization for PHONE fields.

/// Minimal and maximal digit count accepted for a phone number (E.164 bounds).
const MIN_DIGITS: usize = 10;
const MAX_DIGITS: usize = 15;

/// Normalize a single phone number to digits only.
///
/// Spaces, dashes, dots, parentheses and a leading `+` are dropped.
/// Returns `None` when anything else remains or the digit count is out of range.
pub fn normalize_phone(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    let body = trimmed.strip_prefix('+').unwrap_or(trimmed);

    let mut digits = String::with_capacity(body.len());
    for ch in body.chars() {
        match ch {
            '0'..='9' => digits.push(ch),
            ' ' | '-' | '.' | '(' | ')' => {}
            _ => return None,
        }
    }

    if (MIN_DIGITS..=MAX_DIGITS).contains(&digits.len()) {
        Some(digits)
    } else {
        None
    }
}

/// Split user input holding several phones: `"380501234567, 380671234567"`.
pub fn split_phone_input(raw: &str) -> Vec<String> {
    raw.split([',', ';', '\n'])
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_formatting() {
        assert_eq!(
            normalize_phone("+38 (050) 123-45-67").as_deref(),
            Some("380501234567")
        );
        assert_eq!(normalize_phone(" 380671234567 ").as_deref(), Some("380671234567"));
    }

    #[test]
    fn rejects_letters_and_bad_lengths() {
        assert_eq!(normalize_phone("38050abc4567"), None);
        assert_eq!(normalize_phone("12345"), None);
        assert_eq!(normalize_phone("1234567890123456"), None);
        assert_eq!(normalize_phone(""), None);
    }

    #[test]
    fn splits_multiple_values() {
        assert_eq!(
            split_phone_input("380501234567, 380671234567;\n ,"),
            vec!["380501234567".to_string(), "380671234567".to_string()]
        );
    }
}
