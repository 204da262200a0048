//! Formatting and validation helpers shared by the views.

use chrono::{DateTime, Utc};

/// Display a timestamp as dd/mm/yyyy.
pub fn format_date(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%d/%m/%Y").to_string()
}

/// Format a Brazilian phone number: `(xx) xxxx-xxxx`, or `(xx) xxxxx-xxxx`
/// for eleven-digit mobile numbers. Non-digits in the input are ignored;
/// inputs too short to group are returned as their digits.
pub fn format_phone(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    if digits.len() <= 2 {
        return digits;
    }
    let (area, rest) = digits.split_at(2);
    let prefix_len = if digits.len() <= 10 { 4 } else { 5 };
    if rest.len() <= prefix_len {
        return format!("({area}) {rest}");
    }
    let (prefix, suffix) = rest.split_at(prefix_len);
    format!("({area}) {prefix}-{suffix}")
}

pub fn is_valid_email(email: &str) -> bool {
    if email.chars().any(char::is_whitespace) {
        return false;
    }
    let Some((local, domain)) = email.split_once('@') else {
        return false;
    };
    if local.is_empty() {
        return false;
    }
    match domain.split_once('.') {
        Some((host, tld)) => !host.is_empty() && !tld.is_empty(),
        None => false,
    }
}

pub fn is_valid_password(password: &str) -> bool {
    password.chars().count() >= 6
}

/// First letters of the first two words, uppercased, for avatar badges.
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date_is_day_first() {
        let timestamp = DateTime::parse_from_rfc3339("2024-06-01T12:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        assert_eq!(format_date(&timestamp), "01/06/2024");
    }

    #[test]
    fn test_format_phone_landline_and_mobile() {
        assert_eq!(format_phone("1133334444"), "(11) 3333-4444");
        assert_eq!(format_phone("11999998888"), "(11) 99999-8888");
        assert_eq!(format_phone("(11) 99999-8888"), "(11) 99999-8888");
    }

    #[test]
    fn test_format_phone_short_inputs() {
        assert_eq!(format_phone("11"), "11");
        assert_eq!(format_phone("113333"), "(11) 3333");
        assert_eq!(format_phone(""), "");
    }

    #[test]
    fn test_email_validation() {
        assert!(is_valid_email("ana@example.com"));
        assert!(is_valid_email("a.b@sub.example.com"));
        assert!(!is_valid_email("ana@example"));
        assert!(!is_valid_email("@example.com"));
        assert!(!is_valid_email("ana example@x.com"));
        assert!(!is_valid_email("ana"));
    }

    #[test]
    fn test_password_validation() {
        assert!(is_valid_password("secret1"));
        assert!(!is_valid_password("12345"));
    }

    #[test]
    fn test_initials_take_first_two_words() {
        assert_eq!(initials("Ana Souza"), "AS");
        assert_eq!(initials("Ana Maria Souza"), "AM");
        assert_eq!(initials("ana"), "A");
        assert_eq!(initials(""), "");
    }
}
