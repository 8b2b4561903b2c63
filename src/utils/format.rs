use std::cmp::Ordering;

/// Format a phone number for display
/// Handles various input formats and normalizes to (XXX) XXX-XXXX
pub fn format_phone(phone: &str) -> String {
    // Extract just the digits
    let digits: String = phone.chars().filter(|c| c.is_ascii_digit()).collect();

    match digits.len() {
        10 => format!("({}) {}-{}", &digits[0..3], &digits[3..6], &digits[6..10]),
        11 if digits.starts_with('1') => {
            format!("({}) {}-{}", &digits[1..4], &digits[4..7], &digits[7..11])
        }
        _ => phone.to_string(), // Return original if can't format
    }
}

/// Case-insensitive ordering, used for name sorts.
pub fn cmp_ignore_case(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase())
}

/// Converts an empty or whitespace-only string to `None`.
pub fn none_if_empty(value: String) -> Option<String> {
    if value.trim().is_empty() {
        None
    } else {
        Some(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_phone() {
        assert_eq!(format_phone("5551234567"), "(555) 123-4567");
        assert_eq!(format_phone("15551234567"), "(555) 123-4567");
        assert_eq!(format_phone("555-123-4567"), "(555) 123-4567");
        assert_eq!(format_phone("(555) 123-4567"), "(555) 123-4567");
        assert_eq!(format_phone("123"), "123"); // Too short, return as-is
    }

    #[test]
    fn test_cmp_ignore_case() {
        assert_eq!(cmp_ignore_case("alice", "Bob"), Ordering::Less);
        assert_eq!(cmp_ignore_case("Bob", "alice"), Ordering::Greater);
        assert_eq!(cmp_ignore_case("Carol", "carol"), Ordering::Equal);
    }

    #[test]
    fn test_none_if_empty() {
        assert_eq!(none_if_empty(String::new()), None);
        assert_eq!(none_if_empty("   ".to_string()), None);
        assert_eq!(none_if_empty("x".to_string()), Some("x".to_string()));
    }
}
