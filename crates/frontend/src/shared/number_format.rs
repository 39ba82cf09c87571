//! Number formatting helpers for tables

/// Format an integer amount with a thousands separator (space)
///
/// # Examples
///
/// ```rust,ignore
/// assert_eq!(format_int(1234567), "1 234 567");
/// ```
pub fn format_int(value: i64) -> String {
    let raw = value.to_string();
    let mut result = String::new();
    let chars: Vec<char> = raw.chars().rev().collect();

    let mut digits = 0;
    for c in chars {
        if digits > 0 && digits % 3 == 0 && c != '-' {
            result.push(' ');
        }
        if c.is_ascii_digit() {
            digits += 1;
        }
        result.push(c);
    }

    result.chars().rev().collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_int() {
        assert_eq!(format_int(0), "0");
        assert_eq!(format_int(999), "999");
        assert_eq!(format_int(1234), "1 234");
        assert_eq!(format_int(1234567), "1 234 567");
        assert_eq!(format_int(-1234), "-1 234");
    }
}
