//! Utility functions for text encoding and identifier handling.

const BASE36_DIGITS: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Encodes a number in lower-case base 36.
///
/// # Example
///
/// ```rust
/// use classy::to_base36;
///
/// assert_eq!(to_base36(0), "0");
/// assert_eq!(to_base36(35), "z");
/// assert_eq!(to_base36(36), "10");
/// ```
pub fn to_base36(mut value: u64) -> String {
    if value == 0 {
        return "0".to_string();
    }

    let mut digits = Vec::new();
    while value > 0 {
        digits.push(BASE36_DIGITS[(value % 36) as usize]);
        value /= 36;
    }
    digits.reverse();
    // Every digit comes from the ASCII table above
    digits.into_iter().map(char::from).collect()
}

/// Formats a number the way it reads in a stylesheet.
///
/// Integral values print without a fractional part (`20`, not `20.0`).
pub fn format_number(value: f64) -> String {
    value.to_string()
}

/// Returns true if `s` can be used as the start of a CSS class identifier.
///
/// Accepts ASCII letters, digits, `-` and `_`, and rejects identifiers that
/// start with a digit or with a hyphen followed by a digit.
pub fn is_css_identifier(s: &str) -> bool {
    let bytes = s.as_bytes();
    let Some(&first) = bytes.first() else {
        return false;
    };

    if first.is_ascii_digit() {
        return false;
    }
    if first == b'-' && bytes.get(1).is_some_and(|b| b.is_ascii_digit()) {
        return false;
    }

    bytes
        .iter()
        .all(|b| b.is_ascii_alphanumeric() || *b == b'-' || *b == b'_')
}

/// Reduces a free-form label to characters that are safe inside a class name.
pub fn sanitize_label(label: &str) -> String {
    label
        .trim()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '-'
            }
        })
        .collect::<String>()
        .trim_matches('-')
        .to_string()
}
