//! Integer-prefix parsing for free-form numeric text fields.

/// Parse the leading base-10 integer of `text`.
///
/// Leading blanks and a single `+` or `-` sign are accepted, then the longest
/// run of ASCII digits is taken and anything after it is ignored. Blanks are
/// the ECMAScript set: ASCII whitespace, line and paragraph separators, the
/// byte order mark and the `Zs` spaces. `U+0085` is not a blank.
/// Returns `None` when no digit follows the optional sign or when the value
/// does not fit in an `i64`.
///
/// ```
/// use camera_config::helpers::parse_int_prefix;
///
/// assert_eq!(parse_int_prefix("  15.7 min"), Some(15));
/// assert_eq!(parse_int_prefix("-5abc"), Some(-5));
/// assert_eq!(parse_int_prefix("-"), None);
/// ```
pub fn parse_int_prefix(text: &str) -> Option<i64> {
    let trimmed = text.trim_start_matches(is_leading_blank);

    let (negative, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();
    if digits_len == 0 {
        return None;
    }

    // Accumulate negatively so i64::MIN stays representable
    let mut value: i64 = 0;
    for digit in rest[..digits_len].bytes() {
        value = value
            .checked_mul(10)?
            .checked_sub(i64::from(digit - b'0'))?;
    }

    if negative { Some(value) } else { value.checked_neg() }
}

fn is_leading_blank(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n' | '\u{0B}' | '\u{0C}' | '\r' | ' '
            | '\u{A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_and_prefixed_numbers() {
        assert_eq!(parse_int_prefix("15"), Some(15));
        assert_eq!(parse_int_prefix("15.7"), Some(15));
        assert_eq!(parse_int_prefix("  15"), Some(15));
        assert_eq!(parse_int_prefix("\t\n20 minutes"), Some(20));
        assert_eq!(parse_int_prefix("+7"), Some(7));
        assert_eq!(parse_int_prefix("007"), Some(7));
    }

    #[test]
    fn test_negative_and_zero_are_numbers() {
        assert_eq!(parse_int_prefix("-5abc"), Some(-5));
        assert_eq!(parse_int_prefix("0"), Some(0));
        assert_eq!(parse_int_prefix("-0"), Some(0));
    }

    #[test]
    fn test_no_leading_digits() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("   "), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("-"), None);
        assert_eq!(parse_int_prefix("+-3"), None);
        assert_eq!(parse_int_prefix(".5"), None);
        assert_eq!(parse_int_prefix("x15"), None);
    }

    #[test]
    fn test_leading_blank_set() {
        assert_eq!(parse_int_prefix("\u{FEFF}15"), Some(15));
        assert_eq!(parse_int_prefix("\u{0B}\u{0C}9"), Some(9));
        assert_eq!(parse_int_prefix("\u{3000}\u{A0}7"), Some(7));
        assert_eq!(parse_int_prefix("\u{2028}-3"), Some(-3));
        assert_eq!(parse_int_prefix("\u{85}15"), None);
        assert_eq!(parse_int_prefix("\u{200B}15"), None);
    }

    #[test]
    fn test_only_decimal_radix() {
        assert_eq!(parse_int_prefix("0x1A"), Some(0));
        assert_eq!(parse_int_prefix("1e3"), Some(1));
    }

    #[test]
    fn test_i64_bounds() {
        assert_eq!(parse_int_prefix("9223372036854775807"), Some(i64::MAX));
        assert_eq!(parse_int_prefix("-9223372036854775808"), Some(i64::MIN));
        assert_eq!(parse_int_prefix("9223372036854775808"), None);
        assert_eq!(parse_int_prefix("99999999999999999999"), None);
    }
}
