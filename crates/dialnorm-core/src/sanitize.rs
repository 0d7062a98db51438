//! Character-level helpers shared by the candidate generator, the ambiguity
//! check and the table-driven plan.

/// Keeps the characters a dialer understands: digits, `+`, `*` and `#`.
pub fn clean_phone_number(value: &str) -> String {
    value
        .chars()
        .filter(|ch| ch.is_ascii_digit() || matches!(ch, '+' | '*' | '#'))
        .collect()
}

pub fn digits_only(value: &str) -> String {
    value.chars().filter(|ch| ch.is_ascii_digit()).collect()
}

/// Digits of `value` read as an unsigned integer and printed back.
///
/// Empty when there are no digits, when they are all zeros, or when they do
/// not fit in a `u64`.
pub fn digits_only_without_leading_zeros(value: &str) -> String {
    match digits_only(value).parse::<u64>() {
        Ok(number) if number > 0 => number.to_string(),
        _ => String::new(),
    }
}

pub fn strip_literal_prefix<'a>(value: &'a str, prefix: &str) -> Option<&'a str> {
    if prefix.is_empty() {
        return None;
    }
    value.strip_prefix(prefix)
}
