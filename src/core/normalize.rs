/// Whether the input is empty or whitespace only.
pub(crate) fn is_blank(input: &str) -> bool {
    input.trim().is_empty()
}

/// Remove every character matching `strip` from the input.
pub(crate) fn strip_chars(input: &str, strip: impl Fn(char) -> bool) -> String {
    input.chars().filter(|&c| !strip(c)).collect()
}

/// Whitespace or hyphen, the decorations accepted in most identifiers.
pub(crate) fn is_separator(c: char) -> bool {
    c.is_whitespace() || c == '-'
}

/// Non-empty and ASCII digits only.
pub(crate) fn is_all_digits(input: &str) -> bool {
    !input.is_empty() && input.bytes().all(|b| b.is_ascii_digit())
}

/// Numeric values of an all-digit string, `None` if any character is not
/// an ASCII digit.
pub(crate) fn digit_values(input: &str) -> Option<Vec<u32>> {
    input.chars().map(|c| c.to_digit(10)).collect()
}

/// Join fixed-size character groups with `separator`. The last group may
/// be shorter.
pub(crate) fn group_chars(input: &str, size: usize, separator: char) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / size.max(1));
    for (i, c) in input.chars().enumerate() {
        if i > 0 && i % size == 0 {
            out.push(separator);
        }
        out.push(c);
    }
    out
}
