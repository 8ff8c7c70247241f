//! Character-level slicing policies shared by the reveal engine and renderers.

/// Number of characters (Unicode scalar values) in `line`.
pub fn char_count(line: &str) -> usize {
    line.chars().count()
}

/// Returns the first `chars` characters of `line`.
///
/// Never splits a UTF-8 sequence; a count past the end yields the whole line.
pub fn char_prefix(line: &str, chars: usize) -> &str {
    if chars == 0 {
        return "";
    }

    match line.char_indices().nth(chars) {
        Some((byte_index, _)) => &line[..byte_index],
        None => line,
    }
}

/// Returns the last `max_chars` characters of `line`, for surfaces narrower
/// than the revealed text.
pub fn char_tail(line: &str, max_chars: usize) -> &str {
    let total = char_count(line);
    if total <= max_chars {
        return line;
    }

    match line.char_indices().nth(total - max_chars) {
        Some((byte_index, _)) => &line[byte_index..],
        None => "",
    }
}
