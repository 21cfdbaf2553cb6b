//! Literal substring replacement with a choice of comparison.

/// How `replace` compares the search text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Comparison {
    /// Exact, case-sensitive match.
    #[default]
    Ordinal,
    /// Case-insensitive match.
    IgnoreCase,
}

/// Replace every occurrence of `old` in `s` with `new`.
///
/// Scans left to right. Each search resumes after the text just inserted, so
/// matches never overlap and the replacement itself is never rescanned:
/// `replace("aaa", "aa", "b", Comparison::Ordinal)` is `"ba"`.
///
/// An empty `old` leaves `s` unchanged.
pub fn replace(s: &str, old: &str, new: &str, comparison: Comparison) -> String {
    let mut result = s.to_string();
    if old.is_empty() {
        return result;
    }

    let mut start = 0;
    while let Some((begin, end)) = find(&result, old, start, comparison) {
        result.replace_range(begin..end, new);
        start = begin + new.len();
    }

    result
}

/// Byte range of the next occurrence of `needle` at or after `start`.
fn find(
    haystack: &str,
    needle: &str,
    start: usize,
    comparison: Comparison,
) -> Option<(usize, usize)> {
    match comparison {
        Comparison::Ordinal => haystack[start..]
            .find(needle)
            .map(|offset| (start + offset, start + offset + needle.len())),
        Comparison::IgnoreCase => haystack[start..].char_indices().find_map(|(offset, _)| {
            let begin = start + offset;
            prefix_len_ignore_case(&haystack[begin..], needle).map(|len| (begin, begin + len))
        }),
    }
}

/// Length in bytes of the prefix of `text` equal to `needle` ignoring case.
fn prefix_len_ignore_case(text: &str, needle: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    for expected in needle.chars() {
        let (_, actual) = chars.next()?;
        if !actual.to_lowercase().eq(expected.to_lowercase()) {
            return None;
        }
    }
    Some(chars.next().map_or(text.len(), |(index, _)| index))
}
