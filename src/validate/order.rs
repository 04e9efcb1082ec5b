//! Whole-file ordering check.

use std::cmp::Ordering;

use crate::schema::SortKey;

/// Find the first data line that breaks the file's sort order.
///
/// `contents` is the whole file including its header. Returns the 1-based
/// line number of the first line that sorts before its predecessor, or
/// `None` if the file is ordered. Blank lines are ignored.
pub fn first_unordered_line(contents: &str, key: SortKey) -> Option<usize> {
    let mut previous: Option<&str> = None;

    for (index, line) in contents.lines().enumerate().skip(1) {
        if line.is_empty() {
            continue;
        }
        if let Some(prev) = previous {
            if compare_lines(prev, line, key) == Ordering::Greater {
                return Some(index + 1);
            }
        }
        previous = Some(line);
    }

    None
}

fn compare_lines(a: &str, b: &str, key: SortKey) -> Ordering {
    key.fields
        .iter()
        .map(|&field| compare_folded(raw_field(a, field), raw_field(b, field)))
        .find(|ordering| ordering.is_ne())
        .unwrap_or_else(|| a.as_bytes().cmp(b.as_bytes()))
}

fn raw_field(line: &str, index: usize) -> &str {
    line.split(',').nth(index).unwrap_or("")
}

fn compare_folded(a: &str, b: &str) -> Ordering {
    a.bytes()
        .map(|c| c.to_ascii_uppercase())
        .cmp(b.bytes().map(|c| c.to_ascii_uppercase()))
}
