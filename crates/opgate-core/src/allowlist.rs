//! `;`-delimited token lists, matched in const context.
//!
//! Slicing and `==` on `[u8]` are not const, so segments are compared by index.

/// Reserved token separator.
pub const DELIMITER: u8 = b';';

/// Returns true iff `list` contains `item` as one of its `;`-separated tokens.
///
/// Empty tokens are real tokens: `contains(";;", "")` holds, and so does
/// `contains("", "")`.
///
/// ```
/// use opgate_core::contains;
///
/// const HIT: bool = contains("a;bc;d", "bc");
/// assert!(HIT);
/// assert!(!contains("a;bc;d", "b"));
/// ```
pub const fn contains(list: &str, item: &str) -> bool {
    let list = list.as_bytes();
    let item = item.as_bytes();
    let mut cur = 0;
    loop {
        match find_byte(list, cur, DELIMITER) {
            Some(next) => {
                if segment_eq(list, cur, next, item) {
                    return true;
                }
                cur = next + 1;
            }
            // last segment; empty when the list ends with a delimiter
            None => return segment_eq(list, cur, list.len(), item),
        }
    }
}

/// Position of the first `needle` at or after `from`.
pub(crate) const fn find_byte(haystack: &[u8], from: usize, needle: u8) -> Option<usize> {
    let mut i = from;
    while i < haystack.len() {
        if haystack[i] == needle {
            return Some(i);
        }
        i += 1;
    }
    None
}

/// Position of the first occurrence of `needle` in `haystack`.
pub(crate) const fn find_seq(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.len() > haystack.len() {
        return None;
    }
    let mut start = 0;
    while start + needle.len() <= haystack.len() {
        if segment_eq(haystack, start, start + needle.len(), needle) {
            return Some(start);
        }
        start += 1;
    }
    None
}

/// `haystack[start..end] == item`, const.
const fn segment_eq(haystack: &[u8], start: usize, end: usize, item: &[u8]) -> bool {
    if end - start != item.len() {
        return false;
    }
    let mut i = 0;
    while i < item.len() {
        if haystack[start + i] != item[i] {
            return false;
        }
        i += 1;
    }
    true
}
