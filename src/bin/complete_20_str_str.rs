use colored::Colorize;
use daily_practice::harness;
use tracing::debug;

// =============================================================================
// Find the Index of the First Occurrence in a String
// =============================================================================

/// Sentinel returned by [`str_str`] when the needle is absent.
pub const NOT_FOUND: isize = -1;

/// Byte offset of the first occurrence of `needle` in `haystack`.
///
/// Naive sliding window: every start offset where the needle still fits is
/// compared in full, O(n * m) worst case. An empty needle matches at 0.
pub fn find_substring(haystack: &str, needle: &str) -> Option<usize> {
    if needle.is_empty() {
        return Some(0);
    }

    let (hay, pat) = (haystack.as_bytes(), needle.as_bytes());
    if pat.len() > hay.len() {
        return None;
    }

    (0..=hay.len() - pat.len()).find(|&start| &hay[start..start + pat.len()] == pat)
}

/// [`find_substring`] with absence reported as [`NOT_FOUND`].
pub fn str_str(haystack: &str, needle: &str) -> isize {
    find_substring(haystack, needle)
        .and_then(|index| isize::try_from(index).ok())
        .unwrap_or(NOT_FOUND)
}

// =============================================================================
// Harness
// =============================================================================

fn main() {
    harness::init_tracing();
    println!("=== strStr ===\n");

    let cases = [("hello", "ll"), ("sadbutsad", "sad"), ("leetcode", "leeto"), ("a", "")];
    for (haystack, needle) in cases {
        let index = str_str(haystack, needle);
        debug!(haystack, needle, index, "searched");
        let shown = if index == NOT_FOUND {
            index.to_string().red()
        } else {
            index.to_string().green()
        };
        println!("strStr({haystack:?}, {needle:?}) = {shown}");
    }
}

// =============================================================================
// Tests
// =============================================================================
