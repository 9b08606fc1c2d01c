use colored::Colorize;
use daily_practice::harness;
use tracing::debug;

// =============================================================================
// Reverse String (in place)
// =============================================================================

/// Reverses `items` in place by swapping from both ends until the cursors
/// meet.
pub fn reverse_in_place<T>(items: &mut [T]) {
    if items.is_empty() {
        return;
    }

    let mut low = 0;
    let mut high = items.len() - 1;
    while low < high {
        items.swap(low, high);
        low += 1;
        high -= 1;
    }
}

pub fn reverse_string(s: &mut [char]) {
    reverse_in_place(s);
}

// =============================================================================
// Harness
// =============================================================================

fn main() {
    harness::init_tracing();

    let word = "Hello";
    let mut chars: Vec<char> = word.chars().collect();
    reverse_string(&mut chars);
    debug!(len = chars.len(), "reversed");

    let reversed: String = chars.into_iter().collect();
    println!("{word} -> {}", reversed.green());
}

// =============================================================================
// Tests
// =============================================================================
