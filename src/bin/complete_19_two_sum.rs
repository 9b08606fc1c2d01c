use std::collections::HashMap;

use colored::Colorize;
use daily_practice::harness;
use tracing::{debug, info};

// =============================================================================
// Two Sum
// =============================================================================

/// Finds indices `(i, j)` with `i < j` and `nums[i] + nums[j] == target`.
///
/// Single pass: each value's complement is looked up among the values
/// already seen before the value itself is recorded, so an index never pairs
/// with itself. When several pairs qualify, the one completed first in
/// left-to-right order is returned. `None` when no pair exists.
pub fn two_sum(nums: &[i32], target: i32) -> Option<(usize, usize)> {
    let mut seen: HashMap<i32, usize> = HashMap::with_capacity(nums.len());

    for (index, &value) in nums.iter().enumerate() {
        // A complement outside i32 cannot be in the map.
        if let Some(complement) = target.checked_sub(value) {
            if let Some(&earlier) = seen.get(&complement) {
                return Some((earlier, index));
            }
        }
        seen.insert(value, index);
    }
    None
}

// =============================================================================
// Harness
// =============================================================================

fn main() {
    harness::init_tracing();
    println!("=== Two Sum ===\n");

    let cases: [(&[i32], i32); 4] = [
        (&[2, 7, 11, 15], 9),
        (&[3, 2, 4], 6),
        (&[3, 3], 6),
        (&[1, 2, 3], 100),
    ];

    for (nums, target) in cases {
        debug!(?nums, target, "searching");
        match two_sum(nums, target) {
            Some((i, j)) => {
                info!(i, j, "pair found");
                println!("{nums:?}, target {target} -> {}", format!("[{i}, {j}]").green());
            }
            None => {
                info!("no pair");
                println!("{nums:?}, target {target} -> {}", "[]".red());
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
