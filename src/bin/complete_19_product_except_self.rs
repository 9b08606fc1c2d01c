use colored::Colorize;
use daily_practice::harness::{self, InputError};
use tracing::{debug, info};

// =============================================================================
// Product of Array Except Self
// =============================================================================

/// Returns `result` where `result[i]` is the product of every element of
/// `nums` except `nums[i]`.
///
/// Two passes, no division: the forward pass stores the product of everything
/// left of `i`, the backward pass multiplies in everything right of `i`. Zeros
/// need no special case. Products outside the `i32` range wrap.
pub fn product_except_self(nums: &[i32]) -> Vec<i32> {
    let mut result = vec![1; nums.len()];

    let mut prefix = 1i32;
    for (slot, &value) in result.iter_mut().zip(nums) {
        *slot = prefix;
        prefix = prefix.wrapping_mul(value);
    }

    let mut suffix = 1i32;
    for (slot, &value) in result.iter_mut().zip(nums).rev() {
        *slot = slot.wrapping_mul(suffix);
        suffix = suffix.wrapping_mul(value);
    }

    result
}

// =============================================================================
// Harness: reads `n` followed by `n` integers from stdin
// =============================================================================

fn run() -> Result<(), InputError> {
    let input = harness::read_stdin()?;
    let nums = harness::parse_counted(&input)?;
    debug!(?nums, "input sequence");

    let products = product_except_self(&nums);
    info!(len = products.len(), "computed products");

    let line = products
        .iter()
        .map(|value| value.to_string())
        .collect::<Vec<_>>()
        .join(" ");
    println!("{line}");
    Ok(())
}

fn main() {
    harness::init_tracing();
    if let Err(err) = run() {
        eprintln!("{} {err}", "error:".red().bold());
        std::process::exit(1);
    }
}

// =============================================================================
// Tests
// =============================================================================
