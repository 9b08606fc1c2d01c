use colored::Colorize;
use daily_practice::harness;
use tracing::info;

// =============================================================================
// Best Time to Buy and Sell Stock (single transaction)
// =============================================================================

/// Maximum profit from buying on one day and selling on a later day.
///
/// Tracks the cheapest price seen so far and the best sale against it.
/// Returns 0 when no later price beats an earlier one, and for empty input.
/// A profit larger than `i32::MAX` saturates to `i32::MAX`.
pub fn max_profit(prices: &[i32]) -> i32 {
    let Some((&first, rest)) = prices.split_first() else {
        return 0;
    };

    let mut min_price = first;
    let mut best = 0;
    for &price in rest {
        best = best.max(price.saturating_sub(min_price));
        min_price = min_price.min(price);
    }
    best
}

// =============================================================================
// Harness
// =============================================================================

fn main() {
    harness::init_tracing();
    println!("=== Max Profit ===\n");

    let samples: [&[i32]; 3] = [&[7, 1, 5, 3, 6, 4], &[7, 6, 4, 3, 1], &[2, 4, 1]];
    for prices in samples {
        let profit = max_profit(prices);
        info!(?prices, profit, "evaluated prices");
        let shown = if profit > 0 {
            profit.to_string().green()
        } else {
            profit.to_string().yellow()
        };
        println!("{prices:?} -> {shown}");
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_basic() {
        assert_eq!(max_profit(&[7, 1, 5, 3, 6, 4]), 5);
    }

    #[test]
    fn test_strictly_decreasing() {
        assert_eq!(max_profit(&[7, 6, 4, 3, 1]), 0);
    }

    #[test]
    fn test_minimum_after_best_sale() {
        assert_eq!(max_profit(&[2, 4, 1]), 2);
    }

    #[test]
    fn test_single_and_empty() {
        assert_eq!(max_profit(&[5]), 0);
        assert_eq!(max_profit(&[]), 0);
    }

    #[test]
    fn test_profit_beyond_i32_saturates() {
        assert_eq!(max_profit(&[i32::MIN, i32::MAX]), i32::MAX);
        assert_eq!(max_profit(&[-1, i32::MAX]), i32::MAX);
        assert_eq!(max_profit(&[0, i32::MAX]), i32::MAX);
    }

    #[test]
    fn test_flat_prices() {
        assert_eq!(max_profit(&[3, 3, 3]), 0);
    }

    proptest! {
        #[test]
        fn test_matches_best_pair(prices in prop::collection::vec(0i32..10_000, 0..40)) {
            let mut expected = 0;
            for buy in 0..prices.len() {
                for sell in (buy + 1)..prices.len() {
                    expected = expected.max(prices[sell] - prices[buy]);
                }
            }
            let profit = max_profit(&prices);
            prop_assert!(profit >= 0);
            prop_assert_eq!(profit, expected);
        }

        #[test]
        fn test_repeated_calls_identical(prices in prop::collection::vec(any::<i32>(), 0..40)) {
            prop_assert_eq!(max_profit(&prices), max_profit(&prices));
        }
    }
}
