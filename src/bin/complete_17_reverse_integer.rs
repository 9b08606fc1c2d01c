use colored::Colorize;
use daily_practice::harness::{self, InputError};
use tracing::{debug, info};

// =============================================================================
// Reverse Integer
// =============================================================================

/// Reverses the decimal digits of `x`, keeping its sign.
///
/// Returns `None` when the reversed value does not fit in `i32`. Each step is
/// checked, so overflow is caught before it can happen.
pub fn checked_reverse(mut x: i32) -> Option<i32> {
    let mut reversed = 0i32;
    while x != 0 {
        // `%` keeps the sign of `x`, so negatives reverse toward i32::MIN.
        let digit = x % 10;
        x /= 10;
        reversed = reversed.checked_mul(10)?.checked_add(digit)?;
    }
    Some(reversed)
}

/// Reverses the decimal digits of `x`, or returns 0 on overflow.
pub fn reverse_integer(x: i32) -> i32 {
    checked_reverse(x).unwrap_or(0)
}

// =============================================================================
// Harness: reads one integer from stdin
// =============================================================================

fn run() -> Result<(), InputError> {
    let input = harness::read_stdin()?;
    let value = harness::parse_single(&input)?;
    debug!(value, "parsed input");

    let reversed = reverse_integer(value);
    info!(value, reversed, "reversed digits");

    if checked_reverse(value).is_some() {
        println!("{}", reversed.to_string().green());
    } else {
        println!("{}", reversed.to_string().yellow());
    }
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

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_positive() {
        assert_eq!(reverse_integer(123), 321);
    }

    #[test]
    fn test_negative() {
        assert_eq!(reverse_integer(-123), -321);
    }

    #[test]
    fn test_trailing_zeros_dropped() {
        assert_eq!(reverse_integer(120), 21);
        assert_eq!(reverse_integer(-1000), -1);
        assert_eq!(reverse_integer(0), 0);
    }

    #[test]
    fn test_overflow_returns_zero() {
        assert_eq!(reverse_integer(1_534_236_469), 0);
        assert_eq!(reverse_integer(i32::MAX), 0);
        assert_eq!(reverse_integer(i32::MIN), 0);
        assert_eq!(checked_reverse(-2_147_483_648), None);
    }

    #[test]
    fn test_boundary_values_that_fit() {
        assert_eq!(reverse_integer(1_463_847_412), 2_147_483_641);
        assert_eq!(reverse_integer(-1_463_847_412), -2_147_483_641);
    }

    proptest! {
        #[test]
        fn test_matches_string_reversal(x: i32) {
            let digits: String = x.unsigned_abs().to_string().chars().rev().collect();
            let expected = digits
                .parse::<i64>()
                .ok()
                .map(|magnitude| if x < 0 { -magnitude } else { magnitude })
                .and_then(|value| i32::try_from(value).ok())
                .unwrap_or(0);
            prop_assert_eq!(reverse_integer(x), expected);
        }
    }
}
