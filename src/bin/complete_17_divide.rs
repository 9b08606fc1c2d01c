use colored::Colorize;
use daily_practice::harness;
use thiserror::Error;
use tracing::{debug, info};

// =============================================================================
// Divide Two Integers
// =============================================================================

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum DivideError {
    #[error("Division by zero")]
    DivisionByZero,

    #[error("Quotient of {dividend} / -1 does not fit in i32")]
    Overflow { dividend: i32 },
}

/// Truncating division that reports unrepresentable quotients.
///
/// Operands are widened to `i64` before taking absolute values, so
/// `i32::MIN` is safe. The quotient magnitude is the largest `q` in
/// `[0, |dividend|]` with `q <= |dividend| / |divisor|`, found by binary
/// search.
pub fn checked_divide(dividend: i32, divisor: i32) -> Result<i32, DivideError> {
    if divisor == 0 {
        return Err(DivideError::DivisionByZero);
    }
    if dividend == i32::MIN && divisor == -1 {
        return Err(DivideError::Overflow { dividend });
    }

    let a = i64::from(dividend).abs();
    let b = i64::from(divisor).abs();
    let limit = a / b;

    let (mut low, mut high) = (0i64, a);
    let mut quotient = 0i64;
    while low <= high {
        let mid = low + (high - low) / 2;
        if mid <= limit {
            quotient = mid;
            low = mid + 1;
        } else {
            high = mid - 1;
        }
    }

    if (dividend < 0) ^ (divisor < 0) {
        quotient = -quotient;
    }

    // |quotient| <= |dividend| and the MIN / -1 case is excluded above.
    i32::try_from(quotient).map_err(|_| DivideError::Overflow { dividend })
}

/// Truncating division with the clamp rule applied.
///
/// Clamp rule: any quotient that cannot be represented saturates to
/// `i32::MAX`. That covers `i32::MIN / -1` and, by the same policy, division
/// by zero. Nothing wraps and nothing panics.
pub fn divide(dividend: i32, divisor: i32) -> i32 {
    checked_divide(dividend, divisor).unwrap_or(i32::MAX)
}

// =============================================================================
// Harness
// =============================================================================

fn main() {
    harness::init_tracing();
    println!("=== Divide Two Integers ===\n");

    let cases = [
        (10, 3),
        (7, -3),
        (-7, 3),
        (0, 5),
        (i32::MIN, -1),
        (i32::MIN, 1),
        (42, 0),
    ];

    for (dividend, divisor) in cases {
        debug!(dividend, divisor, "dividing");
        let quotient = divide(dividend, divisor);
        match checked_divide(dividend, divisor) {
            Ok(_) => println!("divide({dividend}, {divisor}) = {}", quotient.to_string().green()),
            Err(err) => println!(
                "divide({dividend}, {divisor}) = {} ({})",
                quotient.to_string().yellow(),
                err
            ),
        }
        info!(dividend, divisor, quotient, "divided");
    }
}

// =============================================================================
// Tests
// =============================================================================
