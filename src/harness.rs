use std::io::{self, BufRead, Read};

use thiserror::Error;
use tracing::debug;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

// =============================================================================
// Input errors
// =============================================================================

#[derive(Error, Debug)]
pub enum InputError {
    #[error("Failed to read standard input: {0}")]
    Io(#[from] io::Error),

    #[error("No input provided")]
    Empty,

    #[error("Invalid integer: '{token}'")]
    InvalidInteger { token: String },

    #[error("Expected {expected} integers, found {found}")]
    CountMismatch { expected: usize, found: usize },

    #[error("Element count must not be negative, got {value}")]
    NegativeCount { value: i32 },
}

// =============================================================================
// Tracing
// =============================================================================

/// Initialize the tracing subscriber for a practice binary.
///
/// Reads `RUST_LOG`, defaults to `warn`. Events go to stderr and stdout
/// carries only the exercise's answer, so a binary's output can still be
/// diffed against an expected answer with debug events enabled:
///
/// ```bash
/// echo "4 1 2 3 4" | RUST_LOG=debug cargo run --bin complete_19_product_except_self
/// ```
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(io::stderr).compact())
        .init();
}

// =============================================================================
// Reading
// =============================================================================

pub fn read_stdin() -> Result<String, InputError> {
    let mut buffer = String::new();
    io::stdin().lock().read_to_string(&mut buffer)?;
    debug!(bytes = buffer.len(), "read standard input");
    Ok(buffer)
}

/// Read a single line, without its trailing newline.
pub fn read_line<R: BufRead>(reader: &mut R) -> Result<String, InputError> {
    let mut line = String::new();
    if reader.read_line(&mut line)? == 0 {
        return Err(InputError::Empty);
    }
    let trimmed_len = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed_len);
    Ok(line)
}

// =============================================================================
// Parsing
// =============================================================================

fn parse_token(token: &str) -> Result<i32, InputError> {
    token.parse().map_err(|_| InputError::InvalidInteger {
        token: token.to_string(),
    })
}

/// Parse every whitespace-separated token as an `i32`.
pub fn parse_integers(text: &str) -> Result<Vec<i32>, InputError> {
    text.split_whitespace().map(parse_token).collect()
}

/// Parse the first integer in `text`.
pub fn parse_single(text: &str) -> Result<i32, InputError> {
    let token = text.split_whitespace().next().ok_or(InputError::Empty)?;
    parse_token(token)
}

/// Parse a count `n` followed by `n` integers. Tokens after the first `n`
/// values are ignored.
pub fn parse_counted(text: &str) -> Result<Vec<i32>, InputError> {
    let mut tokens = text.split_whitespace();
    let count = parse_token(tokens.next().ok_or(InputError::Empty)?)?;
    let expected =
        usize::try_from(count).map_err(|_| InputError::NegativeCount { value: count })?;

    let values = tokens
        .take(expected)
        .map(parse_token)
        .collect::<Result<Vec<_>, _>>()?;

    if values.len() < expected {
        return Err(InputError::CountMismatch {
            expected,
            found: values.len(),
        });
    }

    debug!(count = expected, "parsed counted integer sequence");
    Ok(values)
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_parse_integers() {
        assert_eq!(parse_integers("1 -2\n3\t4").unwrap(), vec![1, -2, 3, 4]);
        assert!(parse_integers("").unwrap().is_empty());
    }

    #[test]
    fn test_parse_integers_invalid_token() {
        let err = parse_integers("1 two 3").unwrap_err();
        assert!(matches!(err, InputError::InvalidInteger { ref token } if token == "two"));
        assert_eq!(err.to_string(), "Invalid integer: 'two'");
    }

    #[test]
    fn test_parse_single() {
        assert_eq!(parse_single("  -123 \n").unwrap(), -123);
        assert!(matches!(parse_single("   "), Err(InputError::Empty)));
        assert!(matches!(
            parse_single("99999999999"),
            Err(InputError::InvalidInteger { .. })
        ));
    }

    #[test]
    fn test_parse_counted() {
        assert_eq!(parse_counted("4\n1 2 3 4\n").unwrap(), vec![1, 2, 3, 4]);
        assert_eq!(parse_counted("2 5 6 7").unwrap(), vec![5, 6]);
        assert!(parse_counted("0").unwrap().is_empty());
    }

    #[test]
    fn test_parse_counted_errors() {
        assert!(matches!(parse_counted(""), Err(InputError::Empty)));
        assert!(matches!(
            parse_counted("3 1 2"),
            Err(InputError::CountMismatch {
                expected: 3,
                found: 2
            })
        ));
        assert!(matches!(
            parse_counted("-1 5"),
            Err(InputError::NegativeCount { value: -1 })
        ));
    }

    #[test]
    fn test_count_mismatch_display() {
        let err = InputError::CountMismatch {
            expected: 4,
            found: 1,
        };
        assert_eq!(err.to_string(), "Expected 4 integers, found 1");
    }

    #[test]
    fn test_read_line_strips_newline() {
        let mut reader = Cursor::new("race a car\r\nsecond line\n");
        assert_eq!(read_line(&mut reader).unwrap(), "race a car");
        assert_eq!(read_line(&mut reader).unwrap(), "second line");
        assert!(matches!(read_line(&mut reader), Err(InputError::Empty)));
    }

    #[test]
    fn test_error_is_send_and_sync() {
        fn assert_send<T: Send>() {}
        fn assert_sync<T: Sync>() {}
        assert_send::<InputError>();
        assert_sync::<InputError>();
    }
}
