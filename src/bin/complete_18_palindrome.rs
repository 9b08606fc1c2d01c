use std::io::{self, Write};

use colored::Colorize;
use daily_practice::harness::{self, InputError};
use tracing::{debug, info};

// =============================================================================
// Valid Palindrome (alphanumeric only, case-insensitive)
// =============================================================================

/// Checks whether `s` reads the same in both directions once everything but
/// ASCII letters and digits is dropped and letters are lowercased.
///
/// The filtered, lowercased characters form one double-ended iterator; the
/// front and back cursors walk inward until they meet, returning `false` on
/// the first mismatch. Strings with no ASCII alphanumeric characters are
/// palindromes. Non-ASCII characters are skipped like punctuation.
pub fn is_palindrome(s: &str) -> bool {
    let mut chars = s
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .map(|c| c.to_ascii_lowercase());

    while let (Some(front), Some(back)) = (chars.next(), chars.next_back()) {
        if front != back {
            return false;
        }
    }
    true
}

// =============================================================================
// Harness
// =============================================================================

fn run() -> Result<(), InputError> {
    print!("Enter string: ");
    io::stdout().flush()?;

    let line = harness::read_line(&mut io::stdin().lock())?;
    debug!(%line, "read candidate");

    let verdict = is_palindrome(&line);
    info!(verdict, "checked palindrome");

    if verdict {
        println!("{}", "Palindrome".green());
    } else {
        println!("{}", "Not a palindrome".red());
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
