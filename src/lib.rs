//! Shared glue for the daily practice binaries.
//!
//! Every exercise lives in its own `src/bin/complete_*.rs` file and runs
//! standalone. This library only holds what their `main` functions have in
//! common: tracing setup and reading integers or lines from standard input.

pub mod harness;
