//! Recursive factorial, recomputed a fixed number of times.
//!
//! Only the result of the last call is kept. The repetition exists to put
//! load on the call path, so every call is routed through
//! [`std::hint::black_box`] to keep the optimiser from hoisting it out of
//! the loop.

use crate::error::{BenchError, Result};
use std::hint::black_box;
use std::io::Write;
use tracing::{debug, trace};

/// Argument passed to every factorial call.
pub const FACTORIAL_INPUT: u64 = 20;

/// How many times the factorial is recomputed.
pub const FACTORIAL_REPETITIONS: u32 = 10_000;

/// `1` for `n <= 1`, otherwise `n * factorial(n - 1)`.
///
/// Fails with [`BenchError::FactorialOverflow`] when the result does not
/// fit in a `u64`, which is the case from 21 upwards.
pub fn factorial(n: u64) -> Result<u64> {
    if n <= 1 {
        return Ok(1);
    }
    n.checked_mul(factorial(n - 1)?)
        .ok_or(BenchError::FactorialOverflow { n })
}

/// Compute `factorial(n)` `times` times and return the last result.
///
/// Returns 0 when `times` is 0, since no call ever replaces the initial
/// value.
pub fn repeat_factorial(n: u64, times: u32) -> Result<u64> {
    let mut result = 0;
    for _ in 0..times {
        result = factorial(black_box(n))?;
    }
    trace!(n, times, result, "factorial repetitions finished");
    Ok(result)
}

/// Run the factorial program.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let result = repeat_factorial(FACTORIAL_INPUT, FACTORIAL_REPETITIONS)?;
    debug!(
        n = FACTORIAL_INPUT,
        repetitions = FACTORIAL_REPETITIONS,
        result,
        "factorial program complete"
    );
    writeln!(out, "factorial({FACTORIAL_INPUT}) = {result}")?;
    writeln!(out, "Computed {FACTORIAL_REPETITIONS} times")?;
    Ok(())
}
