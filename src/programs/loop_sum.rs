//! Loop summation: accumulate 1 through a fixed upper bound.

use crate::error::Result;
use std::io::Write;
use tracing::debug;

/// Inclusive upper bound of the summation.
pub const LOOP_UPPER_BOUND: u64 = 1_000_000;

/// Sum `1..=n` with a running accumulator, in ascending order.
pub fn sum_inclusive(n: u64) -> u64 {
    let mut total = 0;
    for i in 1..=n {
        total += i;
    }
    total
}

/// Run the loop program and write `Sum = <total>`.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    let total = sum_inclusive(LOOP_UPPER_BOUND);
    debug!(bound = LOOP_UPPER_BOUND, total, "loop summation complete");
    writeln!(out, "Sum = {total}")?;
    Ok(())
}
