//! Array pipeline: create, map, filter and reduce a sequence of integers.
//!
//! Each stage produces a fresh sequence (or, for reduce, a single value) and
//! is followed by one report line. The stages are plain functions over
//! slices so they can be exercised independently of the printed output.

use crate::error::Result;
use std::convert::Infallible;
use std::fmt;
use std::io::Write;
use tracing::debug;

/// Number of elements produced by the create stage.
pub const ARRAY_LENGTH: usize = 100_000;

/// Outcome of a single pipeline stage, rendered as its report line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageReport {
    Created { length: usize },
    Mapped { length: usize },
    Filtered { length: usize },
    Reduced { sum: u64 },
}

impl StageReport {
    pub fn stage_name(&self) -> &'static str {
        match self {
            StageReport::Created { .. } => "create",
            StageReport::Mapped { .. } => "map",
            StageReport::Filtered { .. } => "filter",
            StageReport::Reduced { .. } => "reduce",
        }
    }
}

impl fmt::Display for StageReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StageReport::Created { length } => write!(f, "Array created, length = {length}"),
            StageReport::Mapped { length } => write!(f, "Map done, length = {length}"),
            StageReport::Filtered { length } => write!(f, "Filter done, length = {length}"),
            StageReport::Reduced { sum } => write!(f, "Reduce sum = {sum}"),
        }
    }
}

/// Stage results of one full pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PipelineRun {
    created: usize,
    mapped: usize,
    filtered: usize,
    sum: u64,
}

impl PipelineRun {
    /// Report of every stage, in stage order.
    pub fn reports(&self) -> [StageReport; 4] {
        [
            StageReport::Created {
                length: self.created,
            },
            StageReport::Mapped {
                length: self.mapped,
            },
            StageReport::Filtered {
                length: self.filtered,
            },
            StageReport::Reduced { sum: self.sum },
        ]
    }

    /// Final value of the reduce stage.
    pub fn sum(&self) -> u64 {
        self.sum
    }
}

/// Ascending integers `0..len`.
pub fn create(len: usize) -> Vec<u64> {
    (0..len as u64).collect()
}

/// Double every element.
pub fn map_double(values: &[u64]) -> Vec<u64> {
    values.iter().map(|x| x * 2).collect()
}

/// Keep the even elements, preserving order.
pub fn filter_even(values: &[u64]) -> Vec<u64> {
    values.iter().copied().filter(|x| x % 2 == 0).collect()
}

/// Left fold with accumulator `0` and `acc + x`.
pub fn reduce_sum(values: &[u64]) -> u64 {
    values.iter().fold(0, |acc, x| acc + x)
}

/// Drive the four stages, handing each report to `on_stage` as soon as the
/// stage finishes.
fn drive<F, E>(len: usize, mut on_stage: F) -> std::result::Result<PipelineRun, E>
where
    F: FnMut(StageReport) -> std::result::Result<(), E>,
{
    let mut emit = |report: StageReport| {
        debug!(stage = report.stage_name(), %report, "pipeline stage complete");
        on_stage(report)
    };

    let created = create(len);
    emit(StageReport::Created {
        length: created.len(),
    })?;

    let mapped = map_double(&created);
    emit(StageReport::Mapped {
        length: mapped.len(),
    })?;

    let evens = filter_even(&mapped);
    emit(StageReport::Filtered {
        length: evens.len(),
    })?;

    let sum = reduce_sum(&evens);
    emit(StageReport::Reduced { sum })?;

    Ok(PipelineRun {
        created: created.len(),
        mapped: mapped.len(),
        filtered: evens.len(),
        sum,
    })
}

/// Run every stage over `len` elements and collect the reports.
pub fn run_pipeline(len: usize) -> PipelineRun {
    match drive(len, |_| Ok::<(), Infallible>(())) {
        Ok(run) => run,
        Err(never) => match never {},
    }
}

/// Run the array program, writing each stage's line right after it completes.
pub fn run<W: Write>(out: &mut W) -> Result<()> {
    drive(ARRAY_LENGTH, |report| -> Result<()> {
        writeln!(out, "{report}")?;
        Ok(())
    })?;
    Ok(())
}
