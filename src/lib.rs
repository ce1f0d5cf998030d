//! # microbench
//!
//! Three fixed-size micro-benchmark programs: a summation loop, a repeated
//! recursive factorial, and an array map/filter/reduce pipeline.
//!
//! ## Usage
//!
//! ```bash
//! bench_loop
//! bench_factorial
//! bench_array
//! microbench [-v] <loop|factorial|array|all>
//! ```
//!
//! ## Modules
//!
//! - `programs` - The computations and their report lines
//! - `cli` - Argument parsing, tracing setup and dispatch for the binaries
//! - `error` - Library error type
pub mod cli;
pub mod error;
pub mod programs;


pub use error::{BenchError, Result};
pub use programs::Program;
