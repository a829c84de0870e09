//! Run records, run comparison and aggregate search statistics.
//!
//! A [`RunRecord`] captures one timed algorithm invocation, a
//! [`ComparisonReport`] lines several of them up and picks the fastest and the
//! cheapest, and [`Stats`] accumulates totals over repeated runs.

mod comparison;
mod record;
mod stats;

pub use comparison::*;
pub use record::*;
pub use stats::*;
