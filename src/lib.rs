//! Randomized seating chart generation with local-search repair
//!
//! Identifiers split into two gender groups are seated on a rectangular grid
//! with permanently empty seats. Two anchor identifiers must be surrounded
//! only by a configured gender, and the number of same-gender neighbors is
//! reduced by greedy pairwise swaps.

#![forbid(unsafe_code)]

/// Anchor placement, filling, repair, optimization and the attempt driver
pub mod algorithm;
/// Verification and statistics for finished seating charts
pub mod analysis;
/// Configuration defaults, errors, CLI and chart output
pub mod io;
/// Grid topology and seating storage
pub mod spatial;

pub use algorithm::executor::{GenerationConfig, SeatingGenerator, SeatingPlan, generate_seating};
pub use io::error::{Result, SeatingError};
