//! Post-generation analysis of seating charts

/// Completeness verification and adjacency statistics
pub mod metrics;
