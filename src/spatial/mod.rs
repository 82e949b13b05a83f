//! Spatial data structures for the seating grid
//!
//! This module contains spatial-related functionality including:
//! - Grid topology, blocked seats and adjacency
//! - Seating chart storage

/// Seating chart storage and swap primitives
pub mod seating;
/// Grid coordinates, validity and neighbor lookup
pub mod topology;

pub use seating::Seating;
pub use topology::{Cell, SeatGrid};
