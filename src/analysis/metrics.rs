//! Completeness checks and summary statistics for finished seating charts

use std::collections::HashSet;
use std::fmt;

use crate::algorithm::anchors::{AnchorCells, AnchorSite};
use crate::algorithm::optimization::total_same_gender_adjacency;
use crate::algorithm::repair::violating_neighbors;
use crate::algorithm::roster::{Gender, Roster};
use crate::io::error::{Result, computation_error};
use crate::spatial::{Cell, SeatGrid, Seating};

/// Confirm the seating is a complete assignment of the roster
///
/// Every valid seat must hold an issued identifier, no blocked seat may hold
/// one, and every issued identifier must appear exactly once.
///
/// # Errors
///
/// Returns a `Computation` error naming the first defect found
pub fn verify_complete(grid: &SeatGrid, roster: &Roster, seating: &Seating) -> Result<()> {
    let mut seen = HashSet::new();

    for row in 0..grid.rows() {
        for col in 0..grid.cols() {
            let cell = Cell::new(row, col);
            match (grid.is_valid(cell), seating.get(cell)) {
                (true, None) => {
                    return Err(computation_error(
                        "completeness check",
                        &format!("seat {} is empty", grid.seat_number(cell)),
                    ));
                }
                (false, Some(identifier)) => {
                    return Err(computation_error(
                        "completeness check",
                        &format!(
                            "blocked seat {} holds {identifier}",
                            grid.seat_number(cell)
                        ),
                    ));
                }
                (true, Some(identifier)) => {
                    if roster.gender_of(identifier).is_none() {
                        return Err(computation_error(
                            "completeness check",
                            &format!("identifier {identifier} was never issued"),
                        ));
                    }
                    if !seen.insert(identifier) {
                        return Err(computation_error(
                            "completeness check",
                            &format!("identifier {identifier} is seated twice"),
                        ));
                    }
                }
                (false, None) => {}
            }
        }
    }

    if seen.len() != roster.len() {
        return Err(computation_error(
            "completeness check",
            &format!("{} of {} identifiers seated", seen.len(), roster.len()),
        ));
    }

    Ok(())
}

/// Summary of a seating chart
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatingReport {
    /// Seats holding an identifier
    pub occupied: usize,
    /// Seated male identifiers
    pub male: usize,
    /// Seated female identifiers
    pub female: usize,
    /// Adjacent seat pairs whose occupants share a gender
    pub same_gender_pairs: usize,
    /// Adjacent seat pairs whose occupants differ in gender
    pub mixed_pairs: usize,
    /// Wrong-gender or empty neighbors of the primary anchor
    pub primary_violations: usize,
    /// Wrong-gender or empty neighbors of the secondary anchor
    pub secondary_violations: usize,
}

impl SeatingReport {
    /// Measure a seating against its anchors
    pub fn measure(
        grid: &SeatGrid,
        roster: &Roster,
        seating: &Seating,
        anchors: &AnchorCells,
    ) -> Self {
        let mut male = 0;
        let mut female = 0;
        let mut occupied_pairs = 0;

        for cell in grid.valid_cells() {
            let Some(identifier) = seating.get(cell) else {
                continue;
            };
            match roster.gender_of(identifier) {
                Some(Gender::Male) => male += 1,
                Some(Gender::Female) => female += 1,
                None => {}
            }
            occupied_pairs += grid
                .neighbors(cell)
                .iter()
                .filter(|&&neighbor| seating.get(neighbor).is_some())
                .count();
        }

        let same_gender_pairs = total_same_gender_adjacency(grid, roster, seating) / 2;
        let violations = |site: AnchorSite| {
            violating_neighbors(grid, roster, seating, site.cell, site.neighborhood).len()
        };

        Self {
            occupied: seating.identifiers().len(),
            male,
            female,
            same_gender_pairs,
            mixed_pairs: occupied_pairs / 2 - same_gender_pairs,
            primary_violations: violations(anchors.primary),
            secondary_violations: violations(anchors.secondary),
        }
    }

    /// Whether both anchor neighborhoods are clean
    pub const fn anchors_satisfied(&self) -> bool {
        self.primary_violations == 0 && self.secondary_violations == 0
    }
}

impl fmt::Display for SeatingReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "seated: {} ({} male, {} female)",
            self.occupied, self.male, self.female
        )?;
        writeln!(
            f,
            "adjacent pairs: {} same-gender, {} mixed",
            self.same_gender_pairs, self.mixed_pairs
        )?;
        write!(
            f,
            "anchor violations: primary {}, secondary {}",
            self.primary_violations, self.secondary_violations
        )
    }
}
