//! Hill-climbing reduction of same-gender adjacency
//!
//! Each pass tries every ordered pair of movable seats, keeping a swap only
//! when it strictly lowers the combined same-gender neighbor count of the two
//! seats involved. Swaps that would add a violation around an anchor are
//! never kept. Iteration stops at the first pass without an accepted swap.

use crate::algorithm::anchors::AnchorSite;
use crate::algorithm::repair::violating_neighbors;
use crate::algorithm::roster::Roster;
use crate::spatial::{Cell, SeatGrid, Seating};

/// Summary of one optimization run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OptimizationOutcome {
    /// Passes started
    pub passes: usize,
    /// Swaps kept across all passes
    pub accepted_swaps: usize,
    /// Whether the last pass found no improving swap
    pub converged: bool,
}

/// Number of neighbors sharing the gender of the identifier at `cell`
///
/// Empty seats and unissued identifiers score zero.
pub fn same_gender_adjacent_count(
    grid: &SeatGrid,
    roster: &Roster,
    seating: &Seating,
    cell: Cell,
) -> usize {
    let Some(gender) = seating
        .get(cell)
        .and_then(|identifier| roster.gender_of(identifier))
    else {
        return 0;
    };

    grid.neighbors(cell)
        .iter()
        .filter(|&&neighbor| {
            seating
                .get(neighbor)
                .is_some_and(|identifier| roster.is_gender(identifier, gender))
        })
        .count()
}

/// Sum of `same_gender_adjacent_count` over every valid seat
///
/// Each same-gender adjacent pair contributes twice.
pub fn total_same_gender_adjacency(grid: &SeatGrid, roster: &Roster, seating: &Seating) -> usize {
    grid.valid_cells()
        .map(|cell| same_gender_adjacent_count(grid, roster, seating, cell))
        .sum()
}

/// Combined score of two seats, as compared when evaluating a swap
pub fn pair_score(grid: &SeatGrid, roster: &Roster, seating: &Seating, a: Cell, b: Cell) -> usize {
    same_gender_adjacent_count(grid, roster, seating, a)
        + same_gender_adjacent_count(grid, roster, seating, b)
}

/// Violations around the anchors whose neighborhood contains `a` or `b`
fn violations_touching(
    grid: &SeatGrid,
    roster: &Roster,
    seating: &Seating,
    sites: &[AnchorSite],
    a: Cell,
    b: Cell,
) -> usize {
    sites
        .iter()
        .filter(|site| {
            let neighborhood = grid.neighbors(site.cell);
            neighborhood.contains(&a) || neighborhood.contains(&b)
        })
        .map(|site| violating_neighbors(grid, roster, seating, site.cell, site.neighborhood).len())
        .sum()
}

/// Swap `a` and `b` if doing so strictly lowers their combined score
///
/// The swap is also reverted when it adds a violation around any of
/// `sites`. Returns whether the swap was kept.
pub fn try_improving_swap(
    grid: &SeatGrid,
    roster: &Roster,
    seating: &mut Seating,
    sites: &[AnchorSite],
    a: Cell,
    b: Cell,
) -> bool {
    let before = pair_score(grid, roster, seating, a, b);
    let violations_before = violations_touching(grid, roster, seating, sites, a, b);
    seating.swap(a, b);
    let after = pair_score(grid, roster, seating, a, b);

    if after < before && violations_touching(grid, roster, seating, sites, a, b) <= violations_before
    {
        true
    } else {
        seating.swap(a, b);
        false
    }
}

/// Greedy pairwise-swap optimization over all valid seats except the anchors
pub fn optimize_seating(
    grid: &SeatGrid,
    roster: &Roster,
    seating: &mut Seating,
    sites: &[AnchorSite],
    max_iterations: usize,
) -> OptimizationOutcome {
    let movable: Vec<Cell> = grid
        .valid_cells()
        .filter(|&cell| sites.iter().all(|site| site.cell != cell))
        .collect();
    let mut outcome = OptimizationOutcome::default();

    for _ in 0..max_iterations {
        outcome.passes += 1;
        let mut improved = false;

        for &first in &movable {
            for &second in &movable {
                if first != second
                    && try_improving_swap(grid, roster, seating, sites, first, second)
                {
                    outcome.accepted_swaps += 1;
                    improved = true;
                }
            }
        }

        if !improved {
            outcome.converged = true;
            break;
        }
    }

    outcome
}
