//! Swap-based repair of anchor neighborhoods
//!
//! After the checkerboard fill, neighbors of an anchor may hold the wrong
//! gender. Each repair round moves at most one offender per anchor out of
//! the neighborhood by swapping it with the first suitable seat found in
//! row-major order.

use crate::algorithm::anchors::AnchorSite;
use crate::algorithm::roster::{Gender, Roster};
use crate::spatial::{Cell, SeatGrid, Seating};

/// Summary of one repair run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RepairOutcome {
    /// Rounds started
    pub iterations: usize,
    /// Swaps performed
    pub swaps: usize,
    /// Whether every anchor neighborhood was consistent at the end
    pub satisfied: bool,
}

/// Whether every neighbor of `cell` holds an identifier of `gender`
///
/// Empty neighbors count as violations.
pub fn neighborhood_consistent(
    grid: &SeatGrid,
    roster: &Roster,
    seating: &Seating,
    cell: Cell,
    gender: Gender,
) -> bool {
    violating_neighbors(grid, roster, seating, cell, gender).is_empty()
}

/// Neighbors of `cell` that are empty or hold the other gender, in neighbor order
pub fn violating_neighbors(
    grid: &SeatGrid,
    roster: &Roster,
    seating: &Seating,
    cell: Cell,
    gender: Gender,
) -> Vec<Cell> {
    grid.neighbors(cell)
        .iter()
        .copied()
        .filter(|&neighbor| {
            !seating
                .get(neighbor)
                .is_some_and(|identifier| roster.is_gender(identifier, gender))
        })
        .collect()
}

/// Total violating neighbor cells across all anchor sites
pub fn count_anchor_violations(
    grid: &SeatGrid,
    roster: &Roster,
    seating: &Seating,
    sites: &[AnchorSite],
) -> usize {
    sites
        .iter()
        .map(|site| violating_neighbors(grid, roster, seating, site.cell, site.neighborhood).len())
        .sum()
}

/// Run bounded repair rounds until every anchor neighborhood is consistent
///
/// Anchor cells are never moved. Never fails; an unsatisfied outcome is left
/// for the caller's final validity check.
pub fn repair_anchor_neighborhoods(
    grid: &SeatGrid,
    roster: &Roster,
    seating: &mut Seating,
    sites: &[AnchorSite],
    max_iterations: usize,
) -> RepairOutcome {
    let pinned: Vec<Cell> = sites.iter().map(|site| site.cell).collect();
    let mut outcome = RepairOutcome::default();

    for _ in 0..max_iterations {
        let pending: Vec<&AnchorSite> = sites
            .iter()
            .filter(|site| {
                !neighborhood_consistent(grid, roster, seating, site.cell, site.neighborhood)
            })
            .collect();
        if pending.is_empty() {
            outcome.satisfied = true;
            return outcome;
        }

        outcome.iterations += 1;
        for site in pending {
            if fix_one_violation(grid, roster, seating, site, &pinned) {
                outcome.swaps += 1;
            }
        }
    }

    outcome.satisfied = sites.iter().all(|site| {
        neighborhood_consistent(grid, roster, seating, site.cell, site.neighborhood)
    });
    outcome
}

/// Swap the first fixable offender around `site` with a seat of the required gender
fn fix_one_violation(
    grid: &SeatGrid,
    roster: &Roster,
    seating: &mut Seating,
    site: &AnchorSite,
    pinned: &[Cell],
) -> bool {
    let neighborhood = grid.neighbors(site.cell);

    for offender in violating_neighbors(grid, roster, seating, site.cell, site.neighborhood) {
        if pinned.contains(&offender) {
            continue;
        }
        let partner = grid.valid_cells().find(|&candidate| {
            candidate != offender
                && !pinned.contains(&candidate)
                && !neighborhood.contains(&candidate)
                && seating
                    .get(candidate)
                    .is_some_and(|identifier| roster.is_gender(identifier, site.neighborhood))
        });

        if let Some(partner) = partner {
            seating.swap(offender, partner);
            return true;
        }
    }

    false
}
