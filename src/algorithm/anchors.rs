//! Anchor placement and neighborhood seeding
//!
//! The primary anchor lands on a random interior seat. The secondary anchor
//! lands on a random interior seat far enough away from it. Each anchor's
//! neighbors are then seeded from the pool of the gender that anchor requires
//! around it.

use rand::Rng;
use rand::seq::IndexedRandom;

use crate::algorithm::roster::{Gender, GenderPools, Roster};
use crate::io::error::{Result, SeatingError};
use crate::spatial::{Cell, SeatGrid, Seating};

/// An identifier whose every neighbor must belong to `neighborhood`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorSpec {
    /// Identifier seated at the anchor cell
    pub identifier: u32,
    /// Gender required of all neighbors
    pub neighborhood: Gender,
}

impl AnchorSpec {
    /// Create an anchor requirement
    pub const fn new(identifier: u32, neighborhood: Gender) -> Self {
        Self {
            identifier,
            neighborhood,
        }
    }
}

/// An anchor requirement bound to the cell it occupies in one attempt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorSite {
    /// Where the anchor sits
    pub cell: Cell,
    /// Gender required of all neighbors
    pub neighborhood: Gender,
}

/// Cells chosen for both anchors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnchorCells {
    /// Site of the primary anchor
    pub primary: AnchorSite,
    /// Site of the secondary anchor
    pub secondary: AnchorSite,
}

impl AnchorCells {
    /// Both sites, primary first
    pub const fn sites(&self) -> [AnchorSite; 2] {
        [self.primary, self.secondary]
    }
}

/// Seat both anchors and fill their neighborhoods
///
/// Draws both anchor identifiers out of the shuffled pools and returns the
/// pools with everything still unplaced.
///
/// # Errors
///
/// - `InfeasibleAnchorSeparation` if no interior seat exists or none is far
///   enough from the primary anchor
/// - `PoolExhaustion` if a neighborhood needs more identifiers than its pool holds
pub fn place_anchors<R: Rng + ?Sized>(
    grid: &SeatGrid,
    roster: &Roster,
    seating: &mut Seating,
    anchors: [AnchorSpec; 2],
    min_separation: usize,
    rng: &mut R,
) -> Result<(AnchorCells, GenderPools)> {
    let [primary, secondary] = anchors;
    let interior = grid.interior_cells();

    let primary_cell = *interior
        .choose(rng)
        .ok_or(SeatingError::InfeasibleAnchorSeparation { attempt: 0 })?;

    let separated: Vec<Cell> = interior
        .iter()
        .copied()
        .filter(|cell| cell.separated_from(primary_cell, min_separation))
        .collect();
    let secondary_cell = *separated
        .choose(rng)
        .ok_or(SeatingError::InfeasibleAnchorSeparation { attempt: 0 })?;

    seating.place(primary_cell, primary.identifier);
    seating.place(secondary_cell, secondary.identifier);

    let mut pools = GenderPools::shuffled(
        roster,
        &[primary.identifier, secondary.identifier],
        rng,
    );

    seed_neighborhood(grid, seating, &mut pools, primary_cell, primary.neighborhood)?;
    seed_neighborhood(
        grid,
        seating,
        &mut pools,
        secondary_cell,
        secondary.neighborhood,
    )?;

    let cells = AnchorCells {
        primary: AnchorSite {
            cell: primary_cell,
            neighborhood: primary.neighborhood,
        },
        secondary: AnchorSite {
            cell: secondary_cell,
            neighborhood: secondary.neighborhood,
        },
    };

    Ok((cells, pools))
}

/// Fill every still-empty neighbor of `anchor` from the pool of `gender`
fn seed_neighborhood(
    grid: &SeatGrid,
    seating: &mut Seating,
    pools: &mut GenderPools,
    anchor: Cell,
    gender: Gender,
) -> Result<()> {
    let targets: Vec<Cell> = grid
        .neighbors(anchor)
        .iter()
        .copied()
        .filter(|&cell| seating.is_empty_at(cell))
        .collect();

    let pool = pools.get_mut(gender);
    if targets.len() > pool.len() {
        return Err(SeatingError::PoolExhaustion {
            gender: pool.gender(),
            required: targets.len(),
            available: pool.len(),
        });
    }

    for cell in targets {
        if let Some(identifier) = pool.pop() {
            seating.place(cell, identifier);
        }
    }

    Ok(())
}
