use crate::algorithm::roster::{Gender, GenderPools};
use crate::io::error::{Result, SeatingError};
use crate::spatial::{SeatGrid, Seating};

/// Fill every empty valid seat using checkerboard gender preference
///
/// Visits cells row-major. Even `(row + col)` seats draw male first, odd
/// seats draw female first, each falling back to the other pool once its
/// preferred one is drained. Returns the number of seats filled.
///
/// # Errors
///
/// Returns `PoolExhaustion` if both pools are empty while seats remain
pub fn fill_checkerboard(
    grid: &SeatGrid,
    seating: &mut Seating,
    pools: &mut GenderPools,
) -> Result<usize> {
    let empty: Vec<_> = grid
        .valid_cells()
        .filter(|&cell| seating.is_empty_at(cell))
        .collect();

    for (filled, &cell) in empty.iter().enumerate() {
        let preferred = Gender::for_parity(cell.is_even());
        let Some(identifier) = pools.draw_preferring(preferred) else {
            return Err(SeatingError::PoolExhaustion {
                gender: preferred,
                required: empty.len() - filled,
                available: 0,
            });
        };
        seating.place(cell, identifier);
    }

    Ok(empty.len())
}
