//! Seating chart storage backed by a 2D array of optional identifiers

use ndarray::Array2;

use crate::spatial::topology::Cell;

/// One identifier slot per grid cell; `None` marks blocked or unfilled seats
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Seating {
    seats: Array2<Option<u32>>,
}

impl Seating {
    /// Create an empty seating with the given dimensions
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            seats: Array2::from_elem((rows, cols), None),
        }
    }

    /// Number of rows
    pub fn rows(&self) -> usize {
        self.seats.nrows()
    }

    /// Number of columns
    pub fn cols(&self) -> usize {
        self.seats.ncols()
    }

    /// Identifier at a cell, `None` if empty or out of bounds
    pub fn get(&self, cell: Cell) -> Option<u32> {
        self.seats.get((cell.row, cell.col)).copied().flatten()
    }

    /// Whether an in-bounds cell holds no identifier
    pub fn is_empty_at(&self, cell: Cell) -> bool {
        self.seats
            .get((cell.row, cell.col))
            .is_some_and(Option::is_none)
    }

    /// Put an identifier at a cell; out-of-bounds cells are ignored
    pub fn place(&mut self, cell: Cell, identifier: u32) {
        if let Some(slot) = self.seats.get_mut((cell.row, cell.col)) {
            *slot = Some(identifier);
        }
    }

    /// Exchange the contents of two cells
    ///
    /// Does nothing if either cell is out of bounds.
    pub fn swap(&mut self, a: Cell, b: Cell) {
        let (Some(first), Some(second)) = (
            self.seats.get((a.row, a.col)).copied(),
            self.seats.get((b.row, b.col)).copied(),
        ) else {
            return;
        };
        if let Some(slot) = self.seats.get_mut((a.row, a.col)) {
            *slot = second;
        }
        if let Some(slot) = self.seats.get_mut((b.row, b.col)) {
            *slot = first;
        }
    }

    /// Cell currently holding an identifier
    pub fn locate(&self, identifier: u32) -> Option<Cell> {
        self.seats
            .indexed_iter()
            .find(|(_, slot)| **slot == Some(identifier))
            .map(|((row, col), _)| Cell::new(row, col))
    }

    /// All placed identifiers in row-major order
    pub fn identifiers(&self) -> Vec<u32> {
        self.seats.iter().filter_map(|slot| *slot).collect()
    }

    /// Copy out as nested rows
    pub fn to_rows(&self) -> Vec<Vec<Option<u32>>> {
        self.seats.rows().into_iter().map(|row| row.to_vec()).collect()
    }
}
