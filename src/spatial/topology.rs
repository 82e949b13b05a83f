//! Seat grid topology with a blocked-seat mask and precomputed adjacency
//!
//! Seats are addressed either as `(row, col)` cells or as 1-based seat numbers
//! counted row-major. Blocked seats are never valid and never appear as
//! neighbors.

use bitvec::prelude::*;

use crate::io::configuration::MAX_SEAT_COUNT;
use crate::io::error::{Result, invalid_parameter};

/// A grid coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    /// Zero-based row
    pub row: usize,
    /// Zero-based column
    pub col: usize,
}

impl Cell {
    /// Create a cell from row and column
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Whether the cells differ by more than `distance` rows or more than `distance` columns
    pub const fn separated_from(&self, other: Self, distance: usize) -> bool {
        self.row.abs_diff(other.row) > distance || self.col.abs_diff(other.col) > distance
    }

    /// Whether the checkerboard parity `(row + col)` is even
    pub const fn is_even(&self) -> bool {
        (self.row + self.col) % 2 == 0
    }
}

/// Rectangular seat grid with holes
#[derive(Debug, Clone)]
pub struct SeatGrid {
    rows: usize,
    cols: usize,
    /// Indexed by `seat_number - 1`
    blocked: BitVec,
    /// Neighbor lists indexed by `seat_number - 1`
    adjacency: Vec<Vec<Cell>>,
}

impl SeatGrid {
    /// Build a grid and precompute its adjacency lists
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if a dimension is zero, the grid exceeds
    /// `MAX_SEAT_COUNT` seats, or a blocked seat number lies outside
    /// `1..=rows * cols`
    pub fn new(rows: usize, cols: usize, blocked_seats: &[usize]) -> Result<Self> {
        if rows == 0 || cols == 0 {
            return Err(invalid_parameter(
                "grid dimensions",
                &format!("{rows}x{cols}"),
                &"both dimensions must be positive",
            ));
        }

        let Some(seat_count) = rows
            .checked_mul(cols)
            .filter(|&count| count <= MAX_SEAT_COUNT)
        else {
            return Err(invalid_parameter(
                "grid dimensions",
                &format!("{rows}x{cols}"),
                &format!("at most {MAX_SEAT_COUNT} seats are supported"),
            ));
        };
        let mut blocked = bitvec![0; seat_count];
        for &seat in blocked_seats {
            if seat == 0 || seat > seat_count {
                return Err(invalid_parameter(
                    "blocked seat",
                    &seat,
                    &format!("must lie within 1..={seat_count}"),
                ));
            }
            blocked.set(seat - 1, true);
        }

        let mut grid = Self {
            rows,
            cols,
            blocked,
            adjacency: Vec::new(),
        };
        let adjacency = (0..seat_count)
            .map(|index| grid.scan_neighbors(Cell::new(index / cols, index % cols)))
            .collect();
        grid.adjacency = adjacency;

        Ok(grid)
    }

    /// Number of rows
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// 1-based row-major seat number of an in-bounds cell
    pub const fn seat_number(&self, cell: Cell) -> usize {
        cell.row * self.cols + cell.col + 1
    }

    /// Cell for a 1-based seat number, if it lies on the grid
    pub const fn cell_of(&self, seat_number: usize) -> Option<Cell> {
        if seat_number == 0 || seat_number > self.rows * self.cols {
            return None;
        }
        let index = seat_number - 1;
        Some(Cell::new(index / self.cols, index % self.cols))
    }

    /// Whether the cell lies inside the rectangle, blocked or not
    pub const fn in_bounds(&self, cell: Cell) -> bool {
        cell.row < self.rows && cell.col < self.cols
    }

    /// Whether a seat number is in the blocked set
    pub fn is_blocked_seat(&self, seat_number: usize) -> bool {
        seat_number > 0 && self.blocked.get(seat_number - 1).as_deref() == Some(&true)
    }

    /// Whether the cell is in bounds and not blocked
    pub fn is_valid(&self, cell: Cell) -> bool {
        self.in_bounds(cell) && !self.is_blocked_seat(self.seat_number(cell))
    }

    /// Valid cells at Chebyshev distance 1, in row-major offset order
    ///
    /// Out-of-bounds cells have no neighbors.
    pub fn neighbors(&self, cell: Cell) -> &[Cell] {
        if !self.in_bounds(cell) {
            return &[];
        }
        self.adjacency
            .get(self.seat_number(cell) - 1)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Whether two cells are adjacent
    pub fn are_adjacent(&self, a: Cell, b: Cell) -> bool {
        self.neighbors(a).contains(&b)
    }

    /// All valid cells in row-major order
    pub fn valid_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows)
            .flat_map(move |row| (0..self.cols).map(move |col| Cell::new(row, col)))
            .filter(|&cell| self.is_valid(cell))
    }

    /// Valid cells off the outer border, in row-major order
    pub fn interior_cells(&self) -> Vec<Cell> {
        self.valid_cells()
            .filter(|cell| {
                cell.row >= 1
                    && cell.row + 1 < self.rows
                    && cell.col >= 1
                    && cell.col + 1 < self.cols
            })
            .collect()
    }

    /// Number of seats, blocked ones included
    pub const fn seat_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Number of seats that can hold an identifier
    pub fn valid_cell_count(&self) -> usize {
        self.rows * self.cols - self.blocked.count_ones()
    }

    fn scan_neighbors(&self, cell: Cell) -> Vec<Cell> {
        let mut neighbors = Vec::with_capacity(8);
        for dr in -1_isize..=1 {
            for dc in -1_isize..=1 {
                if dr == 0 && dc == 0 {
                    continue;
                }
                let (Some(row), Some(col)) = (
                    cell.row.checked_add_signed(dr),
                    cell.col.checked_add_signed(dc),
                ) else {
                    continue;
                };
                let candidate = Cell::new(row, col);
                if self.is_valid(candidate) {
                    neighbors.push(candidate);
                }
            }
        }
        neighbors
    }
}
