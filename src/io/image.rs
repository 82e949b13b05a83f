//! PNG export of seating charts as gender-colored seat blocks

use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::algorithm::roster::{Gender, Roster};
use crate::io::configuration::{FEMALE_COLOR, MALE_COLOR, SEAT_PIXEL_SIZE, UNASSIGNED_COLOR};
use crate::io::error::{Result, SeatingError};
use crate::spatial::{Cell, SeatGrid, Seating};

// Blocked seats stay transparent; valid seats without an identifier are grey
fn seat_color(grid: &SeatGrid, roster: &Roster, seating: &Seating, cell: Cell) -> Rgba<u8> {
    if !grid.is_valid(cell) {
        return Rgba([0, 0, 0, 0]);
    }
    let rgba = match seating
        .get(cell)
        .and_then(|identifier| roster.gender_of(identifier))
    {
        Some(Gender::Male) => MALE_COLOR,
        Some(Gender::Female) => FEMALE_COLOR,
        None => UNASSIGNED_COLOR,
    };
    Rgba(rgba)
}

/// Export the seating as a PNG with one square block per seat
///
/// # Errors
///
/// Returns an error if:
/// - The grid is too large to address in pixels
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_seating_as_png(
    grid: &SeatGrid,
    roster: &Roster,
    seating: &Seating,
    output_path: &Path,
) -> Result<()> {
    let (Ok(cols), Ok(rows)) = (u32::try_from(grid.cols()), u32::try_from(grid.rows())) else {
        return Err(crate::io::error::invalid_parameter(
            "grid dimensions",
            &format!("{}x{}", grid.rows(), grid.cols()),
            &"too large to export",
        ));
    };

    let img = ImageBuffer::from_fn(cols * SEAT_PIXEL_SIZE, rows * SEAT_PIXEL_SIZE, |x, y| {
        let cell = Cell::new((y / SEAT_PIXEL_SIZE) as usize, (x / SEAT_PIXEL_SIZE) as usize);
        // One-pixel gutter between seats
        if x % SEAT_PIXEL_SIZE == 0 || y % SEAT_PIXEL_SIZE == 0 {
            Rgba([0, 0, 0, 0])
        } else {
            seat_color(grid, roster, seating, cell)
        }
    });

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| SeatingError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| SeatingError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}
