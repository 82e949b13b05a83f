//! Tests for PNG export of seating charts

#[cfg(test)]
mod tests {
    use seatplan::algorithm::roster::Roster;
    use seatplan::io::configuration::{FEMALE_COLOR, MALE_COLOR, SEAT_PIXEL_SIZE};
    use seatplan::io::image::export_seating_as_png;
    use seatplan::spatial::{SeatGrid, Seating};

    fn small() -> (SeatGrid, Roster, Seating) {
        let grid = SeatGrid::new(2, 3, &[5]).unwrap();
        let roster = Roster::new(6, 3, &grid);
        let mut seating = Seating::new(2, 3);
        for (cell, identifier) in grid.valid_cells().zip([1, 2, 3, 4, 6]) {
            seating.place(cell, identifier);
        }
        (grid, roster, seating)
    }

    // Tests the exported image has one block per seat, colored by gender
    // Verified by swapping the male and female colors
    #[test]
    fn test_export_dimensions_and_colors() {
        let (grid, roster, seating) = small();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.png");

        export_seating_as_png(&grid, &roster, &seating, &path).unwrap();

        let img = ::image::open(&path).unwrap().to_rgba8();
        assert_eq!(img.width(), 3 * SEAT_PIXEL_SIZE);
        assert_eq!(img.height(), 2 * SEAT_PIXEL_SIZE);

        let center = SEAT_PIXEL_SIZE / 2;
        assert_eq!(img.get_pixel(center, center).0, MALE_COLOR);
        assert_eq!(
            img.get_pixel(2 * SEAT_PIXEL_SIZE + center, SEAT_PIXEL_SIZE + center).0,
            FEMALE_COLOR
        );
        assert_eq!(
            img.get_pixel(SEAT_PIXEL_SIZE + center, SEAT_PIXEL_SIZE + center).0[3],
            0,
            "blocked seat is transparent"
        );
        assert_eq!(img.get_pixel(0, 0).0[3], 0, "gutter is transparent");
    }

    // Tests missing parent directories are created
    // Verified by removing create_dir_all
    #[test]
    fn test_export_creates_parent_dirs() {
        let (grid, roster, seating) = small();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("deeper").join("chart.png");

        export_seating_as_png(&grid, &roster, &seating, &path).unwrap();
        assert!(path.exists());
    }

    // Tests an unsupported extension is reported as an export failure
    // Verified by ignoring the save result
    #[test]
    fn test_export_unknown_format_fails() {
        let (grid, roster, seating) = small();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("chart.unknownformat");

        let result = export_seating_as_png(&grid, &roster, &seating, &path);
        assert!(matches!(
            result,
            Err(seatplan::SeatingError::ImageExport { .. })
        ));
    }
}
