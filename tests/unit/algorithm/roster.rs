//! Tests for gender partitioning and shuffled pools

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use seatplan::algorithm::roster::{Gender, GenderPools, Roster};
    use seatplan::spatial::SeatGrid;

    fn classroom() -> (SeatGrid, Roster) {
        let grid = SeatGrid::new(7, 6, &[30, 31, 35]).unwrap();
        let roster = Roster::new(42, 21, &grid);
        (grid, roster)
    }

    // Tests blocked seat numbers are never issued
    // Verified by partitioning without consulting the grid
    #[test]
    fn test_partition_skips_blocked_numbers() {
        let (grid, roster) = classroom();

        assert_eq!(roster.len(), grid.valid_cell_count());
        assert_eq!(roster.group(Gender::Male).count(), 21);
        assert_eq!(roster.group(Gender::Female).count(), 18);
        for blocked in [30, 31, 35] {
            assert_eq!(roster.gender_of(blocked), None);
        }
        assert!(roster.identifiers().windows(2).all(|pair| pair[0] < pair[1]));
    }

    // Tests the boundary identifier is male and the next one female
    // Verified by using a strict comparison at the boundary
    #[test]
    fn test_gender_of() {
        let (_, roster) = classroom();

        assert_eq!(roster.gender_of(13), Some(Gender::Male));
        assert_eq!(roster.gender_of(21), Some(Gender::Male));
        assert_eq!(roster.gender_of(22), Some(Gender::Female));
        assert_eq!(roster.gender_of(42), Some(Gender::Female));
        assert_eq!(roster.gender_of(0), None);
        assert_eq!(roster.gender_of(43), None);
        assert!(roster.is_gender(40, Gender::Female));
        assert!(!roster.is_gender(40, Gender::Male));
    }

    // Tests a boundary at the top of the range leaves the female group empty
    // Verified by starting the female range at the boundary itself
    #[test]
    fn test_boundary_at_identifier_count() {
        let grid = SeatGrid::new(3, 3, &[]).unwrap();
        let roster = Roster::new(9, 9, &grid);

        assert_eq!(roster.group(Gender::Male).count(), 9);
        assert!(roster.group(Gender::Female).is_empty());
    }

    // Tests the two groups never share an identifier
    // Verified by including the boundary in both ranges
    #[test]
    fn test_groups_disjoint() {
        let (_, roster) = classroom();
        assert!(
            roster
                .group(Gender::Male)
                .is_disjoint(roster.group(Gender::Female))
        );
    }

    // Tests pools hold exactly the group minus exclusions
    // Verified by forgetting to filter exclusions
    #[test]
    fn test_shuffled_pool_contents() {
        let (_, roster) = classroom();
        let mut rng = StdRng::seed_from_u64(3);
        let pool = roster.shuffled_pool(Gender::Male, &[13, 21], &mut rng);

        assert_eq!(pool.gender(), Gender::Male);
        assert_eq!(pool.len(), 19);
        assert!(!pool.as_slice().contains(&13));
        assert!(!pool.as_slice().contains(&21));

        let mut sorted = pool.as_slice().to_vec();
        sorted.sort_unstable();
        let expected: Vec<u32> = (1..=21).filter(|id| *id != 13 && *id != 21).collect();
        assert_eq!(sorted, expected);
    }

    // Tests equal seeds give equal draw orders
    // Verified by seeding one pool from OS entropy
    #[test]
    fn test_shuffle_reproducible() {
        let (_, roster) = classroom();
        let first = roster.shuffled_pool(Gender::Female, &[], &mut StdRng::seed_from_u64(11));
        let second = roster.shuffled_pool(Gender::Female, &[], &mut StdRng::seed_from_u64(11));
        assert_eq!(first.as_slice(), second.as_slice());
    }

    // Tests drawing falls back to the other pool once the preferred one is drained
    // Verified by returning None when the preferred pool is empty
    #[test]
    fn test_draw_preferring_falls_back() {
        let grid = SeatGrid::new(3, 3, &[]).unwrap();
        let roster = Roster::new(9, 4, &grid);
        let mut pools = GenderPools::shuffled(&roster, &[], &mut StdRng::seed_from_u64(5));

        for _ in 0..4 {
            let drawn = pools.draw_preferring(Gender::Male).unwrap();
            assert_eq!(roster.gender_of(drawn), Some(Gender::Male));
        }
        assert!(pools.get(Gender::Male).is_empty());

        let fallback = pools.draw_preferring(Gender::Male).unwrap();
        assert_eq!(roster.gender_of(fallback), Some(Gender::Female));
        assert_eq!(pools.remaining(), 4);
    }

    // Tests the gender helpers
    // Verified by swapping the parity mapping
    #[test]
    fn test_gender_helpers() {
        assert_eq!(Gender::Male.opposite(), Gender::Female);
        assert_eq!(Gender::Female.opposite(), Gender::Male);
        assert_eq!(Gender::for_parity(true), Gender::Male);
        assert_eq!(Gender::for_parity(false), Gender::Female);
        assert_eq!(Gender::Female.to_string(), "female");
    }
}
