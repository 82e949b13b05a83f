//! Tests for the 1-based identifier bitset

#[cfg(test)]
mod tests {
    use seatplan::algorithm::bitset::IdentifierSet;

    // Tests a fresh set holds nothing
    // Verified by initializing every bit to one
    #[test]
    fn test_new_is_empty() {
        let set = IdentifierSet::new(10);
        assert!(set.is_empty());
        assert_eq!(set.count(), 0);
        assert!(!set.contains(1));
    }

    // Tests insertion uses 1-based identifiers and ignores out-of-range ones
    // Verified by storing at the identifier index without the offset
    #[test]
    fn test_insert_and_contains() {
        let mut set = IdentifierSet::new(10);
        set.insert(1);
        set.insert(10);
        set.insert(0);
        set.insert(11);

        assert!(set.contains(1));
        assert!(set.contains(10));
        assert!(!set.contains(0));
        assert!(!set.contains(11));
        assert_eq!(set.count(), 2);
    }

    // Tests removal clears only the given identifier
    // Verified by clearing the neighboring bit
    #[test]
    fn test_remove() {
        let mut set = IdentifierSet::from_range(5, 1..=5);
        set.remove(3);
        set.remove(99);
        assert_eq!(set.to_vec(), vec![1, 2, 4, 5]);
    }

    // Tests ranges are clamped to capacity
    // Verified by growing the set past capacity
    #[test]
    fn test_from_range_clamps() {
        let set = IdentifierSet::from_range(6, 4..=9);
        assert_eq!(set.to_vec(), vec![4, 5, 6]);
        assert!(IdentifierSet::from_range(6, 5..=4).is_empty());
    }

    // Tests iteration is ascending
    // Verified by iterating in insertion order
    #[test]
    fn test_iter_ascending() {
        let mut set = IdentifierSet::new(20);
        for identifier in [17, 3, 9] {
            set.insert(identifier);
        }
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![3, 9, 17]);
    }

    // Tests disjointness between gender-like ranges
    // Verified by comparing counts instead of members
    #[test]
    fn test_is_disjoint() {
        let low = IdentifierSet::from_range(42, 1..=21);
        let high = IdentifierSet::from_range(42, 22..=42);
        let overlap = IdentifierSet::from_range(42, 21..=22);

        assert!(low.is_disjoint(&high));
        assert!(!low.is_disjoint(&overlap));
        assert!(!high.is_disjoint(&overlap));
    }

    // Tests display lists the members
    // Verified by printing the raw bits
    #[test]
    fn test_display() {
        let set = IdentifierSet::from_range(4, 2..=3);
        assert_eq!(set.to_string(), "IdentifierSet(2 identifiers: [2, 3])");
    }
}
