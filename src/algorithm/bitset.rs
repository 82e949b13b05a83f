use bitvec::prelude::*;
use std::fmt;

/// Fixed-size bitset for tracking identifier membership in gender groups
///
/// Uses 1-based indexing to match seat identifiers throughout the system.
/// Provides O(1) membership testing and ordered iteration.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IdentifierSet {
    bits: BitVec,
    capacity: u32,
}

impl IdentifierSet {
    /// Create a set with no identifiers present
    pub fn new(capacity: u32) -> Self {
        Self {
            bits: bitvec![0; capacity as usize],
            capacity,
        }
    }

    /// Create a set containing every identifier in `range`, clamped to capacity
    pub fn from_range(capacity: u32, range: std::ops::RangeInclusive<u32>) -> Self {
        let mut set = Self::new(capacity);
        for identifier in range {
            set.insert(identifier);
        }
        set
    }

    /// Insert an identifier
    ///
    /// Takes 1-based identifiers, storing at index-1 internally
    pub fn insert(&mut self, identifier: u32) {
        if identifier > 0 && identifier <= self.capacity {
            self.bits.set(identifier as usize - 1, true);
        }
    }

    /// Remove an identifier if present
    pub fn remove(&mut self, identifier: u32) {
        if identifier > 0 && identifier <= self.capacity {
            self.bits.set(identifier as usize - 1, false);
        }
    }

    /// Test identifier membership
    pub fn contains(&self, identifier: u32) -> bool {
        if identifier > 0 {
            self.bits.get(identifier as usize - 1).as_deref() == Some(&true)
        } else {
            false
        }
    }

    /// Test if no identifiers are present
    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Count identifiers in the set
    pub fn count(&self) -> usize {
        self.bits.count_ones()
    }

    /// Iterate identifiers in ascending order
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.bits.iter_ones().map(|index| index as u32 + 1)
    }

    /// Extract all identifiers as a vector
    pub fn to_vec(&self) -> Vec<u32> {
        self.iter().collect()
    }

    /// Test whether the two sets share any identifier
    pub fn is_disjoint(&self, other: &Self) -> bool {
        self.bits
            .iter_ones()
            .all(|index| other.bits.get(index).as_deref() != Some(&true))
    }
}

impl fmt::Display for IdentifierSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "IdentifierSet({} identifiers: {:?})",
            self.count(),
            self.to_vec()
        )
    }
}
