//! Identifier partitioning into gender groups and randomized draw pools

use std::fmt;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::algorithm::bitset::IdentifierSet;
use crate::spatial::SeatGrid;

/// One of the two identifier groups
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Gender {
    /// Identifiers at or below the boundary
    Male,
    /// Identifiers above the boundary
    Female,
}

impl Gender {
    /// The other group
    pub const fn opposite(self) -> Self {
        match self {
            Self::Male => Self::Female,
            Self::Female => Self::Male,
        }
    }

    /// Preferred group for a checkerboard parity
    pub const fn for_parity(even: bool) -> Self {
        if even { Self::Male } else { Self::Female }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Male => write!(f, "male"),
            Self::Female => write!(f, "female"),
        }
    }
}

/// Disjoint male and female identifier groups for one seat grid
///
/// Identifiers run from 1 to `identifier_count`; any identifier equal to a
/// blocked seat number is never issued.
#[derive(Debug, Clone)]
pub struct Roster {
    male: IdentifierSet,
    female: IdentifierSet,
    identifier_count: u32,
    gender_boundary: u32,
}

impl Roster {
    /// Partition `1..=identifier_count` at `gender_boundary`, skipping blocked seat numbers
    pub fn new(identifier_count: u32, gender_boundary: u32, grid: &SeatGrid) -> Self {
        let boundary = gender_boundary.min(identifier_count);
        let mut male = IdentifierSet::from_range(identifier_count, 1..=boundary);
        let mut female = IdentifierSet::from_range(
            identifier_count,
            boundary.saturating_add(1)..=identifier_count,
        );

        for identifier in 1..=identifier_count {
            if grid.is_blocked_seat(identifier as usize) {
                male.remove(identifier);
                female.remove(identifier);
            }
        }

        Self {
            male,
            female,
            identifier_count,
            gender_boundary,
        }
    }

    /// Highest identifier in the range
    pub const fn identifier_count(&self) -> u32 {
        self.identifier_count
    }

    /// Threshold separating the groups
    pub const fn gender_boundary(&self) -> u32 {
        self.gender_boundary
    }

    /// Group membership of an issued identifier
    pub fn gender_of(&self, identifier: u32) -> Option<Gender> {
        if self.male.contains(identifier) {
            Some(Gender::Male)
        } else if self.female.contains(identifier) {
            Some(Gender::Female)
        } else {
            None
        }
    }

    /// Whether the identifier belongs to the given group
    pub fn is_gender(&self, identifier: u32, gender: Gender) -> bool {
        self.group(gender).contains(identifier)
    }

    /// All issued identifiers of one group
    pub const fn group(&self, gender: Gender) -> &IdentifierSet {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Every issued identifier in ascending order
    pub fn identifiers(&self) -> Vec<u32> {
        let mut all: Vec<u32> = self.male.iter().chain(self.female.iter()).collect();
        all.sort_unstable();
        all
    }

    /// Number of issued identifiers
    pub fn len(&self) -> usize {
        self.male.count() + self.female.count()
    }

    /// Whether no identifier is issued
    pub fn is_empty(&self) -> bool {
        self.male.is_empty() && self.female.is_empty()
    }

    /// Shuffled pool of one group minus `excluding`, ready for popping
    pub fn shuffled_pool<R: Rng + ?Sized>(
        &self,
        gender: Gender,
        excluding: &[u32],
        rng: &mut R,
    ) -> Pool {
        let mut remaining: Vec<u32> = self
            .group(gender)
            .iter()
            .filter(|identifier| !excluding.contains(identifier))
            .collect();
        remaining.shuffle(rng);
        Pool { gender, remaining }
    }
}

/// Randomly ordered supply of not-yet-seated identifiers of one gender
#[derive(Debug, Clone)]
pub struct Pool {
    gender: Gender,
    remaining: Vec<u32>,
}

impl Pool {
    /// Gender of every identifier in the pool
    pub const fn gender(&self) -> Gender {
        self.gender
    }

    /// Take the next identifier
    pub fn pop(&mut self) -> Option<u32> {
        self.remaining.pop()
    }

    /// Identifiers left
    pub fn len(&self) -> usize {
        self.remaining.len()
    }

    /// Whether the pool is drained
    pub fn is_empty(&self) -> bool {
        self.remaining.is_empty()
    }

    /// Remaining identifiers in draw order reversed
    pub fn as_slice(&self) -> &[u32] {
        &self.remaining
    }
}

/// The male and female pools of one attempt
#[derive(Debug, Clone)]
pub struct GenderPools {
    male: Pool,
    female: Pool,
}

impl GenderPools {
    /// Shuffle both groups, leaving out `excluding`
    pub fn shuffled<R: Rng + ?Sized>(roster: &Roster, excluding: &[u32], rng: &mut R) -> Self {
        Self {
            male: roster.shuffled_pool(Gender::Male, excluding, rng),
            female: roster.shuffled_pool(Gender::Female, excluding, rng),
        }
    }

    /// Pool of one gender
    pub const fn get(&self, gender: Gender) -> &Pool {
        match gender {
            Gender::Male => &self.male,
            Gender::Female => &self.female,
        }
    }

    /// Mutable pool of one gender
    pub const fn get_mut(&mut self, gender: Gender) -> &mut Pool {
        match gender {
            Gender::Male => &mut self.male,
            Gender::Female => &mut self.female,
        }
    }

    /// Pop from the preferred pool, falling back to the other one
    pub fn draw_preferring(&mut self, preferred: Gender) -> Option<u32> {
        self.get_mut(preferred)
            .pop()
            .or_else(|| self.get_mut(preferred.opposite()).pop())
    }

    /// Identifiers left across both pools
    pub fn remaining(&self) -> usize {
        self.male.len() + self.female.len()
    }
}
