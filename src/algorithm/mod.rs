/// Anchor placement and neighborhood seeding
pub mod anchors;
/// Bitset of 1-based identifiers
pub mod bitset;
/// Attempt driver and generation configuration
pub mod executor;
/// Checkerboard fill of the remaining seats
pub mod fill;
/// Pairwise-swap reduction of same-gender adjacency
pub mod optimization;
/// Swap repair of anchor neighborhoods
pub mod repair;
/// Gender groups and shuffled draw pools
pub mod roster;
