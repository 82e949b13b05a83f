use log::{debug, info, trace};
use rand::{Rng, SeedableRng, rngs::StdRng};

use crate::{
    algorithm::anchors::{AnchorCells, AnchorSpec, place_anchors},
    algorithm::fill::fill_checkerboard,
    algorithm::optimization::{OptimizationOutcome, optimize_seating},
    algorithm::repair::{RepairOutcome, count_anchor_violations, repair_anchor_neighborhoods},
    algorithm::roster::{Gender, Roster},
    io::configuration::{
        DEFAULT_ANCHOR_SEPARATION, DEFAULT_BLOCKED_SEATS, DEFAULT_COLS, DEFAULT_GENDER_BOUNDARY,
        DEFAULT_IDENTIFIER_COUNT, DEFAULT_MAX_ATTEMPTS, DEFAULT_OPTIMIZATION_ITERATIONS,
        DEFAULT_PRIMARY_ANCHOR, DEFAULT_REPAIR_ITERATIONS, DEFAULT_ROWS, DEFAULT_SECONDARY_ANCHOR,
    },
    io::error::{Result, SeatingError, invalid_parameter},
    spatial::{SeatGrid, Seating},
};

/// Generation parameters: layout, identifier space, anchors and search budgets
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationConfig {
    /// Number of seat rows
    pub rows: usize,
    /// Number of seat columns
    pub cols: usize,
    /// Permanently empty seat numbers (1-based, row-major)
    pub blocked_seats: Vec<usize>,
    /// Highest identifier; blocked seat numbers are skipped
    pub identifier_count: u32,
    /// Identifiers up to and including this value are male
    pub gender_boundary: u32,
    /// Anchor placed first
    pub primary_anchor: AnchorSpec,
    /// Anchor placed second, away from the primary one
    pub secondary_anchor: AnchorSpec,
    /// Anchors must differ by more than this many rows or columns
    pub min_anchor_separation: usize,
    /// Maximum full construction attempts
    pub max_attempts: usize,
    /// Maximum optimization passes per attempt
    pub max_optimization_iterations: usize,
    /// Maximum repair rounds per attempt
    pub max_repair_iterations: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            rows: DEFAULT_ROWS,
            cols: DEFAULT_COLS,
            blocked_seats: DEFAULT_BLOCKED_SEATS.to_vec(),
            identifier_count: DEFAULT_IDENTIFIER_COUNT,
            gender_boundary: DEFAULT_GENDER_BOUNDARY,
            primary_anchor: AnchorSpec::new(DEFAULT_PRIMARY_ANCHOR, Gender::Male),
            secondary_anchor: AnchorSpec::new(DEFAULT_SECONDARY_ANCHOR, Gender::Female),
            min_anchor_separation: DEFAULT_ANCHOR_SEPARATION,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            max_optimization_iterations: DEFAULT_OPTIMIZATION_ITERATIONS,
            max_repair_iterations: DEFAULT_REPAIR_ITERATIONS,
        }
    }
}

impl GenerationConfig {
    /// Both anchors, primary first
    pub const fn anchors(&self) -> [AnchorSpec; 2] {
        [self.primary_anchor, self.secondary_anchor]
    }

    /// Check the configuration and build the topology and roster it describes
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if:
    /// - The grid is smaller than 3x3 (no interior seat for an anchor) or too large
    /// - A blocked seat number is out of range
    /// - The identifier count exceeds the seat count or does not match the
    ///   number of valid seats
    /// - The gender boundary leaves a group empty
    /// - An anchor identifier is out of range, blocked, or shared by both anchors
    /// - A search budget is zero
    pub fn validate(&self) -> Result<(SeatGrid, Roster)> {
        if self.rows < 3 || self.cols < 3 {
            return Err(invalid_parameter(
                "grid dimensions",
                &format!("{}x{}", self.rows, self.cols),
                &"anchors need interior seats, so both dimensions must be at least 3",
            ));
        }

        let grid = SeatGrid::new(self.rows, self.cols, &self.blocked_seats)?;

        if !usize::try_from(self.identifier_count).is_ok_and(|count| count <= grid.seat_count()) {
            return Err(invalid_parameter(
                "identifier_count",
                &self.identifier_count,
                &format!("exceeds the {} seats of the grid", grid.seat_count()),
            ));
        }

        let roster = Roster::new(self.identifier_count, self.gender_boundary, &grid);

        if roster.len() != grid.valid_cell_count() {
            return Err(invalid_parameter(
                "identifier_count",
                &self.identifier_count,
                &format!(
                    "yields {} identifiers for {} seats",
                    roster.len(),
                    grid.valid_cell_count()
                ),
            ));
        }

        if self.gender_boundary == 0 || self.gender_boundary >= self.identifier_count {
            return Err(invalid_parameter(
                "gender_boundary",
                &self.gender_boundary,
                &format!("must lie within 1..{}", self.identifier_count),
            ));
        }

        for (parameter, anchor) in [
            ("primary_anchor", self.primary_anchor),
            ("secondary_anchor", self.secondary_anchor),
        ] {
            if roster.gender_of(anchor.identifier).is_none() {
                return Err(invalid_parameter(
                    parameter,
                    &anchor.identifier,
                    &"not an issued identifier (out of range or blocked)",
                ));
            }
        }

        if self.primary_anchor.identifier == self.secondary_anchor.identifier {
            return Err(invalid_parameter(
                "secondary_anchor",
                &self.secondary_anchor.identifier,
                &"must differ from the primary anchor",
            ));
        }

        for (parameter, value) in [
            ("max_attempts", self.max_attempts),
            ("max_optimization_iterations", self.max_optimization_iterations),
            ("max_repair_iterations", self.max_repair_iterations),
        ] {
            if value == 0 {
                return Err(invalid_parameter(parameter, &value, &"must be positive"));
            }
        }

        Ok((grid, roster))
    }
}

/// Everything produced by one successful attempt
#[derive(Clone, Debug)]
pub struct AttemptArtifacts {
    /// Completed seating
    pub seating: Seating,
    /// Where the anchors ended up
    pub anchors: AnchorCells,
    /// Anchor repair summary
    pub repair: RepairOutcome,
    /// Optimization summary
    pub optimization: OptimizationOutcome,
}

/// Run one randomized construction: anchors, fill, repair, optimize, validate
///
/// # Errors
///
/// Returns a recoverable error when the attempt must be discarded:
/// - `InfeasibleAnchorSeparation` if the anchors cannot be placed
/// - `PoolExhaustion` if a pool runs dry
/// - `AnchorConstraintUnsatisfied` if an anchor neighborhood is still violated
pub fn attempt_once<R: Rng + ?Sized>(
    config: &GenerationConfig,
    grid: &SeatGrid,
    roster: &Roster,
    rng: &mut R,
) -> Result<AttemptArtifacts> {
    let mut seating = Seating::new(grid.rows(), grid.cols());

    let (anchors, mut pools) = place_anchors(
        grid,
        roster,
        &mut seating,
        config.anchors(),
        config.min_anchor_separation,
        rng,
    )?;

    let filled = fill_checkerboard(grid, &mut seating, &mut pools)?;
    trace!("fill: {filled} seats, {} identifiers left", pools.remaining());

    let sites = anchors.sites();
    let repair = repair_anchor_neighborhoods(
        grid,
        roster,
        &mut seating,
        &sites,
        config.max_repair_iterations,
    );
    trace!(
        "repair: {} rounds, {} swaps, satisfied={}",
        repair.iterations, repair.swaps, repair.satisfied
    );

    let optimization = optimize_seating(
        grid,
        roster,
        &mut seating,
        &sites,
        config.max_optimization_iterations,
    );
    trace!(
        "optimization: {} passes, {} swaps, converged={}",
        optimization.passes, optimization.accepted_swaps, optimization.converged
    );

    let violations = count_anchor_violations(grid, roster, &seating, &sites);
    if violations > 0 {
        return Err(SeatingError::AnchorConstraintUnsatisfied { violations });
    }

    Ok(AttemptArtifacts {
        seating,
        anchors,
        repair,
        optimization,
    })
}

/// A finished seating chart with the bookkeeping of how it was found
#[derive(Clone, Debug)]
pub struct SeatingPlan {
    /// Completed seating
    pub seating: Seating,
    /// Where the anchors sit
    pub anchors: AnchorCells,
    /// Attempts used, including the successful one
    pub attempts: usize,
    /// Repair summary of the successful attempt
    pub repair: RepairOutcome,
    /// Optimization summary of the successful attempt
    pub optimization: OptimizationOutcome,
}

/// Result of a single driver step
#[derive(Debug)]
pub enum AttemptOutcome {
    /// The attempt satisfied both anchors
    Accepted(Box<SeatingPlan>),
    /// The attempt was discarded for the given reason
    Rejected(SeatingError),
}

/// Driver lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerationState {
    /// Attempts remain and no plan has been accepted
    Attempting,
    /// A plan has been accepted
    Done,
}

/// Bounded retry driver around `attempt_once`
///
/// Owns a validated topology and roster plus the random source, so each
/// generator is independent of any other.
pub struct SeatingGenerator {
    config: GenerationConfig,
    grid: SeatGrid,
    roster: Roster,
    rng: StdRng,
    attempts: usize,
    state: GenerationState,
}

impl SeatingGenerator {
    /// Create a generator; `None` seeds from OS entropy
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn new(config: GenerationConfig, seed: Option<u64>) -> Result<Self> {
        let rng = seed.map_or_else(StdRng::from_os_rng, StdRng::seed_from_u64);
        Self::with_rng(config, rng)
    }

    /// Create a generator around an existing random source
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the configuration fails validation
    pub fn with_rng(config: GenerationConfig, rng: StdRng) -> Result<Self> {
        let (grid, roster) = config.validate()?;
        Ok(Self {
            config,
            grid,
            roster,
            rng,
            attempts: 0,
            state: GenerationState::Attempting,
        })
    }

    /// Validated grid topology
    pub const fn grid(&self) -> &SeatGrid {
        &self.grid
    }

    /// Gender partition in use
    pub const fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Configuration in use
    pub const fn config(&self) -> &GenerationConfig {
        &self.config
    }

    /// Attempts made so far
    pub const fn attempts(&self) -> usize {
        self.attempts
    }

    /// Current lifecycle state
    pub const fn state(&self) -> GenerationState {
        self.state
    }

    /// Run the next attempt
    ///
    /// # Errors
    ///
    /// - `GenerationExhausted` once `max_attempts` attempts have been rejected
    /// - `InvalidParameter` if called again after a plan was accepted
    /// - Any non-recoverable error raised inside the attempt
    pub fn execute_attempt(&mut self) -> Result<AttemptOutcome> {
        if self.state == GenerationState::Done {
            return Err(invalid_parameter(
                "attempt",
                &self.attempts,
                &"generation already finished",
            ));
        }
        if self.attempts >= self.config.max_attempts {
            return Err(SeatingError::GenerationExhausted {
                attempts: self.attempts,
            });
        }

        self.attempts += 1;
        match attempt_once(&self.config, &self.grid, &self.roster, &mut self.rng) {
            Ok(artifacts) => {
                self.state = GenerationState::Done;
                info!("seating accepted on attempt {}", self.attempts);
                Ok(AttemptOutcome::Accepted(Box::new(SeatingPlan {
                    seating: artifacts.seating,
                    anchors: artifacts.anchors,
                    attempts: self.attempts,
                    repair: artifacts.repair,
                    optimization: artifacts.optimization,
                })))
            }
            Err(SeatingError::InfeasibleAnchorSeparation { .. }) => {
                debug!("attempt {} rejected: anchor separation", self.attempts);
                Ok(AttemptOutcome::Rejected(
                    SeatingError::InfeasibleAnchorSeparation {
                        attempt: self.attempts,
                    },
                ))
            }
            Err(error) if error.is_recoverable() => {
                debug!("attempt {} rejected: {error}", self.attempts);
                Ok(AttemptOutcome::Rejected(error))
            }
            Err(error) => Err(error),
        }
    }

    /// Attempt until a plan is accepted or the budget runs out
    ///
    /// # Errors
    ///
    /// Returns `GenerationExhausted` carrying the attempt count if every
    /// attempt is rejected
    pub fn run(&mut self) -> Result<SeatingPlan> {
        loop {
            if let AttemptOutcome::Accepted(plan) = self.execute_attempt()? {
                return Ok(*plan);
            }
        }
    }
}

/// Generate a seating chart in one call
///
/// # Errors
///
/// Returns `InvalidParameter` for a bad configuration or
/// `GenerationExhausted` if no attempt succeeds
pub fn generate_seating(config: GenerationConfig, seed: Option<u64>) -> Result<SeatingPlan> {
    SeatingGenerator::new(config, seed)?.run()
}
