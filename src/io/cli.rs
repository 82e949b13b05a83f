//! Command-line interface for generating and printing seating charts

use crate::algorithm::anchors::AnchorSpec;
use crate::algorithm::executor::{
    AttemptOutcome, GenerationConfig, SeatingGenerator, SeatingPlan,
};
use crate::algorithm::roster::Gender;
use crate::analysis::metrics::{SeatingReport, verify_complete};
use crate::io::configuration::{
    DEFAULT_ANCHOR_SEPARATION, DEFAULT_BLOCKED_SEATS, DEFAULT_COLS, DEFAULT_GENDER_BOUNDARY,
    DEFAULT_IDENTIFIER_COUNT, DEFAULT_MAX_ATTEMPTS, DEFAULT_OPTIMIZATION_ITERATIONS,
    DEFAULT_PRIMARY_ANCHOR, DEFAULT_REPAIR_ITERATIONS, DEFAULT_ROWS, DEFAULT_SECONDARY_ANCHOR,
};
use crate::io::error::{Result, SeatingError};
use crate::io::image::export_seating_as_png;
use crate::io::progress::AttemptProgress;
use crate::io::render::render_seating;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seatplan")]
#[command(
    author,
    version,
    about = "Generate a seating chart with gender-constrained anchor neighborhoods"
)]
/// Command-line arguments for the seating generator
// Output toggles are independent user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Random seed for reproducible generation (OS entropy when omitted)
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Maximum number of construction attempts
    #[arg(short, long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub attempts: usize,

    /// Maximum optimization passes per attempt
    #[arg(long, default_value_t = DEFAULT_OPTIMIZATION_ITERATIONS)]
    pub optimize_iterations: usize,

    /// Maximum anchor repair rounds per attempt
    #[arg(long, default_value_t = DEFAULT_REPAIR_ITERATIONS)]
    pub repair_iterations: usize,

    /// Number of seat rows
    #[arg(short, long, default_value_t = DEFAULT_ROWS)]
    pub rows: usize,

    /// Number of seat columns
    #[arg(short, long, default_value_t = DEFAULT_COLS)]
    pub cols: usize,

    /// Permanently empty seat numbers, comma separated
    #[arg(short, long, value_delimiter = ',', default_values_t = DEFAULT_BLOCKED_SEATS)]
    pub blocked: Vec<usize>,

    /// Highest identifier to seat
    #[arg(long, default_value_t = DEFAULT_IDENTIFIER_COUNT)]
    pub identifiers: u32,

    /// Identifiers up to this value are male, the rest female
    #[arg(long, default_value_t = DEFAULT_GENDER_BOUNDARY)]
    pub boundary: u32,

    /// Identifier whose neighbors must all be male
    #[arg(long, default_value_t = DEFAULT_PRIMARY_ANCHOR)]
    pub primary_anchor: u32,

    /// Identifier whose neighbors must all be female
    #[arg(long, default_value_t = DEFAULT_SECONDARY_ANCHOR)]
    pub secondary_anchor: u32,

    /// Anchors must differ by more than this many rows or columns
    #[arg(long, default_value_t = DEFAULT_ANCHOR_SEPARATION)]
    pub separation: usize,

    /// Also write the chart as a PNG image
    #[arg(long, value_name = "PATH")]
    pub png: Option<PathBuf>,

    /// Print without ANSI colors
    #[arg(long)]
    pub plain: bool,

    /// Print adjacency statistics after the chart
    #[arg(long)]
    pub stats: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }

    /// Build the generation configuration described by the arguments
    pub fn generation_config(&self) -> GenerationConfig {
        GenerationConfig {
            rows: self.rows,
            cols: self.cols,
            blocked_seats: self.blocked.clone(),
            identifier_count: self.identifiers,
            gender_boundary: self.boundary,
            primary_anchor: AnchorSpec::new(self.primary_anchor, Gender::Male),
            secondary_anchor: AnchorSpec::new(self.secondary_anchor, Gender::Female),
            min_anchor_separation: self.separation,
            max_attempts: self.attempts,
            max_optimization_iterations: self.optimize_iterations,
            max_repair_iterations: self.repair_iterations,
        }
    }
}

/// Drives one generation run and prints the result
pub struct SeatingRunner {
    cli: Cli,
}

impl SeatingRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Generate, verify, print and optionally export a seating chart
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid, every attempt is
    /// rejected, or the PNG export fails
    // Printing the chart is the purpose of the binary
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let mut generator = SeatingGenerator::new(self.cli.generation_config(), self.cli.seed)?;
        let (plan, rejected) = self.generate(&mut generator)?;

        verify_complete(generator.grid(), generator.roster(), &plan.seating)?;

        println!(
            "{}",
            render_seating(&plan.seating, generator.roster(), !self.cli.plain)
        );

        if self.cli.stats {
            let report = SeatingReport::measure(
                generator.grid(),
                generator.roster(),
                &plan.seating,
                &plan.anchors,
            );
            println!();
            println!("attempts: {} ({rejected} rejected)", plan.attempts);
            println!("{report}");
        }

        if let Some(path) = &self.cli.png {
            export_seating_as_png(generator.grid(), generator.roster(), &plan.seating, path)?;
        }

        Ok(())
    }

    /// Run attempts behind the progress bar, returning the plan and the rejected count
    fn generate(&self, generator: &mut SeatingGenerator) -> Result<(SeatingPlan, usize)> {
        let max_attempts = generator.config().max_attempts;
        let mut progress = if self.cli.should_show_progress() {
            AttemptProgress::new(max_attempts)
        } else {
            AttemptProgress::hidden(max_attempts)
        };

        loop {
            match generator.execute_attempt() {
                Ok(AttemptOutcome::Accepted(plan)) => {
                    progress.accept();
                    return Ok((*plan, progress.rejected()));
                }
                Ok(AttemptOutcome::Rejected(reason)) => progress.reject(&reason),
                Err(error @ SeatingError::GenerationExhausted { .. }) => {
                    progress.abandon();
                    return Err(error);
                }
                Err(error) => return Err(error),
            }
        }
    }
}
