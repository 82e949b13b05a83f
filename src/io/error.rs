//! Error types for seating generation and export

use std::fmt;
use std::path::PathBuf;

use crate::algorithm::roster::Gender;

/// Main error type for all seating operations
#[derive(Debug)]
pub enum SeatingError {
    /// No interior cell can host the second anchor under the separation rule
    InfeasibleAnchorSeparation {
        /// Attempt during which placement failed (1-based, 0 when unknown)
        attempt: usize,
    },

    /// A gender pool ran dry while cells still needed that gender
    PoolExhaustion {
        /// Gender whose pool was too small
        gender: Gender,
        /// Number of identifiers the stage needed
        required: usize,
        /// Number of identifiers left in the pool
        available: usize,
    },

    /// Repair and optimization finished with anchor neighbors of the wrong gender
    AnchorConstraintUnsatisfied {
        /// Total number of violating neighbor cells across both anchors
        violations: usize,
    },

    /// Every attempt was rejected
    GenerationExhausted {
        /// Number of attempts made before giving up
        attempts: usize,
    },

    /// Generation parameter validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// A finished seating failed a consistency check
    Computation {
        /// Name of the check that failed
        operation: &'static str,
        /// Description of the failure
        reason: String,
    },

    /// Failed to save the seating chart image
    ImageExport {
        /// Path where export was attempted
        path: PathBuf,
        /// Underlying image export error
        source: image::ImageError,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl SeatingError {
    /// Whether the driver should discard the attempt and try again
    ///
    /// Only failures local to a single randomized attempt are recoverable;
    /// configuration and export errors are surfaced immediately.
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::InfeasibleAnchorSeparation { .. }
                | Self::PoolExhaustion { .. }
                | Self::AnchorConstraintUnsatisfied { .. }
        )
    }
}

impl fmt::Display for SeatingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InfeasibleAnchorSeparation { attempt } => {
                write!(
                    f,
                    "No interior seat satisfies the anchor separation rule (attempt {attempt})"
                )
            }
            Self::PoolExhaustion {
                gender,
                required,
                available,
            } => {
                write!(
                    f,
                    "The {gender} pool holds {available} identifiers but {required} are required"
                )
            }
            Self::AnchorConstraintUnsatisfied { violations } => {
                write!(
                    f,
                    "Anchor neighborhoods still contain {violations} violating seats"
                )
            }
            Self::GenerationExhausted { attempts } => {
                write!(
                    f,
                    "Failed to generate a valid seating chart after {attempts} attempts"
                )
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::Computation { operation, reason } => {
                write!(f, "Computation error in {operation}: {reason}")
            }
            Self::ImageExport { path, source } => {
                write!(
                    f,
                    "Failed to export image to '{}': {source}",
                    path.display()
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for SeatingError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::ImageExport { source, .. } => Some(source),
            Self::FileSystem { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for seating results
pub type Result<T> = std::result::Result<T, SeatingError>;

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> SeatingError {
    SeatingError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

/// Create a computation error
pub fn computation_error(operation: &'static str, reason: &impl ToString) -> SeatingError {
    SeatingError::Computation {
        operation,
        reason: reason.to_string(),
    }
}
