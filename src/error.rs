//! Error type shared by the GA engine and the knapsack problem.

/// Errors raised by evaluation, recombination, selection, and configuration.
///
/// Length mismatches are usage errors: genomes are never truncated or
/// padded to fit.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GaError {
    #[error("genome length {genome} does not match item catalog length {items}")]
    GenomeLengthMismatch { genome: usize, items: usize },

    #[error("parents must have equal length (got {left} and {right})")]
    ParentLengthMismatch { left: usize, right: usize },

    #[error("cannot select from empty population")]
    EmptyPopulation,

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GaError>;
