//! Core type and trait definitions for the GA framework.
//!
//! The engine is split into one capability per role. [`GaRunner`] depends
//! on each role only through its trait, so every stage of the loop can be
//! swapped independently:
//!
//! - [`Populator`]: creates generation 0
//! - [`Evaluator`]: scores a genome
//! - [`Selector`]: picks a parent pair
//! - [`Crossover`]: recombines two parents into two children
//! - [`Mutator`]: perturbs a child
//!
//! [`GaRunner`]: super::GaRunner

use crate::error::Result;
use rand::Rng;

/// A fixed-length binary selection vector. `true` marks a selected slot.
pub type Genome = Vec<bool>;

/// A collection of genomes evolved together.
pub type Population = Vec<Genome>;

/// Fitness score. Higher is better; 0 signals an infeasible genome.
pub type Fitness = u64;

/// Scores a genome.
///
/// Fitness is never cached by the engine: the driver and the selector call
/// [`evaluate`](Evaluator::evaluate) repeatedly for the same genome, so
/// implementations should be cheap.
///
/// Any `Fn(&[bool]) -> Result<Fitness>` closure is an evaluator:
///
/// ```
/// use knapsack_ga::ga::{Evaluator, Fitness};
///
/// let ones = |genome: &[bool]| -> knapsack_ga::Result<Fitness> {
///     Ok(genome.iter().filter(|&&bit| bit).count() as Fitness)
/// };
/// assert_eq!(ones.evaluate(&[true, false, true]).unwrap(), 2);
/// ```
pub trait Evaluator {
    /// Returns the fitness of `genome`, or a usage error if the genome does
    /// not fit the problem instance.
    fn evaluate(&self, genome: &[bool]) -> Result<Fitness>;
}

impl<F> Evaluator for F
where
    F: Fn(&[bool]) -> Result<Fitness>,
{
    fn evaluate(&self, genome: &[bool]) -> Result<Fitness> {
        self(genome)
    }
}

/// Creates the initial population.
pub trait Populator {
    /// Produces `size` genomes for generation 0.
    fn populate<R: Rng>(&self, size: usize, rng: &mut R) -> Population;
}

/// Chooses parents for reproduction.
pub trait Selector {
    /// Returns two genomes drawn from `population` (with replacement).
    ///
    /// Both members of the pair must be elements of `population`.
    fn select_pair<'a, E: Evaluator + ?Sized, R: Rng>(
        &self,
        population: &'a [Genome],
        evaluator: &E,
        rng: &mut R,
    ) -> Result<(&'a Genome, &'a Genome)>;
}

/// Recombines two parents into two children.
pub trait Crossover {
    /// Produces two children. Parents are left untouched.
    fn crossover<R: Rng>(&self, a: &[bool], b: &[bool], rng: &mut R) -> Result<(Genome, Genome)>;
}

/// Perturbs a genome.
///
/// Takes the genome by value and hands it back, so callers that still need
/// the original must clone before calling.
pub trait Mutator {
    /// Returns the mutated genome.
    fn mutate<R: Rng>(&self, genome: Genome, rng: &mut R) -> Genome;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::GaError;

    #[test]
    fn test_closure_is_evaluator() {
        let ones = |genome: &[bool]| -> Result<Fitness> {
            Ok(genome.iter().filter(|&&b| b).count() as Fitness)
        };
        assert_eq!(ones.evaluate(&[true, true, false]).unwrap(), 2);
        assert_eq!(ones.evaluate(&[]).unwrap(), 0);
    }

    #[test]
    fn test_closure_evaluator_propagates_errors() {
        let strict = |genome: &[bool]| -> Result<Fitness> {
            if genome.len() != 3 {
                return Err(GaError::GenomeLengthMismatch {
                    genome: genome.len(),
                    items: 3,
                });
            }
            Ok(1)
        };
        assert!(strict.evaluate(&[true]).is_err());
        assert_eq!(strict.evaluate(&[true, false, false]).unwrap(), 1);
    }
}
