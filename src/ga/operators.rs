//! Genetic operators for binary genomes.
//!
//! Generation, crossover, and mutation operators for fixed-length
//! `bool` genomes. Each operator is available as a free function and as a
//! strategy struct implementing the matching trait from [`types`](super::types).
//!
//! # Population
//!
//! - [`random_genome`] / [`RandomPopulation`]: independent fair coin flips
//!
//! # Crossover Operators
//!
//! - [`single_point_crossover`] / [`SinglePointCrossover`]: swap tails at one
//!   random cut point
//!
//! # Mutation Operators
//!
//! - [`flip_mutation`] / [`FlipMutation`]: `num` random slot flips
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

use super::types::{Crossover, Genome, Mutator, Population, Populator};
use crate::error::{GaError, Result};
use rand::Rng;

// ============================================================================
// Population
// ============================================================================

/// Generates a genome of `length` independent fair coin flips.
pub fn random_genome<R: Rng>(length: usize, rng: &mut R) -> Genome {
    (0..length).map(|_| rng.random_bool(0.5)).collect()
}

/// Uniform random initial population.
///
/// A size of 0 yields an empty population; a length of 0 yields empty
/// genomes. Neither is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RandomPopulation {
    /// Number of slots per genome. Must equal the item catalog length.
    pub genome_length: usize,
}

impl RandomPopulation {
    /// Creates a generator for genomes of `genome_length` slots.
    pub fn new(genome_length: usize) -> Self {
        Self { genome_length }
    }
}

impl Populator for RandomPopulation {
    fn populate<R: Rng>(&self, size: usize, rng: &mut R) -> Population {
        (0..size)
            .map(|_| random_genome(self.genome_length, rng))
            .collect()
    }
}

// ============================================================================
// Crossover operators
// ============================================================================

/// Single-point crossover.
///
/// Picks a cut point `p` uniformly in `[1, L-1]` and returns
/// `(a[..p] ++ b[p..], b[..p] ++ a[p..])`. Genomes shorter than 2 have no
/// interior cut point and are returned unchanged.
///
/// # Errors
/// [`GaError::ParentLengthMismatch`] if the parents differ in length.
pub fn single_point_crossover<R: Rng>(
    a: &[bool],
    b: &[bool],
    rng: &mut R,
) -> Result<(Genome, Genome)> {
    check_equal_length(a, b)?;

    let n = a.len();
    if n < 2 {
        return Ok((a.to_vec(), b.to_vec()));
    }

    let point = rng.random_range(1..n);
    single_point_crossover_at(a, b, point)
}

/// Single-point crossover at a fixed cut point.
///
/// `point` is clamped to `0..=L`; a cut at either end returns copies of
/// the parents.
///
/// # Errors
/// [`GaError::ParentLengthMismatch`] if the parents differ in length.
pub fn single_point_crossover_at(
    a: &[bool],
    b: &[bool],
    point: usize,
) -> Result<(Genome, Genome)> {
    check_equal_length(a, b)?;

    let point = point.min(a.len());
    let child1 = [&a[..point], &b[point..]].concat();
    let child2 = [&b[..point], &a[point..]].concat();
    Ok((child1, child2))
}

fn check_equal_length(a: &[bool], b: &[bool]) -> Result<()> {
    if a.len() != b.len() {
        return Err(GaError::ParentLengthMismatch {
            left: a.len(),
            right: b.len(),
        });
    }
    Ok(())
}

/// Strategy wrapper around [`single_point_crossover`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SinglePointCrossover;

impl Crossover for SinglePointCrossover {
    fn crossover<R: Rng>(&self, a: &[bool], b: &[bool], rng: &mut R) -> Result<(Genome, Genome)> {
        single_point_crossover(a, b, rng)
    }
}

// ============================================================================
// Mutation operators
// ============================================================================

/// Flip mutation: `num` independent attempts on random slots.
///
/// Each attempt picks a slot uniformly (slots may repeat across attempts)
/// and draws a threshold in `[0, 1)`. A draw `<= probability` keeps the slot;
/// anything above flips it, so each attempt flips with chance
/// `1 - probability`.
///
/// # Complexity
/// O(num)
pub fn flip_mutation<R: Rng>(genome: &mut [bool], num: usize, probability: f64, rng: &mut R) {
    let n = genome.len();
    if n == 0 {
        return;
    }
    for _ in 0..num {
        let index = rng.random_range(0..n);
        let draw: f64 = rng.random();
        if draw > probability {
            genome[index] = !genome[index];
        }
    }
}

/// Strategy wrapper around [`flip_mutation`].
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::FlipMutation;
///
/// let m = FlipMutation::default();
/// assert_eq!(m.num(), 1);
/// assert!((m.probability() - 0.5).abs() < 1e-12);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipMutation {
    num: usize,
    probability: f64,
}

impl Default for FlipMutation {
    fn default() -> Self {
        Self {
            num: 1,
            probability: 0.5,
        }
    }
}

impl FlipMutation {
    /// Creates a mutation operator with `num` attempts and keep-threshold
    /// `probability`.
    ///
    /// # Errors
    /// [`GaError::InvalidConfig`] if `probability` is outside `0.0..=1.0`.
    pub fn new(num: usize, probability: f64) -> Result<Self> {
        if !(0.0..=1.0).contains(&probability) {
            return Err(GaError::InvalidConfig(format!(
                "mutation probability must be within 0.0..=1.0, got {probability}"
            )));
        }
        Ok(Self { num, probability })
    }

    /// Number of mutation attempts per genome.
    pub fn num(&self) -> usize {
        self.num
    }

    /// Keep-threshold for each attempt.
    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl Mutator for FlipMutation {
    fn mutate<R: Rng>(&self, mut genome: Genome, rng: &mut R) -> Genome {
        flip_mutation(&mut genome, self.num, self.probability, rng);
        genome
    }
}

// ============================================================================
// Tests
// ============================================================================
