//! Selection strategies for the GA.
//!
//! Selection determines which genomes are chosen as parents for
//! crossover. Different strategies provide different selection pressure.
//!
//! # References
//!
//! - Blickle & Thiele (1996), "A Comparison of Selection Schemes used in
//!   Evolutionary Algorithms"
//! - Goldberg & Deb (1991), "A Comparative Analysis of Selection Schemes
//!   Used in Genetic Algorithms"

use super::types::{Evaluator, Fitness, Genome, Selector};
use crate::error::{GaError, Result};
use rand::Rng;

/// Selection strategy for choosing parents.
///
/// All strategies assume **maximization** (higher fitness = better).
///
/// # Examples
///
/// ```
/// use knapsack_ga::ga::Selection;
///
/// // Roulette wheel (fitness-proportionate), the default
/// let sel = Selection::default();
/// assert_eq!(sel, Selection::Roulette);
///
/// // Tournament with size 3 (moderate selection pressure)
/// let sel = Selection::Tournament(3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Selection {
    /// Fitness-proportionate (roulette wheel) selection.
    ///
    /// The probability of picking a genome is its fitness divided by the
    /// population's total fitness. When every genome scores 0 the wheel
    /// degenerates to uniform selection.
    ///
    /// # Complexity
    /// O(n) per selection (linear scan)
    #[default]
    Roulette,

    /// Tournament selection: pick `k` genomes at random, select the best.
    ///
    /// Higher `k` = stronger selection pressure. `k = 0` is treated as 1.
    ///
    /// # Complexity
    /// O(k) per selection
    Tournament(usize),

    /// Rank-based selection.
    ///
    /// Genomes are ordered by fitness and selection probability is
    /// proportional to rank position (worst = 1, best = n), not raw
    /// fitness. Avoids super-individual dominance on skewed landscapes.
    ///
    /// Reference: Baker (1985), "Adaptive Selection Methods for Genetic
    /// Algorithms"
    ///
    /// # Complexity
    /// O(n log n) per pair (sort), O(n) per selection
    Rank,
}

impl Selection {
    /// Select a parent index given precomputed fitness scores.
    ///
    /// # Panics
    /// Panics if `scores` is empty.
    pub fn select_index<R: Rng>(&self, scores: &[Fitness], rng: &mut R) -> usize {
        assert!(!scores.is_empty(), "cannot select from empty population");

        match self {
            Selection::Roulette => roulette(scores, rng),
            Selection::Tournament(k) => tournament(scores, *k, rng),
            Selection::Rank => rank(scores, rng),
        }
    }
}

impl Selector for Selection {
    fn select_pair<'a, E: Evaluator + ?Sized, R: Rng>(
        &self,
        population: &'a [Genome],
        evaluator: &E,
        rng: &mut R,
    ) -> Result<(&'a Genome, &'a Genome)> {
        if population.is_empty() {
            return Err(GaError::EmptyPopulation);
        }

        let scores = population
            .iter()
            .map(|genome| evaluator.evaluate(genome))
            .collect::<Result<Vec<_>>>()?;

        let first = self.select_index(&scores, rng);
        let second = self.select_index(&scores, rng);
        Ok((&population[first], &population[second]))
    }
}

/// Roulette wheel selection over integer weights.
///
/// Summing in `u128` keeps the wheel exact for any `u64` fitness.
fn roulette<R: Rng>(scores: &[Fitness], rng: &mut R) -> usize {
    let n = scores.len();
    if n == 1 {
        return 0;
    }

    let total: u128 = scores.iter().map(|&f| f as u128).sum();
    if total == 0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0..total);
    let mut cumulative = 0u128;
    for (i, &f) in scores.iter().enumerate() {
        cumulative += f as u128;
        if cumulative > threshold {
            return i;
        }
    }

    n - 1
}

/// Tournament selection: pick k random genomes, return the fittest.
fn tournament<R: Rng>(scores: &[Fitness], k: usize, rng: &mut R) -> usize {
    let k = k.max(1);
    let n = scores.len();

    let mut best_idx = rng.random_range(0..n);
    for _ in 1..k {
        let idx = rng.random_range(0..n);
        if scores[idx] > scores[best_idx] {
            best_idx = idx;
        }
    }
    best_idx
}

/// Rank-based selection using linear ranking.
fn rank<R: Rng>(scores: &[Fitness], rng: &mut R) -> usize {
    let n = scores.len();
    if n == 1 {
        return 0;
    }

    // Worst first, so position i carries weight i + 1
    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by_key(|&i| scores[i]);

    let total = n * (n + 1) / 2;
    let threshold = rng.random_range(0..total);
    let mut cumulative = 0;
    for (position, &original_idx) in order.iter().enumerate() {
        cumulative += position + 1;
        if cumulative > threshold {
            return original_idx;
        }
    }

    order[n - 1]
}
