//! GA configuration.
//!
//! [`GaConfig`] holds the parameters that control the evolutionary loop.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::types::Fitness;

/// Configuration for the Genetic Algorithm.
///
/// Controls population size and the two termination conditions.
///
/// # Defaults
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 10);
/// assert_eq!(config.generation_limit, 100);
/// assert_eq!(config.fitness_limit, u64::MAX);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use knapsack_ga::ga::GaConfig;
///
/// let config = GaConfig::default()
///     .with_population_size(20)
///     .with_generation_limit(250)
///     .with_fitness_limit(1310)
///     .with_seed(7);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GaConfig {
    /// Number of genomes in the population.
    ///
    /// Even sizes are recommended: offspring are produced two at a time,
    /// and an odd size drops the last child of the final pair.
    pub population_size: usize,

    /// Maximum number of generations (reproduction cycles) to run.
    ///
    /// 0 evaluates and sorts the initial population without reproducing.
    pub generation_limit: usize,

    /// Stop as soon as the best genome reaches this fitness.
    ///
    /// `u64::MAX` effectively disables the check.
    pub fitness_limit: Fitness,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 10,
            generation_limit: 100,
            fitness_limit: Fitness::MAX,
            seed: None,
        }
    }
}

impl GaConfig {
    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of generations.
    pub fn with_generation_limit(mut self, n: usize) -> Self {
        self.generation_limit = n;
        self
    }

    /// Sets the target fitness.
    pub fn with_fitness_limit(mut self, limit: Fitness) -> Self {
        self.fitness_limit = limit;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Preset for fast runs: small population, few generations.
    ///
    /// - Population: 10, Generations: 100
    pub fn fast() -> Self {
        Self::default()
    }

    /// Preset balancing run time and solution quality.
    ///
    /// - Population: 50, Generations: 300
    pub fn balanced() -> Self {
        Self {
            population_size: 50,
            generation_limit: 300,
            ..Self::default()
        }
    }

    /// Preset for quality: large population, many generations.
    ///
    /// - Population: 150, Generations: 1000
    pub fn quality() -> Self {
        Self {
            population_size: 150,
            generation_limit: 1000,
            ..Self::default()
        }
    }

    /// Selects a preset based on the number of catalog items.
    ///
    /// - `item_count < 20` → [`fast()`](Self::fast)
    /// - `20 ≤ item_count < 100` → [`balanced()`](Self::balanced)
    /// - `item_count ≥ 100` → [`quality()`](Self::quality)
    pub fn auto_select(item_count: usize) -> Self {
        if item_count < 20 {
            Self::fast()
        } else if item_count < 100 {
            Self::balanced()
        } else {
            Self::quality()
        }
    }
}
