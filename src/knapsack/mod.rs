//! 0/1 knapsack item selection.
//!
//! A [`KnapsackProblem`] is an ordered item catalog plus a weight capacity.
//! Slot `i` of a genome selects `items[i]`; the problem scores genomes for
//! the GA through [`Evaluator`].
//!
//! ```
//! use knapsack_ga::ga::Evaluator;
//! use knapsack_ga::knapsack::{Item, KnapsackProblem};
//!
//! let problem = KnapsackProblem::new(
//!     vec![Item::new("a", 10, 1), Item::new("b", 20, 2), Item::new("c", 30, 3)],
//!     3,
//! );
//! assert_eq!(problem.evaluate(&[true, true, false]).unwrap(), 30);
//! assert_eq!(problem.evaluate(&[true, false, true]).unwrap(), 0);
//! ```

pub mod catalog;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{GaError, Result};
use crate::ga::{Evaluator, Fitness, RandomPopulation};

/// A catalog entry.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Item {
    /// Display name, used when decoding a genome.
    pub name: String,
    /// Value added to the fitness when selected.
    pub value: u64,
    /// Weight counted against the capacity when selected.
    pub weight: u64,
}

impl Item {
    /// Creates an item.
    pub fn new(name: impl Into<String>, value: u64, weight: u64) -> Self {
        Self {
            name: name.into(),
            value,
            weight,
        }
    }
}

/// Item catalog and weight capacity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackProblem {
    items: Vec<Item>,
    capacity: u64,
}

impl KnapsackProblem {
    /// Creates a problem; slot `i` of every genome selects `items[i]`.
    pub fn new(items: Vec<Item>, capacity: u64) -> Self {
        Self { items, capacity }
    }

    /// The item catalog, in slot order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Maximum total weight of a feasible selection.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Number of items, which is also the required genome length.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the catalog has no items.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// A uniform random populator sized for this catalog.
    pub fn random_population(&self) -> RandomPopulation {
        RandomPopulation::new(self.items.len())
    }

    /// Scores `genome` against the catalog.
    ///
    /// Selected items are accumulated in catalog order. As soon as the
    /// running weight exceeds the capacity the genome scores 0; otherwise
    /// the score is the total selected value.
    ///
    /// # Errors
    /// [`GaError::GenomeLengthMismatch`] if the genome and catalog differ
    /// in length.
    pub fn fitness(&self, genome: &[bool]) -> Result<Fitness> {
        self.check_length(genome)?;

        let mut weight = 0u64;
        let mut value = 0u64;
        let selected = self
            .items
            .iter()
            .zip(genome)
            .filter_map(|(item, &selected)| selected.then_some(item));
        for item in selected {
            weight = weight.saturating_add(item.weight);
            value = value.saturating_add(item.value);

            if weight > self.capacity {
                return Ok(0);
            }
        }

        Ok(value)
    }

    /// The catalog entries a genome selects, in catalog order.
    pub fn selected_items<'a>(&'a self, genome: &[bool]) -> Result<Vec<&'a Item>> {
        self.check_length(genome)?;
        Ok(self
            .items
            .iter()
            .zip(genome)
            .filter_map(|(item, &selected)| selected.then_some(item))
            .collect())
    }

    /// Names of the selected items, in catalog order.
    pub fn selected_names<'a>(&'a self, genome: &[bool]) -> Result<Vec<&'a str>> {
        Ok(self
            .selected_items(genome)?
            .into_iter()
            .map(|item| item.name.as_str())
            .collect())
    }

    /// Total weight of the selected items, whether or not it fits.
    pub fn total_weight(&self, genome: &[bool]) -> Result<u64> {
        Ok(self
            .selected_items(genome)?
            .into_iter()
            .fold(0u64, |acc, item| acc.saturating_add(item.weight)))
    }

    fn check_length(&self, genome: &[bool]) -> Result<()> {
        if genome.len() != self.items.len() {
            return Err(GaError::GenomeLengthMismatch {
                genome: genome.len(),
                items: self.items.len(),
            });
        }
        Ok(())
    }
}

impl Evaluator for KnapsackProblem {
    fn evaluate(&self, genome: &[bool]) -> Result<Fitness> {
        self.fitness(genome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn small_problem(capacity: u64) -> KnapsackProblem {
        KnapsackProblem::new(
            vec![
                Item::new("a", 10, 1),
                Item::new("b", 20, 2),
                Item::new("c", 30, 3),
            ],
            capacity,
        )
    }

    #[test]
    fn test_over_capacity_scores_zero() {
        // Weight 1 + 3 = 4 exceeds 3, so no partial credit for value 40
        let problem = small_problem(3);
        assert_eq!(problem.fitness(&[true, false, true]).unwrap(), 0);
    }

    #[test]
    fn test_exact_capacity_is_feasible() {
        let problem = small_problem(3);
        assert_eq!(problem.fitness(&[true, true, false]).unwrap(), 30);
    }

    #[test]
    fn test_empty_selection() {
        let problem = small_problem(0);
        assert_eq!(problem.fitness(&[false, false, false]).unwrap(), 0);
    }

    #[test]
    fn test_zero_weight_items_fit_zero_capacity() {
        let problem = KnapsackProblem::new(vec![Item::new("feather", 7, 0)], 0);
        assert_eq!(problem.fitness(&[true]).unwrap(), 7);
    }

    #[test]
    fn test_length_mismatch() {
        let problem = small_problem(10);
        let err = problem.fitness(&[true, false]).unwrap_err();
        assert_eq!(err, GaError::GenomeLengthMismatch { genome: 2, items: 3 });
        assert!(problem.evaluate(&[true, false, true, true]).is_err());
        assert!(problem.selected_names(&[]).is_err());
    }

    #[test]
    fn test_saturating_weights() {
        let problem = KnapsackProblem::new(
            vec![Item::new("x", 1, u64::MAX), Item::new("y", 1, u64::MAX)],
            u64::MAX,
        );
        assert_eq!(problem.fitness(&[true, false]).unwrap(), 1);
        assert_eq!(problem.total_weight(&[true, true]).unwrap(), u64::MAX);
    }

    #[test]
    fn test_selected_names() {
        let problem = small_problem(3);
        assert_eq!(
            problem.selected_names(&[true, false, true]).unwrap(),
            vec!["a", "c"]
        );
        assert!(problem.selected_names(&[false, false, false]).unwrap().is_empty());
        assert_eq!(problem.total_weight(&[true, false, true]).unwrap(), 4);
    }

    #[test]
    fn test_random_population_matches_catalog() {
        let problem = small_problem(3);
        assert_eq!(problem.random_population().genome_length, 3);
        assert_eq!(problem.len(), 3);
        assert!(!problem.is_empty());
    }

    fn problem_and_genome() -> impl Strategy<Value = (KnapsackProblem, Vec<bool>)> {
        (
            prop::collection::vec((0u64..1_000, 0u64..1_000), 0..24),
            0u64..5_000,
        )
            .prop_flat_map(|(specs, capacity)| {
                let n = specs.len();
                let items = specs
                    .into_iter()
                    .enumerate()
                    .map(|(i, (value, weight))| Item::new(format!("item{i}"), value, weight))
                    .collect();
                (
                    Just(KnapsackProblem::new(items, capacity)),
                    prop::collection::vec(any::<bool>(), n),
                )
            })
    }

    proptest! {
        #[test]
        fn prop_fitness_matches_definition((problem, genome) in problem_and_genome()) {
            let selected = problem.selected_items(&genome).unwrap();
            let total_weight: u64 = selected.iter().map(|item| item.weight).sum();
            let total_value: u64 = selected.iter().map(|item| item.value).sum();
            let fitness = problem.fitness(&genome).unwrap();

            // Weights are non-negative, so the prefix sum is monotone and
            // "some prefix exceeds" is the same as "the total exceeds"
            if total_weight > problem.capacity() {
                prop_assert_eq!(fitness, 0);
            } else {
                prop_assert_eq!(fitness, total_value);
            }
        }
    }
}
