//! End-to-end runs of the GA on knapsack catalogs.

use knapsack_ga::ga::{
    Crossover, Evaluator, FlipMutation, GaConfig, GaRunner, Genome, Mutator, Population,
    Populator, RandomPopulation, Selection, Selector, SinglePointCrossover, Termination,
};
use knapsack_ga::knapsack::{catalog, Item, KnapsackProblem};
use knapsack_ga::random::create_rng;
use knapsack_ga::{GaError, Result};
use proptest::prelude::*;
use rand::Rng;

fn more_things_problem() -> KnapsackProblem {
    KnapsackProblem::new(catalog::more_things(), catalog::DEFAULT_CAPACITY)
}

/// Always returns the first population member twice.
struct FirstTwice;

impl Selector for FirstTwice {
    fn select_pair<'a, E: Evaluator + ?Sized, R: Rng>(
        &self,
        population: &'a [Genome],
        _evaluator: &E,
        _rng: &mut R,
    ) -> Result<(&'a Genome, &'a Genome)> {
        let first = population.first().ok_or(GaError::EmptyPopulation)?;
        Ok((first, first))
    }
}

/// Copies the parents through unchanged.
struct CloneParents;

impl Crossover for CloneParents {
    fn crossover<R: Rng>(
        &self,
        a: &[bool],
        b: &[bool],
        _rng: &mut R,
    ) -> Result<(Genome, Genome)> {
        Ok((a.to_vec(), b.to_vec()))
    }
}

/// Leaves genomes untouched.
struct NoMutation;

impl Mutator for NoMutation {
    fn mutate<R: Rng>(&self, genome: Genome, _rng: &mut R) -> Genome {
        genome
    }
}

/// Produces genomes that are one slot too long.
struct TooLong(usize);

impl Populator for TooLong {
    fn populate<R: Rng>(&self, size: usize, _rng: &mut R) -> Population {
        vec![vec![false; self.0 + 1]; size]
    }
}

#[test]
fn reaches_demo_fitness_target() {
    let problem = more_things_problem();
    let runner = GaRunner::new(problem.random_population(), problem)
        .with_mutator(FlipMutation::new(2, 0.5).unwrap());
    let config = GaConfig::default()
        .with_population_size(40)
        .with_generation_limit(500)
        .with_fitness_limit(catalog::DEFAULT_FITNESS_LIMIT)
        .with_seed(42);

    let result = runner.run(&config).unwrap();
    let best = result.best().unwrap();
    let problem = runner.evaluator();

    assert!(
        result.best_fitness >= 1000,
        "expected a good selection, got {}",
        result.best_fitness
    );
    assert_eq!(problem.fitness(best).unwrap(), result.best_fitness);
    assert!(problem.total_weight(best).unwrap() <= catalog::DEFAULT_CAPACITY);
    if result.termination == Termination::FitnessReached {
        assert!(result.best_fitness >= catalog::DEFAULT_FITNESS_LIMIT);
    }
}

#[test]
fn best_genome_decodes_to_item_names() {
    let problem = KnapsackProblem::new(catalog::things(), 2600);
    let runner = GaRunner::new(problem.random_population(), problem);
    let config = GaConfig::default()
        .with_population_size(20)
        .with_generation_limit(100)
        .with_seed(7);

    let result = runner.run(&config).unwrap();
    let best = result.best().unwrap();
    let names = runner.evaluator().selected_names(best).unwrap();

    let catalog = catalog::things();
    let expected: Vec<&str> = catalog
        .iter()
        .zip(best)
        .filter(|&(_, &selected)| selected)
        .map(|(item, _)| item.name.as_str())
        .collect();
    assert_eq!(names, expected);
    // 2600 leaves room for the laptop plus some small items
    assert!(result.best_fitness > 0);
}

#[test]
fn custom_strategies_are_used() {
    let population = vec![
        vec![true, false, false],
        vec![false, true, false],
        vec![false, false, true],
        vec![false, false, false],
    ];
    struct Fixed(Population);
    impl Populator for Fixed {
        fn populate<R: Rng>(&self, _size: usize, _rng: &mut R) -> Population {
            self.0.clone()
        }
    }

    let problem = KnapsackProblem::new(
        vec![Item::new("a", 10, 1), Item::new("b", 20, 2), Item::new("c", 30, 3)],
        3,
    );
    let runner = GaRunner::new(Fixed(population), problem)
        .with_selector(FirstTwice)
        .with_crossover(CloneParents)
        .with_mutator(NoMutation);
    let config = GaConfig::default().with_generation_limit(3).with_seed(1);

    let result = runner.run(&config).unwrap();

    // Elites are the two best; every child is a copy of the best genome
    assert_eq!(result.generations, 3);
    assert_eq!(result.population.len(), 4);
    assert_eq!(result.population[0], vec![false, false, true]);
    assert_eq!(result.population[1], vec![false, false, true]);
    assert_eq!(result.population[2], vec![false, false, true]);
    assert_eq!(result.population[3], vec![false, false, true]);
    assert_eq!(result.fitness_history, vec![30, 30, 30, 30]);
}

#[test]
fn default_operators_are_pluggable_explicitly() {
    let problem = more_things_problem();
    let runner = GaRunner::new(RandomPopulation::new(problem.len()), problem)
        .with_selector(Selection::Roulette)
        .with_crossover(SinglePointCrossover)
        .with_mutator(FlipMutation::default());
    let implicit = {
        let problem = more_things_problem();
        GaRunner::new(problem.random_population(), problem)
    };
    let config = GaConfig::default().with_generation_limit(40).with_seed(99);

    assert_eq!(runner.run(&config).unwrap(), implicit.run(&config).unwrap());
}

#[test]
fn mismatched_population_is_a_usage_error() {
    let problem = more_things_problem();
    let n = problem.len();
    let runner = GaRunner::new(TooLong(n), problem);
    let config = GaConfig::default().with_seed(1);

    let err = runner.run(&config).unwrap_err();
    assert_eq!(
        err,
        GaError::GenomeLengthMismatch {
            genome: n + 1,
            items: n
        }
    );
}

#[test]
fn injected_rng_overrides_seed() {
    let problem = more_things_problem();
    let runner = GaRunner::new(problem.random_population(), problem);
    let config = GaConfig::default().with_generation_limit(20).with_seed(5);

    let seeded = runner.run(&config).unwrap();
    let mut rng = create_rng(5);
    let injected = runner.run_with_rng(&config, &mut rng).unwrap();
    assert_eq!(seeded, injected);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn prop_elitism_never_regresses(
        seed in any::<u64>(),
        size in 2usize..16,
        limit in 0usize..40,
    ) {
        let problem = more_things_problem();
        let runner = GaRunner::new(problem.random_population(), problem);
        let config = GaConfig::default()
            .with_population_size(size)
            .with_generation_limit(limit)
            .with_seed(seed);

        let result = runner.run(&config).unwrap();

        prop_assert!(result.fitness_history.len() <= limit + 1);
        prop_assert_eq!(result.population.len(), size);
        for window in result.fitness_history.windows(2) {
            prop_assert!(window[1] >= window[0]);
        }
    }
}
