//! GA evolutionary loop execution.
//!
//! [`GaRunner`] orchestrates the complete evolutionary process:
//! initialization → evaluation → selection → crossover → mutation → repeat.
//!
//! # State machine
//!
//! ```text
//! INITIALIZING ──► EVALUATING ──► TERMINATED
//!                     ▲    │
//!                     │    ▼
//!                  REPRODUCING
//! ```
//!
//! Every evaluation pass sorts the population best-first and checks, in
//! order: fitness target reached, generation limit reached, cancellation
//! requested. Otherwise the top [`ELITE_COUNT`] genomes are carried over
//! and the rest of the next generation is bred from selected pairs.

use super::config::GaConfig;
use super::operators::{FlipMutation, SinglePointCrossover};
use super::selection::Selection;
use super::types::{
    Crossover, Evaluator, Fitness, Genome, Mutator, Population, Populator, Selector,
};
use crate::error::Result;
use crate::random::{create_rng, entropy_rng};
use rand::Rng;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tracing::{debug, info, instrument};

/// Number of top-ranked genomes copied unchanged into the next generation.
pub const ELITE_COUNT: usize = 2;

/// Why a run stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The best genome reached [`GaConfig::fitness_limit`].
    FitnessReached,
    /// [`GaConfig::generation_limit`] generations were completed.
    GenerationLimit,
    /// The cancellation flag was observed between generations.
    Cancelled,
    /// The populator produced no genomes; there was nothing to evolve.
    EmptyPopulation,
}

/// Result of a GA optimization run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GaResult {
    /// The final population, sorted by descending fitness.
    pub population: Population,

    /// Fitness of `population[0]`, or 0 for an empty population.
    pub best_fitness: Fitness,

    /// Number of completed generations (reproduction cycles).
    pub generations: usize,

    /// Which condition ended the run.
    pub termination: Termination,

    /// Best fitness of every evaluation pass, generation 0 first.
    pub fitness_history: Vec<Fitness>,
}

impl GaResult {
    /// The best genome of the final population.
    pub fn best(&self) -> Option<&Genome> {
        self.population.first()
    }
}

/// Executes the GA evolutionary loop.
///
/// The runner owns one strategy per role. [`GaRunner::new`] installs the
/// defaults ([`Selection::Roulette`], [`SinglePointCrossover`],
/// [`FlipMutation::default`]); each can be replaced with the `with_*`
/// builders.
///
/// # Usage
///
/// ```
/// use knapsack_ga::ga::{GaConfig, GaRunner, RandomPopulation, Selection};
/// use knapsack_ga::knapsack::{Item, KnapsackProblem};
///
/// let problem = KnapsackProblem::new(
///     vec![
///         Item::new("map", 9, 150),
///         Item::new("compass", 13, 35),
///         Item::new("water", 153, 200),
///     ],
///     400,
/// );
/// let runner = GaRunner::new(RandomPopulation::new(problem.len()), problem)
///     .with_selector(Selection::Tournament(2));
/// let config = GaConfig::default().with_generation_limit(20).with_seed(42);
///
/// let result = runner.run(&config).unwrap();
/// assert!(result.generations <= 20);
/// assert!(result.best_fitness <= 175);
/// ```
#[derive(Debug, Clone)]
pub struct GaRunner<P, E, S = Selection, C = SinglePointCrossover, M = FlipMutation> {
    populator: P,
    evaluator: E,
    selector: S,
    crossover: C,
    mutator: M,
}

impl<P: Populator, E: Evaluator> GaRunner<P, E> {
    /// Creates a runner with the default selection, crossover, and mutation.
    pub fn new(populator: P, evaluator: E) -> Self {
        Self {
            populator,
            evaluator,
            selector: Selection::default(),
            crossover: SinglePointCrossover,
            mutator: FlipMutation::default(),
        }
    }
}

impl<P, E, S, C, M> GaRunner<P, E, S, C, M> {
    /// Replaces the selection strategy.
    pub fn with_selector<S2: Selector>(self, selector: S2) -> GaRunner<P, E, S2, C, M> {
        GaRunner {
            populator: self.populator,
            evaluator: self.evaluator,
            selector,
            crossover: self.crossover,
            mutator: self.mutator,
        }
    }

    /// Replaces the crossover operator.
    pub fn with_crossover<C2: Crossover>(self, crossover: C2) -> GaRunner<P, E, S, C2, M> {
        GaRunner {
            populator: self.populator,
            evaluator: self.evaluator,
            selector: self.selector,
            crossover,
            mutator: self.mutator,
        }
    }

    /// Replaces the mutation operator.
    pub fn with_mutator<M2: Mutator>(self, mutator: M2) -> GaRunner<P, E, S, C, M2> {
        GaRunner {
            populator: self.populator,
            evaluator: self.evaluator,
            selector: self.selector,
            crossover: self.crossover,
            mutator,
        }
    }

    /// The fitness evaluator driving this runner.
    pub fn evaluator(&self) -> &E {
        &self.evaluator
    }
}

impl<P, E, S, C, M> GaRunner<P, E, S, C, M>
where
    P: Populator,
    E: Evaluator,
    S: Selector,
    C: Crossover,
    M: Mutator,
{
    /// Runs the GA, seeding the generator from [`GaConfig::seed`].
    ///
    /// # Errors
    /// Propagates the first precondition violation raised by a strategy
    /// (for example a genome that does not match the item catalog).
    pub fn run(&self, config: &GaConfig) -> Result<GaResult> {
        self.run_with_cancel(config, None)
    }

    /// Runs the GA with an optional cancellation token.
    ///
    /// If `cancel` is `Some` and the flag is set to `true`, the GA stops
    /// before breeding the next generation and returns the current sorted
    /// population.
    pub fn run_with_cancel(
        &self,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
    ) -> Result<GaResult> {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => entropy_rng(),
        };
        self.evolve(config, &mut rng, cancel.as_deref())
    }

    /// Runs the GA with a caller-owned random source.
    ///
    /// [`GaConfig::seed`] is ignored.
    pub fn run_with_rng<R: Rng>(&self, config: &GaConfig, rng: &mut R) -> Result<GaResult> {
        self.evolve(config, rng, None)
    }

    /// The loop behind every `run*` entry point.
    #[instrument(
        level = "debug",
        skip_all,
        fields(
            population_size = config.population_size,
            generation_limit = config.generation_limit,
            fitness_limit = config.fitness_limit,
        )
    )]
    fn evolve<R: Rng>(
        &self,
        config: &GaConfig,
        rng: &mut R,
        cancel: Option<&AtomicBool>,
    ) -> Result<GaResult> {
        // 1. Initialize population
        let mut population = self.populator.populate(config.population_size, rng);

        let mut generation = 0usize;
        let mut fitness_history = Vec::new();

        // 2. Evolutionary loop
        let (termination, best_fitness) = loop {
            let (ranked, best_fitness) = rank_population(population, &self.evaluator)?;
            population = ranked;

            if population.is_empty() {
                break (Termination::EmptyPopulation, 0);
            }

            fitness_history.push(best_fitness);
            debug!(generation, best_fitness, "evaluated generation");

            if best_fitness >= config.fitness_limit {
                break (Termination::FitnessReached, best_fitness);
            }
            if generation >= config.generation_limit {
                break (Termination::GenerationLimit, best_fitness);
            }
            if cancel.is_some_and(|flag| flag.load(Ordering::Relaxed)) {
                break (Termination::Cancelled, best_fitness);
            }

            population = self.reproduce(&population, rng)?;
            generation += 1;
        };

        info!(
            generations = generation,
            best_fitness,
            ?termination,
            "evolution finished"
        );

        Ok(GaResult {
            population,
            best_fitness,
            generations: generation,
            termination,
            fitness_history,
        })
    }

    /// Builds the next generation from a population sorted best-first.
    ///
    /// The result has the same size as `ranked`.
    fn reproduce<R: Rng>(&self, ranked: &[Genome], rng: &mut R) -> Result<Population> {
        let size = ranked.len();
        let mut next_gen: Population = Vec::with_capacity(size);

        // Elite preservation
        next_gen.extend(ranked.iter().take(ELITE_COUNT).cloned());

        // Generate offspring
        while next_gen.len() < size {
            let (parent_a, parent_b) = self.selector.select_pair(ranked, &self.evaluator, rng)?;
            let (child_a, child_b) = self.crossover.crossover(parent_a, parent_b, rng)?;

            let child_a = self.mutator.mutate(child_a, rng);
            let child_b = self.mutator.mutate(child_b, rng);

            next_gen.push(child_a);
            if next_gen.len() < size {
                next_gen.push(child_b);
            }
        }

        Ok(next_gen)
    }
}

/// Scores and sorts a population by descending fitness.
///
/// The sort is stable, so equal-fitness genomes keep their previous
/// relative order. Returns the sorted population and its best fitness.
fn rank_population<E: Evaluator>(
    population: Population,
    evaluator: &E,
) -> Result<(Population, Fitness)> {
    let mut scored = population
        .into_iter()
        .map(|genome| evaluator.evaluate(&genome).map(|f| (f, genome)))
        .collect::<Result<Vec<_>>>()?;

    scored.sort_by(|a, b| b.0.cmp(&a.0));

    let best = scored.first().map_or(0, |(f, _)| *f);
    Ok((scored.into_iter().map(|(_, genome)| genome).collect(), best))
}

// ============================================================================
// Tests
// ============================================================================
