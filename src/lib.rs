//! Generational genetic algorithm over fixed-length binary genomes,
//! specialized to 0/1 knapsack item selection.
//!
//! - **Genetic Algorithm (GA)**: the evolutionary loop with pluggable
//!   population, evaluation, selection, crossover, and mutation strategies.
//! - **Knapsack**: item catalogs, capacity-constrained fitness, and genome
//!   decoding back to item names.
//!
//! # Architecture
//!
//! The [`ga`] module knows nothing about items or weights; it only sees
//! `bool` genomes and `u64` fitness scores through the [`ga::Evaluator`]
//! trait. The [`knapsack`] module supplies the one evaluator this crate
//! ships. Randomness is always passed in explicitly (see [`random`]), so
//! every run is reproducible from a seed.
//!
//! # Example
//!
//! ```
//! use knapsack_ga::ga::{GaConfig, GaRunner};
//! use knapsack_ga::knapsack::{catalog, KnapsackProblem};
//!
//! let problem = KnapsackProblem::new(catalog::more_things(), catalog::DEFAULT_CAPACITY);
//! let runner = GaRunner::new(problem.random_population(), problem);
//! let config = GaConfig::default()
//!     .with_fitness_limit(catalog::DEFAULT_FITNESS_LIMIT)
//!     .with_seed(42);
//!
//! let result = runner.run(&config)?;
//! let best = result.best().expect("non-empty population");
//! let names = runner.evaluator().selected_names(best)?;
//! assert!(result.generations <= config.generation_limit);
//! # let _ = names;
//! # Ok::<(), knapsack_ga::GaError>(())
//! ```

pub mod error;
pub mod ga;
pub mod knapsack;
pub mod random;

pub use error::{GaError, Result};
