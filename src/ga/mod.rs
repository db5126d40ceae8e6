//! Genetic Algorithm framework for binary genomes.
//!
//! A generational GA built on one trait per role. The driver,
//! [`GaRunner`], depends on each role only through its trait:
//!
//! # Core Traits
//!
//! - [`Populator`]: creates the initial population
//! - [`Evaluator`]: scores a genome (higher is better)
//! - [`Selector`]: picks a parent pair
//! - [`Crossover`]: recombines two parents into two children
//! - [`Mutator`]: perturbs a child
//!
//! # Key Types
//!
//! - [`GaConfig`]: population size, generation limit, fitness target, seed
//! - [`GaRunner`]: executes the evolutionary loop
//! - [`GaResult`]: final sorted population, generation count, history
//!
//! # Submodules
//!
//! - [`operators`]: random population, single-point crossover, flip mutation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - De Jong (2006), *Evolutionary Computation: A Unified Approach*

mod config;
pub mod operators;
mod runner;
mod selection;
mod types;

pub use config::GaConfig;
pub use operators::{FlipMutation, RandomPopulation, SinglePointCrossover};
pub use runner::{GaResult, GaRunner, Termination, ELITE_COUNT};
pub use selection::Selection;
pub use types::{
    Crossover, Evaluator, Fitness, Genome, Mutator, Population, Populator, Selector,
};
