//! knapsack - evolve an item selection that fits a weight capacity.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use knapsack_ga::ga::{FlipMutation, GaConfig, GaRunner, Selection};
use knapsack_ga::knapsack::{catalog, Item, KnapsackProblem};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "knapsack")]
#[command(about = "Genetic algorithm search for a 0/1 knapsack selection", long_about = None)]
struct Cli {
    /// Built-in item catalog
    #[arg(long, value_enum, default_value_t = Catalog::MoreThings, conflicts_with = "items")]
    catalog: Catalog,

    /// JSON file holding an array of {"name", "value", "weight"} items
    #[arg(long)]
    items: Option<PathBuf>,

    /// Weight capacity
    #[arg(long, default_value_t = catalog::DEFAULT_CAPACITY)]
    capacity: u64,

    /// Stop once the best selection reaches this value
    #[arg(long, default_value_t = catalog::DEFAULT_FITNESS_LIMIT)]
    fitness_limit: u64,

    /// Maximum number of generations [default: sized to the catalog]
    #[arg(long)]
    generations: Option<usize>,

    /// Population size, even numbers recommended [default: sized to the catalog]
    #[arg(long)]
    population: Option<usize>,

    /// Parent selection strategy
    #[arg(long, value_enum, default_value_t = SelectionArg::Roulette)]
    selection: SelectionArg,

    /// Tournament size when --selection tournament
    #[arg(long, default_value_t = 3)]
    tournament_size: usize,

    /// Mutation attempts per child
    #[arg(long, default_value_t = 1)]
    mutations: usize,

    /// Per-attempt probability of keeping the chosen slot
    #[arg(long, default_value_t = 0.5)]
    mutation_probability: f64,

    /// Random seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Catalog {
    Things,
    MoreThings,
}

#[derive(Clone, Copy, ValueEnum)]
enum SelectionArg {
    Roulette,
    Tournament,
    Rank,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let items = match &cli.items {
        Some(path) => load_items(path)?,
        None => match cli.catalog {
            Catalog::Things => catalog::things(),
            Catalog::MoreThings => catalog::more_things(),
        },
    };
    let problem = KnapsackProblem::new(items, cli.capacity);

    let selection = match cli.selection {
        SelectionArg::Roulette => Selection::Roulette,
        SelectionArg::Tournament => Selection::Tournament(cli.tournament_size),
        SelectionArg::Rank => Selection::Rank,
    };
    let mutation = FlipMutation::new(cli.mutations, cli.mutation_probability)?;

    let config = build_config(&cli, problem.len());

    let runner = GaRunner::new(problem.random_population(), problem)
        .with_selector(selection)
        .with_mutator(mutation);

    let start = Instant::now();
    let result = runner.run(&config)?;
    let elapsed = start.elapsed();

    println!("generations: {}", result.generations);
    println!("elapsed: {:.6}s", elapsed.as_secs_f64());
    match result.best() {
        Some(best) => {
            let problem = runner.evaluator();
            println!("best value: {}", result.best_fitness);
            println!("best weight: {}", problem.total_weight(best)?);
            println!("best selection: {:?}", problem.selected_names(best)?);
        }
        None => println!("population is empty"),
    }

    Ok(())
}

/// Starts from the preset for `item_count` and applies explicit overrides.
fn build_config(cli: &Cli, item_count: usize) -> GaConfig {
    let mut config = GaConfig::auto_select(item_count).with_fitness_limit(cli.fitness_limit);
    if let Some(population) = cli.population {
        config = config.with_population_size(population);
    }
    if let Some(generations) = cli.generations {
        config = config.with_generation_limit(generations);
    }
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    config
}

fn load_items(path: &Path) -> Result<Vec<Item>> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("reading item catalog {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("parsing item catalog {}", path.display()))
}
