//! Optimizer loop.
//!
//! A run moves through `Initializing → Iterating → Done`. Initializing
//! builds and sorts a random population; every iteration breeds a new
//! generation with elitism, sorts it and truncates it to the configured
//! size. There is no early exit: a run always completes its configured
//! number of generations. Generations never overlap.

use crate::fitness::{CoverageEvaluator, Individual};
use crate::generation::{next_generation, Breeding};
use crate::population::{GenerationStats, Population};
use dronecover_core::config::{EvolutionConfig, Radius};
use dronecover_core::error::Result;
use dronecover_core::types::Coordinate;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use serde::Serialize;
use tracing::{debug, info};

/// Where a run is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RunState {
    /// No population yet.
    Initializing,
    /// `completed` generation steps done so far.
    Iterating { completed: u32 },
    /// Final population ready.
    Done,
}

/// Result of a finished run.
#[derive(Debug, Clone, Serialize)]
pub struct OptimizationOutcome {
    /// Index 0 of the final population.
    pub best: Individual,
    /// Master seed the run used.
    pub seed: u64,
    /// One entry per population, initial population first.
    pub history: Vec<GenerationStats>,
}

/// Drives runs with a fixed, validated configuration.
#[derive(Debug, Clone)]
pub struct Optimizer {
    config: EvolutionConfig,
}

impl Optimizer {
    pub fn new(config: EvolutionConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EvolutionConfig {
        &self.config
    }

    /// Begin a run over `targets`. Nothing is computed until the first step.
    pub fn start<'a>(&self, targets: &'a [Coordinate], radius: Radius) -> EvolutionRun<'a> {
        let seed = self.config.seed.unwrap_or_else(|| rand::rng().random());
        EvolutionRun::new(self.config.clone(), targets, radius, seed)
    }

    /// Run to completion.
    pub fn run(&self, targets: &[Coordinate], radius: Radius) -> OptimizationOutcome {
        self.start(targets, radius).finish()
    }
}

/// One optimization run, stepped a generation at a time.
pub struct EvolutionRun<'a> {
    config: EvolutionConfig,
    evaluator: CoverageEvaluator<'a>,
    rng: Pcg64,
    seed: u64,
    state: RunState,
    population: Population,
    history: Vec<GenerationStats>,
}

impl<'a> EvolutionRun<'a> {
    fn new(config: EvolutionConfig, targets: &'a [Coordinate], radius: Radius, seed: u64) -> Self {
        info!(
            seed,
            targets = targets.len(),
            radius = radius.get(),
            generations = config.generations,
            generation_size = config.generation_size,
            "starting optimization run"
        );
        Self {
            history: Vec::with_capacity(config.generations as usize + 1),
            config,
            evaluator: CoverageEvaluator::new(targets, radius),
            rng: Pcg64::seed_from_u64(seed),
            seed,
            state: RunState::Initializing,
            population: Population::default(),
        }
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Total steps this run takes, initialization included.
    pub fn total_steps(&self) -> u64 {
        u64::from(self.config.generations) + 1
    }

    pub fn population(&self) -> &Population {
        &self.population
    }

    pub fn history(&self) -> &[GenerationStats] {
        &self.history
    }

    /// Advance one state. Returns the stats of the population just
    /// produced, or `None` once the run is done.
    pub fn step(&mut self) -> Option<GenerationStats> {
        let generation = match self.state {
            RunState::Done => return None,
            RunState::Initializing => {
                self.population = Population::random_init(
                    self.config.generation_size,
                    self.config.number_of_agents,
                    &self.evaluator,
                    &mut self.rng,
                );
                0
            }
            RunState::Iterating { completed } => {
                let breeding = Breeding {
                    size: self.config.generation_size,
                    use_elitism: self.config.use_elitism,
                    mutation_probability: self.config.mutation_probability,
                };
                self.population =
                    next_generation(&self.population, breeding, &self.evaluator, &mut self.rng);
                completed + 1
            }
        };

        self.population
            .sort_descending_and_truncate(self.config.generation_size);

        let stats = self.population.stats(generation);
        debug!(
            generation,
            best = stats.best,
            mean = stats.mean,
            worst = stats.worst,
            "generation evaluated"
        );
        self.history.push(stats);

        self.state = if generation >= self.config.generations {
            RunState::Done
        } else {
            RunState::Iterating { completed: generation }
        };
        Some(stats)
    }

    /// Step until done and hand back the best individual.
    pub fn finish(mut self) -> OptimizationOutcome {
        while self.step().is_some() {}

        let best = self
            .population
            .into_individuals()
            .into_iter()
            .next()
            .expect("a validated run always ends with a non-empty population");

        info!(seed = self.seed, fitness = best.fitness(), "optimization run finished");

        OptimizationOutcome {
            best,
            seed: self.seed,
            history: self.history,
        }
    }
}
