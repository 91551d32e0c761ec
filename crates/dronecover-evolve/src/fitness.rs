//! Coverage fitness.
//!
//! Fitness of a genome is the number of distinct targets lying within the
//! radius of at least one drone. A target under several drones counts once.
//! This runs once per individual per generation and dominates run time.

use dronecover_core::codec::Genome;
use dronecover_core::config::Radius;
use dronecover_core::types::Coordinate;
use serde::Serialize;

/// Count distinct targets within `radius` of any drone in `genome`.
///
/// `radius` is not checked here; callers validate it once through
/// [`Radius`] before evaluation starts.
pub fn coverage(genome: &Genome, targets: &[Coordinate], radius: f64) -> u32 {
    let mut covered = vec![false; targets.len()];
    let mut count = 0u32;

    for drone in genome.iter().map(|gene| gene.decode()) {
        for (index, target) in targets.iter().enumerate() {
            if !covered[index] && drone.distance_to(target) <= radius {
                covered[index] = true;
                count += 1;
            }
        }
    }

    count
}

/// Evaluates genomes against one fixed target set and radius.
///
/// Borrowing the targets keeps them read-only for the whole run.
#[derive(Debug, Clone, Copy)]
pub struct CoverageEvaluator<'a> {
    targets: &'a [Coordinate],
    radius: Radius,
}

impl<'a> CoverageEvaluator<'a> {
    pub fn new(targets: &'a [Coordinate], radius: Radius) -> Self {
        Self { targets, radius }
    }

    pub fn evaluate(&self, genome: &Genome) -> u32 {
        coverage(genome, self.targets, self.radius.get())
    }
}

/// A genome paired with its coverage.
///
/// Only constructible by evaluating, so the fitness always matches the genome.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Individual {
    genome: Genome,
    fitness: u32,
}

impl Individual {
    pub fn evaluate(genome: Genome, evaluator: &CoverageEvaluator<'_>) -> Self {
        let fitness = evaluator.evaluate(&genome);
        Self { genome, fitness }
    }

    pub fn genome(&self) -> &Genome {
        &self.genome
    }

    pub fn fitness(&self) -> u32 {
        self.fitness
    }
}
