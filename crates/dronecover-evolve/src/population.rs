//! Population - individuals ordered by fitness.
//!
//! Individuals are replaced, never edited. The only population-wide
//! operations are random initialization and sort-then-truncate.

use crate::fitness::{CoverageEvaluator, Individual};
use dronecover_core::codec::Genome;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

/// Fitness summary of one generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GenerationStats {
    /// 0 for the initial population.
    pub generation: u32,
    pub best: u32,
    pub mean: f64,
    pub worst: u32,
}

/// An ordered collection of evaluated genomes.
#[derive(Debug, Clone, Default)]
pub struct Population {
    individuals: Vec<Individual>,
}

impl Population {
    pub fn from_individuals(individuals: Vec<Individual>) -> Self {
        Self { individuals }
    }

    /// Build `size` individuals of `gene_count` uniformly random genes each,
    /// evaluated in parallel.
    ///
    /// Each slot gets its own generator seeded from `rng`, so the result
    /// depends only on `rng`'s state, not on thread scheduling.
    pub fn random_init<R: Rng + ?Sized>(
        size: usize,
        gene_count: usize,
        evaluator: &CoverageEvaluator<'_>,
        rng: &mut R,
    ) -> Self {
        let seeds: Vec<u64> = (0..size).map(|_| rng.random()).collect();

        let individuals = seeds
            .into_par_iter()
            .map(|seed| {
                let mut slot_rng = Pcg64::seed_from_u64(seed);
                Individual::evaluate(Genome::random(gene_count, &mut slot_rng), evaluator)
            })
            .collect();

        Self { individuals }
    }

    /// Sort by fitness, highest first, and drop everything past `cap`.
    /// Ties land in no particular order.
    pub fn sort_descending_and_truncate(&mut self, cap: usize) {
        self.individuals
            .sort_unstable_by(|a, b| b.fitness().cmp(&a.fitness()));
        self.individuals.truncate(cap);
    }

    /// The fittest individual, wherever it sits.
    pub fn best(&self) -> Option<&Individual> {
        self.individuals.iter().max_by_key(|i| i.fitness())
    }

    pub fn get(&self, index: usize) -> Option<&Individual> {
        self.individuals.get(index)
    }

    pub fn individuals(&self) -> &[Individual] {
        &self.individuals
    }

    pub fn into_individuals(self) -> Vec<Individual> {
        self.individuals
    }

    pub fn len(&self) -> usize {
        self.individuals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.individuals.is_empty()
    }

    pub fn stats(&self, generation: u32) -> GenerationStats {
        let fitnesses = self.individuals.iter().map(Individual::fitness);
        let best = fitnesses.clone().max().unwrap_or(0);
        let worst = fitnesses.clone().min().unwrap_or(0);
        let mean = if self.individuals.is_empty() {
            0.0
        } else {
            fitnesses.map(f64::from).sum::<f64>() / self.individuals.len() as f64
        };

        GenerationStats {
            generation,
            best,
            mean,
            worst,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dronecover_core::config::Radius;
    use dronecover_core::field::TargetField;

    fn field(seed: u64) -> TargetField {
        let mut rng = Pcg64::seed_from_u64(seed);
        TargetField::random(60, &mut rng).unwrap()
    }

    #[test]
    fn random_init_builds_requested_shape() {
        let field = field(1);
        let evaluator = CoverageEvaluator::new(field.snapshot(), Radius::new(10.0).unwrap());
        let mut rng = Pcg64::seed_from_u64(2);
        let population = Population::random_init(25, 7, &evaluator, &mut rng);

        assert_eq!(population.len(), 25);
        for individual in population.individuals() {
            assert_eq!(individual.genome().len(), 7);
            assert_eq!(individual.fitness(), evaluator.evaluate(individual.genome()));
        }
    }

    #[test]
    fn random_init_is_reproducible() {
        let field = field(3);
        let evaluator = CoverageEvaluator::new(field.snapshot(), Radius::new(10.0).unwrap());
        let a = Population::random_init(40, 10, &evaluator, &mut Pcg64::seed_from_u64(9));
        let b = Population::random_init(40, 10, &evaluator, &mut Pcg64::seed_from_u64(9));
        assert_eq!(a.individuals(), b.individuals());
    }

    #[test]
    fn sort_orders_descending_and_truncates() {
        let field = field(4);
        let evaluator = CoverageEvaluator::new(field.snapshot(), Radius::new(15.0).unwrap());
        let mut population =
            Population::random_init(50, 10, &evaluator, &mut Pcg64::seed_from_u64(5));
        let best = population.best().unwrap().fitness();

        population.sort_descending_and_truncate(20);

        assert_eq!(population.len(), 20);
        assert_eq!(population.get(0).unwrap().fitness(), best);
        let fitnesses: Vec<u32> = population.individuals().iter().map(|i| i.fitness()).collect();
        assert!(fitnesses.windows(2).all(|w| w[0] >= w[1]));
    }

    #[test]
    fn truncate_never_pads() {
        let mut population = Population::default();
        population.sort_descending_and_truncate(10);
        assert!(population.is_empty());
    }

    #[test]
    fn stats_summarize_fitness() {
        let field = field(6);
        let evaluator = CoverageEvaluator::new(field.snapshot(), Radius::new(12.0).unwrap());
        let population =
            Population::random_init(30, 10, &evaluator, &mut Pcg64::seed_from_u64(8));
        let stats = population.stats(0);
        assert!(stats.worst as f64 <= stats.mean && stats.mean <= stats.best as f64);
        assert_eq!(stats.best, population.best().unwrap().fitness());
    }
}
