//! Generation operator - elitism plus parallel crossover and mutation.
//!
//! Children are bred from two parents picked uniformly with replacement.
//! Each gene position gets its own crossover split: bits at or above the
//! split come from the first parent, bits below it from the second. Each
//! child gene then flips one random bit with the mutation probability.

use crate::fitness::{CoverageEvaluator, Individual};
use crate::population::Population;
use dronecover_core::codec::{Gene, Genome};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use rayon::prelude::*;

const GENE_BITS: u32 = u32::BITS;

/// How a new generation is produced from its parents.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Breeding {
    /// Size of the produced generation.
    pub size: usize,
    pub use_elitism: bool,
    pub mutation_probability: f64,
}

/// Produce `breeding.size` children from `parents`.
///
/// With elitism the fittest parent is copied into slot 0 without
/// re-evaluation. Remaining slots are bred in parallel, each from its own
/// generator seeded from `rng`.
///
/// # Panics
///
/// Panics if `parents` is empty.
pub fn next_generation<R: Rng + ?Sized>(
    parents: &Population,
    breeding: Breeding,
    evaluator: &CoverageEvaluator<'_>,
    rng: &mut R,
) -> Population {
    assert!(
        !parents.is_empty(),
        "next_generation requires at least one parent"
    );

    let mut children = Vec::with_capacity(breeding.size);
    if breeding.use_elitism && breeding.size > 0 {
        if let Some(elite) = parents.best() {
            children.push(elite.clone());
        }
    }

    let seeds: Vec<u64> = (children.len()..breeding.size)
        .map(|_| rng.random())
        .collect();

    let parent_pool = parents.individuals();
    let bred: Vec<Individual> = seeds
        .into_par_iter()
        .map(|seed| {
            let mut slot_rng = Pcg64::seed_from_u64(seed);
            let first = &parent_pool[slot_rng.random_range(0..parent_pool.len())];
            let second = &parent_pool[slot_rng.random_range(0..parent_pool.len())];
            let child = breed(
                first.genome(),
                second.genome(),
                breeding.mutation_probability,
                &mut slot_rng,
            );
            Individual::evaluate(child, evaluator)
        })
        .collect();

    children.extend(bred);
    Population::from_individuals(children)
}

/// Per-gene single-point crossover followed by per-gene bit-flip mutation.
///
/// A parent may be paired with itself; the child is then a copy plus mutation.
pub fn breed<R: Rng + ?Sized>(
    first: &Genome,
    second: &Genome,
    mutation_probability: f64,
    rng: &mut R,
) -> Genome {
    first
        .iter()
        .zip(second.iter())
        .map(|(a, b)| {
            let split = rng.random_range(0..GENE_BITS);
            let child = a.splice(b, split);
            mutate(child, mutation_probability, rng)
        })
        .collect()
}

/// Flip one uniformly chosen bit with probability `probability`.
pub fn mutate<R: Rng + ?Sized>(gene: Gene, probability: f64, rng: &mut R) -> Gene {
    if rng.random::<f64>() < probability {
        gene.flip(rng.random_range(0..GENE_BITS))
    } else {
        gene
    }
}
