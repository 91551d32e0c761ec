//! # DroneCover Evolve
//!
//! The genetic algorithm that places a swarm of coverage drones.
//!
//! - **fitness** - distinct targets covered by a genome
//! - **population** - random initialization, sort-and-truncate, statistics
//! - **generation** - elitism, per-gene bitmask crossover, single-bit mutation
//! - **optimizer** - the `Initializing → Iterating → Done` run loop
//!
//! Fitness evaluation runs on the rayon pool. Every parallel task draws from
//! its own generator, seeded from the run's master seed, so a seeded run is
//! reproducible regardless of thread count.

pub mod fitness;
pub mod population;
pub mod generation;
pub mod optimizer;
pub mod prelude;
