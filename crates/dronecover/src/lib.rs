//! # DroneCover
//!
//! Places a fixed number of coverage drones over a field of point targets,
//! maximizing how many targets fall inside at least one drone's radius.
//!
//! ## Quick Start
//!
//! ```rust
//! use dronecover::prelude::*;
//!
//! let config = EvolutionConfig::default()
//!     .with_generations(20)
//!     .with_seed(7);
//! let mut mission = CoverageMission::seeded(config, 42).unwrap();
//! mission.set_radius(10.0).unwrap();
//!
//! let outcome = mission.run_optimization().unwrap();
//! for drone in mission.decode_genome(outcome.best.genome()) {
//!     println!("{drone}");
//! }
//! println!("covered {} of {}", outcome.best.fitness(), mission.current_targets().len());
//! ```
//!
//! ## Architecture
//!
//! - [`dronecover_core`] - Coordinates, gene codec, target field, configuration, errors
//! - [`dronecover_evolve`] - Fitness, population, breeding, optimizer loop
//! - [`mission`] - The [`CoverageMission`](mission::CoverageMission) a UI or CLI drives
//! - [`report`] - Exportable run reports
//!
//! ## Genome Encoding
//!
//! Each drone is one `u32` gene: the high 16 bits hold x and the low 16
//! bits hold y, each scaled to `[0, 100)`. Crossover splices genes at a
//! random bit per gene position; mutation flips a single random bit.

pub use dronecover_core;
pub use dronecover_evolve;

pub mod mission;
pub mod report;
pub mod prelude;
