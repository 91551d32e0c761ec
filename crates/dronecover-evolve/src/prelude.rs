//! DroneCover Evolve Prelude - convenient imports for common usage.
//!
//! ```rust
//! use dronecover_evolve::prelude::*;
//! ```

pub use crate::fitness::{coverage, CoverageEvaluator, Individual};
pub use crate::population::{GenerationStats, Population};
pub use crate::generation::{breed, next_generation, Breeding};
pub use crate::optimizer::{EvolutionRun, OptimizationOutcome, Optimizer, RunState};

// Re-export from core
pub use dronecover_core::prelude::*;
