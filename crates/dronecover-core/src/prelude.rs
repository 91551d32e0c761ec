//! DroneCover Core Prelude - convenient imports for common usage.
//!
//! ```rust
//! use dronecover_core::prelude::*;
//! ```

pub use crate::types::{Coordinate, FIELD_EXTENT};
pub use crate::codec::{Gene, Genome, QUANTUM};
pub use crate::field::TargetField;
pub use crate::config::{EvolutionConfig, Radius, MAX_RANDOM_TARGETS, MIN_RANDOM_TARGETS};

// Re-export error types
pub use crate::error::{ConfigError, DroneCoverError, Result};
