//! # DroneCover Core
//!
//! Shared types for placing coverage drones over a field of point targets.
//!
//! - **Coordinate** - a point in the square field `[0, FIELD_EXTENT)²`
//! - **Gene** - one drone position packed into a 32-bit integer
//! - **Genome** - the fixed-length gene sequence for a whole swarm
//! - **TargetField** - the set of targets for a run, regenerated wholesale
//! - **EvolutionConfig** / **Radius** - validated run parameters
//!
//! ## Quick Start
//!
//! ```rust
//! use dronecover_core::prelude::*;
//!
//! let gene = Gene::encode(Coordinate::new(10.0, 10.0));
//! let decoded = gene.decode();
//! assert!((decoded.x - 10.0).abs() <= FIELD_EXTENT / 65536.0);
//! ```

pub mod types;
pub mod codec;
pub mod field;
pub mod config;
pub mod error;
pub mod prelude;
