//! DroneCover Prelude - convenient imports for common usage.
//!
//! ```rust
//! use dronecover::prelude::*;
//! ```

pub use crate::mission::CoverageMission;
pub use crate::report::{MissionReport, RunId};

// Re-export from the algorithm crates
pub use dronecover_evolve::prelude::*;
