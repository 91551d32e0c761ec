//! Mission reports: a finished run packaged for display and export.

use dronecover_core::codec::Genome;
use dronecover_core::config::{EvolutionConfig, Radius};
use dronecover_core::error::Result;
use dronecover_core::types::Coordinate;
use dronecover_evolve::optimizer::OptimizationOutcome;
use dronecover_evolve::population::GenerationStats;
use serde::{Deserialize, Serialize};
use std::path::Path;
use uuid::Uuid;

/// Unique identifier for an optimization run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RunId(pub Uuid);

impl RunId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RunId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RunId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything needed to redraw or audit a run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionReport {
    pub run_id: RunId,
    pub radius: Radius,
    /// Master seed; replaying with it reproduces the run.
    pub seed: u64,
    pub config: EvolutionConfig,
    pub targets: Vec<Coordinate>,
    pub genome: Genome,
    /// Distinct targets covered by `genome`.
    pub fitness: u32,
    /// Decoded `genome`, one per drone.
    pub drones: Vec<Coordinate>,
    pub history: Vec<GenerationStats>,
}

impl MissionReport {
    pub fn new(
        radius: Radius,
        config: EvolutionConfig,
        targets: Vec<Coordinate>,
        outcome: &OptimizationOutcome,
    ) -> Self {
        let genome = outcome.best.genome().clone();
        Self {
            run_id: RunId::new(),
            radius,
            seed: outcome.seed,
            config,
            targets,
            drones: genome.decode(),
            genome,
            fitness: outcome.best.fitness(),
            history: outcome.history.clone(),
        }
    }

    /// Covered share of the targets, in `[0, 1]`.
    pub fn coverage_ratio(&self) -> f64 {
        if self.targets.is_empty() {
            0.0
        } else {
            self.fitness as f64 / self.targets.len() as f64
        }
    }

    /// Whether target `index` lies inside some drone's radius.
    pub fn is_covered(&self, index: usize) -> bool {
        self.targets.get(index).is_some_and(|target| {
            self.drones
                .iter()
                .any(|drone| drone.distance_to(target) <= self.radius.get())
        })
    }

    /// One line per drone: `Drone 1: X = .., Y = ..`.
    pub fn drone_lines(&self) -> Vec<String> {
        self.drones
            .iter()
            .enumerate()
            .map(|(i, d)| format!("Drone {}: X = {}, Y = {}", i + 1, d.x, d.y))
            .collect()
    }

    pub fn save_json(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Drone listing as plain text, one drone per line.
    pub fn save_text(&self, path: &Path) -> Result<()> {
        let mut content = self.drone_lines().join("\n");
        content.push('\n');
        std::fs::write(path, content)?;
        Ok(())
    }
}
