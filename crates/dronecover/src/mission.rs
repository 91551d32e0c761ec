//! Coverage mission - the surface a UI or CLI drives.
//!
//! A mission owns the target field, the coverage radius for the next run
//! and the evolution configuration. Targets can be regenerated between
//! runs; the radius is fixed once a run starts because the run borrows it.

use crate::report::MissionReport;
use dronecover_core::codec::Genome;
use dronecover_core::config::{EvolutionConfig, Radius};
use dronecover_core::error::{DroneCoverError, Result};
use dronecover_core::field::TargetField;
use dronecover_core::types::Coordinate;
use dronecover_evolve::optimizer::{EvolutionRun, OptimizationOutcome, Optimizer};
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::info;

/// Targets, radius and configuration for optimization runs.
pub struct CoverageMission {
    field: TargetField,
    radius: Option<Radius>,
    optimizer: Optimizer,
    rng: Pcg64,
}

impl CoverageMission {
    /// A mission with a random field of 30–99 targets and no radius yet.
    pub fn new(config: EvolutionConfig) -> Result<Self> {
        Self::seeded(config, rand::rng().random())
    }

    /// Like [`CoverageMission::new`], with target generation seeded.
    pub fn seeded(config: EvolutionConfig, target_seed: u64) -> Result<Self> {
        let mut mission = Self::with_field(config, TargetField::new())?;
        mission.rng = Pcg64::seed_from_u64(target_seed);
        mission.regenerate_random_targets();
        Ok(mission)
    }

    /// A mission over an existing field.
    pub fn with_field(config: EvolutionConfig, field: TargetField) -> Result<Self> {
        Ok(Self {
            field,
            radius: None,
            optimizer: Optimizer::new(config)?,
            rng: Pcg64::seed_from_u64(rand::rng().random()),
        })
    }

    pub fn config(&self) -> &EvolutionConfig {
        self.optimizer.config()
    }

    /// Set the coverage radius for the next run.
    pub fn set_radius(&mut self, radius: f64) -> Result<()> {
        self.radius = Some(Radius::new(radius)?);
        Ok(())
    }

    pub fn radius(&self) -> Option<Radius> {
        self.radius
    }

    /// Replace the targets with `count` fresh ones.
    pub fn regenerate_targets(&mut self, count: usize) -> Result<()> {
        self.field.regenerate(count, &mut self.rng)
    }

    /// Replace the targets with a random number of fresh ones. Returns the count.
    pub fn regenerate_random_targets(&mut self) -> usize {
        self.field.regenerate_random(&mut self.rng)
    }

    pub fn current_targets(&self) -> &[Coordinate] {
        self.field.snapshot()
    }

    pub fn field(&self) -> &TargetField {
        &self.field
    }

    /// One coordinate per drone, in genome order.
    pub fn decode_genome(&self, genome: &Genome) -> Vec<Coordinate> {
        genome.decode()
    }

    /// Begin a run that the caller steps through.
    pub fn start_optimization(&self) -> Result<EvolutionRun<'_>> {
        let radius = self.radius.ok_or(DroneCoverError::MissingRadius)?;
        Ok(self.optimizer.start(self.field.snapshot(), radius))
    }

    /// Run the full optimization and return the best placement found.
    pub fn run_optimization(&self) -> Result<OptimizationOutcome> {
        let outcome = self.start_optimization()?.finish();
        info!(
            fitness = outcome.best.fitness(),
            targets = self.field.len(),
            "mission optimized"
        );
        Ok(outcome)
    }

    /// Package a finished run for export.
    pub fn report(&self, outcome: &OptimizationOutcome) -> Result<MissionReport> {
        let radius = self.radius.ok_or(DroneCoverError::MissingRadius)?;
        Ok(MissionReport::new(
            radius,
            self.config().clone(),
            self.field.snapshot().to_vec(),
            outcome,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quick() -> EvolutionConfig {
        EvolutionConfig::default()
            .with_generation_size(10)
            .with_generations(3)
            .with_seed(2)
    }

    #[test]
    fn new_mission_has_reference_target_count() {
        let mission = CoverageMission::seeded(quick(), 1).unwrap();
        let n = mission.current_targets().len();
        assert!((30..100).contains(&n));
        assert!(mission.radius().is_none());
    }

    #[test]
    fn running_without_radius_fails() {
        let mission = CoverageMission::seeded(quick(), 1).unwrap();
        assert_eq!(
            mission.run_optimization().unwrap_err(),
            DroneCoverError::MissingRadius
        );
    }

    #[test]
    fn rejected_radius_keeps_previous() {
        let mut mission = CoverageMission::seeded(quick(), 1).unwrap();
        mission.set_radius(4.0).unwrap();
        assert!(mission.set_radius(-4.0).is_err());
        assert_eq!(mission.radius().unwrap().get(), 4.0);
    }

    #[test]
    fn invalid_config_is_rejected_up_front() {
        assert!(CoverageMission::seeded(quick().with_agents(0), 1).is_err());
    }
}
