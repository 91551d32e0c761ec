//! Run configuration.
//!
//! An [`EvolutionConfig`] is fixed before a run starts and never changes
//! during it, so independent runs (e.g. in tests) share no state.

use crate::error::{DroneCoverError, Result};
use serde::{Deserialize, Serialize};

/// Lower bound (inclusive) of the random target count.
pub const MIN_RANDOM_TARGETS: usize = 30;
/// Upper bound (exclusive) of the random target count.
pub const MAX_RANDOM_TARGETS: usize = 100;

/// Coverage radius shared by every drone in a run. Always finite and positive.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct Radius(f64);

impl Radius {
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            return Err(DroneCoverError::invalid_config("radius", value, "must be finite"));
        }
        if value <= 0.0 {
            return Err(DroneCoverError::invalid_config("radius", value, "must be positive"));
        }
        Ok(Self(value))
    }

    pub fn get(self) -> f64 {
        self.0
    }
}

impl TryFrom<f64> for Radius {
    type Error = DroneCoverError;

    fn try_from(value: f64) -> Result<Self> {
        Radius::new(value)
    }
}

impl From<Radius> for f64 {
    fn from(radius: Radius) -> f64 {
        radius.0
    }
}

/// Parameters of the genetic algorithm.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvolutionConfig {
    /// Individuals kept after every generation.
    #[serde(default = "default_generation_size")]
    pub generation_size: usize,
    /// Generation steps after the initial population.
    #[serde(default = "default_generations")]
    pub generations: u32,
    /// Per-gene probability of a single bit flip.
    #[serde(default = "default_mutation_probability")]
    pub mutation_probability: f64,
    /// Drones per genome.
    #[serde(default = "default_number_of_agents")]
    pub number_of_agents: usize,
    /// Carry the best individual unchanged into the next generation.
    #[serde(default = "default_use_elitism")]
    pub use_elitism: bool,
    /// Master seed. `None` draws one from OS entropy at run start.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

// Default value functions
fn default_generation_size() -> usize { 100 }
fn default_generations() -> u32 { 200 }
fn default_mutation_probability() -> f64 { 0.2 }
fn default_number_of_agents() -> usize { 10 }
fn default_use_elitism() -> bool { true }

impl Default for EvolutionConfig {
    fn default() -> Self {
        Self {
            generation_size: default_generation_size(),
            generations: default_generations(),
            mutation_probability: default_mutation_probability(),
            number_of_agents: default_number_of_agents(),
            use_elitism: default_use_elitism(),
            seed: None,
        }
    }
}

impl EvolutionConfig {
    pub fn with_generation_size(mut self, size: usize) -> Self {
        self.generation_size = size;
        self
    }

    pub fn with_generations(mut self, generations: u32) -> Self {
        self.generations = generations;
        self
    }

    pub fn with_mutation_probability(mut self, probability: f64) -> Self {
        self.mutation_probability = probability;
        self
    }

    pub fn with_agents(mut self, count: usize) -> Self {
        self.number_of_agents = count;
        self
    }

    pub fn with_elitism(mut self, enabled: bool) -> Self {
        self.use_elitism = enabled;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Reject anything the optimizer cannot run with. Nothing is clamped.
    pub fn validate(&self) -> Result<()> {
        if self.generation_size == 0 {
            return Err(DroneCoverError::invalid_config(
                "generation_size",
                self.generation_size,
                "population must hold at least one individual",
            ));
        }
        if self.number_of_agents == 0 {
            return Err(DroneCoverError::invalid_config(
                "number_of_agents",
                self.number_of_agents,
                "at least one drone is required",
            ));
        }
        let p = self.mutation_probability;
        if !p.is_finite() || !(0.0..=1.0).contains(&p) {
            return Err(DroneCoverError::out_of_range("mutation_probability", 0.0, 1.0, p));
        }
        Ok(())
    }
}

/// Check a requested target count.
pub fn validate_target_count(count: usize) -> Result<()> {
    if count == 0 {
        return Err(DroneCoverError::invalid_config(
            "target_count",
            count,
            "must be a positive integer",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_matches_reference_constants() {
        let c = EvolutionConfig::default();
        assert_eq!(c.generation_size, 100);
        assert_eq!(c.generations, 200);
        assert_eq!(c.number_of_agents, 10);
        assert!((c.mutation_probability - 0.2).abs() < 1e-12);
        assert!(c.use_elitism);
        assert!(c.validate().is_ok());
    }

    #[test]
    fn radius_rejects_non_positive_and_non_finite() {
        assert!(Radius::new(0.0).is_err());
        assert!(Radius::new(-3.0).is_err());
        assert!(Radius::new(f64::NAN).is_err());
        assert!(Radius::new(f64::INFINITY).is_err());
        assert_eq!(Radius::new(5.0).unwrap().get(), 5.0);
    }

    #[test]
    fn validate_rejects_empty_population_and_swarm() {
        assert!(EvolutionConfig::default().with_generation_size(0).validate().is_err());
        assert!(EvolutionConfig::default().with_agents(0).validate().is_err());
    }

    #[test]
    fn validate_rejects_bad_probability() {
        for p in [-0.1, 1.5, f64::NAN] {
            let err = EvolutionConfig::default()
                .with_mutation_probability(p)
                .validate()
                .unwrap_err();
            assert!(err.is_config());
        }
        assert!(EvolutionConfig::default().with_mutation_probability(1.0).validate().is_ok());
    }

    #[test]
    fn zero_generations_is_allowed() {
        assert!(EvolutionConfig::default().with_generations(0).validate().is_ok());
    }

    #[test]
    fn target_count_must_be_positive() {
        assert!(validate_target_count(0).is_err());
        assert!(validate_target_count(1).is_ok());
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let c: EvolutionConfig = serde_json::from_str(r#"{"generations": 5}"#).unwrap();
        assert_eq!(c.generations, 5);
        assert_eq!(c.generation_size, 100);
        assert_eq!(c.seed, None);
    }

    #[test]
    fn radius_deserialization_validates() {
        assert!(serde_json::from_str::<Radius>("-1.0").is_err());
        assert_eq!(serde_json::from_str::<Radius>("7.5").unwrap().get(), 7.5);
    }
}
