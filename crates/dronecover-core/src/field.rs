//! Target field - the point targets a swarm tries to cover.
//!
//! The set is replaced wholesale on regeneration and never edited in place.
//! Readers get a borrowed snapshot, so nothing can change it mid-evaluation.

use crate::config::{validate_target_count, MAX_RANDOM_TARGETS, MIN_RANDOM_TARGETS};
use crate::error::Result;
use crate::types::{Coordinate, FIELD_EXTENT};
use rand::Rng;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// The targets for a run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TargetField {
    targets: Vec<Coordinate>,
}

impl TargetField {
    /// An empty field.
    pub fn new() -> Self {
        Self::default()
    }

    /// A field holding exactly these targets.
    pub fn from_targets(targets: Vec<Coordinate>) -> Self {
        Self { targets }
    }

    /// A field of `count` uniformly random targets.
    pub fn random<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Result<Self> {
        let mut field = Self::new();
        field.regenerate(count, rng)?;
        Ok(field)
    }

    /// Replace every target with `count` fresh uniform samples.
    pub fn regenerate<R: Rng + ?Sized>(&mut self, count: usize, rng: &mut R) -> Result<()> {
        validate_target_count(count)?;
        self.targets = sample(count, rng);
        debug!(count, "regenerated target field");
        Ok(())
    }

    /// Regenerate with a count drawn from `[MIN_RANDOM_TARGETS, MAX_RANDOM_TARGETS)`.
    /// Returns the count used.
    pub fn regenerate_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> usize {
        let count = rng.random_range(MIN_RANDOM_TARGETS..MAX_RANDOM_TARGETS);
        self.targets = sample(count, rng);
        debug!(count, "regenerated target field with random count");
        count
    }

    /// Read-only view of the current targets.
    pub fn snapshot(&self) -> &[Coordinate] {
        &self.targets
    }

    pub fn len(&self) -> usize {
        self.targets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Load a field previously written by [`TargetField::save`].
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let field = serde_json::from_str(&content)?;
        Ok(field)
    }

    /// Write the field as JSON.
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

fn sample<R: Rng + ?Sized>(count: usize, rng: &mut R) -> Vec<Coordinate> {
    (0..count)
        .map(|_| {
            Coordinate::new(
                rng.random_range(0.0..FIELD_EXTENT),
                rng.random_range(0.0..FIELD_EXTENT),
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    #[test]
    fn regenerate_produces_requested_count() {
        let mut rng = Pcg64::seed_from_u64(3);
        let mut field = TargetField::new();
        for k in [1, 30, 99, 500] {
            field.regenerate(k, &mut rng).unwrap();
            assert_eq!(field.snapshot().len(), k);
        }
    }

    #[test]
    fn regenerate_stays_in_field() {
        let mut rng = Pcg64::seed_from_u64(4);
        let field = TargetField::random(1000, &mut rng).unwrap();
        assert!(field.snapshot().iter().all(Coordinate::in_field));
    }

    #[test]
    fn regenerate_rejects_zero_and_keeps_old_targets() {
        let mut rng = Pcg64::seed_from_u64(5);
        let mut field = TargetField::random(12, &mut rng).unwrap();
        let before = field.clone();
        assert!(field.regenerate(0, &mut rng).is_err());
        assert_eq!(field, before);
    }

    #[test]
    fn random_count_in_reference_range() {
        let mut rng = Pcg64::seed_from_u64(6);
        let mut field = TargetField::new();
        for _ in 0..200 {
            let n = field.regenerate_random(&mut rng);
            assert!((MIN_RANDOM_TARGETS..MAX_RANDOM_TARGETS).contains(&n));
            assert_eq!(field.len(), n);
        }
    }

    #[test]
    fn save_and_load_preserve_targets() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("targets.json");
        let field = TargetField::from_targets(vec![
            Coordinate::new(10.0, 10.0),
            Coordinate::new(90.0, 90.0),
        ]);
        field.save(&path).unwrap();
        assert_eq!(TargetField::load(&path).unwrap(), field);
    }
}
