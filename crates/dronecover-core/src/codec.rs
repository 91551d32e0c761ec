//! Gene codec - packing drone positions into 32-bit integers.
//!
//! A gene stores x in its high half-word and y in its low half-word. Each
//! half-word `u` maps to `u * FIELD_EXTENT / 65536`, so every `u32` decodes
//! to some position inside the field. Crossover and mutation act on the
//! raw bits; only initialization and presentation go through coordinates.

use crate::types::{Coordinate, FIELD_EXTENT};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Number of distinct values per axis.
const STEPS: f64 = 65536.0;

/// Smallest representable distance along one axis.
pub const QUANTUM: f64 = FIELD_EXTENT / STEPS;

/// One drone position, bit-packed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gene(pub u32);

impl Gene {
    /// Pack a coordinate. Lossy to 16 bits per axis; values at or past the
    /// far edge wrap around.
    pub fn encode(position: Coordinate) -> Self {
        Gene((quantize(position.x) << 16) | quantize(position.y))
    }

    pub fn decode_x(self) -> f64 {
        ((self.0 >> 16) & 0xffff) as f64 * FIELD_EXTENT / STEPS
    }

    pub fn decode_y(self) -> f64 {
        (self.0 & 0xffff) as f64 * FIELD_EXTENT / STEPS
    }

    pub fn decode(self) -> Coordinate {
        Coordinate::new(self.decode_x(), self.decode_y())
    }

    /// Keep bits `>= split` from `self` and bits `< split` from `other`.
    ///
    /// `split` must be below 32.
    pub fn splice(self, other: Gene, split: u32) -> Gene {
        let mask = !0u32 << split;
        Gene((self.0 & mask) | (other.0 & !mask))
    }

    /// Flip a single bit (`bit` below 32).
    pub fn flip(self, bit: u32) -> Gene {
        Gene(self.0 ^ (1u32 << bit))
    }
}

fn quantize(value: f64) -> u32 {
    ((value / FIELD_EXTENT * STEPS).round() as i64).rem_euclid(STEPS as i64) as u32
}

/// The genes for every drone in one candidate placement.
///
/// Length is fixed at construction and equals the number of drones.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genome(Box<[Gene]>);

impl Genome {
    pub fn new(genes: Vec<Gene>) -> Self {
        Self(genes.into_boxed_slice())
    }

    /// `gene_count` genes drawn from the full `u32` domain.
    pub fn random<R: Rng + ?Sized>(gene_count: usize, rng: &mut R) -> Self {
        Self((0..gene_count).map(|_| Gene(rng.random())).collect())
    }

    pub fn from_positions(positions: &[Coordinate]) -> Self {
        Self(positions.iter().copied().map(Gene::encode).collect())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = Gene> + '_ {
        self.0.iter().copied()
    }

    /// One coordinate per drone, in genome order.
    pub fn decode(&self) -> Vec<Coordinate> {
        self.iter().map(Gene::decode).collect()
    }
}

impl FromIterator<Gene> for Genome {
    fn from_iter<I: IntoIterator<Item = Gene>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
