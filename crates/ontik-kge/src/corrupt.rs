//! Negative sampling by triplet corruption.

use ontik_core::Triplet;
use rand::prelude::*;
use rand_xorshift::XorShiftRng;

/// Produces structurally plausible negatives for margin training.
///
/// Given a true triplet, a fair coin picks head or tail and a uniform
/// draw from the entity vocabulary overwrites that one field. The
/// result is not checked against the store: a corruption may
/// coincidentally be a true triplet, which is accepted sampling noise
/// in margin-ranking setups.
///
/// The random source is owned and seeded explicitly, never ambient,
/// so sampling is reproducible under a fixed seed.
///
/// # Example
///
/// ```rust
/// use ontik_core::Triplet;
/// use ontik_kge::CorruptionSampler;
///
/// let mut sampler = CorruptionSampler::new(50, 42);
/// let positive = Triplet::new(3, 1, 7);
/// let negative = sampler.corrupt(&positive);
///
/// // Exactly one endpoint changed slot; the relation never does.
/// assert_eq!(negative.rel, positive.rel);
/// assert!(negative.head == positive.head || negative.tail == positive.tail);
/// ```
#[derive(Debug)]
pub struct CorruptionSampler {
    entity_count: usize,
    rng: XorShiftRng,
}

impl CorruptionSampler {
    /// Create a sampler over an entity vocabulary of the given size.
    pub fn new(entity_count: usize, seed: u64) -> Self {
        Self {
            entity_count,
            rng: XorShiftRng::seed_from_u64(seed),
        }
    }

    /// Corrupt one endpoint of the triplet.
    ///
    /// # Panics
    ///
    /// Panics if the sampler was built over an empty vocabulary;
    /// there is nothing to draw a replacement from.
    pub fn corrupt(&mut self, triplet: &Triplet) -> Triplet {
        let replacement = self.rng.gen_range(0..self.entity_count);
        let mut corrupted = *triplet;

        if self.rng.gen_bool(0.5) {
            corrupted.head = replacement;
        } else {
            corrupted.tail = replacement;
        }

        corrupted
    }

    /// Corrupt a batch, each triplet independently with fresh draws.
    pub fn corrupt_batch(&mut self, batch: &[Triplet]) -> Vec<Triplet> {
        batch.iter().map(|t| self.corrupt(t)).collect()
    }
}
