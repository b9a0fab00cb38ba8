//! Distance models over dense embedding tables.

use crate::error::{Error, Result};
use ontik_core::Triplet;
use rand::prelude::*;
use rand_xorshift::XorShiftRng;

/// Scoring seam for embedding models.
///
/// Implementations map index triplets to a scalar distance per
/// triplet, lower meaning more plausible. Scoring is inference-only:
/// it takes `&self` and must not mutate model state. Anything that
/// can produce such distances (a translation model, a score table, a
/// remote inference service) can back the evaluator.
pub trait DistanceModel {
    /// Distances for a batch of triplets, one per input, in order.
    fn distances(&self, batch: &[Triplet]) -> Vec<f32>;

    /// Distance for a single triplet, wrapped as a batch of one.
    fn distance(&self, triplet: &Triplet) -> f32 {
        self.distances(std::slice::from_ref(triplet))[0]
    }
}

/// TransE scorer: relations as translations, `||h + r - t||₂`.
///
/// Holds fixed entity and relation tables keyed by dense id. The
/// tables either come from an external training run via
/// [`TransE::from_embeddings`], or from seeded random initialization
/// via [`TransE::with_random_init`] (the untrained baseline that
/// evaluation is usually run against first).
#[derive(Debug, Clone)]
pub struct TransE {
    dim: usize,
    entity_embeddings: Vec<Vec<f32>>,
    relation_embeddings: Vec<Vec<f32>>,
}

impl TransE {
    /// Randomly initialized tables.
    ///
    /// Rows are drawn uniformly from `[-6/√dim, 6/√dim]`; entity rows
    /// are clipped to the unit ball and relation rows L2-normalized,
    /// the constraints the translation model is trained under.
    /// Deterministic for a fixed seed.
    pub fn with_random_init(
        entity_count: usize,
        relation_count: usize,
        dim: usize,
        seed: u64,
    ) -> Self {
        let mut rng = XorShiftRng::seed_from_u64(seed);
        let bound = 6.0 / (dim as f32).sqrt();

        let mut entity_embeddings = init_rows(entity_count, dim, bound, &mut rng);
        for row in &mut entity_embeddings {
            clip_to_unit_ball(row);
        }

        let mut relation_embeddings = init_rows(relation_count, dim, bound, &mut rng);
        for row in &mut relation_embeddings {
            normalize(row);
        }

        Self {
            dim,
            entity_embeddings,
            relation_embeddings,
        }
    }

    /// Build from pre-trained tables.
    ///
    /// Every row must share one dimensionality; the first entity row
    /// establishes it.
    pub fn from_embeddings(
        entity_embeddings: Vec<Vec<f32>>,
        relation_embeddings: Vec<Vec<f32>>,
    ) -> Result<Self> {
        let dim = entity_embeddings
            .first()
            .or_else(|| relation_embeddings.first())
            .map_or(0, Vec::len);

        for (row, emb) in entity_embeddings
            .iter()
            .chain(relation_embeddings.iter())
            .enumerate()
        {
            if emb.len() != dim {
                return Err(Error::DimensionMismatch {
                    row,
                    actual: emb.len(),
                    expected: dim,
                });
            }
        }

        Ok(Self {
            dim,
            entity_embeddings,
            relation_embeddings,
        })
    }

    /// Embedding dimension.
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Number of entity rows.
    pub fn entity_count(&self) -> usize {
        self.entity_embeddings.len()
    }

    /// Number of relation rows.
    pub fn relation_count(&self) -> usize {
        self.relation_embeddings.len()
    }
}

impl DistanceModel for TransE {
    fn distances(&self, batch: &[Triplet]) -> Vec<f32> {
        batch
            .iter()
            .map(|t| {
                let h = &self.entity_embeddings[t.head];
                let r = &self.relation_embeddings[t.rel];
                let tail = &self.entity_embeddings[t.tail];

                let mut sum = 0.0;
                for i in 0..self.dim {
                    let diff = h[i] + r[i] - tail[i];
                    sum += diff * diff;
                }
                sum.sqrt()
            })
            .collect()
    }
}

fn init_rows(count: usize, dim: usize, bound: f32, rng: &mut XorShiftRng) -> Vec<Vec<f32>> {
    (0..count)
        .map(|_| (0..dim).map(|_| rng.gen_range(-bound..=bound)).collect())
        .collect()
}

fn l2_norm(row: &[f32]) -> f32 {
    row.iter().map(|x| x * x).sum::<f32>().sqrt()
}

fn normalize(row: &mut [f32]) {
    let norm = l2_norm(row);
    if norm > 1e-8 {
        for x in row {
            *x /= norm;
        }
    }
}

fn clip_to_unit_ball(row: &mut [f32]) {
    let norm = l2_norm(row);
    if norm > 1.0 {
        for x in row {
            *x /= norm;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_perfect_translation_has_zero_distance() {
        let model = TransE::from_embeddings(
            vec![vec![0.0, 0.0], vec![1.0, 0.0]],
            vec![vec![1.0, 0.0]],
        )
        .unwrap();

        // a + r = b exactly
        let d = model.distance(&Triplet::new(0, 0, 1));
        assert!(d.abs() < 1e-6);

        // b + r = [2, 0], far from a
        let d = model.distance(&Triplet::new(1, 0, 0));
        assert!((d - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_batch_matches_single() {
        let model = TransE::with_random_init(4, 2, 8, 42);
        let batch = vec![
            Triplet::new(0, 0, 1),
            Triplet::new(2, 1, 3),
            Triplet::new(1, 0, 1),
        ];
        let dists = model.distances(&batch);
        assert_eq!(dists.len(), 3);
        for (t, d) in batch.iter().zip(&dists) {
            assert_eq!(model.distance(t), *d);
        }
    }

    #[test]
    fn test_random_init_is_deterministic() {
        let a = TransE::with_random_init(3, 2, 16, 7);
        let b = TransE::with_random_init(3, 2, 16, 7);
        assert_eq!(
            a.distance(&Triplet::new(0, 1, 2)),
            b.distance(&Triplet::new(0, 1, 2))
        );
    }

    #[test]
    fn test_random_init_respects_norm_constraints() {
        let model = TransE::with_random_init(5, 3, 32, 1);
        for row in &model.entity_embeddings {
            assert!(l2_norm(row) <= 1.0 + 1e-5);
        }
        for row in &model.relation_embeddings {
            assert!((l2_norm(row) - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_from_embeddings_rejects_ragged_rows() {
        let result = TransE::from_embeddings(
            vec![vec![0.0, 0.0], vec![1.0]],
            vec![vec![0.5, 0.5]],
        );
        assert!(matches!(
            result,
            Err(Error::DimensionMismatch {
                row: 1,
                actual: 1,
                expected: 2
            })
        ));
    }
}
