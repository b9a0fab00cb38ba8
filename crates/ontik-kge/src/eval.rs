//! Rank-based evaluation for knowledge-graph embeddings.
//!
//! The standard link-prediction protocol: for a sampled true triplet,
//! substitute every entity into one side, score all candidates, and
//! see where the true entity lands. Two metrics come out:
//!
//! | Metric | Description |
//! |--------|-------------|
//! | mean rank | candidates strictly closer than the truth, averaged |
//! | hits@10 | fraction of the 10 closest candidates that are true triplets |
//!
//! Both head and tail corruption contribute symmetrically, so the
//! averages run over `2 × sample_size` observations.

use crate::distance::DistanceModel;
use crate::error::{Error, Result};
use ontik_core::{Ontology, Triplet};
use rand::prelude::*;
use rand_xorshift::XorShiftRng;
use serde::{Deserialize, Serialize};

/// Evaluation results.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RankMetrics {
    /// Average rank of the true entity among all substitutions.
    pub mean_rank: f64,
    /// Average fraction of top-10 candidates that exist in the store.
    pub hits_at_10: f64,
}

/// Which endpoint of the triplet gets substituted.
#[derive(Debug, Clone, Copy)]
enum Side {
    Head,
    Tail,
}

impl Side {
    fn of(self, triplet: &Triplet) -> usize {
        match self {
            Self::Head => triplet.head,
            Self::Tail => triplet.tail,
        }
    }

    fn substitute(self, triplet: &Triplet, entity: usize) -> Triplet {
        let mut t = *triplet;
        match self {
            Self::Head => t.head = entity,
            Self::Tail => t.tail = entity,
        }
        t
    }
}

/// Link-prediction evaluator over a triplet store.
///
/// Samples `sample_size` triplets with replacement (seeded, so a run
/// is reproducible), corrupts each on both sides against every entity
/// in the vocabulary, and averages rank and hits@10. Evaluation is
/// read-only for both the store and the model.
///
/// Cost per sampled triplet is `2 × entity_count` model invocations
/// (one batch per side) plus an O(entity_count × 10) partial sort, so
/// keep `sample_size` modest on large vocabularies.
#[derive(Debug, Clone)]
pub struct RankEvaluator {
    sample_size: usize,
    seed: u64,
}

impl RankEvaluator {
    /// Create an evaluator drawing `sample_size` triplets per run.
    pub fn new(sample_size: usize, seed: u64) -> Self {
        Self { sample_size, seed }
    }

    /// Evaluate a model against the store.
    pub fn evaluate(&self, onto: &Ontology, model: &impl DistanceModel) -> Result<RankMetrics> {
        if onto.triplet_count() == 0 {
            return Err(Error::EmptyStore);
        }

        let mut rng = XorShiftRng::seed_from_u64(self.seed);
        let mut cum_rank = 0.0;
        let mut cum_hits = 0.0;

        for _ in 0..self.sample_size {
            let triplet = onto.triplet_at(rng.gen_range(0..onto.triplet_count()))?;

            for side in [Side::Head, Side::Tail] {
                let dists = side_distances(&triplet, side, onto.entity_count(), model);
                let true_idx = side.of(&triplet);

                cum_rank += f64::from(rank_of(&dists, true_idx));
                cum_hits += hits_at_10(&triplet, side, &dists, onto);
            }
        }

        let observations = (self.sample_size * 2) as f64;
        Ok(RankMetrics {
            mean_rank: cum_rank / observations,
            hits_at_10: cum_hits / observations,
        })
    }
}

/// Score every substitution of `side`, one batch call to the model.
fn side_distances(
    triplet: &Triplet,
    side: Side,
    entity_count: usize,
    model: &impl DistanceModel,
) -> Vec<f32> {
    let batch: Vec<Triplet> = (0..entity_count)
        .map(|j| side.substitute(triplet, j))
        .collect();
    model.distances(&batch)
}

/// Candidates strictly closer than the true entity's own distance.
///
/// The true index is skipped: its distance is the baseline, never a
/// competitor against itself.
fn rank_of(dists: &[f32], true_idx: usize) -> u32 {
    let baseline = dists[true_idx];
    let mut closer = 0;
    for (i, &d) in dists.iter().enumerate() {
        if i != true_idx && d < baseline {
            closer += 1;
        }
    }
    closer
}

/// Fraction of the 10 closest substitutions that exist in the store.
fn hits_at_10(triplet: &Triplet, side: Side, dists: &[f32], onto: &Ontology) -> f64 {
    let existing = closest_indices(dists, 10)
        .into_iter()
        .filter(|&j| onto.exists(&side.substitute(triplet, j)))
        .count();
    existing as f64 / 10.0
}

/// Indices of the `k` smallest distances, in ascending order.
///
/// Selection over an index permutation, O(n·k); k is small (10) so
/// this beats a full sort. Ties go to the first-seen candidate
/// because the comparison is strict.
fn closest_indices(dists: &[f32], k: usize) -> Vec<usize> {
    let mut order: Vec<usize> = (0..dists.len()).collect();
    let k = k.min(order.len());
    let mut closest = Vec::with_capacity(k);

    for i in 0..k {
        let mut min_pos = i;
        for j in (i + 1)..order.len() {
            if dists[order[j]] < dists[order[min_pos]] {
                min_pos = j;
            }
        }
        order.swap(i, min_pos);
        closest.push(order[i]);
    }

    closest
}
