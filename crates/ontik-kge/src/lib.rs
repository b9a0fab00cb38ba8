#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::uninlined_format_args)]

//! Knowledge-graph embedding inference and evaluation.
//!
//! Embedding models learn vector representations of entities and
//! relations where geometric operations predict missing links. The
//! foundational model is TransE ([Bordes et al. 2013](https://papers.nips.cc/paper/2013/hash/1cecc7a77928ca8133fa24680a88d2f9-Abstract.html)),
//! which treats relations as translations:
//!
//! ```text
//! h + r ≈ t  (if the triple is true)
//! ```
//!
//! so the distance `||h + r - t||₂` measures implausibility (lower =
//! better). This crate covers the inference side of that setup:
//!
//! - [`DistanceModel`] - batch scoring seam; any embedding model that
//!   maps index triplets to distances plugs in here
//! - [`TransE`] - translation-distance scorer over fixed tables
//! - [`CorruptionSampler`] - negative sampling for margin training
//! - [`RankEvaluator`] - mean rank and hits@10 over a triplet store
//!
//! Training (losses, optimizers, gradients) is deliberately out of
//! scope; models arrive here as finished embedding tables.
//!
//! # Example
//!
//! ```rust
//! use ontik_core::{Edge, Ontology};
//! use ontik_kge::{DistanceModel, RankEvaluator, TransE};
//!
//! let onto = Ontology::new(
//!     vec![vec![Edge::new(0, 1)], vec![]],
//!     vec!["r".into()],
//!     vec!["a".into(), "b".into()],
//! ).unwrap();
//!
//! let model = TransE::with_random_init(onto.entity_count(), onto.relation_count(), 16, 42);
//! let metrics = RankEvaluator::new(8, 7).evaluate(&onto, &model).unwrap();
//! assert!(metrics.mean_rank >= 0.0);
//! ```

mod corrupt;
mod distance;
mod error;
mod eval;

pub use corrupt::CorruptionSampler;
pub use distance::{DistanceModel, TransE};
pub use error::{Error, Result};
pub use eval::{RankEvaluator, RankMetrics};
