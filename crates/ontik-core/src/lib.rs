// Allow minor clippy style warnings at crate level
// These are mostly style preferences, not bugs
#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

//! Core types for the ontik toolkit.
//!
//! This crate provides the indexed triplet store shared by the
//! knowledge-graph embedding and relation-extraction sides:
//!
//! - [`Triplet`] - A (head, relation, tail) fact over dense ids
//! - [`Edge`] - A triplet minus its implicit head, as stored per group
//! - [`Ontology`] - Adjacency-list triplet store with O(1) counting,
//!   O(log n) random access and O(d) existence checks
//! - [`CumulativeIndex`] - Prefix sums over group sizes with a
//!   binary-search owner lookup, reused by the sentence pair store
//!
//! # Example
//!
//! ```rust
//! use ontik_core::{Edge, Ontology, Triplet};
//!
//! let adjacency = vec![
//!     vec![Edge::new(0, 1)],
//!     vec![Edge::new(1, 0), Edge::new(1, 1)],
//! ];
//! let onto = Ontology::new(
//!     adjacency,
//!     vec!["x".into(), "y".into()],
//!     vec!["a".into(), "b".into()],
//! ).unwrap();
//!
//! assert_eq!(onto.triplet_count(), 3);
//! assert_eq!(onto.triplet_at(1).unwrap(), Triplet::new(1, 1, 0));
//! assert!(onto.exists(&Triplet::new(0, 0, 1)));
//! ```

mod error;
mod index;
mod ontology;
mod triplet;

pub use error::{Error, Result, TripletField};
pub use index::CumulativeIndex;
pub use ontology::Ontology;
pub use triplet::{Edge, Triplet};
