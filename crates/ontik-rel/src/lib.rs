#![allow(clippy::must_use_candidate)]
#![allow(clippy::return_self_not_must_use)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]

//! Relation-extraction text side of the ontik toolkit.
//!
//! Sentences arrive with numbered entity-mention markers:
//!
//! ```text
//! <e1>John</e1> is a father of <e2>Gordon</e2>.
//! ```
//!
//! A sentence with `k` mentions yields `k·(k-1)/2` candidate mention
//! pairs, each a separate classification example. This crate derives
//! those pairs lazily through the same cumulative-count index the
//! knowledge-graph store uses, and rewrites markers so the chosen
//! pair is always canonically tagged 1 and 2:
//!
//! - [`SentencePairer`] - pair store over sentences; `len` and `get`
//!   by flattened pair index
//! - [`PairSource`] - labeled (training) vs unlabeled (inference)
//!   input, a sum type so labels can never arrive without their
//!   relation vocabulary
//! - [`rewrite`] / [`mention_count`] - marker surgery
//! - [`parse_records`] - the four-line persisted dataset format
//! - [`EmbeddingProvider`] - boundary trait for word vectors
//!
//! # Example
//!
//! ```rust
//! use ontik_rel::{PairSource, SentencePairer};
//!
//! let pairer = SentencePairer::new(PairSource::unlabeled(vec![
//!     "<e1>Minnie</e1> loves <e2>Mickey</e2> but dislikes <e3>Alberto</e3>!".into(),
//! ])).unwrap();
//!
//! assert_eq!(pairer.len(), 3);
//! assert_eq!(
//!     pairer.get(1).unwrap().sentence,
//!     "<e1>Minnie</e1> loves Mickey but dislikes <e2>Alberto</e2>!"
//! );
//! ```

mod embed;
mod error;
mod loader;
mod marker;
mod pairer;

pub use embed::EmbeddingProvider;
pub use error::{Error, Result};
pub use loader::{parse_records, relation_vocabulary, Record};
pub use marker::{mention_count, rewrite};
pub use pairer::{PairExample, PairSource, SentencePairer};
