//! Triplet value types.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A (head, relation, tail) fact over dense ids.
///
/// Plain value type with no identity beyond its fields. Validity
/// (`head`/`tail` within the entity vocabulary, `rel` within the
/// relation vocabulary) is checked by the store, not the type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Triplet {
    /// Head entity id.
    pub head: usize,
    /// Relation id.
    pub rel: usize,
    /// Tail entity id.
    pub tail: usize,
}

impl Triplet {
    /// Create a new triplet.
    pub fn new(head: usize, rel: usize, tail: usize) -> Self {
        Self { head, rel, tail }
    }
}

impl fmt::Display for Triplet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.head, self.rel, self.tail)
    }
}

/// A triplet with an implicit head: the unit stored in the head's
/// adjacency group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge {
    /// Relation id.
    pub rel: usize,
    /// Tail entity id.
    pub tail: usize,
}

impl Edge {
    /// Create a new edge.
    pub fn new(rel: usize, tail: usize) -> Self {
        Self { rel, tail }
    }

    /// Attach a head, reconstructing the full triplet.
    pub fn with_head(self, head: usize) -> Triplet {
        Triplet::new(head, self.rel, self.tail)
    }
}

impl From<Triplet> for Edge {
    fn from(t: Triplet) -> Self {
        Self {
            rel: t.rel,
            tail: t.tail,
        }
    }
}
