//! Adjacency-list triplet store.

use crate::error::{Error, Result, TripletField};
use crate::index::CumulativeIndex;
use crate::triplet::{Edge, Triplet};
use serde::{Deserialize, Serialize};

/// A knowledge graph stored as adjacency lists keyed by head entity.
///
/// One group of [`Edge`]s per entity, plus a cumulative-count index
/// over group sizes. That combination gives O(1) triplet counting,
/// O(log n) random access by global triplet index and O(d) existence
/// checks, where d is the head's out-degree.
///
/// The store is effectively append-only: [`Ontology::add_triplets`]
/// is the single mutation, and it takes `&mut self`, so exclusive
/// access during appends is enforced by the borrow checker. Once
/// construction and any appends are done, all remaining operations
/// are `&self` and safe to share across reader threads.
///
/// # Example
///
/// ```rust
/// use ontik_core::{Edge, Ontology, Triplet};
///
/// let onto = Ontology::new(
///     vec![vec![Edge::new(0, 1)], vec![]],
///     vec!["capital_of".into()],
///     vec!["paris".into(), "france".into()],
/// ).unwrap();
///
/// assert_eq!(onto.triplet_count(), 1);
/// assert!(onto.exists(&Triplet::new(0, 0, 1)));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ontology {
    /// One edge group per entity; the group index is the head id.
    adjacency: Vec<Vec<Edge>>,
    /// Cumulative edge counts per head, rebuilt after every append.
    counts: CumulativeIndex,
    /// Relation display names; index = dense relation id.
    relations: Vec<String>,
    /// Entity display names; index = dense entity id.
    entities: Vec<String>,
}

impl Ontology {
    /// Build a store from a complete adjacency list.
    ///
    /// There must be exactly one group per entity, empty groups
    /// included; anything else fails with
    /// [`Error::StructuralMismatch`]. The cumulative index is built
    /// eagerly in a single O(total edges) pass.
    pub fn new(
        adjacency: Vec<Vec<Edge>>,
        relations: Vec<String>,
        entities: Vec<String>,
    ) -> Result<Self> {
        if adjacency.len() != entities.len() {
            return Err(Error::StructuralMismatch {
                expected: entities.len(),
                actual: adjacency.len(),
            });
        }

        let counts = CumulativeIndex::from_sizes(adjacency.iter().map(Vec::len));

        Ok(Self {
            adjacency,
            counts,
            relations,
            entities,
        })
    }

    /// Number of entities in the vocabulary.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Number of relations in the vocabulary.
    pub fn relation_count(&self) -> usize {
        self.relations.len()
    }

    /// Total number of triplets. O(1).
    pub fn triplet_count(&self) -> usize {
        self.counts.total()
    }

    /// Display name of an entity id.
    pub fn entity_name(&self, entity: usize) -> Option<&str> {
        self.entities.get(entity).map(String::as_str)
    }

    /// Display name of a relation id.
    pub fn relation_name(&self, rel: usize) -> Option<&str> {
        self.relations.get(rel).map(String::as_str)
    }

    /// The triplet at global index `i`.
    ///
    /// The flattening is canonical: entity 0's edges first in stored
    /// order, then entity 1's, and so on. The owning head is found by
    /// binary search over the cumulative index; the edge is the
    /// remaining local offset into that head's group.
    pub fn triplet_at(&self, index: usize) -> Result<Triplet> {
        let (head, local) = self.counts.locate(index)?;
        Ok(self.adjacency[head][local].with_head(head))
    }

    /// Whether the exact triplet is stored.
    ///
    /// Out-of-range heads are simply absent, not an error.
    pub fn exists(&self, triplet: &Triplet) -> bool {
        match self.adjacency.get(triplet.head) {
            Some(edges) => edges
                .iter()
                .any(|e| e.rel == triplet.rel && e.tail == triplet.tail),
            None => false,
        }
    }

    /// Append a batch of triplets.
    ///
    /// The whole batch is range-validated before anything is
    /// appended: one bad triplet rejects the call and leaves the
    /// store untouched. Appending in one batch is also cheaper than
    /// one-by-one, because the cumulative index is rebuilt only once,
    /// after the last append.
    pub fn add_triplets(&mut self, triplets: &[Triplet]) -> Result<()> {
        for triplet in triplets {
            self.validate(triplet)?;
        }

        for triplet in triplets {
            self.adjacency[triplet.head].push(Edge::from(*triplet));
        }

        self.counts = CumulativeIndex::from_sizes(self.adjacency.iter().map(Vec::len));
        Ok(())
    }

    /// Iterate over all triplets in global-index order.
    pub fn triplets(&self) -> impl Iterator<Item = Triplet> + '_ {
        self.adjacency
            .iter()
            .enumerate()
            .flat_map(|(head, edges)| edges.iter().map(move |e| e.with_head(head)))
    }

    fn validate(&self, triplet: &Triplet) -> Result<()> {
        let entity_max = self.entities.len().saturating_sub(1);
        if triplet.head >= self.entities.len() {
            return Err(Error::TripletOutOfBounds {
                field: TripletField::Head,
                value: triplet.head,
                max: entity_max,
            });
        }
        if triplet.tail >= self.entities.len() {
            return Err(Error::TripletOutOfBounds {
                field: TripletField::Tail,
                value: triplet.tail,
                max: entity_max,
            });
        }
        if triplet.rel >= self.relations.len() {
            return Err(Error::TripletOutOfBounds {
                field: TripletField::Relation,
                value: triplet.rel,
                max: self.relations.len().saturating_sub(1),
            });
        }
        Ok(())
    }
}
