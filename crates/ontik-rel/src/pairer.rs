//! Sentence pair store.

use crate::error::{Error, Result};
use crate::marker;
use ontik_core::CumulativeIndex;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Input to the pair store: sentences, optionally with supervision.
///
/// A sum type rather than nullable fields, so the illegal states of
/// the original design (labels without a relation vocabulary, or the
/// reverse) cannot be constructed at all. Count and vocabulary
/// validation still happen at [`SentencePairer::new`].
#[derive(Debug, Clone)]
pub enum PairSource {
    /// Inference mode: sentences only.
    Unlabeled {
        /// Marker-annotated sentences.
        sentences: Vec<String>,
    },
    /// Training mode: one label per derived pair, drawn from a
    /// declared relation vocabulary.
    Labeled {
        /// Marker-annotated sentences.
        sentences: Vec<String>,
        /// One label per pair, in flattened pair order.
        labels: Vec<String>,
        /// The relation class vocabulary.
        relations: Vec<String>,
    },
}

impl PairSource {
    /// Sentences without supervision.
    pub fn unlabeled(sentences: Vec<String>) -> Self {
        Self::Unlabeled { sentences }
    }

    /// Sentences with per-pair labels over a relation vocabulary.
    pub fn labeled(sentences: Vec<String>, labels: Vec<String>, relations: Vec<String>) -> Self {
        Self::Labeled {
            sentences,
            labels,
            relations,
        }
    }
}

/// One rewritten example out of the store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PairExample {
    /// The sentence with the chosen pair tagged `<e1>`/`<e2>` and all
    /// other markers stripped.
    pub sentence: String,
    /// The pair's relation label, present in training mode.
    pub label: Option<String>,
}

/// Supervision held by a labeled pairer.
#[derive(Debug, Clone)]
struct LabelSet {
    labels: Vec<String>,
    relations: Vec<String>,
    index: HashMap<String, usize>,
}

/// Map-style store of mention pairs across sentences.
///
/// A sentence with `k` tagged mentions contributes `k·(k-1)/2` pairs
/// (mention numbers `1..=k` taken two at a time, lexicographic
/// order). Pairs are derived on access, never stored; only the
/// per-sentence cumulative pair counts are kept, which makes `len`
/// O(1) and `get` O(log sentences) plus the rewrite itself.
///
/// Sentences are fixed at construction; the store exposes no
/// mutation, so sharing it across reader threads is safe.
#[derive(Debug, Clone)]
pub struct SentencePairer {
    sentences: Vec<String>,
    counts: CumulativeIndex,
    supervision: Option<LabelSet>,
}

impl SentencePairer {
    /// Build the store, validating any supervision eagerly.
    ///
    /// Labeled sources must supply exactly one label per derived pair
    /// ([`Error::LabelCount`]) and every label must be in the relation
    /// vocabulary ([`Error::UndefinedLabel`]).
    pub fn new(source: PairSource) -> Result<Self> {
        let (sentences, supervision) = match source {
            PairSource::Unlabeled { sentences } => (sentences, None),
            PairSource::Labeled {
                sentences,
                labels,
                relations,
            } => (sentences, Some((labels, relations))),
        };

        let counts = CumulativeIndex::from_sizes(
            sentences.iter().map(|s| pair_count(marker::mention_count(s))),
        );

        let supervision = match supervision {
            None => None,
            Some((labels, relations)) => {
                if labels.len() != counts.total() {
                    return Err(Error::LabelCount {
                        expected: counts.total(),
                        actual: labels.len(),
                    });
                }

                let index: HashMap<String, usize> = relations
                    .iter()
                    .enumerate()
                    .map(|(i, r)| (r.clone(), i))
                    .collect();

                for label in &labels {
                    if !index.contains_key(label) {
                        return Err(Error::UndefinedLabel(label.clone()));
                    }
                }

                Some(LabelSet {
                    labels,
                    relations,
                    index,
                })
            }
        };

        Ok(Self {
            sentences,
            counts,
            supervision,
        })
    }

    /// Total number of derived pairs. O(1).
    pub fn len(&self) -> usize {
        self.counts.total()
    }

    /// Whether the store derives no pairs at all.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Whether the store carries labels.
    pub fn is_training(&self) -> bool {
        self.supervision.is_some()
    }

    /// Number of relation classes, in training mode.
    pub fn relation_count(&self) -> Option<usize> {
        self.supervision.as_ref().map(|s| s.relations.len())
    }

    /// Dense index of a relation label, in training mode.
    pub fn relation_index(&self, label: &str) -> Option<usize> {
        self.supervision.as_ref()?.index.get(label).copied()
    }

    /// The rewritten example at flattened pair index `index`.
    ///
    /// The owning sentence is found through the cumulative index; the
    /// local offset maps to the lexicographic (a, b) combination over
    /// that sentence's mention numbers, and the sentence is rewritten
    /// with that pair canonically tagged.
    pub fn get(&self, index: usize) -> Result<PairExample> {
        let (sent_idx, offset) = self
            .counts
            .locate(index)
            .map_err(|_| Error::PairOutOfBounds {
                index,
                total: self.len(),
            })?;

        let sentence = &self.sentences[sent_idx];
        let pair = pair_at(marker::mention_count(sentence), offset);
        let rewritten = marker::rewrite(sentence, pair)?;

        Ok(PairExample {
            sentence: rewritten,
            label: self
                .supervision
                .as_ref()
                .map(|s| s.labels[index].clone()),
        })
    }
}

/// `k` mentions make `k·(k-1)/2` unordered pairs.
fn pair_count(k: usize) -> usize {
    k * k.saturating_sub(1) / 2
}

/// The `offset`-th combination of `1..=k` taken two at a time, in
/// lexicographic order: (1,2), (1,3), ... (1,k), (2,3), ...
fn pair_at(k: usize, mut offset: usize) -> (usize, usize) {
    for a in 1..=k {
        let row = k - a;
        if offset < row {
            return (a, a + 1 + offset);
        }
        offset -= row;
    }
    // The cumulative index only hands out offsets below C(k, 2).
    unreachable!("pair offset past combination count")
}

#[cfg(test)]
mod tests {
    use super::*;

    const ZERO_ENT: &str = "I have no entities.";
    const ONE_ENT: &str = "<e1>Mike</e1> went outside.";
    const TWO_ENT: &str = "<e1>John</e1> is a father of <e2>Gordon</e2>.";
    const REV_TWO_ENT: &str = "<e2>John</e2> is a father of <e1>Gordon</e1>.";
    const THREE_ENT: &str = "<e1>Minnie</e1> loves <e2>Mickey</e2> but dislikes <e3>Alberto</e3>!";
    const FOUR_ENT: &str = "<e1>Oliver</e1> kissed <e2>Sally</e2> for <e3>Christmas eve</e3> in front of father <e4>Heuston</e4>.";

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| (*s).to_string()).collect()
    }

    #[test]
    fn test_len_of_empty_set() {
        let pairer = SentencePairer::new(PairSource::unlabeled(vec![])).unwrap();
        assert_eq!(pairer.len(), 0);
        assert!(pairer.is_empty());
    }

    #[test]
    fn test_len_counts_only_pairable_sentences() {
        let pairer = SentencePairer::new(PairSource::unlabeled(strings(&[
            ZERO_ENT, ONE_ENT, TWO_ENT,
        ])))
        .unwrap();
        assert_eq!(pairer.len(), 1);
    }

    #[test]
    fn test_pair_count_law() {
        for (k, expected) in [(0, 0), (1, 0), (2, 1), (3, 3), (4, 6), (5, 10)] {
            assert_eq!(pair_count(k), expected);
        }
    }

    #[test]
    fn test_len_with_four_mentions() {
        let pairer = SentencePairer::new(PairSource::unlabeled(strings(&[FOUR_ENT]))).unwrap();
        assert_eq!(pairer.len(), 6);
    }

    #[test]
    fn test_combination_enumeration() {
        assert_eq!(pair_at(4, 0), (1, 2));
        assert_eq!(pair_at(4, 1), (1, 3));
        assert_eq!(pair_at(4, 2), (1, 4));
        assert_eq!(pair_at(4, 3), (2, 3));
        assert_eq!(pair_at(4, 4), (2, 4));
        assert_eq!(pair_at(4, 5), (3, 4));
    }

    #[test]
    fn test_get_on_empty_set() {
        let pairer = SentencePairer::new(PairSource::unlabeled(vec![])).unwrap();
        assert!(matches!(
            pairer.get(0),
            Err(Error::PairOutOfBounds { index: 0, total: 0 })
        ));
    }

    #[test]
    fn test_get_out_of_bounds() {
        let pairer = SentencePairer::new(PairSource::unlabeled(strings(&[
            ZERO_ENT, ONE_ENT, TWO_ENT,
        ])))
        .unwrap();
        assert!(pairer.get(1).is_err());
    }

    #[test]
    fn test_get() {
        let pairer = SentencePairer::new(PairSource::unlabeled(strings(&[
            ZERO_ENT, ONE_ENT, TWO_ENT,
        ])))
        .unwrap();
        assert_eq!(pairer.get(0).unwrap().sentence, TWO_ENT);
    }

    #[test]
    fn test_get_filters_markers_in_combination_order() {
        let pairer = SentencePairer::new(PairSource::unlabeled(strings(&[
            ZERO_ENT, TWO_ENT, ONE_ENT, FOUR_ENT,
        ])))
        .unwrap();

        assert_eq!(pairer.len(), 7);

        let expect = [
            TWO_ENT,
            "<e1>Oliver</e1> kissed <e2>Sally</e2> for Christmas eve in front of father Heuston.",
            "<e1>Oliver</e1> kissed Sally for <e2>Christmas eve</e2> in front of father Heuston.",
            "<e1>Oliver</e1> kissed Sally for Christmas eve in front of father <e2>Heuston</e2>.",
            "Oliver kissed <e1>Sally</e1> for <e2>Christmas eve</e2> in front of father Heuston.",
            "Oliver kissed <e1>Sally</e1> for Christmas eve in front of father <e2>Heuston</e2>.",
            "Oliver kissed Sally for <e1>Christmas eve</e1> in front of father <e2>Heuston</e2>.",
        ];
        for (i, want) in expect.iter().enumerate() {
            assert_eq!(pairer.get(i).unwrap().sentence, *want, "pair {i}");
        }
    }

    #[test]
    fn test_get_keeps_reversed_marker_order() {
        let pairer =
            SentencePairer::new(PairSource::unlabeled(strings(&[REV_TWO_ENT]))).unwrap();
        assert_eq!(pairer.len(), 1);
        assert_eq!(pairer.get(0).unwrap().sentence, REV_TWO_ENT);
    }

    #[test]
    fn test_label_count_validation() {
        let result = SentencePairer::new(PairSource::labeled(
            strings(&[REV_TWO_ENT]),
            vec![],
            vec![],
        ));
        assert!(matches!(
            result,
            Err(Error::LabelCount {
                expected: 1,
                actual: 0
            })
        ));
    }

    #[test]
    fn test_undefined_label() {
        let result = SentencePairer::new(PairSource::labeled(
            strings(&[TWO_ENT]),
            vec!["love".into()],
            vec![],
        ));
        assert!(matches!(result, Err(Error::UndefinedLabel(_))));
    }

    #[test]
    fn test_get_with_labels() {
        let pairer = SentencePairer::new(PairSource::labeled(
            strings(&[THREE_ENT]),
            strings(&["love", "dislike", "none"]),
            strings(&["love", "dislike", "none"]),
        ))
        .unwrap();

        assert!(pairer.is_training());

        let first = pairer.get(0).unwrap();
        assert_eq!(
            first.sentence,
            "<e1>Minnie</e1> loves <e2>Mickey</e2> but dislikes Alberto!"
        );
        assert_eq!(first.label.as_deref(), Some("love"));

        let second = pairer.get(1).unwrap();
        assert_eq!(
            second.sentence,
            "<e1>Minnie</e1> loves Mickey but dislikes <e2>Alberto</e2>!"
        );
        assert_eq!(second.label.as_deref(), Some("dislike"));

        let third = pairer.get(2).unwrap();
        assert_eq!(
            third.sentence,
            "Minnie loves <e1>Mickey</e1> but dislikes <e2>Alberto</e2>!"
        );
        assert_eq!(third.label.as_deref(), Some("none"));
    }

    #[test]
    fn test_relation_vocabulary_accessors() {
        let pairer = SentencePairer::new(PairSource::labeled(
            strings(&[THREE_ENT]),
            strings(&["love", "dislike", "none"]),
            strings(&["love", "dislike", "none"]),
        ))
        .unwrap();

        assert_eq!(pairer.relation_count(), Some(3));
        assert_eq!(pairer.relation_index("dislike"), Some(1));
        assert_eq!(pairer.relation_index("hate"), None);

        let unlabeled = SentencePairer::new(PairSource::unlabeled(vec![])).unwrap();
        assert!(!unlabeled.is_training());
        assert_eq!(unlabeled.relation_count(), None);
    }
}
