//! Four-line record parsing for persisted relation datasets.
//!
//! The SemEval-style on-disk layout groups four lines per example:
//!
//! ```text
//! 1   "<e1>John</e1> is a father of <e2>Gordon</e2>."
//! fatherOf
//! Comment: ...
//! <blank>
//! ```
//!
//! Line 1 is an integer id, a tab run, and the quoted sentence; line
//! 2 is the relation label; lines 3 and 4 are ignored metadata. Where
//! the files live, how they are fetched and how records are split
//! into train/test sets is the caller's business; only the parse
//! lives here.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::io::BufRead;

static SENTENCE_LINE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"^[0-9]+\s+"(.*)"$"#).expect("valid regex"));

/// One parsed example: the marker-annotated sentence and its label.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Sentence with `<eN>` markers intact.
    pub sentence: String,
    /// Relation label for the record.
    pub label: String,
}

/// Parse four-line records from a reader.
///
/// A trailing group of fewer than four lines is ignored, matching the
/// original corpus files which end mid-group. A first line that does
/// not match the `id "sentence"` shape fails with
/// [`Error::MalformedRecord`] naming the 1-based line number.
pub fn parse_records(reader: impl BufRead) -> Result<Vec<Record>> {
    let lines: Vec<String> = reader.lines().collect::<std::io::Result<_>>()?;

    let mut records = Vec::with_capacity(lines.len() / 4);

    for (group_idx, group) in lines.chunks_exact(4).enumerate() {
        let line_no = group_idx * 4 + 1;
        let raw = group[0].trim_end();

        let caps = SENTENCE_LINE
            .captures(raw)
            .ok_or(Error::MalformedRecord { line: line_no })?;

        records.push(Record {
            sentence: caps[1].to_string(),
            label: group[1].trim_end().to_string(),
        });
    }

    Ok(records)
}

/// The distinct labels of a record set, in first-seen order.
///
/// First-seen order keeps the vocabulary deterministic across runs,
/// which hash-set collection would not.
pub fn relation_vocabulary(records: &[Record]) -> Vec<String> {
    let mut seen = std::collections::HashSet::new();
    records
        .iter()
        .filter(|r| seen.insert(r.label.as_str()))
        .map(|r| r.label.clone())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = "1\t\"<e1>John</e1> is a father of <e2>Gordon</e2>.\"\n\
        fatherOf\n\
        Comment: from the corpus\n\
        \n\
        2\t\"<e1>Paris</e1> lies in <e2>France</e2>.\"\n\
        locatedIn\n\
        Comment:\n\
        \n";

    #[test]
    fn test_parse_records() {
        let records = parse_records(SAMPLE.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(
            records[0],
            Record {
                sentence: "<e1>John</e1> is a father of <e2>Gordon</e2>.".into(),
                label: "fatherOf".into(),
            }
        );
        assert_eq!(records[1].label, "locatedIn");
    }

    #[test]
    fn test_parse_ignores_incomplete_trailing_group() {
        let input = format!("{SAMPLE}3\t\"<e1>Only</e1> a sentence line.\"\n");
        let records = parse_records(input.as_bytes()).unwrap();
        assert_eq!(records.len(), 2);
    }

    #[test]
    fn test_parse_rejects_malformed_sentence_line() {
        let input = "not a record\nlabel\nx\ny\n";
        assert!(matches!(
            parse_records(input.as_bytes()),
            Err(Error::MalformedRecord { line: 1 })
        ));
    }

    #[test]
    fn test_parse_reports_offending_line() {
        let input = format!("{SAMPLE}oops\nlabel\nx\ny\n");
        assert!(matches!(
            parse_records(input.as_bytes()),
            Err(Error::MalformedRecord { line: 9 })
        ));
    }

    #[test]
    fn test_relation_vocabulary_first_seen_order() {
        let records = vec![
            Record {
                sentence: String::new(),
                label: "b".into(),
            },
            Record {
                sentence: String::new(),
                label: "a".into(),
            },
            Record {
                sentence: String::new(),
                label: "b".into(),
            },
        ];
        assert_eq!(relation_vocabulary(&records), vec!["b", "a"]);
    }
}
