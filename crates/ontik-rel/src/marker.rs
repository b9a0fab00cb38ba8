//! Entity-mention marker parsing and rewriting.
//!
//! Markers are inline tags of the form `<eN>text</eN>` with N a
//! decimal mention number. Tags are non-nested and their content
//! contains no literal `<`, which is what lets a single linear regex
//! pass find them all.

use crate::error::{Error, Result};
use once_cell::sync::Lazy;
use regex::Regex;

// Compiled once, reused for every sentence.
static MARKER: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"<e([0-9]+)>([^<]*)</e[0-9]+>").expect("valid regex"));

/// Number of entity mentions tagged in the sentence.
pub fn mention_count(sentence: &str) -> usize {
    MARKER.find_iter(sentence).count()
}

/// Rewrite a sentence for one chosen mention pair.
///
/// Every marker whose number is not `a` or `b` is stripped down to
/// its inner text; marker `a` is relabeled `<e1>`, marker `b` is
/// relabeled `<e2>`. All text outside markers is preserved exactly.
///
/// The pair keeps combination order (ascending mention number), not
/// text order: a sentence numbered against reading order will present
/// `<e2>` before `<e1>` in the output, which is correct.
///
/// Rewriting works over match spans, so two mentions sharing the
/// same surface text cannot clobber each other.
pub fn rewrite(sentence: &str, pair: (usize, usize)) -> Result<String> {
    let (a, b) = pair;
    let mut out = String::with_capacity(sentence.len());
    let mut cursor = 0;
    let mut found_a = false;
    let mut found_b = false;

    for caps in MARKER.captures_iter(sentence) {
        let whole = caps.get(0).expect("match always has group 0");
        // Absurdly long digit runs overflow usize; no mention number
        // can match them, so such a marker is simply stripped.
        let number = caps[1].parse::<usize>().unwrap_or(usize::MAX);
        let inner = &caps[2];

        out.push_str(&sentence[cursor..whole.start()]);

        if number == a {
            found_a = true;
            out.push_str("<e1>");
            out.push_str(inner);
            out.push_str("</e1>");
        } else if number == b {
            found_b = true;
            out.push_str("<e2>");
            out.push_str(inner);
            out.push_str("</e2>");
        } else {
            out.push_str(inner);
        }

        cursor = whole.end();
    }

    if !found_a {
        return Err(Error::MarkerNotFound { number: a });
    }
    if !found_b {
        return Err(Error::MarkerNotFound { number: b });
    }

    out.push_str(&sentence[cursor..]);
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mention_count() {
        assert_eq!(mention_count("I have no entities."), 0);
        assert_eq!(mention_count("<e1>Mike</e1> went outside."), 1);
        assert_eq!(
            mention_count("<e1>John</e1> is a father of <e2>Gordon</e2>."),
            2
        );
    }

    #[test]
    fn test_rewrite_strips_unchosen_markers() {
        let sent = "<e1>Minnie</e1> loves <e2>Mickey</e2> but dislikes <e3>Alberto</e3>!";
        assert_eq!(
            rewrite(sent, (1, 2)).unwrap(),
            "<e1>Minnie</e1> loves <e2>Mickey</e2> but dislikes Alberto!"
        );
        assert_eq!(
            rewrite(sent, (1, 3)).unwrap(),
            "<e1>Minnie</e1> loves Mickey but dislikes <e2>Alberto</e2>!"
        );
        assert_eq!(
            rewrite(sent, (2, 3)).unwrap(),
            "Minnie loves <e1>Mickey</e1> but dislikes <e2>Alberto</e2>!"
        );
    }

    #[test]
    fn test_rewrite_is_identity_on_canonical_pair() {
        let sent = "<e1>John</e1> is a father of <e2>Gordon</e2>.";
        assert_eq!(rewrite(sent, (1, 2)).unwrap(), sent);
    }

    #[test]
    fn test_rewrite_keeps_reversed_numbering() {
        // Mention 1 appears after mention 2 in reading order; the
        // relabeled output preserves that, by design.
        let sent = "<e2>John</e2> is a father of <e1>Gordon</e1>.";
        assert_eq!(rewrite(sent, (1, 2)).unwrap(), sent);
    }

    #[test]
    fn test_rewrite_duplicate_surface_text() {
        let sent = "<e1>Bob</e1> met <e2>Bob</e2> and <e3>Bob</e3>.";
        assert_eq!(
            rewrite(sent, (1, 3)).unwrap(),
            "<e1>Bob</e1> met Bob and <e2>Bob</e2>."
        );
    }

    #[test]
    fn test_rewrite_missing_marker() {
        let sent = "<e1>Mike</e1> went outside.";
        assert!(matches!(
            rewrite(sent, (1, 2)),
            Err(Error::MarkerNotFound { number: 2 })
        ));
    }
}
