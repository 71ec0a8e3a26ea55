//! Autocomplete ranking for the query catalog: a composite prefix / substring /
//! edit-distance score over lowercased titles, with a hard cutoff and a stable
//! ascending sort so equal scores keep catalog order.
//!
//! Used by `QueryCatalog::suggest` and the `qs suggest` command.

use crate::types::CatalogRecord;
use rayon::prelude::*;

// ---------------------------------------------------------------------------
// Scoring constants
// ---------------------------------------------------------------------------

/// Added when the title does not start with the term.
pub const PREFIX_PENALTY: usize = 100;
/// Added when the title does not contain the term anywhere.
pub const SUBSTRING_PENALTY: usize = 50;
/// Records scoring at or above this are not suggested.
pub const SCORE_CUTOFF: usize = 150;
/// Maximum number of suggestions returned.
pub const MAX_SUGGESTIONS: usize = 5;

// ---------------------------------------------------------------------------
// Edit distance
// ---------------------------------------------------------------------------

/// Levenshtein edit distance over Unicode scalar values, using two rolling rows.
pub fn levenshtein(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];
    for (i, &ca) in a.iter().enumerate() {
        curr[0] = i + 1;
        for (j, &cb) in b.iter().enumerate() {
            curr[j + 1] = if ca == cb {
                prev[j]
            } else {
                1 + prev[j].min(curr[j]).min(prev[j + 1])
            };
        }
        std::mem::swap(&mut prev, &mut curr);
    }
    prev[b.len()]
}

/// The leading `n` characters of `s`, or all of `s` when it is shorter.
fn char_prefix(s: &str, n: usize) -> &str {
    match s.char_indices().nth(n) {
        Some((byte_idx, _)) => &s[..byte_idx],
        None => s,
    }
}

// ---------------------------------------------------------------------------
// Scoring
// ---------------------------------------------------------------------------

/// Score a lowercased title against a lowercased term. Lower is better.
///
/// The edit penalty compares the whole term against only the title's leading
/// substring of the same character length, so a term longer than a short title
/// is measured against the full title.
pub fn suggestion_score(title_lower: &str, term_lower: &str) -> usize {
    let prefix = if title_lower.starts_with(term_lower) { 0 } else { PREFIX_PENALTY };
    let substring = if title_lower.contains(term_lower) { 0 } else { SUBSTRING_PENALTY };
    let head = char_prefix(title_lower, term_lower.chars().count());
    prefix + substring + levenshtein(term_lower, head)
}

/// A record paired with its suggestion score.
#[derive(Debug, Clone, Copy)]
pub struct ScoredRecord<'a> {
    pub record: &'a CatalogRecord,
    pub score: usize,
}

/// Rank every record below the cutoff, best first, ties in catalog order. Not truncated.
pub fn rank<'a>(records: &'a [CatalogRecord], term: &str) -> Vec<ScoredRecord<'a>> {
    if term.trim().is_empty() {
        return vec![];
    }
    let term_lower = term.to_lowercase();

    // rayon's collect into a Vec is ordered, so ties reach the stable sort in catalog order.
    let mut scored: Vec<ScoredRecord<'a>> = records
        .par_iter()
        .filter_map(|record| {
            let score = suggestion_score(&record.title_lower, &term_lower);
            (score < SCORE_CUTOFF).then_some(ScoredRecord { record, score })
        })
        .collect();
    scored.sort_by_key(|s| s.score);
    scored
}

/// Autocomplete suggestions for `term`: at most [`MAX_SUGGESTIONS`] records,
/// best match first. Empty or whitespace-only terms suggest nothing.
pub fn suggest<'a>(records: &'a [CatalogRecord], term: &str) -> Vec<&'a CatalogRecord> {
    rank(records, term).into_iter().take(MAX_SUGGESTIONS).map(|s| s.record).collect()
}
