//! Ranking of one similarity row.
//!
//! ## Algorithm
//! 1. Pair every score in the row with its catalog index
//! 2. Drop the pair whose index is the query movie itself
//! 3. Sort by score descending, then by index ascending
//!
//! The self-match is removed by identity rather than by position, so a
//! matrix whose diagonal is not the row maximum still never recommends the
//! query movie and never loses its best real neighbour.

use std::cmp::Ordering;

/// A catalog entry scored against the query movie
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Row/column position in the catalog
    pub index: usize,
    pub score: f32,
}

/// `-0.0` and `0.0` are the same score
fn sort_key(score: f32) -> f32 {
    if score == 0.0 { 0.0 } else { score }
}

/// Descending by score; equal scores keep ascending index order.
fn by_score_then_index(a: &Candidate, b: &Candidate) -> Ordering {
    sort_key(b.score)
        .total_cmp(&sort_key(a.score))
        .then_with(|| a.index.cmp(&b.index))
}

/// Rank every other catalog entry against `self_index`.
pub fn rank_similar(row: &[f32], self_index: usize) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = row
        .iter()
        .enumerate()
        .filter(|&(index, _)| index != self_index)
        .map(|(index, &score)| Candidate { index, score })
        .collect();

    candidates.sort_by(by_score_then_index);
    candidates
}

/// The `k` best candidates, in ranked order.
///
/// Same result as `rank_similar(..)` truncated to `k`, without sorting the
/// whole row.
pub fn top_similar(row: &[f32], self_index: usize, k: usize) -> Vec<Candidate> {
    let mut candidates: Vec<Candidate> = row
        .iter()
        .enumerate()
        .filter(|&(index, _)| index != self_index)
        .map(|(index, &score)| Candidate { index, score })
        .collect();

    if k == 0 {
        return Vec::new();
    }
    if candidates.len() > k {
        // Comparator is a total order, so the k smallest are exactly the k best
        candidates.select_nth_unstable_by(k - 1, by_score_then_index);
        candidates.truncate(k);
    }
    candidates.sort_by(by_score_then_index);
    candidates
}
