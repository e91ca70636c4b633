//! Cosine similarity scoring and top-k ranking over the catalog.

use crate::types::{ContentItem, RankedMatch, RecsError, RecsResult};

/// Compute cosine similarity between two vectors.
///
/// Accumulates in `f64` to avoid drift on longer vectors. A zero-norm
/// vector has no direction to compare, so either norm being exactly zero
/// yields `0.0` rather than a division error. Mismatched lengths are a
/// data inconsistency and fail instead of producing a silently wrong
/// score.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> RecsResult<f32> {
    if a.len() != b.len() {
        return Err(RecsError::DimensionMismatch {
            expected: a.len(),
            actual: b.len(),
        });
    }

    let mut dot = 0.0f64;
    let mut norm_a = 0.0f64;
    let mut norm_b = 0.0f64;

    for (x, y) in a.iter().zip(b.iter()) {
        let x = *x as f64;
        let y = *y as f64;
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    let denom = norm_a.sqrt() * norm_b.sqrt();
    if denom == 0.0 {
        return Ok(0.0);
    }

    Ok((dot / denom) as f32)
}

/// Score every catalog entry against the query vector and return the
/// top-k matches, best first.
///
/// The sort is stable, so entries with equal scores keep catalog order.
pub fn top_matches(
    query: &[f32],
    catalog: &[ContentItem],
    top_k: usize,
) -> RecsResult<Vec<RankedMatch>> {
    let mut matches = Vec::with_capacity(catalog.len());
    for item in catalog {
        let similarity = cosine_similarity(query, &item.features)?;
        matches.push(RankedMatch {
            content_id: item.id,
            title: item.title.clone(),
            similarity,
        });
    }

    matches.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    matches.truncate(top_k);
    Ok(matches)
}
