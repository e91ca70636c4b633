//! The Recommender component: user lookup, scoring, and title selection.

use crate::similarity::top_matches;
use crate::types::{Dataset, RankedMatch, RecsError, RecsResult};

/// Number of titles returned by [`Recommender::recommend`].
pub const DEFAULT_TOP_K: usize = 3;

/// Ranks catalog entries against a user's preference vector.
///
/// Owns the static dataset and validates it once at construction, so
/// request-time calls only read. Concurrent callers need no locking as
/// long as the dataset is never mutated, which this type does not allow.
#[derive(Debug)]
pub struct Recommender {
    dataset: Dataset,
}

impl Recommender {
    /// Build a recommender over a validated dataset.
    pub fn new(dataset: Dataset) -> RecsResult<Self> {
        dataset.validate()?;
        tracing::debug!(
            "Dataset validated: {} users, {} catalog items, dimension {}",
            dataset.user_count(),
            dataset.catalog_len(),
            dataset.dimension().unwrap_or(0)
        );
        Ok(Self { dataset })
    }

    /// The underlying dataset.
    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    /// Rank the catalog for a user, best match first.
    ///
    /// Returns at most `top_k` entries; equal scores keep catalog order.
    pub fn rank(&self, user_id: u64, top_k: usize) -> RecsResult<Vec<RankedMatch>> {
        let user = self
            .dataset
            .user(user_id)
            .ok_or(RecsError::UserNotFound(user_id))?;
        top_matches(&user.preferences, &self.dataset.catalog, top_k)
    }

    /// Top titles for a user.
    ///
    /// Output length is exactly `min(DEFAULT_TOP_K, catalog_len)`.
    pub fn recommend(&self, user_id: u64) -> RecsResult<Vec<String>> {
        Ok(self
            .rank(user_id, DEFAULT_TOP_K)?
            .into_iter()
            .map(|m| m.title)
            .collect())
    }
}
