//! Dataset fixtures, JSON loading, and invariant validation.

use std::collections::HashSet;
use std::path::Path;

use crate::types::{ContentItem, Dataset, RecsError, RecsResult, UserProfile};

impl Dataset {
    /// The builtin fixture dataset: two users, five catalog entries.
    pub fn builtin() -> Self {
        Self {
            users: vec![
                UserProfile {
                    id: 1,
                    preferences: vec![5.0, 4.0, 0.0, 0.0, 5.0],
                },
                UserProfile {
                    id: 2,
                    preferences: vec![0.0, 0.0, 5.0, 4.0, 3.0],
                },
            ],
            catalog: vec![
                ContentItem {
                    id: 1,
                    title: "Action Adventure".to_string(),
                    features: vec![1.0, 0.0, 0.0, 0.0, 1.0],
                },
                ContentItem {
                    id: 2,
                    title: "Sci-Fi Epic".to_string(),
                    features: vec![0.0, 1.0, 0.0, 0.0, 1.0],
                },
                ContentItem {
                    id: 3,
                    title: "Comedy Special".to_string(),
                    features: vec![0.0, 0.0, 1.0, 1.0, 0.0],
                },
                ContentItem {
                    id: 4,
                    title: "Drama Series".to_string(),
                    features: vec![0.0, 0.0, 1.0, 0.0, 0.0],
                },
                ContentItem {
                    id: 5,
                    title: "Fantasy Tale".to_string(),
                    features: vec![1.0, 0.0, 0.0, 0.0, 1.0],
                },
            ],
        }
    }

    /// Load a dataset from a JSON file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> RecsResult<Self> {
        let bytes = std::fs::read(path)?;
        Self::from_json_slice(&bytes)
    }

    /// Parse a dataset from JSON bytes.
    ///
    /// Expected shape: `{ "users": [...], "catalog": [...] }`. Parsing
    /// does not validate invariants; call [`Dataset::validate`] (or build
    /// a `Recommender`, which does) before serving from the result.
    pub fn from_json_slice(bytes: &[u8]) -> RecsResult<Self> {
        let dataset: Dataset = serde_json::from_slice(bytes)?;
        Ok(dataset)
    }

    /// Check dataset invariants: unique IDs and a uniform vector dimension.
    pub fn validate(&self) -> RecsResult<()> {
        let mut user_ids = HashSet::new();
        for user in &self.users {
            if !user_ids.insert(user.id) {
                return Err(RecsError::Dataset(format!("duplicate user id {}", user.id)));
            }
        }

        let mut content_ids = HashSet::new();
        for item in &self.catalog {
            if !content_ids.insert(item.id) {
                return Err(RecsError::Dataset(format!(
                    "duplicate content id {}",
                    item.id
                )));
            }
        }

        if let Some(expected) = self.dimension() {
            for user in &self.users {
                if user.preferences.len() != expected {
                    return Err(RecsError::Dataset(format!(
                        "user {} has {} dimensions, expected {expected}",
                        user.id,
                        user.preferences.len()
                    )));
                }
            }
            for item in &self.catalog {
                if item.features.len() != expected {
                    return Err(RecsError::Dataset(format!(
                        "content {} has {} dimensions, expected {expected}",
                        item.id,
                        item.features.len()
                    )));
                }
            }
        }

        if self.catalog.is_empty() {
            tracing::warn!("Catalog is empty, every recommendation list will be empty");
        }

        Ok(())
    }
}
