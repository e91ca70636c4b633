//! Core data types for the recommendation dataset.

use serde::{Deserialize, Serialize};

/// A user's preference profile. Zero means "no rating" for that dimension.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: u64,
    pub preferences: Vec<f32>,
}

/// A catalog entry with its feature encoding.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: u64,
    pub title: String,
    pub features: Vec<f32>,
}

/// A ranked recommendation entry. Derived per request, never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankedMatch {
    pub content_id: u64,
    pub title: String,
    pub similarity: f32,
}

/// The static dataset: users and the ordered content catalog.
///
/// Populated once at startup and read-only for the process lifetime.
/// Catalog order is significant: items with equal similarity scores are
/// returned in catalog order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dataset {
    pub users: Vec<UserProfile>,
    pub catalog: Vec<ContentItem>,
}

impl Dataset {
    /// Get a user by ID.
    pub fn user(&self, id: u64) -> Option<&UserProfile> {
        self.users.iter().find(|u| u.id == id)
    }

    /// Get a catalog entry by ID.
    pub fn content(&self, id: u64) -> Option<&ContentItem> {
        self.catalog.iter().find(|c| c.id == id)
    }

    /// The shared vector dimension, if the dataset has any vectors.
    pub fn dimension(&self) -> Option<usize> {
        self.users
            .first()
            .map(|u| u.preferences.len())
            .or_else(|| self.catalog.first().map(|c| c.features.len()))
    }

    /// Number of catalog entries.
    pub fn catalog_len(&self) -> usize {
        self.catalog.len()
    }

    /// Number of users.
    pub fn user_count(&self) -> usize {
        self.users.len()
    }
}

/// Errors that can occur in the recommendation library.
#[derive(thiserror::Error, Debug)]
pub enum RecsError {
    #[error("User not found: {0}")]
    UserNotFound(u64),

    #[error("Vector length mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Dataset error: {0}")]
    Dataset(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Convenience result type.
pub type RecsResult<T> = Result<T, RecsError>;
