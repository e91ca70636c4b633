//! Reelmatch core library: cosine-similarity ranking of a content catalog
//! against user preference vectors.

pub mod dataset;
pub mod recommend;
pub mod similarity;
pub mod types;

pub use recommend::{Recommender, DEFAULT_TOP_K};
pub use similarity::{cosine_similarity, top_matches};
pub use types::*;
