//! Reelmatch HTTP server: a JSON API over the core recommender.

pub mod config;
pub mod error;
pub mod http;

pub use config::{load_dataset, resolve_dataset_path};
pub use error::{ApiError, ApiResult};
pub use http::{router, start, ApiState};
