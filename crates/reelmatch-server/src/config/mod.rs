//! Dataset location and loading.

use std::path::PathBuf;

use reelmatch::{Dataset, RecsResult};

/// Dataset filename probed in the working directory.
const DEFAULT_DATASET_FILE: &str = "reelmatch.json";

/// Resolve the dataset file path.
///
/// Precedence: explicit flag, then the `REELMATCH_DATASET` environment
/// variable, then `./reelmatch.json` if present. `None` means the builtin
/// fixture dataset.
pub fn resolve_dataset_path(explicit: Option<&str>) -> Option<String> {
    if let Some(path) = explicit {
        return Some(path.to_string());
    }

    if let Ok(env_path) = std::env::var("REELMATCH_DATASET") {
        return Some(env_path);
    }

    let cwd_dataset = PathBuf::from(DEFAULT_DATASET_FILE);
    if cwd_dataset.exists() {
        return Some(cwd_dataset.display().to_string());
    }

    None
}

/// Load the dataset from the resolved path, or the builtin fixture.
pub fn load_dataset(path: Option<&str>) -> RecsResult<Dataset> {
    match path {
        Some(p) => {
            tracing::info!("Loading dataset from {p}");
            Dataset::from_json_file(p)
        }
        None => {
            tracing::info!("Using builtin fixture dataset");
            Ok(Dataset::builtin())
        }
    }
}
