//! Test fixture loader for brandrec model artifacts and sample requests.
//!
//! Fixture files live next to this crate's manifest:
//! `models/` holds classifier and scaler artifacts (good and deliberately
//! broken ones), `requests/` holds form submissions.

use std::path::{Path, PathBuf};

use brandrec_core::models::RawRecommendationRequest;
use serde::de::DeserializeOwned;

/// Root directory of the test-fixtures folder.
fn fixtures_root() -> &'static Path {
    Path::new(env!("CARGO_MANIFEST_DIR"))
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// List all JSON files in a fixture subdirectory.
pub fn list_fixtures(subdir: &str) -> Vec<PathBuf> {
    let dir = fixtures_root().join(subdir);
    if !dir.exists() {
        return Vec::new();
    }
    let mut files: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    files.sort();
    files
}

/// Path to the trained 16-brand classifier.
pub fn classifier_path() -> PathBuf {
    fixture_path("models/classifier.json")
}

/// Path to the scaler fitted alongside `classifier_path()`.
pub fn scaler_path() -> PathBuf {
    fixture_path("models/scaler.json")
}

/// Path to a classifier whose weights are all zero (every brand gets 1/16).
pub fn uniform_classifier_path() -> PathBuf {
    fixture_path("models/uniform_classifier.json")
}

/// Sample form submissions. The last two are invalid: an unknown operating
/// system and a non-numeric price.
pub fn form_requests() -> Vec<RawRecommendationRequest> {
    load_fixture("requests/form_requests.json")
}
