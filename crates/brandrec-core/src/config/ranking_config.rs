use serde::{Deserialize, Serialize};

use super::defaults;

/// Ranking configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct RankingConfig {
    /// Number of brands returned per recommendation.
    pub top_k: usize,
}

impl Default for RankingConfig {
    fn default() -> Self {
        Self {
            top_k: defaults::DEFAULT_TOP_K,
        }
    }
}
