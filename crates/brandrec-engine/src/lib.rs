//! # brandrec-engine
//!
//! The recommendation pipeline: category-table lookup, feature vector
//! assembly, optional scaling, classifier inference, and top-k ranking.
//! `RecommendationEngine` owns the loaded artifacts read-only and can be
//! shared across threads.

pub mod encoder;
pub mod engine;
pub mod ranking;

pub use encoder::encode;
pub use engine::RecommendationEngine;
pub use ranking::rank;
