//! Span definitions per operation: recommendation, batch, artifact load.

/// Create a recommendation span.
#[macro_export]
macro_rules! recommend_span {
    ($classifier:expr, $scaled:expr) => {
        tracing::info_span!("brandrec.recommend", classifier = %$classifier, scaled = $scaled)
    };
}

/// Create a batch recommendation span.
#[macro_export]
macro_rules! batch_span {
    ($batch_size:expr) => {
        tracing::info_span!("brandrec.batch", batch_size = $batch_size)
    };
}

/// Create an artifact load span.
#[macro_export]
macro_rules! artifact_load_span {
    ($kind:expr, $path:expr) => {
        tracing::info_span!("brandrec.artifact_load", kind = %$kind, path = %$path)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const RECOMMEND: &str = "brandrec.recommend";
    pub const BATCH: &str = "brandrec.batch";
    pub const ARTIFACT_LOAD: &str = "brandrec.artifact_load";
}
