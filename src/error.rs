use thiserror::Error;

use crate::types::HardwareKind;

/// Reasons a scoring batch is rejected. Any of these aborts the whole batch.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ScoreError {
    #[error("product '{product}' references {kind} '{model}' which has no benchmark entry")]
    MissingBenchmarkKey {
        product: String,
        kind: HardwareKind,
        model: String,
    },
    #[error("{0} benchmark table is empty")]
    EmptyBenchmarkTable(HardwareKind),
    #[error("{kind} benchmark for '{model}' must be positive, got {score}")]
    NonPositiveBenchmark {
        kind: HardwareKind,
        model: String,
        score: f64,
    },
    #[error("product '{product}' has non-positive price {price}")]
    NonPositivePrice { product: String, price: f64 },
    #[error("product '{product}' has non-positive {field} {value}")]
    NonPositiveSize {
        product: String,
        field: &'static str,
        value: f64,
    },
    #[error("unknown profile '{0}' (expected Gaming, Creator or Office)")]
    UnknownProfile(String),
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum EngineError {
    #[error("failed to parse catalog: {0}")]
    InvalidCatalog(String),
    #[error("failed to parse request: {0}")]
    InvalidRequest(String),
    #[error("catalog not initialized. Call init_catalog(catalog_json) first.")]
    NotInitialized,
    #[error(transparent)]
    Score(#[from] ScoreError),
}
