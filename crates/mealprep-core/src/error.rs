//! Error types
//!
//! Storage failures end in a fallback to seed data; plan errors only come
//! from the bundled seed or from validation.

use thiserror::Error;

/// Errors raised while reading or writing a persisted toggle collection
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("stored value under key '{key}' is not a valid collection: {source}")]
    Parse {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("failed to serialize collection for key '{key}': {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Errors describing a malformed meal plan
#[derive(Error, Debug)]
pub enum PlanError {
    #[error("bundled plan data is malformed: {0}")]
    Seed(#[from] serde_json::Error),

    #[error("duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("prep step '{id}' has step number {found}, expected {expected}")]
    StepNumbering {
        id: String,
        expected: u32,
        found: u32,
    },

    #[error("day '{0}' appears more than once in the week")]
    DuplicateDay(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
pub type PlanResult<T> = Result<T, PlanError>;
