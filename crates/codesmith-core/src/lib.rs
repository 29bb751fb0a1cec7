//! Core types and error definitions for CodeSmith.
//!
//! This crate provides the foundational types shared across all CodeSmith
//! crates: error handling, the request record handed to the crew engine,
//! and the validated result schema.
//!
//! # Main types
//!
//! - [`CodesmithError`] — Unified error enum for all CodeSmith subsystems.
//! - [`CodesmithResult`] — Convenience alias for `Result<T, CodesmithError>`.
//! - [`CrewInputs`] — The configuration record sent to the crew engine.
//! - [`schema::CodeResult`] — The validated record of one completed assignment.
//! - [`schema::ValidationError`] — Reported when the engine's payload breaks the contract.

/// Result schema and payload validation.
pub mod schema;

use serde::{Deserialize, Serialize};

// --- Error types ---

/// Top-level error type for CodeSmith.
///
/// Each variant corresponds to a subsystem that can produce errors.
#[derive(Debug, thiserror::Error)]
pub enum CodesmithError {
    /// An error originating from the crew run itself (unparsable payload,
    /// bad engine state).
    #[error("Crew error: {0}")]
    Crew(String),

    /// An error from an outbound HTTP request to the model provider.
    #[error("HTTP error: {0}")]
    Http(String),

    /// An error in configuration parsing or validation.
    #[error("Config error: {0}")]
    Config(String),

    /// The engine's payload did not match the [`schema::CodeResult`] contract.
    #[error("Validation error: {0}")]
    Validation(#[from] schema::ValidationError),

    /// A JSON serialization or deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A standard I/O error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// A convenience `Result` alias using [`CodesmithError`].
pub type CodesmithResult<T> = Result<T, CodesmithError>;

// --- Request record ---

/// The outbound configuration record for one crew run.
///
/// Both fields are required and non-empty; construction trims surrounding
/// whitespace so downstream prompt interpolation never sees stray padding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CrewInputs {
    /// The target language name, exactly as the requester supplied it.
    pub programming_language: String,
    /// The natural-language coding assignment.
    pub question: String,
}

impl CrewInputs {
    /// Builds the inputs record, trimming both fields.
    ///
    /// Returns [`CodesmithError::Config`] if either field is empty after
    /// trimming.
    pub fn new(
        programming_language: impl Into<String>,
        question: impl Into<String>,
    ) -> CodesmithResult<Self> {
        let programming_language = programming_language.into().trim().to_string();
        let question = question.into().trim().to_string();

        if programming_language.is_empty() {
            return Err(CodesmithError::Config(
                "programming_language must not be empty".to_string(),
            ));
        }
        if question.is_empty() {
            return Err(CodesmithError::Config(
                "question must not be empty".to_string(),
            ));
        }

        Ok(Self {
            programming_language,
            question,
        })
    }
}
