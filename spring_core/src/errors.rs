//! # Error Types
//!
//! Structured error types for spring_core. Each variant names the field or
//! operation involved so a front end can explain the problem without parsing
//! message text.
//!
//! Note that an incomplete calculator form is *not* an error at the public
//! boundary: [`crate::calculations::spring_rate::calculate`] returns `None`.
//! The `InvalidInput` variant is what [`crate::calculations::spring_rate::try_calculate`]
//! uses internally to record why a result could not be produced.
//!
//! ## Example
//!
//! ```rust
//! use spring_core::errors::{CalcError, CalcResult};
//!
//! fn validate_coils(active_coils: f64) -> CalcResult<()> {
//!     if active_coils <= 0.0 {
//!         return Err(CalcError::InvalidInput {
//!             field: "active_coils".to_string(),
//!             value: active_coils.to_string(),
//!             reason: "Active coil count must be positive".to_string(),
//!         });
//!     }
//!     Ok(())
//! }
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for spring_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for calculation and report operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// An input value is invalid (unparseable, non-positive, geometrically impossible)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// A required field is missing
    #[error("Missing required field: {field}")]
    MissingField { field: String },

    /// Material identifier not found (strict lookups only)
    #[error("Material not found: {material_name}")]
    MaterialNotFound { material_name: String },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// PDF report compilation or rendering failed
    #[error("Report failed: {stage} - {reason}")]
    ReportFailed { stage: String, reason: String },
}

impl CalcError {
    /// Create an InvalidInput error
    pub fn invalid_input(field: impl Into<String>, value: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a MissingField error
    pub fn missing_field(field: impl Into<String>) -> Self {
        CalcError::MissingField {
            field: field.into(),
        }
    }

    /// Create a MaterialNotFound error
    pub fn material_not_found(material_name: impl Into<String>) -> Self {
        CalcError::MaterialNotFound {
            material_name: material_name.into(),
        }
    }

    /// Create a ReportFailed error
    pub fn report_failed(stage: impl Into<String>, reason: impl Into<String>) -> Self {
        CalcError::ReportFailed {
            stage: stage.into(),
            reason: reason.into(),
        }
    }

    /// True when the error only means the calculator form is not filled in
    /// with a computable set of values yet.
    pub fn is_not_computable(&self) -> bool {
        matches!(self, CalcError::InvalidInput { .. } | CalcError::MissingField { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::InvalidInput { .. } => "INVALID_INPUT",
            CalcError::MissingField { .. } => "MISSING_FIELD",
            CalcError::MaterialNotFound { .. } => "MATERIAL_NOT_FOUND",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::ReportFailed { .. } => "REPORT_FAILED",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}
