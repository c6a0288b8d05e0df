//! Error type shared by every planner layer.
//!
//! Each failure carries a machine-readable [`ErrorCode`], a human message and
//! an optional remediation hint. Collaborator errors (HTTP, CSV, IO) are kept
//! as the chained `source` and never appear in [`ErrorBody`].

use std::error::Error as StdError;
use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error as ThisError;

/// Boxed error produced by pluggable backends.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

pub type Result<T> = std::result::Result<T, PlannerError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    InvalidFileFormat,
    MissingRequiredColumn,
    EmptyAddressList,
    InvalidAddress,
    GeocodingFailed,
    InsufficientLocations,
    OptimizationFailed,
    DistanceCalculationFailed,
    InternalError,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::InvalidFileFormat => "INVALID_FILE_FORMAT",
            ErrorCode::MissingRequiredColumn => "MISSING_REQUIRED_COLUMN",
            ErrorCode::EmptyAddressList => "EMPTY_ADDRESS_LIST",
            ErrorCode::InvalidAddress => "INVALID_ADDRESS",
            ErrorCode::GeocodingFailed => "GEOCODING_FAILED",
            ErrorCode::InsufficientLocations => "INSUFFICIENT_LOCATIONS",
            ErrorCode::OptimizationFailed => "OPTIMIZATION_FAILED",
            ErrorCode::DistanceCalculationFailed => "DISTANCE_CALCULATION_FAILED",
            ErrorCode::InternalError => "INTERNAL_ERROR",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, ThisError)]
#[error("[{code}] {message}")]
pub struct PlannerError {
    code: ErrorCode,
    message: String,
    hint: Option<String>,
    #[source]
    source: Option<BoxError>,
}

/// Serializable view of an error for the boundary layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hint: Option<String>,
}

impl PlannerError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            hint: None,
            source: None,
        }
    }

    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_source(mut self, source: impl Into<BoxError>) -> Self {
        self.source = Some(source.into());
        self
    }

    pub fn code(&self) -> ErrorCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn hint(&self) -> Option<&str> {
        self.hint.as_deref()
    }

    pub fn body(&self) -> ErrorBody {
        ErrorBody {
            code: self.code,
            message: self.message.clone(),
            hint: self.hint.clone(),
        }
    }

    pub fn invalid_file_format(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFileFormat, message)
    }

    pub fn missing_required_column(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredColumn, message)
    }

    pub fn empty_address_list(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::EmptyAddressList, message)
    }

    pub fn invalid_address(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidAddress, message)
    }

    pub fn geocoding_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::GeocodingFailed, message)
    }

    pub fn insufficient_locations(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InsufficientLocations, message)
    }

    pub fn optimization_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::OptimizationFailed, message)
    }

    pub fn distance_calculation_failed(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::DistanceCalculationFailed, message)
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}
