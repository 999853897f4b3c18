//! Error types for matchfactor

use thiserror::Error;

/// A numeric input that a formula cannot accept.
///
/// Raised where the value is consumed (the division or the multiplication
/// by fleet size), so the field name pinpoints the failing term.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("{field} must be strictly positive, got {value}")]
    NonPositive { field: &'static str, value: f64 },

    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: f64 },

    #[error("{field} must be finite, got {value}")]
    NonFinite { field: &'static str, value: f64 },

    #[error("number of trucks must be at least 1")]
    NoTrucks,

    #[error("sweep would produce {points} points, more than the limit of {max}")]
    TooManyPoints { points: f64, max: usize },
}

impl DomainError {
    /// Require a finite `value > 0` (NaN fails)
    pub fn require_positive(
        field: &'static str,
        value: f64,
    ) -> std::result::Result<f64, DomainError> {
        if value.is_infinite() {
            Err(DomainError::NonFinite { field, value })
        } else if value > 0.0 {
            Ok(value)
        } else {
            Err(DomainError::NonPositive { field, value })
        }
    }

    /// Require a finite `value >= 0` (NaN fails)
    pub fn require_non_negative(
        field: &'static str,
        value: f64,
    ) -> std::result::Result<f64, DomainError> {
        if value.is_infinite() {
            Err(DomainError::NonFinite { field, value })
        } else if value >= 0.0 {
            Ok(value)
        } else {
            Err(DomainError::Negative { field, value })
        }
    }
}

/// Equipment catalog errors
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Unknown loader: {0}")]
    UnknownLoader(String),

    #[error("Unknown hauler: {0}")]
    UnknownHauler(String),

    #[error("Unknown material: {0}")]
    UnknownMaterial(String),

    #[error("Failed to parse catalog: {0}")]
    Parse(String),

    #[error("Catalog has no {0}")]
    Empty(&'static str),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Calculation error: {0}")]
    Domain(#[from] DomainError),

    #[error("Catalog error: {0}")]
    Catalog(#[from] CatalogError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Excel export error: {0}")]
    Excel(String),

    #[error("Unsupported export format: {0}")]
    UnsupportedExport(String),
}

pub type Result<T> = std::result::Result<T, Error>;
