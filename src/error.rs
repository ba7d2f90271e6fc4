//! Error types for the pay calculators.
//!
//! The salary calculations themselves are total and never fail. Errors come
//! from loading configuration and from validating caller input before it
//! reaches a calculator.

use chrono::NaiveDate;
use thiserror::Error;

/// The main error type for the pay calculators.
///
/// # Example
///
/// ```
/// use pay_calculator::error::CalculatorError;
///
/// let error = CalculatorError::ConfigNotFound {
///     path: "/missing/schedule.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/schedule.yaml");
/// ```
#[derive(Debug, Error)]
pub enum CalculatorError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No deduction schedule is effective on the requested date.
    #[error("No deduction schedule effective on {date}")]
    ScheduleNotFound {
        /// The date for which a schedule was requested.
        date: NaiveDate,
    },

    /// A configuration value is out of range or inconsistent.
    #[error("Invalid configuration field '{field}': {message}")]
    InvalidConfig {
        /// The field that was invalid.
        field: String,
        /// A description of what made the field invalid.
        message: String,
    },

    /// A caller-supplied input is out of range.
    #[error("Invalid input '{field}': {message}")]
    InvalidInput {
        /// The input that was invalid.
        field: String,
        /// A description of what made the input invalid.
        message: String,
    },
}

impl CalculatorError {
    pub(crate) fn invalid_config(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidConfig {
            field: field.to_string(),
            message: message.into(),
        }
    }

    pub(crate) fn invalid_input(field: &str, message: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// A type alias for Results that return CalculatorError.
pub type CalculatorResult<T> = Result<T, CalculatorError>;
