//! Error types for loading filter configurations.
//!
//! Rendering never fails; these errors only arise at the boundary where a
//! configuration, a render setting or a form value is read from outside.

use thiserror::Error;

/// A specialized Result type for filter loading operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while reading filter input.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FilterError {
    /// The filter configuration is not valid JSON or has the wrong shape.
    #[error("invalid filter configuration: {message}")]
    InvalidJson {
        /// The parser's description of the problem.
        message: String,
    },

    /// A date format pattern contains an unknown specifier.
    #[error("invalid date format: {format}")]
    InvalidDateFormat {
        /// The rejected strftime pattern.
        format: String,
    },

    /// A timezone name is not in the IANA database.
    #[error("unknown timezone: {name}")]
    InvalidTimezone {
        /// The rejected name.
        name: String,
    },

    /// A form value is not one of the configured options.
    #[error("unknown {kind} '{value}'{}", suggestion_suffix(.suggestion))]
    UnknownOption {
        /// Which option list was consulted (e.g. "role").
        kind: String,
        /// The rejected value.
        value: String,
        /// The closest known value, if any is close enough.
        suggestion: Option<String>,
    },
}

fn suggestion_suffix(suggestion: &Option<String>) -> String {
    match suggestion {
        Some(s) => format!(" (did you mean '{s}'?)"),
        None => String::new(),
    }
}

impl FilterError {
    /// Creates an invalid JSON error.
    pub fn invalid_json(message: impl Into<String>) -> Self {
        FilterError::InvalidJson {
            message: message.into(),
        }
    }

    /// Creates an unknown option error.
    pub fn unknown_option(
        kind: impl Into<String>,
        value: impl Into<String>,
        suggestion: Option<String>,
    ) -> Self {
        FilterError::UnknownOption {
            kind: kind.into(),
            value: value.into(),
            suggestion,
        }
    }
}

impl From<serde_json::Error> for FilterError {
    fn from(err: serde_json::Error) -> Self {
        FilterError::invalid_json(err.to_string())
    }
}
