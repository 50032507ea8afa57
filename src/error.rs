//! Error handling for HURDAT2 record decoding.
//!
//! Every accessor returns a typed error carrying the offending line, so a
//! driver can decide whether to skip the line and keep streaming.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum HurdatError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Malformed record: line too short for field '{field}': {line:?}")]
    MalformedRecord { field: &'static str, line: String },

    #[error("Precondition violated: {operation} requires a header line, got {line:?}")]
    PreconditionViolation {
        operation: &'static str,
        line: String,
    },

    #[error("Malformed field '{field}' = {value:?} ({reason}) in line {line:?}")]
    MalformedField {
        field: &'static str,
        value: String,
        reason: String,
        line: String,
    },

    #[error("Unknown stage code {code:?} in line {line:?}")]
    UnknownStageCode { code: String, line: String },

    /// `line` is the lossy decoding, with U+FFFD in place of the bad bytes
    #[error("Line is not valid UTF-8 ({reason}): {line:?}")]
    InvalidEncoding { reason: String, line: String },

    #[error("Observation line appears before any storm header: {line:?}")]
    OrphanObservation { line: String },

    #[error("Line {line_number}: {source}")]
    Line {
        line_number: usize,
        #[source]
        source: Box<HurdatError>,
    },

    #[error("Configuration error: {message}")]
    Configuration { message: String },
}

impl HurdatError {
    /// Attach a 1-based line number to a record-level error
    pub fn at_line(self, line_number: usize) -> Self {
        match self {
            // Already positioned, and IO failures have no meaningful line
            HurdatError::Line { .. } | HurdatError::Io(_) => self,
            other => HurdatError::Line {
                line_number,
                source: Box::new(other),
            },
        }
    }

    /// Create a configuration error
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    /// True when the error describes a single bad line rather than a broken source
    pub fn is_recoverable(&self) -> bool {
        match self {
            HurdatError::Io(_) | HurdatError::Configuration { .. } => false,
            HurdatError::Line { source, .. } => source.is_recoverable(),
            _ => true,
        }
    }
}

pub type Result<T> = std::result::Result<T, HurdatError>;
