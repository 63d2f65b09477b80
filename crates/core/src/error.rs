//! Error types for nullable wrappers
//!
//! Every codec operation (JSON, text, driver binding) reports failures through
//! the single [`Error`] enum defined here.
//! We use `thiserror` for automatic `Display` and `Error` trait implementations.

use thiserror::Error;

/// Result type alias for nullable operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error types for encoding and decoding nullable values
#[derive(Debug, Error)]
pub enum Error {
    /// Malformed structured (JSON) input
    #[error("syntax error: {0}")]
    Syntax(#[source] serde_json::Error),

    /// Well-formed input of the wrong kind (e.g. a boolean where a number is expected)
    #[error("type mismatch: expected {expected}, found {found}")]
    TypeMismatch {
        /// What the target type accepts
        expected: &'static str,
        /// What the input actually contained
        found: &'static str,
    },

    /// Numeric literal outside the range of the target width
    #[error("value {value} overflows {target}")]
    Overflow {
        /// Literal as it appeared in the input
        value: String,
        /// Target type name
        target: &'static str,
    },

    /// Text form not parseable as the target type
    #[error("couldn't parse {input:?} as {target}: {reason}")]
    Parse {
        /// Offending input (lossy UTF-8)
        input: String,
        /// Target type name
        target: &'static str,
        /// Underlying parser message
        reason: String,
    },

    /// Driver value of a kind the target type cannot be scanned from
    #[error("cannot scan {found} into {expected}")]
    BindingType {
        /// Target type name
        expected: &'static str,
        /// Kind of the driver value offered
        found: &'static str,
    },

    /// A present value the target format cannot represent
    #[error("unsupported value {value} for {target}")]
    Unsupported {
        /// Rendered value
        value: String,
        /// Format or type that rejected it
        target: &'static str,
    },
}

impl Error {
    /// Build a [`Error::Parse`] from raw input bytes and a parser message.
    pub fn parse(input: &[u8], target: &'static str, reason: impl ToString) -> Self {
        Error::Parse {
            input: String::from_utf8_lossy(input).into_owned(),
            target,
            reason: reason.to_string(),
        }
    }

    /// Build an [`Error::Overflow`] for a literal that does not fit `target`.
    pub fn overflow(value: impl ToString, target: &'static str) -> Self {
        Error::Overflow {
            value: value.to_string(),
            target,
        }
    }

    /// Check if this error came from malformed structured input
    pub fn is_syntax(&self) -> bool {
        matches!(self, Error::Syntax(_))
    }

    /// Check if this error is a numeric range failure
    pub fn is_overflow(&self) -> bool {
        matches!(self, Error::Overflow { .. })
    }
}
