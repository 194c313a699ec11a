//! Error types for resource ID parsing and validation.

use thiserror::Error;

/// Errors that can occur when parsing a resource ID.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("parsing resource id {input:?}: {kind}")]
pub struct ParseError {
    /// The input that failed to parse
    pub input: String,
    /// The specific error that occurred
    pub kind: ParseErrorKind,
}

impl ParseError {
    /// Creates a parse error for the given input.
    #[must_use]
    pub fn new(input: impl Into<String>, kind: ParseErrorKind) -> Self {
        Self {
            input: input.into(),
            kind,
        }
    }

    /// Returns true if the input was structurally malformed.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        self.kind.is_malformed()
    }
}

/// Specific parsing error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseErrorKind {
    /// The input is not a well-formed slash-delimited path
    #[error("malformed input: {reason}")]
    MalformedInput {
        /// What was wrong with the input
        reason: MalformedReason,
    },
    /// A keyword did not match the one the shape requires at this position
    #[error("expected segment {expected:?} at position {position}, found {actual:?}")]
    UnexpectedSegment {
        /// The canonical keyword the shape requires
        expected: &'static str,
        /// The token found in the input
        actual: String,
        /// Zero-based position of the token
        position: usize,
    },
    /// A segment was empty or the input ended before it
    #[error("segment {segment:?} was not specified")]
    MissingSegmentValue {
        /// Field name of the missing value, or the keyword for a missing keyword
        segment: &'static str,
    },
    /// A bound value would not survive formatting as part of the path
    #[error("segment {segment:?} has value {value:?}, which is not a valid path segment")]
    InvalidSegmentValue {
        /// Field name of the offending value
        segment: &'static str,
        /// The offending value
        value: String,
    },
    /// The input has more segments than the shape consumes
    #[error("expected {expected} segments, found {actual}")]
    SegmentCountMismatch {
        /// Number of segments the shape consumed
        expected: usize,
        /// Number of segments in the input
        actual: usize,
    },
    /// No registered shape matches the input
    #[error("no registered resource id type matches this value")]
    UnknownShape,
}

impl ParseErrorKind {
    /// Returns true for errors describing structurally malformed input.
    #[must_use]
    pub const fn is_malformed(&self) -> bool {
        matches!(
            self,
            Self::MalformedInput { .. } | Self::SegmentCountMismatch { .. }
        )
    }
}

/// Reasons an input is malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum MalformedReason {
    /// Input is empty
    #[error("input is empty")]
    Empty,
    /// Input does not start with '/'
    #[error("input must start with '/'")]
    MissingLeadingSlash,
    /// Input is just '/'
    #[error("input contains no segments")]
    NoSegments,
    /// Input ends with '/'
    #[error("input must not end with '/'")]
    TrailingSlash,
    /// Two consecutive separators inside a scope
    #[error("scope contains an empty segment")]
    EmptySegment,
}

/// Errors reported by the schema-level validation helpers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The value is not a valid ID of the expected type
    #[error("{key:?} is not a valid {type_name} ID: {source}")]
    InvalidId {
        /// Name of the validated attribute
        key: String,
        /// Name of the expected ID type
        type_name: &'static str,
        /// The underlying parse failure
        source: ParseError,
    },
    /// Fewer entries than the lower bound
    #[error("{key:?} must contain at least {min} item(s), found {actual}")]
    TooFew {
        /// Name of the validated attribute
        key: String,
        /// Minimum number of entries
        min: usize,
        /// Actual number of entries
        actual: usize,
    },
    /// More entries than the upper bound
    #[error("{key:?} must contain at most {max} item(s), found {actual}")]
    TooMany {
        /// Name of the validated attribute
        key: String,
        /// Maximum number of entries
        max: usize,
        /// Actual number of entries
        actual: usize,
    },
    /// The value is not a GUID
    #[error("{key:?} must be a GUID, found {value:?}")]
    NotAGuid {
        /// Name of the validated attribute
        key: String,
        /// The offending value
        value: String,
    },
}
