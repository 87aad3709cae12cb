// ============ Codec Errors ============

use thiserror::Error;

/// Every codec call either returns a fully valid value or one of these.
///
/// Each variant names the field that failed so the order builder can report
/// which input was rejected before any transaction is assembled.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("{field}: value {value} does not fit in {width_bits} bits")]
    OutOfRange {
        field: &'static str,
        value: String,
        width_bits: u32,
    },

    #[error("{field}: expected {expected} bytes, got {actual}")]
    MalformedLength {
        field: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("{field}: {reason}")]
    MalformedData { field: &'static str, reason: String },

    #[error("unknown {kind} layout `{name}`")]
    UnknownVariant { kind: &'static str, name: String },
}

impl CodecError {
    pub(crate) fn length(field: &'static str, expected: usize, actual: usize) -> Self {
        Self::MalformedLength {
            field,
            expected,
            actual,
        }
    }

    pub(crate) fn data(field: &'static str, reason: impl Into<String>) -> Self {
        Self::MalformedData {
            field,
            reason: reason.into(),
        }
    }

    /// Name of the field the error refers to, if any.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            Self::OutOfRange { field, .. }
            | Self::MalformedLength { field, .. }
            | Self::MalformedData { field, .. } => Some(field),
            Self::UnknownVariant { .. } => None,
        }
    }
}

pub type CodecResult<T> = Result<T, CodecError>;
