//! Error types for probe-telemetry

use thiserror::Error;

/// Codec errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    #[error("Field index out of range: {index} (fields 0..{count})")]
    FieldIndex { index: usize, count: usize },

    #[error("Field {index} value {value} does not fit in {width} bits")]
    FieldOverflow { index: usize, value: u32, width: u8 },

    #[error("Invalid buffer length: expected {expected} bytes, got {actual}")]
    Length { expected: usize, actual: usize },

    #[error("Frame truncated: expected at least {expected} bytes, got {actual}")]
    Truncated { expected: usize, actual: usize },
}

impl CodecError {
    pub fn field_index(index: usize) -> Self {
        Self::FieldIndex {
            index,
            count: crate::packed::FIELD_COUNT,
        }
    }

    pub fn field_overflow(index: usize, value: u32) -> Self {
        Self::FieldOverflow {
            index,
            value,
            width: crate::packed::FIELD_WIDTH,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodecError>;
