use thiserror::Error;

#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("label '{0}' is longer than 63 bytes")]
    LabelTooLong(String),

    #[error("empty label in domain name '{0}'")]
    EmptyLabel(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DecodeError {
    #[error("message truncated in {0}")]
    TruncatedMessage(&'static str),

    #[error("resource record truncated")]
    TruncatedRecord,

    #[error("resource record data truncated: expected {expected} bytes, {available} available")]
    TruncatedRecordData { expected: usize, available: usize },

    #[error("compression pointer loop detected at offset {0}")]
    PointerLoop(u16),

    #[error("unsupported label type in length byte {0:#04x}")]
    BadLabelType(u8),

    #[error("A record data must be 4 bytes, got {0}")]
    BadAddressLength(u16),
}

/// Failure while reading a wire name, before the caller knows which
/// section the name belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum NameError {
    Truncated,
    PointerLoop(u16),
    BadLabelType(u8),
}

impl NameError {
    /// Maps a short read onto the section specific truncation error.
    pub(crate) fn or_truncated(self, truncated: DecodeError) -> DecodeError {
        match self {
            NameError::Truncated => truncated,
            NameError::PointerLoop(offset) => DecodeError::PointerLoop(offset),
            NameError::BadLabelType(b) => DecodeError::BadLabelType(b),
        }
    }
}
