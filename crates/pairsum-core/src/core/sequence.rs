use serde::Deserialize;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq, Clone)]
pub enum InvalidArgument {
    #[error("Invalid argument: declared length {declared} exceeds the {available} element(s) in the buffer")]
    LengthExceedsBuffer { declared: usize, available: usize },

    #[error("Invalid argument: declared length {0} is negative")]
    NegativeLength(i64),

    #[error("Invalid argument: length-prefixed buffer is empty, expected the element count first")]
    MissingLengthPrefix,
}

/// How a raw buffer lays out its elements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SequenceLayout {
    /// Every element of the buffer is data.
    #[default]
    Plain,
    /// The first element is the count of data elements that follow it.
    LengthPrefixed,
}

impl SequenceLayout {
    pub fn decode(self, buffer: &[i64]) -> Result<&[i64], InvalidArgument> {
        match self {
            SequenceLayout::Plain => Ok(buffer),
            SequenceLayout::LengthPrefixed => from_length_prefixed(buffer),
        }
    }
}

/// Takes the first `declared` elements of `buffer`.
///
/// A declared length shorter than the buffer selects a prefix, matching how an explicit
/// `(length, pointer)` pair is read. A declared length past the end is rejected.
pub fn with_declared_len(buffer: &[i64], declared: usize) -> Result<&[i64], InvalidArgument> {
    buffer
        .get(..declared)
        .ok_or(InvalidArgument::LengthExceedsBuffer {
            declared,
            available: buffer.len(),
        })
}

/// Reads a buffer whose first element holds the number of data elements that follow.
pub fn from_length_prefixed(buffer: &[i64]) -> Result<&[i64], InvalidArgument> {
    let (&count, data) = buffer
        .split_first()
        .ok_or(InvalidArgument::MissingLengthPrefix)?;

    if count < 0 {
        return Err(InvalidArgument::NegativeLength(count));
    }

    // A count that does not fit in usize is certainly past the end of the data.
    let declared = usize::try_from(count).unwrap_or(usize::MAX);
    with_declared_len(data, declared)
}
