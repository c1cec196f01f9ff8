//! Error types for WAVE container operations.

use thiserror::Error;

/// Errors produced while decoding, encoding, or converting a wave container.
#[derive(Debug, Error)]
pub enum Error {
    /// A binary header failed the canonical consistency check.
    #[error("malformed header: {0}")]
    MalformedHeader(String),

    /// The stream ended before the required number of bytes was read.
    #[error("short read: expected {expected} bytes, got {actual}")]
    ShortRead {
        /// Number of bytes the header or data chunk requires.
        expected: usize,
        /// Number of bytes actually available.
        actual: usize,
    },

    /// The stream stopped accepting bytes before the container was written.
    #[error("short write: stream accepted fewer bytes than required")]
    ShortWrite,

    /// Channel count or bit depth outside mono/stereo and 8/16-bit.
    #[error("unsupported format: {channels} channel(s), {bits}-bit")]
    UnsupportedFormat {
        /// Channel count found in the container.
        channels: u16,
        /// Bits per sample found in the container.
        bits: u16,
    },

    /// A conversion was handed a source with the wrong channel count.
    #[error("expected {expected} channel(s), found {found}")]
    UnexpectedChannels {
        /// Channel count the conversion requires.
        expected: u16,
        /// Channel count of the source.
        found: u16,
    },

    /// A conversion was handed a source with the wrong bit depth.
    #[error("expected {expected}-bit samples, found {found}-bit")]
    UnexpectedBitDepth {
        /// Bit depth the conversion requires.
        expected: u16,
        /// Bit depth of the source.
        found: u16,
    },

    /// A text line did not match the detected frame layout or value range.
    #[error("malformed text at line {line}: {reason}")]
    MalformedText {
        /// 1-based line number (0 when the input as a whole is at fault).
        line: usize,
        /// Description of the problem.
        reason: String,
    },

    /// The container is empty or internally inconsistent and cannot be written.
    #[error("invalid state for write: {0}")]
    InvalidState(&'static str),

    /// Indexed sample access past the end of the sample buffer.
    #[error("sample index {index} out of range (buffer holds {len} samples)")]
    IndexOutOfRange {
        /// Requested sample index.
        index: usize,
        /// Number of samples at the current bit depth.
        len: usize,
    },

    /// Underlying I/O failure other than a short read or write.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Create a malformed-text error for the given 1-based line.
    pub fn text(line: usize, reason: impl Into<String>) -> Self {
        Error::MalformedText {
            line,
            reason: reason.into(),
        }
    }
}

/// Convenience result type for container operations.
pub type Result<T> = std::result::Result<T, Error>;
