//! Error types for GIF container operations.

use oxigif_lzw::LzwError;
use std::io;
use thiserror::Error;

/// The main error type for GIF encoding and decoding.
///
/// Decoding is atomic: any error aborts the whole operation and no partial
/// image is returned. Contract violations on the encode side (bad bit
/// depths, oversized palettes, mismatched pixel buffers) are rejected
/// before any bytes are produced.
#[derive(Debug, Error)]
pub enum GifError {
    /// I/O error from the underlying reader/writer.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The stream does not start with the GIF89a signature.
    #[error("Invalid GIF signature: expected \"GIF89a\", found {found:02x?}")]
    InvalidSignature {
        /// The six bytes actually found.
        found: Vec<u8>,
    },

    /// Malformed logical screen descriptor or missing global color table.
    #[error("Invalid header: {message}")]
    InvalidHeader {
        /// Description of the header error.
        message: String,
    },

    /// A block tag that is neither extension, image separator, nor trailer.
    #[error("Unknown block tag: {tag:#04x}")]
    UnknownBlock {
        /// The unexpected tag byte.
        tag: u8,
    },

    /// An extension label this codec cannot parse or skip.
    #[error("Unknown extension label: {label:#04x}")]
    UnknownExtension {
        /// The unexpected label byte.
        label: u8,
    },

    /// Malformed fixed-size sub-fields inside a block.
    #[error("Invalid block: {message}")]
    InvalidBlock {
        /// Description of the block error.
        message: String,
    },

    /// Color table construction rejected the input.
    #[error("Invalid color table: {message}")]
    InvalidColorTable {
        /// Description of the color table error.
        message: String,
    },

    /// Palette bit depth outside the range this codec supports.
    #[error("Invalid palette bit depth: {0} (must be 2-8)")]
    InvalidBitDepth(u8),

    /// Decoded pixel count does not match the frame dimensions.
    #[error("Frame pixel count mismatch: expected {expected}, got {actual}")]
    FrameMismatch {
        /// Pixels the image descriptor promised.
        expected: usize,
        /// Pixels the LZW stream produced (or the caller supplied).
        actual: usize,
    },

    /// LZW stream error from the image data of a frame.
    #[error("LZW error: {0}")]
    Lzw(#[from] LzwError),
}

/// Result type alias for GIF operations.
pub type Result<T> = std::result::Result<T, GifError>;

impl GifError {
    /// Create an invalid header error.
    pub fn invalid_header(message: impl Into<String>) -> Self {
        Self::InvalidHeader {
            message: message.into(),
        }
    }

    /// Create an invalid block error.
    pub fn invalid_block(message: impl Into<String>) -> Self {
        Self::InvalidBlock {
            message: message.into(),
        }
    }

    /// Create an invalid color table error.
    pub fn invalid_color_table(message: impl Into<String>) -> Self {
        Self::InvalidColorTable {
            message: message.into(),
        }
    }
}
