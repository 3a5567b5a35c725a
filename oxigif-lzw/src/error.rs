//! LZW-specific error types.

use thiserror::Error;

/// LZW compression/decompression errors.
#[derive(Debug, Error)]
pub enum LzwError {
    /// Code size outside the range GIF supports.
    #[error("Invalid LZW code size: {0} (must be 2-8)")]
    InvalidCodeSize(u8),

    /// Input symbol does not fit the declared alphabet.
    #[error("Symbol {symbol} out of range for alphabet of {alphabet} entries")]
    SymbolOutOfRange {
        /// The offending symbol.
        symbol: u8,
        /// Number of symbols the code size admits (2^code_size).
        alphabet: u16,
    },

    /// A code outside the valid range for the current table state.
    #[error("Invalid LZW code: {0}")]
    InvalidCode(u16),

    /// The bit stream ended before an END code was seen.
    #[error("Unexpected end of LZW stream at bit position {bit_position}")]
    UnexpectedEof {
        /// Bit position where the stream ran out.
        bit_position: u64,
    },
}

/// Result type for LZW operations.
pub type Result<T> = std::result::Result<T, LzwError>;
