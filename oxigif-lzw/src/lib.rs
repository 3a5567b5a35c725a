//! # OxiGIF-LZW: Pure Rust GIF-variant LZW
//!
//! This crate implements the LZW (Lempel-Ziv-Welch) variant used inside GIF
//! image data: LSB-first bit packing, variable code widths from
//! `code_size + 1` up to 12 bits, inline CLEAR codes that rebuild the
//! dictionary, and an END code terminating each stream.
//!
//! ## GIF LZW specification
//!
//! - **LSB-first bit order**: codes are packed least-significant-bit first
//! - **Small alphabets**: the initial code size is the palette bit depth
//!   (2-8), not a fixed 8 bits
//! - **CLEAR/END codes**: CLEAR is `2^code_size`, END is `CLEAR + 1`
//! - **4096-entry cap**: the dictionary never exceeds `2^12` entries; the
//!   encoder issues a CLEAR the moment an insertion fills it
//! - **Synchronized widths**: the code width is never written to the wire;
//!   encoder and decoder each derive it from the count of codes seen since
//!   the last CLEAR, and any divergence silently corrupts the stream
//!
//! ## Example
//!
//! ```rust
//! use oxigif_lzw::{compress, decompress};
//!
//! // Palette indices for a 4-color image (code size 2).
//! let pixels = [0u8, 1, 1, 0, 2, 2, 3, 3, 0, 1, 1, 0];
//!
//! let packed = compress(&pixels, 2).unwrap();
//! let restored = decompress(&packed, 2).unwrap();
//!
//! assert_eq!(restored, pixels);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod bitstream;
mod decoder;
mod encoder;
mod error;
mod table;

pub use bitstream::{CodePacker, CodeUnpacker, MAX_CODE_WIDTH};
pub use decoder::LzwDecoder;
pub use encoder::LzwEncoder;
pub use error::{LzwError, Result};
pub use table::{CodeTable, MAX_TABLE_SIZE};

/// Compress a symbol sequence with GIF-variant LZW.
///
/// # Parameters
///
/// - `symbols`: input sequence; every symbol must be below `2^code_size`
/// - `code_size`: initial code size in bits (2-8)
///
/// # Example
///
/// ```rust
/// use oxigif_lzw::compress;
///
/// let packed = compress(&[0, 1, 1, 0], 2).unwrap();
/// assert_eq!(packed, vec![0x44, 0x02, 0x05]);
/// ```
pub fn compress(symbols: &[u8], code_size: u8) -> Result<Vec<u8>> {
    let mut encoder = LzwEncoder::new(code_size)?;
    encoder.encode(symbols)
}

/// Decompress a GIF-variant LZW byte stream.
///
/// # Parameters
///
/// - `data`: packed bytes as produced by [`compress`]
/// - `code_size`: the initial code size the stream was encoded with (2-8)
///
/// # Example
///
/// ```rust
/// use oxigif_lzw::decompress;
///
/// let symbols = decompress(&[0x44, 0x02, 0x05], 2).unwrap();
/// assert_eq!(symbols, vec![0, 1, 1, 0]);
/// ```
pub fn decompress(data: &[u8], code_size: u8) -> Result<Vec<u8>> {
    let mut decoder = LzwDecoder::new(code_size)?;
    decoder.decode(data)
}
