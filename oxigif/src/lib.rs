//! GIF89a encoding and decoding for indexed-color animations.
//!
//! Builds animated GIF files from palette-indexed frames and parses them
//! back: the logical screen descriptor, global and local color tables, the
//! NETSCAPE looping extension, per-frame graphic control (duration and
//! transparency), and LZW-compressed pixel data framed in sub-blocks.
//!
//! # Examples
//!
//! ```
//! use oxigif::{FrameOptions, Image, ImageOptions};
//!
//! let options = ImageOptions { bit_depth: 2, loop_count: 0 };
//! let mut image = Image::new(2, 2, options)?;
//! image.add_frame(vec![0, 1, 1, 0], FrameOptions::with_duration(10))?;
//!
//! let bytes = oxigif::encode_to_vec(&image)?;
//! assert_eq!(&bytes[..6], b"GIF89a");
//!
//! let decoded = oxigif::decode_from_slice(&bytes)?;
//! assert_eq!(decoded.frames()[0].pixels, vec![0, 1, 1, 0]);
//! # Ok::<(), oxigif::GifError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![forbid(unsafe_code)]

mod block;
mod color;
mod error;
mod image;
mod reader;
mod subblock;
mod writer;

pub use block::{
    ApplicationExtension, GraphicControlExtension, ImageDescriptor, LogicalScreenDescriptor,
};
pub use color::{ColorTable, Rgb};
pub use error::{GifError, Result};
pub use image::{Frame, FrameOptions, Image, ImageOptions, DEFAULT_DURATION};
pub use reader::{decode, decode_from_slice};
pub use subblock::{read_sub_blocks, write_sub_blocks, MAX_SUB_BLOCK};
pub use writer::{encode, encode_to_vec};

#[cfg(feature = "parallel")]
pub use writer::encode_parallel;
