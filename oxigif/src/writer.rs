//! GIF89a encoding: serialize an [`Image`] into a byte stream.

use crate::block::{
    ApplicationExtension, GraphicControlExtension, ImageDescriptor, LogicalScreenDescriptor,
    COMMENT_LABEL, EXTENSION_INTRODUCER, SIGNATURE, TRAILER,
};
use crate::error::Result;
use crate::image::{Frame, Image};
use crate::subblock::write_sub_blocks;
use std::io::Write;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// LZW code size in effect for a frame: the bits of the palette governing
/// its indices, with the format's floor of 2.
fn frame_code_size(image: &Image, frame: &Frame) -> u8 {
    frame
        .options
        .local_palette
        .as_ref()
        .map_or(image.options().bit_depth, |palette| palette.bits().max(2))
}

fn compress_frame(frame: &Frame, code_size: u8) -> Result<Vec<u8>> {
    Ok(oxigif_lzw::compress(&frame.pixels, code_size)?)
}

/// Encode `image` as a complete GIF89a stream into `writer`.
pub fn encode<W: Write>(image: &Image, writer: &mut W) -> Result<()> {
    let payloads = image
        .frames()
        .iter()
        .map(|frame| compress_frame(frame, frame_code_size(image, frame)))
        .collect::<Result<Vec<_>>>()?;
    write_with_payloads(image, &payloads, writer)
}

/// Encode `image`, compressing frame payloads in parallel via rayon.
///
/// Output is byte-identical to [`encode`]; only the compression work is
/// spread across threads.
#[cfg(feature = "parallel")]
pub fn encode_parallel<W: Write>(image: &Image, writer: &mut W) -> Result<()> {
    let payloads = image
        .frames()
        .par_iter()
        .map(|frame| compress_frame(frame, frame_code_size(image, frame)))
        .collect::<Result<Vec<_>>>()?;
    write_with_payloads(image, &payloads, writer)
}

/// Encode `image` into a freshly allocated buffer.
pub fn encode_to_vec(image: &Image) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    encode(image, &mut bytes)?;
    Ok(bytes)
}

fn write_with_payloads<W: Write>(image: &Image, payloads: &[Vec<u8>], writer: &mut W) -> Result<()> {
    writer.write_all(&SIGNATURE)?;

    LogicalScreenDescriptor::new(image.width(), image.height(), image.options().bit_depth)
        .write(writer)?;
    image.palette().write(writer)?;

    ApplicationExtension {
        loop_count: image.options().loop_count,
    }
    .write(writer)?;

    for comment in image.comments() {
        writer.write_all(&[EXTENSION_INTRODUCER, COMMENT_LABEL])?;
        write_sub_blocks(writer, comment.as_bytes())?;
    }

    for (frame, payload) in image.frames().iter().zip(payloads) {
        GraphicControlExtension {
            duration: frame.options.duration,
            transparent: frame.options.transparent,
        }
        .write(writer)?;

        let local_bits = frame
            .options
            .local_palette
            .as_ref()
            .map(|palette| palette.bits());
        ImageDescriptor::new(frame.left, frame.top, frame.width, frame.height, local_bits)
            .write(writer)?;
        if let Some(palette) = &frame.options.local_palette {
            palette.write(writer)?;
        }

        writer.write_all(&[frame_code_size(image, frame)])?;
        write_sub_blocks(writer, payload)?;
    }

    writer.write_all(&[TRAILER])?;
    Ok(())
}
