//! GIF89a decoding: parse a byte stream back into an [`Image`].

use crate::block::{
    ApplicationExtension, GraphicControlExtension, ImageDescriptor, LogicalScreenDescriptor,
    APPLICATION_LABEL, COMMENT_LABEL, EXTENSION_INTRODUCER, GRAPHIC_CONTROL_LABEL, IMAGE_SEPARATOR,
    SIGNATURE, TRAILER,
};
use crate::block::read_u8;
use crate::color::ColorTable;
use crate::error::{GifError, Result};
use crate::image::{Frame, FrameOptions, Image, ImageOptions};
use crate::subblock::read_sub_blocks;
use std::io::{ErrorKind, Read};

/// Decode a complete GIF89a stream from `reader`.
///
/// The stream is consumed through the trailer; trailing garbage after the
/// trailer is not inspected. Returns the first error encountered, never a
/// partial image.
pub fn decode<R: Read>(reader: &mut R) -> Result<Image> {
    let mut signature = [0u8; 6];
    reader.read_exact(&mut signature)?;
    if signature != SIGNATURE {
        return Err(GifError::InvalidSignature {
            found: signature.to_vec(),
        });
    }

    let descriptor = LogicalScreenDescriptor::read(reader)?;
    if !descriptor.has_global_table() {
        return Err(GifError::invalid_header(
            "logical screen descriptor without a global color table",
        ));
    }
    let bit_depth = (descriptor.packed & 0x07) + 1;
    if bit_depth < 2 {
        return Err(GifError::InvalidBitDepth(bit_depth));
    }

    let options = ImageOptions {
        bit_depth,
        loop_count: 0,
    };
    let mut image = Image::new(descriptor.width, descriptor.height, options)?;
    let palette = ColorTable::read(reader, descriptor.global_table_entries())?;
    image.set_palette(palette)?;

    let mut pending: Option<GraphicControlExtension> = None;
    while let Some(tag) = read_tag(reader)? {
        match tag {
            TRAILER => break,
            EXTENSION_INTRODUCER => match read_u8(reader)? {
                GRAPHIC_CONTROL_LABEL => {
                    pending = Some(GraphicControlExtension::read(reader)?);
                }
                COMMENT_LABEL => {
                    let text = read_sub_blocks(reader)?;
                    image.push_comment(String::from_utf8_lossy(&text).into_owned());
                }
                APPLICATION_LABEL => {
                    if let Some(ext) = ApplicationExtension::read(reader)? {
                        image.set_loop_count(ext.loop_count);
                    }
                }
                label => return Err(GifError::UnknownExtension { label }),
            },
            IMAGE_SEPARATOR => {
                let frame = read_frame(reader, pending.take())?;
                image.push_frame(frame)?;
            }
            tag => return Err(GifError::UnknownBlock { tag }),
        }
    }

    Ok(image)
}

/// Decode a complete GIF89a stream held in memory.
pub fn decode_from_slice(bytes: &[u8]) -> Result<Image> {
    decode(&mut std::io::Cursor::new(bytes))
}

/// Read the next block tag, or `None` at clean end of stream.
fn read_tag<R: Read>(reader: &mut R) -> Result<Option<u8>> {
    let mut buf = [0u8; 1];
    match reader.read_exact(&mut buf) {
        Ok(()) => Ok(Some(buf[0])),
        Err(err) if err.kind() == ErrorKind::UnexpectedEof => Ok(None),
        Err(err) => Err(err.into()),
    }
}

fn read_frame<R: Read>(
    reader: &mut R,
    control: Option<GraphicControlExtension>,
) -> Result<Frame> {
    let descriptor = ImageDescriptor::read(reader)?;

    let local_palette = if descriptor.has_local_table() {
        Some(ColorTable::read(reader, descriptor.local_table_entries())?)
    } else {
        None
    };

    let code_size = read_u8(reader)?;
    let payload = read_sub_blocks(reader)?;
    let pixels = oxigif_lzw::decompress(&payload, code_size)?;

    let expected = descriptor.width as usize * descriptor.height as usize;
    if pixels.len() != expected {
        return Err(GifError::FrameMismatch {
            expected,
            actual: pixels.len(),
        });
    }

    // A frame with no graphic control extension has no duration on the wire.
    let (duration, transparent) = match control {
        Some(control) => (control.duration, control.transparent),
        None => (0, None),
    };
    let options = FrameOptions {
        duration,
        transparent,
        local_palette,
    };

    Frame::at(
        descriptor.left,
        descriptor.top,
        descriptor.width,
        descriptor.height,
        pixels,
        options,
    )
}
