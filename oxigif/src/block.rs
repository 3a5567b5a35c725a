//! GIF89a block structures: signature, descriptors, and extension blocks.
//!
//! Every block knows how to write itself and how to read itself back under
//! the same convention the format forces on parsers: tags and labels are
//! consumed by the dispatch loop, so `read` methods start at the first byte
//! after them. All 16-bit fields are little-endian.

use crate::error::{GifError, Result};
use std::io::{Read, Write};

/// The fixed six-byte GIF89a signature.
pub const SIGNATURE: [u8; 6] = *b"GIF89a";

/// Trailer byte closing a GIF stream.
pub const TRAILER: u8 = 0x3B;

/// Tag byte opening any extension block.
pub const EXTENSION_INTRODUCER: u8 = 0x21;

/// Tag byte opening an image descriptor.
pub const IMAGE_SEPARATOR: u8 = 0x2C;

/// Extension label for graphic control blocks.
pub const GRAPHIC_CONTROL_LABEL: u8 = 0xF9;

/// Extension label for comment blocks.
pub const COMMENT_LABEL: u8 = 0xFE;

/// Extension label for application blocks.
pub const APPLICATION_LABEL: u8 = 0xFF;

/// Application identifier carrying the animation loop count.
const NETSCAPE_ID: [u8; 11] = *b"NETSCAPE2.0";

pub(crate) fn read_u8<R: Read>(reader: &mut R) -> Result<u8> {
    let mut buf = [0u8; 1];
    reader.read_exact(&mut buf)?;
    Ok(buf[0])
}

pub(crate) fn read_u16_le<R: Read>(reader: &mut R) -> Result<u16> {
    let mut buf = [0u8; 2];
    reader.read_exact(&mut buf)?;
    Ok(u16::from_le_bytes(buf))
}

fn expect_byte<R: Read>(reader: &mut R, expected: u8, what: &str) -> Result<()> {
    let found = read_u8(reader)?;
    if found != expected {
        return Err(GifError::invalid_block(format!(
            "expected {what} byte {expected:#04x}, found {found:#04x}"
        )));
    }
    Ok(())
}

/// Logical screen descriptor: canvas size plus global palette layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogicalScreenDescriptor {
    /// Canvas width in pixels.
    pub width: u16,
    /// Canvas height in pixels.
    pub height: u16,
    /// Packed fields: bit 7 = global table present, bits 0-2 = table bits - 1.
    pub packed: u8,
    /// Background color index (always 0 on the write path).
    pub background: u8,
    /// Pixel aspect ratio (always 0 on the write path).
    pub aspect_ratio: u8,
}

impl LogicalScreenDescriptor {
    /// Descriptor for a canvas with a global table of `2^bit_depth` entries.
    pub fn new(width: u16, height: u16, bit_depth: u8) -> Self {
        Self {
            width,
            height,
            packed: 0x80 | (bit_depth - 1),
            background: 0,
            aspect_ratio: 0,
        }
    }

    /// Whether a global color table follows the descriptor.
    pub fn has_global_table(&self) -> bool {
        self.packed & 0x80 != 0
    }

    /// Entry count of the global table encoded in the packed field.
    pub fn global_table_entries(&self) -> usize {
        1 << ((self.packed & 0x07) + 1)
    }

    /// Write the descriptor (follows the signature).
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&self.width.to_le_bytes())?;
        writer.write_all(&self.height.to_le_bytes())?;
        writer.write_all(&[self.packed, self.background, self.aspect_ratio])?;
        Ok(())
    }

    /// Read a descriptor; the signature must already be consumed.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let width = read_u16_le(reader)?;
        let height = read_u16_le(reader)?;
        let mut rest = [0u8; 3];
        reader.read_exact(&mut rest)?;
        Ok(Self {
            width,
            height,
            packed: rest[0],
            background: rest[1],
            aspect_ratio: rest[2],
        })
    }
}

/// NETSCAPE2.0 application extension carrying the animation loop count.
///
/// A loop count of 0 means "loop forever" and is written to the wire as
/// 65535, the customary encoding of infinite looping under the NETSCAPE2.0
/// extension; reading preserves the wire value as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ApplicationExtension {
    /// Number of animation repetitions.
    pub loop_count: u16,
}

impl ApplicationExtension {
    /// Write the full extension block, introducer and label included.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        let wire = if self.loop_count == 0 {
            65535
        } else {
            self.loop_count
        };
        writer.write_all(&[EXTENSION_INTRODUCER, APPLICATION_LABEL, 11])?;
        writer.write_all(&NETSCAPE_ID)?;
        writer.write_all(&[3, 1])?;
        writer.write_all(&wire.to_le_bytes())?;
        writer.write_all(&[0])?;
        Ok(())
    }

    /// Read an application extension; introducer and label already consumed.
    ///
    /// Returns `None` for application identifiers other than NETSCAPE2.0,
    /// whose payload sub-blocks are consumed and discarded.
    pub fn read<R: Read>(reader: &mut R) -> Result<Option<Self>> {
        expect_byte(reader, 11, "application block size")?;
        let mut id = [0u8; 11];
        reader.read_exact(&mut id)?;

        if id != NETSCAPE_ID {
            crate::subblock::read_sub_blocks(reader)?;
            return Ok(None);
        }

        expect_byte(reader, 3, "loop sub-block size")?;
        expect_byte(reader, 1, "loop sub-block id")?;
        let loop_count = read_u16_le(reader)?;
        expect_byte(reader, 0, "application block terminator")?;
        Ok(Some(Self { loop_count }))
    }
}

/// Graphic control extension: per-frame duration and transparency.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphicControlExtension {
    /// Display duration in hundredths of a second.
    pub duration: u16,
    /// Palette index rendered as transparent, if any. Index 0 is
    /// representable: presence is signalled by the packed transparency
    /// flag, not by the index value.
    pub transparent: Option<u8>,
}

impl GraphicControlExtension {
    /// Write the full extension block, introducer and label included.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        let packed = 0x08 | u8::from(self.transparent.is_some());
        writer.write_all(&[EXTENSION_INTRODUCER, GRAPHIC_CONTROL_LABEL, 4, packed])?;
        writer.write_all(&self.duration.to_le_bytes())?;
        writer.write_all(&[self.transparent.unwrap_or(0), 0])?;
        Ok(())
    }

    /// Read a graphic control extension; introducer and label already
    /// consumed.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        expect_byte(reader, 4, "graphic control block size")?;
        let packed = read_u8(reader)?;
        let duration = read_u16_le(reader)?;
        let index = read_u8(reader)?;
        expect_byte(reader, 0, "graphic control terminator")?;

        let transparent = (packed & 0x01 != 0).then_some(index);
        Ok(Self {
            duration,
            transparent,
        })
    }
}

/// Image descriptor: frame placement plus local palette layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDescriptor {
    /// Left offset of the frame on the canvas.
    pub left: u16,
    /// Top offset of the frame on the canvas.
    pub top: u16,
    /// Frame width in pixels.
    pub width: u16,
    /// Frame height in pixels.
    pub height: u16,
    /// Packed fields: bit 7 = local table present, bits 0-2 = table bits - 1.
    pub packed: u8,
}

impl ImageDescriptor {
    /// Descriptor for a frame, with `local_bits` set when a local color
    /// table of `2^local_bits` entries follows.
    pub fn new(left: u16, top: u16, width: u16, height: u16, local_bits: Option<u8>) -> Self {
        Self {
            left,
            top,
            width,
            height,
            packed: local_bits.map_or(0, |bits| 0x80 | (bits - 1)),
        }
    }

    /// Whether a local color table follows the descriptor.
    pub fn has_local_table(&self) -> bool {
        self.packed & 0x80 != 0
    }

    /// Entry count of the local table encoded in the packed field.
    pub fn local_table_entries(&self) -> usize {
        1 << ((self.packed & 0x07) + 1)
    }

    /// Write the descriptor, image separator included.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        writer.write_all(&[IMAGE_SEPARATOR])?;
        writer.write_all(&self.left.to_le_bytes())?;
        writer.write_all(&self.top.to_le_bytes())?;
        writer.write_all(&self.width.to_le_bytes())?;
        writer.write_all(&self.height.to_le_bytes())?;
        writer.write_all(&[self.packed])?;
        Ok(())
    }

    /// Read a descriptor; the image separator must already be consumed.
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let left = read_u16_le(reader)?;
        let top = read_u16_le(reader)?;
        let width = read_u16_le(reader)?;
        let height = read_u16_le(reader)?;
        let packed = read_u8(reader)?;
        Ok(Self {
            left,
            top,
            width,
            height,
            packed,
        })
    }
}
