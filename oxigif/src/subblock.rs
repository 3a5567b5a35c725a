//! Length-prefixed sub-block framing.
//!
//! GIF wraps variable-length payloads (compressed pixel data, comment text,
//! application data) in runs of sub-blocks: each is a length byte 1-255
//! followed by that many payload bytes, and a zero length byte terminates
//! the run. An empty payload is legal and frames as the lone terminator.

use crate::block::read_u8;
use crate::error::Result;
use std::io::{Read, Write};

/// Maximum payload bytes a single sub-block can carry.
pub const MAX_SUB_BLOCK: usize = 255;

/// Write `payload` as a terminated run of sub-blocks.
pub fn write_sub_blocks<W: Write>(writer: &mut W, payload: &[u8]) -> Result<()> {
    for chunk in payload.chunks(MAX_SUB_BLOCK) {
        writer.write_all(&[chunk.len() as u8])?;
        writer.write_all(chunk)?;
    }
    writer.write_all(&[0])?;
    Ok(())
}

/// Read a terminated run of sub-blocks and return the joined payload.
pub fn read_sub_blocks<R: Read>(reader: &mut R) -> Result<Vec<u8>> {
    let mut payload = Vec::new();
    loop {
        let len = read_u8(reader)?;
        if len == 0 {
            return Ok(payload);
        }
        let start = payload.len();
        payload.resize(start + len as usize, 0);
        reader.read_exact(&mut payload[start..])?;
    }
}
