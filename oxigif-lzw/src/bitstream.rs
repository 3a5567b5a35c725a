//! LSB-first bit stream operations for GIF LZW.
//!
//! GIF packs codes least-significant-bit first, unlike the MSB-first order
//! used by TIFF and DEFLATE. The code width is not carried on the wire:
//! both sides derive it from an identical schedule, tracked here. The width
//! starts at `code_size + 1` bits, grows by one each time the count of codes
//! seen since the last CLEAR reaches `2^width`, never exceeds
//! [`MAX_CODE_WIDTH`], and snaps back to `code_size + 1` on every CLEAR.

/// Largest code width GIF allows, in bits.
pub const MAX_CODE_WIDTH: u8 = 12;

/// The shared width-growth schedule.
///
/// Packer and unpacker advance this after every code, keyed only on whether
/// the code was CLEAR, so both sides compute the same width at the same code
/// index. The counter starts at the END code value and counts codes, not
/// table insertions; the distinction matters at the tail of a stream, where
/// the final match and END codes are emitted without insertions.
#[derive(Debug, Clone, Copy)]
struct WidthSchedule {
    clear_code: u16,
    min_width: u8,
    width: u8,
    issued: u16,
}

impl WidthSchedule {
    fn new(code_size: u8) -> Self {
        let clear_code = 1u16 << code_size;
        Self {
            clear_code,
            min_width: code_size + 1,
            width: code_size + 1,
            issued: clear_code + 1,
        }
    }

    fn advance(&mut self, code: u16) {
        if code == self.clear_code {
            self.issued = self.clear_code + 1;
            self.width = self.min_width;
        } else {
            // Saturating: a segment can legally run far past 2^16 codes once
            // the width is pinned at the cap, and the count no longer matters.
            self.issued = self.issued.saturating_add(1);
            if self.issued >= 1 << self.width && self.width < MAX_CODE_WIDTH {
                self.width += 1;
            }
        }
    }
}

/// LSB-first packer of variable-width LZW codes.
#[derive(Debug)]
pub struct CodePacker {
    schedule: WidthSchedule,
    buffer: u32,
    bits_in_buffer: u8,
    output: Vec<u8>,
}

impl CodePacker {
    /// Create a packer for the given initial code size (2-8).
    pub fn new(code_size: u8) -> Self {
        Self {
            schedule: WidthSchedule::new(code_size),
            buffer: 0,
            bits_in_buffer: 0,
            output: Vec::new(),
        }
    }

    /// Append one code at the current width, emitting completed bytes.
    pub fn pack(&mut self, code: u16) {
        self.buffer |= (code as u32) << self.bits_in_buffer;
        self.bits_in_buffer += self.schedule.width;

        while self.bits_in_buffer >= 8 {
            self.output.push(self.buffer as u8);
            self.buffer >>= 8;
            self.bits_in_buffer -= 8;
        }

        self.schedule.advance(code);
    }

    /// Current code width in bits.
    pub fn width(&self) -> u8 {
        self.schedule.width
    }

    /// Flush the zero-padded partial byte and return the packed bytes.
    pub fn finish(mut self) -> Vec<u8> {
        if self.bits_in_buffer > 0 {
            self.output.push(self.buffer as u8);
        }
        self.output
    }
}

/// Pull-based LSB-first unpacker of variable-width LZW codes.
///
/// Produces one code per [`next_code`](Self::next_code) call. Returns `None`
/// once fewer bits remain than the current width; the caller decides whether
/// that exhaustion is legitimate (an END code was already seen) or a
/// truncated stream.
#[derive(Debug)]
pub struct CodeUnpacker<'a> {
    data: &'a [u8],
    pos: usize,
    schedule: WidthSchedule,
    buffer: u32,
    bits_in_buffer: u8,
    bits_read: u64,
}

impl<'a> CodeUnpacker<'a> {
    /// Create an unpacker over packed bytes for the given code size (2-8).
    pub fn new(data: &'a [u8], code_size: u8) -> Self {
        Self {
            data,
            pos: 0,
            schedule: WidthSchedule::new(code_size),
            buffer: 0,
            bits_in_buffer: 0,
            bits_read: 0,
        }
    }

    /// Consume the next code, or `None` at clean bit exhaustion.
    pub fn next_code(&mut self) -> Option<u16> {
        let width = self.schedule.width;
        let remaining = (self.data.len() - self.pos) as u64 * 8 + self.bits_in_buffer as u64;
        if remaining < width as u64 {
            return None;
        }

        while self.bits_in_buffer < width {
            self.buffer |= (self.data[self.pos] as u32) << self.bits_in_buffer;
            self.pos += 1;
            self.bits_in_buffer += 8;
        }

        let code = (self.buffer & ((1u32 << width) - 1)) as u16;
        self.buffer >>= width;
        self.bits_in_buffer -= width;
        self.bits_read += width as u64;

        self.schedule.advance(code);
        Some(code)
    }

    /// Current code width in bits.
    pub fn width(&self) -> u8 {
        self.schedule.width
    }

    /// Total bits consumed so far.
    pub fn bits_read(&self) -> u64 {
        self.bits_read
    }
}
