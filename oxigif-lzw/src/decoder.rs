//! LZW decoder (decompression).

use crate::bitstream::CodeUnpacker;
use crate::error::{LzwError, Result};
use crate::table::CodeTable;

/// LZW decoder for packed GIF pixel streams.
#[derive(Debug)]
pub struct LzwDecoder {
    table: CodeTable,
}

impl LzwDecoder {
    /// Create a decoder for the given code size (2-8, from the wire).
    pub fn new(code_size: u8) -> Result<Self> {
        let table = CodeTable::new(code_size)?;
        Ok(Self { table })
    }

    /// Decompress a packed byte stream back into the symbol sequence.
    ///
    /// The table is rebuilt on every CLEAR. A code equal to the table's next
    /// available code is the "just defined" case: the encoder emitted a code
    /// for the string it had inserted one step earlier, so the entry is
    /// reconstructed as `last + first(last)`. Any other code beyond the
    /// table is a corrupt stream, as is bit exhaustion before an END code.
    pub fn decode(&mut self, data: &[u8]) -> Result<Vec<u8>> {
        self.table.reset();
        let mut unpacker = CodeUnpacker::new(data, self.table.code_size());

        let mut output = Vec::new();
        let mut last: Vec<u8> = Vec::new();

        loop {
            let code = match unpacker.next_code() {
                Some(code) => code,
                None => {
                    return Err(LzwError::UnexpectedEof {
                        bit_position: unpacker.bits_read(),
                    });
                }
            };

            if code == self.table.clear_code() {
                self.table.reset();
                last.clear();
                continue;
            }
            if code == self.table.end_code() {
                break;
            }

            if code == self.table.next_code() {
                // The encoder defined this code on the step that emitted it.
                if last.is_empty() {
                    return Err(LzwError::InvalidCode(code));
                }
                let mut entry = last.clone();
                entry.push(last[0]);
                self.table.insert_decode(entry.clone());
                output.extend_from_slice(&entry);
                last = entry;
            } else if code > self.table.next_code() {
                return Err(LzwError::InvalidCode(code));
            } else {
                let string = match self.table.entry(code) {
                    Some(string) if !string.is_empty() => string.to_vec(),
                    _ => return Err(LzwError::InvalidCode(code)),
                };
                output.extend_from_slice(&string);

                if !last.is_empty() && !self.table.is_full() {
                    let mut entry = last;
                    entry.push(string[0]);
                    self.table.insert_decode(entry);
                }
                last = string;
            }
        }

        Ok(output)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoder::LzwEncoder;

    #[test]
    fn test_decode_reference_bytes() {
        let mut decoder = LzwDecoder::new(2).unwrap();
        let symbols = decoder.decode(&[0x44, 0x02, 0x05]).unwrap();
        assert_eq!(symbols, vec![0, 1, 1, 0]);
    }

    #[test]
    fn test_decode_just_defined_code() {
        // 0,0,0 encodes as CLEAR, 0, 6, END where 6 is the entry the encoder
        // inserted on the same step it emitted it.
        let mut encoder = LzwEncoder::new(2).unwrap();
        let packed = encoder.encode(&[0, 0, 0]).unwrap();

        let mut decoder = LzwDecoder::new(2).unwrap();
        assert_eq!(decoder.decode(&packed).unwrap(), vec![0, 0, 0]);
    }

    #[test]
    fn test_decode_rejects_code_beyond_table() {
        // CLEAR(4) then 7: next available code is 6, so 7 is out of range.
        let mut packer = crate::bitstream::CodePacker::new(2);
        packer.pack(4);
        packer.pack(7);
        let packed = packer.finish();

        let mut decoder = LzwDecoder::new(2).unwrap();
        assert!(matches!(
            decoder.decode(&packed),
            Err(LzwError::InvalidCode(7))
        ));
    }

    #[test]
    fn test_decode_rejects_just_defined_without_prior_output() {
        // CLEAR(4) then 6: the "just defined" case needs a previous code.
        let mut packer = crate::bitstream::CodePacker::new(2);
        packer.pack(4);
        packer.pack(6);
        let packed = packer.finish();

        let mut decoder = LzwDecoder::new(2).unwrap();
        assert!(matches!(
            decoder.decode(&packed),
            Err(LzwError::InvalidCode(6))
        ));
    }

    #[test]
    fn test_decode_rejects_truncated_stream() {
        let mut encoder = LzwEncoder::new(4).unwrap();
        let symbols: Vec<u8> = (0..200).map(|i| (i % 16) as u8).collect();
        let packed = encoder.encode(&symbols).unwrap();

        let mut decoder = LzwDecoder::new(4).unwrap();
        assert!(matches!(
            decoder.decode(&packed[..packed.len() / 2]),
            Err(LzwError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_decode_long_deferred_clear_stream() {
        // An all-zero stream decodes as code 0 forever: the table saturates
        // at 4096 entries and the segment runs past 2^16 codes with no CLEAR
        // and no END, so the only valid outcome is an end-of-stream error.
        let mut decoder = LzwDecoder::new(8).unwrap();
        assert!(matches!(
            decoder.decode(&vec![0u8; 120_000]),
            Err(LzwError::UnexpectedEof { .. })
        ));
    }

    #[test]
    fn test_decode_survives_table_reset() {
        // Enough varied input at code size 8 to fill the table past 4096
        // entries and force an inline CLEAR.
        let mut seed: u32 = 0x2F6E2B1;
        let symbols: Vec<u8> = (0..60_000)
            .map(|_| {
                seed = seed.wrapping_mul(1664525).wrapping_add(1013904223);
                (seed >> 24) as u8
            })
            .collect();

        let mut encoder = LzwEncoder::new(8).unwrap();
        let packed = encoder.encode(&symbols).unwrap();

        let mut decoder = LzwDecoder::new(8).unwrap();
        assert_eq!(decoder.decode(&packed).unwrap(), symbols);
    }
}
