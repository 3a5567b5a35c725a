//! LZW encoder (compression).

use crate::bitstream::CodePacker;
use crate::error::{LzwError, Result};
use crate::table::CodeTable;

/// LZW encoder for palette-index streams.
#[derive(Debug)]
pub struct LzwEncoder {
    table: CodeTable,
}

impl LzwEncoder {
    /// Create an encoder for the given code size (2-8, the palette bit depth).
    pub fn new(code_size: u8) -> Result<Self> {
        let table = CodeTable::new(code_size)?;
        Ok(Self { table })
    }

    /// Compress a symbol sequence into a packed byte stream.
    ///
    /// The output carries, in order, a CLEAR code, one code per matched
    /// table entry, and a terminal END code. One table entry is inserted per
    /// emitted code; the insertion that fills the table to 4096 entries
    /// triggers an inline CLEAR and a full reset of table, width, and
    /// counters. Symbols outside `[0, 2^code_size)` are rejected before any
    /// output is produced.
    pub fn encode(&mut self, symbols: &[u8]) -> Result<Vec<u8>> {
        let alphabet = self.table.alphabet_size();
        if let Some(&symbol) = symbols.iter().find(|&&s| s as u16 >= alphabet) {
            return Err(LzwError::SymbolOutOfRange { symbol, alphabet });
        }

        self.table.reset();
        let mut packer = CodePacker::new(self.table.code_size());
        packer.pack(self.table.clear_code());

        if symbols.is_empty() {
            packer.pack(self.table.end_code());
            return Ok(packer.finish());
        }

        let mut current = vec![symbols[0]];
        for &symbol in &symbols[1..] {
            let mut candidate = current.clone();
            candidate.push(symbol);

            if self.table.find(&candidate).is_some() {
                current = candidate;
            } else {
                let code = self
                    .table
                    .find(&current)
                    .expect("current match is always a table entry");
                packer.pack(code);

                self.table.insert(candidate);
                if self.table.is_full() {
                    packer.pack(self.table.clear_code());
                    self.table.reset();
                }

                current.clear();
                current.push(symbol);
            }
        }

        let code = self
            .table
            .find(&current)
            .expect("final match is always a table entry");
        packer.pack(code);
        packer.pack(self.table.end_code());

        Ok(packer.finish())
    }
}
