//! LZW code table (dictionary) management.

use crate::error::{LzwError, Result};
use std::collections::HashMap;

/// Maximum number of table entries before a CLEAR must be issued.
pub const MAX_TABLE_SIZE: u16 = 1 << 12;

/// Bidirectional mapping between symbol strings and LZW codes.
///
/// Immediately after [`reset`](Self::reset) the table holds exactly the
/// single-symbol codes `[0, 2^code_size)` plus the CLEAR and END placeholder
/// codes, and grows by one entry per insertion until it reaches
/// [`MAX_TABLE_SIZE`] entries. The reverse (string -> code) index is only
/// maintained for encode-side insertions.
#[derive(Debug)]
pub struct CodeTable {
    /// Code -> symbol string.
    entries: Vec<Vec<u8>>,
    /// Symbol string -> code, for encoding.
    index: HashMap<Vec<u8>, u16>,
    code_size: u8,
    next_code: u16,
}

impl CodeTable {
    /// Create a table for the given initial code size.
    pub fn new(code_size: u8) -> Result<Self> {
        if !(2..=8).contains(&code_size) {
            return Err(LzwError::InvalidCodeSize(code_size));
        }

        let mut table = Self {
            entries: Vec::with_capacity(MAX_TABLE_SIZE as usize),
            index: HashMap::new(),
            code_size,
            next_code: 0,
        };
        table.reset();
        Ok(table)
    }

    /// Rebuild the initial state: single-symbol codes plus CLEAR and END.
    pub fn reset(&mut self) {
        self.entries.clear();
        self.index.clear();

        for symbol in 0..self.alphabet_size() {
            let string = vec![symbol as u8];
            self.entries.push(string.clone());
            self.index.insert(string, symbol);
        }

        // Placeholders so entry indices line up with code values.
        self.entries.push(Vec::new()); // CLEAR
        self.entries.push(Vec::new()); // END

        self.next_code = self.end_code() + 1;
    }

    /// Number of single-symbol codes (2^code_size).
    pub fn alphabet_size(&self) -> u16 {
        1 << self.code_size
    }

    /// The CLEAR code value.
    pub fn clear_code(&self) -> u16 {
        1 << self.code_size
    }

    /// The END code value.
    pub fn end_code(&self) -> u16 {
        self.clear_code() + 1
    }

    /// The initial code size the table was built for.
    pub fn code_size(&self) -> u8 {
        self.code_size
    }

    /// The code the next insertion will be bound to.
    pub fn next_code(&self) -> u16 {
        self.next_code
    }

    /// Whether the table has reached [`MAX_TABLE_SIZE`] entries.
    pub fn is_full(&self) -> bool {
        self.next_code >= MAX_TABLE_SIZE
    }

    /// Insert a string for encoding, maintaining the reverse index.
    ///
    /// The caller must ensure the table is not full.
    pub fn insert(&mut self, string: Vec<u8>) -> u16 {
        debug_assert!(!self.is_full());
        let code = self.next_code;
        self.entries.push(string.clone());
        self.index.insert(string, code);
        self.next_code += 1;
        code
    }

    /// Insert a string for decoding, skipping the reverse index.
    ///
    /// The caller must ensure the table is not full.
    pub fn insert_decode(&mut self, string: Vec<u8>) -> u16 {
        debug_assert!(!self.is_full());
        let code = self.next_code;
        self.entries.push(string);
        self.next_code += 1;
        code
    }

    /// The string bound to a code, if any.
    pub fn entry(&self, code: u16) -> Option<&[u8]> {
        self.entries.get(code as usize).map(|v| v.as_slice())
    }

    /// The code bound to a string, if any (encode side only).
    pub fn find(&self, string: &[u8]) -> Option<u16> {
        self.index.get(string).copied()
    }
}
