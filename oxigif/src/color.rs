//! Color tables: ordered RGB palettes with power-of-two lengths.

use crate::error::{GifError, Result};
use std::io::{Read, Write};

/// One palette entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Rgb {
    /// Black, used for padding unused palette slots.
    pub const BLACK: Self = Self { r: 0, g: 0, b: 0 };

    /// Create an entry from channel values.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// An ordered sequence of RGB triples indexed by pixel value.
///
/// The length is always a power of two in `[2, 256]`; on the wire the table
/// is a flat run of 3 bytes per entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ColorTable {
    colors: Vec<Rgb>,
}

impl ColorTable {
    /// Build a table from colors, padding with black up to the next power
    /// of two.
    ///
    /// Rejects empty input and more than 256 colors.
    pub fn new(colors: Vec<Rgb>) -> Result<Self> {
        if colors.is_empty() {
            return Err(GifError::invalid_color_table("no colors supplied"));
        }
        if colors.len() > 256 {
            return Err(GifError::invalid_color_table(format!(
                "{} colors exceed the 256-entry limit",
                colors.len()
            )));
        }
        let mut colors = colors;
        let target = colors.len().next_power_of_two().max(2);
        colors.resize(target, Rgb::BLACK);
        Ok(Self { colors })
    }

    /// Build a table from colors whose count is already a power of two.
    ///
    /// Unlike [`new`](Self::new), a length that is not a power of two in
    /// `[2, 256]` is rejected rather than padded.
    pub fn exact(colors: Vec<Rgb>) -> Result<Self> {
        let len = colors.len();
        if !(2..=256).contains(&len) || !len.is_power_of_two() {
            return Err(GifError::invalid_color_table(format!(
                "{len} entries is not a power of two in [2, 256]"
            )));
        }
        Ok(Self { colors })
    }

    /// An evenly spaced gray ramp with `2^bits` entries, darkest first.
    pub fn grayscale(bits: u8) -> Result<Self> {
        if !(1..=8).contains(&bits) {
            return Err(GifError::InvalidBitDepth(bits));
        }
        let entries = 1usize << bits;
        let last = (entries - 1) as u32;
        let colors = (0..entries)
            .map(|i| {
                let v = (i as u32 * 255 / last) as u8;
                Rgb::new(v, v, v)
            })
            .collect();
        Ok(Self { colors })
    }

    /// A fixed 256-entry table sampling `r * g * b` evenly spaced colors.
    ///
    /// Each level count must be at least 2 and the product must not exceed
    /// 256; the trailing unused entries are black. The color bound to index
    /// `ri * g * b + gi * b + bi` has channels `ri/(r-1)`, `gi/(g-1)`,
    /// `bi/(b-1)` scaled to 255.
    pub fn from_levels(levels: [u8; 3]) -> Result<Self> {
        if levels.iter().any(|&l| l < 2) {
            return Err(GifError::invalid_color_table(
                "each channel needs at least 2 levels",
            ));
        }
        let product = levels.iter().map(|&l| l as usize).product::<usize>();
        if product > 256 {
            return Err(GifError::invalid_color_table(format!(
                "level product {product} exceeds 256"
            )));
        }

        let scale = |value: u8, level: u8| (value as u32 * 255 / (level as u32 - 1)) as u8;
        let mut colors = Vec::with_capacity(256);
        for r in 0..levels[0] {
            for g in 0..levels[1] {
                for b in 0..levels[2] {
                    colors.push(Rgb::new(
                        scale(r, levels[0]),
                        scale(g, levels[1]),
                        scale(b, levels[2]),
                    ));
                }
            }
        }
        colors.resize(256, Rgb::BLACK);
        Ok(Self { colors })
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.colors.len()
    }

    /// Always false: tables have at least 2 entries.
    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// log2 of the entry count, the palette bit depth.
    pub fn bits(&self) -> u8 {
        self.colors.len().trailing_zeros() as u8
    }

    /// The entries in index order.
    pub fn colors(&self) -> &[Rgb] {
        &self.colors
    }

    /// A copy padded with black to `2^bits` entries.
    ///
    /// Rejects tables already longer than the target.
    pub fn padded_to_bits(&self, bits: u8) -> Result<Self> {
        let target = 1usize << bits;
        if self.colors.len() > target {
            return Err(GifError::invalid_color_table(format!(
                "{} entries do not fit a {}-bit palette",
                self.colors.len(),
                bits
            )));
        }
        let mut colors = self.colors.clone();
        colors.resize(target, Rgb::BLACK);
        Ok(Self { colors })
    }

    /// Write the table as a flat 3-bytes-per-entry run.
    pub fn write<W: Write>(&self, writer: &mut W) -> Result<()> {
        for color in &self.colors {
            writer.write_all(&[color.r, color.g, color.b])?;
        }
        Ok(())
    }

    /// Read a table of `entries` RGB triples.
    pub fn read<R: Read>(reader: &mut R, entries: usize) -> Result<Self> {
        let mut raw = vec![0u8; entries * 3];
        reader.read_exact(&mut raw)?;
        let colors = raw
            .chunks_exact(3)
            .map(|c| Rgb::new(c[0], c[1], c[2]))
            .collect();
        Self::exact(colors)
    }
}
