//! In-memory image model: a canvas, a palette, and a sequence of frames.

use crate::color::ColorTable;
use crate::error::{GifError, Result};

/// Image-level settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageOptions {
    /// Bits per pixel index, 2 through 8. The global color table holds
    /// `2^bit_depth` entries.
    pub bit_depth: u8,
    /// Animation repetitions; 0 means loop forever.
    pub loop_count: u16,
}

impl Default for ImageOptions {
    fn default() -> Self {
        Self {
            bit_depth: 8,
            loop_count: 0,
        }
    }
}

/// Frame-level settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameOptions {
    /// Display duration in hundredths of a second.
    pub duration: u16,
    /// Palette index rendered as transparent, if any.
    pub transparent: Option<u8>,
    /// Palette overriding the global table for this frame only.
    pub local_palette: Option<ColorTable>,
}

impl Default for FrameOptions {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            transparent: None,
            local_palette: None,
        }
    }
}

impl FrameOptions {
    /// Options with the given duration and no transparency or local palette.
    pub fn with_duration(duration: u16) -> Self {
        Self {
            duration,
            ..Self::default()
        }
    }
}

/// Default frame duration in hundredths of a second.
pub const DEFAULT_DURATION: u16 = 10;

/// One animation frame: indexed pixels plus placement on the canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Left offset on the canvas.
    pub left: u16,
    /// Top offset on the canvas.
    pub top: u16,
    /// Frame width in pixels.
    pub width: u16,
    /// Frame height in pixels.
    pub height: u16,
    /// Row-major palette indices, `width * height` of them.
    pub pixels: Vec<u8>,
    /// Per-frame settings.
    pub options: FrameOptions,
}

impl Frame {
    /// Frame placed at the canvas origin.
    pub fn new(width: u16, height: u16, pixels: Vec<u8>, options: FrameOptions) -> Result<Self> {
        Self::at(0, 0, width, height, pixels, options)
    }

    /// Frame placed at an offset on the canvas.
    pub fn at(
        left: u16,
        top: u16,
        width: u16,
        height: u16,
        pixels: Vec<u8>,
        options: FrameOptions,
    ) -> Result<Self> {
        let expected = width as usize * height as usize;
        if pixels.len() != expected {
            return Err(GifError::FrameMismatch {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            left,
            top,
            width,
            height,
            pixels,
            options,
        })
    }

    /// Palette governing this frame's pixel indices.
    pub fn palette<'a>(&'a self, global: &'a ColorTable) -> &'a ColorTable {
        self.options.local_palette.as_ref().unwrap_or(global)
    }
}

/// An animated image: canvas dimensions, global palette, and frames.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    width: u16,
    height: u16,
    options: ImageOptions,
    palette: ColorTable,
    frames: Vec<Frame>,
    comments: Vec<String>,
}

impl Image {
    /// New empty image with a grayscale default palette.
    pub fn new(width: u16, height: u16, options: ImageOptions) -> Result<Self> {
        if !(2..=8).contains(&options.bit_depth) {
            return Err(GifError::InvalidBitDepth(options.bit_depth));
        }
        let palette = ColorTable::grayscale(options.bit_depth)?;
        Ok(Self {
            width,
            height,
            options,
            palette,
            frames: Vec::new(),
            comments: Vec::new(),
        })
    }

    /// Canvas width in pixels.
    pub fn width(&self) -> u16 {
        self.width
    }

    /// Canvas height in pixels.
    pub fn height(&self) -> u16 {
        self.height
    }

    /// Image-level settings.
    pub fn options(&self) -> &ImageOptions {
        &self.options
    }

    /// Global color table, sized `2^bit_depth`.
    pub fn palette(&self) -> &ColorTable {
        &self.palette
    }

    /// Replace the global palette, padding it to `2^bit_depth` entries.
    pub fn set_palette(&mut self, palette: ColorTable) -> Result<()> {
        self.palette = palette.padded_to_bits(self.options.bit_depth)?;
        Ok(())
    }

    /// Replace the animation loop count; 0 means loop forever.
    pub fn set_loop_count(&mut self, loop_count: u16) {
        self.options.loop_count = loop_count;
    }

    /// Frames in display order.
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Comments attached to the image, in stream order. Filled from comment
    /// extensions on decode; written back out as comment extensions on
    /// encode.
    pub fn comments(&self) -> &[String] {
        &self.comments
    }

    /// Record a comment to be carried alongside the image.
    pub fn push_comment(&mut self, comment: String) {
        self.comments.push(comment);
    }

    /// Append a full-canvas frame from raw pixel indices.
    pub fn add_frame(&mut self, pixels: Vec<u8>, options: FrameOptions) -> Result<()> {
        let frame = Frame::new(self.width, self.height, pixels, options)?;
        self.push_frame(frame)
    }

    /// Append a frame, checking it fits on the canvas.
    pub fn push_frame(&mut self, frame: Frame) -> Result<()> {
        let right = frame.left as u32 + frame.width as u32;
        let bottom = frame.top as u32 + frame.height as u32;
        if right > self.width as u32 || bottom > self.height as u32 {
            return Err(GifError::invalid_block(format!(
                "frame {}x{} at ({}, {}) exceeds {}x{} canvas",
                frame.width, frame.height, frame.left, frame.top, self.width, self.height
            )));
        }
        self.frames.push(frame);
        Ok(())
    }
}
