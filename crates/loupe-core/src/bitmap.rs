use std::path::Path;

use image::{DynamicImage, RgbaImage};

use crate::error::{LoupeError, Result};

/// Integer pixel dimensions of a bitmap or LOD tier.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelSize {
    pub width: u32,
    pub height: u32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn pixel_count(&self) -> u64 {
        self.width as u64 * self.height as u64
    }
}

/// Channel ordering of a raw source buffer. Anything BGR-ordered is swapped
/// to RGB at ingestion, never downstream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ChannelLayout {
    Rgb,
    Rgba,
    Bgr,
    Bgra,
}

impl ChannelLayout {
    pub fn channels(&self) -> usize {
        match self {
            ChannelLayout::Rgb | ChannelLayout::Bgr => 3,
            ChannelLayout::Rgba | ChannelLayout::Bgra => 4,
        }
    }

    fn is_bgr(&self) -> bool {
        matches!(self, ChannelLayout::Bgr | ChannelLayout::Bgra)
    }
}

/// An 8-bit RGBA pixel buffer.
///
/// All sources are normalized to this layout when constructed, so the
/// transform, LOD generation, and texture upload never see anything else.
#[derive(Clone, Debug)]
pub struct Bitmap {
    data: RgbaImage,
}

impl Bitmap {
    /// Build a bitmap from a raw interleaved buffer in the given layout.
    pub fn from_raw(data: Vec<u8>, width: u32, height: u32, layout: ChannelLayout) -> Result<Self> {
        if width == 0 || height == 0 {
            return Err(LoupeError::InvalidDimensions { width, height });
        }

        let channels = layout.channels();
        let expected = width as usize * height as usize * channels;
        if data.len() != expected {
            return Err(LoupeError::BufferSizeMismatch {
                expected,
                got: data.len(),
            });
        }

        let mut rgba = Vec::with_capacity(width as usize * height as usize * 4);
        for px in data.chunks_exact(channels) {
            let (r, b) = if layout.is_bgr() {
                (px[2], px[0])
            } else {
                (px[0], px[2])
            };
            let a = if channels == 4 { px[3] } else { u8::MAX };
            rgba.extend_from_slice(&[r, px[1], b, a]);
        }

        let img = RgbaImage::from_raw(width, height, rgba)
            .expect("buffer size matches dimensions");
        Ok(Self { data: img })
    }

    /// Normalize a decoded image into an RGBA bitmap.
    pub fn from_dynamic(img: DynamicImage) -> Result<Self> {
        let (width, height) = (img.width(), img.height());
        if width == 0 || height == 0 {
            return Err(LoupeError::InvalidDimensions { width, height });
        }
        Ok(Self {
            data: img.into_rgba8(),
        })
    }

    /// Decode an image file into a bitmap.
    pub fn open(path: &Path) -> Result<Self> {
        Self::from_dynamic(image::open(path)?)
    }

    pub(crate) fn from_rgba(data: RgbaImage) -> Self {
        Self { data }
    }

    pub fn width(&self) -> u32 {
        self.data.width()
    }

    pub fn height(&self) -> u32 {
        self.data.height()
    }

    pub fn size(&self) -> PixelSize {
        PixelSize::new(self.width(), self.height())
    }

    pub fn pixel_count(&self) -> u64 {
        self.size().pixel_count()
    }

    pub fn as_rgba(&self) -> &RgbaImage {
        &self.data
    }
}
