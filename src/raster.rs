/// Channel composition of a pixel. PNG color types outside these two
/// (palette, grayscale, 16-bit depth) are rejected at decode time and never
/// reach a `Raster`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColorLayout {
    Rgb,
    Rgba,
}

impl ColorLayout {
    /// Samples per pixel: 3 for RGB, 4 for RGBA.
    pub fn channels(self) -> usize {
        match self {
            ColorLayout::Rgb => 3,
            ColorLayout::Rgba => 4,
        }
    }
}

/// A decoded image: dimensions, channel layout and a row-major buffer of
/// 8-bit samples. Immutable once built.
#[derive(Debug, Clone)]
pub struct Raster {
    width: u32,
    height: u32,
    layout: ColorLayout,
    data: Vec<u8>,
}

impl Raster {
    /// Builds a raster from a row-major sample buffer.
    ///
    /// # Panics
    ///
    /// Panics if `data` does not hold exactly
    /// `width * height * layout.channels()` samples.
    pub fn new(width: u32, height: u32, layout: ColorLayout, data: Vec<u8>) -> Self {
        let expected = width as usize * height as usize * layout.channels();
        assert_eq!(
            data.len(),
            expected,
            "sample buffer length does not match {}x{} {:?}",
            width,
            height,
            layout
        );
        Raster {
            width,
            height,
            layout,
            data,
        }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn layout(&self) -> ColorLayout {
        self.layout
    }

    /// Samples in one row.
    pub fn stride(&self) -> usize {
        self.width as usize * self.layout.channels()
    }

    /// Iterates over the `height` rows, each `width * channels` samples long.
    pub fn rows(&self) -> impl Iterator<Item = &[u8]> {
        // max(1) keeps chunks_exact well-defined for degenerate zero-width
        // rasters, which hold no samples anyway.
        self.data.chunks_exact(self.stride().max(1))
    }
}
