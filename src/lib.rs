//! Pixel-exact comparison of PNG images.
//!
//! Decoding turns a file into a [`Raster`]; [`compare`] validates that two
//! rasters share dimensions and color layout, then counts the pixels whose
//! channel values are bit-identical.

mod compare;
mod decode;
mod raster;

pub use compare::{compare, CompareError, ComparisonResult};
pub use decode::{DecodeError, ImageDecoder, PngFileDecoder};
pub use raster::{ColorLayout, Raster};
