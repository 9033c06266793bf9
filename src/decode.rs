use std::fs::File;
use std::io::{BufReader, Read};
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::raster::{ColorLayout, Raster};

#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("{}: cannot open file: {source}", path.display())]
    FileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{}: failed to decode PNG: {source}", path.display())]
    Decode {
        path: PathBuf,
        source: png::DecodingError,
    },

    #[error("{}: unsupported color layout: {color_type:?} at {bit_depth:?} bit depth (only 8-bit RGB and RGBA are supported)", path.display())]
    UnsupportedLayout {
        path: PathBuf,
        color_type: png::ColorType,
        bit_depth: png::BitDepth,
    },
}

impl DecodeError {
    fn decode(path: &Path, source: png::DecodingError) -> Self {
        DecodeError::Decode {
            path: path.to_owned(),
            source,
        }
    }
}

/// Turns an image file into a decoded [`Raster`]. The comparison side of the
/// crate only ever sees rasters, so it can be exercised with synthetic
/// buffers instead of real files.
pub trait ImageDecoder {
    fn decode(&self, path: &Path) -> Result<Raster, DecodeError>;
}

/// Decodes PNG files through the `png` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct PngFileDecoder;

impl ImageDecoder for PngFileDecoder {
    fn decode(&self, path: &Path) -> Result<Raster, DecodeError> {
        let file = File::open(path).map_err(|source| DecodeError::FileOpen {
            path: path.to_owned(),
            source,
        })?;
        decode_png(BufReader::new(file), path)
    }
}

fn decode_png<R: Read>(reader: R, path: &Path) -> Result<Raster, DecodeError> {
    let mut decoder = png::Decoder::new(reader);
    // No implicit 16-bit strip or palette expansion; those sources are
    // reported as unsupported instead of being converted.
    decoder.set_transformations(png::Transformations::IDENTITY);

    let mut reader = decoder
        .read_info()
        .map_err(|source| DecodeError::decode(path, source))?;

    let info = reader.info();
    let (width, height) = (info.width, info.height);
    let (color_type, bit_depth) = (info.color_type, info.bit_depth);

    let layout = match (color_type, bit_depth) {
        (png::ColorType::Rgb, png::BitDepth::Eight) => ColorLayout::Rgb,
        (png::ColorType::Rgba, png::BitDepth::Eight) => ColorLayout::Rgba,
        _ => {
            return Err(DecodeError::UnsupportedLayout {
                path: path.to_owned(),
                color_type,
                bit_depth,
            })
        }
    };

    let mut buf = vec![0; reader.output_buffer_size()];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|source| DecodeError::decode(path, source))?;
    buf.truncate(frame.buffer_size());

    Ok(Raster::new(width, height, layout, buf))
}
