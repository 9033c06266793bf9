use thiserror::Error;

use crate::raster::{ColorLayout, Raster};

/// Result of a pixel scan: how many pixels were bit-identical out of the
/// total `width * height`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ComparisonResult {
    pub matched_pixels: u64,
    pub total_pixels: u64,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CompareError {
    #[error("image size mismatch: {a_width}x{a_height} vs {b_width}x{b_height}")]
    DimensionMismatch {
        a_width: u32,
        a_height: u32,
        b_width: u32,
        b_height: u32,
    },

    #[error("image color layout mismatch: {a:?} vs {b:?}")]
    LayoutMismatch { a: ColorLayout, b: ColorLayout },
}

/// Counts the pixels whose channel values are identical in both rasters.
///
/// Fails when the rasters differ in dimensions or color layout. A pixel
/// matches only if every channel is bit-identical; for RGBA the alpha
/// channel is compared exactly like the color channels.
pub fn compare(a: &Raster, b: &Raster) -> Result<ComparisonResult, CompareError> {
    if a.width() != b.width() || a.height() != b.height() {
        return Err(CompareError::DimensionMismatch {
            a_width: a.width(),
            a_height: a.height(),
            b_width: b.width(),
            b_height: b.height(),
        });
    }
    if a.layout() != b.layout() {
        return Err(CompareError::LayoutMismatch {
            a: a.layout(),
            b: b.layout(),
        });
    }

    // Layouts agree, so the channel count is fixed for the whole scan.
    let channels = a.layout().channels();
    let mut matched: u64 = 0;
    for (row_a, row_b) in a.rows().zip(b.rows()) {
        for (px_a, px_b) in row_a.chunks_exact(channels).zip(row_b.chunks_exact(channels)) {
            if px_a == px_b {
                matched += 1;
            }
        }
    }

    Ok(ComparisonResult {
        matched_pixels: matched,
        total_pixels: u64::from(a.width()) * u64::from(a.height()),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn solid(width: u32, height: u32, layout: ColorLayout, pixel: &[u8]) -> Raster {
        assert_eq!(pixel.len(), layout.channels());
        let data = pixel.repeat(width as usize * height as usize);
        Raster::new(width, height, layout, data)
    }

    #[test]
    fn identical_rasters_fully_match() {
        let a = solid(4, 4, ColorLayout::Rgb, &[0, 0, 0]);
        let result = compare(&a, &a).unwrap();
        assert_eq!(result.matched_pixels, 16);
        assert_eq!(result.total_pixels, 16);
    }

    #[test]
    fn single_channel_difference_fails_whole_pixel() {
        let a = solid(1, 1, ColorLayout::Rgb, &[10, 20, 30]);
        let b = solid(1, 1, ColorLayout::Rgb, &[10, 20, 31]);
        let result = compare(&a, &b).unwrap();
        assert_eq!(result.matched_pixels, 0);
        assert_eq!(result.total_pixels, 1);
    }

    #[test]
    fn alpha_participates_in_equality() {
        let a = solid(3, 3, ColorLayout::Rgba, &[1, 2, 3, 255]);
        let mut data = a.rows().flatten().copied().collect::<Vec<u8>>();
        // Flip one alpha byte: pixel (1, 1), channel 3.
        data[(3 + 1) * 4 + 3] = 254;
        let b = Raster::new(3, 3, ColorLayout::Rgba, data);

        let result = compare(&a, &b).unwrap();
        assert_eq!(result.matched_pixels, result.total_pixels - 1);
    }

    #[test]
    fn matched_count_is_commutative() {
        let a = solid(2, 2, ColorLayout::Rgb, &[5, 5, 5]);
        let b = Raster::new(
            2,
            2,
            ColorLayout::Rgb,
            vec![5, 5, 5, 9, 9, 9, 5, 5, 5, 5, 5, 5],
        );
        let ab = compare(&a, &b).unwrap();
        let ba = compare(&b, &a).unwrap();
        assert_eq!(ab.matched_pixels, ba.matched_pixels);
        assert_eq!(ab.matched_pixels, 3);
        assert!(ab.matched_pixels <= ab.total_pixels);
    }

    #[test]
    fn dimension_mismatch_is_reported() {
        let a = solid(2, 2, ColorLayout::Rgb, &[0, 0, 0]);
        let b = solid(3, 2, ColorLayout::Rgb, &[0, 0, 0]);
        assert_eq!(
            compare(&a, &b),
            Err(CompareError::DimensionMismatch {
                a_width: 2,
                a_height: 2,
                b_width: 3,
                b_height: 2,
            })
        );
    }

    #[test]
    fn layout_mismatch_is_reported() {
        let a = solid(2, 2, ColorLayout::Rgb, &[0, 0, 0]);
        let b = solid(2, 2, ColorLayout::Rgba, &[0, 0, 0, 255]);
        assert_eq!(
            compare(&a, &b),
            Err(CompareError::LayoutMismatch {
                a: ColorLayout::Rgb,
                b: ColorLayout::Rgba,
            })
        );
    }
}
