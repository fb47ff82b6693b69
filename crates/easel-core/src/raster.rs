//! Raster image support for embedded images.
//!
//! This module provides the capability interface Easel needs from a raster
//! image library, an implementation backed by the `image` crate, and the
//! `data:` URI encoding used to inline image bytes into SVG.
//!
//! # Overview
//!
//! - [`RasterCodec`] - Decode, resize and encode capability
//! - [`ImageCodec`] - [`RasterCodec`] implemented with the `image` crate
//! - [`RasterFormat`] - Encodable output formats and their MIME types
//! - [`ResizeOptions`] - Output dimension policy for in-memory images
//! - [`DataUri`] - Base64 `data:` URI
//!
//! # Example
//!
//! ```
//! # use easel_core::geometry::PixelSize;
//! # use easel_core::raster::ResizeOptions;
//! let options = ResizeOptions::new(true, 1.0);
//! let output = options
//!     .output_dimensions(PixelSize::new(200, 100), PixelSize::new(100, 100))
//!     .unwrap();
//! assert_eq!(output, PixelSize::new(100, 50));
//! ```

mod codec;
mod data_uri;

pub use codec::{DecodedImage, ImageCodec, RasterCodec, RasterFormat};
pub use data_uri::{DataUri, mime_type_for_path};

pub use image::DynamicImage;

use thiserror::Error;

use crate::geometry::PixelSize;

/// Errors raised while decoding, resizing or encoding raster images.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("failed to decode image: {0}")]
    Decode(#[source] image::ImageError),

    #[error("failed to encode image as {format}: {source}")]
    Encode {
        format: RasterFormat,
        #[source]
        source: image::ImageError,
    },

    #[error("source image has no pixels")]
    EmptyImage,

    #[error("resized image would be {0}, which has no pixels")]
    EmptyDimensions(PixelSize),

    #[error("quality factor must be a positive finite number, got {0}")]
    InvalidQualityFactor(f32),
}

/// How an in-memory image is resized before it is embedded.
///
/// With `preserve_aspect`, the image is scaled uniformly by the largest
/// factor that fits it inside the target, then by `quality_factor`. Without
/// it, each axis is set to `quality_factor` times the target dimension.
///
/// `quality_factor` trades embedded size for resolution: values above 1
/// upscale, values below 1 downscale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResizeOptions {
    pub preserve_aspect: bool,
    pub quality_factor: f32,
}

impl ResizeOptions {
    pub fn new(preserve_aspect: bool, quality_factor: f32) -> Self {
        Self {
            preserve_aspect,
            quality_factor,
        }
    }

    /// Computes the output dimensions for resizing `source` towards `target`.
    ///
    /// # Errors
    ///
    /// - [`RasterError::InvalidQualityFactor`] if the quality factor is not a
    ///   positive finite number
    /// - [`RasterError::EmptyImage`] if `source` has a zero dimension
    /// - [`RasterError::EmptyDimensions`] if either output dimension rounds
    ///   to zero
    pub fn output_dimensions(
        &self,
        source: PixelSize,
        target: PixelSize,
    ) -> Result<PixelSize, RasterError> {
        let quality = f64::from(self.quality_factor);
        if !quality.is_finite() || quality <= 0.0 {
            return Err(RasterError::InvalidQualityFactor(self.quality_factor));
        }

        if source.is_empty() {
            return Err(RasterError::EmptyImage);
        }

        let output = if self.preserve_aspect {
            let scale_w = f64::from(target.width()) / f64::from(source.width());
            let scale_h = f64::from(target.height()) / f64::from(source.height());
            let scale = scale_w.min(scale_h);

            PixelSize::new(
                scale_dimension(source.width(), quality * scale),
                scale_dimension(source.height(), quality * scale),
            )
        } else {
            PixelSize::new(
                scale_dimension(target.width(), quality),
                scale_dimension(target.height(), quality),
            )
        };

        if output.is_empty() {
            return Err(RasterError::EmptyDimensions(output));
        }
        Ok(output)
    }
}

impl Default for ResizeOptions {
    fn default() -> Self {
        Self {
            preserve_aspect: false,
            quality_factor: 1.0,
        }
    }
}

fn scale_dimension(dimension: u32, factor: f64) -> u32 {
    (f64::from(dimension) * factor).round().min(f64::from(u32::MAX)) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preserve_aspect_fits_inside_target() {
        let options = ResizeOptions::new(true, 1.0);
        let output = options
            .output_dimensions(PixelSize::new(200, 100), PixelSize::new(100, 100))
            .unwrap();
        assert_eq!(output, PixelSize::new(100, 50));
    }

    #[test]
    fn test_preserve_aspect_applies_quality_factor() {
        let options = ResizeOptions::new(true, 3.0);
        let output = options
            .output_dimensions(PixelSize::new(400, 200), PixelSize::new(100, 100))
            .unwrap();
        assert_eq!(output, PixelSize::new(300, 150));
    }

    #[test]
    fn test_preserve_aspect_can_upscale() {
        let options = ResizeOptions::new(true, 1.0);
        let output = options
            .output_dimensions(PixelSize::new(10, 20), PixelSize::new(100, 100))
            .unwrap();
        assert_eq!(output, PixelSize::new(50, 100));
    }

    #[test]
    fn test_exact_ignores_source_aspect() {
        let options = ResizeOptions::new(false, 2.0);
        let output = options
            .output_dimensions(PixelSize::new(640, 480), PixelSize::new(100, 50))
            .unwrap();
        assert_eq!(output, PixelSize::new(200, 100));
    }

    #[test]
    fn test_output_dimensions_round_to_nearest() {
        let options = ResizeOptions::new(false, 0.5);
        let output = options
            .output_dimensions(PixelSize::new(1, 1), PixelSize::new(3, 5))
            .unwrap();
        // 1.5 and 2.5 round away from zero
        assert_eq!(output, PixelSize::new(2, 3));
    }

    #[test]
    fn test_output_dimensions_rejects_zero_output() {
        let options = ResizeOptions::new(false, 0.1);
        let err = options
            .output_dimensions(PixelSize::new(10, 10), PixelSize::new(2, 100))
            .unwrap_err();
        assert!(matches!(err, RasterError::EmptyDimensions(size) if size == PixelSize::new(0, 10)));
    }

    #[test]
    fn test_output_dimensions_rejects_empty_source() {
        for preserve_aspect in [true, false] {
            let options = ResizeOptions::new(preserve_aspect, 1.0);
            for source in [PixelSize::new(0, 10), PixelSize::new(0, 0)] {
                let err = options
                    .output_dimensions(source, PixelSize::new(10, 10))
                    .unwrap_err();
                assert!(matches!(err, RasterError::EmptyImage));
            }
        }
    }

    #[test]
    fn test_output_dimensions_rejects_bad_quality_factor() {
        for quality in [0.0, -1.0, f32::NAN, f32::INFINITY] {
            let options = ResizeOptions::new(false, quality);
            let err = options
                .output_dimensions(PixelSize::new(10, 10), PixelSize::new(10, 10))
                .unwrap_err();
            assert!(matches!(err, RasterError::InvalidQualityFactor(_)));
        }
    }

    #[test]
    fn test_resize_options_default() {
        let options = ResizeOptions::default();
        assert!(!options.preserve_aspect);
        assert_eq!(options.quality_factor, 1.0);
    }
}
