//! Raster codec capability and its `image` crate implementation.

use std::{borrow::Cow, fmt, io::Cursor};

use image::{DynamicImage, ImageError, ImageFormat, ImageReader, imageops::FilterType};
use log::debug;

use super::RasterError;
use crate::geometry::PixelSize;

/// Output formats an embedded image can be re-encoded to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RasterFormat {
    Png,
    Jpeg,
    Gif,
    Bmp,
    Tiff,
    WebP,
}

impl RasterFormat {
    /// Returns the MIME type used in `data:` URIs.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Bmp => "image/bmp",
            Self::Tiff => "image/tiff",
            Self::WebP => "image/webp",
        }
    }

    /// Maps a format detected by the `image` crate, if Easel can re-encode it.
    pub fn from_image_format(format: ImageFormat) -> Option<Self> {
        let format = match format {
            ImageFormat::Png => Self::Png,
            ImageFormat::Jpeg => Self::Jpeg,
            ImageFormat::Gif => Self::Gif,
            ImageFormat::Bmp => Self::Bmp,
            ImageFormat::Tiff => Self::Tiff,
            ImageFormat::WebP => Self::WebP,
            _ => return None,
        };
        Some(format)
    }

    fn to_image_format(self) -> ImageFormat {
        match self {
            Self::Png => ImageFormat::Png,
            Self::Jpeg => ImageFormat::Jpeg,
            Self::Gif => ImageFormat::Gif,
            Self::Bmp => ImageFormat::Bmp,
            Self::Tiff => ImageFormat::Tiff,
            Self::WebP => ImageFormat::WebP,
        }
    }
}

impl fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Png => "PNG",
            Self::Jpeg => "JPEG",
            Self::Gif => "GIF",
            Self::Bmp => "BMP",
            Self::Tiff => "TIFF",
            Self::WebP => "WebP",
        };
        f.write_str(name)
    }
}

/// A decoded image together with the format it was stored in.
#[derive(Debug, Clone)]
pub struct DecodedImage {
    image: DynamicImage,
    format: Option<RasterFormat>,
}

impl DecodedImage {
    pub fn new(image: DynamicImage, format: Option<RasterFormat>) -> Self {
        Self { image, format }
    }

    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// Returns the detected source format, `None` if it was not detected or
    /// cannot be re-encoded.
    pub fn format(&self) -> Option<RasterFormat> {
        self.format
    }

    pub fn dimensions(&self) -> PixelSize {
        PixelSize::new(self.image.width(), self.image.height())
    }

    pub fn into_image(self) -> DynamicImage {
        self.image
    }
}

/// The raster operations Easel delegates to an image library.
pub trait RasterCodec: fmt::Debug {
    /// Decodes encoded image bytes, detecting the format from the content.
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, RasterError>;

    /// Resamples `image` to exactly `size` with a high-quality filter.
    fn resize(&self, image: &DynamicImage, size: PixelSize) -> DynamicImage;

    /// Encodes `image` in `format`.
    fn encode(&self, image: &DynamicImage, format: RasterFormat) -> Result<Vec<u8>, RasterError>;
}

/// [`RasterCodec`] backed by the `image` crate, resampling with Lanczos3.
#[derive(Debug, Clone, Copy, Default)]
pub struct ImageCodec;

impl ImageCodec {
    pub fn new() -> Self {
        Self
    }
}

impl RasterCodec for ImageCodec {
    fn decode(&self, bytes: &[u8]) -> Result<DecodedImage, RasterError> {
        let reader = ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|err| RasterError::Decode(ImageError::IoError(err)))?;
        let detected = reader.format();
        let image = reader.decode().map_err(RasterError::Decode)?;

        debug!(
            detected_format:? = detected,
            width = image.width(),
            height = image.height();
            "Image decoded"
        );

        Ok(DecodedImage::new(
            image,
            detected.and_then(RasterFormat::from_image_format),
        ))
    }

    fn resize(&self, image: &DynamicImage, size: PixelSize) -> DynamicImage {
        debug!(
            from_width = image.width(),
            from_height = image.height(),
            to_width = size.width(),
            to_height = size.height();
            "Resizing image"
        );
        image.resize_exact(size.width(), size.height(), FilterType::Lanczos3)
    }

    fn encode(&self, image: &DynamicImage, format: RasterFormat) -> Result<Vec<u8>, RasterError> {
        let mut bytes = Vec::new();
        encodable(image, format)
            .write_to(&mut Cursor::new(&mut bytes), format.to_image_format())
            .map_err(|source| RasterError::Encode { format, source })?;

        debug!(format:% = format, bytes = bytes.len(); "Image encoded");
        Ok(bytes)
    }
}

/// Converts `image` to a pixel layout the target encoder accepts.
///
/// JPEG has no alpha channel and GIF frames are RGBA. PNG accepts everything
/// except floating-point pixels; the remaining formats take 8-bit RGB or RGBA.
fn encodable(image: &DynamicImage, format: RasterFormat) -> Cow<'_, DynamicImage> {
    match (format, image) {
        (RasterFormat::Jpeg, DynamicImage::ImageRgb8(_) | DynamicImage::ImageLuma8(_)) => {
            Cow::Borrowed(image)
        }
        (RasterFormat::Jpeg, _) => Cow::Owned(DynamicImage::ImageRgb8(image.to_rgb8())),
        (RasterFormat::Png, DynamicImage::ImageRgb32F(_) | DynamicImage::ImageRgba32F(_)) => {
            Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8()))
        }
        (RasterFormat::Png, _) => Cow::Borrowed(image),
        (RasterFormat::Gif, DynamicImage::ImageRgba8(_)) => Cow::Borrowed(image),
        (RasterFormat::Gif, _) => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
        (_, DynamicImage::ImageRgb8(_) | DynamicImage::ImageRgba8(_)) => Cow::Borrowed(image),
        _ => Cow::Owned(DynamicImage::ImageRgba8(image.to_rgba8())),
    }
}
