//! Geometric primitives for placing elements on a canvas.
//!
//! # Overview
//!
//! - [`Point`] - A 2D coordinate in canvas user units
//! - [`Length`] - A number with an optional SVG unit suffix (`"1756px"`, `"10mm"`)
//! - [`Size`] - Width and height, each a [`Length`]
//! - [`PixelSize`] - Whole-pixel dimensions used when resampling raster images
//!
//! # Coordinate System
//!
//! Easel uses the SVG coordinate system:
//!
//! ```text
//!   (0,0) ────────► +X
//!     │
//!     │
//!     ▼
//!    +Y
//! ```
//!
//! Positions are expressed in user units. Sizes carry their unit through to
//! the serialized document, so `"1756px"` stays `1756px` and a bare `1244`
//! stays bare.

use std::{fmt, str::FromStr};

use serde::Deserialize;
use thiserror::Error;

/// Errors raised while parsing or converting lengths.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("invalid length `{0}`")]
    InvalidLength(String),

    #[error("length `{0}` cannot be converted to whole pixels")]
    NotPixels(Length),
}

/// A 2D point in canvas user units.
///
/// # Examples
///
/// ```
/// # use easel_core::geometry::Point;
/// let p = Point::new(10.0, 20.0);
/// let moved = p.offset(0.0, 5.0);
/// assert_eq!(moved.y(), 25.0);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "(f32, f32)")]
pub struct Point {
    x: f32,
    y: f32,
}

impl Point {
    /// Creates a new point with the specified coordinates
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the x-coordinate of the point
    pub fn x(self) -> f32 {
        self.x
    }

    /// Returns the y-coordinate of the point
    pub fn y(self) -> f32 {
        self.y
    }

    /// Returns a new point moved by `dx` and `dy`
    pub fn offset(self, dx: f32, dy: f32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(f32, f32)> for Point {
    fn from((x, y): (f32, f32)) -> Self {
        Self::new(x, y)
    }
}

/// Unit suffix of a [`Length`].
///
/// [`Unit::User`] has no suffix and renders as a bare number; SVG treats it
/// as pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    #[default]
    User,
    Px,
    Pt,
    Pc,
    Mm,
    Cm,
    In,
    Em,
    Ex,
    Percent,
}

impl Unit {
    /// Returns the suffix written after the number.
    pub fn suffix(self) -> &'static str {
        match self {
            Self::User => "",
            Self::Px => "px",
            Self::Pt => "pt",
            Self::Pc => "pc",
            Self::Mm => "mm",
            Self::Cm => "cm",
            Self::In => "in",
            Self::Em => "em",
            Self::Ex => "ex",
            Self::Percent => "%",
        }
    }

    /// Returns true for the units that map one-to-one onto pixels.
    pub fn is_pixel(self) -> bool {
        matches!(self, Self::User | Self::Px)
    }

    fn from_suffix(suffix: &str) -> Option<Self> {
        let unit = match suffix.to_ascii_lowercase().as_str() {
            "" => Self::User,
            "px" => Self::Px,
            "pt" => Self::Pt,
            "pc" => Self::Pc,
            "mm" => Self::Mm,
            "cm" => Self::Cm,
            "in" => Self::In,
            "em" => Self::Em,
            "ex" => Self::Ex,
            "%" => Self::Percent,
            _ => return None,
        };
        Some(unit)
    }
}

/// A finite number with a unit, as accepted by SVG `width`/`height`
/// attributes.
///
/// # Examples
///
/// ```
/// # use easel_core::geometry::{Length, Unit};
/// let height: Length = "1756px".parse().unwrap();
/// assert_eq!(height.value(), 1756.0);
/// assert_eq!(height.unit(), Unit::Px);
/// assert_eq!(height.to_string(), "1756px");
/// assert_eq!(height.to_pixels().unwrap(), 1756);
///
/// let width: Length = "10mm".parse().unwrap();
/// assert!(width.to_pixels().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(try_from = "LengthRepr")]
pub struct Length {
    value: f32,
    unit: Unit,
}

impl Length {
    /// Creates a length in user units.
    pub fn new(value: f32) -> Self {
        Self {
            value,
            unit: Unit::User,
        }
    }

    /// Creates a length in pixels, rendered with a `px` suffix.
    pub fn px(value: f32) -> Self {
        Self::with_unit(value, Unit::Px)
    }

    /// Creates a length with an explicit unit.
    pub fn with_unit(value: f32, unit: Unit) -> Self {
        Self { value, unit }
    }

    pub fn value(self) -> f32 {
        self.value
    }

    pub fn unit(self) -> Unit {
        self.unit
    }

    /// Converts the length to a whole pixel count.
    ///
    /// Only user units and `px` convert; the value is rounded to the nearest
    /// integer.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotPixels`] for other units and for negative
    /// or non-finite values.
    pub fn to_pixels(self) -> Result<u32, GeometryError> {
        if !self.unit.is_pixel() || !self.value.is_finite() || self.value < 0.0 {
            return Err(GeometryError::NotPixels(self));
        }
        Ok(self.value.round() as u32)
    }
}

impl Default for Length {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl From<f32> for Length {
    fn from(value: f32) -> Self {
        Self::new(value)
    }
}

impl From<u32> for Length {
    fn from(value: u32) -> Self {
        Self::new(value as f32)
    }
}

impl FromStr for Length {
    type Err = GeometryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.trim_end_matches(|c: char| c.is_ascii_alphabetic() || c == '%');
        let suffix = &trimmed[number.len()..];

        let unit = Unit::from_suffix(suffix).ok_or_else(|| GeometryError::InvalidLength(s.to_string()))?;
        let value = number
            .trim()
            .parse::<f32>()
            .ok()
            .filter(|value| value.is_finite())
            .ok_or_else(|| GeometryError::InvalidLength(s.to_string()))?;

        Ok(Self { value, unit })
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.suffix())
    }
}

impl From<Length> for svg::node::Value {
    fn from(length: Length) -> Self {
        Self::from(length.to_string())
    }
}

/// Serialized form of a [`Length`]: either a bare number or a string with a
/// unit suffix.
#[derive(Deserialize)]
#[serde(untagged)]
enum LengthRepr {
    Number(f32),
    Text(String),
}

impl TryFrom<LengthRepr> for Length {
    type Error = GeometryError;

    fn try_from(repr: LengthRepr) -> Result<Self, Self::Error> {
        match repr {
            LengthRepr::Number(value) if value.is_finite() => Ok(Self::new(value)),
            LengthRepr::Number(value) => Err(GeometryError::InvalidLength(value.to_string())),
            LengthRepr::Text(text) => text.parse(),
        }
    }
}

/// Width and height of a canvas or element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(from = "(Length, Length)")]
pub struct Size {
    width: Length,
    height: Length,
}

impl Size {
    pub fn new(width: impl Into<Length>, height: impl Into<Length>) -> Self {
        Self {
            width: width.into(),
            height: height.into(),
        }
    }

    /// Returns the width dimension of this size
    pub fn width(self) -> Length {
        self.width
    }

    /// Returns the height dimension of this size
    pub fn height(self) -> Length {
        self.height
    }

    /// Converts both dimensions to whole pixels.
    ///
    /// # Errors
    ///
    /// Returns [`GeometryError::NotPixels`] if either dimension does not
    /// convert (see [`Length::to_pixels`]).
    pub fn to_pixels(self) -> Result<PixelSize, GeometryError> {
        Ok(PixelSize::new(
            self.width.to_pixels()?,
            self.height.to_pixels()?,
        ))
    }
}

impl From<(Length, Length)> for Size {
    fn from((width, height): (Length, Length)) -> Self {
        Self { width, height }
    }
}

/// Raster dimensions in whole pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct PixelSize {
    width: u32,
    height: u32,
}

impl PixelSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn width(self) -> u32 {
        self.width
    }

    pub fn height(self) -> u32 {
        self.height
    }

    /// Checks if either dimension is zero
    pub fn is_empty(self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for PixelSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}
