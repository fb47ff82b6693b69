//! Color handling for Easel drawings.
//!
//! - [`Paint`] - A fill or stroke value: `none` or a CSS color string
//! - [`Palette`] - A read-only table of symbolic color names
//!
//! CSS colors are validated with the `color` crate but serialized exactly as
//! written, so `rgb(0, 96, 169)` reaches the SVG output unchanged.

use std::{collections::HashMap, fmt, str::FromStr};

use color::DynamicColor;
use log::warn;
use serde::Deserialize;
use thiserror::Error;

/// The standard palette entries available in every [`Palette`].
pub const STANDARD_COLORS: &[(&str, &str)] = &[
    ("light_blue", "rgb(125, 206, 237)"),
    ("dark_blue", "rgb(0, 96, 169)"),
    ("dark_blue_2", "rgb(0, 51, 204)"),
    ("black", "rgb(0, 0, 0)"),
    ("white", "rgb(255, 255, 255)"),
];

/// A CSS color string that failed to parse.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid color `{color}`: {reason}")]
pub struct ColorError {
    color: String,
    reason: String,
}

impl ColorError {
    /// Returns the rejected color string.
    pub fn color(&self) -> &str {
        &self.color
    }
}

/// A palette lookup for a name that has no entry.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown color `{0}`")]
pub struct UnknownColorError(pub String);

/// Fill or stroke paint for an element.
///
/// # Examples
///
/// ```
/// # use easel_core::color::Paint;
/// let fill = Paint::new("rgb(0, 96, 169)").unwrap();
/// assert_eq!(fill.to_string(), "rgb(0, 96, 169)");
///
/// assert_eq!(Paint::new("none").unwrap(), Paint::None);
/// assert!(Paint::new("not-a-color").is_err());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Deserialize)]
#[serde(try_from = "String")]
pub enum Paint {
    #[default]
    None,
    Color(String),
}

impl Paint {
    /// Parses a paint value: `none` or any CSS color accepted by the `color`
    /// crate (`"#ff0000"`, `"rgb(255, 0, 0)"`, `"red"`, ...).
    pub fn new(value: &str) -> Result<Self, ColorError> {
        let value = value.trim();
        if value.eq_ignore_ascii_case("none") {
            return Ok(Self::None);
        }

        DynamicColor::from_str(value).map_err(|err| ColorError {
            color: value.to_string(),
            reason: err.to_string(),
        })?;

        Ok(Self::Color(value.to_string()))
    }

    /// The `black` paint.
    pub fn black() -> Self {
        Self::Color("black".to_string())
    }

    /// Returns true if this paint draws nothing.
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }
}

impl FromStr for Paint {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for Paint {
    type Error = ColorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl fmt::Display for Paint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::Color(color) => f.write_str(color),
        }
    }
}

impl From<&Paint> for svg::node::Value {
    fn from(paint: &Paint) -> Self {
        Self::from(paint.to_string())
    }
}

/// Read-only mapping from symbolic color names to RGB color strings.
///
/// Every palette contains [`STANDARD_COLORS`]. Extra entries may be supplied
/// once, at construction.
///
/// # Examples
///
/// ```
/// # use easel_core::color::Palette;
/// let palette = Palette::standard();
/// assert_eq!(palette.lookup("dark_blue").unwrap(), "rgb(0, 96, 169)");
/// assert!(palette.lookup("no_such_color").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct Palette {
    entries: HashMap<String, String>,
}

impl Palette {
    /// Creates a palette holding only the standard entries.
    pub fn standard() -> Self {
        let entries = STANDARD_COLORS
            .iter()
            .map(|(name, color)| (name.to_string(), color.to_string()))
            .collect();
        Self { entries }
    }

    /// Creates a palette with the standard entries plus `extra`.
    ///
    /// An extra entry whose name collides with a standard entry is ignored
    /// with a warning.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError`] if an extra entry is not a valid CSS color.
    pub fn with_entries<I, K, V>(extra: I) -> Result<Self, ColorError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut palette = Self::standard();
        for (name, color) in extra {
            let name = name.into();
            let color = color.into();
            if palette.entries.contains_key(&name) {
                warn!(name = name.as_str(); "Ignoring palette entry that shadows a standard color");
                continue;
            }
            Paint::new(&color)?;
            palette.entries.insert(name, color);
        }
        Ok(palette)
    }

    /// Looks up the color string registered under `name`.
    pub fn lookup(&self, name: &str) -> Result<&str, UnknownColorError> {
        self.entries
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| UnknownColorError(name.to_string()))
    }

    /// Resolves a paint specification: a palette name if one matches,
    /// otherwise a literal paint value.
    pub fn resolve(&self, spec: &str) -> Result<Paint, ColorError> {
        match self.lookup(spec) {
            Ok(color) => Paint::new(color),
            Err(_) => Paint::new(spec),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::standard()
    }
}
