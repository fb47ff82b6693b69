//! Configuration types for the drawing registry.
//!
//! All types implement [`serde::Deserialize`] so they can be loaded from
//! external sources such as a TOML file. Every section is optional.
//!
//! # Overview
//!
//! - [`AppConfig`] - Top-level configuration combining all sections.
//! - [`CanvasConfig`] - Default canvas size for [`DrawingRegistry::create_default`].
//! - [`RegistryConfig`] - How mutators treat unknown drawing ids.
//! - Palette - Extra named colors added to the standard palette.
//!
//! # Example
//!
//! ```
//! # use easel::config::{AppConfig, UnknownDocumentPolicy};
//! let config = AppConfig::default();
//! assert_eq!(config.registry().unknown_document(), UnknownDocumentPolicy::Ignore);
//! assert_eq!(config.canvas().size().height().to_string(), "1756px");
//! ```
//!
//! [`DrawingRegistry::create_default`]: crate::DrawingRegistry::create_default

use std::collections::BTreeMap;

use serde::Deserialize;

use easel_core::geometry::{Length, Size};

/// Top-level configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Canvas configuration section.
    #[serde(default)]
    canvas: CanvasConfig,

    /// Registry behavior section.
    #[serde(default)]
    registry: RegistryConfig,

    /// Extra palette entries, name to CSS color.
    #[serde(default)]
    palette: BTreeMap<String, String>,
}

impl AppConfig {
    /// Creates a new [`AppConfig`] from its sections.
    ///
    /// # Arguments
    ///
    /// * `canvas` - Default canvas settings.
    /// * `registry` - Registry behavior settings.
    /// * `palette` - Extra named colors.
    pub fn new(
        canvas: CanvasConfig,
        registry: RegistryConfig,
        palette: BTreeMap<String, String>,
    ) -> Self {
        Self {
            canvas,
            registry,
            palette,
        }
    }

    /// Returns the canvas configuration.
    pub fn canvas(&self) -> &CanvasConfig {
        &self.canvas
    }

    /// Returns the registry configuration.
    pub fn registry(&self) -> &RegistryConfig {
        &self.registry
    }

    /// Returns the extra palette entries.
    pub fn palette(&self) -> &BTreeMap<String, String> {
        &self.palette
    }
}

/// Default canvas dimensions.
///
/// Defaults to `1244` by `1756px`, an A4 page at 150 DPI.
#[derive(Debug, Clone, Deserialize)]
pub struct CanvasConfig {
    #[serde(default = "default_canvas_width")]
    width: Length,

    #[serde(default = "default_canvas_height")]
    height: Length,
}

impl CanvasConfig {
    pub fn new(width: Length, height: Length) -> Self {
        Self { width, height }
    }

    /// Returns the default canvas [`Size`].
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: default_canvas_width(),
            height: default_canvas_height(),
        }
    }
}

fn default_canvas_width() -> Length {
    Length::new(1244.0)
}

fn default_canvas_height() -> Length {
    Length::px(1756.0)
}

/// What a mutator does when handed an id with no drawing behind it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UnknownDocumentPolicy {
    /// Log a warning and do nothing.
    #[default]
    Ignore,
    /// Fail with [`EaselError::UnknownDocument`](crate::EaselError::UnknownDocument).
    Error,
}

/// Registry behavior settings.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistryConfig {
    #[serde(default)]
    unknown_document: UnknownDocumentPolicy,
}

impl RegistryConfig {
    pub fn new(unknown_document: UnknownDocumentPolicy) -> Self {
        Self { unknown_document }
    }

    /// Returns the [`UnknownDocumentPolicy`] applied by mutators.
    pub fn unknown_document(&self) -> UnknownDocumentPolicy {
        self.unknown_document
    }
}
