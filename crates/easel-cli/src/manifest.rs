//! Composition manifests.
//!
//! A manifest is a TOML file listing drawings and the elements placed on
//! each, in paint order:
//!
//! ```toml
//! [[drawing]]
//! id = "out/cover.svg"
//! size = [1244, "1756px"]
//!
//! [[drawing.element]]
//! kind = "rectangle"
//! position = [100, 180]
//! size = [1044, 400]
//! fill = "light_blue"
//! stroke = "dark_blue"
//! stroke_width = 3
//!
//! [[drawing.element]]
//! kind = "wrapped_text"
//! position = [130, 230]
//! content = "A paragraph long enough to need wrapping."
//! width_limit_chars = 60
//! ```
//!
//! Color fields accept a palette name or a CSS color. Drawings without a
//! `size` use the configured default canvas.

use std::{fs, path::PathBuf};

use log::{debug, info};
use serde::Deserialize;

use easel::{
    DrawingRegistry, EaselError,
    color::Palette,
    draw::{ShapeStyle, TextStyle, WrapOptions},
    geometry::{Length, Point, Size},
    raster::{ImageCodec, RasterCodec},
};

/// A parsed manifest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Manifest {
    #[serde(default, rename = "drawing")]
    drawings: Vec<DrawingSpec>,
}

impl Manifest {
    /// Parses manifest text.
    ///
    /// # Errors
    ///
    /// Returns [`EaselError::Config`] if the text is not a valid manifest.
    pub fn parse(source: &str) -> Result<Self, EaselError> {
        toml::from_str(source).map_err(|err| EaselError::Config(format!("manifest: {err}")))
    }

    pub fn drawings(&self) -> &[DrawingSpec] {
        &self.drawings
    }

    /// Creates every drawing in `registry` and appends its elements.
    pub fn apply(&self, registry: &mut DrawingRegistry) -> Result<(), EaselError> {
        for drawing in &self.drawings {
            match drawing.size {
                Some(size) => registry.create(drawing.id.as_str(), size)?,
                None => registry.create_default(drawing.id.as_str())?,
            }

            for element in &drawing.elements {
                element.apply(registry, &drawing.id)?;
            }

            info!(id = drawing.id.as_str(), elements = drawing.elements.len(); "Drawing composed");
        }
        Ok(())
    }
}

/// One `[[drawing]]` table.
#[derive(Debug, Clone, Deserialize)]
pub struct DrawingSpec {
    id: String,
    #[serde(default)]
    size: Option<Size>,
    #[serde(default, rename = "element")]
    elements: Vec<ElementSpec>,
}

impl DrawingSpec {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn elements(&self) -> &[ElementSpec] {
        &self.elements
    }
}

/// One `[[drawing.element]]` table, tagged by `kind`.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ElementSpec {
    Rectangle {
        position: Point,
        size: Size,
        #[serde(flatten)]
        style: ShapeSpec,
    },
    Circle {
        center: Point,
        radius: Length,
        #[serde(flatten)]
        style: ShapeSpec,
    },
    LinkedImage {
        position: Point,
        size: Size,
        href: String,
    },
    EmbeddedImage {
        position: Point,
        size: Size,
        path: PathBuf,
        #[serde(default)]
        scaled: bool,
    },
    /// An image decoded into memory and embedded as PNG.
    Raster {
        position: Point,
        size: Size,
        path: PathBuf,
        preserve_aspect: Option<bool>,
        quality_factor: Option<f32>,
    },
    Text {
        position: Point,
        content: String,
        #[serde(flatten)]
        style: TextSpec,
    },
    WrappedText {
        position: Point,
        content: String,
        width_limit_chars: Option<usize>,
        line_height: Option<f32>,
        #[serde(flatten)]
        style: TextSpec,
    },
}

impl ElementSpec {
    fn apply(&self, registry: &mut DrawingRegistry, id: &str) -> Result<(), EaselError> {
        match self {
            Self::Rectangle {
                position,
                size,
                style,
            } => {
                let style = style.resolve(registry.palette())?;
                registry.add_rectangle(id, *position, *size, style)
            }
            Self::Circle {
                center,
                radius,
                style,
            } => {
                let style = style.resolve(registry.palette())?;
                registry.add_circle(id, *center, *radius, style)
            }
            Self::LinkedImage {
                position,
                size,
                href,
            } => registry.link_image(id, *position, *size, href),
            Self::EmbeddedImage {
                position,
                size,
                path,
                scaled: false,
            } => registry.embed_image(id, *position, *size, path),
            Self::EmbeddedImage {
                position,
                size,
                path,
                scaled: true,
            } => registry.embed_image_scaled(id, *position, *size, path),
            Self::Raster {
                position,
                size,
                path,
                preserve_aspect,
                quality_factor,
            } => {
                debug!(path = path.display().to_string(); "Decoding raster source");
                let image = ImageCodec::new().decode(&fs::read(path)?)?.into_image();
                if preserve_aspect.is_none() && quality_factor.is_none() {
                    return registry.embed_raw_image(id, *position, *size, &image);
                }
                registry.embed_raw_image_scaled(
                    id,
                    *position,
                    *size,
                    &image,
                    preserve_aspect.unwrap_or(false),
                    quality_factor.unwrap_or(1.0),
                )
            }
            Self::Text {
                position,
                content,
                style,
            } => {
                let style = style.resolve(registry.palette())?;
                registry.add_text(id, *position, content, style)
            }
            Self::WrappedText {
                position,
                content,
                width_limit_chars,
                line_height,
                style,
            } => {
                let style = style.resolve(registry.palette())?;
                let defaults = WrapOptions::default();
                let wrap = WrapOptions::new(
                    width_limit_chars.unwrap_or(defaults.width_limit_chars),
                    line_height.unwrap_or(defaults.line_height),
                );
                registry.add_wrapped_text(id, *position, content, style, wrap)
            }
        }
    }
}

/// Shape paint fields shared by rectangles and circles.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ShapeSpec {
    fill: Option<String>,
    stroke: Option<String>,
    stroke_width: Option<f32>,
}

impl ShapeSpec {
    fn resolve(&self, palette: &Palette) -> Result<ShapeStyle, EaselError> {
        let mut style = ShapeStyle::new();
        if let Some(fill) = &self.fill {
            style.set_fill(palette.resolve(fill)?);
        }
        if let Some(stroke) = &self.stroke {
            style.set_stroke(palette.resolve(stroke)?);
        }
        style.set_stroke_width(self.stroke_width);
        Ok(style)
    }
}

/// Text style fields. Unset fields keep the [`TextStyle`] defaults.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextSpec {
    font_size: Option<Length>,
    font_family: Option<String>,
    fill: Option<String>,
    stroke: Option<String>,
    stroke_width: Option<f32>,
}

impl TextSpec {
    fn resolve(&self, palette: &Palette) -> Result<TextStyle, EaselError> {
        let mut style = TextStyle::new();
        if let Some(size) = self.font_size {
            style = style.with_font_size(size);
        }
        if let Some(family) = &self.font_family {
            style = style.with_font_family(family.as_str());
        }
        if let Some(fill) = &self.fill {
            style = style.with_fill(palette.resolve(fill)?);
        }
        if let Some(stroke) = &self.stroke {
            style = style.with_stroke(palette.resolve(stroke)?);
        }
        if let Some(width) = self.stroke_width {
            style = style.with_stroke_width(width);
        }
        Ok(style)
    }
}

#[cfg(test)]
mod tests {
    use easel::{color::Paint, draw::Element};

    use super::*;

    #[test]
    fn test_parse_empty_manifest() {
        let manifest = Manifest::parse("").unwrap();
        assert!(manifest.drawings().is_empty());
    }

    #[test]
    fn test_parse_elements_in_order() {
        let source = r#"
            [[drawing]]
            id = "a.svg"
            size = [200, "100px"]

            [[drawing.element]]
            kind = "rectangle"
            position = [1, 2]
            size = [3, 4]
            fill = "light_blue"

            [[drawing.element]]
            kind = "circle"
            center = [10.5, 10]
            radius = "4mm"

            [[drawing.element]]
            kind = "embedded_image"
            position = [0, 0]
            size = [10, 10]
            path = "logo.png"
            scaled = true

            [[drawing.element]]
            kind = "wrapped_text"
            position = [0, 40]
            content = "hello"
            font_size = "12px"
        "#;
        let manifest = Manifest::parse(source).unwrap();

        let drawing = &manifest.drawings()[0];
        assert_eq!(drawing.id(), "a.svg");
        let kinds: Vec<_> = drawing
            .elements()
            .iter()
            .map(|element| match element {
                ElementSpec::Rectangle { .. } => "rectangle",
                ElementSpec::Circle { .. } => "circle",
                ElementSpec::EmbeddedImage { scaled: true, .. } => "scaled",
                ElementSpec::WrappedText { .. } => "wrapped_text",
                _ => "other",
            })
            .collect();
        assert_eq!(kinds, vec!["rectangle", "circle", "scaled", "wrapped_text"]);
    }

    #[test]
    fn test_unknown_kind_is_rejected() {
        let source = r#"
            [[drawing]]
            id = "a.svg"

            [[drawing.element]]
            kind = "hexagon"
        "#;
        assert!(matches!(Manifest::parse(source), Err(EaselError::Config(_))));
    }

    #[test]
    fn test_apply_resolves_palette_names() {
        let source = r##"
            [[drawing]]
            id = "a.svg"

            [[drawing.element]]
            kind = "rectangle"
            position = [0, 0]
            size = [5, 5]
            fill = "dark_blue"
            stroke = "#ff0000"
        "##;
        let mut registry = DrawingRegistry::default();
        Manifest::parse(source).unwrap().apply(&mut registry).unwrap();

        let drawing = registry.drawing("a.svg").unwrap();
        let Element::Rectangle(rect) = &drawing.elements()[0] else {
            panic!("expected a rectangle");
        };
        assert_eq!(*rect.style().fill(), Paint::new("rgb(0, 96, 169)").unwrap());
        assert_eq!(*rect.style().stroke(), Paint::new("#ff0000").unwrap());
        assert_eq!(
            registry.get_canvas_size("a.svg").unwrap().height().to_string(),
            "1756px"
        );
    }

    #[test]
    fn test_apply_rejects_bad_color() {
        let source = r#"
            [[drawing]]
            id = "a.svg"

            [[drawing.element]]
            kind = "text"
            position = [0, 0]
            content = "x"
            fill = "not_a_color"
        "#;
        let mut registry = DrawingRegistry::default();
        let err = Manifest::parse(source)
            .unwrap()
            .apply(&mut registry)
            .unwrap_err();
        assert!(matches!(err, EaselError::Color(_)));
    }
}
